//! Branch and pull-request name generation for work items.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::reconcile::trim_prefix;
use crate::restrict::enforce;
use crate::settings::SettingsDocument;
use crate::substitute::resolve_parts;
use crate::template::{branch_template, pull_request_template, split_template};
use crate::work_item::WorkItem;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameKind {
    Branch,
    PullRequest,
}

impl NameKind {
    /// Branch bodies go through restriction enforcement; pull-request titles do not.
    pub fn is_restricted(self) -> bool {
        matches!(self, NameKind::Branch)
    }

    fn label(self) -> &'static str {
        match self {
            NameKind::Branch => "branch",
            NameKind::PullRequest => "pull request",
        }
    }
}

/// An immutable prefix and the editable body that follows it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedName {
    pub prefix: String,
    pub body: String,
}

impl GeneratedName {
    pub fn new(prefix: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            body: body.into(),
        }
    }

    pub fn full(&self) -> String {
        format!("{}{}", self.prefix, self.body)
    }

    /// Folds a user-edited full string back into this name.
    ///
    /// The prefix is kept; only what follows the matching overlap becomes the
    /// new body, restricted again for branches.
    pub fn apply_edit(&self, edited: &str, kind: NameKind, settings: &SettingsDocument) -> Self {
        let body = trim_prefix(edited, &self.prefix);
        let body = if kind.is_restricted() {
            enforce(body, settings)
        } else {
            body.to_string()
        };
        Self {
            prefix: self.prefix.clone(),
            body,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generated {
    pub name: GeneratedName,
    /// Referenced fields the work item did not carry; they resolved to "".
    pub missing_fields: Vec<String>,
}

/// Appends names from `more` not already in `into`, keeping first-reference order.
pub fn merge_missing(into: &mut Vec<String>, more: Vec<String>) {
    for name in more {
        if !into.contains(&name) {
            into.push(name);
        }
    }
}

pub fn generate(kind: NameKind, item: &WorkItem, settings: &SettingsDocument) -> Generated {
    let template = match kind {
        NameKind::Branch => branch_template(&item.type_name, settings),
        NameKind::PullRequest => pull_request_template(settings),
    };
    let resolved = resolve_parts(split_template(template), &item.fields);
    if !resolved.missing.is_empty() {
        log::warn!(
            "work item {}: {} name references missing fields {}; substituted empty text",
            item.id,
            kind.label(),
            resolved.missing.join(", ")
        );
    }
    let body = if kind.is_restricted() {
        enforce(&resolved.body, settings)
    } else {
        resolved.body
    };
    Generated {
        name: GeneratedName::new(resolved.prefix, body),
        missing_fields: resolved.missing,
    }
}

/// One independent name per work item, keyed by id.
pub fn generate_batch(
    kind: NameKind,
    items: &[WorkItem],
    settings: &SettingsDocument,
) -> BTreeMap<u64, Generated> {
    items
        .iter()
        .map(|item| (item.id, generate(kind, item, settings)))
        .collect()
}
