use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::naming::GeneratedName;

/// Full ref for a branch name.
pub fn ref_name(branch_name: &str) -> String {
    format!("refs/heads/{branch_name}")
}

/// Values chosen on the "create" action, handed back to the host.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSelection {
    pub repository_id: String,
    pub source_branch_name: String,
    pub branch_names: BTreeMap<u64, GeneratedName>,
    pub create_pull_requests: bool,
    pub create_pull_requests_as_drafts: bool,
    pub pull_request_names: BTreeMap<u64, GeneratedName>,
}

impl CreateSelection {
    pub fn source_ref_name(&self) -> String {
        ref_name(&self.source_branch_name)
    }

    pub fn branch_ref_name(&self, work_item_id: u64) -> Option<String> {
        self.branch_names
            .get(&work_item_id)
            .map(|n| ref_name(&n.full()))
    }
}
