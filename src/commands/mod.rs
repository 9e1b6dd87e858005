use std::path::Path;

use anyhow::Result;

use wib_cli::settings::{self as store, SettingsDocument};
use wib_cli::work_item::{self, SYSTEM_FIELDS};

pub(crate) mod create;
pub(crate) mod edit;
pub(crate) mod names;
pub(crate) mod settings;
pub(crate) mod validate;

pub(crate) fn load_settings(explicit: Option<&Path>) -> Result<SettingsDocument> {
    let path = store::settings_path(explicit)?;
    store::load_settings(&path)
}

/// Settings whose templates are fit to generate names from.
pub(crate) fn load_generation_settings(explicit: Option<&Path>) -> Result<SettingsDocument> {
    let doc = load_settings(explicit)?;
    doc.check_templates()?;
    Ok(doc)
}

/// `--field` values plus the fields found in `--items`; built-in system fields when both are empty.
pub(crate) fn known_fields(fields: &[String], items: Option<&Path>) -> Result<Vec<String>> {
    let mut known = fields.to_vec();
    if let Some(path) = items {
        let items = work_item::load_work_items(path)?;
        known.extend(work_item::known_field_names(&items));
    }
    if known.is_empty() {
        known = SYSTEM_FIELDS.iter().map(|s| s.to_string()).collect();
    }
    Ok(known)
}
