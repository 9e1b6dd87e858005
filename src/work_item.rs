use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use serde_json::Value;

pub const ID_FIELD: &str = "System.Id";
pub const TITLE_FIELD: &str = "System.Title";
pub const WORK_ITEM_TYPE_FIELD: &str = "System.WorkItemType";

/// Fields every work item carries, used when no other field list is given.
pub const SYSTEM_FIELDS: &[&str] = &[
    ID_FIELD,
    TITLE_FIELD,
    WORK_ITEM_TYPE_FIELD,
    "System.State",
    "System.AreaPath",
    "System.IterationPath",
    "System.TeamProject",
    "System.AssignedTo",
    "System.Tags",
];

/// Field name to already-stringified field value.
pub type FieldMap = BTreeMap<String, String>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkItem {
    pub id: u64,
    pub type_name: String,
    pub fields: FieldMap,
}

impl WorkItem {
    pub fn new(id: u64, type_name: impl Into<String>, fields: FieldMap) -> Self {
        Self {
            id,
            type_name: type_name.into(),
            fields,
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawWorkItem {
    id: u64,
    #[serde(rename = "type", default)]
    type_name: Option<String>,
    #[serde(default)]
    fields: serde_json::Map<String, Value>,
}

/// Text form of a field value; `null` counts as absent.
pub fn stringify_value(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

impl From<RawWorkItem> for WorkItem {
    fn from(raw: RawWorkItem) -> Self {
        let mut fields: FieldMap = raw
            .fields
            .iter()
            .filter_map(|(k, v)| stringify_value(v).map(|s| (k.clone(), s)))
            .collect();
        fields
            .entry(ID_FIELD.to_string())
            .or_insert_with(|| raw.id.to_string());
        let type_name = raw
            .type_name
            .or_else(|| fields.get(WORK_ITEM_TYPE_FIELD).cloned())
            .unwrap_or_default();
        if !type_name.is_empty() {
            fields
                .entry(WORK_ITEM_TYPE_FIELD.to_string())
                .or_insert_with(|| type_name.clone());
        }
        WorkItem {
            id: raw.id,
            type_name,
            fields,
        }
    }
}

pub fn parse_work_items(text: &str) -> Result<Vec<WorkItem>> {
    let raw: Vec<RawWorkItem> = serde_json::from_str(text).context("Invalid work item list")?;
    let mut seen = BTreeSet::new();
    let mut out = Vec::with_capacity(raw.len());
    for r in raw {
        if !seen.insert(r.id) {
            bail!("Duplicate work item id: {}", r.id);
        }
        out.push(WorkItem::from(r));
    }
    Ok(out)
}

pub fn load_work_items(path: &Path) -> Result<Vec<WorkItem>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    parse_work_items(&text).with_context(|| format!("Failed to load {}", path.display()))
}

/// Sorted union of the field names present on `items`.
pub fn known_field_names(items: &[WorkItem]) -> Vec<String> {
    let names: BTreeSet<&String> = items.iter().flat_map(|i| i.fields.keys()).collect();
    names.into_iter().cloned().collect()
}
