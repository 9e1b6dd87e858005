use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::validate::structure_error;

pub const DEFAULT_BRANCH_NAME_TEMPLATE: &str = "feature/${System.Id}-${System.Title}";
pub const DEFAULT_PULL_REQUEST_NAME_TEMPLATE: &str =
    "[${System.WorkItemType} ${System.Id}] ${System.Title}";
pub const REPLACEMENT_OPTIONS: &[char] = &['_', '-'];

const SETTINGS_FILE: &str = "settings.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BranchNameTemplate {
    pub is_active: bool,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkItemStateSetting {
    pub is_active: bool,
    pub value: String,
}

/// Naming policy read once per session and never mutated by name generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SettingsDocument {
    pub id: String,
    pub default_branch_name_template: String,
    pub branch_name_templates: BTreeMap<String, BranchNameTemplate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch_name_max_length: Option<usize>,
    pub non_alphanumeric_characters_replacement: char,
    pub lowercase_branch_name: bool,
    pub update_work_item_state: bool,
    pub work_item_state: BTreeMap<String, WorkItemStateSetting>,
    pub default_pull_request_name_template: String,
    pub create_pull_request_by_default: bool,
    pub create_pull_requests_as_drafts: bool,
    pub default_repository_name: String,
}

impl Default for SettingsDocument {
    fn default() -> Self {
        Self {
            id: String::new(),
            default_branch_name_template: DEFAULT_BRANCH_NAME_TEMPLATE.to_string(),
            branch_name_templates: BTreeMap::new(),
            branch_name_max_length: None,
            non_alphanumeric_characters_replacement: '_',
            lowercase_branch_name: false,
            update_work_item_state: false,
            work_item_state: BTreeMap::new(),
            default_pull_request_name_template: DEFAULT_PULL_REQUEST_NAME_TEMPLATE.to_string(),
            create_pull_request_by_default: false,
            create_pull_requests_as_drafts: false,
            default_repository_name: String::new(),
        }
    }
}

impl SettingsDocument {
    /// Override template for `type_name`, only when it is marked active.
    pub fn override_template(&self, type_name: &str) -> Option<&str> {
        self.branch_name_templates
            .get(type_name)
            .filter(|t| t.is_active)
            .map(|t| t.value.as_str())
    }

    /// State a work item of `type_name` should move to once its branch exists.
    pub fn target_state(&self, type_name: &str) -> Option<&str> {
        if !self.update_work_item_state {
            return None;
        }
        self.work_item_state
            .get(type_name)
            .filter(|s| s.is_active && !s.value.is_empty())
            .map(|s| s.value.as_str())
    }

    pub fn check(&self) -> Result<()> {
        let c = self.non_alphanumeric_characters_replacement;
        if !REPLACEMENT_OPTIONS.contains(&c) {
            bail!("nonAlphanumericCharactersReplacement must be '_' or '-', got {c:?}");
        }
        if self.branch_name_max_length == Some(0) {
            bail!("branchNameMaxLength must be greater than 0");
        }
        Ok(())
    }

    /// Every template name generation can pick, labelled by its settings key.
    pub fn active_templates(&self) -> Vec<(String, &str)> {
        let mut out = vec![
            (
                "defaultBranchNameTemplate".to_string(),
                self.default_branch_name_template.as_str(),
            ),
            (
                "defaultPullRequestNameTemplate".to_string(),
                self.default_pull_request_name_template.as_str(),
            ),
        ];
        for (type_name, t) in &self.branch_name_templates {
            if t.is_active {
                out.push((format!("branchNameTemplates.{type_name}"), t.value.as_str()));
            }
        }
        out
    }

    /// Refuses malformed templates before any name is generated from them.
    ///
    /// Unknown field names pass; they resolve to empty text at generation time.
    pub fn check_templates(&self) -> Result<()> {
        let errors: Vec<String> = self
            .active_templates()
            .into_iter()
            .filter_map(|(key, t)| structure_error(t).map(|msg| format!("{key}: {msg}")))
            .collect();
        if !errors.is_empty() {
            bail!("Stored template rejected: {}", errors.join(" "));
        }
        Ok(())
    }
}

#[derive(Debug)]
pub struct ForceRequired {
    pub target: PathBuf,
}

impl fmt::Display for ForceRequired {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Target exists: {}", self.target.display())
    }
}

impl std::error::Error for ForceRequired {}

fn wib_home_dir() -> Option<PathBuf> {
    if let Some(v) = std::env::var_os("WIB_HOME") {
        return Some(PathBuf::from(v));
    }
    let home = std::env::var_os("HOME")?;
    Some(PathBuf::from(home).join(".wib"))
}

/// Explicit path if given, else `$WIB_HOME/settings.json`, else `~/.wib/settings.json`.
pub fn settings_path(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(p) = explicit {
        return Ok(p.to_path_buf());
    }
    let home = wib_home_dir().ok_or_else(|| anyhow!("HOME is not set; pass --settings"))?;
    Ok(home.join(SETTINGS_FILE))
}

fn is_toml(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some("toml")
}

/// Reads the settings document; a missing file means defaults.
pub fn load_settings(path: &Path) -> Result<SettingsDocument> {
    if !path.exists() {
        log::debug!("no settings at {}, using defaults", path.display());
        return Ok(SettingsDocument::default());
    }
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let doc: SettingsDocument = if is_toml(path) {
        toml::from_str(&text).with_context(|| format!("Invalid settings: {}", path.display()))?
    } else {
        serde_json::from_str(&text)
            .with_context(|| format!("Invalid settings: {}", path.display()))?
    };
    doc.check()
        .with_context(|| format!("Invalid settings: {}", path.display()))?;
    log::debug!("loaded settings from {}", path.display());
    Ok(doc)
}

pub fn save_settings(path: &Path, doc: &SettingsDocument) -> Result<()> {
    doc.check()?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
    }
    let text = if is_toml(path) {
        toml::to_string_pretty(doc)?
    } else {
        serde_json::to_string_pretty(doc)? + "\n"
    };
    std::fs::write(path, text).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

/// Writes the default document, refusing to overwrite unless `force`.
pub fn init_settings(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(ForceRequired {
            target: path.to_path_buf(),
        }
        .into());
    }
    save_settings(path, &SettingsDocument::default())
}
