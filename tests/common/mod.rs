#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;

pub const ITEMS: &str = r#"[
  {
    "id": 42,
    "fields": {
      "System.WorkItemType": "Bug",
      "System.Title": "Fix login bug"
    }
  },
  {
    "id": 7,
    "type": "Task",
    "fields": {
      "System.Title": "Crash on load",
      "Custom.Team": "Payments"
    }
  }
]"#;

pub fn write_items(dir: &Path) -> PathBuf {
    let path = dir.join("items.json");
    fs::write(&path, ITEMS).unwrap();
    path
}

pub fn write_settings(dir: &Path, json: &str) -> PathBuf {
    let path = dir.join("settings.json");
    fs::write(&path, json).unwrap();
    path
}

/// `wib` isolated from the caller's real settings.
pub fn wib(home: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("wib"));
    cmd.env("WIB_HOME", home).env_remove("WIB_SETTINGS");
    cmd
}
