use std::process::Command;

use anyhow::{bail, Context, Result};

pub(crate) fn is_valid_branch_name(name: &str) -> Result<bool> {
    let status = Command::new("git")
        .args(["check-ref-format", "--branch", name])
        .stdout(std::process::Stdio::null())
        .stderr(std::process::Stdio::null())
        .status()
        .context("Failed to run git check-ref-format --branch")?;
    Ok(status.success())
}

pub(crate) fn ensure_branch_names_valid<'a>(names: impl IntoIterator<Item = &'a str>) -> Result<()> {
    let mut bad = Vec::new();
    for name in names {
        if !is_valid_branch_name(name)? {
            bad.push(name);
        }
    }
    if !bad.is_empty() {
        bail!("Invalid branch name: {}", bad.join(", "));
    }
    Ok(())
}
