use std::io::IsTerminal;
use std::process::{Command, Stdio};

use anyhow::{bail, Result};

/// Fails unless `bin --version` runs and exits cleanly.
pub(crate) fn ensure_in_path(bin: &str) -> Result<()> {
    let found = Command::new(bin)
        .arg("--version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .is_ok_and(|s| s.success());
    if !found {
        bail!("{bin} not found in PATH; needed for --check-ref-format");
    }
    Ok(())
}

/// Interactive name editing needs both ends on a terminal.
pub(crate) fn can_prompt() -> bool {
    std::io::stdin().is_terminal() && std::io::stdout().is_terminal()
}
