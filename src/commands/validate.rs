use anyhow::{bail, Result};

use wib_cli::validate::validate;

use crate::cli::ValidateArgs;

pub(crate) fn cmd_validate(args: ValidateArgs) -> Result<()> {
    let known = super::known_fields(&args.fields, args.items.as_deref())?;
    let result = validate(&args.template, &known);
    if result.is_valid {
        println!("Template is valid.");
        return Ok(());
    }
    for msg in &result.error_messages {
        eprintln!("{msg}");
    }
    bail!("Template validation failed");
}
