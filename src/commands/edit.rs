use std::path::Path;

use anyhow::Result;

use wib_cli::naming::{GeneratedName, NameKind};
use wib_cli::settings::SettingsDocument;

use crate::cli::EditArgs;

pub(crate) fn cmd_edit(settings: Option<&Path>, args: EditArgs) -> Result<()> {
    let kind = NameKind::from(args.kind);
    let settings = if kind.is_restricted() {
        super::load_settings(settings)?
    } else {
        SettingsDocument::default()
    };

    let current = GeneratedName::new(args.prefix, String::new());
    let edited = current.apply_edit(&args.value, kind, &settings);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&edited)?);
    } else {
        println!("{}", edited.body);
    }
    Ok(())
}
