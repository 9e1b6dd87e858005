use std::fmt;
use std::path::Path;

use anyhow::{bail, Result};

use wib_cli::settings::{self as store, BranchNameTemplate};
use wib_cli::validate::validate;

use crate::cli::SetTemplateArgs;

#[derive(Debug)]
pub(crate) struct TemplateRejected {
    pub(crate) messages: Vec<String>,
}

impl fmt::Display for TemplateRejected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Template rejected: {}", self.messages.join(" "))
    }
}

impl std::error::Error for TemplateRejected {}

pub(crate) fn cmd_init(settings: Option<&Path>, force: bool) -> Result<()> {
    let path = store::settings_path(settings)?;
    store::init_settings(&path, force)?;
    println!("Wrote {}", path.display());
    Ok(())
}

pub(crate) fn cmd_show(settings: Option<&Path>) -> Result<()> {
    let doc = super::load_settings(settings)?;
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}

pub(crate) fn cmd_set_template(settings: Option<&Path>, args: SetTemplateArgs) -> Result<()> {
    if args.pull_request && args.type_name.is_some() {
        bail!("Pull request templates have no per-type overrides; drop --type.");
    }
    if args.inactive && args.type_name.is_none() {
        bail!("--inactive only applies to a per-type override (--type).");
    }

    let known = super::known_fields(&args.fields, args.items.as_deref())?;
    let result = validate(&args.template, &known);
    if !result.is_valid {
        return Err(TemplateRejected {
            messages: result.error_messages,
        }
        .into());
    }

    let path = store::settings_path(settings)?;
    let mut doc = store::load_settings(&path)?;
    let what = match (&args.type_name, args.pull_request) {
        (Some(t), _) => {
            doc.branch_name_templates.insert(
                t.clone(),
                BranchNameTemplate {
                    is_active: !args.inactive,
                    value: args.template,
                },
            );
            format!("branch template for {t}")
        }
        (None, true) => {
            doc.default_pull_request_name_template = args.template;
            "default pull request template".to_string()
        }
        (None, false) => {
            doc.default_branch_name_template = args.template;
            "default branch template".to_string()
        }
    };
    store::save_settings(&path, &doc)?;
    log::info!("saved {what} to {}", path.display());
    println!("Updated {what}");
    Ok(())
}
