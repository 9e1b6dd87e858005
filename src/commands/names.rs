use std::path::Path;

use anyhow::Result;
use serde::Serialize;

use wib_cli::naming::{generate, merge_missing, GeneratedName, NameKind};
use wib_cli::work_item;

use crate::cli::NamesArgs;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct NamesEntry {
    id: u64,
    work_item_type: String,
    branch: GeneratedName,
    pull_request: GeneratedName,
    #[serde(skip_serializing_if = "Option::is_none")]
    target_state: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    missing_fields: Vec<String>,
}

pub(crate) fn cmd_names(settings: Option<&Path>, args: NamesArgs) -> Result<()> {
    let settings = super::load_generation_settings(settings)?;
    let items = work_item::load_work_items(&args.items)?;

    let mut entries = Vec::with_capacity(items.len());
    for item in &items {
        let branch = generate(NameKind::Branch, item, &settings);
        let pull_request = generate(NameKind::PullRequest, item, &settings);
        let mut missing_fields = branch.missing_fields;
        merge_missing(&mut missing_fields, pull_request.missing_fields);
        entries.push(NamesEntry {
            id: item.id,
            work_item_type: item.type_name.clone(),
            branch: branch.name,
            pull_request: pull_request.name,
            target_state: settings.target_state(&item.type_name).map(str::to_string),
            missing_fields,
        });
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    for e in &entries {
        if e.work_item_type.is_empty() {
            println!("#{}", e.id);
        } else {
            println!("#{} ({})", e.id, e.work_item_type);
        }
        print_name("Branch:      ", &e.branch);
        print_name("PullRequest: ", &e.pull_request);
        if let Some(state) = &e.target_state {
            println!("  State:       {state}");
        }
    }
    Ok(())
}

fn print_name(label: &str, name: &GeneratedName) {
    if name.prefix.is_empty() {
        println!("  {label}{}", name.body);
    } else {
        println!("  {label}{}  (prefix: {:?})", name.full(), name.prefix);
    }
}
