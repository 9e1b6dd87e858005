use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{bail, Context, Result};
use dialoguer::{theme::ColorfulTheme, Input};

use wib_cli::naming::{generate_batch, GeneratedName, NameKind};
use wib_cli::selection::CreateSelection;
use wib_cli::settings::SettingsDocument;
use wib_cli::work_item::{self, WorkItem};

use crate::cli::CreateArgs;
use crate::exec;
use crate::git;

pub(crate) fn cmd_create(settings: Option<&Path>, args: CreateArgs) -> Result<()> {
    let settings = super::load_generation_settings(settings)?;
    let items = work_item::load_work_items(&args.items)?;
    if items.is_empty() {
        bail!("No work items in {}", args.items.display());
    }

    let repository_id = match args.repository {
        Some(r) => r,
        None if !settings.default_repository_name.is_empty() => {
            settings.default_repository_name.clone()
        }
        None => bail!("No repository given and no defaultRepositoryName in settings."),
    };
    if args.source_branch.trim().is_empty() {
        bail!("--source-branch must not be empty");
    }

    let create_pull_requests = !args.no_pull_requests
        && (args.pull_requests || args.draft || settings.create_pull_request_by_default);
    let create_pull_requests_as_drafts =
        create_pull_requests && (args.draft || settings.create_pull_requests_as_drafts);

    if args.interactive && !exec::can_prompt() {
        bail!("--interactive requires a TTY");
    }

    let mut branch_names = initial_names(NameKind::Branch, &items, &settings);
    apply_edits(&mut branch_names, &args.branch_names, NameKind::Branch, &settings)?;

    let mut pull_request_names = BTreeMap::new();
    if create_pull_requests {
        pull_request_names = initial_names(NameKind::PullRequest, &items, &settings);
        apply_edits(
            &mut pull_request_names,
            &args.pr_names,
            NameKind::PullRequest,
            &settings,
        )?;
    } else if !args.pr_names.is_empty() {
        log::warn!("--pr-name ignored: pull requests are not being created");
    }

    if args.interactive {
        prompt_edits(&mut branch_names, NameKind::Branch, &settings)?;
        prompt_edits(&mut pull_request_names, NameKind::PullRequest, &settings)?;
    }

    if args.check_ref_format {
        exec::ensure_in_path("git")?;
        let full: Vec<String> = branch_names.values().map(GeneratedName::full).collect();
        git::ensure_branch_names_valid(full.iter().map(String::as_str))?;
    }

    let selection = CreateSelection {
        repository_id,
        source_branch_name: args.source_branch,
        branch_names,
        create_pull_requests,
        create_pull_requests_as_drafts,
        pull_request_names,
    };
    for id in selection.branch_names.keys() {
        if let Some(r) = selection.branch_ref_name(*id) {
            log::info!("#{id}: {} from {}", r, selection.source_ref_name());
        }
    }

    println!("{}", serde_json::to_string_pretty(&selection)?);
    Ok(())
}

fn initial_names(
    kind: NameKind,
    items: &[WorkItem],
    settings: &SettingsDocument,
) -> BTreeMap<u64, GeneratedName> {
    generate_batch(kind, items, settings)
        .into_iter()
        .map(|(id, g)| (id, g.name))
        .collect()
}

fn apply_edits(
    names: &mut BTreeMap<u64, GeneratedName>,
    edits: &[(u64, String)],
    kind: NameKind,
    settings: &SettingsDocument,
) -> Result<()> {
    for (id, value) in edits {
        let Some(current) = names.get_mut(id) else {
            bail!("Work item {id} is not in the item list");
        };
        *current = current.apply_edit(value, kind, settings);
    }
    Ok(())
}

fn prompt_edits(
    names: &mut BTreeMap<u64, GeneratedName>,
    kind: NameKind,
    settings: &SettingsDocument,
) -> Result<()> {
    let label = match kind {
        NameKind::Branch => "Branch name",
        NameKind::PullRequest => "Pull request title",
    };
    for (id, current) in names.iter_mut() {
        let edited: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(format!("{label} for #{id}"))
            .with_initial_text(current.full())
            .interact_text()
            .context("Prompt failed")?;
        *current = current.apply_edit(&edited, kind, settings);
    }
    Ok(())
}
