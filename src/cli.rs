use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::commands;
use crate::logging;

use wib_cli::naming::NameKind;

#[derive(Parser, Debug)]
#[command(
    name = "wib",
    version,
    about = "Branch and pull request names from work item templates"
)]
struct Cli {
    /// Settings document (JSON, or TOML by extension)
    #[arg(long, global = true, env = "WIB_SETTINGS")]
    settings: Option<PathBuf>,
    /// Increase log output (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the generated branch and pull request names for work items
    Names(NamesArgs),
    /// Fold an edited full name back into prefix + body
    Edit(EditArgs),
    /// Check a template against known work item fields
    Validate(ValidateArgs),
    /// Manage the settings document
    Settings(SettingsArgs),
    /// Produce the create selection for a set of work items
    Create(CreateArgs),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum KindArg {
    Branch,
    PullRequest,
}

impl From<KindArg> for NameKind {
    fn from(k: KindArg) -> Self {
        match k {
            KindArg::Branch => NameKind::Branch,
            KindArg::PullRequest => NameKind::PullRequest,
        }
    }
}

#[derive(Args, Debug)]
pub(crate) struct NamesArgs {
    /// JSON file with the work items
    #[arg(long)]
    pub(crate) items: PathBuf,
    /// Print JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct EditArgs {
    /// Immutable prefix of the name being edited
    #[arg(long, default_value = "")]
    pub(crate) prefix: String,
    /// Full edited value (prefix + body) as typed by the user
    #[arg(long)]
    pub(crate) value: String,
    #[arg(long, value_enum, default_value_t = KindArg::Branch)]
    pub(crate) kind: KindArg,
    /// Print JSON instead of the body only
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct ValidateArgs {
    pub(crate) template: String,
    /// Known field name (repeatable)
    #[arg(long = "field")]
    pub(crate) fields: Vec<String>,
    /// Take known field names from a work item file
    #[arg(long)]
    pub(crate) items: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub(crate) struct SettingsArgs {
    #[command(subcommand)]
    pub(crate) command: SettingsCommands,
}

#[derive(Subcommand, Debug)]
pub(crate) enum SettingsCommands {
    /// Write a default settings document
    Init {
        /// Overwrite an existing document
        #[arg(long)]
        force: bool,
    },
    /// Print the effective settings document
    Show,
    /// Validate and store a template
    SetTemplate(SetTemplateArgs),
}

#[derive(Args, Debug)]
pub(crate) struct SetTemplateArgs {
    pub(crate) template: String,
    /// Store as the branch template override for this work item type
    #[arg(long = "type")]
    pub(crate) type_name: Option<String>,
    /// Store as the default pull request template
    #[arg(long)]
    pub(crate) pull_request: bool,
    /// Store the override but leave it inactive
    #[arg(long)]
    pub(crate) inactive: bool,
    /// Known field name (repeatable)
    #[arg(long = "field")]
    pub(crate) fields: Vec<String>,
    /// Take known field names from a work item file
    #[arg(long)]
    pub(crate) items: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub(crate) struct CreateArgs {
    /// JSON file with the work items
    #[arg(long)]
    pub(crate) items: PathBuf,
    /// Target repository (default: settings defaultRepositoryName)
    #[arg(long)]
    pub(crate) repository: Option<String>,
    /// Branch the new branches are created from
    #[arg(long)]
    pub(crate) source_branch: String,
    /// Also create pull requests
    #[arg(long, conflicts_with = "no_pull_requests")]
    pub(crate) pull_requests: bool,
    /// Do not create pull requests even if the settings default to it
    #[arg(long)]
    pub(crate) no_pull_requests: bool,
    /// Create pull requests as drafts (implies --pull-requests)
    #[arg(long, conflicts_with = "no_pull_requests")]
    pub(crate) draft: bool,
    /// Edited full branch name for a work item, as ID=VALUE (repeatable)
    #[arg(long = "branch-name", value_parser = parse_edit)]
    pub(crate) branch_names: Vec<(u64, String)>,
    /// Edited full pull request title for a work item, as ID=VALUE (repeatable)
    #[arg(long = "pr-name", value_parser = parse_edit)]
    pub(crate) pr_names: Vec<(u64, String)>,
    /// Edit each name in a prompt
    #[arg(long)]
    pub(crate) interactive: bool,
    /// Reject branch names that `git check-ref-format --branch` refuses
    #[arg(long)]
    pub(crate) check_ref_format: bool,
}

fn parse_edit(raw: &str) -> Result<(u64, String)> {
    let (id, value) = raw
        .split_once('=')
        .ok_or_else(|| anyhow!("expected ID=VALUE, got {raw:?}"))?;
    let id = id
        .trim()
        .parse::<u64>()
        .map_err(|_| anyhow!("work item id must be a number, got {id:?}"))?;
    Ok((id, value.to_string()))
}

pub(crate) fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    let settings = cli.settings.as_deref();
    match cli.command {
        Commands::Names(args) => commands::names::cmd_names(settings, args),
        Commands::Edit(args) => commands::edit::cmd_edit(settings, args),
        Commands::Validate(args) => commands::validate::cmd_validate(args),
        Commands::Settings(args) => match args.command {
            SettingsCommands::Init { force } => commands::settings::cmd_init(settings, force),
            SettingsCommands::Show => commands::settings::cmd_show(settings),
            SettingsCommands::SetTemplate(a) => commands::settings::cmd_set_template(settings, a),
        },
        Commands::Create(args) => commands::create::cmd_create(settings, args),
    }
}
