mod cli;
mod commands;
mod exec;
mod git;
mod logging;

fn main() -> anyhow::Result<()> {
    crate::cli::run()
}
