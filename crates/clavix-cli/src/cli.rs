//! Main CLI entry point and command routing

use anyhow::Result;

use crate::cli_builder::build_cli;
use crate::commands::{
    init::InitCommand, optimize::OptimizeCommand, prd::PrdCommand, status::StatusCommand,
    tasks::TasksCommand, update::UpdateCommand, CliContext, CommandHandler,
};

/// Main CLI entry point
pub async fn run() -> Result<()> {
    let app = build_cli();
    let version = app.get_version().unwrap_or("0.0.0").to_string();
    let matches = app.get_matches();

    let ctx = CliContext {
        version,
        cwd: std::env::current_dir()?,
    };

    match matches.subcommand() {
        Some(("init", sub_matches)) => InitCommand.execute(sub_matches, &ctx).await,
        Some(("optimize", sub_matches)) => OptimizeCommand.execute(sub_matches, &ctx).await,
        Some(("prd", sub_matches)) => PrdCommand.execute(sub_matches, &ctx).await,
        Some(("status", sub_matches)) => StatusCommand.execute(sub_matches, &ctx).await,
        Some(("update", sub_matches)) => UpdateCommand.execute(sub_matches, &ctx).await,
        Some(("tasks", sub_matches)) => TasksCommand.execute(sub_matches, &ctx).await,
        _ => unreachable!("subcommand_required is set"),
    }
}
