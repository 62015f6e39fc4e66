//! `clavix status`: workspace summary.

use anyhow::Result;
use clap::ArgMatches;
use owo_colors::OwoColorize;

use clavix_core::ClavixWorkspace;
use clavix_state::{PromptStore, SessionStore, TaskList};

use crate::commands::{CliContext, CommandHandler};

pub struct StatusCommand;

impl CommandHandler for StatusCommand {
    async fn execute(&self, _matches: &ArgMatches, ctx: &CliContext) -> Result<()> {
        let workspace = ClavixWorkspace::discover(&ctx.cwd)?;
        let config = workspace.load_config().await?;

        println!("{} {}", "Workspace:".bold(), workspace.root().display());
        println!(
            "{} {} (default mode: {}, auto-save: {})",
            "Targets:".bold(),
            config.targets.join(", "),
            config.default_mode,
            config.auto_save_prompts
        );

        let stats = TaskList::new(&workspace).stats().await?;
        println!(
            "{} {}/{} done ({}%)",
            "Tasks:".bold(),
            stats.done,
            stats.total,
            stats.percent
        );

        let sessions = SessionStore::new(&workspace).list().await?;
        println!("{} {}", "Sessions:".bold(), sessions.len());
        for session in sessions.iter().take(3) {
            println!(
                "  {} {} mode, {} prompt(s), updated {}",
                if session.active { "*" } else { "-" },
                session.mode,
                session.prompt_count,
                session.updated_at.format("%Y-%m-%d %H:%M")
            );
        }

        let prompts = PromptStore::new(&workspace).list().await?;
        println!("{} {} record(s)", "Prompts:".bold(), prompts.len());

        Ok(())
    }
}
