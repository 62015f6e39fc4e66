//! `clavix tasks`: list and edit the markdown checklist.

use anyhow::Result;
use clap::ArgMatches;
use owo_colors::OwoColorize;

use clavix_core::ClavixWorkspace;
use clavix_state::TaskList;

use crate::commands::{CliContext, CommandHandler};

pub struct TasksCommand;

impl CommandHandler for TasksCommand {
    async fn execute(&self, matches: &ArgMatches, ctx: &CliContext) -> Result<()> {
        let workspace = ClavixWorkspace::discover(&ctx.cwd)?;
        let list = TaskList::new(&workspace);

        if let Some(text) = matches.get_one::<String>("add") {
            list.add(text).await?;
            println!("{} {}", "added".green(), text);
            return Ok(());
        }

        if let Some(raw) = matches.get_one::<String>("done") {
            let line: usize = raw.parse()?;
            let toggled = list.toggle(line).await?;
            let marker = if toggled.done { "done" } else { "reopened" };
            println!("{} {}", marker.green(), toggled.text);
            return Ok(());
        }

        let tasks = list.load().await?;
        if tasks.is_empty() {
            println!("{}", "No tasks tracked yet. Add one with --add.".dimmed());
            return Ok(());
        }
        for task in tasks {
            let marker = if task.done { "[x]".green().to_string() } else { "[ ]".to_string() };
            println!("{:>4}  {} {}", task.line, marker, task.text);
        }
        Ok(())
    }
}
