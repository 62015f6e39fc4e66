//! `clavix update`: refresh generated slash-command files.

use anyhow::Result;
use clap::ArgMatches;
use log::warn;
use owo_colors::OwoColorize;

use clavix_core::ClavixWorkspace;
use clavix_templates::{AdapterRegistry, CommandCatalog};

use crate::commands::{CliContext, CommandHandler};

pub struct UpdateCommand;

impl CommandHandler for UpdateCommand {
    async fn execute(&self, _matches: &ArgMatches, ctx: &CliContext) -> Result<()> {
        let workspace = ClavixWorkspace::discover(&ctx.cwd)?;
        let mut config = workspace.load_config().await?;

        let registry = AdapterRegistry::with_defaults();
        let catalog = CommandCatalog::new(&ctx.version)?;

        for target in &config.targets {
            let adapter = match registry.get(target) {
                Some(adapter) => adapter,
                None => {
                    warn!("config names unknown target '{}'; skipping", target);
                    continue;
                }
            };
            let rendered = catalog.render_for(adapter.as_ref())?;
            let report = adapter
                .generate_commands(workspace.project_root(), &rendered)
                .await?;
            println!(
                "{} {} command(s) for {}",
                "refreshed".green(),
                report.written.len(),
                adapter.display_name()
            );
        }

        config.version = ctx.version.clone();
        config.save(&workspace.config_path()).await?;
        Ok(())
    }
}
