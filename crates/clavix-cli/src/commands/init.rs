//! `clavix init`: create the workspace, generate slash commands, inject the
//! doc block into agent instruction files.

use anyhow::{anyhow, Result};
use clap::ArgMatches;
use dialoguer::MultiSelect;
use log::debug;
use owo_colors::OwoColorize;

use clavix_core::{ClavixConfig, ClavixWorkspace};
use clavix_templates::{inject_into_file, AdapterRegistry, CommandCatalog};

use crate::commands::{CliContext, CommandHandler};

const DOC_BLOCK: &str = "\
## Clavix

This project uses clavix for prompt optimization. Before sending a large or
vague prompt, run it through `/clavix-fast` (quick cleanup) or `/clavix-deep`
(full structure extraction). `clavix status` shows workspace state.";

pub struct InitCommand;

impl InitCommand {
    /// Resolve which tools to generate commands for: explicit flag first,
    /// then detection (with `--yes`), then an interactive menu.
    fn resolve_targets(
        matches: &ArgMatches,
        registry: &AdapterRegistry,
        ctx: &CliContext,
    ) -> Result<Vec<String>> {
        if let Some(raw) = matches.get_one::<String>("targets") {
            let mut targets = Vec::new();
            for tag in raw.split(',').map(str::trim).filter(|t| !t.is_empty()) {
                if registry.get(tag).is_none() {
                    return Err(anyhow!(
                        "unknown target '{}'; known: {}",
                        tag,
                        registry
                            .all()
                            .iter()
                            .map(|a| a.name())
                            .collect::<Vec<_>>()
                            .join(", ")
                    ));
                }
                targets.push(tag.to_string());
            }
            if targets.is_empty() {
                return Err(anyhow!("--targets was given but named no tools"));
            }
            return Ok(targets);
        }

        let detected: Vec<String> = registry
            .detect(&ctx.cwd)
            .iter()
            .map(|a| a.name().to_string())
            .collect();

        if matches.get_flag("yes") {
            return Ok(if detected.is_empty() {
                vec!["claude".to_string()]
            } else {
                detected
            });
        }

        let labels: Vec<String> = registry
            .all()
            .iter()
            .map(|a| a.display_name().to_string())
            .collect();
        let defaults: Vec<bool> = registry
            .all()
            .iter()
            .map(|a| detected.contains(&a.name().to_string()))
            .collect();

        let chosen = MultiSelect::new()
            .with_prompt("Which tools should get clavix slash commands?")
            .items(&labels)
            .defaults(&defaults)
            .interact()?;

        if chosen.is_empty() {
            return Err(anyhow!("no tools selected"));
        }
        Ok(chosen
            .into_iter()
            .map(|i| registry.all()[i].name().to_string())
            .collect())
    }
}

impl CommandHandler for InitCommand {
    async fn execute(&self, matches: &ArgMatches, ctx: &CliContext) -> Result<()> {
        let registry = AdapterRegistry::with_defaults();
        let targets = Self::resolve_targets(matches, &registry, ctx)?;

        let workspace = ClavixWorkspace::at(&ctx.cwd);
        let mut config = ClavixConfig::with_version(&ctx.version);
        config.targets = targets.clone();
        workspace.init(&config).await?;
        println!("{} {}", "Initialized".green().bold(), workspace.root().display());

        let catalog = CommandCatalog::new(&ctx.version)?;
        for target in &targets {
            let adapter = registry
                .get(target)
                .ok_or_else(|| anyhow!("target '{}' missing from registry", target))?;
            let rendered = catalog.render_for(adapter.as_ref())?;
            let report = adapter.generate_commands(&ctx.cwd, &rendered).await?;
            println!(
                "  {} {} command(s) for {}",
                "wrote".green(),
                report.written.len(),
                adapter.display_name()
            );
        }

        // Instruction files get the doc block only for tools that read one.
        for (target, file) in [("claude", "CLAUDE.md"), ("codex", "AGENTS.md"), ("gemini", "GEMINI.md")] {
            if targets.iter().any(|t| t == target) {
                let path = ctx.cwd.join(file);
                let outcome = inject_into_file(&path, DOC_BLOCK).await?;
                debug!("doc block in {}: {:?}", path.display(), outcome);
                println!("  {} clavix block in {}", "injected".green(), file);
            }
        }

        Ok(())
    }
}
