//! `clavix optimize`: run the pipeline and report the result.

use anyhow::{anyhow, Result};
use clap::ArgMatches;
use log::debug;
use owo_colors::OwoColorize;

use clavix_core::ClavixWorkspace;
use clavix_intelligence::{
    ContextOverride, OptimizationMode, PromptIntent, UniversalOptimizer,
};
use clavix_state::{PromptStore, SessionStore};

use crate::commands::{CliContext, CommandHandler};
use crate::output;

pub struct OptimizeCommand;

impl OptimizeCommand {
    async fn read_prompt(matches: &ArgMatches) -> Result<String> {
        if let Some(path) = matches.get_one::<String>("file") {
            return Ok(tokio::fs::read_to_string(path).await?);
        }
        matches
            .get_one::<String>("prompt")
            .cloned()
            .ok_or_else(|| anyhow!("provide a prompt argument or --file"))
    }

    /// Unknown intent tags are advisory context, not a contract violation:
    /// log and fall back to detection.
    fn parse_intent_override(matches: &ArgMatches) -> Option<PromptIntent> {
        let raw = matches.get_one::<String>("intent")?;
        match raw.parse::<PromptIntent>() {
            Ok(intent) => Some(intent),
            Err(e) => {
                debug!("ignoring intent override: {}", e);
                None
            }
        }
    }
}

impl CommandHandler for OptimizeCommand {
    async fn execute(&self, matches: &ArgMatches, ctx: &CliContext) -> Result<()> {
        let prompt = Self::read_prompt(matches).await?;

        let workspace = ClavixWorkspace::discover(&ctx.cwd).ok();
        let config = match &workspace {
            Some(ws) => Some(ws.load_config().await?),
            None => None,
        };

        let mode_str = matches
            .get_one::<String>("mode")
            .cloned()
            .or_else(|| config.as_ref().map(|c| c.default_mode.clone()))
            .unwrap_or_else(|| "fast".to_string());
        let mode = mode_str
            .parse::<OptimizationMode>()
            .map_err(|e| anyhow!(e))?;

        let optimizer = UniversalOptimizer::new();
        let result = optimizer.optimize_with(
            &prompt,
            mode,
            ContextOverride {
                intent: Self::parse_intent_override(matches),
                phase: None,
            },
        );
        let escalation = optimizer.analyze_escalation(&result);

        output::print_result(&result, Some(&escalation));

        let save = !matches.get_flag("no-save")
            && config.as_ref().map(|c| c.auto_save_prompts).unwrap_or(false);
        if let (true, Some(ws)) = (save, &workspace) {
            let store = PromptStore::new(ws);
            let path = store.save(&result, Some(&escalation)).await?;
            println!("{} {}", "Saved".dimmed(), path.display());

            let sessions = SessionStore::new(ws);
            let mut session = match sessions.list().await?.into_iter().find(|s| s.active) {
                Some(session) => session,
                None => sessions.create(mode.as_str()).await?,
            };
            sessions.touch(&mut session).await?;
        }

        Ok(())
    }
}
