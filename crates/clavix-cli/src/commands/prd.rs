//! `clavix prd`: validate one PRD interview answer.

use anyhow::{anyhow, Result};
use clap::ArgMatches;
use owo_colors::OwoColorize;

use clavix_intelligence::UniversalOptimizer;

use crate::commands::{CliContext, CommandHandler};

pub struct PrdCommand;

impl CommandHandler for PrdCommand {
    async fn execute(&self, matches: &ArgMatches, _ctx: &CliContext) -> Result<()> {
        let answer = matches
            .get_one::<String>("answer")
            .ok_or_else(|| anyhow!("an answer argument is required"))?;
        let question = matches
            .get_one::<String>("question")
            .ok_or_else(|| anyhow!("a question id is required"))?;

        let optimizer = UniversalOptimizer::new();
        let validation = optimizer.validate_prd_answer(answer, question);

        if validation.needs_clarification {
            println!(
                "{} (quality {})",
                "This answer needs more detail".yellow().bold(),
                validation.quality.overall
            );
            if let Some(suggestion) = &validation.suggestion {
                println!("  {}", suggestion);
            }
        } else {
            println!(
                "{} (quality {})",
                "Answer looks solid".green().bold(),
                validation.quality.overall
            );
        }

        Ok(())
    }
}
