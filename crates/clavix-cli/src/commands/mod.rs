pub mod init;
pub mod optimize;
pub mod prd;
pub mod status;
pub mod tasks;
pub mod update;

use anyhow::Result;
use clap::ArgMatches;
use std::path::PathBuf;

/// Shared context handed to every command handler.
#[derive(Debug, Clone)]
pub struct CliContext {
    /// Binary version, injected once at startup.
    pub version: String,
    /// Directory the command was invoked from.
    pub cwd: PathBuf,
}

/// Trait for CLI command handlers
#[allow(async_fn_in_trait)]
pub trait CommandHandler {
    /// Execute the command with the given arguments and context
    async fn execute(&self, matches: &ArgMatches, ctx: &CliContext) -> Result<()>;
}
