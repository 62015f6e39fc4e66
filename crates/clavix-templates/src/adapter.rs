//! Target adapter contract
//!
//! One adapter per supported AI coding tool. Adapters are stateless: they
//! map command names to tool-specific paths and write rendered markdown.

use anyhow::{Context, Result};
use async_trait::async_trait;
use log::debug;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;

/// A command body already rendered for a specific tool.
#[derive(Debug, Clone)]
pub struct RenderedCommand {
    pub name: String,
    pub content: String,
}

/// What one `generate_commands` call wrote.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationReport {
    pub target: String,
    pub written: Vec<PathBuf>,
}

/// Contract every tool integration implements.
#[async_trait]
pub trait TargetAdapter: Send + Sync {
    /// Stable tag used in config (`claude`, `cursor`, ...).
    fn name(&self) -> &'static str;

    fn display_name(&self) -> &'static str;

    /// Directory this tool reads slash commands from.
    fn command_dir(&self, project_root: &Path) -> PathBuf;

    /// Full path for one command file, applying the tool's naming
    /// convention. Default: plain `<name>.md`.
    fn command_path(&self, project_root: &Path, command: &str) -> PathBuf {
        self.command_dir(project_root).join(format!("{}.md", command))
    }

    /// Whether the tool appears to be set up in this project.
    fn detect_project(&self, project_root: &Path) -> bool;

    /// Write one file per rendered command, creating the command directory
    /// as needed. Existing files are overwritten: regenerating templates is
    /// how upgrades ship.
    async fn generate_commands(
        &self,
        project_root: &Path,
        commands: &[RenderedCommand],
    ) -> Result<GenerationReport> {
        let dir = self.command_dir(project_root);
        fs::create_dir_all(&dir)
            .await
            .with_context(|| format!("failed to create {}", dir.display()))?;

        let mut written = Vec::new();
        for command in commands {
            let path = self.command_path(project_root, &command.name);
            fs::write(&path, &command.content)
                .await
                .with_context(|| format!("failed to write {}", path.display()))?;
            debug!("wrote {}", path.display());
            written.push(path);
        }

        Ok(GenerationReport {
            target: self.name().to_string(),
            written,
        })
    }
}
