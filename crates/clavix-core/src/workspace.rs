//! `.clavix/` workspace layout and discovery
//!
//! The workspace is a dot-directory at the project root holding config,
//! session files, prompt records and the task list. All paths flow through
//! this module so the on-disk layout is defined in one place.

use anyhow::{anyhow, Result};
use log::debug;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::config::ClavixConfig;

pub const WORKSPACE_DIR: &str = ".clavix";
pub const SESSIONS_DIR: &str = "sessions";
pub const PROMPTS_DIR: &str = "prompts";
pub const CONFIG_FILE: &str = "config.json";
pub const TASKS_FILE: &str = "tasks.md";

const TASKS_SEED: &str = "# Tasks\n\n- [ ] Review generated slash commands\n";

/// Handle to a project's `.clavix/` directory.
#[derive(Debug, Clone)]
pub struct ClavixWorkspace {
    project_root: PathBuf,
}

impl ClavixWorkspace {
    /// Wrap an explicit project root without touching the filesystem.
    pub fn at(project_root: impl Into<PathBuf>) -> Self {
        Self {
            project_root: project_root.into(),
        }
    }

    /// Walk up from `start` until a directory containing `.clavix/` is found.
    pub fn discover(start: &Path) -> Result<Self> {
        let mut current = Some(start);
        while let Some(dir) = current {
            if dir.join(WORKSPACE_DIR).is_dir() {
                debug!("found workspace at {}", dir.display());
                return Ok(Self::at(dir));
            }
            current = dir.parent();
        }
        Err(anyhow!(
            "no {} workspace found above {} (run `clavix init` first)",
            WORKSPACE_DIR,
            start.display()
        ))
    }

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    pub fn root(&self) -> PathBuf {
        self.project_root.join(WORKSPACE_DIR)
    }

    pub fn sessions_dir(&self) -> PathBuf {
        self.root().join(SESSIONS_DIR)
    }

    pub fn prompts_dir(&self) -> PathBuf {
        self.root().join(PROMPTS_DIR)
    }

    pub fn config_path(&self) -> PathBuf {
        self.root().join(CONFIG_FILE)
    }

    pub fn tasks_path(&self) -> PathBuf {
        self.root().join(TASKS_FILE)
    }

    pub fn is_initialized(&self) -> bool {
        self.root().is_dir()
    }

    /// Create the workspace skeleton. Idempotent: existing files are left
    /// untouched, only missing pieces are created.
    pub async fn init(&self, config: &ClavixConfig) -> Result<()> {
        fs::create_dir_all(self.sessions_dir()).await?;
        fs::create_dir_all(self.prompts_dir()).await?;

        let config_path = self.config_path();
        if !config_path.exists() {
            config.save(&config_path).await?;
        }

        let tasks_path = self.tasks_path();
        if !tasks_path.exists() {
            fs::write(&tasks_path, TASKS_SEED).await?;
        }

        debug!("initialized workspace at {}", self.root().display());
        Ok(())
    }

    pub async fn load_config(&self) -> Result<ClavixConfig> {
        ClavixConfig::load(&self.config_path()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn init_creates_layout() {
        let dir = tempfile::tempdir().unwrap();
        let ws = ClavixWorkspace::at(dir.path());
        ws.init(&ClavixConfig::default()).await.unwrap();

        assert!(ws.is_initialized());
        assert!(ws.sessions_dir().is_dir());
        assert!(ws.prompts_dir().is_dir());
        assert!(ws.config_path().is_file());
        assert!(ws.tasks_path().is_file());
    }

    #[tokio::test]
    async fn init_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let ws = ClavixWorkspace::at(dir.path());
        ws.init(&ClavixConfig::default()).await.unwrap();

        tokio::fs::write(ws.tasks_path(), "# Tasks\n\n- [x] custom\n")
            .await
            .unwrap();
        ws.init(&ClavixConfig::default()).await.unwrap();

        let tasks = tokio::fs::read_to_string(ws.tasks_path()).await.unwrap();
        assert!(tasks.contains("custom"));
    }

    #[tokio::test]
    async fn discover_walks_up() {
        let dir = tempfile::tempdir().unwrap();
        let ws = ClavixWorkspace::at(dir.path());
        ws.init(&ClavixConfig::default()).await.unwrap();

        let nested = dir.path().join("src/deeply/nested");
        tokio::fs::create_dir_all(&nested).await.unwrap();

        let found = ClavixWorkspace::discover(&nested).unwrap();
        assert_eq!(found.project_root(), dir.path());
    }

    #[test]
    fn discover_fails_outside_workspace() {
        let dir = tempfile::tempdir().unwrap();
        assert!(ClavixWorkspace::discover(dir.path()).is_err());
    }
}
