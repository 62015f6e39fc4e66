//! Codex CLI integration: prompts under `.codex/prompts/`.

use std::path::{Path, PathBuf};

use crate::adapter::TargetAdapter;

pub struct CodexAdapter;

impl TargetAdapter for CodexAdapter {
    fn name(&self) -> &'static str {
        "codex"
    }

    fn display_name(&self) -> &'static str {
        "Codex CLI"
    }

    fn command_dir(&self, project_root: &Path) -> PathBuf {
        project_root.join(".codex").join("prompts")
    }

    fn detect_project(&self, project_root: &Path) -> bool {
        project_root.join(".codex").is_dir() || project_root.join("AGENTS.md").is_file()
    }
}
