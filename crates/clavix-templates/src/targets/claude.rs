//! Claude Code integration: commands under `.claude/commands/`.

use std::path::{Path, PathBuf};

use crate::adapter::TargetAdapter;

pub struct ClaudeAdapter;

impl TargetAdapter for ClaudeAdapter {
    fn name(&self) -> &'static str {
        "claude"
    }

    fn display_name(&self) -> &'static str {
        "Claude Code"
    }

    fn command_dir(&self, project_root: &Path) -> PathBuf {
        project_root.join(".claude").join("commands")
    }

    fn detect_project(&self, project_root: &Path) -> bool {
        project_root.join(".claude").is_dir() || project_root.join("CLAUDE.md").is_file()
    }
}
