//! Gemini CLI integration: commands under `.gemini/commands/`.

use std::path::{Path, PathBuf};

use crate::adapter::TargetAdapter;

pub struct GeminiAdapter;

impl TargetAdapter for GeminiAdapter {
    fn name(&self) -> &'static str {
        "gemini"
    }

    fn display_name(&self) -> &'static str {
        "Gemini CLI"
    }

    fn command_dir(&self, project_root: &Path) -> PathBuf {
        project_root.join(".gemini").join("commands")
    }

    fn detect_project(&self, project_root: &Path) -> bool {
        project_root.join(".gemini").is_dir() || project_root.join("GEMINI.md").is_file()
    }
}
