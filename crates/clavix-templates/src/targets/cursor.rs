//! Cursor integration: commands under `.cursor/commands/`.

use std::path::{Path, PathBuf};

use crate::adapter::TargetAdapter;

pub struct CursorAdapter;

impl TargetAdapter for CursorAdapter {
    fn name(&self) -> &'static str {
        "cursor"
    }

    fn display_name(&self) -> &'static str {
        "Cursor"
    }

    fn command_dir(&self, project_root: &Path) -> PathBuf {
        project_root.join(".cursor").join("commands")
    }

    fn detect_project(&self, project_root: &Path) -> bool {
        project_root.join(".cursor").is_dir() || project_root.join(".cursorrules").is_file()
    }
}
