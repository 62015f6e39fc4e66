//! Windsurf integration: workflows under `.windsurf/workflows/`.

use std::path::{Path, PathBuf};

use crate::adapter::TargetAdapter;

pub struct WindsurfAdapter;

impl TargetAdapter for WindsurfAdapter {
    fn name(&self) -> &'static str {
        "windsurf"
    }

    fn display_name(&self) -> &'static str {
        "Windsurf"
    }

    fn command_dir(&self, project_root: &Path) -> PathBuf {
        project_root.join(".windsurf").join("workflows")
    }

    fn detect_project(&self, project_root: &Path) -> bool {
        project_root.join(".windsurf").is_dir()
    }
}
