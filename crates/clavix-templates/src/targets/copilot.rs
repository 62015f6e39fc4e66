//! GitHub Copilot integration: prompt files under `.github/prompts/` with
//! the `.prompt.md` suffix Copilot expects.

use std::path::{Path, PathBuf};

use crate::adapter::TargetAdapter;

pub struct CopilotAdapter;

impl TargetAdapter for CopilotAdapter {
    fn name(&self) -> &'static str {
        "copilot"
    }

    fn display_name(&self) -> &'static str {
        "GitHub Copilot"
    }

    fn command_dir(&self, project_root: &Path) -> PathBuf {
        project_root.join(".github").join("prompts")
    }

    fn command_path(&self, project_root: &Path, command: &str) -> PathBuf {
        self.command_dir(project_root)
            .join(format!("{}.prompt.md", command))
    }

    fn detect_project(&self, project_root: &Path) -> bool {
        project_root
            .join(".github")
            .join("copilot-instructions.md")
            .is_file()
            || project_root.join(".github").is_dir()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_path_uses_prompt_suffix() {
        let path = CopilotAdapter.command_path(Path::new("/proj"), "clavix-deep");
        assert_eq!(
            path,
            PathBuf::from("/proj/.github/prompts/clavix-deep.prompt.md")
        );
    }
}
