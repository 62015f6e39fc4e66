//! Markdown checkbox task tracker
//!
//! Parses `- [ ]` / `- [x]` lines out of `.clavix/tasks.md`. Edits rewrite
//! only the checkbox lines they touch; everything else in the file is
//! preserved verbatim.

use anyhow::{anyhow, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tokio::fs;

use clavix_core::ClavixWorkspace;

static CHECKBOX_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\s*)- \[( |x|X)\] (.+)$").expect("checkbox regex"));

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskItem {
    pub text: String,
    pub done: bool,
    /// Zero-based line index in the source file.
    pub line: usize,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TaskStats {
    pub total: usize,
    pub done: usize,
    pub percent: u8,
}

pub struct TaskList {
    path: PathBuf,
}

impl TaskList {
    pub fn new(workspace: &ClavixWorkspace) -> Self {
        Self {
            path: workspace.tasks_path(),
        }
    }

    pub fn parse(content: &str) -> Vec<TaskItem> {
        content
            .lines()
            .enumerate()
            .filter_map(|(line, raw)| {
                CHECKBOX_RE.captures(raw).map(|caps| TaskItem {
                    text: caps[3].trim().to_string(),
                    done: !caps[2].trim().is_empty(),
                    line,
                })
            })
            .collect()
    }

    pub async fn load(&self) -> Result<Vec<TaskItem>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&self.path).await?;
        Ok(Self::parse(&content))
    }

    pub async fn stats(&self) -> Result<TaskStats> {
        let tasks = self.load().await?;
        let total = tasks.len();
        let done = tasks.iter().filter(|t| t.done).count();
        let percent = if total == 0 {
            0
        } else {
            ((done * 100) / total) as u8
        };
        Ok(TaskStats {
            total,
            done,
            percent,
        })
    }

    /// Append a task line to the end of the file.
    pub async fn add(&self, text: &str) -> Result<()> {
        let mut content = if self.path.exists() {
            fs::read_to_string(&self.path).await?
        } else {
            String::from("# Tasks\n\n")
        };
        if !content.ends_with('\n') {
            content.push('\n');
        }
        content.push_str(&format!("- [ ] {}\n", text));
        fs::write(&self.path, content).await?;
        Ok(())
    }

    /// Flip the checkbox on the task at `line`, leaving every other byte of
    /// the file untouched.
    pub async fn toggle(&self, line: usize) -> Result<TaskItem> {
        let content = fs::read_to_string(&self.path).await?;
        let mut lines: Vec<String> = content.lines().map(str::to_string).collect();
        let raw = lines
            .get(line)
            .ok_or_else(|| anyhow!("no line {} in {}", line, self.path.display()))?;
        let caps = CHECKBOX_RE
            .captures(raw)
            .ok_or_else(|| anyhow!("line {} is not a task", line))?;

        let indent = caps[1].to_string();
        let text = caps[3].to_string();
        let was_done = !caps[2].trim().is_empty();
        let marker = if was_done { ' ' } else { 'x' };
        lines[line] = format!("{}- [{}] {}", indent, marker, text);

        let mut updated = lines.join("\n");
        if content.ends_with('\n') {
            updated.push('\n');
        }
        fs::write(&self.path, updated).await?;

        Ok(TaskItem {
            text,
            done: !was_done,
            line,
        })
    }
}
