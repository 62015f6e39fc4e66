//! Prompt records
//!
//! Every saved optimization run becomes a human-readable markdown file plus
//! a JSON sidecar under `.clavix/prompts/`.

use anyhow::{Context, Result};
use chrono::Utc;
use log::debug;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tokio::fs;
use uuid::Uuid;

use clavix_core::ClavixWorkspace;
use clavix_intelligence::{EscalationAnalysis, OptimizationResult, QualityDimension};

/// JSON sidecar content: the result plus bookkeeping.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptRecord {
    pub id: String,
    pub saved_at: chrono::DateTime<Utc>,
    pub result: OptimizationResult,
    pub escalation: Option<EscalationAnalysis>,
}

pub struct PromptStore {
    dir: PathBuf,
}

impl PromptStore {
    pub fn new(workspace: &ClavixWorkspace) -> Self {
        Self {
            dir: workspace.prompts_dir(),
        }
    }

    /// Persist one run. Returns the markdown path.
    pub async fn save(
        &self,
        result: &OptimizationResult,
        escalation: Option<&EscalationAnalysis>,
    ) -> Result<PathBuf> {
        fs::create_dir_all(&self.dir).await?;

        let id = Uuid::new_v4().to_string();
        let short_id = &id[..8];
        let stem = format!("{}-{}", slug(&result.original_prompt), short_id);

        let markdown_path = self.dir.join(format!("{}.md", stem));
        let json_path = self.dir.join(format!("{}.json", stem));

        let record = PromptRecord {
            id: id.clone(),
            saved_at: Utc::now(),
            result: result.clone(),
            escalation: escalation.cloned(),
        };

        fs::write(&markdown_path, render_markdown(&record))
            .await
            .with_context(|| format!("failed to write {}", markdown_path.display()))?;
        fs::write(&json_path, serde_json::to_string_pretty(&record)?)
            .await
            .with_context(|| format!("failed to write {}", json_path.display()))?;

        debug!("saved prompt record {}", markdown_path.display());
        Ok(markdown_path)
    }

    /// Markdown record paths in stable name order.
    pub async fn list(&self) -> Result<Vec<PathBuf>> {
        let mut paths = Vec::new();
        let mut entries = match fs::read_dir(&self.dir).await {
            Ok(entries) => entries,
            Err(_) => return Ok(paths),
        };
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().map(|e| e == "md").unwrap_or(false) {
                paths.push(path);
            }
        }
        paths.sort();
        Ok(paths)
    }
}

/// File-name slug from the first words of the prompt.
fn slug(prompt: &str) -> String {
    let cleaned: String = prompt
        .to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
        .collect();
    let collapsed = cleaned
        .split('-')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-");
    let mut slug: String = collapsed.chars().take(40).collect();
    if slug.is_empty() {
        slug = "prompt".to_string();
    }
    slug.trim_end_matches('-').to_string()
}

fn render_markdown(record: &PromptRecord) -> String {
    let result = &record.result;
    let mut out = String::new();

    out.push_str(&format!(
        "# Prompt Record ({} mode)\n\nSaved: {}\nIntent: {} ({}% confidence)\n\n",
        result.mode,
        record.saved_at.format("%Y-%m-%d %H:%M UTC"),
        result.intent.primary_intent,
        result.intent.confidence
    ));

    out.push_str("## Quality\n\n| Dimension | Original | Enhanced |\n|---|---|---|\n");
    for dimension in QualityDimension::all() {
        out.push_str(&format!(
            "| {} | {} | {} |\n",
            dimension,
            result.original_quality.dimension(*dimension),
            result.quality.dimension(*dimension)
        ));
    }
    out.push_str(&format!(
        "| overall | {} | {} |\n\n",
        result.original_quality.overall, result.quality.overall
    ));

    if !result.improvements.is_empty() {
        out.push_str("## Applied Improvements\n\n");
        for improvement in &result.improvements {
            out.push_str(&format!(
                "- [{:?}] {}\n",
                improvement.impact, improvement.description
            ));
        }
        out.push('\n');
    }

    if let Some(escalation) = &record.escalation {
        if escalation.should_escalate {
            out.push_str(&format!(
                "## Recommendation\n\nDeep mode would add {}.\n\n",
                escalation.deep_mode_value
            ));
        }
    }

    out.push_str("## Original Prompt\n\n");
    out.push_str(&result.original_prompt);
    out.push_str("\n\n## Enhanced Prompt\n\n");
    out.push_str(&result.enhanced_prompt);
    out.push('\n');

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use clavix_core::ClavixConfig;
    use clavix_intelligence::{OptimizationMode, UniversalOptimizer};

    #[test]
    fn slugs_are_filesystem_safe() {
        assert_eq!(slug("Build a login page!"), "build-a-login-page");
        assert_eq!(slug("   "), "prompt");
        assert!(slug(&"x".repeat(100)).len() <= 40);
    }

    #[tokio::test]
    async fn saves_markdown_and_json_sidecar() {
        let dir = tempfile::tempdir().unwrap();
        let ws = ClavixWorkspace::at(dir.path());
        ws.init(&ClavixConfig::default()).await.unwrap();
        let store = PromptStore::new(&ws);

        let optimizer = UniversalOptimizer::new();
        let result = optimizer.optimize("Build a login page", OptimizationMode::Deep);
        let escalation = optimizer.analyze_escalation(&result);

        let markdown_path = store.save(&result, Some(&escalation)).await.unwrap();
        assert!(markdown_path.is_file());
        let json_path = markdown_path.with_extension("json");
        assert!(json_path.is_file());

        let markdown = tokio::fs::read_to_string(&markdown_path).await.unwrap();
        assert!(markdown.contains("## Quality"));
        assert!(markdown.contains("Build a login page"));

        let raw = tokio::fs::read_to_string(&json_path).await.unwrap();
        let record: PromptRecord = serde_json::from_str(&raw).unwrap();
        assert_eq!(record.result.original_prompt, "Build a login page");
    }

    #[tokio::test]
    async fn list_returns_markdown_records() {
        let dir = tempfile::tempdir().unwrap();
        let ws = ClavixWorkspace::at(dir.path());
        ws.init(&ClavixConfig::default()).await.unwrap();
        let store = PromptStore::new(&ws);

        let optimizer = UniversalOptimizer::new();
        let result = optimizer.optimize("Summarize the release notes", OptimizationMode::Fast);
        store.save(&result, None).await.unwrap();

        let records = store.list().await.unwrap();
        assert_eq!(records.len(), 1);
    }
}
