// crates/clavix-core/src/config.rs
use anyhow::{Context, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Persistent configuration stored at `.clavix/config.json`.
///
/// Every field carries a serde default so configs written by older versions
/// load field-by-field instead of failing wholesale. Unknown fields are
/// ignored on read and dropped on the next save.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClavixConfig {
    /// Version of the binary that last wrote this config. Injected by the
    /// caller at startup rather than read from package metadata here.
    #[serde(default)]
    pub version: String,

    /// Enabled integration targets, by adapter tag (e.g. "claude", "cursor").
    #[serde(default = "default_targets")]
    pub targets: Vec<String>,

    /// Default optimization mode for `clavix optimize` when no flag is given.
    #[serde(default = "default_mode")]
    pub default_mode: String,

    /// Whether optimize runs write a prompt record under `.clavix/prompts/`.
    #[serde(default = "default_true")]
    pub auto_save_prompts: bool,
}

fn default_targets() -> Vec<String> {
    vec!["claude".to_string()]
}

fn default_mode() -> String {
    "fast".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for ClavixConfig {
    fn default() -> Self {
        Self {
            version: String::new(),
            targets: default_targets(),
            default_mode: default_mode(),
            auto_save_prompts: true,
        }
    }
}

impl ClavixConfig {
    /// Default config stamped with the running binary's version.
    pub fn with_version(version: &str) -> Self {
        Self {
            version: version.to_string(),
            ..Self::default()
        }
    }

    /// Load from `path`, falling back to defaults when the file is missing.
    pub async fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let raw = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config: Self = serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse config {}", path.display()))?;
        Ok(config)
    }

    /// Save pretty-printed JSON to `path`.
    pub async fn save(&self, path: &Path) -> Result<()> {
        let raw = serde_json::to_string_pretty(self)?;
        tokio::fs::write(path, raw)
            .await
            .with_context(|| format!("failed to write config {}", path.display()))?;
        debug!("saved config to {}", path.display());
        Ok(())
    }

    pub fn has_target(&self, name: &str) -> bool {
        self.targets.iter().any(|t| t == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_fills_defaults() {
        let config: ClavixConfig = serde_json::from_str(r#"{"targets":["cursor"]}"#).unwrap();
        assert_eq!(config.targets, vec!["cursor"]);
        assert_eq!(config.default_mode, "fast");
        assert!(config.auto_save_prompts);
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let config: ClavixConfig =
            serde_json::from_str(r#"{"default_mode":"deep","legacy_flag":true}"#).unwrap();
        assert_eq!(config.default_mode, "deep");
    }

    #[tokio::test]
    async fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = ClavixConfig::load(&dir.path().join("config.json")).await.unwrap();
        assert!(config.has_target("claude"));
    }

    #[tokio::test]
    async fn round_trips_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        let mut config = ClavixConfig::with_version("0.1.0");
        config.targets.push("windsurf".to_string());
        config.save(&path).await.unwrap();

        let loaded = ClavixConfig::load(&path).await.unwrap();
        assert_eq!(loaded.version, "0.1.0");
        assert!(loaded.has_target("windsurf"));
    }
}
