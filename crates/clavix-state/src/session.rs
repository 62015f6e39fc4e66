//! Session records: one JSON file per session under `.clavix/sessions/`.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use log::warn;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tokio::fs;
use uuid::Uuid;

use clavix_core::ClavixWorkspace;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionRecord {
    pub id: String,
    pub started_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub mode: String,
    pub prompt_count: u32,
    pub active: bool,
}

impl SessionRecord {
    pub fn new(mode: &str) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            started_at: now,
            updated_at: now,
            mode: mode.to_string(),
            prompt_count: 0,
            active: true,
        }
    }
}

/// CRUD over session files. Corrupt files are reported and skipped during
/// listing rather than failing the whole operation.
pub struct SessionStore {
    dir: PathBuf,
}

impl SessionStore {
    pub fn new(workspace: &ClavixWorkspace) -> Self {
        Self {
            dir: workspace.sessions_dir(),
        }
    }

    fn path_for(&self, id: &str) -> PathBuf {
        self.dir.join(format!("{}.json", id))
    }

    pub async fn create(&self, mode: &str) -> Result<SessionRecord> {
        let record = SessionRecord::new(mode);
        self.save(&record).await?;
        Ok(record)
    }

    pub async fn save(&self, record: &SessionRecord) -> Result<()> {
        fs::create_dir_all(&self.dir).await?;
        let path = self.path_for(&record.id);
        let raw = serde_json::to_string_pretty(record)?;
        fs::write(&path, raw)
            .await
            .with_context(|| format!("failed to write session {}", path.display()))?;
        Ok(())
    }

    pub async fn load(&self, id: &str) -> Result<SessionRecord> {
        let path = self.path_for(id);
        let raw = fs::read_to_string(&path)
            .await
            .with_context(|| format!("failed to read session {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("corrupt session file {}", path.display()))
    }

    /// All sessions, newest update first. Unreadable files are skipped with
    /// a warning.
    pub async fn list(&self) -> Result<Vec<SessionRecord>> {
        let mut records = Vec::new();
        let mut entries = match fs::read_dir(&self.dir).await {
            Ok(entries) => entries,
            Err(_) => return Ok(records),
        };
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().map(|e| e != "json").unwrap_or(true) {
                continue;
            }
            match fs::read_to_string(&path).await {
                Ok(raw) => match serde_json::from_str::<SessionRecord>(&raw) {
                    Ok(record) => records.push(record),
                    Err(e) => warn!("skipping corrupt session {}: {}", path.display(), e),
                },
                Err(e) => warn!("skipping unreadable session {}: {}", path.display(), e),
            }
        }
        records.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        Ok(records)
    }

    /// Record one more optimized prompt against a session.
    pub async fn touch(&self, record: &mut SessionRecord) -> Result<()> {
        record.prompt_count += 1;
        record.updated_at = Utc::now();
        self.save(record).await
    }

    pub async fn end(&self, record: &mut SessionRecord) -> Result<()> {
        record.active = false;
        record.updated_at = Utc::now();
        self.save(record).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clavix_core::ClavixConfig;

    async fn workspace() -> (tempfile::TempDir, ClavixWorkspace) {
        let dir = tempfile::tempdir().unwrap();
        let ws = ClavixWorkspace::at(dir.path());
        ws.init(&ClavixConfig::default()).await.unwrap();
        (dir, ws)
    }

    #[tokio::test]
    async fn session_round_trips() {
        let (_dir, ws) = workspace().await;
        let store = SessionStore::new(&ws);

        let mut record = store.create("deep").await.unwrap();
        store.touch(&mut record).await.unwrap();

        let loaded = store.load(&record.id).await.unwrap();
        assert_eq!(loaded.mode, "deep");
        assert_eq!(loaded.prompt_count, 1);
        assert!(loaded.active);
    }

    #[tokio::test]
    async fn list_skips_corrupt_files() {
        let (_dir, ws) = workspace().await;
        let store = SessionStore::new(&ws);

        store.create("fast").await.unwrap();
        tokio::fs::write(ws.sessions_dir().join("broken.json"), "{nope")
            .await
            .unwrap();

        let sessions = store.list().await.unwrap();
        assert_eq!(sessions.len(), 1);
    }

    #[tokio::test]
    async fn list_orders_by_most_recent_update() {
        let (_dir, ws) = workspace().await;
        let store = SessionStore::new(&ws);

        let first = store.create("fast").await.unwrap();
        let mut second = store.create("deep").await.unwrap();
        store.touch(&mut second).await.unwrap();

        let sessions = store.list().await.unwrap();
        assert_eq!(sessions[0].id, second.id);
        assert_eq!(sessions[1].id, first.id);
    }
}
