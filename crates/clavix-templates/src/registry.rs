//! Adapter registry
//!
//! Owns one boxed adapter per supported tool, in a fixed registration order
//! so listings and detection output are stable.

use std::path::Path;
use std::sync::Arc;

use crate::adapter::TargetAdapter;
use crate::targets::{
    ClaudeAdapter, CodexAdapter, CopilotAdapter, CursorAdapter, GeminiAdapter, WindsurfAdapter,
};

pub struct AdapterRegistry {
    adapters: Vec<Arc<dyn TargetAdapter>>,
}

impl AdapterRegistry {
    /// Registry with every built-in tool adapter.
    pub fn with_defaults() -> Self {
        Self {
            adapters: vec![
                Arc::new(ClaudeAdapter),
                Arc::new(CursorAdapter),
                Arc::new(CopilotAdapter),
                Arc::new(WindsurfAdapter),
                Arc::new(GeminiAdapter),
                Arc::new(CodexAdapter),
            ],
        }
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn TargetAdapter>> {
        self.adapters.iter().find(|a| a.name() == name).cloned()
    }

    pub fn all(&self) -> &[Arc<dyn TargetAdapter>] {
        &self.adapters
    }

    /// Adapters whose tool appears to be set up in this project, in
    /// registration order.
    pub fn detect(&self, project_root: &Path) -> Vec<Arc<dyn TargetAdapter>> {
        self.adapters
            .iter()
            .filter(|a| a.detect_project(project_root))
            .cloned()
            .collect()
    }
}

impl Default for AdapterRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
