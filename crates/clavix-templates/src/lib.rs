//! Slash-command template generation and doc-block injection
//!
//! Each supported AI coding tool gets an adapter that knows where its slash
//! commands live and how files are named there. Command bodies are rendered
//! once through handlebars and written per tool.

pub mod adapter;
pub mod inject;
pub mod registry;
pub mod render;
pub mod targets;

pub use adapter::{GenerationReport, RenderedCommand, TargetAdapter};
pub use inject::{inject_block, inject_into_file, InjectOutcome};
pub use registry::AdapterRegistry;
pub use render::{CommandCatalog, CommandSpec};
