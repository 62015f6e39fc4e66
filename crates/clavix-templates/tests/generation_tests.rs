//! File-generation tests over real temp directories.

use clavix_templates::{AdapterRegistry, CommandCatalog};

#[tokio::test]
async fn generates_commands_for_claude_layout() {
    let dir = tempfile::tempdir().unwrap();
    let registry = AdapterRegistry::with_defaults();
    let adapter = registry.get("claude").unwrap();
    let catalog = CommandCatalog::new("0.1.0").unwrap();

    let rendered = catalog.render_for(adapter.as_ref()).unwrap();
    let report = adapter
        .generate_commands(dir.path(), &rendered)
        .await
        .unwrap();

    assert_eq!(report.target, "claude");
    assert_eq!(report.written.len(), CommandCatalog::specs().len());
    let fast = dir.path().join(".claude/commands/clavix-fast.md");
    assert!(fast.is_file());
    let content = tokio::fs::read_to_string(&fast).await.unwrap();
    assert!(content.contains("Claude Code"));
}

#[tokio::test]
async fn copilot_files_use_prompt_suffix() {
    let dir = tempfile::tempdir().unwrap();
    let registry = AdapterRegistry::with_defaults();
    let adapter = registry.get("copilot").unwrap();
    let catalog = CommandCatalog::new("0.1.0").unwrap();

    let rendered = catalog.render_for(adapter.as_ref()).unwrap();
    adapter
        .generate_commands(dir.path(), &rendered)
        .await
        .unwrap();

    assert!(dir
        .path()
        .join(".github/prompts/clavix-fast.prompt.md")
        .is_file());
}

#[tokio::test]
async fn regeneration_overwrites_stale_files() {
    let dir = tempfile::tempdir().unwrap();
    let registry = AdapterRegistry::with_defaults();
    let adapter = registry.get("claude").unwrap();

    let old = CommandCatalog::new("0.0.9").unwrap();
    let rendered = old.render_for(adapter.as_ref()).unwrap();
    adapter.generate_commands(dir.path(), &rendered).await.unwrap();

    let new = CommandCatalog::new("0.1.0").unwrap();
    let rendered = new.render_for(adapter.as_ref()).unwrap();
    adapter.generate_commands(dir.path(), &rendered).await.unwrap();

    let content = tokio::fs::read_to_string(dir.path().join(".claude/commands/clavix-fast.md"))
        .await
        .unwrap();
    assert!(content.contains("0.1.0"));
    assert!(!content.contains("0.0.9"));
}
