//! End-to-end CLI tests
//!
//! Spawn the real `clavix` binary against temp project directories and check
//! exit codes and output.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn clavix(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("clavix").expect("clavix binary");
    cmd.current_dir(dir.path());
    cmd
}

#[test]
fn init_yes_scaffolds_default_layout() {
    let dir = TempDir::new().unwrap();

    clavix(&dir)
        .args(["init", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized"));

    assert!(dir.path().join(".clavix/config.json").is_file());
    assert!(dir.path().join(".clavix/tasks.md").is_file());
    assert!(dir.path().join(".claude/commands/clavix-fast.md").is_file());

    let claude_md = std::fs::read_to_string(dir.path().join("CLAUDE.md")).unwrap();
    assert!(claude_md.contains("<!-- CLAVIX:BEGIN -->"));
    assert!(claude_md.contains("<!-- CLAVIX:END -->"));
}

#[test]
fn init_with_explicit_targets() {
    let dir = TempDir::new().unwrap();

    clavix(&dir)
        .args(["init", "--targets", "cursor,copilot"])
        .assert()
        .success();

    assert!(dir.path().join(".cursor/commands/clavix-deep.md").is_file());
    assert!(dir
        .path()
        .join(".github/prompts/clavix-deep.prompt.md")
        .is_file());
    assert!(!dir.path().join(".claude").exists());

    let raw = std::fs::read_to_string(dir.path().join(".clavix/config.json")).unwrap();
    let config: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(config["targets"], serde_json::json!(["cursor", "copilot"]));
}

#[test]
fn init_rejects_unknown_target() {
    let dir = TempDir::new().unwrap();

    clavix(&dir)
        .args(["init", "--targets", "emacs"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown target"));
}

#[test]
fn optimize_reports_intent_and_quality() {
    let dir = TempDir::new().unwrap();
    clavix(&dir).args(["init", "--yes"]).assert().success();

    clavix(&dir)
        .args(["optimize", "Build a login page", "--mode", "fast"])
        .assert()
        .success()
        .stdout(predicate::str::contains("code-generation"))
        .stdout(predicate::str::contains("Quality:"));
}

#[test]
fn optimize_works_without_a_workspace() {
    let dir = TempDir::new().unwrap();

    clavix(&dir)
        .args(["optimize", "Build a login page"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Enhanced prompt:"));
}

#[test]
fn optimize_saves_a_prompt_record() {
    let dir = TempDir::new().unwrap();
    clavix(&dir).args(["init", "--yes"]).assert().success();

    clavix(&dir)
        .args(["optimize", "Build a login page", "--mode", "deep"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved"));

    let prompts: Vec<_> = std::fs::read_dir(dir.path().join(".clavix/prompts"))
        .unwrap()
        .collect();
    // Markdown record plus JSON sidecar.
    assert_eq!(prompts.len(), 2);
}

#[test]
fn optimize_rejects_unknown_mode() {
    let dir = TempDir::new().unwrap();

    clavix(&dir)
        .args(["optimize", "anything", "--mode", "turbo"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported mode"));
}

#[test]
fn prd_flags_terse_answer() {
    let dir = TempDir::new().unwrap();

    clavix(&dir)
        .args(["prd", "idk"])
        .assert()
        .success()
        .stdout(predicate::str::contains("needs more detail"))
        .stdout(predicate::str::contains("the problem you're solving"));
}

#[test]
fn status_summarizes_the_workspace() {
    let dir = TempDir::new().unwrap();
    clavix(&dir).args(["init", "--yes"]).assert().success();

    clavix(&dir)
        .args(["status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Targets:"))
        .stdout(predicate::str::contains("Tasks:"));
}

#[test]
fn status_fails_outside_a_workspace() {
    let dir = TempDir::new().unwrap();

    clavix(&dir)
        .args(["status"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("clavix init"));
}

#[test]
fn tasks_add_and_list_round_trip() {
    let dir = TempDir::new().unwrap();
    clavix(&dir).args(["init", "--yes"]).assert().success();

    clavix(&dir)
        .args(["tasks", "--add", "ship the login page"])
        .assert()
        .success();

    clavix(&dir)
        .args(["tasks"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ship the login page"));
}
