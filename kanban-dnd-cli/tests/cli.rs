//! End-to-end tests for the `kanban-dnd` binary

use anyhow::Result;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn kanban_dnd(dir: &TempDir) -> Result<Command> {
    let mut cmd = Command::cargo_bin("kanban-dnd")?;
    cmd.current_dir(dir.path()).env_remove("RUST_LOG");
    Ok(cmd)
}

#[test]
fn test_show_seed_board() -> Result<()> {
    let dir = TempDir::new()?;

    kanban_dnd(&dir)?
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Todo (3)\n"))
        .stdout(predicate::str::contains("In Progress (3)"))
        .stdout(predicate::str::contains("Done (2)"));

    Ok(())
}

#[test]
fn test_show_discovers_config_file() -> Result<()> {
    let dir = TempDir::new()?;
    fs::write(
        dir.path().join("kanban-dnd.yaml"),
        r#"
columns:
  - id: backlog
    title: Backlog
tasks:
  - id: a
    column: backlog
"#,
    )?;

    kanban_dnd(&dir)?
        .arg("show")
        .assert()
        .success()
        .stdout("Backlog (1)\n  [a] Untitled Task\n");

    Ok(())
}

#[test]
fn test_replay_reorders_within_column() -> Result<()> {
    let dir = TempDir::new()?;
    let script = dir.path().join("gesture.json");
    fs::write(
        &script,
        r#"[
            {"op": "drag_start", "active": "1"},
            {"op": "drag_over", "active": "1", "over": "3", "kind": "task"},
            {"op": "drag_end", "active": "1", "over": "3"}
        ]"#,
    )?;

    kanban_dnd(&dir)?
        .arg("replay")
        .arg(&script)
        .assert()
        .success()
        .stdout(predicate::str::contains("moved 1 from 0 to 2 in todo"))
        .stdout(predicate::str::contains(
            "Todo (3)\n  [2] Design landing page\n  [3] Review codebase structure\n  [1] Create",
        ));

    Ok(())
}

#[test]
fn test_replay_json_output() -> Result<()> {
    let dir = TempDir::new()?;
    let script = dir.path().join("gesture.yaml");
    fs::write(
        &script,
        "- op: create\n  column: doing\n- op: rename\n  id: \"404\"\n  content: x\n",
    )?;

    let output = kanban_dnd(&dir)?
        .args(["replay", "--format", "json"])
        .arg(&script)
        .output()?;
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(value["steps"][0]["status"], "created");
    assert_eq!(value["steps"][1]["status"], "failed");
    assert_eq!(value["board"]["tasks"].as_array().map(Vec::len), Some(9));

    Ok(())
}

#[test]
fn test_missing_config_fails() -> Result<()> {
    let dir = TempDir::new()?;

    kanban_dnd(&dir)?
        .args(["--config", "nope.toml", "show"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed to load config"));

    Ok(())
}

#[test]
fn test_invalid_board_fails() -> Result<()> {
    let dir = TempDir::new()?;
    fs::write(
        dir.path().join("kanban-dnd.toml"),
        "[[tasks]]\nid = \"x\"\ncolumn = \"archive\"\n",
    )?;

    kanban_dnd(&dir)?
        .arg("show")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("invalid board configuration"));

    Ok(())
}

#[test]
fn test_unknown_subcommand_fails() -> Result<()> {
    let dir = TempDir::new()?;
    kanban_dnd(&dir)?.arg("serve").assert().code(1);
    Ok(())
}
