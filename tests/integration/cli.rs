//! Integration tests for the `ratc` binary

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Helper function to create a test file
fn create_test_file(
    dir: &TempDir,
    name: &str,
    content: &str,
) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

/// Run the binary inside `dir`, isolated from any user config
fn ratc(
    dir: &TempDir,
    args: &[&str],
) -> Output {
    Command::new(env!("CARGO_BIN_EXE_ratc"))
        .args(args)
        .current_dir(dir.path())
        .env_remove("RATC_CONFIG")
        .env("XDG_CONFIG_HOME", dir.path())
        .output()
        .unwrap()
}

#[test]
fn test_check_valid_file() {
    let temp_dir = TempDir::new().unwrap();
    create_test_file(&temp_dir, "ok.rat", "let x = 1 + 2\nprint(x)\n");

    let output = ratc(&temp_dir, &["check", "ok.rat"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("ok: ok.rat"), "{}", stdout);
    assert!(stdout.contains("2 statements"), "{}", stdout);
}

#[test]
fn test_check_invalid_file_reports_snippet() {
    let temp_dir = TempDir::new().unwrap();
    create_test_file(&temp_dir, "bad.rat", "let x = 1\nlet y = 2 3\n");

    let output = ratc(&temp_dir, &["--no-color", "check", "bad.rat"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error: parser error"), "{}", stderr);
    assert!(stderr.contains(" --> bad.rat:2:11"), "{}", stderr);
    assert!(stderr.contains("2 | let y = 2 3"), "{}", stderr);
    assert!(stderr.contains("  |           ^"), "{}", stderr);
}

#[test]
fn test_tokens_listing() {
    let temp_dir = TempDir::new().unwrap();
    create_test_file(&temp_dir, "t.rat", "let x = 5");

    let output = ratc(&temp_dir, &["tokens", "t.rat"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        vec![
            "KEYWORD 'let' @ 1:1",
            "IDENTIFIER 'x' @ 1:5",
            "OPERATOR '=' @ 1:7",
            "NUMERIC_LITERAL '5' @ 1:9",
        ]
    );
}

#[test]
fn test_parse_json() {
    let temp_dir = TempDir::new().unwrap();
    create_test_file(&temp_dir, "p.rat", "rev");

    let output = ratc(&temp_dir, &["parse", "--format", "json", "p.rat"]);
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value[0]["Return"]["kind"], "FunctionReturnVoid");
}

#[test]
fn test_project_config_selects_json() {
    let temp_dir = TempDir::new().unwrap();
    create_test_file(&temp_dir, "ratc.toml", "[output]\nformat = \"json\"\n");
    create_test_file(&temp_dir, "c.rat", "let x = 1");

    let output = ratc(&temp_dir, &["check", "c.rat"]);
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["statements"], 1);
}

#[test]
fn test_json_diagnostic() {
    let temp_dir = TempDir::new().unwrap();
    create_test_file(&temp_dir, "e.rat", "}");

    let output = ratc(&temp_dir, &["--format", "json", "parse", "e.rat"]);
    assert!(!output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["severity"], "error");
    assert_eq!(value["file"], "e.rat");
    assert_eq!(value["line"], 1);
    assert_eq!(value["column"], 1);
}

#[test]
fn test_malformed_config_fails() {
    let temp_dir = TempDir::new().unwrap();
    let config = create_test_file(&temp_dir, "broken.toml", "[log\nlevel = ");
    create_test_file(&temp_dir, "c.rat", "let x = 1");

    let output = ratc(
        &temp_dir,
        &["--config", config.to_str().unwrap(), "check", "c.rat"],
    );
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to load configuration"), "{}", stderr);
}
