//! End-to-end tests for the `catfacts` binary.
//!
//! Only commands that stay offline are exercised; the fetch command points
//! at an unreachable endpoint to check its failure path.
#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

const SEED: &str = r#"[{"id":"a","fact":"Cats sleep 70% of their lives.","length":29,"createdAt":"2024-01-01T00:00:00.000Z"}]"#;

fn catfacts(dir: &Path, args: &[&str], stdin: &str) -> Output {
    let config = dir.join("config.toml");
    if !config.exists() {
        std::fs::write(
            &config,
            "[api]\nendpoint = \"http://127.0.0.1:1/fact\"\ntimeout_ms = 2000\nconnect_timeout_ms = 1000\n",
        )
        .unwrap();
    }

    let mut child = Command::new(env!("CARGO_BIN_EXE_catfacts"))
        .arg("--config")
        .arg(&config)
        .arg("--data-dir")
        .arg(dir.join("data"))
        .args(args)
        .env_remove("RUST_LOG")
        .env_remove("CATFACTS_DATA_DIR")
        .env_remove("CATFACTS_STORAGE_KEY")
        .env_remove("CATFACTS_API_URL")
        .env_remove("CATFACTS_METRICS_ENABLED")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    child
        .stdin
        .take()
        .unwrap()
        .write_all(stdin.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

fn seed(dir: &Path) {
    let data = dir.join("data");
    std::fs::create_dir_all(&data).unwrap();
    std::fs::write(data.join("catfacts.json"), SEED).unwrap();
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

#[test]
fn test_list_empty() {
    let dir = TempDir::new().unwrap();

    let output = catfacts(dir.path(), &["list"], "");

    assert!(output.status.success());
    assert_eq!(stdout(&output), "No saved facts.\n");
}

#[test]
fn test_list_seeded() {
    let dir = TempDir::new().unwrap();
    seed(dir.path());

    let output = catfacts(dir.path(), &["list"], "");

    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("Cats sleep 70% of their lives."));
    assert!(text.contains("29 characters"));
    assert!(text.contains("[a]"));
}

#[test]
fn test_delete_with_confirmation() {
    let dir = TempDir::new().unwrap();
    seed(dir.path());

    let output = catfacts(dir.path(), &["delete", "a"], "y\n");

    assert!(output.status.success());
    assert!(stdout(&output).contains("Deleted."));
    let blob = std::fs::read_to_string(dir.path().join("data").join("catfacts.json")).unwrap();
    assert_eq!(blob, "[]");
}

#[test]
fn test_delete_cancelled() {
    let dir = TempDir::new().unwrap();
    seed(dir.path());

    let output = catfacts(dir.path(), &["delete", "a"], "n\n");

    assert!(output.status.success());
    assert!(stdout(&output).contains("Cancelled."));
    let blob = std::fs::read_to_string(dir.path().join("data").join("catfacts.json")).unwrap();
    assert_eq!(blob, SEED);
}

#[test]
fn test_fetch_failure_exits_nonzero() {
    let dir = TempDir::new().unwrap();

    let output = catfacts(dir.path(), &["fetch", "--save"], "");

    assert!(!output.status.success());
    assert!(stdout(&output).contains("Could not fetch a fact."));
    assert!(String::from_utf8_lossy(&output.stderr).contains("fetch failed"));
}

#[test]
fn test_metrics_flag_prints_counters() {
    let dir = TempDir::new().unwrap();
    seed(dir.path());

    let output = catfacts(dir.path(), &["--metrics", "delete", "a", "--yes"], "");

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("catfacts_facts_removed_total 1"));
    assert!(!stdout(&output).contains("catfacts_facts_removed_total"));
}

#[test]
fn test_metrics_off_by_default() {
    let dir = TempDir::new().unwrap();
    seed(dir.path());

    let output = catfacts(dir.path(), &["delete", "a", "--yes"], "");

    assert!(output.status.success());
    assert!(!String::from_utf8_lossy(&output.stderr).contains("catfacts_facts_removed_total"));
}

#[test]
fn test_config_shows_overrides() {
    let dir = TempDir::new().unwrap();

    let output = catfacts(dir.path(), &["config"], "");

    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("api.endpoint = http://127.0.0.1:1/fact"));
    assert!(text.contains(&format!("data_dir = {}", dir.path().join("data").display())));
}

#[test]
fn test_bad_config_file_fails() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("config.toml"), "storage_key = [").unwrap();

    let output = catfacts(dir.path(), &["list"], "");

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to load configuration"));
}
