//! Exit status and output of the `sequent` binary.
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::net::TcpListener;
use std::process::{Command, Output};

use tempfile::tempdir;

fn sequent(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_sequent"))
        .args(args)
        .env_remove("RUST_LOG")
        .env("SEQUENT_LOG", "off")
        .output()
        .expect("failed to launch sequent")
}

/// A local port nothing listens on.
fn closed_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    listener.local_addr().unwrap().port()
}

#[test]
fn test_missing_suite_is_fatal() {
    let dir = tempdir().unwrap();

    let output = sequent(&["run", "ghost", "--suites-dir", dir.path().to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("suite not found: ghost"), "stderr: {stderr}");
}

#[test]
fn test_failed_step_exits_with_one() {
    let dir = tempdir().unwrap();
    let port = closed_port();
    let suite = format!(
        r#"[{{"sequence": 1, "url": "http://127.0.0.1:{port}/health", "method": "GET", "expectedStatus": 200}}]"#
    );
    std::fs::write(dir.path().join("down.json"), suite).unwrap();
    let report = dir.path().join("report.json");

    let output = sequent(&[
        "run",
        "down",
        "--suites-dir",
        dir.path().to_str().unwrap(),
        "--format",
        "json",
        "--output",
        report.to_str().unwrap(),
    ]);

    assert_eq!(output.status.code(), Some(1));
    let runs: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&report).unwrap()).unwrap();
    assert_eq!(runs[0]["suite"], "down");
    assert_eq!(runs[0]["results"][0]["status"], "N/A");
    assert_eq!(runs[0]["report"]["failed"], 1);
}

#[test]
fn test_empty_suite_file_passes() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("empty.yaml");
    std::fs::write(&path, "name: empty\ntestCases: []\n").unwrap();

    let output = sequent(&["run", path.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("0 tests, 0 passed, 0 failed"), "stdout: {stdout}");
}

#[test]
fn test_invalid_settings_file_is_fatal() {
    let dir = tempdir().unwrap();
    let settings = dir.path().join("settings.json");
    std::fs::write(&settings, "{not json").unwrap();
    std::fs::write(dir.path().join("any.json"), "[]").unwrap();

    let output = sequent(&[
        "run",
        "any",
        "--suites-dir",
        dir.path().to_str().unwrap(),
        "--settings",
        settings.to_str().unwrap(),
    ]);

    assert_eq!(output.status.code(), Some(2));
}
