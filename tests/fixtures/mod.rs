//! Shared test fixtures for E2E CLI tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Path to the tintscale binary
pub fn tintscale_bin() -> &'static str {
    env!("CARGO_BIN_EXE_tintscale")
}

/// Creates a Command with an isolated config directory.
///
/// Pass the same directory to several commands to share configuration in one test.
pub fn isolated_command(args: &[&str], config_dir: &Path) -> Command {
    let mut cmd = Command::new(tintscale_bin());
    cmd.env("TINTSCALE_CONFIG_DIR", config_dir);
    cmd.env_remove("RUST_LOG");
    cmd.args(args);
    cmd
}

/// Runs the binary with a fresh, empty config directory.
pub fn run(args: &[&str]) -> Output {
    let config_dir = TempDir::new().expect("Failed to create temp dir");
    isolated_command(args, config_dir.path())
        .output()
        .expect("Failed to execute command")
}

/// Runs the binary and parses stdout as JSON, asserting success.
pub fn run_json(args: &[&str]) -> serde_json::Value {
    let output = run(args);
    assert_success(&output);
    serde_json::from_slice(&output.stdout).expect("Should parse JSON output")
}

pub fn assert_success(output: &Output) {
    assert_eq!(
        output.status.code(),
        Some(0),
        "Command should succeed. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

/// Writes a scale input file (`[{"id": N, "color": "..."}]`) into `dir`.
pub fn write_scales_file(dir: &Path, scales: &[(u32, &str)]) -> PathBuf {
    let entries: Vec<serde_json::Value> = scales
        .iter()
        .map(|(id, color)| serde_json::json!({ "id": id, "color": color }))
        .collect();
    let path = dir.join("scales.json");
    fs::write(&path, serde_json::to_string_pretty(&entries).unwrap())
        .expect("Failed to write scales file");
    path
}
