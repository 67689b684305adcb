//! Shared helpers for E2E CLI tests.
#![allow(dead_code)] // Not every test binary uses every helper

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Path to the roastitect binary
pub fn roastitect_bin() -> &'static str {
    env!("CARGO_BIN_EXE_roastitect")
}

/// Creates an empty config directory that lives as long as the returned guard.
pub fn temp_config_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp config dir")
}

/// Writes `contents` as `config.toml` inside `dir`.
pub fn write_config(dir: &Path, contents: &str) {
    fs::write(dir.join("config.toml"), contents).expect("Failed to write config");
}

/// Runs the binary with `args` against an isolated config directory.
pub fn run(args: &[&str], config_dir: &Path) -> Output {
    Command::new(roastitect_bin())
        .env("ROASTITECT_CONFIG_DIR", config_dir)
        .env_remove("RUST_LOG")
        .args(args)
        .output()
        .expect("Failed to execute command")
}

/// Runs a command that must succeed and parses its stdout as JSON.
pub fn run_json(args: &[&str], config_dir: &Path) -> serde_json::Value {
    let output = run(args, config_dir);
    assert_eq!(
        output.status.code(),
        Some(0),
        "{args:?} should succeed. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    serde_json::from_str(&stdout).expect("Should parse JSON output")
}

/// Stdout of a command that must succeed.
pub fn run_ok(args: &[&str], config_dir: &Path) -> String {
    let output = run(args, config_dir);
    assert_eq!(
        output.status.code(),
        Some(0),
        "{args:?} should succeed. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).into_owned()
}
