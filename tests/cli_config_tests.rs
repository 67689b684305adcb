//! End-to-end tests for `roastitect config` commands.

use std::fs;

mod fixtures;
use fixtures::*;

// ============================================================================
// Show Command Tests
// ============================================================================

#[test]
fn test_config_show_defaults_json() {
    let config = temp_config_dir();
    let result = run_json(&["config", "show", "--json"], config.path());

    assert_eq!(result["ui"]["theme"], "auto");
    assert_eq!(result["ui"]["default_grinder"], "timemore_c3s");
    assert_eq!(result["wheel"]["min_extra_spins"], 5);
    assert_eq!(result["wheel"]["max_extra_spins"], 7);
    assert_eq!(result["timer"]["bell_on_finish"], true);
    assert_eq!(result["share"]["base_url"], "https://roastitect.ketankarki.wiki");
    assert!(result["path"].as_str().unwrap().ends_with("config.toml"));
}

#[test]
fn test_config_show_plain() {
    let config = temp_config_dir();
    let stdout = run_ok(&["config", "show"], config.path());
    assert!(stdout.contains("theme") || stdout.contains("Theme"));
}

#[test]
fn test_config_show_rejects_invalid_file() {
    let config = temp_config_dir();
    write_config(config.path(), "[wheel]\nmin_extra_spins = 0\n");

    let output = run(&["config", "show"], config.path());
    assert_eq!(output.status.code(), Some(1));
}

// ============================================================================
// Set Command Tests
// ============================================================================

#[test]
fn test_config_set_round_trip() {
    let config = temp_config_dir();
    let stdout = run_ok(
        &[
            "config",
            "set",
            "--theme",
            "light",
            "--grinder",
            "comandante",
            "--bell",
            "false",
            "--base-url",
            "http://localhost:8080",
        ],
        config.path(),
    );
    assert!(stdout.contains("Configuration updated successfully."));
    assert!(config.path().join("config.toml").exists());
    assert!(!config.path().join("config.toml.tmp").exists());

    let result = run_json(&["config", "show", "--json"], config.path());
    assert_eq!(result["ui"]["theme"], "light");
    assert_eq!(result["ui"]["default_grinder"], "comandante");
    assert_eq!(result["timer"]["bell_on_finish"], false);
    assert_eq!(result["share"]["base_url"], "http://localhost:8080");
}

#[test]
fn test_config_set_keeps_other_values() {
    let config = temp_config_dir();
    run_ok(&["config", "set", "--grinder", "kingrinder"], config.path());
    run_ok(&["config", "set", "--theme", "dark"], config.path());

    let result = run_json(&["config", "show", "--json"], config.path());
    assert_eq!(result["ui"]["theme"], "dark");
    assert_eq!(result["ui"]["default_grinder"], "kingrinder");
}

#[test]
fn test_config_set_requires_an_option() {
    let config = temp_config_dir();
    let output = run(&["config", "set"], config.path());
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_config_set_invalid_values() {
    let config = temp_config_dir();
    for args in [
        ["config", "set", "--theme", "sepia"],
        ["config", "set", "--grinder", "baratza"],
        ["config", "set", "--base-url", "ftp://example.com"],
    ] {
        let output = run(&args, config.path());
        assert_eq!(output.status.code(), Some(1), "{args:?} should be rejected");
    }
    assert!(
        fs::read_dir(config.path()).unwrap().next().is_none(),
        "rejected values must not write a config file"
    );
}
