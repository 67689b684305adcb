//! End-to-end tests for `roastitect share`.

mod fixtures;
use fixtures::*;

use std::process::Command;

#[test]
fn test_share_card_contents() {
    let config = temp_config_dir();
    let stdout = run_ok(&["share", "french-press", "--grinder", "kingrinder"], config.path());

    assert!(stdout.contains("Roastitect Recipe - Classic Immersion (French Press)"));
    assert!(stdout.contains("Method: French Press"));
    assert!(stdout.contains("Time: 240s (4m 0s)"));
    assert!(stdout.contains("Grinder: Kingrinder K6 - 140 clicks"));
    assert!(stdout.contains("roastitect.ketankarki.wiki"));
}

#[test]
fn test_share_url_uses_configured_base() {
    let config = temp_config_dir();
    write_config(config.path(), "[share]\nbase_url = \"https://brew.example.org/app/\"\n");

    let stdout = run_ok(
        &["share", "moka-pot", "--grinder", "timemore-c3s", "--url"],
        config.path(),
    );
    assert_eq!(
        stdout.trim(),
        "https://brew.example.org/app?profile=moka-pot&grinder=timemore_c3s"
    );
}

#[test]
fn test_share_unknown_profile() {
    let config = temp_config_dir();
    let output = run(&["share", "instant"], config.path());
    assert_eq!(output.status.code(), Some(1));
}

#[cfg(target_os = "linux")]
#[test]
fn test_copy_without_display_prints_instead() {
    let config = temp_config_dir();
    let output = Command::new(roastitect_bin())
        .env("ROASTITECT_CONFIG_DIR", config.path())
        .env_remove("RUST_LOG")
        .env_remove("DISPLAY")
        .env_remove("WAYLAND_DISPLAY")
        .args(["share", "aeropress", "--url", "--copy"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!stdout.contains("Copied to clipboard"));
    assert!(!stderr.contains("Holding the clipboard"));
    assert!(stderr.contains("printing instead"));
    assert!(stdout.contains("?profile=aeropress&grinder="));
}
