//! End-to-end tests for `roastitect steps`.

mod fixtures;
use fixtures::*;

#[test]
fn test_espresso_steps_after_six_seconds() {
    let config = temp_config_dir();
    let result = run_json(&["steps", "espresso", "--at", "6", "--json"], config.path());

    assert_eq!(result["brew_time"], 30);
    assert_eq!(result["elapsed"], 6);
    assert_eq!(result["remaining"], 24);
    assert_eq!(result["current_step"], "Extraction");
    assert_eq!(result["current_step_index"], 1);

    let steps = result["steps"].as_array().unwrap();
    assert_eq!(steps[0]["name"], "Pre-infusion");
    assert_eq!(steps[0]["duration"], 5);
    assert_eq!(steps[1]["duration"], 25);
}

#[test]
fn test_moka_pot_split() {
    let config = temp_config_dir();
    let result = run_json(&["steps", "moka-pot", "--json"], config.path());

    let steps = result["steps"].as_array().unwrap();
    assert_eq!(steps[0]["name"], "Heat");
    assert_eq!(steps[0]["duration"], 90);
    assert_eq!(steps[1]["name"], "Extraction");
    assert_eq!(steps[1]["duration"], 210);
    assert_eq!(result["current_step"], "Heat");
}

#[test]
fn test_elapsed_is_clamped_to_brew_time() {
    let config = temp_config_dir();
    let result = run_json(&["steps", "aeropress", "--at", "9999", "--json"], config.path());

    assert_eq!(result["elapsed"], 120);
    assert_eq!(result["remaining"], 0);
}

#[test]
fn test_step_durations_sum_to_brew_time() {
    let config = temp_config_dir();
    let profiles = run_json(&["profiles", "--json"], config.path());

    for profile in profiles["profiles"].as_array().unwrap() {
        let id = profile["id"].as_str().unwrap();
        let result = run_json(&["steps", id, "--json"], config.path());
        let sum: u64 = result["steps"]
            .as_array()
            .unwrap()
            .iter()
            .map(|s| s["duration"].as_u64().unwrap())
            .sum();
        assert_eq!(Some(sum), profile["brew_time"].as_u64(), "profile {id}");
    }
}

#[test]
fn test_steps_unknown_profile() {
    let config = temp_config_dir();
    let output = run(&["steps", "nope"], config.path());
    assert_eq!(output.status.code(), Some(1));
}
