//! End-to-end tests for `roastitect spin`.

mod fixtures;
use fixtures::*;

#[test]
fn test_spin_with_seed_is_reproducible() {
    let config = temp_config_dir();
    let first = run_json(&["spin", "--seed", "1234", "--json"], config.path());
    let second = run_json(&["spin", "--seed", "1234", "--json"], config.path());

    assert_eq!(first, second);
    assert_eq!(first["seed"], 1234);
}

#[test]
fn test_spin_lands_on_reported_winner() {
    let config = temp_config_dir();
    for seed in ["1", "2", "3", "99", "2024"] {
        let result = run_json(&["spin", "--seed", seed, "--json"], config.path());

        let segments = result["segments"].as_u64().unwrap();
        let winner = result["winner_index"].as_u64().unwrap();
        assert_eq!(segments, 6);
        assert!(winner < segments);
        assert_eq!(result["pointer_index"], result["winner_index"]);

        let extra = result["extra_spins"].as_u64().unwrap();
        assert!((5..=7).contains(&extra), "extra spins {extra} out of range");

        // At least five full turns, less at most half a segment of jitter
        let target = result["target_rotation"].as_f64().unwrap();
        assert!(target > 360.0 * 5.0 - 30.0);

        // |offset| stays inside 0.4 of a 60 degree segment
        let offset = result["offset"].as_f64().unwrap();
        assert!(offset.abs() < 12.0, "offset {offset} too large");
    }
}

#[test]
fn test_spin_respects_configured_tuning() {
    let config = temp_config_dir();
    write_config(
        config.path(),
        "[wheel]\nmin_extra_spins = 2\nmax_extra_spins = 2\njitter_fraction = 0.0\n",
    );

    let result = run_json(&["spin", "--seed", "5", "--json"], config.path());
    assert_eq!(result["extra_spins"], 2);
    assert_eq!(result["offset"].as_f64().unwrap(), 0.0);
}

#[test]
fn test_spin_plain_output_names_winner() {
    let config = temp_config_dir();
    let stdout = run_ok(&["spin", "--seed", "7"], config.path());
    assert!(stdout.contains("The wheel lands on:"));
}
