//! `spin` command: one headless spin of the method wheel.

use clap::Args;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use crate::cli::common::{load_catalog, load_config, print_json, CliError, CliResult};
use crate::wheel::{plan_spin, segment_under_pointer};

/// Spin the method wheel once and print the winner
#[derive(Args, Debug)]
pub struct SpinArgs {
    /// Seed for a reproducible spin
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Serialize, Debug)]
struct SpinOutput<'a> {
    seed: u64,
    winner_id: &'a str,
    winner_region: &'a str,
    winner_index: usize,
    segments: usize,
    extra_spins: u32,
    base_rotation: f64,
    offset: f64,
    target_rotation: f64,
    pointer_index: usize,
}

impl SpinArgs {
    /// Execute the spin command
    pub fn execute(&self) -> CliResult<()> {
        let catalog = load_catalog()?;
        let tuning = load_config()?.wheel;

        let seed = self.seed.unwrap_or_else(|| rand::rng().random());
        let mut rng = StdRng::seed_from_u64(seed);
        let segments = catalog.segment_count();
        let plan = plan_spin(&mut rng, segments, 0.0, &tuning);
        tracing::debug!(seed, winner = plan.winner_index, "Headless spin");

        let Some(winner) = catalog.get_by_index(plan.winner_index) else {
            return Err(CliError::io(format!(
                "Spin produced out-of-range segment {}",
                plan.winner_index
            )));
        };

        if self.json {
            return print_json(&SpinOutput {
                seed,
                winner_id: &winner.id,
                winner_region: &winner.region,
                winner_index: plan.winner_index,
                segments: segments.get(),
                extra_spins: plan.extra_spins,
                base_rotation: plan.base_rotation,
                offset: plan.offset,
                target_rotation: plan.target_rotation,
                pointer_index: segment_under_pointer(plan.target_rotation, segments),
            });
        }

        println!("The wheel lands on: {} ({})", winner.region, winner.id);
        println!(
            "  {} extra turns, stopping at {:.1}\u{b0} (seed {seed})",
            plan.extra_spins, plan.target_rotation
        );
        Ok(())
    }
}
