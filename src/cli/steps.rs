//! `steps` command: the brew schedule for a profile.

use clap::Args;
use serde::Serialize;

use crate::brew::{brew_steps, format_clock, step_index_at, BrewStep};
use crate::cli::common::{load_catalog, print_json, CliError, CliResult};

/// Print the brew steps for a profile
#[derive(Args, Debug)]
pub struct StepsArgs {
    /// Profile id (see `roastitect profiles`)
    #[arg(value_name = "PROFILE")]
    profile: String,

    /// Elapsed seconds; reports the step in progress at that time
    #[arg(long, value_name = "SECONDS")]
    at: Option<u32>,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Serialize, Debug)]
struct StepsOutput<'a> {
    profile_id: &'a str,
    brew_method: String,
    brew_time: u32,
    elapsed: u32,
    remaining: u32,
    current_step_index: Option<usize>,
    current_step: Option<&'static str>,
    steps: &'a [BrewStep],
}

impl StepsArgs {
    /// Execute the steps command
    pub fn execute(&self) -> CliResult<()> {
        let catalog = load_catalog()?;
        let profile = catalog
            .require(&self.profile)
            .map_err(|e| CliError::validation(e.to_string()))?;

        let steps = brew_steps(profile.brew_method, profile.brew_time);
        let elapsed = self.at.unwrap_or(0).min(profile.brew_time);
        let current = step_index_at(&steps, elapsed);

        if self.json {
            return print_json(&StepsOutput {
                profile_id: &profile.id,
                brew_method: profile.brew_method.to_string(),
                brew_time: profile.brew_time,
                elapsed,
                remaining: profile.brew_time - elapsed,
                current_step_index: current,
                current_step: current.and_then(|i| steps.get(i)).map(|s| s.name),
                steps: &steps,
            });
        }

        println!(
            "{} - {} ({})",
            profile.id,
            profile.brew_method,
            format_clock(profile.brew_time)
        );
        let mut start = 0u32;
        for (idx, step) in steps.iter().enumerate() {
            let marker = if self.at.is_some() && current == Some(idx) {
                '>'
            } else {
                ' '
            };
            println!(
                "{marker} {}-{}  {:<13} {}",
                format_clock(start),
                format_clock(start + step.duration),
                step.name,
                step.instruction
            );
            start += step.duration;
        }
        if self.at.is_some() {
            println!();
            println!(
                "At {}: {} left",
                format_clock(elapsed),
                format_clock(profile.brew_time - elapsed)
            );
        }
        Ok(())
    }
}
