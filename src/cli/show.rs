//! `show` command: everything about one profile.

use clap::Args;
use serde::Serialize;

use crate::brew::{architect_tip, brew_steps, format_clock, BrewStep};
use crate::calibration::Calibration;
use crate::cli::common::{
    load_catalog, load_config, print_json, resolve_grinder, CliError, CliResult, GrinderOutput,
};
use crate::journey::{journey_stages, JourneyStage};
use crate::models::CoffeeProfile;
use crate::share::share_url;

/// Show a profile with its calibration, brew steps and journey
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Profile id (see `roastitect profiles`)
    #[arg(value_name = "PROFILE")]
    profile: String,

    /// Grinder id; defaults to the configured grinder
    #[arg(long, value_name = "GRINDER")]
    grinder: Option<String>,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Serialize, Debug)]
struct CalibrationOutput {
    ticks: u32,
    dial_rotation: u32,
    advice: String,
}

#[derive(Serialize, Debug)]
struct ShowOutput<'a> {
    profile: &'a CoffeeProfile,
    grinder: GrinderOutput,
    calibration: CalibrationOutput,
    steps: Vec<BrewStep>,
    tip: &'static str,
    journey: Vec<JourneyStage>,
    share_url: String,
}

impl ShowArgs {
    /// Execute the show command
    pub fn execute(&self) -> CliResult<()> {
        let catalog = load_catalog()?;
        let profile = catalog
            .require(&self.profile)
            .map_err(|e| CliError::validation(e.to_string()))?;
        let grinder = resolve_grinder(self.grinder.as_deref())?;
        let config = load_config()?;

        let calibration = Calibration::for_profile(profile, grinder);
        let steps = brew_steps(profile.brew_method, profile.brew_time);
        let journey = journey_stages(profile, grinder);
        let tip = architect_tip(profile.brew_method);

        if self.json {
            return print_json(&ShowOutput {
                profile,
                grinder: grinder.into(),
                calibration: CalibrationOutput {
                    ticks: calibration.ticks,
                    dial_rotation: calibration.dial_rotation(),
                    advice: calibration.advice(),
                },
                steps,
                tip,
                journey,
                share_url: share_url(&config.share.base_url, &profile.id, grinder),
            });
        }

        println!("{}", profile.region);
        println!("{}", "=".repeat(profile.region.chars().count()));
        println!("{}", profile.story);
        println!();
        println!("Notes:   {}", profile.notes.join(", "));
        println!("Roast:   {}", profile.roast_level);
        println!(
            "Method:  {} ({})",
            profile.brew_method,
            format_clock(profile.brew_time)
        );
        println!();
        println!(
            "Grinder: {} - {} clicks",
            calibration.grinder_name, calibration.ticks
        );
        println!("         {}", calibration.advice());
        println!();
        println!("Steps:");
        for (idx, step) in steps.iter().enumerate() {
            println!(
                "  {}. {:<13} {:>4}s  {}",
                idx + 1,
                step.name,
                step.duration,
                step.instruction
            );
        }
        println!();
        println!("Tip: {tip}");
        println!();
        for stage in &journey {
            println!("{}", stage.title);
            println!("  {}", stage.description);
        }
        Ok(())
    }
}
