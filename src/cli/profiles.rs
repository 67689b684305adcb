//! `profiles` and `grinders` listing commands.

use clap::Args;
use serde::Serialize;

use crate::cli::common::{load_catalog, print_json, CliResult, GrinderOutput};
use crate::models::{CoffeeProfile, GrinderId};

/// List the coffee profiles in wheel order
#[derive(Args, Debug)]
pub struct ProfilesArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Serialize, Debug)]
struct ProfilesOutput<'a> {
    profiles: &'a [CoffeeProfile],
    count: usize,
}

impl ProfilesArgs {
    /// Execute the profiles command
    pub fn execute(&self) -> CliResult<()> {
        let catalog = load_catalog()?;

        if self.json {
            return print_json(&ProfilesOutput {
                profiles: catalog.profiles(),
                count: catalog.len(),
            });
        }

        println!("Coffee profiles ({}):", catalog.len());
        println!();
        for (idx, profile) in catalog.profiles().iter().enumerate() {
            println!(
                "  {idx}. {:<14} {} [{} roast, {}, {}s]",
                profile.id,
                profile.region,
                profile.roast_level,
                profile.brew_method,
                profile.brew_time
            );
        }
        Ok(())
    }
}

/// List the supported grinders
#[derive(Args, Debug)]
pub struct GrindersArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Serialize, Debug)]
struct GrindersOutput {
    grinders: Vec<GrinderOutput>,
    count: usize,
}

impl GrindersArgs {
    /// Execute the grinders command
    pub fn execute(&self) -> CliResult<()> {
        if self.json {
            return print_json(&GrindersOutput {
                grinders: GrinderId::ALL.into_iter().map(GrinderOutput::from).collect(),
                count: GrinderId::ALL.len(),
            });
        }

        println!("Grinders:");
        for grinder in GrinderId::ALL {
            println!("  {:<14} {}", grinder.id(), grinder.name());
        }
        Ok(())
    }
}
