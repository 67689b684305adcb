//! CLI command handlers for Roastitect.
//!
//! This module provides headless, scriptable access to the catalog, the wheel
//! and the brew scheduler for automation and testing.

pub mod common;
pub mod config;
pub mod profiles;
pub mod share;
pub mod show;
pub mod spin;
pub mod steps;

// Re-export types used by main.rs and tests
pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use profiles::{GrindersArgs, ProfilesArgs};
pub use share::ShareArgs;
pub use show::ShowArgs;
pub use spin::SpinArgs;
pub use steps::StepsArgs;
