//! Roastitect Library
//!
//! Core of the Roastitect brew companion: the coffee profile catalog, the
//! method wheel, grinder calibration, the brew timer and its step schedule,
//! share cards, plus the CLI and terminal UI built on top of them.

// Module declarations
pub mod branding;
pub mod brew;
pub mod calibration;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod journey;
pub mod logging;
pub mod models;
pub mod session;
pub mod share;
pub mod shortcuts;
pub mod tui;
pub mod wheel;
