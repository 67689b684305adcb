//! Data models for coffee profiles and grinders.
//!
//! This module contains the core data structures used throughout the application.
//! Models are independent of UI and session logic.

pub mod grinder;
pub mod profile;

// Re-export all model types
pub use grinder::GrinderId;
pub use profile::{BrewMethod, CoffeeProfile, GrindTicks, RoastLevel};
