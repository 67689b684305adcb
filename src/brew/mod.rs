//! Brew guidance: step tables, the countdown timer and its second ticker.

pub mod steps;
pub mod ticker;
pub mod timer;

pub use steps::{architect_tip, brew_steps, step_index_at, total_duration, BrewStep};
pub use ticker::SecondTicker;
pub use timer::{format_clock, BrewTimer, TimerEvent};
