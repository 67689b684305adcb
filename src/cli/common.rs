//! Shared plumbing for CLI subcommands: errors, exit codes and output helpers.

use serde::Serialize;
use std::fmt;

use crate::catalog::Catalog;
use crate::config::Config;
use crate::models::GrinderId;

/// Process exit codes used by every subcommand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Command completed
    Success = 0,
    /// Bad input: unknown id, invalid option value, invalid config
    ValidationError = 1,
    /// File system or serialization failure
    IoError = 2,
}

impl ExitCode {
    /// Numeric process exit status.
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        Self::from(code.code())
    }
}

/// A failed CLI command: what kind of failure and what to tell the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliError {
    /// Exit code this error maps to
    pub kind: ExitCode,
    /// Message printed to stderr
    pub message: String,
}

impl CliError {
    /// Invalid user input.
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            kind: ExitCode::ValidationError,
            message: message.into(),
        }
    }

    /// I/O or serialization failure.
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            kind: ExitCode::IoError,
            message: message.into(),
        }
    }

    /// Exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> ExitCode {
        self.kind
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI commands.
pub type CliResult<T> = Result<T, CliError>;

/// Prints `value` as pretty JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) -> CliResult<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?;
    println!("{json}");
    Ok(())
}

/// Loads the embedded catalog.
pub fn load_catalog() -> CliResult<Catalog> {
    Catalog::load().map_err(|e| CliError::io(format!("{e:#}")))
}

/// Loads the user configuration; an invalid file is a validation error.
pub fn load_config() -> CliResult<Config> {
    Config::load().map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))
}

/// Grinder from a `--grinder` flag, falling back to the configured default.
pub fn resolve_grinder(flag: Option<&str>) -> CliResult<GrinderId> {
    match flag {
        Some(value) => value
            .parse::<GrinderId>()
            .map_err(|e| CliError::validation(e.to_string())),
        None => Ok(load_config()?.ui.default_grinder),
    }
}

/// Serializable id/name pair for a grinder.
#[derive(Debug, Serialize)]
pub struct GrinderOutput {
    /// Stable id
    pub id: &'static str,
    /// Model name
    pub name: &'static str,
}

impl From<GrinderId> for GrinderOutput {
    fn from(grinder: GrinderId) -> Self {
        Self {
            id: grinder.id(),
            name: grinder.name(),
        }
    }
}
