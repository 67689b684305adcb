//! Tracing subscriber setup.
//!
//! The TUI owns the terminal, so interactive sessions log to a file in the
//! config directory. Headless subcommands log to stderr.

use anyhow::{Context, Result};
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;

/// Log file name inside the config directory.
pub const LOG_FILE_NAME: &str = "roastitect.log";

/// Where log output goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    /// Append to the log file (interactive TUI)
    File,
    /// Write to stderr (CLI subcommands)
    Stderr,
}

/// Default filter directive for a target and verbosity.
#[must_use]
pub const fn default_directive(target: LogTarget, verbose: bool) -> &'static str {
    match (target, verbose) {
        (_, true) => "debug",
        (LogTarget::File, false) => "info",
        (LogTarget::Stderr, false) => "warn",
    }
}

/// Path of the log file.
pub fn log_file_path() -> Result<PathBuf> {
    Ok(Config::config_dir()?.join(LOG_FILE_NAME))
}

/// Installs the global subscriber. `RUST_LOG` overrides the default level.
///
/// Returns the log file path when logging to a file.
pub fn init(target: LogTarget, verbose: bool) -> Result<Option<PathBuf>> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_directive(target, verbose).into());

    match target {
        LogTarget::Stderr => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .try_init()
                .context("Failed to install stderr logger")?;
            Ok(None)
        }
        LogTarget::File => {
            let path = log_file_path()?;
            let file = open_log_file(&path)?;
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_ansi(false)
                        .with_writer(Mutex::new(file)),
                )
                .try_init()
                .context("Failed to install file logger")?;
            Ok(Some(path))
        }
    }
}

fn open_log_file(path: &Path) -> Result<fs::File> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .context(format!("Failed to create log directory: {}", dir.display()))?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .context(format!("Failed to open log file: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_directives() {
        assert_eq!(default_directive(LogTarget::File, false), "info");
        assert_eq!(default_directive(LogTarget::Stderr, false), "warn");
        assert_eq!(default_directive(LogTarget::Stderr, true), "debug");
    }

    #[test]
    fn test_open_log_file_creates_directory() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("logs").join(LOG_FILE_NAME);
        open_log_file(&path).unwrap();
        assert!(path.exists());
    }
}
