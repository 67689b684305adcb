//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application configuration
//! in TOML format with platform-specific directory resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::branding::{default_share_base_url, APP_DATA_DIR, CONFIG_DIR_ENV};
use crate::models::GrinderId;
use crate::wheel::SpinTuning;

/// Theme display mode preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ThemeMode {
    /// Automatically detect OS theme (dark/light)
    #[default]
    Auto,
    /// Always use dark theme
    Dark,
    /// Always use light theme
    Light,
}

impl std::str::FromStr for ThemeMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            other => anyhow::bail!("Unknown theme mode '{other}'. Valid modes: auto, dark, light"),
        }
    }
}

/// UI preferences configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct UiConfig {
    /// Theme mode preference (Auto, Dark, Light)
    pub theme_mode: ThemeMode,
    /// Grinder selected when a session starts
    pub default_grinder: GrinderId,
}

/// Brew timer preferences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimerConfig {
    /// Ring the terminal bell when the countdown reaches zero
    pub bell_on_finish: bool,
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            bell_on_finish: true,
        }
    }
}

/// Share link settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShareConfig {
    /// Base URL that share links point at
    pub base_url: String,
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            base_url: default_share_base_url(),
        }
    }
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/Roastitect/config.toml`
/// - macOS: `~/Library/Application Support/Roastitect/config.toml`
/// - Windows: `%APPDATA%\Roastitect\config.toml`
///
/// Setting `ROASTITECT_CONFIG_DIR` replaces the directory.
///
/// # Validation
///
/// - wheel tuning must be consistent (see [`SpinTuning::validate`])
/// - `share.base_url` must be an http(s) URL without a query string
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// UI preferences
    pub ui: UiConfig,
    /// Wheel spin tuning
    pub wheel: SpinTuning,
    /// Brew timer preferences
    pub timer: TimerConfig,
    /// Share link settings
    pub share: ShareConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the config directory path, honouring the override variable.
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|d| !d.is_empty()) {
            return Ok(PathBuf::from(dir));
        }

        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(APP_DATA_DIR);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Loads configuration from an explicit path.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            tracing::debug!(path = %config_path.display(), "No config file, using defaults");
            return Ok(Self::new());
        }

        let content = fs::read_to_string(config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        let config: Self = toml::from_str(&content).context(format!(
            "Failed to parse config file: {}",
            config_path.display()
        ))?;

        config.validate().context(format!(
            "Invalid config file: {}",
            config_path.display()
        ))?;

        Ok(config)
    }

    /// Saves configuration to the config file using atomic write.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    /// Saves configuration to an explicit path.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(config_dir) = config_path.parent() {
            fs::create_dir_all(config_dir).context(format!(
                "Failed to create config directory: {}",
                config_dir.display()
            ))?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;
        let temp_path = config_path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        fs::rename(&temp_path, config_path).context(format!(
            "Failed to rename temp config file to: {}",
            config_path.display()
        ))?;

        tracing::info!(path = %config_path.display(), "Configuration saved");
        Ok(())
    }

    /// Validates configuration values.
    pub fn validate(&self) -> Result<()> {
        self.wheel.validate()?;

        let url = self.share.base_url.trim();
        if !(url.starts_with("https://") || url.starts_with("http://")) {
            anyhow::bail!("share.base_url must start with http:// or https://, got '{url}'");
        }
        if url.contains('?') || url.contains('#') {
            anyhow::bail!("share.base_url must not contain a query string or fragment");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_new() {
        let config = Config::new();
        assert_eq!(config.ui.theme_mode, ThemeMode::Auto);
        assert_eq!(config.ui.default_grinder, GrinderId::TimemoreC3s);
        assert_eq!(config.wheel, SpinTuning::default());
        assert!(config.timer.bell_on_finish);
        assert_eq!(config.share.base_url, "https://roastitect.ketankarki.wiki");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::load_from(&temp_dir.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::new());
    }

    #[test]
    fn test_config_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("nested").join("config.toml");

        let mut config = Config::new();
        config.ui.theme_mode = ThemeMode::Light;
        config.ui.default_grinder = GrinderId::Kingrinder;
        config.timer.bell_on_finish = false;
        config.wheel.max_extra_spins = 9;
        config.save_to(&config_file).unwrap();

        assert!(!config_file.with_extension("toml.tmp").exists());
        let loaded = Config::load_from(&config_file).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        fs::write(&config_file, "[ui]\ndefault_grinder = \"comandante\"\n").unwrap();

        let config = Config::load_from(&config_file).unwrap();
        assert_eq!(config.ui.default_grinder, GrinderId::Comandante);
        assert_eq!(config.ui.theme_mode, ThemeMode::Auto);
        assert_eq!(config.wheel.spin_duration_ms, 5000);
    }

    #[test]
    fn test_invalid_wheel_rejected_on_load() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        fs::write(
            &config_file,
            "[wheel]\nmin_extra_spins = 9\nmax_extra_spins = 3\n",
        )
        .unwrap();

        let err = Config::load_from(&config_file).unwrap_err();
        assert!(format!("{err:#}").contains("cannot exceed"));
    }

    #[test]
    fn test_malformed_toml_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        fs::write(&config_file, "[ui\n").unwrap();
        assert!(Config::load_from(&config_file).is_err());
    }

    #[test]
    fn test_invalid_base_url_not_saved() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");

        let mut config = Config::new();
        config.share.base_url = "roastitect.example".to_string();
        assert!(config.save_to(&config_file).is_err());
        assert!(!config_file.exists());

        config.share.base_url = "https://x.test/?a=b".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_theme_mode_from_str() {
        assert_eq!("Dark".parse::<ThemeMode>().unwrap(), ThemeMode::Dark);
        assert_eq!("light".parse::<ThemeMode>().unwrap(), ThemeMode::Light);
        assert!("sepia".parse::<ThemeMode>().is_err());
    }
}
