//! Configuration management CLI commands.

use crate::cli::common::{load_config, print_json, CliError, CliResult};
use crate::config::{Config, ThemeMode};
use crate::models::GrinderId;
use clap::{Args, Subcommand};
use serde::Serialize;

/// Configuration management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Set configuration values
    Set(ConfigSetArgs),
}

/// Display current configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set configuration values
#[derive(Args, Debug)]
pub struct ConfigSetArgs {
    /// Theme mode (auto, light, or dark)
    #[arg(long, value_name = "MODE")]
    theme: Option<String>,

    /// Grinder selected at startup
    #[arg(long, value_name = "GRINDER")]
    grinder: Option<String>,

    /// Ring the terminal bell when the brew timer finishes
    #[arg(long, value_name = "BOOL")]
    bell: Option<bool>,

    /// Base URL for share links
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,
}

/// JSON-serializable configuration for output
#[derive(Serialize, Debug)]
struct ConfigOutput<'a> {
    path: String,
    ui: UiOutput,
    wheel: &'a crate::wheel::SpinTuning,
    timer: &'a crate::config::TimerConfig,
    share: &'a crate::config::ShareConfig,
}

#[derive(Serialize, Debug)]
struct UiOutput {
    theme: String,
    default_grinder: &'static str,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Set(args) => args.execute(),
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config()?;

        if self.json {
            output_json(&config)
        } else {
            output_human_readable(&config);
            Ok(())
        }
    }
}

impl ConfigSetArgs {
    /// Execute set command
    pub fn execute(&self) -> CliResult<()> {
        if self.theme.is_none()
            && self.grinder.is_none()
            && self.bell.is_none()
            && self.base_url.is_none()
        {
            return Err(CliError::validation(
                "At least one configuration option must be specified: --theme, --grinder, --bell, or --base-url",
            ));
        }

        let mut config = Config::load().unwrap_or_else(|e| {
            tracing::warn!("Existing configuration unreadable, starting from defaults: {e:#}");
            Config::default()
        });

        if let Some(theme) = &self.theme {
            config.ui.theme_mode = theme
                .parse::<ThemeMode>()
                .map_err(|e| CliError::validation(e.to_string()))?;
        }

        if let Some(grinder) = &self.grinder {
            config.ui.default_grinder = grinder
                .parse::<GrinderId>()
                .map_err(|e| CliError::validation(e.to_string()))?;
        }

        if let Some(bell) = self.bell {
            config.timer.bell_on_finish = bell;
        }

        if let Some(url) = &self.base_url {
            config.share.base_url = url.trim().to_string();
        }

        config
            .validate()
            .map_err(|e| CliError::validation(format!("Invalid configuration: {e}")))?;

        config
            .save()
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e:#}")))?;

        println!("Configuration updated successfully.");

        Ok(())
    }
}

fn theme_label(mode: ThemeMode) -> String {
    format!("{mode:?}").to_lowercase()
}

fn config_path_display() -> String {
    Config::config_file_path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|_| "(unknown)".to_string())
}

/// Output configuration in JSON format
fn output_json(config: &Config) -> CliResult<()> {
    print_json(&ConfigOutput {
        path: config_path_display(),
        ui: UiOutput {
            theme: theme_label(config.ui.theme_mode),
            default_grinder: config.ui.default_grinder.id(),
        },
        wheel: &config.wheel,
        timer: &config.timer,
        share: &config.share,
    })
}

/// Output configuration in human-readable format
fn output_human_readable(config: &Config) {
    println!("Configuration ({})", config_path_display());
    println!();
    println!("[ui]");
    println!("  theme:           {}", theme_label(config.ui.theme_mode));
    println!(
        "  default grinder: {} ({})",
        config.ui.default_grinder.id(),
        config.ui.default_grinder.name()
    );
    println!();
    println!("[wheel]");
    println!(
        "  extra spins:     {}-{}",
        config.wheel.min_extra_spins, config.wheel.max_extra_spins
    );
    println!("  jitter fraction: {}", config.wheel.jitter_fraction);
    println!("  spin duration:   {} ms", config.wheel.spin_duration_ms);
    println!("  reveal delay:    {} ms", config.wheel.reveal_delay_ms);
    println!();
    println!("[timer]");
    println!("  bell on finish:  {}", config.timer.bell_on_finish);
    println!();
    println!("[share]");
    println!("  base url:        {}", config.share.base_url);
}
