//! Roastitect - terminal brew companion
//!
//! Spin the method wheel, dial in your grinder and time the brew. Without a
//! subcommand the interactive TUI starts; subcommands give headless access for
//! scripting.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use roastitect::catalog::Catalog;
use roastitect::cli::{
    ConfigArgs, ExitCode, GrindersArgs, ProfilesArgs, ShareArgs, ShowArgs, SpinArgs, StepsArgs,
};
use roastitect::config::Config;
use roastitect::logging::{self, LogTarget};
use roastitect::models::GrinderId;
use roastitect::session::Session;
use roastitect::share::parse_share_link;
use roastitect::tui;

/// Roastitect - spin the method wheel, calibrate your grinder, time your brew
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Start with this profile selected
    #[arg(long, value_name = "ID")]
    profile: Option<String>,

    /// Grinder to calibrate for (overrides the configured default)
    #[arg(long, value_name = "GRINDER")]
    grinder: Option<String>,

    /// Open a share link (profile and grinder from its query string)
    #[arg(long, value_name = "URL")]
    link: Option<String>,

    /// Seed for reproducible spins
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List coffee profiles in wheel order
    Profiles(ProfilesArgs),
    /// List supported grinders
    Grinders(GrindersArgs),
    /// Show a profile card with calibration, steps and journey
    Show(ShowArgs),
    /// Spin the wheel once without animation
    Spin(SpinArgs),
    /// Show the brew schedule at a point in time
    Steps(StepsArgs),
    /// Print or copy a share card
    Share(ShareArgs),
    /// View or change configuration
    Config(ConfigArgs),
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Some(ref command) => run_command(command, cli.verbose).into(),
        None => run_interactive(&cli).into(),
    }
}

fn run_command(command: &Command, verbose: bool) -> ExitCode {
    if let Err(e) = logging::init(LogTarget::Stderr, verbose) {
        eprintln!("Warning: {e:#}");
    }

    let result = match command {
        Command::Profiles(args) => args.execute(),
        Command::Grinders(args) => args.execute(),
        Command::Show(args) => args.execute(),
        Command::Spin(args) => args.execute(),
        Command::Steps(args) => args.execute(),
        Command::Share(args) => args.execute(),
        Command::Config(args) => args.execute(),
    };

    match result {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("Error: {e}");
            e.exit_code()
        }
    }
}

fn run_interactive(cli: &Cli) -> ExitCode {
    // A missing log file must not keep the TUI from starting
    match logging::init(LogTarget::File, cli.verbose) {
        Ok(Some(path)) => tracing::info!("Logging to {}", path.display()),
        Ok(None) => {}
        Err(e) => eprintln!("Warning: {e:#}"),
    }

    let (session, config) = match prepare_session(cli) {
        Ok(prepared) => prepared,
        Err(e) => {
            eprintln!("Error: {e:#}");
            return ExitCode::ValidationError;
        }
    };

    match run_tui(session, config, cli.seed) {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            tracing::error!("{e:#}");
            eprintln!("Error: {e:#}");
            ExitCode::IoError
        }
    }
}

/// Loads config and catalog and applies the startup selection.
fn prepare_session(cli: &Cli) -> Result<(Session, Config)> {
    let config = Config::load()?;
    let catalog = Catalog::load()?;
    let (profile, grinder) = startup_selection(cli, &config)?;

    let mut session = Session::new(catalog, config.wheel, grinder);
    if let Some(id) = profile {
        session.select_profile(&id)?;
    }
    Ok((session, config))
}

fn run_tui(session: Session, config: Config, seed: Option<u64>) -> Result<()> {
    let mut app_state = tui::AppState::new(session, config, seed);
    let mut terminal = tui::setup_terminal()?;
    let result = tui::run_tui(&mut app_state, &mut terminal);
    tui::restore_terminal(terminal)?;
    result
}

/// Profile and grinder to start with. Explicit flags win over a share link.
fn startup_selection(cli: &Cli, config: &Config) -> Result<(Option<String>, GrinderId)> {
    let target = cli
        .link
        .as_deref()
        .map(parse_share_link)
        .transpose()
        .context("Invalid share link")?;

    let grinder = match cli.grinder.as_deref() {
        Some(value) => value.parse::<GrinderId>()?,
        None => target
            .as_ref()
            .and_then(|t| t.grinder)
            .unwrap_or(config.ui.default_grinder),
    };
    let profile = cli.profile.clone().or(target.map(|t| t.profile_id));

    Ok((profile, grinder))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_startup_selection_prefers_flags() {
        let cli = Cli::parse_from([
            "roastitect",
            "--link",
            "https://example.com/?profile=espresso&grinder=kingrinder",
            "--grinder",
            "comandante",
        ]);
        let (profile, grinder) = startup_selection(&cli, &Config::default()).unwrap();
        assert_eq!(profile.as_deref(), Some("espresso"));
        assert_eq!(grinder, GrinderId::Comandante);
    }

    #[test]
    fn test_startup_selection_defaults() {
        let cli = Cli::parse_from(["roastitect"]);
        let (profile, grinder) = startup_selection(&cli, &Config::default()).unwrap();
        assert!(profile.is_none());
        assert_eq!(grinder, GrinderId::default());
    }
}
