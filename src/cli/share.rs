//! `share` command: recipe card or share link.

use clap::Args;

use crate::cli::common::{load_catalog, load_config, resolve_grinder, CliError, CliResult};
use crate::share::{copy_to_clipboard_and_wait, share_text, share_url};

/// Print (or copy) the shareable recipe for a profile
#[derive(Args, Debug)]
pub struct ShareArgs {
    /// Profile id (see `roastitect profiles`)
    #[arg(value_name = "PROFILE")]
    profile: String,

    /// Grinder id; defaults to the configured grinder
    #[arg(long, value_name = "GRINDER")]
    grinder: Option<String>,

    /// Print the share link instead of the recipe card
    #[arg(long)]
    url: bool,

    /// Copy to the clipboard (prints instead when no clipboard is available)
    #[arg(long)]
    copy: bool,
}

impl ShareArgs {
    /// Execute the share command
    pub fn execute(&self) -> CliResult<()> {
        let catalog = load_catalog()?;
        let profile = catalog
            .require(&self.profile)
            .map_err(|e| CliError::validation(e.to_string()))?;
        let grinder = resolve_grinder(self.grinder.as_deref())?;

        let text = if self.url {
            let config = load_config()?;
            share_url(&config.share.base_url, &profile.id, grinder)
        } else {
            share_text(profile, grinder)
        };

        if self.copy {
            let hold = || {
                if cfg!(target_os = "linux") {
                    eprintln!(
                        "Holding the clipboard until it is pasted or replaced (Ctrl+C to stop)..."
                    );
                }
            };
            match copy_to_clipboard_and_wait(&text, hold) {
                Ok(()) => {
                    println!("Copied to clipboard.");
                    return Ok(());
                }
                Err(e) => {
                    tracing::warn!("Clipboard copy failed: {e:#}");
                    eprintln!("Clipboard unavailable ({e}); printing instead.");
                }
            }
        }

        println!("{text}");
        Ok(())
    }
}
