//! Branding and application identity configuration.
//!
//! This module centralizes all branding-related strings (names, paths, URLs) so
//! the CLI, the TUI title bar and the share card stay consistent.

/// The human-readable display name of the application.
///
/// Used in:
/// - The TUI title bar
/// - Help text
/// - Share cards
pub const APP_DISPLAY_NAME: &str = "Roastitect";

/// The binary/executable name (lowercase, no spaces).
pub const APP_BINARY_NAME: &str = "roastitect";

/// The directory name for application data (config, logs).
///
/// Used in platform-specific paths:
/// - Linux: `~/.config/{APP_DATA_DIR}/`
/// - macOS: `~/Library/Application Support/{APP_DATA_DIR}/`
/// - Windows: `%APPDATA%\{APP_DATA_DIR}\`
pub const APP_DATA_DIR: &str = "Roastitect";

/// Environment variable that overrides the config directory (used by tests).
pub const CONFIG_DIR_ENV: &str = "ROASTITECT_CONFIG_DIR";

/// Public host printed at the bottom of every share card.
pub const SITE_HOST: &str = "roastitect.ketankarki.wiki";

/// Tagline shown under the title.
pub const APP_TAGLINE: &str = "Precision in every pour";

/// Default base URL for share links.
pub fn default_share_base_url() -> String {
    format!("https://{}", SITE_HOST)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_branding_consistency() {
        assert_eq!(APP_BINARY_NAME, APP_BINARY_NAME.to_lowercase());
        assert!(!APP_BINARY_NAME.contains(' '));
        assert!(!APP_DATA_DIR.contains(' '));
        assert!(!SITE_HOST.contains('/'));
    }

    #[test]
    fn test_default_share_base_url() {
        let url = default_share_base_url();
        assert!(url.starts_with("https://"));
        assert!(url.ends_with(SITE_HOST));
    }
}
