//! Recipe sharing: the plain-text recipe card, share links and the clipboard.

use anyhow::{Context, Result};
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::branding::SITE_HOST;
use crate::calibration::Calibration;
use crate::models::{CoffeeProfile, GrinderId};

/// Multi-line recipe card for `profile` on `grinder`.
#[must_use]
pub fn share_text(profile: &CoffeeProfile, grinder: GrinderId) -> String {
    let calibration = Calibration::for_profile(profile, grinder);
    let time = profile.brew_time;

    format!(
        "\u{2615} Roastitect Recipe - {region}\n\
         \n\
         \u{1f30d} Method: {method}\n\
         \u{1f525} Roast: {roast}\n\
         \u{23f1}\u{fe0f}  Time: {time}s ({minutes}m {seconds}s)\n\
         \u{2699}\u{fe0f}  Grinder: {grinder_name} - {ticks} clicks\n\
         \n\
         \u{1f4dd} Notes: {notes}\n\
         \n\
         {story}\n\
         \n\
         Craft your perfect cup at {SITE_HOST}",
        region = profile.region,
        method = profile.brew_method,
        roast = profile.roast_level,
        minutes = time / 60,
        seconds = time % 60,
        grinder_name = calibration.grinder_name,
        ticks = calibration.ticks,
        notes = profile.notes.join(", "),
        story = profile.story,
    )
}

/// Link that reopens the app on `profile_id` with `grinder` selected.
#[must_use]
pub fn share_url(base_url: &str, profile_id: &str, grinder: GrinderId) -> String {
    format!(
        "{}?profile={}&grinder={}",
        base_url.trim_end_matches('/'),
        percent_encode(profile_id),
        percent_encode(grinder.id())
    )
}

/// What a share link points at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareTarget {
    /// Profile id from the `profile` parameter
    pub profile_id: String,
    /// Grinder from the `grinder` parameter, when present
    pub grinder: Option<GrinderId>,
}

/// Extracts the profile and grinder from a share link.
///
/// Unknown query keys are ignored. The profile id is not checked against the
/// catalog here.
pub fn parse_share_link(url: &str) -> Result<ShareTarget> {
    let query = url
        .split_once('?')
        .map(|(_, query)| query)
        .context("Share link has no query string")?;
    let query = query.split('#').next().unwrap_or_default();

    let mut profile_id = None;
    let mut grinder = None;
    for pair in query.split('&').filter(|p| !p.is_empty()) {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        let value = percent_decode(value)
            .with_context(|| format!("Invalid encoding in share link parameter '{key}'"))?;
        match key {
            "profile" => profile_id = Some(value),
            "grinder" => grinder = Some(value.parse::<GrinderId>()?),
            _ => {}
        }
    }

    let profile_id = profile_id
        .filter(|id| !id.is_empty())
        .context("Share link is missing the 'profile' parameter")?;

    Ok(ShareTarget {
        profile_id,
        grinder,
    })
}

/// Copies `text` to the system clipboard.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard = arboard::Clipboard::new().context("Clipboard unavailable")?;
    clipboard
        .set_text(text.to_owned())
        .context("Failed to copy to clipboard")?;
    tracing::debug!(bytes = text.len(), "Copied text to clipboard");
    Ok(())
}

/// Copies `text` to the clipboard from a short-lived process.
///
/// On Linux the selection lives only as long as its owner, so this blocks until
/// another program (usually a clipboard manager) takes it over. `on_hold` runs
/// once the clipboard is open, before blocking.
pub fn copy_to_clipboard_and_wait(text: &str, on_hold: impl FnOnce()) -> Result<()> {
    let mut clipboard = arboard::Clipboard::new().context("Clipboard unavailable")?;
    on_hold();

    #[cfg(target_os = "linux")]
    {
        use arboard::SetExtLinux;
        tracing::debug!("Holding clipboard selection until it is replaced");
        clipboard
            .set()
            .wait()
            .text(text.to_owned())
            .context("Failed to copy to clipboard")?;
    }
    #[cfg(not(target_os = "linux"))]
    clipboard
        .set_text(text.to_owned())
        .context("Failed to copy to clipboard")?;

    tracing::debug!(bytes = text.len(), "Clipboard handed over");
    Ok(())
}

/// RFC 3986 unreserved characters pass through; everything else is escaped.
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

fn percent_encode(value: &str) -> String {
    utf8_percent_encode(value, QUERY_VALUE).to_string()
}

fn percent_decode(value: &str) -> Result<String> {
    let value = value.replace('+', " ");
    let decoded = percent_decode_str(&value)
        .decode_utf8()
        .context("Decoded value is not UTF-8")?;
    Ok(decoded.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::branding::default_share_base_url;
    use crate::catalog::Catalog;

    #[test]
    fn test_share_text_espresso() {
        let catalog = Catalog::load().unwrap();
        let profile = catalog.get("espresso").unwrap();
        let text = share_text(profile, GrinderId::TimemoreC3s);

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "☕ Roastitect Recipe - The Golden Vineyard (Espresso)");
        assert_eq!(lines[1], "");
        assert_eq!(lines[2], "🌍 Method: Espresso");
        assert_eq!(lines[3], "🔥 Roast: Medium");
        assert_eq!(lines[4], "\u{23f1}\u{fe0f}  Time: 30s (0m 30s)");
        assert_eq!(lines[5], "\u{2699}\u{fe0f}  Grinder: Timemore C3S Pro - 9 clicks");
        assert_eq!(lines[7], "📝 Notes: Apple, Juicy, Golden");
        assert_eq!(lines[9], profile.story);
        assert_eq!(
            lines.last().copied(),
            Some("Craft your perfect cup at roastitect.ketankarki.wiki")
        );
    }

    #[test]
    fn test_share_text_minutes() {
        let catalog = Catalog::load().unwrap();
        let text = share_text(catalog.get("easy-pour").unwrap(), GrinderId::Kingrinder);
        assert!(text.contains("Time: 150s (2m 30s)"));
        assert!(text.contains("Grinder: Kingrinder K6 - 100 clicks"));
    }

    #[test]
    fn test_share_url() {
        let url = share_url(&default_share_base_url(), "moka-pot", GrinderId::Comandante);
        assert_eq!(
            url,
            "https://roastitect.ketankarki.wiki?profile=moka-pot&grinder=comandante"
        );
        let url = share_url("https://example.com/brew/", "a b", GrinderId::Kingrinder);
        assert_eq!(url, "https://example.com/brew?profile=a%20b&grinder=kingrinder");
    }

    #[test]
    fn test_parse_share_link() {
        let target =
            parse_share_link("https://roastitect.ketankarki.wiki/?utm=x&profile=french-press&grinder=timemore_c3s#top")
                .unwrap();
        assert_eq!(target.profile_id, "french-press");
        assert_eq!(target.grinder, Some(GrinderId::TimemoreC3s));

        let target = parse_share_link("https://x.test?profile=a%20b").unwrap();
        assert_eq!(target.profile_id, "a b");
        assert_eq!(target.grinder, None);
    }

    #[test]
    fn test_parse_share_link_errors() {
        assert!(parse_share_link("https://x.test").is_err());
        assert!(parse_share_link("https://x.test?grinder=comandante").is_err());
        assert!(parse_share_link("https://x.test?profile=espresso&grinder=baratza").is_err());
        assert!(parse_share_link("https://x.test?profile=%FF").is_err());
    }

    #[test]
    fn test_parse_share_link_decoding() {
        let target = parse_share_link("https://x.test?profile=caf%C3%A9+latte%2B").unwrap();
        assert_eq!(target.profile_id, "café latte+");

        // Malformed escapes are kept literally
        let target = parse_share_link("https://x.test?profile=%4").unwrap();
        assert_eq!(target.profile_id, "%4");
    }

    #[test]
    fn test_url_roundtrip() {
        let url = share_url("https://x.test", "pour-over", GrinderId::Kingrinder);
        let target = parse_share_link(&url).unwrap();
        assert_eq!(target.profile_id, "pour-over");
        assert_eq!(target.grinder, Some(GrinderId::Kingrinder));
    }
}
