//! Client configuration constants.
//!
//! These values are shared by the Dioxus app and the CLI so both talk to the
//! same backend and present notifications the same way.
//!
//! # Usage
//!
//! ```
//! use realty_core::config::resolve_base_url;
//!
//! let url = resolve_base_url(Some("http://localhost:7070/api/"));
//! assert_eq!(url, "http://localhost:7070/api");
//! ```

use std::time::Duration;

// =============================================================================
// Backend
// =============================================================================

/// Base URL of the REST API when nothing else is configured.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:7070/api";

/// Environment variable overriding the API base URL.
pub const API_URL_ENV: &str = "REALTY_API_URL";

// =============================================================================
// Notifications
// =============================================================================

/// Delay between showing a notification and hiding it again.
///
/// Measured from each individual `show` call, so a newer notification always
/// gets its full display time.
pub const NOTIFICATION_DISMISS_MS: u64 = 3000;

/// [`NOTIFICATION_DISMISS_MS`] as a [`Duration`].
pub const NOTIFICATION_DISMISS: Duration = Duration::from_millis(NOTIFICATION_DISMISS_MS);

/// Resolves the API base URL.
///
/// Search order:
/// 1. `explicit` (CLI flag or compile-time value)
/// 2. `$REALTY_API_URL`
/// 3. [`DEFAULT_API_BASE_URL`]
///
/// Trailing slashes are trimmed so paths can be appended with `/{resource}`.
pub fn resolve_base_url(explicit: Option<&str>) -> String {
    let raw = explicit
        .map(str::to_string)
        .filter(|s| !s.trim().is_empty())
        .or_else(|| std::env::var(API_URL_ENV).ok().filter(|s| !s.trim().is_empty()))
        .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());

    raw.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_url_wins() {
        assert_eq!(
            resolve_base_url(Some("http://example.test/api/")),
            "http://example.test/api"
        );
    }

    #[test]
    fn test_blank_explicit_url_is_ignored() {
        let resolved = resolve_base_url(Some("   "));
        assert!(!resolved.is_empty());
        assert!(!resolved.ends_with('/'));
    }

    #[test]
    fn test_dismiss_duration_matches_millis() {
        assert_eq!(NOTIFICATION_DISMISS.as_millis(), 3000);
    }
}
