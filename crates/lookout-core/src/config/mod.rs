//! API endpoint configuration.
//!
//! The base URL is resolved once per process: an environment override wins,
//! otherwise release builds talk to the hosted service and debug builds talk
//! to a local development server.

use std::sync::OnceLock;

/// Environment variable that overrides the API base URL.
pub const API_URL_ENV: &str = "LOOKOUT_API_URL";

const PRODUCTION_API_URL: &str = "https://api.lookout.app";
const DEVELOPMENT_API_URL: &str = "http://127.0.0.1:8000";

/// Cached base URL (resolved once at first use)
static RESOLVED_API_URL: OnceLock<String> = OnceLock::new();

/// Returns the API base URL for this process.
pub fn api_base_url() -> &'static str {
    RESOLVED_API_URL
        .get_or_init(|| resolve_api_base_url(std::env::var(API_URL_ENV).ok(), cfg!(debug_assertions)))
}

/// Resolves the base URL from an optional override and the build profile.
///
/// An override that is empty or malformed is logged and ignored rather than
/// failing startup.
#[must_use]
pub fn resolve_api_base_url(override_url: Option<String>, dev_build: bool) -> String {
    if let Some(raw) = normalize_text_option(override_url) {
        match normalize_base_url(&raw) {
            Ok(url) => return url,
            Err(reason) => {
                tracing::warn!("Ignoring {API_URL_ENV} override: {reason}");
            }
        }
    }

    if dev_build {
        DEVELOPMENT_API_URL.to_string()
    } else {
        PRODUCTION_API_URL.to_string()
    }
}

/// Normalizes optional text config by trimming whitespace and removing empties.
///
/// Returns `None` when the input is `None` or the trimmed value is empty.
#[must_use]
pub fn normalize_text_option(value: Option<String>) -> Option<String> {
    let value = value?;
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Validates and canonicalizes a base URL (scheme required, no trailing `/`).
pub fn normalize_base_url(raw: &str) -> Result<String, &'static str> {
    let base = raw.trim().trim_end_matches('/');
    if base.is_empty() {
        return Err("base URL must not be empty");
    }
    if !(base.starts_with("https://") || base.starts_with("http://")) {
        return Err("base URL must include http:// or https://");
    }
    Ok(base.to_string())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn normalize_text_option_rejects_empty() {
        assert_eq!(normalize_text_option(None), None);
        assert_eq!(normalize_text_option(Some("   ".to_string())), None);
    }

    #[test]
    fn normalize_text_option_trims_value() {
        assert_eq!(
            normalize_text_option(Some(" https://example.com ".to_string())),
            Some("https://example.com".to_string())
        );
    }

    #[test]
    fn normalize_base_url_rejects_invalid_values() {
        assert!(normalize_base_url("").is_err());
        assert!(normalize_base_url("example.com").is_err());
    }

    #[test]
    fn normalize_base_url_trims_trailing_slash() {
        assert_eq!(
            normalize_base_url("https://api.example.com/").unwrap(),
            "https://api.example.com"
        );
    }

    #[test]
    fn resolve_prefers_override() {
        let resolved =
            resolve_api_base_url(Some("https://staging.lookout.app/".to_string()), true);
        assert_eq!(resolved, "https://staging.lookout.app");
    }

    #[test]
    fn resolve_ignores_malformed_override() {
        let resolved = resolve_api_base_url(Some("staging.lookout.app".to_string()), true);
        assert_eq!(resolved, DEVELOPMENT_API_URL);
    }

    #[test]
    fn resolve_defaults_by_build_profile() {
        assert_eq!(resolve_api_base_url(None, true), DEVELOPMENT_API_URL);
        assert_eq!(resolve_api_base_url(None, false), PRODUCTION_API_URL);
    }
}
