//! Central Configuration Constants
//!
//! Single source of truth for all configuration defaults.
//! To change the default API server, only edit this file.

/// Default classification API base URL
///
/// This is the fallback URL when no environment variable is set.
/// For development: http://localhost:8000
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// Default verdict cache TTL (seconds). Expired entries behave as misses.
pub const DEFAULT_CACHE_TTL_SECS: u64 = 300;

/// Defensive cap on cached verdicts (the URL keyspace is unbounded)
pub const DEFAULT_CACHE_MAX_ENTRIES: usize = 1024;

/// Remote classification request timeout (seconds)
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 5;

/// Malicious verdicts above this confidence block the navigation
pub const BLOCK_CONFIDENCE_MIN: f32 = 0.8;

/// Internal warning page the host redirects blocked tabs to
pub const WARNING_PAGE: &str = "warning.html";

/// Seconds before the injected warning banner auto-dismisses
pub const BANNER_AUTO_DISMISS_SECS: u64 = 10;

/// Badge glyphs
pub const WARNING_BADGE_TEXT: &str = "\u{26a0}";
pub const SAFE_BADGE_TEXT: &str = "\u{2713}";

/// System notification title
pub const NOTIFICATION_TITLE: &str = "LinkShield AI Warning";

/// App version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// App name
pub const APP_NAME: &str = "LinkShield";

// ============================================
// Helper functions to read from env with fallback
// ============================================

/// Get classification API base URL from environment or use default
pub fn get_api_base_url() -> String {
    std::env::var("LINKSHIELD_API_URL").unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string())
}

/// Get cache TTL from environment or use default
pub fn get_cache_ttl_secs() -> u64 {
    std::env::var("LINKSHIELD_CACHE_TTL_SECS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_CACHE_TTL_SECS)
}

/// Get request timeout from environment or use default
pub fn get_request_timeout_secs() -> u64 {
    std::env::var("LINKSHIELD_REQUEST_TIMEOUT_SECS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS)
}
