//! Link Eligibility Filter
//!
//! Decides whether a page link is worth sending to `scan_url` at all. Used
//! by the page-scanning collaborator (content script) to keep hover/bulk
//! scans off internal anchors and well-known-safe destinations.

/// Link schemes/prefixes that are never scanned
const SKIP_PREFIXES: &[&str] = &["javascript:", "mailto:", "tel:", "#"];

/// Well-known destinations excluded from bulk link scanning
pub const TRUSTED_DOMAINS: &[&str] = &[
    "google.com",
    "youtube.com",
    "github.com",
    "stackoverflow.com",
    "wikipedia.org",
];

/// Whether `href` on a page served from `page_host` should be scanned.
pub fn should_scan_link(href: &str, page_host: &str) -> bool {
    if SKIP_PREFIXES.iter().any(|p| href.starts_with(p)) {
        return false;
    }

    // Same-site links are skipped wholesale
    if !page_host.is_empty() && href.contains(page_host) {
        return false;
    }

    if TRUSTED_DOMAINS.iter().any(|d| href.contains(d)) {
        return false;
    }

    true
}

// ============================================================================
// TESTS
// ============================================================================
