//! Navigation Types
//!
//! Typed payloads for the host navigation events and the policy's per-tab
//! state machine. The engine consumes these through injected subscriptions
//! rather than binding to any particular extension platform's event bus.

use serde::{Deserialize, Serialize};

use crate::logic::scan::types::ScanVerdict;

/// Host tab identifier
pub type TabId = u32;

/// Top-level frame id in host navigation events
pub const MAIN_FRAME_ID: u32 = 0;

/// URL prefixes the policy never scans (extension-internal and browser
/// pages).
pub const EXCLUDED_URL_PREFIXES: &[&str] = &[
    "chrome://",
    "chrome-extension://",
    "moz-extension://",
    "about:",
];

// ============================================================================
// EVENTS
// ============================================================================

/// A page load is starting in a tab
#[derive(Debug, Clone, Deserialize)]
pub struct NavigationStart {
    pub tab_id: TabId,
    pub url: String,
    pub frame_id: u32,
}

/// A page load finished in a tab
#[derive(Debug, Clone, Deserialize)]
pub struct NavigationComplete {
    pub tab_id: TabId,
    pub url: String,
    pub frame_id: u32,
}

impl NavigationStart {
    pub fn is_main_frame(&self) -> bool {
        self.frame_id == MAIN_FRAME_ID
    }
}

impl NavigationComplete {
    pub fn is_main_frame(&self) -> bool {
        self.frame_id == MAIN_FRAME_ID
    }
}

/// Internal/browser URLs are out of scope for scanning.
pub fn is_excluded_url(url: &str) -> bool {
    EXCLUDED_URL_PREFIXES.iter().any(|p| url.starts_with(p))
}

// ============================================================================
// STATE MACHINE
// ============================================================================

/// Per-tab scan lifecycle. `Unscanned` is the absence of a tracker.
#[derive(Debug, Clone)]
pub enum ScanPhase {
    /// Navigation started, verdict pending
    Scanning { url: String },
    /// Verdict arrived; persists until the tab navigates again
    Decided {
        url: String,
        verdict: ScanVerdict,
        /// Banner + notification fire at most once per navigation
        banner_shown: bool,
    },
}

/// Tracker for one tab. The generation tags each navigation so verdicts
/// from superseded navigations are discarded instead of clobbering newer
/// badge state.
#[derive(Debug, Clone)]
pub struct TabTracker {
    pub generation: u64,
    pub phase: ScanPhase,
}

// ============================================================================
// DECISIONS
// ============================================================================

/// What the policy did with a verdict or event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NavDecision {
    /// Tab redirected to the internal warning page (hard stop)
    Blocked,
    /// Warning badge set; notification + banner follow page completion
    Warned,
    /// Safe or unknown; navigation proceeds
    Allowed,
    /// Event ignored (sub-frame or excluded URL)
    Ignored,
    /// Verdict belonged to a superseded navigation and was discarded
    Superseded,
}

// ============================================================================
// TESTS
// ============================================================================
