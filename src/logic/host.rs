//! Host Side Effects
//!
//! The extension platform (badges, notifications, tab control, script
//! injection) is an injected collaborator behind this trait. Every call is
//! best-effort from the policy's point of view: a restricted page may reject
//! an injection, and that must never take the scan pipeline down with it.

use crate::logic::error::HostError;
use crate::logic::navigation::types::TabId;
use crate::logic::scan::types::ScanVerdict;

/// Side-effect surface the engine drives on the host environment.
pub trait HostActions: Send + Sync + 'static {
    /// Set the action badge for a tab (glyph + background color)
    fn set_badge(&self, tab: TabId, text: &str, color: &str) -> Result<(), HostError>;

    /// Clear the action badge for a tab
    fn clear_badge(&self, tab: TabId) -> Result<(), HostError>;

    /// Show a system notification
    fn show_notification(&self, title: &str, message: &str) -> Result<(), HostError>;

    /// Redirect a tab to the given URL (used for the internal warning page)
    fn redirect_tab(&self, tab: TabId, url: &str) -> Result<(), HostError>;

    /// Inject the dismissible warning banner into the page
    fn inject_banner(&self, tab: TabId, verdict: &ScanVerdict) -> Result<(), HostError>;

    /// Remove a previously injected banner
    fn remove_banner(&self, tab: TabId) -> Result<(), HostError>;
}

/// Log-and-swallow wrapper for host calls. Silent fail - never crash the
/// scan path because the host refused a side effect.
pub(crate) fn best_effort(what: &str, result: Result<(), HostError>) {
    if let Err(e) = result {
        log::warn!("{} failed: {}", what, e);
    }
}

// ============================================================================
// TEST SUPPORT
// ============================================================================
