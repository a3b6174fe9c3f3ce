//! Navigation Policy
//!
//! Consumes scan verdicts and navigation events, decides block/warn/allow
//! per tab, and drives the host side effects. Each navigation gets a
//! generation tag; a verdict arriving for a superseded generation is
//! discarded so it can never clobber the badge state of a newer page load.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::{Mutex, RwLock};
use url::form_urlencoded;

use super::banner::{spawn_auto_dismiss, BannerGuard};
use super::types::{NavDecision, ScanPhase, TabId, TabTracker};
use crate::constants;
use crate::logic::host::{best_effort, HostActions};
use crate::logic::scan::types::{ScanStatus, ScanVerdict};
use crate::logic::session::SessionStore;

// ============================================================================
// CONFIG
// ============================================================================

#[derive(Debug, Clone)]
pub struct PolicyConfig {
    /// Malicious verdicts above this confidence are blocked outright
    pub block_confidence_min: f32,
    /// Internal warning page; the blocked URL is appended as `?blocked=`
    pub warning_page: String,
    /// Banner lifetime before auto-dismiss
    pub banner_auto_dismiss: Duration,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            block_confidence_min: constants::BLOCK_CONFIDENCE_MIN,
            warning_page: constants::WARNING_PAGE.to_string(),
            banner_auto_dismiss: Duration::from_secs(constants::BANNER_AUTO_DISMISS_SECS),
        }
    }
}

// ============================================================================
// POLICY
// ============================================================================

pub struct NavigationPolicy<H: HostActions> {
    host: Arc<H>,
    sessions: Arc<SessionStore>,
    config: PolicyConfig,
    tabs: RwLock<HashMap<TabId, TabTracker>>,
    banners: Mutex<HashMap<TabId, BannerGuard>>,
}

impl<H: HostActions> NavigationPolicy<H> {
    pub fn new(host: Arc<H>, sessions: Arc<SessionStore>, config: PolicyConfig) -> Self {
        Self {
            host,
            sessions,
            config,
            tabs: RwLock::new(HashMap::new()),
            banners: Mutex::new(HashMap::new()),
        }
    }

    /// A new top-level navigation is starting in `tab`. Resets the tab to
    /// `Scanning`, clears stale UI state and returns the generation the
    /// caller must hand back with the verdict.
    pub fn begin_navigation(&self, tab: TabId, url: &str) -> u64 {
        let generation = {
            let mut tabs = self.tabs.write();
            let tracker = tabs.entry(tab).or_insert(TabTracker {
                generation: 0,
                phase: ScanPhase::Scanning {
                    url: url.to_string(),
                },
            });
            tracker.generation += 1;
            tracker.phase = ScanPhase::Scanning {
                url: url.to_string(),
            };
            tracker.generation
        };

        // Cancel any pending banner auto-dismiss from the previous page
        self.banners.lock().remove(&tab);
        self.sessions.clear_tab(tab);
        best_effort("clear badge", self.host.clear_badge(tab));

        log::debug!("Tab {} navigation {} -> scanning '{}'", tab, generation, url);
        generation
    }

    /// Deliver a verdict for the navigation tagged `generation`. Verdicts
    /// for superseded generations are discarded.
    pub fn apply_verdict(
        &self,
        tab: TabId,
        generation: u64,
        verdict: &ScanVerdict,
    ) -> NavDecision {
        {
            let mut tabs = self.tabs.write();
            match tabs.get_mut(&tab) {
                Some(tracker) if tracker.generation == generation => {
                    tracker.phase = ScanPhase::Decided {
                        url: verdict.url.clone(),
                        verdict: verdict.clone(),
                        banner_shown: false,
                    };
                }
                _ => {
                    log::debug!(
                        "Discarding stale verdict for tab {} generation {}",
                        tab,
                        generation
                    );
                    return NavDecision::Superseded;
                }
            }
        }

        self.sessions.record(tab, verdict);

        // Hard stop: high-confidence malicious navigations are blocked,
        // nothing else runs for this navigation.
        if verdict.status == ScanStatus::Malicious
            && verdict.confidence > self.config.block_confidence_min
        {
            let target = self.warning_url(&verdict.url);
            log::warn!(
                "Blocking navigation to '{}' (confidence {:.2})",
                verdict.url,
                verdict.confidence
            );
            best_effort("redirect to warning page", self.host.redirect_tab(tab, &target));
            return NavDecision::Blocked;
        }

        match verdict.status {
            ScanStatus::Suspicious | ScanStatus::Malicious => {
                best_effort(
                    "set warning badge",
                    self.host
                        .set_badge(tab, constants::WARNING_BADGE_TEXT, verdict.status.color()),
                );
                NavDecision::Warned
            }
            ScanStatus::Safe => {
                best_effort(
                    "set safe badge",
                    self.host
                        .set_badge(tab, constants::SAFE_BADGE_TEXT, verdict.status.color()),
                );
                NavDecision::Allowed
            }
            // Badge was cleared at navigation start; leave it that way
            ScanStatus::Unknown => NavDecision::Allowed,
        }
    }

    /// The page finished loading. If the decided verdict warrants a warning
    /// and none was shown for this navigation yet, emit the notification and
    /// inject the banner with its auto-dismiss timer.
    pub fn handle_navigation_complete(&self, tab: TabId) {
        let verdict = {
            let mut tabs = self.tabs.write();
            match tabs.get_mut(&tab) {
                Some(TabTracker {
                    phase:
                        ScanPhase::Decided {
                            verdict,
                            banner_shown,
                            ..
                        },
                    ..
                }) if verdict.status.is_warnable() && !*banner_shown => {
                    *banner_shown = true;
                    verdict.clone()
                }
                _ => return,
            }
        };

        let message = format!(
            "{} website detected! Confidence: {}%",
            verdict.status.as_str().to_uppercase(),
            (verdict.confidence * 100.0).round() as u32
        );
        best_effort(
            "show notification",
            self.host
                .show_notification(constants::NOTIFICATION_TITLE, &message),
        );

        best_effort("inject banner", self.host.inject_banner(tab, &verdict));

        let guard = spawn_auto_dismiss(
            Arc::clone(&self.host),
            tab,
            self.config.banner_auto_dismiss,
        );
        self.banners.lock().insert(tab, guard);
    }

    /// User closed the banner: cancel the auto-dismiss and remove it now.
    pub fn dismiss_banner(&self, tab: TabId) {
        if let Some(guard) = self.banners.lock().remove(&tab) {
            guard.cancel();
        }
        best_effort("remove banner", self.host.remove_banner(tab));
    }

    /// Current generation for a tab, if it has ever navigated.
    pub fn current_generation(&self, tab: TabId) -> Option<u64> {
        self.tabs.read().get(&tab).map(|t| t.generation)
    }

    fn warning_url(&self, blocked: &str) -> String {
        let encoded: String = form_urlencoded::byte_serialize(blocked.as_bytes()).collect();
        format!("{}?blocked={}", self.config.warning_page, encoded)
    }
}

// ============================================================================
// TESTS
// ============================================================================
