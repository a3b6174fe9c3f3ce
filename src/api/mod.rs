//! API Module - Host-Facing Engine Facade
//!
//! `ShieldEngine` is the process-wide context the host embeds: it owns the
//! risk cache, classifier client, navigation policy and per-tab session
//! store, all explicitly constructed at startup. Collaborators reach it two
//! ways: typed navigation events, and the message surface the content
//! script/popup use (`scanURL`, `getDetailedAnalysis`).

use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants;
use crate::logic::host::HostActions;
use crate::logic::navigation::{
    is_excluded_url, NavDecision, NavigationComplete, NavigationPolicy, NavigationStart,
    PolicyConfig, TabId,
};
use crate::logic::remote::{ClassifierConfig, DetailedAnalysis, RemoteClassifierClient};
use crate::logic::scan::{RiskCache, ScanCoordinator, ScanVerdict, ScorerThresholds};
use crate::logic::session::{SessionStore, TabScanRecord};

// ============================================================================
// CONFIG
// ============================================================================

/// Everything the engine needs at construction time. Defaults come from
/// `constants` and are env-overridable.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub classifier: ClassifierConfig,
    pub cache_ttl: Duration,
    pub cache_max_entries: usize,
    pub scorer: ScorerThresholds,
    pub policy: PolicyConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            classifier: ClassifierConfig::default(),
            cache_ttl: Duration::from_secs(constants::get_cache_ttl_secs()),
            cache_max_entries: constants::DEFAULT_CACHE_MAX_ENTRIES,
            scorer: ScorerThresholds::default(),
            policy: PolicyConfig::default(),
        }
    }
}

// ============================================================================
// MESSAGE SURFACE
// ============================================================================

/// Requests from message-passing collaborators (content script, popup)
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "action")]
pub enum ScanRequest {
    #[serde(rename = "scanURL")]
    ScanUrl { url: String },
    #[serde(rename = "getDetailedAnalysis")]
    GetDetailedAnalysis { url: String },
    #[serde(rename = "getTabVerdict")]
    GetTabVerdict {
        #[serde(rename = "tabId")]
        tab_id: TabId,
    },
}

/// Responses back to message-passing collaborators
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum ScanResponse {
    Verdict(ScanVerdict),
    /// `None` renders as "analysis not available"
    Analysis(Option<DetailedAnalysis>),
    TabVerdict(Option<TabScanRecord>),
}

// ============================================================================
// ENGINE
// ============================================================================

pub struct ShieldEngine<H: HostActions> {
    coordinator: ScanCoordinator<RemoteClassifierClient>,
    client: Arc<RemoteClassifierClient>,
    policy: NavigationPolicy<H>,
    sessions: Arc<SessionStore>,
}

impl<H: HostActions> ShieldEngine<H> {
    pub fn new(config: EngineConfig, host: Arc<H>) -> Self {
        let client = Arc::new(RemoteClassifierClient::new(config.classifier));
        let cache = RiskCache::new(config.cache_ttl, config.cache_max_entries);
        let sessions = Arc::new(SessionStore::new());

        log::info!(
            "{} engine v{} starting (classifier: {})",
            constants::APP_NAME,
            constants::APP_VERSION,
            client.base_url()
        );

        Self {
            coordinator: ScanCoordinator::new(cache, Arc::clone(&client), config.scorer),
            client,
            policy: NavigationPolicy::new(host, Arc::clone(&sessions), config.policy),
            sessions,
        }
    }

    pub fn with_defaults(host: Arc<H>) -> Self {
        Self::new(EngineConfig::default(), host)
    }

    /// Score a URL: cache, remote classifier, heuristic fallback. Never
    /// fails; callers always get a plausible verdict.
    pub async fn scan_url(&self, url: &str) -> ScanVerdict {
        self.coordinator.scan_url(url).await
    }

    /// Detailed factor analysis pass-through. `None` on any failure.
    pub async fn detailed_analysis(&self, url: &str) -> Option<DetailedAnalysis> {
        self.client.detailed_analysis(url).await
    }

    /// Navigation-start hook. Scans the URL and drives the block/warn/allow
    /// side effects for the tab.
    pub async fn on_navigation_start(&self, event: NavigationStart) -> NavDecision {
        if !event.is_main_frame() || is_excluded_url(&event.url) {
            return NavDecision::Ignored;
        }

        let generation = self.policy.begin_navigation(event.tab_id, &event.url);
        let verdict = self.coordinator.scan_url(&event.url).await;
        self.policy.apply_verdict(event.tab_id, generation, &verdict)
    }

    /// Navigation-complete hook. Emits the deferred notification/banner for
    /// warned pages.
    pub fn on_navigation_complete(&self, event: NavigationComplete) {
        if !event.is_main_frame() || is_excluded_url(&event.url) {
            return;
        }
        self.policy.handle_navigation_complete(event.tab_id);
    }

    /// User closed the in-page banner.
    pub fn dismiss_banner(&self, tab: TabId) {
        self.policy.dismiss_banner(tab);
    }

    /// Message dispatch for content-script/popup callers.
    pub async fn handle_message(&self, request: ScanRequest) -> ScanResponse {
        match request {
            ScanRequest::ScanUrl { url } => ScanResponse::Verdict(self.scan_url(&url).await),
            ScanRequest::GetDetailedAnalysis { url } => {
                ScanResponse::Analysis(self.detailed_analysis(&url).await)
            }
            ScanRequest::GetTabVerdict { tab_id } => {
                ScanResponse::TabVerdict(self.sessions.get(tab_id))
            }
        }
    }

    /// Last decided verdict for a tab, if any.
    pub fn tab_verdict(&self, tab: TabId) -> Option<TabScanRecord> {
        self.sessions.get(tab)
    }

    pub fn cache(&self) -> &RiskCache {
        self.coordinator.cache()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::host::testing::RecordingHost;
    use crate::logic::navigation::MAIN_FRAME_ID;
    use crate::logic::scan::ScanStatus;

    /// Engine wired to a classifier endpoint that refuses connections, so
    /// every scan exercises the heuristic fallback path deterministically.
    fn offline_engine(host: Arc<RecordingHost>) -> ShieldEngine<RecordingHost> {
        let config = EngineConfig {
            classifier: ClassifierConfig {
                base_url: "http://127.0.0.1:1".to_string(),
                timeout: Duration::from_secs(1),
            },
            ..Default::default()
        };
        ShieldEngine::new(config, host)
    }

    fn start(tab: TabId, url: &str) -> NavigationStart {
        NavigationStart {
            tab_id: tab,
            url: url.to_string(),
            frame_id: MAIN_FRAME_ID,
        }
    }

    #[tokio::test]
    async fn test_navigation_to_shortener_warns_via_fallback() {
        let host = Arc::new(RecordingHost::default());
        let engine = offline_engine(host.clone());

        let decision = engine.on_navigation_start(start(1, "http://bit.ly/x")).await;
        assert_eq!(decision, NavDecision::Warned);

        let record = engine.tab_verdict(1).unwrap();
        assert_eq!(record.verdict.status, ScanStatus::Suspicious);
        assert!(record.verdict.scan_id.starts_with("fallback_"));
    }

    #[tokio::test]
    async fn test_subframe_and_internal_urls_are_ignored() {
        let host = Arc::new(RecordingHost::default());
        let engine = offline_engine(host.clone());

        let iframe = NavigationStart {
            tab_id: 2,
            url: "http://bit.ly/x".to_string(),
            frame_id: 7,
        };
        assert_eq!(engine.on_navigation_start(iframe).await, NavDecision::Ignored);
        assert_eq!(
            engine.on_navigation_start(start(2, "about:blank")).await,
            NavDecision::Ignored
        );
        assert_eq!(
            engine
                .on_navigation_start(start(2, "chrome://extensions"))
                .await,
            NavDecision::Ignored
        );

        assert!(host.badges.lock().is_empty());
        assert!(engine.tab_verdict(2).is_none());
    }

    #[tokio::test]
    async fn test_message_surface_round_trip() {
        let host = Arc::new(RecordingHost::default());
        let engine = offline_engine(host);

        let request: ScanRequest =
            serde_json::from_str(r#"{"action": "scanURL", "url": "https://192.168.1.1/"}"#)
                .unwrap();
        let response = engine.handle_message(request).await;

        match response {
            ScanResponse::Verdict(v) => {
                assert_eq!(v.status, ScanStatus::Suspicious);
                assert_eq!(v.details, vec!["IP address instead of domain name"]);
            }
            other => panic!("expected verdict, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_detailed_analysis_fails_to_none() {
        let host = Arc::new(RecordingHost::default());
        let engine = offline_engine(host);

        let request: ScanRequest = serde_json::from_str(
            r#"{"action": "getDetailedAnalysis", "url": "https://example.com/"}"#,
        )
        .unwrap();

        match engine.handle_message(request).await {
            ScanResponse::Analysis(analysis) => assert!(analysis.is_none()),
            other => panic!("expected analysis, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_repeat_navigation_is_served_from_cache() {
        let host = Arc::new(RecordingHost::default());
        let engine = offline_engine(host);

        engine.on_navigation_start(start(4, "http://bit.ly/x")).await;
        let first = engine.tab_verdict(4).unwrap();

        engine.on_navigation_start(start(4, "http://bit.ly/x")).await;
        let second = engine.tab_verdict(4).unwrap();

        // Same cached verdict, not a fresh heuristic pass
        assert_eq!(first.verdict.scan_id, second.verdict.scan_id);
    }

    #[tokio::test]
    async fn test_tab_verdict_message() {
        let host = Arc::new(RecordingHost::default());
        let engine = offline_engine(host);

        engine.on_navigation_start(start(5, "https://ok.example/")).await;

        let request: ScanRequest =
            serde_json::from_str(r#"{"action": "getTabVerdict", "tabId": 5}"#).unwrap();
        match engine.handle_message(request).await {
            ScanResponse::TabVerdict(Some(record)) => {
                assert_eq!(record.url, "https://ok.example/");
            }
            other => panic!("expected tab verdict, got {:?}", other),
        }
    }
}
