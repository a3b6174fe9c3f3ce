//! Scan Coordinator
//!
//! Single entry point for scoring a URL: cache lookup, remote call,
//! heuristic fallback, cache write. Never fails to the caller - every
//! internal failure degrades to the heuristic verdict. Whatever verdict is
//! ultimately returned is cached, so repeat navigations inside the TTL
//! window neither re-trigger the remote call nor recompute heuristics.

use std::sync::Arc;

use super::cache::RiskCache;
use super::heuristics;
use super::rules::ScorerThresholds;
use super::types::ScanVerdict;
use crate::logic::remote::UrlClassifier;

pub struct ScanCoordinator<C: UrlClassifier> {
    cache: RiskCache,
    classifier: Arc<C>,
    thresholds: ScorerThresholds,
}

impl<C: UrlClassifier> ScanCoordinator<C> {
    pub fn new(cache: RiskCache, classifier: Arc<C>, thresholds: ScorerThresholds) -> Self {
        Self {
            cache,
            classifier,
            thresholds,
        }
    }

    /// Score a URL. Cache hit short-circuits; otherwise one remote attempt,
    /// then the heuristic fallback.
    ///
    /// Two concurrent scans of the same URL may both miss the cache and both
    /// write it; the last writer wins and no verdict is ever torn (the map
    /// is lock-guarded). No per-URL in-flight dedup.
    pub async fn scan_url(&self, url: &str) -> ScanVerdict {
        if let Some(hit) = self.cache.get(url) {
            log::debug!("Using cached verdict for '{}'", url);
            return hit;
        }

        let verdict = match self.classifier.classify(url).await {
            Ok(verdict) => verdict,
            Err(e) => {
                log::warn!("Classifier unreachable for '{}': {} - using fallback analysis", url, e);
                heuristics::score_with_thresholds(url, &self.thresholds)
            }
        };

        self.cache.put(verdict.clone());
        verdict
    }

    pub fn cache(&self) -> &RiskCache {
        &self.cache
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::error::{NetworkErrorKind, ScanError};
    use crate::logic::scan::types::{ScanStatus, ScanVerdict};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::time::Duration;

    /// Scripted classifier: counts calls, answers from a fixed outcome.
    struct ScriptedClassifier {
        calls: AtomicU32,
        outcome: Outcome,
    }

    enum Outcome {
        Verdict(ScanStatus, f32),
        Timeout,
        ServerError,
    }

    impl ScriptedClassifier {
        fn new(outcome: Outcome) -> Self {
            Self {
                calls: AtomicU32::new(0),
                outcome,
            }
        }

        fn calls(&self) -> u32 {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl UrlClassifier for ScriptedClassifier {
        async fn classify(&self, url: &str) -> Result<ScanVerdict, ScanError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.outcome {
                Outcome::Verdict(status, confidence) => Ok(ScanVerdict {
                    url: url.to_string(),
                    status: *status,
                    confidence: *confidence,
                    message: "scripted".to_string(),
                    details: vec![],
                    scan_id: "srv-1".to_string(),
                    produced_at: chrono::Utc::now().timestamp(),
                }),
                Outcome::Timeout => Err(ScanError::Network {
                    kind: NetworkErrorKind::Timeout,
                    message: "request timed out".to_string(),
                }),
                Outcome::ServerError => Err(ScanError::Protocol {
                    status: 502,
                    status_text: "Bad Gateway".to_string(),
                }),
            }
        }
    }

    fn coordinator(outcome: Outcome) -> (ScanCoordinator<ScriptedClassifier>, Arc<ScriptedClassifier>) {
        let classifier = Arc::new(ScriptedClassifier::new(outcome));
        let cache = RiskCache::new(Duration::from_secs(300), 64);
        (
            ScanCoordinator::new(cache, classifier.clone(), ScorerThresholds::default()),
            classifier,
        )
    }

    #[tokio::test]
    async fn test_second_scan_within_ttl_hits_cache() {
        let (coord, classifier) = coordinator(Outcome::Verdict(ScanStatus::Safe, 0.92));

        let first = coord.scan_url("https://ok.example/").await;
        let second = coord.scan_url("https://ok.example/").await;

        assert_eq!(classifier.calls(), 1);
        assert_eq!(first.scan_id, second.scan_id);
        assert_eq!(first.status, second.status);
    }

    #[tokio::test]
    async fn test_remote_verdict_is_cached() {
        let (coord, _) = coordinator(Outcome::Verdict(ScanStatus::Malicious, 0.95));

        let v = coord.scan_url("https://evil.example/").await;
        assert_eq!(v.status, ScanStatus::Malicious);
        assert!(coord.cache().get("https://evil.example/").is_some());
    }

    #[tokio::test]
    async fn test_timeout_degrades_to_heuristics_and_caches_result() {
        let (coord, classifier) = coordinator(Outcome::Timeout);

        let v = coord.scan_url("http://bit.ly/x").await;
        // http + shortener = 0.7 exactly, so suspicious with capped confidence
        assert_eq!(v.status, ScanStatus::Suspicious);
        assert!((v.confidence - 0.9).abs() < 1e-6);
        assert!(v.scan_id.starts_with("fallback_"));

        // The fallback verdict was cached: no second remote attempt
        let again = coord.scan_url("http://bit.ly/x").await;
        assert_eq!(classifier.calls(), 1);
        assert_eq!(again.scan_id, v.scan_id);
    }

    #[tokio::test]
    async fn test_protocol_error_degrades_to_heuristics() {
        let (coord, _) = coordinator(Outcome::ServerError);

        let v = coord.scan_url("https://192.168.1.1/").await;
        assert_eq!(v.status, ScanStatus::Suspicious);
        assert!((v.confidence - 0.9).abs() < 1e-6);
    }

    #[tokio::test]
    async fn test_expired_entry_triggers_rescan() {
        let (coord, classifier) = coordinator(Outcome::Verdict(ScanStatus::Safe, 0.9));

        // Plant an already expired entry, then scan
        let stale = ScanVerdict {
            url: "https://old.example/".to_string(),
            status: ScanStatus::Suspicious,
            confidence: 0.6,
            message: "stale".to_string(),
            details: vec![],
            scan_id: "stale-1".to_string(),
            produced_at: 0,
        };
        coord.cache().put_at(stale, 0);

        let v = coord.scan_url("https://old.example/").await;
        assert_eq!(classifier.calls(), 1);
        assert_eq!(v.status, ScanStatus::Safe);
    }
}
