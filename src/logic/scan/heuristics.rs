//! Heuristic Scorer
//!
//! Deterministic rule-based fallback classifier, used whenever the remote
//! classifier cannot be reached. Pure function of the input URL: no cache
//! access, no network, never fails (unparseable input yields a terminal
//! `Unknown` verdict).

use chrono::Utc;
use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

use super::rules::{
    self, ScorerThresholds, DETAIL_INSECURE_SCHEME, DETAIL_IP_HOST, DETAIL_SHORTENER,
    DETAIL_SUBDOMAINS, DETAIL_UNUSUAL_CHARS, MAX_HOST_LABELS, URL_SHORTENERS,
};
use super::types::{RiskFactor, ScanStatus, ScanVerdict};
use crate::logic::error::ScanError;

// Leading dotted-quad host, e.g. 203.0.113.5
static DOTTED_QUAD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+\.\d+\.\d+\.\d+").expect("valid dotted-quad regex"));

// ASCII class on purpose: the allowed URL alphabet is word chars plus - . / ? = & % : @
static UNUSUAL_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^0-9A-Za-z_\-./?=&%:@]").expect("valid unusual-chars regex"));

// ============================================================================
// RULE EVALUATION
// ============================================================================

/// Evaluate every heuristic rule against `url`, in fixed order.
///
/// Returns the full rule table (triggered and untriggered) so callers can
/// render complete factor breakdowns. Fails only when the URL does not parse
/// into scheme/host components at all.
pub fn evaluate_risk_factors(url: &str) -> Result<Vec<RiskFactor>, ScanError> {
    let parsed = Url::parse(url).map_err(|e| ScanError::MalformedUrl(e.to_string()))?;
    let host = parsed.host_str().unwrap_or("");

    let insecure_scheme = parsed.scheme() == "http";
    let shortener_host = URL_SHORTENERS.iter().any(|d| host.contains(d));
    let ip_host = DOTTED_QUAD.is_match(host);
    // A dotted-quad always has 4 labels; only real domains count as subdomain abuse.
    let many_labels = !ip_host && !host.is_empty() && host.split('.').count() > MAX_HOST_LABELS;
    let unusual_chars = UNUSUAL_CHARS.is_match(url);

    Ok(vec![
        RiskFactor::new(DETAIL_INSECURE_SCHEME, rules::INSECURE_SCHEME_WEIGHT, insecure_scheme),
        RiskFactor::new(DETAIL_SHORTENER, rules::SHORTENER_WEIGHT, shortener_host),
        RiskFactor::new(DETAIL_IP_HOST, rules::IP_HOST_WEIGHT, ip_host),
        RiskFactor::new(DETAIL_SUBDOMAINS, rules::SUBDOMAIN_WEIGHT, many_labels),
        RiskFactor::new(DETAIL_UNUSUAL_CHARS, rules::UNUSUAL_CHARS_WEIGHT, unusual_chars),
    ])
}

// ============================================================================
// SCORING
// ============================================================================

/// Score a URL with the default thresholds.
pub fn score(url: &str) -> ScanVerdict {
    score_with_thresholds(url, &ScorerThresholds::default())
}

/// Score a URL with custom thresholds.
pub fn score_with_thresholds(url: &str, thresholds: &ScorerThresholds) -> ScanVerdict {
    let factors = match evaluate_risk_factors(url) {
        Ok(f) => f,
        Err(e) => {
            log::debug!("URL parse failed for '{}': {}", url, e);
            return unparseable_verdict(url);
        }
    };

    let mut risk_score = 0.0f32;
    let mut details = Vec::new();

    for factor in &factors {
        if factor.triggered {
            risk_score += factor.weight;
            details.push(factor.description.clone());
        }
    }

    // Tolerance so the float sum of 0.3 + 0.4 compares equal to the 0.7
    // threshold, not a hair above it.
    const EPS: f32 = 1e-6;

    let status = if risk_score > thresholds.malicious_min + EPS {
        ScanStatus::Malicious
    } else if risk_score > thresholds.suspicious_min + EPS {
        ScanStatus::Suspicious
    } else {
        ScanStatus::Safe
    };

    let confidence = (thresholds.confidence_base + risk_score).min(thresholds.confidence_cap);

    ScanVerdict {
        url: url.to_string(),
        status,
        confidence,
        message: format!(
            "Fallback analysis: {} ({} risk factors)",
            status,
            details.len()
        ),
        details,
        scan_id: format!("fallback_{}", Utc::now().timestamp_millis()),
        produced_at: Utc::now().timestamp(),
    }
}

/// Terminal path for URLs that do not parse at all.
fn unparseable_verdict(url: &str) -> ScanVerdict {
    ScanVerdict {
        url: url.to_string(),
        status: ScanStatus::Unknown,
        confidence: 0.5,
        message: "Unable to analyze URL".to_string(),
        details: vec!["URL analysis failed".to_string()],
        scan_id: format!("error_{}", Utc::now().timestamp_millis()),
        produced_at: Utc::now().timestamp(),
    }
}

// ============================================================================
// TESTS
// ============================================================================
