//! Heuristic Rules & Thresholds
//!
//! Constants and configuration for the fallback scorer. No scoring logic.

use serde::{Deserialize, Serialize};

// ============================================================================
// RULE WEIGHTS
// ============================================================================

/// Scheme is plain `http` (not TLS)
pub const INSECURE_SCHEME_WEIGHT: f32 = 0.3;

/// Host matches a known URL shortener
pub const SHORTENER_WEIGHT: f32 = 0.4;

/// Host is a literal dotted-quad IPv4 address
pub const IP_HOST_WEIGHT: f32 = 0.5;

/// Host has more than `MAX_HOST_LABELS` dot-separated labels
pub const SUBDOMAIN_WEIGHT: f32 = 0.2;

/// URL contains characters outside the usual URL alphabet
pub const UNUSUAL_CHARS_WEIGHT: f32 = 0.2;

pub const MAX_HOST_LABELS: usize = 3;

// ============================================================================
// THRESHOLDS
// ============================================================================

/// Above this risk score = Malicious (strictly greater)
pub const MALICIOUS_THRESHOLD: f32 = 0.7;

/// Above this risk score = Suspicious (strictly greater)
pub const SUSPICIOUS_THRESHOLD: f32 = 0.4;

/// Confidence starts here and rises with the risk score
pub const CONFIDENCE_BASE: f32 = 0.5;

/// Heuristic confidence never exceeds this cap
pub const CONFIDENCE_CAP: f32 = 0.9;

/// Rule details (fixed evaluation order)
pub const DETAIL_INSECURE_SCHEME: &str = "Insecure HTTP connection";
pub const DETAIL_SHORTENER: &str = "URL shortener detected";
pub const DETAIL_IP_HOST: &str = "IP address instead of domain name";
pub const DETAIL_SUBDOMAINS: &str = "Multiple subdomains detected";
pub const DETAIL_UNUSUAL_CHARS: &str = "Unusual characters in URL";

/// Known URL-shortener hosts, matched by substring containment
pub const URL_SHORTENERS: &[&str] = &["bit.ly", "tinyurl.com", "short.link", "t.co"];

// ============================================================================
// CONFIGURABLE THRESHOLDS
// ============================================================================

/// Scorer thresholds (configurable per engine instance)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScorerThresholds {
    /// Strictly above this = Malicious
    pub malicious_min: f32,
    /// Strictly above this (and at or below malicious_min) = Suspicious
    pub suspicious_min: f32,
    /// Confidence floor
    pub confidence_base: f32,
    /// Confidence ceiling
    pub confidence_cap: f32,
}

impl Default for ScorerThresholds {
    fn default() -> Self {
        Self {
            malicious_min: MALICIOUS_THRESHOLD,
            suspicious_min: SUSPICIOUS_THRESHOLD,
            confidence_base: CONFIDENCE_BASE,
            confidence_cap: CONFIDENCE_CAP,
        }
    }
}
