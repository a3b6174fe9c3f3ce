//! Scan Types
//!
//! Core types for URL classification. No logic - data structures only.

use serde::{Deserialize, Serialize};

// ============================================================================
// SCAN STATUS
// ============================================================================

/// Normalized classification for a scanned URL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScanStatus {
    /// No indicators, navigation proceeds normally
    Safe,
    /// Warrants a warning badge and banner
    Suspicious,
    /// Dangerous; may be blocked outright at high confidence
    Malicious,
    /// Could not be classified
    Unknown,
}

impl ScanStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScanStatus::Safe => "safe",
            ScanStatus::Suspicious => "suspicious",
            ScanStatus::Malicious => "malicious",
            ScanStatus::Unknown => "unknown",
        }
    }

    pub fn severity_level(&self) -> u8 {
        match self {
            ScanStatus::Safe => 0,
            ScanStatus::Unknown => 1,
            ScanStatus::Suspicious => 2,
            ScanStatus::Malicious => 3,
        }
    }

    /// Badge/banner color used by the host UI
    pub fn color(&self) -> &'static str {
        match self {
            ScanStatus::Safe => "#10b981",       // Green
            ScanStatus::Suspicious => "#f59e0b", // Yellow
            ScanStatus::Malicious => "#ef4444",  // Red
            ScanStatus::Unknown => "#6b7280",    // Gray
        }
    }

    /// Statuses that trigger warning UI (badge glyph, notification, banner)
    pub fn is_warnable(&self) -> bool {
        matches!(self, ScanStatus::Suspicious | ScanStatus::Malicious)
    }
}

impl std::fmt::Display for ScanStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// SCAN VERDICT
// ============================================================================

/// Classification outcome for one URL. Immutable once produced; consumers
/// receive clones, never shared mutable references.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanVerdict {
    /// Exact URL that was scored (also the cache key)
    pub url: String,
    pub status: ScanStatus,
    /// Classifier/heuristic confidence in [0, 1]
    pub confidence: f32,
    /// Human-readable summary
    pub message: String,
    /// Risk-factor explanations, in evaluation order
    #[serde(default)]
    pub details: Vec<String>,
    /// Remote scan id, or a locally generated `fallback_<ts>` / `error_<ts>`
    pub scan_id: String,
    /// Unix seconds at verdict creation; drives cache expiry
    pub produced_at: i64,
}

impl ScanVerdict {
    /// Verdict age relative to `now` (unix seconds)
    pub fn age_secs(&self, now: i64) -> i64 {
        now - self.produced_at
    }
}

// ============================================================================
// RISK FACTOR
// ============================================================================

/// One evaluated heuristic rule. Triggered weights sum into the risk score
/// via `min(cap, base + sum)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskFactor {
    pub description: String,
    pub weight: f32,
    pub triggered: bool,
}

impl RiskFactor {
    pub fn new(description: &str, weight: f32, triggered: bool) -> Self {
        Self {
            description: description.to_string(),
            weight,
            triggered,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_str_roundtrip() {
        for status in [
            ScanStatus::Safe,
            ScanStatus::Suspicious,
            ScanStatus::Malicious,
            ScanStatus::Unknown,
        ] {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.as_str()));
            let back: ScanStatus = serde_json::from_str(&json).unwrap();
            assert_eq!(back, status);
        }
    }

    #[test]
    fn test_severity_ordering() {
        assert!(ScanStatus::Malicious.severity_level() > ScanStatus::Suspicious.severity_level());
        assert!(ScanStatus::Suspicious.severity_level() > ScanStatus::Unknown.severity_level());
        assert!(ScanStatus::Unknown.severity_level() > ScanStatus::Safe.severity_level());
    }

    #[test]
    fn test_warnable() {
        assert!(ScanStatus::Suspicious.is_warnable());
        assert!(ScanStatus::Malicious.is_warnable());
        assert!(!ScanStatus::Safe.is_warnable());
        assert!(!ScanStatus::Unknown.is_warnable());
    }
}
