//! Response Normalization
//!
//! Maps raw classifier responses onto `ScanVerdict`. The remote service is
//! free-form about its labels, so the status comes from case-insensitive
//! keyword matching on whichever text field is present. Shapes we do not
//! recognize still normalize to a valid `Unknown` verdict instead of
//! failing the scan.

use chrono::Utc;
use serde::Deserialize;

use crate::logic::scan::types::{ScanStatus, ScanVerdict};

// ============================================================================
// RAW SHAPE
// ============================================================================

/// Fields the classifier may send. Everything is optional; unknown fields
/// are ignored.
#[derive(Debug, Default, Deserialize)]
pub struct RawPrediction {
    pub status: Option<String>,
    pub message: Option<String>,
    pub confidence: Option<f32>,
    pub details: Option<Vec<String>>,
    pub scan_id: Option<String>,
}

/// The shapes we know how to interpret.
enum ResponseShape {
    /// A text label was present in `status` or `message`
    Labeled(String),
    /// Neither label field present; classified as Unknown
    Unrecognized,
}

impl RawPrediction {
    fn shape(&self) -> ResponseShape {
        match self.status.as_deref().or(self.message.as_deref()) {
            Some(label) => ResponseShape::Labeled(label.to_string()),
            None => ResponseShape::Unrecognized,
        }
    }
}

// ============================================================================
// NORMALIZATION
// ============================================================================

/// Case-insensitive keyword matching on a free-text classifier label.
pub fn normalize_status(label: &str) -> ScanStatus {
    let label = label.to_lowercase();

    if ["safe", "benign", "legitimate"].iter().any(|k| label.contains(k)) {
        ScanStatus::Safe
    } else if ["malicious", "phishing", "dangerous"].iter().any(|k| label.contains(k)) {
        ScanStatus::Malicious
    } else if ["suspicious", "warning"].iter().any(|k| label.contains(k)) {
        ScanStatus::Suspicious
    } else {
        ScanStatus::Unknown
    }
}

/// Build a `ScanVerdict` from a parsed classifier response body.
pub fn verdict_from_response(url: &str, raw: RawPrediction) -> ScanVerdict {
    let status = match raw.shape() {
        ResponseShape::Labeled(label) => normalize_status(&label),
        ResponseShape::Unrecognized => {
            log::debug!("Unrecognized classifier response shape for '{}'", url);
            ScanStatus::Unknown
        }
    };

    ScanVerdict {
        url: url.to_string(),
        status,
        confidence: raw.confidence.unwrap_or(0.5).clamp(0.0, 1.0),
        message: raw
            .message
            .unwrap_or_else(|| "URL scanned successfully".to_string()),
        details: raw.details.unwrap_or_default(),
        scan_id: raw
            .scan_id
            .unwrap_or_else(|| Utc::now().timestamp_millis().to_string()),
        produced_at: Utc::now().timestamp(),
    }
}

// ============================================================================
// TESTS
// ============================================================================
