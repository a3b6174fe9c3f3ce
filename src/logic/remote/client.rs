//! Remote Classifier Client
//!
//! HTTP client for the classification backend. One POST per scan with a
//! bounded timeout, no retries - the heuristic fallback substitutes for
//! retry. This component never consults or mutates the cache; that is the
//! coordinator's responsibility.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::normalize::{verdict_from_response, RawPrediction};
use crate::constants;
use crate::logic::error::{NetworkErrorKind, ScanError};
use crate::logic::scan::types::ScanVerdict;

// ============================================================================
// CONFIG
// ============================================================================

/// Classifier endpoint configuration
#[derive(Debug, Clone)]
pub struct ClassifierConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            base_url: constants::get_api_base_url(),
            timeout: Duration::from_secs(constants::get_request_timeout_secs()),
        }
    }
}

// ============================================================================
// CLASSIFIER SEAM
// ============================================================================

/// Anything that can classify a URL. The coordinator is written against
/// this trait so tests can swap in a scripted classifier.
#[async_trait]
pub trait UrlClassifier: Send + Sync {
    async fn classify(&self, url: &str) -> Result<ScanVerdict, ScanError>;
}

// ============================================================================
// CLIENT
// ============================================================================

#[derive(Debug, Serialize)]
struct PredictRequest<'a> {
    url: &'a str,
}

pub struct RemoteClassifierClient {
    config: ClassifierConfig,
    http: reqwest::Client,
}

impl RemoteClassifierClient {
    pub fn new(config: ClassifierConfig) -> Self {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self { config, http }
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    fn map_send_error(e: reqwest::Error) -> ScanError {
        let kind = if e.is_timeout() {
            NetworkErrorKind::Timeout
        } else {
            NetworkErrorKind::Connection
        };
        ScanError::Network {
            kind,
            message: e.to_string(),
        }
    }

    /// Detailed factor analysis for the UI collaborators. No cache, no
    /// fallback: any failure is `None`, rendered as "analysis not available".
    pub async fn detailed_analysis(&self, url: &str) -> Option<DetailedAnalysis> {
        let endpoint = format!("{}/api/v1/analyze-url", self.config.base_url);

        let response = match self.http.get(&endpoint).query(&[("url", url)]).send().await {
            Ok(r) => r,
            Err(e) => {
                log::debug!("Detailed analysis request failed: {}", e);
                return None;
            }
        };

        if !response.status().is_success() {
            log::debug!(
                "Detailed analysis returned HTTP {} for '{}'",
                response.status(),
                url
            );
            return None;
        }

        match response.json::<DetailedAnalysis>().await {
            Ok(analysis) => Some(analysis),
            Err(e) => {
                log::debug!("Detailed analysis parse failed: {}", e);
                None
            }
        }
    }
}

#[async_trait]
impl UrlClassifier for RemoteClassifierClient {
    async fn classify(&self, url: &str) -> Result<ScanVerdict, ScanError> {
        let endpoint = format!("{}/api/v1/predict/", self.config.base_url);

        let response = self
            .http
            .post(&endpoint)
            .json(&PredictRequest { url })
            .send()
            .await
            .map_err(Self::map_send_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScanError::Protocol {
                status: status.as_u16(),
                status_text: status
                    .canonical_reason()
                    .unwrap_or("unknown status")
                    .to_string(),
            });
        }

        let raw: RawPrediction = response.json().await.map_err(|e| ScanError::Protocol {
            status: status.as_u16(),
            status_text: format!("malformed body: {}", e),
        })?;

        let verdict = verdict_from_response(url, raw);
        log::debug!(
            "Classifier verdict for '{}': {} ({:.2})",
            url,
            verdict.status,
            verdict.confidence
        );
        Ok(verdict)
    }
}

// ============================================================================
// DETAILED ANALYSIS SHAPE
// ============================================================================

/// One structured risk factor from the analysis endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskFactorDetail {
    pub name: String,
    /// "low", "medium" or "high"
    pub impact: String,
    pub description: String,
}

/// Factor analysis response. Every field optional; the backend has grown
/// fields over time and collaborators only render what is present.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DetailedAnalysis {
    pub url: Option<String>,
    pub status: Option<String>,
    pub message: Option<String>,
    pub confidence: Option<f32>,
    pub factors: Vec<String>,
    #[serde(alias = "riskScore")]
    pub risk_score: Option<f32>,
    #[serde(alias = "riskLevel")]
    pub risk_level: Option<String>,
    #[serde(alias = "riskFactors")]
    pub risk_factors: Vec<RiskFactorDetail>,
    #[serde(alias = "threatTypes")]
    pub threat_types: Vec<String>,
}

// ============================================================================
// TESTS
// ============================================================================
