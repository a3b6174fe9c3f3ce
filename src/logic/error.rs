//! Error Taxonomy
//!
//! Every failure in the scan pipeline is one of these. Scan-path errors are
//! always recovered locally (heuristic fallback or terminal Unknown verdict);
//! host-side-effect errors are logged and swallowed. Nothing here ever
//! reaches the end user as a raw error state.

use thiserror::Error;

/// What kind of network failure the remote call hit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NetworkErrorKind {
    /// The bounded request timeout expired; the in-flight request was abandoned
    Timeout,
    /// Connection-level failure (DNS, refused, reset, ...)
    Connection,
}

/// Failures from the remote classifier call
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("network error ({kind:?}): {message}")]
    Network {
        kind: NetworkErrorKind,
        message: String,
    },

    /// Remote call completed but returned a non-success status or an
    /// unparseable body
    #[error("classifier protocol error: HTTP {status} {status_text}")]
    Protocol { status: u16, status_text: String },

    /// Input URL cannot be parsed (recovered inside the heuristic scorer)
    #[error("malformed URL: {0}")]
    MalformedUrl(String),
}

impl ScanError {
    pub fn is_timeout(&self) -> bool {
        matches!(
            self,
            ScanError::Network {
                kind: NetworkErrorKind::Timeout,
                ..
            }
        )
    }
}

/// A badge/notification/injection call rejected by the host environment
/// (e.g. a restricted page). Always best-effort: logged, never propagated.
#[derive(Debug, Clone, Error)]
#[error("host rejected side effect: {0}")]
pub struct HostError(pub String);

impl HostError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}
