//! LinkShield Core - URL Risk Scoring & Caching Engine
//!
//! The background brain of the LinkShield extension: scores URLs against a
//! remote classifier with a deterministic heuristic fallback, caches
//! verdicts with a TTL, and decides whether navigations are blocked, warned
//! about, or allowed. The extension platform itself (badges, notifications,
//! tab control) is injected behind [`logic::host::HostActions`]; the engine
//! is host-agnostic.
//!
//! Typical embedding:
//!
//! ```no_run
//! use std::sync::Arc;
//! use linkshield_core::{EngineConfig, ShieldEngine};
//! use linkshield_core::logic::host::HostActions;
//! use linkshield_core::logic::navigation::NavigationStart;
//! # use linkshield_core::logic::error::HostError;
//! # use linkshield_core::logic::navigation::TabId;
//! # use linkshield_core::logic::scan::ScanVerdict;
//! # struct MyHost;
//! # impl HostActions for MyHost {
//! #     fn set_badge(&self, _: TabId, _: &str, _: &str) -> Result<(), HostError> { Ok(()) }
//! #     fn clear_badge(&self, _: TabId) -> Result<(), HostError> { Ok(()) }
//! #     fn show_notification(&self, _: &str, _: &str) -> Result<(), HostError> { Ok(()) }
//! #     fn redirect_tab(&self, _: TabId, _: &str) -> Result<(), HostError> { Ok(()) }
//! #     fn inject_banner(&self, _: TabId, _: &ScanVerdict) -> Result<(), HostError> { Ok(()) }
//! #     fn remove_banner(&self, _: TabId) -> Result<(), HostError> { Ok(()) }
//! # }
//!
//! # async fn run() {
//! let engine = ShieldEngine::new(EngineConfig::default(), Arc::new(MyHost));
//! let decision = engine
//!     .on_navigation_start(NavigationStart {
//!         tab_id: 1,
//!         url: "http://bit.ly/x".to_string(),
//!         frame_id: 0,
//!     })
//!     .await;
//! # }
//! ```

pub mod api;
pub mod constants;
pub mod logic;

pub use api::{EngineConfig, ScanRequest, ScanResponse, ShieldEngine};
pub use logic::error::{HostError, NetworkErrorKind, ScanError};
pub use logic::navigation::{NavDecision, NavigationComplete, NavigationStart, TabId};
pub use logic::remote::{ClassifierConfig, DetailedAnalysis};
pub use logic::scan::{RiskCache, ScanStatus, ScanVerdict, ScorerThresholds};
