//! Scan Engine - Cache, Heuristics, Coordination
//!
//! The scoring half of the engine: verdict types, the TTL risk cache, the
//! deterministic fallback scorer and the coordinator that ties them to the
//! remote classifier.

pub mod cache;
pub mod coordinator;
pub mod heuristics;
pub mod rules;
pub mod types;

pub use cache::{CacheEntry, RiskCache};
pub use coordinator::ScanCoordinator;
pub use rules::ScorerThresholds;
pub use types::{RiskFactor, ScanStatus, ScanVerdict};
