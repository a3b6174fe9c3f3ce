//! Logic Module - Scan Engine & Policies
//!
//! - `scan/` - verdict types, TTL cache, heuristic fallback, coordinator
//! - `remote/` - classifier HTTP client and response normalization
//! - `navigation/` - per-tab decision state machine and banner lifecycle
//! - `host` - injected side-effect surface
//! - `session` - per-tab verdict store for collaborators

pub mod error;
pub mod host;
pub mod navigation;
pub mod remote;
pub mod scan;
pub mod session;
