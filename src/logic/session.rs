//! Per-Tab Session State
//!
//! Last verdict per tab, written for collaborator consumption (popup,
//! content script). Cleared when the tab starts a new navigation. In-memory
//! only; resets with the background process.

use std::collections::HashMap;

use chrono::Utc;
use parking_lot::RwLock;
use serde::Serialize;

use super::navigation::types::TabId;
use super::scan::types::ScanVerdict;

/// What collaborators read back for a tab
#[derive(Debug, Clone, Serialize)]
pub struct TabScanRecord {
    pub url: String,
    pub verdict: ScanVerdict,
    pub stored_at: i64,
}

#[derive(Default)]
pub struct SessionStore {
    entries: RwLock<HashMap<TabId, TabScanRecord>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the decided verdict for a tab, replacing any previous one.
    pub fn record(&self, tab: TabId, verdict: &ScanVerdict) {
        self.entries.write().insert(
            tab,
            TabScanRecord {
                url: verdict.url.clone(),
                verdict: verdict.clone(),
                stored_at: Utc::now().timestamp(),
            },
        );
    }

    pub fn get(&self, tab: TabId) -> Option<TabScanRecord> {
        self.entries.read().get(&tab).cloned()
    }

    /// Drop the record for a tab (new navigation started).
    pub fn clear_tab(&self, tab: TabId) {
        self.entries.write().remove(&tab);
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

// ============================================================================
// TESTS
// ============================================================================
