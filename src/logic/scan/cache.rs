//! Risk Cache
//!
//! Bounded TTL cache mapping a URL string to its last verdict. Expiry is
//! evaluated lazily on read; there is no background sweep. The cache is an
//! explicitly constructed object owned by the engine, passed by reference
//! into the coordinator - never a module-level static.

use std::collections::HashMap;
use std::time::Duration;

use chrono::Utc;
use parking_lot::RwLock;

use super::types::ScanVerdict;
use crate::constants;

// ============================================================================
// CACHE ENTRY
// ============================================================================

/// One cached verdict plus the timestamp it was stored at.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    pub verdict: ScanVerdict,
    /// Unix seconds at `put` time; drives expiry
    pub stored_at: i64,
}

// ============================================================================
// RISK CACHE
// ============================================================================

pub struct RiskCache {
    entries: RwLock<HashMap<String, CacheEntry>>,
    ttl_secs: i64,
    max_entries: usize,
}

impl RiskCache {
    pub fn new(ttl: Duration, max_entries: usize) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            ttl_secs: ttl.as_secs() as i64,
            max_entries: max_entries.max(1),
        }
    }

    /// Cache with the configured defaults (env-overridable TTL).
    pub fn with_defaults() -> Self {
        Self::new(
            Duration::from_secs(constants::get_cache_ttl_secs()),
            constants::DEFAULT_CACHE_MAX_ENTRIES,
        )
    }

    /// Stored verdict for `url`, unless expired. An expired entry behaves
    /// as a miss; it is left in place for the next `put` to overwrite.
    pub fn get(&self, url: &str) -> Option<ScanVerdict> {
        self.get_at(url, Utc::now().timestamp())
    }

    /// `get` against an explicit clock, for deterministic expiry tests.
    pub fn get_at(&self, url: &str, now: i64) -> Option<ScanVerdict> {
        let entries = self.entries.read();
        let entry = entries.get(url)?;
        if self.is_expired(entry, now) {
            return None;
        }
        Some(entry.verdict.clone())
    }

    /// Unconditionally overwrite the entry for `verdict.url` with a fresh
    /// store timestamp.
    pub fn put(&self, verdict: ScanVerdict) {
        self.put_at(verdict, Utc::now().timestamp());
    }

    /// `put` against an explicit clock.
    pub fn put_at(&self, verdict: ScanVerdict, now: i64) {
        let mut entries = self.entries.write();

        if !entries.contains_key(&verdict.url) && entries.len() >= self.max_entries {
            evict_oldest(&mut entries, self.max_entries);
        }

        entries.insert(
            verdict.url.clone(),
            CacheEntry {
                verdict,
                stored_at: now,
            },
        );
    }

    pub fn is_expired(&self, entry: &CacheEntry, now: i64) -> bool {
        now - entry.stored_at >= self.ttl_secs
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    pub fn clear(&self) {
        self.entries.write().clear();
        log::debug!("Risk cache cleared");
    }
}

/// Remove the oldest tenth of the map (at least one entry).
fn evict_oldest(entries: &mut HashMap<String, CacheEntry>, max_entries: usize) {
    let mut by_age: Vec<_> = entries
        .iter()
        .map(|(k, v)| (k.clone(), v.stored_at))
        .collect();
    by_age.sort_by(|a, b| a.1.cmp(&b.1));

    let remove_count = (max_entries / 10).max(1);
    for (url, _) in by_age.into_iter().take(remove_count) {
        entries.remove(&url);
    }
}

// ============================================================================
// TESTS
// ============================================================================
