use chrono::{DateTime, Utc};
use dashmap::DashMap;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

use crate::clock::{Clock, SystemClock};
use crate::domain::MenuNode;

/// Raw (unfiltered) menu tree cached for one study
#[derive(Debug, Clone)]
pub struct CachedMenuEntry {
    /// Template the items were fetched from
    pub template_id: String,
    pub items: Arc<Vec<MenuNode>>,
    pub cached_at: DateTime<Utc>,
}

impl CachedMenuEntry {
    /// Valid only while `now - cached_at < ttl`
    pub fn is_expired(&self, now: DateTime<Utc>, ttl: Duration) -> bool {
        let age = (now - self.cached_at).to_std().unwrap_or_default();
        age >= ttl
    }
}

/// Process-wide study menu cache.
/// Entries are shared across callers regardless of their permissions;
/// filtering happens after lookup. Expired entries are evicted on read.
#[derive(Debug, Clone)]
pub struct MenuCache {
    /// study_id -> CachedMenuEntry
    storage: Arc<DashMap<String, CachedMenuEntry>>,
    ttl: Duration,
    clock: Arc<dyn Clock>,
}

impl MenuCache {
    pub fn new(ttl: Duration) -> Self {
        Self::with_clock(ttl, Arc::new(SystemClock))
    }

    pub fn with_clock(ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        info!("Initializing menu cache (ttl: {:?})", ttl);
        Self {
            storage: Arc::new(DashMap::new()),
            ttl,
            clock,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Returns None if not found or expired
    pub fn get(&self, study_id: &str) -> Option<CachedMenuEntry> {
        let now = self.clock.now();
        let entry = self.storage.get(study_id)?;

        if entry.is_expired(now, self.ttl) {
            drop(entry); // Release read lock
            // Only evict if nobody refreshed the key in between
            self.storage
                .remove_if(study_id, |_, e| e.is_expired(now, self.ttl));
            debug!("Menu for study {} expired, removed from cache", study_id);
            return None;
        }

        debug!("Menu cache hit for study {}", study_id);
        Some(entry.value().clone())
    }

    /// Overwrites any existing entry with a fresh timestamp (last write wins)
    pub fn put(&self, study_id: &str, template_id: &str, items: Vec<MenuNode>) -> CachedMenuEntry {
        let entry = CachedMenuEntry {
            template_id: template_id.to_string(),
            items: Arc::new(items),
            cached_at: self.clock.now(),
        };
        self.storage.insert(study_id.to_string(), entry.clone());
        debug!("Cached menu for study {} (template {})", study_id, template_id);
        entry
    }

    pub fn invalidate(&self, study_id: &str) -> bool {
        let removed = self.storage.remove(study_id).is_some();
        if removed {
            debug!("Invalidated cached menu for study {}", study_id);
        }
        removed
    }

    /// Evicts every study entry built from the given template.
    /// Returns number of entries removed
    pub fn invalidate_template(&self, template_id: &str) -> usize {
        let start_len = self.storage.len();
        self.storage.retain(|_, entry| entry.template_id != template_id);
        let count = start_len.saturating_sub(self.storage.len());

        if count > 0 {
            info!("Invalidated {} cached menus for template {}", count, template_id);
        }
        count
    }

    /// Cleanup expired entries (background sweep).
    /// Returns number of entries removed
    pub fn cleanup_expired(&self) -> usize {
        let now = self.clock.now();
        let start_len = self.storage.len();
        self.storage.retain(|_, entry| !entry.is_expired(now, self.ttl));
        let count = start_len.saturating_sub(self.storage.len());

        if count > 0 {
            info!("Cleaned up {} expired menu entries", count);
        }
        count
    }

    pub fn len(&self) -> usize {
        self.storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            entries: self.len(),
            ttl_secs: self.ttl.as_secs(),
        }
    }
}

/// Cache statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct CacheStats {
    pub entries: usize,
    pub ttl_secs: u64,
}
