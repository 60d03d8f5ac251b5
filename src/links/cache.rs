// src/links/cache.rs
// =============================================================================
// Remembers whether a URL was reachable, so repeated analyses don't probe it
// again.
//
// The checker only talks to the `AccessibilityCache` trait: look up a URL,
// store a result. How entries age out is up to the implementation.
//
// Our implementation, `LinkCache`:
// - is keyed by the absolute URL string (exactly as `Url` serializes it)
// - drops entries older than a configurable time-to-live
// - holds at most `capacity` URLs, evicting the least recently used one
// - is safe to share between threads (one Mutex around the whole map)
//
// Rust concepts:
// - Traits as seams: tests and callers can plug in their own cache
// - Mutex: only one thread touches the map at a time, so no torn entries
// - Send + Sync: required to share the cache across tokio tasks
// =============================================================================

use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

use crate::config::AnalyzerConfig;

/// Shared memo of "is this URL reachable?".
///
/// Implementations must be safe for any number of concurrent readers and
/// writers. Storing an existing key overwrites it (last writer wins).
pub trait AccessibilityCache: Send + Sync {
    /// `Some(accessible)` on a hit, `None` on a miss.
    fn lookup(&self, url: &str) -> Option<bool>;

    fn store(&self, url: &str, accessible: bool);
}

#[derive(Debug, Clone, Copy)]
struct CacheEntry {
    accessible: bool,
    stored_at: Instant,
}

pub struct LinkCache {
    entries: Mutex<LruCache<String, CacheEntry>>,
    ttl: Option<Duration>,
}

impl LinkCache {
    /// A capacity of zero is treated as one.
    pub fn new(capacity: usize, ttl: Option<Duration>) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);

        Self {
            entries: Mutex::new(LruCache::new(capacity)),
            ttl,
        }
    }

    pub fn from_config(config: &AnalyzerConfig) -> Self {
        Self::new(config.cache_capacity, config.cache_ttl)
    }

    /// Number of stored entries, expired ones included until they are read.
    pub fn len(&self) -> usize {
        self.entries().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // A panic while holding the lock can't leave an entry half-written
    // (put/pop are single calls), so a poisoned map is still usable
    fn entries(&self) -> MutexGuard<'_, LruCache<String, CacheEntry>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn is_expired(&self, entry: &CacheEntry) -> bool {
        match self.ttl {
            Some(ttl) => entry.stored_at.elapsed() >= ttl,
            None => false,
        }
    }
}

impl AccessibilityCache for LinkCache {
    fn lookup(&self, url: &str) -> Option<bool> {
        let mut entries = self.entries();

        let (accessible, expired) = {
            let entry = entries.get(url)?;
            (entry.accessible, self.is_expired(entry))
        };

        if expired {
            entries.pop(url);
            return None;
        }

        Some(accessible)
    }

    fn store(&self, url: &str, accessible: bool) {
        let entry = CacheEntry {
            accessible,
            stored_at: Instant::now(),
        };
        self.entries().put(url.to_string(), entry);
    }
}
