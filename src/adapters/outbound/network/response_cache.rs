use crate::ports::outbound::Clock;
use dashmap::DashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// How long a provider response stays fresh (one hour)
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(3600);

/// Wall-clock implementation of the Clock port
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

#[derive(Debug, Clone)]
struct CacheEntry {
    body: String,
    stored_at: Instant,
}

/// ResponseCache keeps successful provider response bodies keyed by request URL.
///
/// Constructed once at startup and shared by every client that talks to the
/// provider. Entries older than the TTL are misses and are dropped when they
/// are looked up or when `evict_expired` runs. DashMap shards give the
/// mutual exclusion concurrent callers need.
pub struct ResponseCache {
    entries: DashMap<String, CacheEntry>,
    ttl: Duration,
    clock: Arc<dyn Clock>,
}

impl ResponseCache {
    pub fn new(ttl: Duration) -> Self {
        Self::with_clock(ttl, Arc::new(SystemClock))
    }

    pub fn with_clock(ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: DashMap::new(),
            ttl,
            clock,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Returns the cached body for `url` if it is still fresh
    pub fn get(&self, url: &str) -> Option<String> {
        let now = self.clock.now();
        {
            let entry = self.entries.get(url)?;
            if !self.is_expired(&entry, now) {
                return Some(entry.body.clone());
            }
        }

        // Shard lock above must be released before removing
        self.entries
            .remove_if(url, |_, entry| self.is_expired(entry, now));
        None
    }

    pub fn insert(&self, url: impl Into<String>, body: String) {
        self.entries.insert(
            url.into(),
            CacheEntry {
                body,
                stored_at: self.clock.now(),
            },
        );
    }

    /// Removes every expired entry and returns how many were dropped
    pub fn evict_expired(&self) -> usize {
        let now = self.clock.now();
        let before = self.entries.len();
        self.entries.retain(|_, entry| !self.is_expired(entry, now));
        before.saturating_sub(self.entries.len())
    }

    pub fn clear(&self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn is_expired(&self, entry: &CacheEntry, now: Instant) -> bool {
        now.saturating_duration_since(entry.stored_at) >= self.ttl
    }
}

impl Default for ResponseCache {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_TTL)
    }
}
