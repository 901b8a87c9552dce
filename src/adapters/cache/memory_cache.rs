use std::num::NonZeroUsize;
use std::sync::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use async_trait::async_trait;
use lru::LruCache;

use crate::error::Result;
use crate::ports::cache::{CacheCounters, ListingCache};

struct CacheEntry {
    value: String,
    expires_at: Instant,
}

/// In-process stand-in for the Redis backend. Tracks hit/miss counters the way
/// the server would, so the metrics path behaves identically against it.
pub struct MemoryCache {
    inner: RwLock<LruCache<String, CacheEntry>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl MemoryCache {
    pub fn new(max_entries: usize) -> Self {
        let cap = NonZeroUsize::new(max_entries).unwrap_or_else(|| {
            tracing::warn!("Cache max_entries was 0, defaulting to 100");
            NonZeroUsize::new(100).unwrap()
        });
        Self {
            inner: RwLock::new(LruCache::new(cap)),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    fn record_miss(&self) -> Option<String> {
        self.misses.fetch_add(1, Ordering::Relaxed);
        None
    }
}

#[async_trait]
impl ListingCache for MemoryCache {
    async fn get(&self, key: &str) -> Option<String> {
        let Ok(mut cache) = self.inner.write() else {
            tracing::error!("Cache lock poisoned on get('{key}'), returning miss");
            return self.record_miss();
        };
        let Some(entry) = cache.get(key) else {
            return self.record_miss();
        };
        if Instant::now() > entry.expires_at {
            cache.pop(key);
            return self.record_miss();
        }
        self.hits.fetch_add(1, Ordering::Relaxed);
        Some(entry.value.clone())
    }

    async fn set(&self, key: &str, value: &str, ttl: Duration) {
        if let Ok(mut cache) = self.inner.write() {
            cache.put(
                key.to_string(),
                CacheEntry {
                    value: value.to_string(),
                    expires_at: Instant::now() + ttl,
                },
            );
        } else {
            tracing::error!("Cache lock poisoned on set('{key}'), skipping write");
        }
    }

    async fn counters(&self) -> Result<CacheCounters> {
        Ok(CacheCounters {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        })
    }
}
