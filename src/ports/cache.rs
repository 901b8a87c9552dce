use std::time::Duration;

use async_trait::async_trait;

use crate::error::Result;

/// Server-side hit/miss counters as reported by the cache backend
/// (`keyspace_hits` / `keyspace_misses` on Redis).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheCounters {
    pub hits: u64,
    pub misses: u64,
}

/// Injectable key-value cache seam. `get` and `set` are best-effort: adapters
/// log backend failures and degrade to a miss or a dropped write, so the read
/// path never fails because of the cache. `counters` is fallible so the
/// metrics reporter can substitute its zero-valued fallback.
#[async_trait]
pub trait ListingCache: Send + Sync {
    async fn get(&self, key: &str) -> Option<String>;
    async fn set(&self, key: &str, value: &str, ttl: Duration);
    async fn counters(&self) -> Result<CacheCounters>;
}
