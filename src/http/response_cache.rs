use std::sync::Arc;
use std::time::Duration;

use crate::ports::cache::ListingCache;

/// Full-response cache keyed by request path, layered on top of the listing
/// cache with its own, shorter TTL. The two layers expire independently, so a
/// response may reflect data as stale as the longer of the two TTLs.
pub struct ResponseCache {
    cache: Arc<dyn ListingCache>,
    ttl: Duration,
}

impl ResponseCache {
    pub fn new(cache: Arc<dyn ListingCache>, ttl: Duration) -> Self {
        Self { cache, ttl }
    }

    fn key_for(path: &str) -> String {
        format!("view:{path}")
    }

    pub async fn lookup(&self, path: &str) -> Option<String> {
        self.cache.get(&Self::key_for(path)).await
    }

    pub async fn store(&self, path: &str, body: &str) {
        self.cache.set(&Self::key_for(path), body, self.ttl).await;
    }
}
