use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use chrono::{TimeZone, Utc};

use crate::domain::listing::Listing;
use crate::error::{PropertyError, Result};
use crate::ports::cache::{CacheCounters, ListingCache};
use crate::ports::store::ListingStore;

/// Store double that serves a fixed collection and counts queries.
pub struct MockListingStore {
    listings: Mutex<Vec<Listing>>,
    calls: AtomicUsize,
}

impl MockListingStore {
    pub fn with_listings(listings: Vec<Listing>) -> Self {
        Self {
            listings: Mutex::new(listings),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }

    /// Swap the backing collection, simulating a write made directly in the
    /// store behind the cache's back.
    pub fn replace(&self, listings: Vec<Listing>) {
        *self.listings.lock().unwrap() = listings;
    }
}

#[async_trait]
impl ListingStore for MockListingStore {
    async fn fetch_all(&self) -> Result<Vec<Listing>> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        Ok(self.listings.lock().unwrap().clone())
    }
}

/// Store double whose queries always fail, standing in for an unreachable
/// database.
pub struct FailingStore;

#[async_trait]
impl ListingStore for FailingStore {
    async fn fetch_all(&self) -> Result<Vec<Listing>> {
        Err(PropertyError::Store(sqlx::Error::PoolClosed))
    }
}

/// Cache double reporting fixed backend counters; get/set are no-ops.
pub struct FixedCounterCache {
    counters: CacheCounters,
}

impl FixedCounterCache {
    pub fn new(hits: u64, misses: u64) -> Self {
        Self {
            counters: CacheCounters { hits, misses },
        }
    }
}

#[async_trait]
impl ListingCache for FixedCounterCache {
    async fn get(&self, _key: &str) -> Option<String> {
        None
    }

    async fn set(&self, _key: &str, _value: &str, _ttl: Duration) {}

    async fn counters(&self) -> Result<CacheCounters> {
        Ok(self.counters)
    }
}

/// Cache double standing in for a backend that is down: reads miss, writes are
/// dropped, and the counters query fails.
pub struct UnreachableCache;

#[async_trait]
impl ListingCache for UnreachableCache {
    async fn get(&self, _key: &str) -> Option<String> {
        None
    }

    async fn set(&self, _key: &str, _value: &str, _ttl: Duration) {}

    async fn counters(&self) -> Result<CacheCounters> {
        Err(redis::RedisError::from((redis::ErrorKind::IoError, "connection refused")).into())
    }
}

// --- Factory functions ---

pub fn make_listing(id: i64, title: &str, price: f64) -> Listing {
    Listing {
        id,
        title: title.to_string(),
        description: format!("Description of {title}"),
        price,
        location: "Test City".to_string(),
        created_at: Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap(),
    }
}
