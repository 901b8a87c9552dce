use std::sync::Arc;

use tracing::{debug, error};

use crate::domain::metrics::MetricsSnapshot;
use crate::ports::cache::ListingCache;

/// Reads the cache backend's server-side hit/miss counters and derives a hit
/// ratio. Backend failures are swallowed: the caller always gets a snapshot,
/// zero-filled and annotated with the error text when the backend is down.
pub struct MetricsReporter {
    cache: Arc<dyn ListingCache>,
}

impl MetricsReporter {
    pub fn new(cache: Arc<dyn ListingCache>) -> Self {
        Self { cache }
    }

    pub async fn snapshot(&self) -> MetricsSnapshot {
        match self.cache.counters().await {
            Ok(counters) => {
                let snapshot = MetricsSnapshot::from_counters(counters.hits, counters.misses);
                debug!(
                    hits = snapshot.hits,
                    misses = snapshot.misses,
                    hit_ratio = snapshot.hit_ratio,
                    "Cache metrics retrieved"
                );
                snapshot
            }
            Err(e) => {
                error!(error = %e, "Failed to retrieve cache metrics");
                MetricsSnapshot::unavailable(e.to_string())
            }
        }
    }
}
