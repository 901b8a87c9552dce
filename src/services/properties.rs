use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, error};

use crate::config::types::CacheConfig;
use crate::domain::listing::Listing;
use crate::error::Result;
use crate::ports::cache::ListingCache;
use crate::ports::store::ListingStore;

/// Cache key for the full listing collection. Shared by every caller; any of
/// them may overwrite it at any time.
pub const ALL_PROPERTIES_KEY: &str = "all_properties";

/// Cache-aside read path: serve the listing collection from the cache when
/// present, otherwise load from the store and populate the cache.
///
/// Concurrent misses are not coordinated. Two callers missing at the same time
/// will both query the store and both write the key; the last write wins over
/// near-identical data.
pub struct PropertyService {
    store: Arc<dyn ListingStore>,
    cache: Arc<dyn ListingCache>,
    ttl: Duration,
}

impl PropertyService {
    pub fn new(
        store: Arc<dyn ListingStore>,
        cache: Arc<dyn ListingCache>,
        cache_config: &CacheConfig,
    ) -> Self {
        Self {
            store,
            cache,
            ttl: Duration::from_secs(cache_config.listing_ttl_secs),
        }
    }

    /// Return the full listing collection, cached for the configured TTL.
    ///
    /// A cached value is returned as-is with no re-validation against the
    /// store; a value that fails to deserialize counts as a miss. Store errors
    /// propagate to the caller.
    pub async fn all_properties(&self) -> Result<Vec<Listing>> {
        if let Some(cached) = self.cache.get(ALL_PROPERTIES_KEY).await
            && let Ok(listings) = serde_json::from_str::<Vec<Listing>>(&cached)
        {
            debug!("Cache hit for property list");
            return Ok(listings);
        }

        let listings = self.store.fetch_all().await?;

        match serde_json::to_string(&listings) {
            Ok(json) => self.cache.set(ALL_PROPERTIES_KEY, &json, self.ttl).await,
            Err(e) => {
                error!(error = %e, "Failed to serialize listings for cache, skipping write");
            }
        }

        Ok(listings)
    }
}
