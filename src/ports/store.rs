use async_trait::async_trait;

use crate::domain::listing::Listing;
use crate::error::Result;

#[async_trait]
pub trait ListingStore: Send + Sync {
    /// Select the full listing collection. No filtering or pagination.
    async fn fetch_all(&self) -> Result<Vec<Listing>>;
}
