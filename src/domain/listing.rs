use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A property listing as read from the backing store. Created by the store's
/// write path; immutable from this crate's perspective.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub location: String,
    pub created_at: DateTime<Utc>,
}

impl std::fmt::Display for Listing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} - {} (${:.2})",
            self.title, self.location, self.price
        )
    }
}
