use std::str::FromStr;

use chrono::{TimeZone, Utc};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

use property_listings::adapters::store::sqlite_store::SqliteListingStore;

/// In-memory store pinned to a single connection, so every query sees the same
/// database.
pub async fn memory_store() -> SqliteListingStore {
    let options = SqliteConnectOptions::from_str("sqlite::memory:").unwrap();
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .unwrap();
    let store = SqliteListingStore::new(pool);
    store.migrate().await.unwrap();
    store
}

pub async fn seed_listing(store: &SqliteListingStore, title: &str, price: f64) {
    sqlx::query(
        "INSERT INTO properties (title, description, price, location, created_at) VALUES (?, ?, ?, ?, ?)",
    )
    .bind(title)
    .bind(format!("Description of {title}"))
    .bind(price)
    .bind("Test City")
    .bind(
        Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0)
            .unwrap()
            .to_rfc3339(),
    )
    .execute(store.pool())
    .await
    .unwrap();
}
