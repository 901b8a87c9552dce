use std::time::Duration;

use async_trait::async_trait;
use redis::AsyncCommands;
use redis::aio::ConnectionManager;

use crate::error::Result;
use crate::ports::cache::{CacheCounters, ListingCache};

/// Redis-backed cache. Read and write failures degrade to a miss or a dropped
/// write so the read path keeps working off the store; only `counters` surfaces
/// backend errors, and the metrics reporter handles those.
pub struct RedisCache {
    manager: ConnectionManager,
}

impl RedisCache {
    pub async fn connect(url: &str) -> Result<Self> {
        let client = redis::Client::open(url)?;
        let manager = ConnectionManager::new(client).await?;
        tracing::info!(url, "Connected to Redis cache backend");
        Ok(Self { manager })
    }
}

#[async_trait]
impl ListingCache for RedisCache {
    async fn get(&self, key: &str) -> Option<String> {
        let mut conn = self.manager.clone();
        match conn.get::<_, Option<String>>(key).await {
            Ok(value) => value,
            Err(e) => {
                tracing::error!(key, error = %e, "Redis GET failed, treating as miss");
                None
            }
        }
    }

    async fn set(&self, key: &str, value: &str, ttl: Duration) {
        let mut conn = self.manager.clone();
        if let Err(e) = conn
            .set_ex::<_, _, ()>(key, value, ttl.as_secs())
            .await
        {
            tracing::error!(key, error = %e, "Redis SET failed, skipping write");
        }
    }

    async fn counters(&self) -> Result<CacheCounters> {
        let mut conn = self.manager.clone();
        let info: String = redis::cmd("INFO")
            .arg("stats")
            .query_async(&mut conn)
            .await?;
        Ok(parse_keyspace_counters(&info))
    }
}

/// Extract `keyspace_hits` / `keyspace_misses` from an `INFO stats` payload.
/// Absent or malformed counters default to zero.
fn parse_keyspace_counters(info: &str) -> CacheCounters {
    let mut counters = CacheCounters::default();
    for line in info.lines() {
        if let Some(value) = line.strip_prefix("keyspace_hits:") {
            counters.hits = value.trim().parse().unwrap_or(0);
        } else if let Some(value) = line.strip_prefix("keyspace_misses:") {
            counters.misses = value.trim().parse().unwrap_or(0);
        }
    }
    counters
}
