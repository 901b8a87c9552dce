use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub cache: CacheConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StoreConfig {
    #[serde(default = "default_database_url")]
    pub database_url: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            database_url: default_database_url(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CacheBackend {
    #[default]
    Memory,
    Redis,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CacheConfig {
    #[serde(default)]
    pub backend: CacheBackend,
    #[serde(default = "default_redis_url")]
    pub redis_url: String,
    #[serde(default = "default_max_entries")]
    pub max_entries: usize,
    /// TTL for the listing-collection cache entry.
    #[serde(default = "default_listing_ttl")]
    pub listing_ttl_secs: u64,
    /// TTL for cached full HTTP response bodies.
    #[serde(default = "default_response_ttl")]
    pub response_ttl_secs: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            backend: CacheBackend::default(),
            redis_url: default_redis_url(),
            max_entries: default_max_entries(),
            listing_ttl_secs: default_listing_ttl(),
            response_ttl_secs: default_response_ttl(),
        }
    }
}

fn default_bind_addr() -> String {
    "127.0.0.1:8000".into()
}

fn default_database_url() -> String {
    "sqlite:properties.db".into()
}

fn default_redis_url() -> String {
    "redis://127.0.0.1:6379".into()
}

fn default_max_entries() -> usize {
    500
}

fn default_listing_ttl() -> u64 {
    3600
}

fn default_response_ttl() -> u64 {
    900
}
