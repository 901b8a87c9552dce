use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use property_listings::adapters::cache::memory_cache::MemoryCache;
use property_listings::adapters::cache::redis_cache::RedisCache;
use property_listings::adapters::store::sqlite_store::SqliteListingStore;
use property_listings::config::load_config;
use property_listings::config::types::CacheBackend;
use property_listings::http::response_cache::ResponseCache;
use property_listings::http::{AppState, serve};
use property_listings::ports::cache::ListingCache;
use property_listings::services::metrics::MetricsReporter;
use property_listings::services::properties::PropertyService;

fn find_config_path() -> PathBuf {
    // Check common locations for config file
    let candidates = [
        PathBuf::from("config.yaml"),
        exe_dir().join("config.yaml"),
    ];

    for path in &candidates {
        if path.exists() {
            return path.clone();
        }
    }

    candidates[0].clone()
}

fn exe_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    tracing::info!("Starting property-listings server");

    let config_path = find_config_path();
    let config = load_config(&config_path)?;

    let cache: Arc<dyn ListingCache> = match config.cache.backend {
        CacheBackend::Redis => Arc::new(RedisCache::connect(&config.cache.redis_url).await?),
        CacheBackend::Memory => {
            tracing::info!("Using in-memory cache backend");
            Arc::new(MemoryCache::new(config.cache.max_entries))
        }
    };

    let store = SqliteListingStore::connect(&config.store.database_url).await?;
    store.migrate().await?;

    let state = AppState {
        properties: Arc::new(PropertyService::new(
            Arc::new(store),
            Arc::clone(&cache),
            &config.cache,
        )),
        metrics: Arc::new(MetricsReporter::new(Arc::clone(&cache))),
        response_cache: Arc::new(ResponseCache::new(
            cache,
            Duration::from_secs(config.cache.response_ttl_secs),
        )),
    };

    serve(&config.server.bind_addr, state).await?;

    Ok(())
}
