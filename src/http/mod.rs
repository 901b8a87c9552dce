pub mod handlers;
pub mod response_cache;

use std::sync::Arc;

use axum::Router;
use axum::routing::get;

use crate::error::Result;
use crate::services::metrics::MetricsReporter;
use crate::services::properties::PropertyService;
use response_cache::ResponseCache;

#[derive(Clone)]
pub struct AppState {
    pub properties: Arc<PropertyService>,
    pub metrics: Arc<MetricsReporter>,
    pub response_cache: Arc<ResponseCache>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/properties", get(handlers::property_list))
        .route("/properties/metrics", get(handlers::cache_metrics))
        .with_state(state)
}

pub async fn serve(bind_addr: &str, state: AppState) -> Result<()> {
    let app = router(state);
    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    tracing::info!("HTTP server listening on {bind_addr}");
    axum::serve(listener, app).await?;
    Ok(())
}
