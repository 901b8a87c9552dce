use axum::Json;
use axum::extract::State;
use axum::http::{StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::domain::listing::Listing;
use crate::domain::metrics::MetricsSnapshot;
use crate::error::PropertyError;

use super::AppState;

/// Flat wire representation of a listing: price coerced to a two-decimal
/// string, timestamp to RFC 3339.
#[derive(Serialize)]
struct PropertyRecord {
    id: i64,
    title: String,
    description: String,
    price: String,
    location: String,
    created_at: String,
}

impl From<&Listing> for PropertyRecord {
    fn from(listing: &Listing) -> Self {
        Self {
            id: listing.id,
            title: listing.title.clone(),
            description: listing.description.clone(),
            price: format!("{:.2}", listing.price),
            location: listing.location.clone(),
            created_at: listing.created_at.to_rfc3339(),
        }
    }
}

#[derive(Serialize)]
struct PropertyListBody {
    properties: Vec<PropertyRecord>,
    count: usize,
    cached: bool,
}

pub struct ApiError(PropertyError);

impl From<PropertyError> for ApiError {
    fn from(err: PropertyError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self.0, "Request failed");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({ "error": self.0.to_string() })),
        )
            .into_response()
    }
}

fn json_body(body: String) -> Response {
    (
        [(header::CONTENT_TYPE, "application/json")],
        body,
    )
        .into_response()
}

/// `GET /properties` — the listing collection, behind the full-response cache.
/// Within the response TTL repeated requests return the stored body
/// byte-identical, regardless of store or listing-cache state.
pub async fn property_list(
    State(state): State<AppState>,
    uri: Uri,
) -> Result<Response, ApiError> {
    let path = uri
        .path_and_query()
        .map_or_else(|| uri.path().to_string(), ToString::to_string);

    if let Some(body) = state.response_cache.lookup(&path).await {
        tracing::debug!(%path, "Serving cached response body");
        return Ok(json_body(body));
    }

    let listings = state.properties.all_properties().await?;
    let body = serde_json::to_string(&PropertyListBody {
        properties: listings.iter().map(PropertyRecord::from).collect(),
        count: listings.len(),
        cached: true,
    })
    .map_err(PropertyError::from)?;

    state.response_cache.store(&path, &body).await;
    Ok(json_body(body))
}

/// `GET /properties/metrics` — cache hit/miss diagnostics. Always 200; backend
/// failures surface as a zero-filled snapshot with an `error` field.
pub async fn cache_metrics(State(state): State<AppState>) -> Json<MetricsSnapshot> {
    Json(state.metrics.snapshot().await)
}
