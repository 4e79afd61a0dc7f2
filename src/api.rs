//! HTTP API
//!
//! Wires the handler modules into one Axum `Router`. Shared services are
//! injected as `Extension` layers; CORS and request tracing wrap every route.

use crate::cache::lru::{CacheStats, ResultCache};
use crate::ingestion::handlers::handle_upload;
use crate::ingestion::types::ENDPOINT_UPLOAD;
use crate::search::handlers::{ENDPOINT_SEARCH, handle_search};
use crate::search::pipeline::SearchPipeline;
use crate::storage::handlers::{handle_expand_context, handle_list_files};
use crate::storage::memory::DocumentStore;
use crate::storage::protocol::{ENDPOINT_EXPAND_CONTEXT, ENDPOINT_FILES};

use axum::extract::DefaultBodyLimit;
use axum::http::{Method, header};
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;

pub const ENDPOINT_HEALTH: &str = "/health";
pub const ENDPOINT_HEALTH_STATS: &str = "/health/stats";

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StatsResponse {
    pub documents: usize,
    pub cache: CacheStats,
}

/// Builds the service router around an existing pipeline.
pub fn router(pipeline: Arc<SearchPipeline>, max_upload_bytes: usize) -> Router {
    // The defaults log at DEBUG; one line per request and response is wanted at INFO.
    let trace = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_request(DefaultOnRequest::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route(ENDPOINT_UPLOAD, post(handle_upload))
        .route(ENDPOINT_FILES, get(handle_list_files))
        .route(ENDPOINT_SEARCH, post(handle_search))
        .route(ENDPOINT_EXPAND_CONTEXT, post(handle_expand_context))
        .route(ENDPOINT_HEALTH, get(handle_health))
        .route(ENDPOINT_HEALTH_STATS, get(handle_stats))
        .layer(Extension(pipeline.store().clone()))
        .layer(Extension(pipeline.cache().clone()))
        .layer(Extension(pipeline))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(cors)
        .layer(trace)
}

async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

async fn handle_stats(
    Extension(store): Extension<Arc<DocumentStore>>,
    Extension(cache): Extension<Arc<ResultCache>>,
) -> Json<StatsResponse> {
    Json(StatsResponse {
        documents: store.len(),
        cache: cache.stats(),
    })
}
