use super::pipeline::SearchPipeline;
use super::text::highlight_match;
use super::types::{SearchHit, SearchRequest};
use crate::error::ApiError;

use axum::{Extension, Json};
use std::sync::Arc;

/// Search endpoint.
pub const ENDPOINT_SEARCH: &str = "/search";

pub async fn handle_search(
    Extension(pipeline): Extension<Arc<SearchPipeline>>,
    Json(req): Json<SearchRequest>,
) -> Result<Json<Vec<SearchHit>>, ApiError> {
    let SearchRequest {
        file_id,
        query,
        highlight,
    } = req;

    // Matching is CPU bound, keep it off the async workers.
    let worker = pipeline.clone();
    let outcome = tokio::task::spawn_blocking(move || worker.run(&file_id, &query))
        .await
        .map_err(|e| ApiError::Internal(format!("search task failed: {}", e)))??;

    tracing::info!(
        "Search returned {} result(s) (cached: {})",
        outcome.results.len(),
        outcome.cached
    );

    let hits = outcome
        .results
        .iter()
        .map(|result| SearchHit {
            highlighted: highlight.then(|| highlight_match(&result.sentence, &result.matched_text)),
            result: result.clone(),
        })
        .collect();

    Ok(Json(hits))
}
