use axum::{Extension, Json};
use std::sync::Arc;

use super::memory::DocumentStore;
use super::protocol::{ExpandContextRequest, ExpandContextResponse};
use crate::error::ApiError;

pub async fn handle_list_files(
    Extension(store): Extension<Arc<DocumentStore>>,
) -> Json<Vec<String>> {
    Json(store.list())
}

pub async fn handle_expand_context(
    Extension(store): Extension<Arc<DocumentStore>>,
    Json(req): Json<ExpandContextRequest>,
) -> Result<Json<ExpandContextResponse>, ApiError> {
    match store.sentence_at(&req.file_id, req.index) {
        Ok(context) => Ok(Json(ExpandContextResponse { context })),
        Err(e) => {
            tracing::warn!("Rejected expand-context request: {}", e);
            Err(ApiError::BadRequest(e.to_string()))
        }
    }
}
