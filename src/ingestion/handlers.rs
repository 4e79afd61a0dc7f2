use super::types::{UPLOAD_FIELD, UploadResponse};
use crate::cache::lru::ResultCache;
use crate::error::ApiError;
use crate::search::text::split_into_sentences;
use crate::storage::memory::DocumentStore;

use axum::extract::Multipart;
use axum::{Extension, Json};
use std::sync::Arc;

pub async fn handle_upload(
    Extension(store): Extension<Arc<DocumentStore>>,
    Extension(cache): Extension<Arc<ResultCache>>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, ApiError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Unable to parse form: {}", e)))?
    {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }

        let file_id = field
            .file_name()
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .ok_or_else(|| ApiError::BadRequest("Uploaded file has no name".to_string()))?;

        let content = field
            .bytes()
            .await
            .map_err(|e| ApiError::BadRequest(format!("Error reading file: {}", e)))?;

        let text = std::str::from_utf8(&content)
            .map_err(|_| ApiError::BadRequest(format!("File {} is not valid UTF-8", file_id)))?;

        let sentences = split_into_sentences(text);
        let sentence_count = sentences.len();
        let replaced = store.add(file_id.clone(), sentences);

        // After the swap, so an in-flight search sees a newer generation.
        if replaced {
            let dropped = cache.invalidate_document(&file_id);
            tracing::info!(
                "Replaced document {}, dropped {} cached search(es)",
                file_id,
                dropped
            );
        }

        tracing::info!("Stored document {} ({} sentences)", file_id, sentence_count);

        return Ok(Json(UploadResponse {
            file_id,
            sentence_count,
            replaced,
        }));
    }

    tracing::warn!("Upload without a '{}' field", UPLOAD_FIELD);
    Err(ApiError::BadRequest("Error retrieving file".to_string()))
}
