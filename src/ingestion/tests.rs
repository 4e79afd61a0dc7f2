//! Ingestion Module Tests
//!
//! Drives the upload handler through a minimal router.
//!
//! ## Test Scopes
//! - **Upload**: multipart parsing, sentence splitting and storage.
//! - **Replacement**: re-uploading a file drops its cached search results.
//! - **Rejection**: missing field, missing file name, non-UTF-8 content.

#[cfg(test)]
mod tests {
    use crate::cache::lru::ResultCache;
    use crate::ingestion::handlers::handle_upload;
    use crate::ingestion::types::{ENDPOINT_UPLOAD, UploadResponse};
    use crate::search::types::MatchResult;
    use crate::storage::memory::DocumentStore;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode};
    use axum::routing::post;
    use axum::{Extension, Router};
    use std::sync::Arc;
    use tower::ServiceExt;

    const BOUNDARY: &str = "XTESTBOUNDARY";

    fn app(store: Arc<DocumentStore>, cache: Arc<ResultCache>) -> Router {
        Router::new()
            .route(ENDPOINT_UPLOAD, post(handle_upload))
            .layer(Extension(store))
            .layer(Extension(cache))
    }

    fn multipart_body(field: &str, filename: Option<&str>, content: &[u8]) -> Vec<u8> {
        let disposition = match filename {
            Some(name) => format!("form-data; name=\"{}\"; filename=\"{}\"", field, name),
            None => format!("form-data; name=\"{}\"", field),
        };
        let mut body = format!(
            "--{}\r\nContent-Disposition: {}\r\nContent-Type: text/plain\r\n\r\n",
            BOUNDARY, disposition
        )
        .into_bytes();
        body.extend_from_slice(content);
        body.extend_from_slice(format!("\r\n--{}--\r\n", BOUNDARY).as_bytes());
        body
    }

    fn upload_request(body: Vec<u8>) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(ENDPOINT_UPLOAD)
            .header(
                "content-type",
                format!("multipart/form-data; boundary={}", BOUNDARY),
            )
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn test_upload_splits_and_stores() {
        let store = Arc::new(DocumentStore::new());
        let cache = Arc::new(ResultCache::new(1024));

        let body = multipart_body("file", Some("notes.txt"), b"Hello world. Say hello! Trailing");
        let response = app(store.clone(), cache)
            .oneshot(upload_request(body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let upload: UploadResponse = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(upload.file_id, "notes.txt");
        assert_eq!(upload.sentence_count, 2);
        assert!(!upload.replaced);
        assert_eq!(
            &store.get_sentences("notes.txt").unwrap()[..],
            &["Hello world.", "Say hello!"]
        );
    }

    #[tokio::test]
    async fn test_reupload_invalidates_cached_results() {
        let store = Arc::new(DocumentStore::new());
        let cache = Arc::new(ResultCache::new(4096));
        store.add("notes.txt", vec!["Old text.".to_string()]);
        cache.put(
            "notes.txt",
            "old",
            vec![MatchResult {
                sentence: "Old text.".to_string(),
                index: 0,
                matched_text: "old".to_string(),
                distance: 0,
            }],
        );

        let body = multipart_body("file", Some("notes.txt"), b"New text.");
        let response = app(store.clone(), cache.clone())
            .oneshot(upload_request(body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let upload: UploadResponse = serde_json::from_slice(&bytes).unwrap();
        assert!(upload.replaced);
        assert!(cache.get("notes.txt", "old").is_none());
        assert_eq!(&store.get_sentences("notes.txt").unwrap()[..], &["New text."]);
    }

    #[tokio::test]
    async fn test_upload_without_file_field() {
        let store = Arc::new(DocumentStore::new());
        let body = multipart_body("attachment", Some("notes.txt"), b"Ignored.");
        let response = app(store.clone(), Arc::new(ResultCache::new(1024)))
            .oneshot(upload_request(body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_upload_without_file_name() {
        let body = multipart_body("file", None, b"Some text.");
        let response = app(
            Arc::new(DocumentStore::new()),
            Arc::new(ResultCache::new(1024)),
        )
        .oneshot(upload_request(body))
        .await
        .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_upload_rejects_invalid_utf8() {
        let body = multipart_body("file", Some("binary.bin"), &[0xff, 0xfe, 0x2e]);
        let response = app(
            Arc::new(DocumentStore::new()),
            Arc::new(ResultCache::new(1024)),
        )
        .oneshot(upload_request(body))
        .await
        .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
