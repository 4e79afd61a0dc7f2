//! Ingestion Data Types

use serde::{Deserialize, Serialize};

/// Upload endpoint.
pub const ENDPOINT_UPLOAD: &str = "/upload";
/// Name of the multipart field carrying the file.
pub const UPLOAD_FIELD: &str = "file";

/// Response returned once an uploaded file is stored.
///
/// `file_id` is the identifier to use in search and expand-context requests.
#[derive(Debug, Serialize, Deserialize)]
pub struct UploadResponse {
    pub file_id: String,
    pub sentence_count: usize,
    /// True when an earlier upload with the same name was replaced.
    pub replaced: bool,
}
