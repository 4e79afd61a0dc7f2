//! Document API Protocol
//!
//! Endpoints and Data Transfer Objects for reading stored documents.

use serde::{Deserialize, Serialize};

/// Lists the identifiers of all uploaded documents.
pub const ENDPOINT_FILES: &str = "/files";
/// Returns one sentence of a document by position.
pub const ENDPOINT_EXPAND_CONTEXT: &str = "/expand-context";

/// Request for the full text of a single sentence.
///
/// Clients typically send the `index` of a search result to show it in full.
#[derive(Debug, Serialize, Deserialize)]
pub struct ExpandContextRequest {
    pub file_id: String,
    /// Signed so negative positions are reported as bad input, not a decode failure.
    pub index: i64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ExpandContextResponse {
    pub context: String,
}
