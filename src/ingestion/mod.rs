//! Ingestion Service Module
//!
//! Accepts uploaded text files and turns them into searchable documents.
//!
//! ## Workflow
//! 1. **Receive**: Reads the `file` field of a multipart upload.
//! 2. **Process**: Splits the text into sentences with a regex splitter.
//! 3. **Storage**: Saves the sentences in the `DocumentStore` under the file name.
//! 4. **Invalidation**: When a file replaces an earlier upload with the same name,
//!    cached search results for it are dropped.

pub mod handlers;
pub mod types;

#[cfg(test)]
mod tests;
