//! Fuzzy Sentence Search Library
//!
//! This library crate defines the modules of the search node.
//! It serves as the foundation for the binary executable (`main.rs`).
//!
//! ## Architecture Modules
//! - **`search`**: The fuzzy matcher (containment plus sliding-window edit distance),
//!   the cache-first search pipeline and text utilities.
//! - **`cache`**: A size-bounded LRU cache of search results keyed by document and query.
//! - **`storage`**: The in-memory document store (document id -> ordered sentences).
//! - **`ingestion`**: Multipart upload of text files into the store.
//! - **`api`**: The Axum router tying the handlers together.
//! - **`config`** / **`error`**: Service configuration and HTTP error mapping.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod ingestion;
pub mod search;
pub mod storage;
