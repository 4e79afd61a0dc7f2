//! Search Service Module
//!
//! Approximate ("fuzzy") substring search over the sentences of one document.
//!
//! ## Overview
//! A query is compared against every sentence independently. A sentence that
//! contains the query (ignoring case) matches at distance 0; otherwise every
//! window of the sentence as long as the query is scored by edit distance and the
//! closest window wins. Matches are ranked by `(distance, index)`.
//!
//! ## Submodules
//! - **`distance`**: Unicode-aware case folding and Levenshtein distance.
//! - **`engine`**: The `FuzzyMatcher` and its configuration (result limit,
//!   distance threshold, empty-query policy).
//! - **`pipeline`**: Cache-first orchestration of store, cache and matcher.
//! - **`handlers`**: HTTP request handlers for the Axum web server.
//! - **`text`**: Sentence splitting and match highlighting.
//! - **`types`**: Data Transfer Objects (DTOs) for API communication.

pub mod distance;
pub mod engine;
pub mod handlers;
pub mod pipeline;
pub mod text;
pub mod types;
