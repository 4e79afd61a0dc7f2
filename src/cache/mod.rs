//! Search Result Cache Module
//!
//! Keeps recent search results in memory so repeated queries skip the matcher.
//!
//! ## Overview
//! Results are keyed by `(document id, query)` exactly as the client sent them.
//! The cache is bounded by an estimated byte budget rather than an entry count,
//! and evicts the least recently used entries inline when a new result needs room.
//! A miss is always safe: the caller recomputes and stores the fresh result.
//!
//! ## Submodules
//! - **`lru`**: The `ResultCache` itself, size estimation and statistics.

pub mod lru;
