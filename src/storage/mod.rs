//! Document Storage Module
//!
//! Holds uploaded documents in memory as ordered lists of sentences.
//!
//! ## Core Concepts
//! - **Document**: an identifier (the uploaded file name) mapped to its sentences,
//!   in upload order. The position of a sentence is its index in search results.
//! - **Access**: readers never block each other; a re-upload replaces the whole
//!   sentence list atomically. Documents are never deleted.
//! - **Lifecycle**: the store is constructed by the binary and injected into handlers.
//!   Nothing survives a restart.

pub mod handlers;
pub mod memory;
pub mod protocol;

#[cfg(test)]
mod tests;
