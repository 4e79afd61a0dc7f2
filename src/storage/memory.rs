use dashmap::DashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("File not found: {0}")]
    DocumentNotFound(String),

    #[error("Invalid index {index} for file {document_id} ({len} sentences)")]
    IndexOutOfRange {
        document_id: String,
        index: i64,
        len: usize,
    },
}

/// One stored version of a document.
#[derive(Debug, Clone)]
pub struct DocumentSnapshot {
    pub sentences: Arc<[String]>,
    /// Unique per `add`, so a replaced document never gets its old value back.
    pub generation: u64,
}

/// In-memory map from document identifier to its sentences.
///
/// Sentence lists are shared as `Arc<[String]>` so a search can hold on to a
/// document while a re-upload swaps in a new version. The generation tells
/// the search afterwards whether its snapshot is still the stored one.
#[derive(Debug, Default)]
pub struct DocumentStore {
    documents: DashMap<String, DocumentSnapshot>,
    next_generation: AtomicU64,
}

impl DocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `sentences` under `document_id`. Returns `true` when an
    /// existing document was replaced.
    pub fn add(&self, document_id: impl Into<String>, sentences: Vec<String>) -> bool {
        let snapshot = DocumentSnapshot {
            sentences: sentences.into(),
            generation: self.next_generation.fetch_add(1, Ordering::Relaxed),
        };
        self.documents.insert(document_id.into(), snapshot).is_some()
    }

    pub fn get_sentences(&self, document_id: &str) -> Option<Arc<[String]>> {
        self.snapshot(document_id).map(|snapshot| snapshot.sentences)
    }

    pub fn snapshot(&self, document_id: &str) -> Option<DocumentSnapshot> {
        self.documents
            .get(document_id)
            .map(|entry| entry.value().clone())
    }

    pub fn generation(&self, document_id: &str) -> Option<u64> {
        self.documents
            .get(document_id)
            .map(|entry| entry.value().generation)
    }

    /// Document identifiers in lexicographic order.
    pub fn list(&self) -> Vec<String> {
        let mut ids: Vec<String> = self
            .documents
            .iter()
            .map(|entry| entry.key().clone())
            .collect();
        ids.sort();
        ids
    }

    /// Bounds-checked lookup of a single sentence.
    ///
    /// `index` is signed because it arrives straight from clients; negative
    /// values are rejected like any other out-of-range position.
    pub fn sentence_at(&self, document_id: &str, index: i64) -> Result<String, StoreError> {
        let sentences = self
            .get_sentences(document_id)
            .ok_or_else(|| StoreError::DocumentNotFound(document_id.to_string()))?;

        usize::try_from(index)
            .ok()
            .and_then(|i| sentences.get(i))
            .cloned()
            .ok_or_else(|| StoreError::IndexOutOfRange {
                document_id: document_id.to_string(),
                index,
                len: sentences.len(),
            })
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}
