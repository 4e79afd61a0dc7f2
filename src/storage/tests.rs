//! Storage Module Tests
//!
//! Validates the in-memory document store.
//!
//! ## Test Scopes
//! - **DocumentStore**: add/get/list semantics and replacement.
//! - **Bounds checking**: `sentence_at` rejects unknown documents and bad indexes.
//! - **Protocol**: JSON shape of the expand-context DTOs.

#[cfg(test)]
mod tests {
    use crate::storage::memory::{DocumentStore, StoreError};
    use crate::storage::protocol::{ExpandContextRequest, ExpandContextResponse};
    use std::sync::Arc;

    fn sentences(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    // ============================================================
    // DOCUMENT STORE TESTS
    // ============================================================

    #[test]
    fn test_add_and_get_preserves_order() {
        let store = DocumentStore::new();
        let replaced = store.add("book.txt", sentences(&["First.", "Second.", "Third."]));

        assert!(!replaced);
        let stored = store.get_sentences("book.txt").expect("document should exist");
        assert_eq!(&stored[..], &["First.", "Second.", "Third."]);
    }

    #[test]
    fn test_get_unknown_document() {
        let store = DocumentStore::new();
        assert!(store.get_sentences("missing.txt").is_none());
        assert!(store.generation("missing.txt").is_none());
    }

    #[test]
    fn test_add_replaces_existing_document() {
        let store = DocumentStore::new();
        store.add("book.txt", sentences(&["Old."]));
        let replaced = store.add("book.txt", sentences(&["New.", "Newer."]));

        assert!(replaced);
        assert_eq!(store.len(), 1);
        assert_eq!(store.get_sentences("book.txt").unwrap().len(), 2);
    }

    #[test]
    fn test_readers_keep_their_snapshot_across_replacement() {
        let store = DocumentStore::new();
        store.add("book.txt", sentences(&["Old."]));
        let snapshot = store.get_sentences("book.txt").unwrap();

        store.add("book.txt", sentences(&["New."]));

        assert_eq!(&snapshot[..], &["Old."]);
        assert_eq!(&store.get_sentences("book.txt").unwrap()[..], &["New."]);
    }

    #[test]
    fn test_generation_changes_on_replacement() {
        let store = DocumentStore::new();
        store.add("book.txt", sentences(&["Old."]));
        let before = store.snapshot("book.txt").unwrap();

        store.add("book.txt", sentences(&["Old."]));
        let after = store.snapshot("book.txt").unwrap();

        assert_ne!(before.generation, after.generation);
        assert_eq!(store.generation("book.txt"), Some(after.generation));
    }

    #[test]
    fn test_generations_are_unique_across_documents() {
        let store = DocumentStore::new();
        store.add("a.txt", vec![]);
        store.add("b.txt", vec![]);

        assert_ne!(store.generation("a.txt"), store.generation("b.txt"));
    }

    #[test]
    fn test_list_is_sorted() {
        let store = DocumentStore::new();
        store.add("c.txt", vec![]);
        store.add("a.txt", vec![]);
        store.add("b.txt", vec![]);

        assert_eq!(store.list(), vec!["a.txt", "b.txt", "c.txt"]);
    }

    #[test]
    fn test_empty_store() {
        let store = DocumentStore::new();
        assert!(store.is_empty());
        assert!(store.list().is_empty());
    }

    #[test]
    fn test_concurrent_writers() {
        let store = Arc::new(DocumentStore::new());
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let store = store.clone();
                std::thread::spawn(move || {
                    store.add(format!("doc_{}.txt", i), sentences(&["A sentence."]));
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(store.len(), 8);
    }

    // ============================================================
    // SENTENCE_AT TESTS
    // ============================================================

    #[test]
    fn test_sentence_at_valid_index() {
        let store = DocumentStore::new();
        store.add("book.txt", sentences(&["Zero.", "One."]));

        assert_eq!(store.sentence_at("book.txt", 1).unwrap(), "One.");
    }

    #[test]
    fn test_sentence_at_unknown_document() {
        let store = DocumentStore::new();
        assert_eq!(
            store.sentence_at("missing.txt", 0),
            Err(StoreError::DocumentNotFound("missing.txt".to_string()))
        );
    }

    #[test]
    fn test_sentence_at_out_of_range() {
        let store = DocumentStore::new();
        store.add("book.txt", sentences(&["Zero.", "One."]));

        for index in [-1, 2, i64::MAX, i64::MIN] {
            assert_eq!(
                store.sentence_at("book.txt", index),
                Err(StoreError::IndexOutOfRange {
                    document_id: "book.txt".to_string(),
                    index,
                    len: 2,
                })
            );
        }
    }

    // ============================================================
    // PROTOCOL TESTS
    // ============================================================

    #[test]
    fn test_expand_context_request_accepts_negative_index() {
        let req: ExpandContextRequest =
            serde_json::from_str(r#"{"file_id": "book.txt", "index": -3}"#).unwrap();
        assert_eq!(req.file_id, "book.txt");
        assert_eq!(req.index, -3);
    }

    #[test]
    fn test_expand_context_response_serialization() {
        let json = serde_json::to_value(ExpandContextResponse {
            context: "Full sentence.".to_string(),
        })
        .unwrap();
        assert_eq!(json, serde_json::json!({"context": "Full sentence."}));
    }
}
