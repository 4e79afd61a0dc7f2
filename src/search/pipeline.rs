use super::engine::{EmptyQueryPolicy, FuzzyMatcher};
use super::types::MatchResult;
use crate::cache::lru::ResultCache;
use crate::storage::memory::{DocumentStore, StoreError};

use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    #[error("Query must not be empty")]
    EmptyQuery,

    #[error(transparent)]
    Store(#[from] StoreError),
}

#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub results: Arc<[MatchResult]>,
    /// True when the results came from the cache and the matcher did not run.
    pub cached: bool,
}

/// Cache-first search over stored documents.
///
/// Consults the cache, and only on a miss loads the document, runs the
/// matcher and caches what it produced. Results are cached only if the
/// document is still the version they were computed from.
pub struct SearchPipeline {
    store: Arc<DocumentStore>,
    cache: Arc<ResultCache>,
    matcher: Arc<FuzzyMatcher>,
}

impl SearchPipeline {
    pub fn new(
        store: Arc<DocumentStore>,
        cache: Arc<ResultCache>,
        matcher: Arc<FuzzyMatcher>,
    ) -> Arc<Self> {
        Arc::new(Self {
            store,
            cache,
            matcher,
        })
    }

    pub fn run(&self, document_id: &str, query: &str) -> Result<SearchOutcome, SearchError> {
        if query.is_empty() && self.matcher.config().empty_query == EmptyQueryPolicy::Reject {
            return Err(SearchError::EmptyQuery);
        }

        if let Some(results) = self.cache.get(document_id, query) {
            tracing::debug!("Cache hit for {:?} on {}", query, document_id);
            return Ok(SearchOutcome {
                results,
                cached: true,
            });
        }

        let snapshot = self
            .store
            .snapshot(document_id)
            .ok_or_else(|| StoreError::DocumentNotFound(document_id.to_string()))?;

        tracing::debug!(
            "Cache miss for {:?} on {}, matching {} sentences",
            query,
            document_id,
            snapshot.sentences.len()
        );

        let results: Arc<[MatchResult]> =
            self.matcher.search(query, &snapshot.sentences[..]).into();

        // A re-upload during matching must not leave these results behind.
        self.cache.put_if(document_id, query, results.clone(), || {
            self.store.generation(document_id) == Some(snapshot.generation)
        });

        Ok(SearchOutcome {
            results,
            cached: false,
        })
    }

    pub fn store(&self) -> &Arc<DocumentStore> {
        &self.store
    }

    pub fn cache(&self) -> &Arc<ResultCache> {
        &self.cache
    }
}
