//! Size-Bounded LRU Result Cache
//!
//! Memoizes matcher output per `(document, query)` pair under a byte budget.
//!
//! ## Accounting
//! Each entry is charged an estimated size: a fixed overhead per record plus
//! the byte length of its `sentence` and `matched_text`. The sum of charges is
//! tracked in `current_size` and never exceeds `max_size` once an operation
//! returns.
//!
//! ## Recency
//! Every insert or hit stamps the entry with a fresh tick from a monotonically
//! increasing counter. `recency` maps tick -> key, so the first element is
//! always the least recently used entry and eviction is a `pop_first`.

use crate::search::types::MatchResult;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

/// Fixed charge per cached record: 16 bytes of bookkeeping plus four 8-byte
/// integer-sized fields.
pub const RECORD_OVERHEAD: usize = 16 + 4 * 8;

/// Exact, case-sensitive identity of a cached search.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub document_id: String,
    pub query: String,
}

impl CacheKey {
    pub fn new(document_id: &str, query: &str) -> Self {
        Self {
            document_id: document_id.to_string(),
            query: query.to_string(),
        }
    }
}

struct CacheEntry {
    results: Arc<[MatchResult]>,
    size: usize,
    tick: u64,
}

#[derive(Default)]
struct CacheState {
    entries: HashMap<CacheKey, CacheEntry>,
    recency: BTreeMap<u64, CacheKey>,
    current_size: usize,
    next_tick: u64,
    hits: u64,
    misses: u64,
    evictions: u64,
}

impl CacheState {
    fn bump(&mut self) -> u64 {
        let tick = self.next_tick;
        self.next_tick += 1;
        tick
    }

    fn remove(&mut self, key: &CacheKey) -> Option<CacheEntry> {
        let entry = self.entries.remove(key)?;
        self.recency.remove(&entry.tick);
        self.current_size -= entry.size;
        Some(entry)
    }
}

/// Point-in-time counters, exposed on the stats endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheStats {
    pub entries: usize,
    pub current_size: usize,
    pub max_size: usize,
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
}

/// Thread-safe LRU cache of search results.
///
/// A single lock guards entries, recency order and size accounting together,
/// so no caller can observe them out of step.
pub struct ResultCache {
    max_size: usize,
    state: Mutex<CacheState>,
}

impl ResultCache {
    /// Creates a cache holding at most `max_size` estimated bytes.
    pub fn new(max_size: usize) -> Self {
        Self {
            max_size,
            state: Mutex::new(CacheState::default()),
        }
    }

    /// Looks up cached results and marks the entry most recently used.
    pub fn get(&self, document_id: &str, query: &str) -> Option<Arc<[MatchResult]>> {
        let key = CacheKey::new(document_id, query);
        let mut guard = self.state.lock();
        let state = &mut *guard;

        let Some(entry) = state.entries.get_mut(&key) else {
            state.misses += 1;
            return None;
        };

        let tick = state.next_tick;
        state.next_tick += 1;
        state.recency.remove(&entry.tick);
        entry.tick = tick;
        state.recency.insert(tick, key);
        state.hits += 1;

        Some(entry.results.clone())
    }

    /// Caches `results`, evicting least recently used entries to make room.
    ///
    /// Entries larger than the whole cache are silently not admitted.
    pub fn put(&self, document_id: &str, query: &str, results: impl Into<Arc<[MatchResult]>>) {
        self.put_if(document_id, query, results, || true);
    }

    /// Like `put`, but `is_current` runs under the cache lock and the results
    /// are dropped when it returns `false`. Returns whether they were admitted.
    ///
    /// Invalidation takes the same lock, so a check that passes here is
    /// ordered before any `invalidate_document` that could have removed the
    /// entry.
    pub fn put_if<F>(
        &self,
        document_id: &str,
        query: &str,
        results: impl Into<Arc<[MatchResult]>>,
        is_current: F,
    ) -> bool
    where
        F: FnOnce() -> bool,
    {
        let results = results.into();
        let size = estimate_size(&results);

        if size > self.max_size {
            tracing::debug!(
                "Not caching {:?} on {}: {} bytes exceeds capacity {}",
                query,
                document_id,
                size,
                self.max_size
            );
            return false;
        }

        let key = CacheKey::new(document_id, query);
        let mut state = self.state.lock();

        if !is_current() {
            tracing::debug!(
                "Not caching {:?} on {}: document changed during the search",
                query,
                document_id
            );
            return false;
        }

        state.remove(&key);

        while state.current_size + size > self.max_size {
            let Some((_, victim)) = state.recency.pop_first() else {
                break;
            };
            if let Some(evicted) = state.entries.remove(&victim) {
                state.current_size -= evicted.size;
                state.evictions += 1;
                tracing::debug!(
                    "Evicted {:?} on {} ({} bytes)",
                    victim.query,
                    victim.document_id,
                    evicted.size
                );
            }
        }

        let tick = state.bump();
        state.recency.insert(tick, key.clone());
        state.entries.insert(key, CacheEntry { results, size, tick });
        state.current_size += size;
        true
    }

    /// Drops every cached search of `document_id`. Returns how many entries
    /// were removed.
    pub fn invalidate_document(&self, document_id: &str) -> usize {
        let mut state = self.state.lock();
        let stale: Vec<CacheKey> = state
            .entries
            .keys()
            .filter(|key| key.document_id == document_id)
            .cloned()
            .collect();

        for key in &stale {
            state.remove(key);
        }
        stale.len()
    }

    pub fn len(&self) -> usize {
        self.state.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn current_size(&self) -> usize {
        self.state.lock().current_size
    }

    pub fn max_size(&self) -> usize {
        self.max_size
    }

    pub fn stats(&self) -> CacheStats {
        let state = self.state.lock();
        CacheStats {
            entries: state.entries.len(),
            current_size: state.current_size,
            max_size: self.max_size,
            hits: state.hits,
            misses: state.misses,
            evictions: state.evictions,
        }
    }

    /// Panics if entries, recency order and size accounting disagree.
    #[cfg(test)]
    pub(crate) fn assert_consistent(&self) {
        let state = self.state.lock();
        let summed: usize = state.entries.values().map(|e| e.size).sum();
        assert_eq!(summed, state.current_size, "size accounting drifted");
        assert!(state.current_size <= self.max_size, "over capacity");
        assert_eq!(state.entries.len(), state.recency.len(), "recency size mismatch");
        for (tick, key) in &state.recency {
            let entry = state.entries.get(key).expect("dangling recency key");
            assert_eq!(entry.tick, *tick, "stale tick for {:?}", key);
        }
    }
}

/// Estimated memory charge of a result list.
pub fn estimate_size(results: &[MatchResult]) -> usize {
    results
        .iter()
        .map(|r| RECORD_OVERHEAD + r.sentence.len() + r.matched_text.len())
        .sum()
}
