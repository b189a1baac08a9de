//! `Database<T>` — a concurrent, append/update table of symbols keyed by
//! `SymbolId`, with a running match counter and a reservation protocol for
//! cross-TU deduplication.

use std::sync::atomic::{AtomicU64, Ordering};

use dashmap::DashMap;

use crate::symbol_id::SymbolId;

/// A table of `T` keyed by `SymbolId`.
///
/// Safe for concurrent `contains`/`reserve`/`update` from multiple worker
/// threads: backed by a sharded concurrent map, so one `Database`
/// covers the whole "shared-resource policy" contract without an
/// additional outer lock.
///
/// `num_matches` is incremented once per *candidate* a `SymbolExtractor`
/// considers, independent of whether that candidate is ultimately
/// filtered, deduplicated, or indexed — so it is always `>= entries().len()`.
#[derive(Default)]
pub struct Database<T> {
    entries: DashMap<SymbolId, T>,
    num_matches: AtomicU64,
}

impl<T> Database<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
            num_matches: AtomicU64::new(0),
        }
    }

    /// Record that a worker examined a candidate declaration, whether or
    /// not it is eventually kept. Called unconditionally before any
    /// `IgnoreFilter`/dedup decision.
    pub fn record_match(&self) {
        self.num_matches.fetch_add(1, Ordering::Relaxed);
    }

    #[must_use]
    pub fn num_matches(&self) -> u64 {
        self.num_matches.load(Ordering::Relaxed)
    }

    /// `true` if `id` already has a stored entry.
    #[must_use]
    pub fn contains(&self, id: SymbolId) -> bool {
        self.entries.contains_key(&id)
    }

    /// Atomically claim `id` for extraction by inserting `value` only if
    /// absent. Returns `true` if this call won the race and the provided
    /// value is now stored; `false` if another worker already claimed
    /// `id` first, in which case the caller must discard its own result
    /// ("losers skip silently").
    pub fn reserve(&self, id: SymbolId, value: T) -> bool {
        match self.entries.entry(id) {
            dashmap::mapref::entry::Entry::Vacant(slot) => {
                slot.insert(value);
                true
            }
            dashmap::mapref::entry::Entry::Occupied(_) => false,
        }
    }

    /// Overwrite the stored value for an id known to already be present
    /// (used by post-passes, which run single-threaded after all workers
    /// drain and so need no reservation protocol).
    pub fn update(&self, id: SymbolId, value: T) {
        self.entries.insert(id, value);
    }

    /// Remove `id` entirely. Used by pruning passes.
    pub fn remove(&self, id: SymbolId) -> Option<T> {
        self.entries.remove(&id).map(|(_, v)| v)
    }

    #[must_use]
    pub fn get(&self, id: SymbolId) -> Option<dashmap::mapref::one::Ref<'_, SymbolId, T>> {
        self.entries.get(&id)
    }

    pub fn get_mut(&self, id: SymbolId) -> Option<dashmap::mapref::one::RefMut<'_, SymbolId, T>> {
        self.entries.get_mut(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> dashmap::iter::Iter<'_, SymbolId, T> {
        self.entries.iter()
    }

    /// All stored ids, as a plain snapshot (used by post-passes that need
    /// to mutate entries while iterating ids).
    #[must_use]
    pub fn ids(&self) -> Vec<SymbolId> {
        self.entries.iter().map(|e| *e.key()).collect()
    }
}
