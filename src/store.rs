//! The shingle store: a hash-indexed, concurrency-safe n-gram counter.
//!
//! N-grams are keyed by the CRC-32 (IEEE) of their text. Two distinct
//! n-grams with the same checksum are counted as one; the first text
//! seen under a key is the one reported.

use crate::consts::{DEFAULT_NGRAM_LENGTH, INITIAL_STORE_CAPACITY};
use crate::error::{ShingleError, ShingleResult};
use crate::ngrams::{compute_ngrams, NGramLength};
use crate::ranker::{self, ShingleRecord};
use crate::tokenizer;
use rayon::prelude::*;
use serde::Serialize;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};
use tracing::{debug, info};

/// Identity key of an n-gram.
#[inline]
pub fn identity_key(ngram: &str) -> u32 {
    crc32fast::hash(ngram.as_bytes())
}

/// A distinct n-gram and how often it has been seen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NGram {
    text: String,
    occurrences: usize,
}

impl NGram {
    fn new(text: String) -> Self {
        Self {
            text,
            occurrences: 1,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn occurrences(&self) -> usize {
        self.occurrences
    }
}

#[derive(Debug)]
struct StoreState {
    n: usize,
    ngrams: HashMap<u32, NGram>,
    // First-seen order of keys; the map itself has no order.
    order: Vec<u32>,
}

impl StoreState {
    fn empty(n: usize) -> Self {
        Self {
            n,
            ngrams: HashMap::with_capacity(INITIAL_STORE_CAPACITY),
            order: Vec::new(),
        }
    }

    fn record(&self, key: u32, distinct: usize) -> Option<ShingleRecord> {
        self.ngrams
            .get(&key)
            .map(|g| ShingleRecord::new(key, &g.text, g.occurrences, distinct))
    }
}

/// Counts distinct n-grams across any number of ingested corpora.
///
/// Every operation takes the same internal lock, so the store can be
/// shared (`&ShingleStore` or `Arc<ShingleStore>`) between threads and
/// reads always see a consistent snapshot.
#[derive(Debug)]
pub struct ShingleStore {
    state: Mutex<StoreState>,
}

impl Default for ShingleStore {
    fn default() -> Self {
        Self {
            state: Mutex::new(StoreState::empty(DEFAULT_NGRAM_LENGTH)),
        }
    }
}

fn check_length(n: usize) -> ShingleResult<()> {
    if n < 1 {
        return Err(ShingleError::InvalidArgument(format!(
            "n-gram length must be at least 1, got {}",
            n
        )));
    }
    Ok(())
}

impl ShingleStore {
    /// Creates an empty store producing n-grams of `n` words.
    pub fn new(n: usize) -> ShingleResult<Self> {
        check_length(n)?;
        Ok(Self {
            state: Mutex::new(StoreState::empty(n)),
        })
    }

    pub fn with_length(length: NGramLength) -> Self {
        Self {
            state: Mutex::new(StoreState::empty(length.width())),
        }
    }

    /// Discards every counted n-gram and switches to length `n`.
    ///
    /// This is a reset, not a merge. On error the store is left untouched.
    pub fn initialize(&self, n: usize) -> ShingleResult<()> {
        check_length(n)?;
        *self.lock() = StoreState::empty(n);
        debug!("Store reinitialized with n-gram length {}", n);
        Ok(())
    }

    // A panic while holding the lock can only happen between whole
    // statements, so the state behind a poisoned lock is still valid.
    fn lock(&self) -> MutexGuard<'_, StoreState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn ngram_length(&self) -> usize {
        self.lock().n
    }

    /// Tokenizes `corpus` and counts every n-gram of every sentence.
    ///
    /// Returns the number of n-gram instances added, duplicates included.
    /// Tokenizing happens outside the lock; each sentence's n-grams are
    /// then added under one critical section. If the store is
    /// reinitialized mid-call, the remaining sentences are dropped rather
    /// than counted at the old width.
    pub fn incorporate(&self, corpus: &str, normalize: bool) -> usize {
        let n = self.ngram_length();
        let mut added = 0;
        let mut sentence_count = 0;

        for sentence in tokenizer::sentences(corpus) {
            sentence_count += 1;
            let words: Vec<String> = tokenizer::words(sentence, normalize).collect();
            added += self.add(n, compute_ngrams(&words, n));
        }

        debug!(
            "Incorporated {} n-grams from {} sentences ({} bytes)",
            added,
            sentence_count,
            corpus.len()
        );
        added
    }

    /// Incorporates many corpora in parallel on the rayon pool.
    ///
    /// Final counts equal those of calling [`incorporate`](Self::incorporate)
    /// once per corpus in any order.
    pub fn incorporate_all<T: AsRef<str> + Sync>(&self, corpora: &[T], normalize: bool) -> usize {
        let added: usize = corpora
            .par_iter()
            .map(|corpus| self.incorporate(corpus.as_ref(), normalize))
            .sum();

        info!(
            "📚 Incorporated {} corpora: {} n-grams, {} distinct",
            corpora.len(),
            added,
            self.count()
        );
        added
    }

    /// Lookup-or-insert-and-increment for each n-gram of width `n`.
    ///
    /// Adds nothing when the store's length no longer equals `n`.
    fn add(&self, n: usize, ngrams: Vec<String>) -> usize {
        if ngrams.is_empty() {
            return 0;
        }

        let keyed: Vec<(u32, String)> = ngrams
            .into_iter()
            .map(|text| (identity_key(&text), text))
            .collect();
        let added = keyed.len();

        let mut guard = self.lock();
        if guard.n != n {
            debug!("Dropping {} n-grams of stale length {}", added, n);
            return 0;
        }
        let state = &mut *guard;
        for (key, text) in keyed {
            match state.ngrams.entry(key) {
                Entry::Occupied(mut slot) => slot.get_mut().occurrences += 1,
                Entry::Vacant(slot) => {
                    slot.insert(NGram::new(text));
                    state.order.push(key);
                }
            }
        }
        added
    }

    /// Number of distinct n-grams.
    pub fn count(&self) -> usize {
        self.lock().order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// Sum of all occurrence counts.
    pub fn total_occurrences(&self) -> usize {
        self.lock().ngrams.values().map(|g| g.occurrences).sum()
    }

    /// Looks `text` up by its identity key.
    pub fn get(&self, text: &str) -> Option<NGram> {
        self.lock().ngrams.get(&identity_key(text)).cloned()
    }

    /// Every stored n-gram, in no particular order.
    pub fn walk(&self) -> Vec<ShingleRecord> {
        let state = self.lock();
        let distinct = state.order.len();
        state
            .ngrams
            .iter()
            .map(|(&key, g)| ShingleRecord::new(key, &g.text, g.occurrences, distinct))
            .collect()
    }

    /// Every stored n-gram, in the order it was first seen.
    pub fn ordered_walk(&self) -> Vec<ShingleRecord> {
        let state = self.lock();
        let distinct = state.order.len();
        state
            .order
            .iter()
            .filter_map(|&key| state.record(key, distinct))
            .collect()
    }

    /// Every stored n-gram, most frequent first.
    ///
    /// Ties are listed in first-seen order. The stored order is not modified.
    pub fn sorted_walk(&self) -> Vec<ShingleRecord> {
        ranker::rank_descending(self.ordered_walk())
    }
}
