//! Frequency ranking over enumerated shingle records.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One enumerated n-gram with its identity key, count and relative frequency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShingleRecord {
    pub hash: u32,
    pub ngram: String,
    pub count: usize,
    pub frequency: f32,
}

impl ShingleRecord {
    pub fn new(hash: u32, ngram: &str, count: usize, distinct: usize) -> Self {
        Self {
            hash,
            ngram: ngram.to_string(),
            count,
            frequency: frequency(count, distinct),
        }
    }
}

impl fmt::Display for ShingleRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hash:{}, ngram:'{}', count:{}, frequency:{}",
            self.hash, self.ngram, self.count, self.frequency
        )
    }
}

/// Occurrence count relative to the number of distinct n-grams.
///
/// The denominator is the distinct count, not total occurrences, so
/// frequencies of one store do not sum to 1.
pub fn frequency(count: usize, distinct: usize) -> f32 {
    if distinct == 0 {
        return 0.0;
    }
    count as f32 / distinct as f32
}

/// Sorts records by count, highest first. Equal counts keep their input order.
pub fn rank_descending(mut records: Vec<ShingleRecord>) -> Vec<ShingleRecord> {
    records.sort_by(|a, b| b.count.cmp(&a.count));
    records
}

/// Sorts records by count, lowest first. Equal counts keep their input order.
pub fn rank_ascending(mut records: Vec<ShingleRecord>) -> Vec<ShingleRecord> {
    records.sort_by_key(|r| r.count);
    records
}

/// The `k` most frequent records. `k == 0` means no limit.
pub fn top(records: Vec<ShingleRecord>, k: usize) -> Vec<ShingleRecord> {
    let mut ranked = rank_descending(records);
    if k > 0 && ranked.len() > k {
        ranked.truncate(k);
    }
    ranked
}
