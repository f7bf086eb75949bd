/// N-gram length used when nothing else is configured (trigrams).
pub const DEFAULT_NGRAM_LENGTH: usize = 3;

/// Initial slot count reserved for the identity map of a fresh store.
pub const INITIAL_STORE_CAPACITY: usize = 10_000;

/// Separator placed between the words of a single n-gram.
pub const NGRAM_SEPARATOR: &str = " ";
