//! Sentence and word extraction.
//!
//! Both extractors only understand Latin-derived scripts: word boundaries
//! and word characters are ASCII. Text in other scripts passes through
//! the sentence splitter but yields no (or fragmented) words.

use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

/// Maximal run of anything that is not `. , ; - ? !`, trimmed to ASCII word boundaries.
static SENTENCE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?-u:\b)([^.,;\-?!]+)(?-u:\b)").expect("sentence pattern compiles")
});

/// Maximal run of ASCII word characters, apostrophes and hyphens.
static WORD_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?-u:\b)((?-u:[\w'-])+)(?-u:\b)").expect("word pattern compiles")
});

/// Fixed English stopword list. Entries are lowercase.
pub const STOPWORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "your", "yours",
    "yourself", "yourselves", "he", "him", "his", "himself", "she", "her", "hers", "herself",
    "it", "its", "itself", "they", "them", "their", "theirs", "themselves", "what", "which",
    "who", "whom", "this", "that", "these", "those", "am", "is", "are", "was", "were", "be",
    "been", "being", "have", "has", "had", "having", "do", "does", "did", "doing", "a", "an",
    "the", "and", "but", "if", "or", "because", "as", "until", "while", "of", "at", "by",
    "for", "with", "about", "against", "between", "into", "through", "during", "before",
    "after", "above", "below", "to", "from", "up", "down", "in", "out", "on", "off", "over",
    "under", "again", "further", "then", "once", "here", "there", "when", "where", "why",
    "how", "all", "any", "both", "each", "few", "more", "most", "other", "some", "such", "no",
    "nor", "not", "only", "own", "same", "so", "than", "too", "very", "s", "t", "can", "will",
    "just", "don", "should", "now",
];

static STOPWORD_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| STOPWORDS.iter().copied().collect());

/// Case-insensitive membership test against [`STOPWORDS`].
pub fn is_stopword(word: &str) -> bool {
    STOPWORD_SET.contains(word.to_lowercase().as_str())
}

/// Splits `text` into sentences at `. , ; - ? !`.
///
/// The iterator borrows `text` and can be recreated at will; it never
/// yields an empty sentence.
pub fn sentences(text: &str) -> impl Iterator<Item = &str> + '_ {
    SENTENCE_PATTERN.find_iter(text).map(|m| m.as_str())
}

/// Extracts the words of a sentence, left to right.
///
/// With `normalize`, every word is lowercased and stopwords are dropped.
/// Without it, words keep their original casing and nothing is filtered.
pub fn words(sentence: &str, normalize: bool) -> impl Iterator<Item = String> + '_ {
    WORD_PATTERN
        .find_iter(sentence)
        .map(|m| m.as_str())
        .filter_map(move |word| {
            if !normalize {
                return Some(word.to_string());
            }
            let lowered = word.to_lowercase();
            if STOPWORD_SET.contains(lowered.as_str()) {
                None
            } else {
                Some(lowered)
            }
        })
}
