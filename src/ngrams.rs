use crate::consts::NGRAM_SEPARATOR;
use crate::error::{ShingleError, ShingleResult};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// Named n-gram lengths, `Unigram` (1) through `Eightgram` (8).
#[derive(
    Debug, Clone, Copy, EnumIter, EnumString, Display, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum NGramLength {
    Unigram = 1,
    Bigram = 2,
    Trigram = 3,
    Fourgram = 4,
    Fivegram = 5,
    Sixgram = 6,
    Sevengram = 7,
    Eightgram = 8,
}

impl NGramLength {
    /// Number of words in one n-gram of this length.
    pub fn width(self) -> usize {
        self as usize
    }
}

impl From<NGramLength> for usize {
    fn from(length: NGramLength) -> Self {
        length.width()
    }
}

impl TryFrom<usize> for NGramLength {
    type Error = ShingleError;

    fn try_from(n: usize) -> ShingleResult<Self> {
        match n {
            1 => Ok(Self::Unigram),
            2 => Ok(Self::Bigram),
            3 => Ok(Self::Trigram),
            4 => Ok(Self::Fourgram),
            5 => Ok(Self::Fivegram),
            6 => Ok(Self::Sixgram),
            7 => Ok(Self::Sevengram),
            8 => Ok(Self::Eightgram),
            _ => Err(ShingleError::InvalidArgument(format!(
                "no named n-gram length for {}",
                n
            ))),
        }
    }
}

/// Slides a window of `length` words over `words`, joining each window
/// with a single space.
///
/// Yields `words.len() - length + 1` n-grams in source order, or nothing
/// when the window does not fit (including `length == 0`).
pub fn compute_ngrams<S: AsRef<str>>(words: &[S], length: usize) -> Vec<String> {
    if length == 0 || length > words.len() {
        return Vec::new();
    }

    words
        .windows(length)
        .map(|window| {
            let mut ngram = String::new();
            for (i, word) in window.iter().enumerate() {
                if i > 0 {
                    ngram.push_str(NGRAM_SEPARATOR);
                }
                ngram.push_str(word.as_ref());
            }
            ngram
        })
        .collect()
}
