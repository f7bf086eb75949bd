use rstest::rstest;
use shingles::ngrams::{compute_ngrams, NGramLength};
use std::str::FromStr;
use strum::IntoEnumIterator;

#[test]
fn test_trigrams_of_five_words() {
    let words = ["a", "b", "c", "d", "e"];
    assert_eq!(compute_ngrams(&words, 3), vec!["a b c", "b c d", "c d e"]);
}

#[rstest]
#[case(1, 4)]
#[case(2, 3)]
#[case(4, 1)]
#[case(5, 0)]
#[case(0, 0)]
fn test_window_count(#[case] length: usize, #[case] expected: usize) {
    let words = vec!["w".to_string(); 4];
    assert_eq!(compute_ngrams(&words, length).len(), expected);
}

#[test]
fn test_duplicates_are_not_removed() {
    let words = ["cat", "cat", "cat", "cat"];
    assert_eq!(compute_ngrams(&words, 2), vec!["cat cat"; 3]);
}

#[test]
fn test_empty_input() {
    let words: [&str; 0] = [];
    assert!(compute_ngrams(&words, 1).is_empty());
}

#[test]
fn test_named_lengths() {
    let widths: Vec<usize> = NGramLength::iter().map(usize::from).collect();
    assert_eq!(widths, (1..=8).collect::<Vec<_>>());

    assert_eq!(NGramLength::Trigram.width(), 3);
    assert_eq!(NGramLength::Eightgram.to_string(), "eightgram");
    assert_eq!(NGramLength::from_str("bigram").unwrap(), NGramLength::Bigram);
}

#[rstest]
#[case(1, Some(NGramLength::Unigram))]
#[case(8, Some(NGramLength::Eightgram))]
#[case(0, None)]
#[case(9, None)]
fn test_named_length_from_usize(#[case] n: usize, #[case] expected: Option<NGramLength>) {
    assert_eq!(NGramLength::try_from(n).ok(), expected);
}
