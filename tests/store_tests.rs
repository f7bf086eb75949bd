mod common;

use common::{occurrence_sum, LINEAR_TEXT, LOREM_IPSUM};
use shingles::store::identity_key;
use shingles::{NGramLength, ShingleError, ShingleStore};

fn trigram_store() -> ShingleStore {
    ShingleStore::with_length(NGramLength::Trigram)
}

#[test]
fn test_linear_text_trigrams() {
    let store = trigram_store();
    let added = store.incorporate(LINEAR_TEXT, false);

    assert_eq!(added, 14);
    assert_eq!(store.count(), 13);
    assert_eq!(store.get("A B C").map(|g| g.occurrences()), Some(2));

    let ranked = store.sorted_walk();
    assert_eq!(ranked[0].ngram, "A B C");
    assert_eq!(ranked[0].count, 2);
    assert_eq!(ranked[0].hash, 181_159_164);
    assert!((ranked[0].frequency - 2.0 / 13.0).abs() < 1e-6);
    assert!(ranked[1..].iter().all(|r| r.count == 1));
}

#[test]
fn test_empty_corpus() {
    let store = trigram_store();
    assert_eq!(store.incorporate("", false), 0);
    assert_eq!(store.count(), 0);
    assert!(store.is_empty());
    assert!(store.walk().is_empty());
    assert!(store.sorted_walk().is_empty());
}

#[test]
fn test_stopwords_removed_before_shingling() {
    let store = trigram_store();
    store.incorporate("the cat the cat", true);
    assert_eq!(store.count(), 0);

    let bigrams = ShingleStore::with_length(NGramLength::Bigram);
    bigrams.incorporate("the cat the cat", true);
    assert_eq!(bigrams.count(), 1);
    assert_eq!(bigrams.get("cat cat").map(|g| g.occurrences()), Some(1));
}

#[test]
fn test_lorem_ipsum_normalized_trigrams() {
    let store = trigram_store();
    let added = store.incorporate(LOREM_IPSUM, true);

    assert_eq!(store.count(), 17);
    assert_eq!(added, 36);
    assert_eq!(store.total_occurrences(), 36);

    let top: Vec<(String, usize)> = store
        .sorted_walk()
        .into_iter()
        .take(4)
        .map(|r| (r.ngram, r.count))
        .collect();
    assert_eq!(
        top,
        vec![
            ("right place right".to_string(), 5),
            ("place right place".to_string(), 5),
            ("yesterday woke sucking".to_string(), 4),
            ("woke sucking lemon".to_string(), 4),
        ]
    );
}

#[test]
fn test_lorem_ipsum_raw_unigrams_keep_case() {
    let store = ShingleStore::with_length(NGramLength::Unigram);
    store.incorporate(LOREM_IPSUM, false);

    assert_eq!(store.count(), 30);
    assert_eq!(store.total_occurrences(), 104);
    assert_eq!(store.get("Everything").map(|g| g.occurrences()), Some(3));
    assert_eq!(store.get("everything").map(|g| g.occurrences()), Some(5));
    assert_eq!(store.sorted_walk()[0].ngram, "place");
}

#[test]
fn test_sentence_boundaries_stop_windows() {
    let store = ShingleStore::new(2).unwrap();
    store.incorporate("alpha beta. gamma delta", false);

    assert_eq!(store.count(), 2);
    assert!(store.get("beta gamma").is_none());
}

#[test]
fn test_counts_accumulate_across_calls() {
    let store = trigram_store();
    store.incorporate(LINEAR_TEXT, false);
    store.incorporate(LINEAR_TEXT, false);

    assert_eq!(store.count(), 13);
    assert_eq!(store.get("A B C").map(|g| g.occurrences()), Some(4));
    assert_eq!(occurrence_sum(&store.walk()), 28);
}

#[test]
fn test_walk_sum_matches_generated_instances() {
    let store = ShingleStore::with_length(NGramLength::Bigram);
    let mut generated = store.incorporate(LOREM_IPSUM, true);
    generated += store.incorporate(LINEAR_TEXT, false);

    assert_eq!(occurrence_sum(&store.walk()), generated);
    assert_eq!(store.total_occurrences(), generated);
}

#[test]
fn test_frequency_uses_distinct_count() {
    let store = trigram_store();
    store.incorporate(LINEAR_TEXT, false);

    for r in store.walk() {
        let expected = r.count as f32 / 13.0;
        assert!((r.frequency - expected).abs() < 1e-6, "{}", r);
    }
}

#[test]
fn test_reads_are_idempotent() {
    let store = trigram_store();
    store.incorporate(LOREM_IPSUM, true);

    let mut first = store.walk();
    let mut second = store.walk();
    first.sort_by_key(|r| r.hash);
    second.sort_by_key(|r| r.hash);
    assert_eq!(first, second);

    assert_eq!(store.sorted_walk(), store.sorted_walk());
    assert_eq!(store.count(), 17);
}

#[test]
fn test_sorted_walk_is_non_increasing() {
    let store = ShingleStore::with_length(NGramLength::Unigram);
    store.incorporate(LOREM_IPSUM, false);

    let ranked = store.sorted_walk();
    assert!(ranked.windows(2).all(|w| w[0].count >= w[1].count));
}

#[test]
fn test_sorted_walk_leaves_insertion_order_untouched() {
    let store = trigram_store();
    store.incorporate(LINEAR_TEXT, false);

    let before: Vec<String> = store.ordered_walk().into_iter().map(|r| r.ngram).collect();
    let _ = store.sorted_walk();
    let after: Vec<String> = store.ordered_walk().into_iter().map(|r| r.ngram).collect();

    assert_eq!(before, after);
    assert_eq!(&before[..3], &["A B C", "B C D", "C D E"]);
}

#[test]
fn test_initialize_discards_state() {
    let store = trigram_store();
    store.incorporate(LINEAR_TEXT, false);
    assert_eq!(store.count(), 13);

    store.initialize(2).unwrap();
    assert_eq!(store.count(), 0);
    assert!(store.ordered_walk().is_empty());
    assert_eq!(store.ngram_length(), 2);

    store.incorporate(LINEAR_TEXT, false);
    assert_eq!(store.count(), 13);
    assert_eq!(store.get("A B").map(|g| g.occurrences()), Some(2));
}

#[test]
fn test_zero_length_is_rejected() {
    assert!(matches!(
        ShingleStore::new(0),
        Err(ShingleError::InvalidArgument(_))
    ));

    let store = trigram_store();
    store.incorporate(LINEAR_TEXT, false);
    assert!(store.initialize(0).is_err());
    assert_eq!(store.count(), 13, "failed initialize must not reset");
    assert_eq!(store.ngram_length(), 3);
}

#[test]
fn test_lengths_beyond_named_range() {
    let store = ShingleStore::new(12).unwrap();
    store.incorporate(LINEAR_TEXT, false);
    assert_eq!(store.count(), 5);
}

#[test]
fn test_record_hash_is_identity_key() {
    let store = trigram_store();
    store.incorporate(LINEAR_TEXT, false);
    assert!(store.walk().iter().all(|r| r.hash == identity_key(&r.ngram)));
}

#[test]
fn test_default_store_is_trigram() {
    assert_eq!(ShingleStore::default().ngram_length(), 3);
}
