#![allow(missing_docs)]

use std::num::NonZeroUsize;

use proptest::prelude::*;
use wordtally::{
    FrequencyTable,
    ReducerOptions,
    TaskId,
    WordtallyError,
    count_segment,
    merge_tables,
    partition,
    reduce,
};

const VOCAB: &[&str] = &["a", "b", "c", "d", "e", "the", "of", "and"];

fn token_strategy(max_len: usize) -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(
        prop::sample::select(VOCAB).prop_map(String::from),
        0..max_len,
    )
}

/// Per-segment tables for a random token sequence, paired with a random
/// permutation of the same tables.
fn shuffled_partials_strategy() -> impl Strategy<
    Value = (
        Vec<FrequencyTable<String, u64>>,
        Vec<FrequencyTable<String, u64>>,
    ),
> {
    (token_strategy(200), 1usize..12).prop_flat_map(|(tokens, k)| {
        let ranges = partition(tokens.len(), k).unwrap();
        let partials: Vec<FrequencyTable<String, u64>> = ranges
            .iter()
            .enumerate()
            .map(|(idx, &range)| count_segment(TaskId(idx), &tokens, range).unwrap())
            .collect();

        (Just(partials.clone()), Just(partials).prop_shuffle())
    })
}

fn direct_count(tokens: &[String]) -> FrequencyTable<String, u64> {
    let mut table = FrequencyTable::new();
    for token in tokens {
        table.increment(token).unwrap();
    }
    table
}

proptest! {
    #[test]
    fn reduce_matches_direct_count(tokens in token_strategy(400), k in 1usize..40) {
        let ranges = partition(tokens.len(), k).unwrap();
        let table: FrequencyTable<String, u64> = reduce(&tokens, &ranges).unwrap();

        prop_assert_eq!(table.total(), Some(tokens.len() as u64));
        prop_assert_eq!(table, direct_count(&tokens));
    }

    #[test]
    fn merge_order_does_not_matter(pair in shuffled_partials_strategy()) {
        let (partials, shuffled) = pair;
        prop_assert_eq!(merge_tables(partials).unwrap(), merge_tables(shuffled).unwrap());
    }

    #[test]
    fn sequential_and_parallel_agree(tokens in token_strategy(300), k in 1usize..20) {
        let ranges = partition(tokens.len(), k).unwrap();

        let parallel: FrequencyTable<String, u64> = ReducerOptions::default()
            .with_max_pool(NonZeroUsize::new(4).unwrap())
            .init()
            .reduce(&tokens, &ranges)
            .unwrap();
        let sequential: FrequencyTable<String, u64> = ReducerOptions::default()
            .with_parallel(false)
            .init()
            .reduce(&tokens, &ranges)
            .unwrap();

        prop_assert_eq!(parallel, sequential);
    }
}

#[test]
fn scenario_even_split() {
    let tokens: Vec<String> = ["a", "b", "a", "c", "b", "a"].map(String::from).to_vec();
    let ranges = partition(tokens.len(), 3).unwrap();
    assert_eq!(
        ranges
            .iter()
            .map(|r| r.inclusive_bounds().unwrap())
            .collect::<Vec<_>>(),
        vec![(0, 1), (2, 3), (4, 5)]
    );

    let table: FrequencyTable<String, u32> = reduce(&tokens, &ranges).unwrap();
    assert_eq!(
        table.to_sorted_vec(),
        vec![
            ("a".to_string(), 3),
            ("b".to_string(), 2),
            ("c".to_string(), 1),
        ]
    );
}

#[test]
fn scenario_uneven_split() {
    let tokens: Vec<String> = ["a", "a", "b", "c", "a"].map(String::from).to_vec();
    let ranges = partition(tokens.len(), 2).unwrap();
    assert_eq!(ranges[0].inclusive_bounds(), Some((0, 2)));
    assert_eq!(ranges[1].inclusive_bounds(), Some((3, 4)));

    let table: FrequencyTable<String, u32> = reduce(&tokens, &ranges).unwrap();
    assert_eq!(table.get("a"), Some(3));
    assert_eq!(table.get("b"), Some(1));
    assert_eq!(table.get("c"), Some(1));
}

#[test]
fn scenario_count_overflow() {
    let tokens = vec!["a".to_string(); 400];
    let ranges = partition(tokens.len(), 2).unwrap();

    let err = reduce::<String, u8>(&tokens, &ranges).unwrap_err();
    assert_eq!(err, WordtallyError::count_overflow("a"));

    let table: FrequencyTable<String, u32> = reduce(&tokens, &ranges).unwrap();
    assert_eq!(table.get("a"), Some(400));
}

#[test]
fn scenario_no_tokens() {
    let tokens: Vec<String> = Vec::new();
    let ranges = partition(0, 5).unwrap();
    assert_eq!(ranges.len(), 5);
    assert!(ranges.iter().all(|r| r.is_empty()));

    let table: FrequencyTable<String, u32> = reduce(&tokens, &ranges).unwrap();
    assert!(table.is_empty());
}
