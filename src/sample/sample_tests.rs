//! Unit tests for popularity-filtered sampling.

use super::*;

/// Store with item "hot" rated by 5 users, "warm" by 3, "cold" by 1.
fn tiered_store() -> RatingStore {
    let mut store = RatingStore::new();
    for u in 0..5 {
        store.insert(format!("u{u}"), "hot", 4.0);
    }
    for u in 0..3 {
        store.insert(format!("u{u}"), "warm", 3.0);
    }
    store.insert("u0", "cold", 1.0);
    store
}

#[test]
fn candidates_filter_is_strict() {
    let sampler = PopularitySampler::new(3);
    // "warm" has exactly 3 raters and must not clear a threshold of 3.
    assert_eq!(sampler.candidates(&tiered_store()), vec!["hot".to_string()]);
}

#[test]
fn candidates_sorted_most_rated_first() {
    let sampler = PopularitySampler::new(0);
    let pool = sampler.candidates(&tiered_store());
    assert_eq!(
        pool,
        vec!["hot".to_string(), "warm".to_string(), "cold".to_string()]
    );
}

#[test]
fn candidate_ties_keep_item_id_order() {
    let mut store = RatingStore::new();
    store.insert("u1", "zebra", 1.0);
    store.insert("u2", "zebra", 2.0);
    store.insert("u1", "apple", 3.0);
    store.insert("u2", "apple", 4.0);
    let sampler = PopularitySampler::new(1);
    assert_eq!(
        sampler.candidates(&store),
        vec!["apple".to_string(), "zebra".to_string()]
    );
}

#[test]
fn sample_has_requested_length_and_valid_ids() {
    let store = tiered_store();
    let sampler = PopularitySampler::new(0).with_random_state(7);
    let sample = sampler.sample(&store, 12).unwrap();
    assert_eq!(sample.len(), 12);
    assert!(sample.iter().all(|id| store.contains_item(id)));
}

#[test]
fn sample_draws_with_replacement() {
    // Pool of one: every draw must repeat it.
    let store = tiered_store();
    let sampler = PopularitySampler::new(3).with_random_state(1);
    let sample = sampler.sample(&store, 4).unwrap();
    assert_eq!(sample, vec!["hot"; 4]);
}

#[test]
fn same_seed_reproduces_the_draw() {
    let store = tiered_store();
    let sampler = PopularitySampler::new(0).with_random_state(99);
    let first = sampler.sample(&store, 20).unwrap();
    let second = sampler.sample(&store, 20).unwrap();
    assert_eq!(first, second);
}

#[test]
fn different_seeds_are_allowed_to_differ() {
    // Not guaranteed for any single draw, but 20 draws over a pool of 3
    // colliding across two seeds would be astronomically unlucky.
    let store = tiered_store();
    let a = PopularitySampler::new(0)
        .with_random_state(1)
        .sample(&store, 20)
        .unwrap();
    let b = PopularitySampler::new(0)
        .with_random_state(2)
        .sample(&store, 20)
        .unwrap();
    assert_ne!(a, b);
}

#[test]
fn empty_pool_is_an_error() {
    let store = tiered_store();
    let sampler = PopularitySampler::new(10).with_random_state(1);
    let err = sampler.sample(&store, 3).unwrap_err();
    assert_eq!(err, "empty input: no item has more than 10 raters");
}

#[test]
fn zero_item_request_is_an_error() {
    let store = tiered_store();
    let sampler = PopularitySampler::new(0).with_random_state(1);
    let err = sampler.sample(&store, 0).unwrap_err();
    assert_eq!(err, "empty input: sample of zero items requested");
}

#[test]
fn unseeded_sampler_still_draws_from_the_pool() {
    let store = tiered_store();
    let sampler = PopularitySampler::new(2);
    let sample = sampler.sample(&store, 6).unwrap();
    assert_eq!(sample.len(), 6);
    assert!(sample.iter().all(|id| id == "hot" || id == "warm"));
}
