// =========================================================================
// FALSIFY-SIM: co-rater Pearson similarity invariants
//
// Every entry that makes it into a SimilarityTable must be finite and inside
// [-1, 1]; degenerate candidates must be absent, never zeroed or clamped.
// =========================================================================

use super::*;
use crate::ratings::RatingStore;

/// FALSIFY-SIM-001: all emitted similarities lie in [-1, 1]
#[test]
fn falsify_sim_001_bounds() {
    let mut store = RatingStore::new();
    store.insert("u1", "A", 5.0);
    store.insert("u2", "A", 1.0);
    store.insert("u3", "A", 3.0);
    store.insert("u1", "B", 6.0);
    store.insert("u2", "B", 5.0);
    store.insert("u9", "B", 1.0);
    store.insert("u2", "C", 2.0);
    store.insert("u3", "C", 5.0);

    let held_out = store.withhold("A").unwrap();
    let sims = pearson_similarities(&store, &held_out);
    for (item, sim) in &sims {
        assert!(
            (-1.0..=1.0).contains(sim),
            "FALSIFIED SIM-001: sim({item})={sim} outside [-1, 1]"
        );
    }
}

/// FALSIFY-SIM-002: every emitted similarity is finite
#[test]
fn falsify_sim_002_finite() {
    let mut store = RatingStore::new();
    store.insert("u1", "A", 4.0);
    store.insert("u2", "A", 4.0);
    // Constant withheld vector: every deviation on the held-out side is 0,
    // so each candidate resolves to 0/0.
    store.insert("u1", "B", 5.0);
    store.insert("u2", "B", 1.0);

    let held_out = store.withhold("A").unwrap();
    let sims = pearson_similarities(&store, &held_out);
    assert!(
        sims.is_empty(),
        "FALSIFIED SIM-002: degenerate quotient emitted as {sims:?}"
    );
}

/// FALSIFY-SIM-003: identical rating patterns correlate at exactly +1
#[test]
fn falsify_sim_003_identical_patterns() {
    let mut store = RatingStore::new();
    store.insert("u1", "A", 5.0);
    store.insert("u2", "A", 3.0);
    store.insert("u3", "A", 1.0);
    store.insert("u1", "B", 5.0);
    store.insert("u2", "B", 3.0);
    store.insert("u3", "B", 1.0);

    let held_out = store.withhold("A").unwrap();
    let sims = pearson_similarities(&store, &held_out);
    let sim = sims["B"];
    assert!(
        (sim - 1.0).abs() < 1e-6,
        "FALSIFIED SIM-003: identical patterns gave sim={sim}, expected 1.0"
    );
}

/// FALSIFY-SIM-004: no co-rater means no entry
#[test]
fn falsify_sim_004_disjoint_raters_absent() {
    let mut store = RatingStore::new();
    store.insert("u1", "A", 5.0);
    store.insert("u2", "A", 3.0);
    store.insert("u7", "B", 4.0);
    store.insert("u8", "B", 2.0);

    let held_out = store.withhold("A").unwrap();
    let sims = pearson_similarities(&store, &held_out);
    assert!(
        !sims.contains_key("B"),
        "FALSIFIED SIM-004: disjoint item got an entry ({:?})",
        sims.get("B")
    );
}

/// FALSIFY-SIM-005: the table is stable across repeated computation
#[test]
fn falsify_sim_005_deterministic() {
    let mut store = RatingStore::new();
    store.insert("u1", "A", 5.0);
    store.insert("u2", "A", 2.0);
    store.insert("u1", "B", 4.0);
    store.insert("u2", "B", 1.0);
    store.insert("u2", "C", 3.0);
    store.insert("u3", "C", 5.0);

    let held_out = store.withhold("A").unwrap();
    let first = pearson_similarities(&store, &held_out);
    let second = pearson_similarities(&store, &held_out);
    assert_eq!(
        first, second,
        "FALSIFIED SIM-005: same inputs produced different tables"
    );
}

mod sim_proptest_falsify {
    use super::*;
    use proptest::prelude::*;

    fn synthetic_store(n_items: usize, n_users: usize, seed: u32) -> RatingStore {
        let mut store = RatingStore::new();
        for i in 0..n_items {
            for u in 0..n_users {
                // Deterministic sparse fill; user 0 anchors every item so the
                // store is never empty.
                let phase = (i * 31 + u * 17 + seed as usize) as f32;
                if u == 0 || (phase * 0.61).sin() > -0.2 {
                    let score = ((phase * 0.37).sin() * 2.0 + 3.0).round();
                    store.insert(format!("u{u}"), format!("item{i:02}"), score);
                }
            }
        }
        store
    }

    /// FALSIFY-SIM-001-prop: bounds hold over generated sparse stores
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(30))]

        #[test]
        fn falsify_sim_001_prop_bounds(
            n_items in 2..=8usize,
            n_users in 2..=8usize,
            seed in 0..200u32,
        ) {
            let mut store = synthetic_store(n_items, n_users, seed);
            let target = store.item_ids().next().unwrap().to_string();
            let held_out = store.withhold(&target).unwrap();
            let sims = pearson_similarities(&store, &held_out);
            for (item, sim) in &sims {
                prop_assert!(
                    sim.is_finite() && (-1.0 - 1e-5..=1.0 + 1e-5).contains(sim),
                    "FALSIFIED SIM-001-prop: sim({})={} out of bounds",
                    item,
                    sim
                );
            }
        }
    }
}
