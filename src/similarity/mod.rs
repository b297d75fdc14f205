//! Item-item Pearson similarity over co-raters.
//!
//! Given one withheld item vector and the reduced store, compute a Pearson
//! correlation between the withheld item and every remaining item, restricted
//! to the users both items share.
//!
//! # Mathematical Background
//!
//! For the withheld vector `t` and a candidate vector `o`, with `U` the set
//! of users rating both:
//!
//! ```text
//! sim(t, o) = Σ_{u∈U} (t_u - t̄)(o_u - ō)
//!             ─────────────────────────────────────────────
//!             sqrt(Σ_{u∈U} (t_u - t̄)²) sqrt(Σ_{u∈U} (o_u - ō)²)
//! ```
//!
//! The means `t̄` and `ō` are each vector's mean over its own FULL rater set,
//! not over the co-rater intersection `U`. When rater sets barely overlap this
//! biases the value relative to a textbook intersection-mean correlation, but
//! Cauchy-Schwarz still pins the quotient inside [-1, 1]. No clamping is
//! applied; the value is used as computed.
//!
//! Items with no co-rater, and items whose quotient is not finite (a zero
//! denominator yields NaN), are left out of the table entirely rather than
//! recorded as zero. Absence and "similarity 0.0" mean different things to
//! the prediction stage.
//!
//! # Examples
//!
//! ```
//! use recomendar::ratings::RatingStore;
//! use recomendar::similarity::pearson_similarities;
//!
//! let mut store = RatingStore::new();
//! store.insert("u1", "A", 5.0);
//! store.insert("u2", "A", 3.0);
//! store.insert("u1", "B", 4.0);
//! store.insert("u2", "B", 2.0);
//! store.insert("u3", "C", 1.0);
//!
//! let held_out = store.withhold("A").expect("A is present");
//! let sims = pearson_similarities(&store, &held_out);
//!
//! assert!((sims["B"] - 1.0).abs() < 1e-6);
//! assert!(!sims.contains_key("C")); // no shared rater
//! ```

use crate::ratings::{RatingStore, RatingVector};
use std::collections::BTreeMap;

/// Item id → similarity against the withheld item.
///
/// Ordered by item id, so downstream consumers iterate deterministically.
pub type SimilarityTable = BTreeMap<String, f32>;

/// Mean score of a rating vector over all of its raters.
///
/// Returns 0.0 for an empty vector.
#[must_use]
pub fn vector_mean(ratings: &RatingVector) -> f32 {
    if ratings.is_empty() {
        return 0.0;
    }
    let sum: f32 = ratings.values().sum();
    sum / ratings.len() as f32
}

/// Computes co-rater Pearson similarities between a withheld item vector and
/// every item currently in the store.
///
/// The withheld item must already be out of the store; [`RatingStore::withhold`]
/// guarantees that. An empty withheld vector produces an empty table, since no
/// item can share a rater with it.
///
/// Each candidate item either gets exactly one finite entry or no entry at
/// all. See the module docs for when entries are omitted.
#[must_use]
pub fn pearson_similarities(store: &RatingStore, held_out: &RatingVector) -> SimilarityTable {
    let mut table = SimilarityTable::new();
    if held_out.is_empty() {
        return table;
    }

    let mean_test = vector_mean(held_out);

    for (item_id, ratings) in store.items() {
        let mean_other = vector_mean(ratings);

        let mut sum1 = 0.0_f32;
        let mut sum2 = 0.0_f32;
        let mut sum3 = 0.0_f32;
        let mut co_rated = false;

        for (user_id, &test_score) in held_out {
            if let Some(&other_score) = ratings.get(user_id) {
                co_rated = true;
                let test_dev = test_score - mean_test;
                let other_dev = other_score - mean_other;
                sum1 += test_dev * other_dev;
                sum2 += test_dev * test_dev;
                sum3 += other_dev * other_dev;
            }
        }

        if !co_rated {
            continue;
        }

        let similarity = sum1 / (sum2.sqrt() * sum3.sqrt());
        if similarity.is_finite() {
            table.insert(item_id.to_string(), similarity);
        }
    }

    table
}

#[cfg(test)]
#[path = "similarity_tests.rs"]
mod tests;

#[cfg(test)]
#[path = "tests_similarity_contract.rs"]
mod tests_similarity_contract;
