//! Similarity-weighted score prediction.
//!
//! Predicts one user's score for the withheld item from the scores that user
//! gave to items still in the store, weighted by each item's entry in the
//! [`SimilarityTable`](crate::similarity::SimilarityTable).
//!
//! The accumulation walks every item the user rated, in store order. The
//! working `(score, similarity)` pair is updated only when the current item
//! has a table entry; an item the user rated that lacks an entry re-applies
//! the previous pair instead of contributing nothing. Do not "fix" this to
//! skip such items: downstream numbers are only comparable against the
//! historical accumulation if the stale pair carries forward (DESIGN.md,
//! Open Questions). Items the user never rated touch nothing.
//!
//! Absolute value is applied to the final ratio only. Negative similarities
//! keep their sign inside the sums, so opposing contributions can cancel, and
//! an exact cancellation reads as "no usable signal".

use crate::ratings::RatingStore;
use crate::similarity::SimilarityTable;

/// Predicts the target user's score for the withheld item.
///
/// Returns `None` when the user has no usable signal: either no rated item
/// carries weight, or the weighted contributions cancel exactly. Callers skip
/// such users rather than treating the absence as an error.
///
/// # Examples
///
/// ```
/// use recomendar::ratings::RatingStore;
/// use recomendar::similarity::SimilarityTable;
/// use recomendar::predict::predict_score;
///
/// let mut store = RatingStore::new();
/// store.insert("u1", "B", 4.0);
/// store.insert("u2", "B", 2.0);
/// store.insert("u3", "C", 1.0);
///
/// let mut sims = SimilarityTable::new();
/// sims.insert("B".to_string(), 1.0);
///
/// assert_eq!(predict_score(&store, "u1", &sims), Some(4.0));
/// assert_eq!(predict_score(&store, "u3", &sims), None); // C has no entry
/// ```
#[must_use]
pub fn predict_score(
    store: &RatingStore,
    user_id: &str,
    similarities: &SimilarityTable,
) -> Option<f32> {
    let mut weighted_sum = 0.0_f32;
    let mut weight_magnitude = 0.0_f32;
    let mut score = 0.0_f32;
    let mut sim = 0.0_f32;

    for (item_id, ratings) in store.items() {
        if let Some(&user_score) = ratings.get(user_id) {
            if let Some(&entry) = similarities.get(item_id) {
                sim = entry;
                score = user_score;
            }
            weighted_sum += score * sim;
            weight_magnitude += sim.abs();
        }
    }

    if weighted_sum != 0.0 && weight_magnitude != 0.0 {
        Some((weighted_sum / weight_magnitude).abs())
    } else {
        None
    }
}

#[cfg(test)]
#[path = "predict_tests.rs"]
mod tests;
