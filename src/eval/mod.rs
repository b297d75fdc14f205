//! Leave-one-item-out evaluation.
//!
//! Replays the dataset against itself: each sampled item is withheld from the
//! store, its ratings are re-predicted from what remains, and the error
//! between actual and predicted scores is aggregated across the sample.
//!
//! Per sampled item the loop runs a fixed four-step round:
//!
//! 1. withhold the item's full rating vector,
//! 2. compute co-rater similarities against the reduced store,
//! 3. predict the withheld score for each of the item's raters, keeping only
//!    the users that produce a prediction,
//! 4. restore the vector unconditionally, whether or not anything scored.
//!
//! Evaluation is strictly sequential. Every round mutates the one shared
//! store, and a round must see all other items fully present, so two sampled
//! items can never be in flight at once.
//!
//! The aggregate RMSE and MAE divide by the **nominal** sample size. A
//! sampled item whose users all fail to score contributes nothing to the
//! error sums but still consumes its slot of the divisor, and a duplicated
//! sample entry consumes one slot per occurrence.

use crate::error::{RecomendarError, Result};
use crate::metrics;
use crate::predict::predict_score;
use crate::ratings::RatingStore;
use crate::similarity::pearson_similarities;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One (actual, predicted) pair for a user of a withheld item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionOutcome {
    /// User whose withheld score was re-predicted.
    pub user_id: String,
    /// The score the user actually gave the withheld item.
    pub actual: f32,
    /// The score predicted from the reduced store.
    pub predicted: f32,
}

/// Result of one withhold/score/restore round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemEvaluation {
    /// The sampled item.
    pub item_id: String,
    /// How many users had rated the item (size of the withheld vector).
    pub n_withheld: usize,
    /// Pairs for the users that produced a prediction, in user-id order.
    pub outcomes: Vec<PredictionOutcome>,
    /// Root mean squared error over `outcomes`; `None` if nothing scored.
    pub rmse: Option<f32>,
    /// Mean absolute error over `outcomes`; `None` if nothing scored.
    pub mae: Option<f32>,
}

/// Aggregated result of a full evaluation pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationReport {
    /// One entry per sampled item, in sample order (duplicates included).
    pub items: Vec<ItemEvaluation>,
    /// The nominal sample size used as the aggregate divisor.
    pub sample_size: usize,
    /// Sum of per-item RMSE values divided by `sample_size`.
    pub rmse: f32,
    /// Sum of per-item MAE values divided by `sample_size`.
    pub mae: f32,
}

impl EvaluationReport {
    /// Number of sampled items that produced at least one prediction.
    #[must_use]
    pub fn n_scored_items(&self) -> usize {
        self.items.iter().filter(|item| item.rmse.is_some()).count()
    }

    /// Total (actual, predicted) pairs across the whole sample.
    #[must_use]
    pub fn n_predictions(&self) -> usize {
        self.items.iter().map(|item| item.outcomes.len()).sum()
    }
}

impl fmt::Display for EvaluationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} sampled items ({} scored, {} predictions): RMSE {:.4}, MAE {:.4}",
            self.sample_size,
            self.n_scored_items(),
            self.n_predictions(),
            self.rmse,
            self.mae
        )
    }
}

/// Runs a full leave-one-item-out pass over `sample`.
///
/// The store is mutated during the pass (withhold/restore per item) and is
/// back to its exact starting content on return, success or error. A failed
/// withhold leaves the store untouched, and every earlier round has already
/// restored its item by the time the next one starts.
///
/// # Errors
///
/// Returns [`RecomendarError::ItemNotFound`] if a sampled id is absent from
/// the store; the sample is supposed to come from the store's own keys, so
/// this aborts the run rather than being skipped. An empty sample is
/// rejected with an error since its divisor would be zero.
///
/// # Examples
///
/// ```
/// use recomendar::eval::evaluate;
/// use recomendar::ratings::RatingStore;
///
/// let mut store = RatingStore::new();
/// store.insert("u1", "A", 5.0);
/// store.insert("u2", "A", 3.0);
/// store.insert("u1", "B", 4.0);
/// store.insert("u2", "B", 2.0);
/// store.insert("u3", "C", 1.0);
///
/// let report = evaluate(&mut store, &["A".to_string()]).expect("A exists");
/// assert_eq!(report.sample_size, 1);
/// assert_eq!(report.n_predictions(), 2);
/// assert!((report.rmse - 1.0).abs() < 1e-6);
/// assert!((report.mae - 1.0).abs() < 1e-6);
/// ```
pub fn evaluate(store: &mut RatingStore, sample: &[String]) -> Result<EvaluationReport> {
    if sample.is_empty() {
        return Err(RecomendarError::empty_input("no sampled items to evaluate"));
    }

    let mut items = Vec::with_capacity(sample.len());
    let mut rmse_sum = 0.0_f32;
    let mut mae_sum = 0.0_f32;

    for item_id in sample {
        let withheld = store.withhold(item_id)?;
        let similarities = pearson_similarities(store, &withheld);

        let mut outcomes = Vec::new();
        for (user_id, &actual) in &withheld {
            if let Some(predicted) = predict_score(store, user_id, &similarities) {
                outcomes.push(PredictionOutcome {
                    user_id: user_id.clone(),
                    actual,
                    predicted,
                });
            }
        }

        let n_withheld = withheld.len();
        store.restore(item_id.clone(), withheld);

        let (item_rmse, item_mae) = if outcomes.is_empty() {
            (None, None)
        } else {
            let actuals: Vec<f32> = outcomes.iter().map(|o| o.actual).collect();
            let predictions: Vec<f32> = outcomes.iter().map(|o| o.predicted).collect();
            let item_rmse = metrics::rmse(&predictions, &actuals);
            let item_mae = metrics::mae(&predictions, &actuals);
            rmse_sum += item_rmse;
            mae_sum += item_mae;
            (Some(item_rmse), Some(item_mae))
        };

        items.push(ItemEvaluation {
            item_id: item_id.clone(),
            n_withheld,
            outcomes,
            rmse: item_rmse,
            mae: item_mae,
        });
    }

    let sample_size = sample.len();
    Ok(EvaluationReport {
        items,
        sample_size,
        rmse: rmse_sum / sample_size as f32,
        mae: mae_sum / sample_size as f32,
    })
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod tests;
