//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use recomendar::prelude::*;
//! ```

pub use crate::data::{CsvLoader, RatingRecord};
pub use crate::error::{RecomendarError, Result};
pub use crate::eval::{evaluate, EvaluationReport, ItemEvaluation, PredictionOutcome};
pub use crate::metrics::{mae, mse, rmse};
pub use crate::predict::predict_score;
pub use crate::ratings::{RatingStore, RatingVector};
pub use crate::sample::PopularitySampler;
pub use crate::similarity::{pearson_similarities, SimilarityTable};
