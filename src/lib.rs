//! Recomendar: item-based collaborative filtering evaluation in pure Rust.
//!
//! Recomendar replays a ratings dataset against itself to measure how well
//! item-item Pearson similarity predicts withheld scores: each sampled item
//! is removed from a sparse [`ratings::RatingStore`], every one of its
//! ratings is re-predicted from the remaining items, and the misses are
//! aggregated into average RMSE and MAE.
//!
//! # Quick Start
//!
//! ```
//! use recomendar::prelude::*;
//!
//! // Two items rated in lockstep by u1 and u2, one unrelated item.
//! let mut store = RatingStore::new();
//! store.insert("u1", "A", 5.0);
//! store.insert("u2", "A", 3.0);
//! store.insert("u1", "B", 4.0);
//! store.insert("u2", "B", 2.0);
//! store.insert("u3", "C", 1.0);
//!
//! // Withhold A and re-predict its ratings from B alone.
//! let report = evaluate(&mut store, &["A".to_string()]).unwrap();
//!
//! assert_eq!(report.n_predictions(), 2);
//! assert!((report.rmse - 1.0).abs() < 1e-6);
//! assert!((report.mae - 1.0).abs() < 1e-6);
//! ```
//!
//! # Modules
//!
//! - [`ratings`]: Sparse item → (user → score) store with withhold/restore
//! - [`data`]: CSV loading into cleaned rating rows
//! - [`similarity`]: Co-rater Pearson similarity tables
//! - [`predict`]: Similarity-weighted score prediction
//! - [`sample`]: Popularity-filtered item sampling
//! - [`eval`]: Leave-one-item-out evaluation loop
//! - [`metrics`]: Regression error metrics (MSE, RMSE, MAE)

pub mod data;
pub mod error;
pub mod eval;
pub mod metrics;
pub mod predict;
pub mod prelude;
pub mod ratings;
pub mod sample;
pub mod similarity;

pub use error::{RecomendarError, Result};
pub use eval::{evaluate, EvaluationReport};
pub use ratings::{RatingStore, RatingVector};
