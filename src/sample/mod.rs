//! Popularity-filtered item sampling.
//!
//! The evaluation loop measures error on a random sample of items. Items with
//! only a handful of raters produce mostly degenerate similarities, so the
//! sampler restricts the draw to items whose rater count strictly exceeds a
//! popularity threshold, then draws **with replacement** from that pool. An
//! item can therefore be evaluated more than once per run, and each occurrence
//! consumes its own slot of the aggregate divisor.

use crate::error::{RecomendarError, Result};
use crate::ratings::RatingStore;

/// Draws item ids to evaluate, biased to nothing but popularity.
///
/// # Example
///
/// ```rust
/// use recomendar::ratings::RatingStore;
/// use recomendar::sample::PopularitySampler;
///
/// let mut store = RatingStore::new();
/// for u in 0..5 {
///     store.insert(format!("u{u}"), "popular", 4.0);
/// }
/// store.insert("u0", "obscure", 2.0);
///
/// let sampler = PopularitySampler::new(2).with_random_state(42);
/// let sample = sampler.sample(&store, 3).expect("pool is non-empty");
///
/// assert_eq!(sample.len(), 3);
/// assert!(sample.iter().all(|id| id == "popular"));
/// ```
#[derive(Debug, Clone)]
pub struct PopularitySampler {
    min_raters: usize,
    random_state: Option<u64>,
}

impl PopularitySampler {
    /// Create a sampler whose pool is items with **more than** `min_raters`
    /// raters.
    ///
    /// The comparison is strict: an item with exactly `min_raters` raters is
    /// excluded.
    #[must_use]
    pub fn new(min_raters: usize) -> Self {
        Self {
            min_raters,
            random_state: None,
        }
    }

    /// Set random state for reproducible draws.
    #[must_use]
    pub fn with_random_state(mut self, random_state: u64) -> Self {
        self.random_state = Some(random_state);
        self
    }

    /// The candidate pool: item ids whose rater count strictly exceeds the
    /// threshold, most-rated first. Ties keep item-id order.
    #[must_use]
    pub fn candidates(&self, store: &RatingStore) -> Vec<String> {
        let mut pool: Vec<(&str, usize)> = store
            .items()
            .filter(|(_, ratings)| ratings.len() > self.min_raters)
            .map(|(id, ratings)| (id, ratings.len()))
            .collect();
        // Stable sort; the store already iterates in id order.
        pool.sort_by(|a, b| b.1.cmp(&a.1));
        pool.into_iter().map(|(id, _)| id.to_string()).collect()
    }

    /// Draw `n_items` ids from the candidate pool, with replacement.
    ///
    /// # Errors
    ///
    /// Returns an error when `n_items` is zero or when no item clears the
    /// popularity threshold. An empty draw has no meaningful evaluation, so
    /// both are reported instead of returning an empty list.
    pub fn sample(&self, store: &RatingStore, n_items: usize) -> Result<Vec<String>> {
        use rand::Rng;
        use rand::SeedableRng;

        if n_items == 0 {
            return Err(RecomendarError::empty_input("sample of zero items requested"));
        }

        let candidates = self.candidates(store);
        if candidates.is_empty() {
            return Err(RecomendarError::empty_input(format!(
                "no item has more than {} raters",
                self.min_raters
            )));
        }

        let mut sample = Vec::with_capacity(n_items);
        if let Some(seed) = self.random_state {
            let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
            for _ in 0..n_items {
                let idx = rng.gen_range(0..candidates.len());
                sample.push(candidates[idx].clone());
            }
        } else {
            let mut rng = rand::thread_rng();
            for _ in 0..n_items {
                let idx = rng.gen_range(0..candidates.len());
                sample.push(candidates[idx].clone());
            }
        }

        Ok(sample)
    }
}

#[cfg(test)]
#[path = "sample_tests.rs"]
mod tests;
