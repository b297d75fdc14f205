//! Sparse rating storage.
//!
//! [`RatingStore`] is the single long-lived structure of an evaluation run: a
//! sparse item → (user → score) mapping built once from cleaned rating rows.
//! The evaluation loop mutates it only through [`RatingStore::withhold`] and
//! [`RatingStore::restore`], which move one complete item vector out and back
//! in; nothing ever partially edits another item's vector.
//!
//! Both map levels are ordered by id, so iteration order (and with it every
//! floating-point accumulation downstream) is identical from run to run.
//!
//! # Examples
//!
//! ```
//! use recomendar::ratings::RatingStore;
//!
//! let mut store = RatingStore::new();
//! store.insert("u1", "A", 5.0);
//! store.insert("u2", "A", 3.0);
//! store.insert("u1", "B", 4.0);
//!
//! assert_eq!(store.n_items(), 2);
//! assert_eq!(store.n_ratings(), 3);
//!
//! let withheld = store.withhold("A").expect("A is present");
//! assert_eq!(withheld.len(), 2);
//! assert!(!store.contains_item("A"));
//!
//! store.restore("A", withheld);
//! assert_eq!(store.n_ratings(), 3);
//! ```

use crate::data::RatingRecord;
use crate::error::{RecomendarError, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// One item's ratings: user id → score.
pub type RatingVector = BTreeMap<String, f32>;

/// Sparse item → (user → score) rating store.
///
/// Each (item, user) pair holds at most one score; inserting the same pair
/// again overwrites (last write wins). The dataset is assumed to be tiny
/// relative to the full user × item grid, so no dense representation is ever
/// built.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RatingStore {
    items: BTreeMap<String, RatingVector>,
    n_ratings: usize,
}

impl RatingStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from cleaned rating rows.
    ///
    /// Duplicate (item, user) pairs keep the last score seen.
    #[must_use]
    pub fn from_records(records: impl IntoIterator<Item = RatingRecord>) -> Self {
        let mut store = Self::new();
        for record in records {
            store.insert(record.user_id, record.item_id, record.score);
        }
        store
    }

    /// Adds or overwrites one rating.
    pub fn insert(&mut self, user_id: impl Into<String>, item_id: impl Into<String>, score: f32) {
        let previous = self
            .items
            .entry(item_id.into())
            .or_default()
            .insert(user_id.into(), score);
        if previous.is_none() {
            self.n_ratings += 1;
        }
    }

    /// Removes and returns the full rating vector of one item.
    ///
    /// The caller owns the vector until it hands it back through
    /// [`RatingStore::restore`]; while it is out, [`RatingStore::items`] and
    /// every count exclude it.
    ///
    /// # Errors
    ///
    /// Returns [`RecomendarError::ItemNotFound`] if the item is absent. The
    /// evaluation sample is drawn from the store's own keys, so hitting this
    /// means the caller violated that contract; it is not caught internally.
    pub fn withhold(&mut self, item_id: &str) -> Result<RatingVector> {
        match self.items.remove(item_id) {
            Some(ratings) => {
                self.n_ratings -= ratings.len();
                Ok(ratings)
            }
            None => Err(RecomendarError::ItemNotFound {
                item_id: item_id.to_string(),
            }),
        }
    }

    /// Re-inserts a previously withheld rating vector unchanged.
    ///
    /// Must be called exactly once per successful withhold, after all
    /// similarity and prediction work against the reduced store is done. If
    /// the item somehow already exists its old vector is replaced.
    pub fn restore(&mut self, item_id: impl Into<String>, ratings: RatingVector) {
        let n = ratings.len();
        if let Some(old) = self.items.insert(item_id.into(), ratings) {
            self.n_ratings -= old.len();
        }
        self.n_ratings += n;
    }

    /// Read-only iteration over all currently present items, in id order.
    ///
    /// A withheld item does not appear.
    pub fn items(&self) -> impl Iterator<Item = (&str, &RatingVector)> {
        self.items.iter().map(|(id, ratings)| (id.as_str(), ratings))
    }

    /// Iterates over the present item ids, in order.
    pub fn item_ids(&self) -> impl Iterator<Item = &str> {
        self.items.keys().map(String::as_str)
    }

    /// Returns one item's rating vector, if present.
    #[must_use]
    pub fn item(&self, item_id: &str) -> Option<&RatingVector> {
        self.items.get(item_id)
    }

    /// Returns true if the item is currently present.
    #[must_use]
    pub fn contains_item(&self, item_id: &str) -> bool {
        self.items.contains_key(item_id)
    }

    /// Number of items currently present.
    #[must_use]
    pub fn n_items(&self) -> usize {
        self.items.len()
    }

    /// Number of ratings currently present.
    #[must_use]
    pub fn n_ratings(&self) -> usize {
        self.n_ratings
    }

    /// Number of distinct users across all present items.
    ///
    /// Computed on demand; the store keeps no user index.
    #[must_use]
    pub fn n_users(&self) -> usize {
        let mut users: BTreeSet<&str> = BTreeSet::new();
        for ratings in self.items.values() {
            users.extend(ratings.keys().map(String::as_str));
        }
        users.len()
    }

    /// Returns true if the store holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
#[path = "ratings_tests.rs"]
mod tests;
