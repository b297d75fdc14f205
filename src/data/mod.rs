//! Ratings dataset loading.
//!
//! Provides:
//! - [`RatingRecord`]: one cleaned (user, item, score) row
//! - [`CsvLoader`]: CSV file loading with column selection
//!
//! The loader is the boundary between raw review files and the in-memory
//! [`RatingStore`](crate::ratings::RatingStore): it picks the three rating
//! columns out of a wider header (review text, timestamps and similar columns
//! are ignored) and hands back cleaned rows. Everything downstream consumes
//! those rows and never touches files.

use crate::error::{RecomendarError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One cleaned rating row: a user scored an item.
///
/// Scores are kept as plain `f32`; the loader applies no bounds beyond
/// "parses as a number" (review datasets typically use 1-5, but nothing here
/// depends on that).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingRecord {
    /// User identifier.
    pub user_id: String,
    /// Item identifier.
    pub item_id: String,
    /// Rating score.
    pub score: f32,
}

/// CSV rating loader with header-based column selection.
///
/// Defaults match the Amazon review export layout (`UserId`, `ProductId`,
/// `Score`); use the `with_*` methods for other datasets. Columns not named
/// here are ignored entirely.
///
/// # Examples
///
/// ```no_run
/// use recomendar::data::CsvLoader;
///
/// let records = CsvLoader::new()
///     .with_user_column("user")
///     .with_item_column("movie")
///     .with_score_column("rating")
///     .load("ratings.csv")
///     .expect("readable ratings file");
/// assert!(!records.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct CsvLoader {
    user_column: String,
    item_column: String,
    score_column: String,
}

impl Default for CsvLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl CsvLoader {
    /// Creates a loader with the default column names
    /// (`UserId`, `ProductId`, `Score`).
    #[must_use]
    pub fn new() -> Self {
        Self {
            user_column: "UserId".to_string(),
            item_column: "ProductId".to_string(),
            score_column: "Score".to_string(),
        }
    }

    /// Sets the user id column name.
    #[must_use]
    pub fn with_user_column(mut self, name: impl Into<String>) -> Self {
        self.user_column = name.into();
        self
    }

    /// Sets the item id column name.
    #[must_use]
    pub fn with_item_column(mut self, name: impl Into<String>) -> Self {
        self.item_column = name.into();
        self
    }

    /// Sets the score column name.
    #[must_use]
    pub fn with_score_column(mut self, name: impl Into<String>) -> Self {
        self.score_column = name.into();
        self
    }

    /// Loads cleaned rating rows from a CSV file.
    ///
    /// The file must have a header row containing the three configured
    /// columns. Rows with unparsable scores are errors, not silent skips:
    /// dropped ratings would bias any evaluation run on the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened, a configured column is
    /// missing from the header, a row cannot be parsed, or the file contains
    /// no rating rows at all.
    pub fn load<P: AsRef<Path>>(&self, path: P) -> Result<Vec<RatingRecord>> {
        let path = path.as_ref();

        let mut reader = csv::Reader::from_path(path).map_err(|e| csv_error(1, e))?;

        let headers = reader.headers().map_err(|e| csv_error(1, e))?.clone();
        let user_idx = column_index(&headers, &self.user_column)?;
        let item_idx = column_index(&headers, &self.item_column)?;
        let score_idx = column_index(&headers, &self.score_column)?;

        let mut records = Vec::new();
        let mut line = 2; // 1-based, after the header row

        for row in reader.records() {
            let row = row.map_err(|e| csv_error(line, e))?;

            let user_id = field(&row, user_idx, &self.user_column, line)?;
            let item_id = field(&row, item_idx, &self.item_column, line)?;
            let raw_score = field(&row, score_idx, &self.score_column, line)?;

            let score: f32 =
                raw_score
                    .trim()
                    .parse()
                    .map_err(|_| RecomendarError::CsvParse {
                        line,
                        message: format!("invalid score '{raw_score}'"),
                    })?;

            records.push(RatingRecord {
                user_id: user_id.to_string(),
                item_id: item_id.to_string(),
                score,
            });
            line += 1;
        }

        if records.is_empty() {
            return Err(RecomendarError::empty_input(format!(
                "no rating rows in {}",
                path.display()
            )));
        }

        Ok(records)
    }
}

fn column_index(headers: &csv::StringRecord, name: &str) -> Result<usize> {
    headers
        .iter()
        .position(|h| h == name)
        .ok_or_else(|| RecomendarError::MissingColumn {
            column: name.to_string(),
            available: headers.iter().map(str::to_string).collect(),
        })
}

fn field<'a>(
    row: &'a csv::StringRecord,
    idx: usize,
    column: &str,
    line: usize,
) -> Result<&'a str> {
    row.get(idx).ok_or_else(|| RecomendarError::CsvParse {
        line,
        message: format!("row is too short for column '{column}'"),
    })
}

fn csv_error(line: usize, e: csv::Error) -> RecomendarError {
    let message = e.to_string();
    match e.into_kind() {
        csv::ErrorKind::Io(io) => RecomendarError::Io(io),
        _ => RecomendarError::CsvParse { line, message },
    }
}

#[cfg(test)]
#[path = "data_tests.rs"]
mod tests;
