//! Error types for Recomendar operations.
//!
//! Provides rich error context for library consumers.

use std::fmt;

/// Main error type for Recomendar operations.
///
/// Structural failures (a withheld item that is not in the store, a ratings
/// file without the expected columns) surface here. Numerical degeneracies
/// never do: an empty co-rater intersection or a zero-variance correlation is
/// modeled as an absent table entry, and a user with no usable signal is
/// modeled as an absent prediction.
///
/// # Examples
///
/// ```
/// use recomendar::error::RecomendarError;
///
/// let err = RecomendarError::ItemNotFound {
///     item_id: "B00813GRG4".to_string(),
/// };
/// assert!(err.to_string().contains("not in the rating store"));
/// ```
#[derive(Debug)]
pub enum RecomendarError {
    /// Withhold was requested for an item id absent from the store.
    ItemNotFound {
        /// The item id that was requested
        item_id: String,
    },

    /// A configured CSV column is not present in the header row.
    MissingColumn {
        /// Column name that was requested
        column: String,
        /// Column names actually present in the file
        available: Vec<String>,
    },

    /// A CSV row could not be parsed into a rating.
    CsvParse {
        /// 1-based line number of the offending row
        line: usize,
        /// Parse failure description
        message: String,
    },

    /// I/O error (file not found, permission denied, etc.).
    Io(std::io::Error),

    /// Generic error with string message.
    Other(String),
}

impl fmt::Display for RecomendarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecomendarError::ItemNotFound { item_id } => {
                write!(f, "Item '{item_id}' is not in the rating store")
            }
            RecomendarError::MissingColumn { column, available } => {
                write!(
                    f,
                    "Missing column '{column}' (available: {})",
                    available.join(", ")
                )
            }
            RecomendarError::CsvParse { line, message } => {
                write!(f, "CSV parse error at line {line}: {message}")
            }
            RecomendarError::Io(e) => write!(f, "I/O error: {e}"),
            RecomendarError::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for RecomendarError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RecomendarError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for RecomendarError {
    fn from(err: std::io::Error) -> Self {
        RecomendarError::Io(err)
    }
}

impl From<&str> for RecomendarError {
    fn from(msg: &str) -> Self {
        RecomendarError::Other(msg.to_string())
    }
}

impl From<String> for RecomendarError {
    fn from(msg: String) -> Self {
        RecomendarError::Other(msg)
    }
}

impl RecomendarError {
    /// Create an empty input error
    #[must_use]
    pub fn empty_input(context: impl Into<String>) -> Self {
        Self::Other(format!("empty input: {}", context.into()))
    }
}

#[allow(clippy::cmp_owned)]
impl PartialEq<&str> for RecomendarError {
    fn eq(&self, other: &&str) -> bool {
        self.to_string() == *other
    }
}

#[allow(clippy::cmp_owned)]
impl PartialEq<RecomendarError> for &str {
    fn eq(&self, other: &RecomendarError) -> bool {
        *self == other.to_string()
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, RecomendarError>;
