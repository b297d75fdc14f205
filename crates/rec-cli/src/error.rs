//! Error types for rec-cli

use std::path::PathBuf;
use std::process::ExitCode;
use thiserror::Error;

/// Result type alias for CLI operations
pub(crate) type Result<T> = std::result::Result<T, CliError>;

/// CLI error types
#[derive(Error, Debug)]
pub(crate) enum CliError {
    /// File not found
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// Not a file (e.g., directory)
    #[error("Not a file: {0}")]
    NotAFile(PathBuf),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Recomendar error
    #[error("Recomendar error: {0}")]
    Recomendar(String),

    /// JSON serialization failed
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl CliError {
    /// Get exit code for this error
    pub(crate) fn exit_code(&self) -> ExitCode {
        match self {
            Self::FileNotFound(_) | Self::NotAFile(_) => ExitCode::from(3),
            Self::Serialization(_) => ExitCode::from(4),
            Self::Io(_) => ExitCode::from(7),
            Self::Recomendar(_) => ExitCode::from(1),
        }
    }
}

impl From<recomendar::RecomendarError> for CliError {
    fn from(e: recomendar::RecomendarError) -> Self {
        Self::Recomendar(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialization(e.to_string())
    }
}
