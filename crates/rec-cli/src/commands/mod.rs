//! Subcommand implementations

pub(crate) mod eval;
pub(crate) mod stats;

use crate::error::CliError;
use std::path::Path;

/// Reject missing paths and directories up front with precise errors.
pub(crate) fn validate_path(path: &Path) -> Result<(), CliError> {
    if !path.exists() {
        return Err(CliError::FileNotFound(path.to_path_buf()));
    }
    if !path.is_file() {
        return Err(CliError::NotAFile(path.to_path_buf()));
    }
    Ok(())
}
