//! Run-level error types.
//!
//! Only conditions that abort a whole run live here. Per-row failures are
//! reported as [`crate::ProcessingOutcome`] values instead.

use std::path::PathBuf;

use thiserror::Error;

/// Fatal errors for a rename run.
#[derive(Error, Debug)]
pub enum RenameError {
    /// Mapping file does not exist.
    #[error("mapping file not found: {}", .0.display())]
    MappingNotFound(PathBuf),

    /// Mapping header lacks one or more required columns.
    #[error("mapping format error: missing required column(s): {}", .missing.join(", "))]
    MissingColumns {
        /// Required column names that were absent.
        missing: Vec<String>,
    },

    /// Mapping file could not be parsed as CSV.
    #[error("mapping parse error: {0}")]
    Csv(#[from] csv::Error),

    /// Archive directory could not be created.
    #[error("cannot create archive directory {}: {source}", .path.display())]
    ArchiveDir {
        /// Directory that was being created.
        path: PathBuf,
        /// Underlying failure.
        source: std::io::Error,
    },

    /// A run is already in flight on this controller.
    #[error("a rename run is already in progress")]
    AlreadyRunning,
}
