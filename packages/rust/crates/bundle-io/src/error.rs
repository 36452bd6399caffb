//! Error types for artifact I/O.

use std::path::PathBuf;

use thiserror::Error;

/// Failure modes of the artifact read/write path.
#[derive(Error, Debug)]
pub enum IoError {
    /// Path does not exist or cannot be stat'ed.
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Artifact exceeds the configured size limit.
    #[error("file too large: {size} bytes (limit: {limit})")]
    TooLarge {
        /// Actual size in bytes.
        size: u64,
        /// Configured limit in bytes.
        limit: u64,
    },

    /// NULL bytes near the start of the file.
    #[error("binary content detected")]
    BinaryFile,

    /// Content is not well-formed UTF-8.
    #[error("invalid UTF-8 at byte {offset}")]
    Encoding {
        /// Offset of the first byte that is not part of a valid sequence.
        offset: usize,
    },

    /// Underlying std::io failure.
    #[error("io error: {0}")]
    System(#[from] std::io::Error),
}
