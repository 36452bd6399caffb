#![allow(clippy::doc_markdown)]

//! bundle-io - Safe file I/O for bundle role artifacts
//!
//! Reads and writes the XML-like role files that live inside a bundle tree,
//! and finds them by exact file name.
//!
//! # Features
//!
//! - **Safety**: Binary detection & size limits on every read
//! - **Lookup**: Recursive, first-match search by exact base name
//! - **Strict UTF-8**: Invalid sequences are refused, never replaced
//!
//! # Layout
//!
//! ```text
//! bundle-io/src/
//! ├── lib.rs      # Re-exports (this file)
//! ├── error.rs    # IoError enum
//! ├── detect.rs   # Binary detection & decoding
//! ├── locate.rs   # Recursive lookup (walkdir)
//! └── sync.rs     # Read / write API
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use bundle_io::{locate, read_text_safe};
//!
//! if let Some(path) = locate("/bundles", "NAB_Bundle_Admin.xml") {
//!     let content = read_text_safe(&path, 1024 * 1024)?;
//! }
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

mod detect;
mod error;
mod locate;
mod sync;

// ============================================================================
// Public Re-exports
// ============================================================================

pub use error::IoError;
pub use locate::{locate, locate_excluding};
pub use sync::{read_text_safe, write_text};

// Re-export detection utilities for advanced use
pub use detect::{decode_buffer, is_binary};
