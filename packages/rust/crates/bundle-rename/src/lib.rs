#![allow(clippy::doc_markdown)]

//! bundle-rename - Batch role renaming for bundle trees
//!
//! Reads a CSV of `Original Role Name` -> `New Role Name`, and for each row:
//! locates `NAB_Bundle_<original>.xml` anywhere under the bundle root,
//! writes `NAB_Bundle_<new>.xml` beside it with the identity attributes
//! rewritten, archives a `disabled="true"` copy of the original, and
//! removes the original. Rows that cannot be renamed are listed in an
//! unresolved-roles report.
//!
//! # Layout
//!
//! ```text
//! bundle-rename/src/
//! ├── lib.rs         # Re-exports (this file)
//! ├── error.rs       # RenameError (fatal, run-level)
//! ├── mapping.rs     # CSV mapping reader
//! ├── types.rs       # ProcessingOutcome, BatchReport
//! ├── processor.rs   # One row: locate -> rewrite -> archive
//! ├── batch.rs       # All rows, report file
//! ├── controller.rs  # Idle/Running run guard
//! ├── settings.rs    # YAML settings layers
//! ├── session.rs     # Guarded entry point for front ends
//! ├── cli.rs         # clap definitions (binary)
//! └── main.rs        # Binary entry point
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use bundle_rename::{RenameSession, RenameSettings};
//!
//! let session = RenameSession::new(RenameSettings::default());
//! let report = session.run(Path::new("/bundles"), Path::new("renames.csv"))?;
//! println!("{} renamed, {} unresolved", report.renamed_count(), report.unresolved.len());
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

mod batch;
mod controller;
mod error;
mod mapping;
mod processor;
mod session;
mod settings;
mod types;

// ============================================================================
// Public Re-exports
// ============================================================================

pub use batch::BatchRunner;
pub use controller::{RunController, RunGuard, RunState};
pub use error::RenameError;
pub use mapping::{
    MappingEntry, MappingTable, NEW_ROLE_COLUMN, ORIGINAL_ROLE_COLUMN, parse_mapping, read_mapping,
};
pub use processor::RoleProcessor;
pub use session::RenameSession;
pub use settings::{
    CONFIG_ENV_VAR, DEFAULT_ARCHIVE_DIR_NAME, DEFAULT_MAX_FILE_SIZE, DEFAULT_REPORT_FILE_NAME,
    RenameSettings, load_settings, load_settings_file,
};
pub use types::{BatchReport, ProcessingOutcome};

// Naming is part of the public contract of the tool.
pub use bundle_edit::canonical_name;
