#![allow(clippy::doc_markdown)]

//! bundle-edit - Text-level rewriting of bundle role artifacts
//!
//! Pure string transforms, no I/O. Documents are treated as text with a
//! known textual contract, not parsed as XML, so untouched bytes stay
//! byte-for-byte identical.
//!
//! # Features
//!
//! - **Canonical names**: role name -> `NAB_Bundle_<sanitized>.xml`
//! - **Escaping**: `& < > " '` to entity references, ampersand first
//! - **Identity rewrite**: `displayName="…" name="…"` pairs, every occurrence
//! - **Disable marker**: `disabled="true"` after every `<Bundle` token
//! - **Diff Preview**: unified diffs for dry runs
//!
//! # Layout
//!
//! ```text
//! bundle-edit/src/
//! ├── lib.rs      # Re-exports (this file)
//! ├── naming.rs   # Canonical file names
//! ├── escape.rs   # Attribute value escaping
//! ├── rewrite.rs  # Identity rewrite & disabled marker
//! ├── types.rs    # Rewrite result
//! └── diff.rs     # Diff generation utilities
//! ```
//!
//! # Example
//!
//! ```rust
//! use bundle_edit::{canonical_name, escape, rewrite_identity};
//!
//! assert_eq!(canonical_name("Ops Admin"), "NAB_Bundle_Ops_Admin.xml");
//!
//! let doc = r#"<Bundle displayName="Admin" name="Admin">"#;
//! let rewrite = rewrite_identity(doc, &escape("R&D"));
//! assert_eq!(rewrite.modified, r#"<Bundle displayName="R&amp;D" name="R&amp;D">"#);
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

mod diff;
mod escape;
mod naming;
mod rewrite;
mod types;

// ============================================================================
// Public Re-exports
// ============================================================================

pub use escape::escape;
pub use naming::{BUNDLE_FILE_EXTENSION, BUNDLE_FILE_PREFIX, canonical_name, sanitize};
pub use rewrite::{DISABLED_ATTRIBUTE, ROOT_ELEMENT_TOKEN, mark_disabled, rewrite_identity};
pub use types::Rewrite;

// Re-export diff utility for external use
pub use diff::generate_unified_diff;
