//! Per-row outcomes and the batch report.

use std::path::PathBuf;

use serde::Serialize;

/// Result of processing one mapping row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ProcessingOutcome {
    /// Renamed artifact written, original archived (and removed).
    Renamed {
        /// Original role name from the mapping.
        role: String,
        /// Where the original artifact was found.
        old_path: PathBuf,
        /// Renamed artifact, sibling of `old_path`.
        new_path: PathBuf,
        /// Disabled copy of the original.
        archived_path: PathBuf,
    },
    /// No artifact with the original canonical name under the bundle root.
    NotFound {
        /// Original role name from the mapping.
        role: String,
        /// Canonical file name that was searched for.
        file_name: String,
    },
    /// Read or write failure while processing a located artifact.
    Error {
        /// Original role name from the mapping.
        role: String,
        /// Canonical file name of the original artifact.
        file_name: String,
        /// Failure description.
        error: String,
    },
}

impl ProcessingOutcome {
    /// Original role name this outcome belongs to.
    #[must_use]
    pub fn role(&self) -> &str {
        match self {
            Self::Renamed { role, .. } | Self::NotFound { role, .. } | Self::Error { role, .. } => {
                role
            }
        }
    }

    /// `true` only for [`ProcessingOutcome::Renamed`].
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Renamed { .. })
    }
}

/// Summary of a finished batch.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchReport {
    /// One outcome per mapping row, in file order.
    pub outcomes: Vec<ProcessingOutcome>,
    /// Original names of rows that were not renamed, in file order.
    pub unresolved: Vec<String>,
    /// Written unresolved-roles report, if any.
    pub report_path: Option<PathBuf>,
    /// Whether the batch ran in preview mode.
    pub dry_run: bool,
}

impl BatchReport {
    /// Number of rows that were renamed.
    #[must_use]
    pub fn renamed_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_success()).count()
    }

    /// Whether every row was renamed.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.unresolved.is_empty()
    }
}
