//! Role processor: one mapping row through locate -> rewrite -> archive.
//!
//! Steps, in order:
//!
//! 1. derive old/new canonical file names
//! 2. locate the original under the bundle root (archive directory excluded)
//! 3. read it
//! 4. write the renamed copy next to it
//! 5. write a disabled copy of the *unmodified* original into the archive
//! 6. remove the original (best effort)
//!
//! A failure in 3-5 ends the row as `Error`; earlier writes are kept.

use std::path::{Path, PathBuf};

use bundle_edit::{
    canonical_name, escape, generate_unified_diff, mark_disabled, rewrite_identity,
};
use bundle_io::{IoError, locate_excluding, read_text_safe, write_text};
use thiserror::Error;

use crate::mapping::MappingEntry;
use crate::settings::DEFAULT_MAX_FILE_SIZE;
use crate::types::ProcessingOutcome;

#[derive(Error, Debug)]
enum RowError {
    #[error("failed to read {}: {source}", .path.display())]
    Read { path: PathBuf, source: IoError },

    #[error("failed to write renamed artifact {}: {source}", .path.display())]
    WriteRenamed { path: PathBuf, source: IoError },

    #[error("failed to write archived artifact {}: {source}", .path.display())]
    WriteArchive { path: PathBuf, source: IoError },
}

/// Applies mapping rows to a bundle tree.
#[derive(Debug, Clone)]
pub struct RoleProcessor {
    bundle_root: PathBuf,
    archive_dir: PathBuf,
    max_file_size: u64,
    dry_run: bool,
}

impl RoleProcessor {
    /// Processor that searches `bundle_root` and archives into `archive_dir`.
    pub fn new(bundle_root: impl Into<PathBuf>, archive_dir: impl Into<PathBuf>) -> Self {
        Self {
            bundle_root: bundle_root.into(),
            archive_dir: archive_dir.into(),
            max_file_size: DEFAULT_MAX_FILE_SIZE,
            dry_run: false,
        }
    }

    /// Refuse artifacts larger than `bytes`.
    #[must_use]
    pub fn with_max_file_size(mut self, bytes: u64) -> Self {
        self.max_file_size = bytes;
        self
    }

    /// Compute outcomes without touching the filesystem.
    #[must_use]
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Root searched for original artifacts.
    #[must_use]
    pub fn bundle_root(&self) -> &Path {
        &self.bundle_root
    }

    /// Directory receiving disabled copies.
    #[must_use]
    pub fn archive_dir(&self) -> &Path {
        &self.archive_dir
    }

    /// Whether this processor only previews.
    #[must_use]
    pub fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    /// Process one mapping row. Never fails; failures become outcomes.
    #[must_use]
    pub fn process(&self, entry: &MappingEntry) -> ProcessingOutcome {
        let old_name = canonical_name(&entry.original_name);
        let new_name = canonical_name(&entry.new_name);

        tracing::info!(role = %entry.original_name, file = %old_name, "searching for role artifact");
        let Some(old_path) = locate_excluding(&self.bundle_root, &old_name, &[&self.archive_dir])
        else {
            tracing::warn!(role = %entry.original_name, file = %old_name, "role artifact not found");
            return ProcessingOutcome::NotFound {
                role: entry.original_name.clone(),
                file_name: old_name,
            };
        };
        tracing::info!(role = %entry.original_name, path = %old_path.display(), "found role artifact");

        match self.rename(entry, &old_path, &old_name, &new_name) {
            Ok(outcome) => outcome,
            Err(error) => {
                tracing::error!(
                    role = %entry.original_name,
                    file = %old_name,
                    error = %error,
                    "failed to process role artifact"
                );
                ProcessingOutcome::Error {
                    role: entry.original_name.clone(),
                    file_name: old_name,
                    error: error.to_string(),
                }
            }
        }
    }

    fn rename(
        &self,
        entry: &MappingEntry,
        old_path: &Path,
        old_name: &str,
        new_name: &str,
    ) -> Result<ProcessingOutcome, RowError> {
        let content =
            read_text_safe(old_path, self.max_file_size).map_err(|source| RowError::Read {
                path: old_path.to_path_buf(),
                source,
            })?;

        let renamed = rewrite_identity(&content, &escape(&entry.new_name));
        if !renamed.matched() {
            tracing::warn!(
                role = %entry.original_name,
                path = %old_path.display(),
                "no displayName/name pair found; renamed copy keeps original identity"
            );
        }
        let disabled = mark_disabled(&content);
        if !disabled.matched() {
            tracing::warn!(
                role = %entry.original_name,
                path = %old_path.display(),
                "no root element token found; archived copy is not marked disabled"
            );
        }

        let new_path = old_path.with_file_name(new_name);
        let archived_path = self.archive_dir.join(old_name);

        if self.dry_run {
            tracing::debug!(
                path = %new_path.display(),
                diff = %generate_unified_diff(&content, &renamed.modified, old_name, new_name),
                "preview of renamed artifact"
            );
            tracing::info!(
                role = %entry.original_name,
                new_path = %new_path.display(),
                archived_path = %archived_path.display(),
                "dry run: role would be renamed"
            );
            return Ok(ProcessingOutcome::Renamed {
                role: entry.original_name.clone(),
                old_path: old_path.to_path_buf(),
                new_path,
                archived_path,
            });
        }

        write_text(&new_path, &renamed.modified).map_err(|source| RowError::WriteRenamed {
            path: new_path.clone(),
            source,
        })?;
        tracing::info!(path = %new_path.display(), "new file created");

        write_text(&archived_path, &disabled.modified).map_err(|source| {
            RowError::WriteArchive {
                path: archived_path.clone(),
                source,
            }
        })?;
        tracing::info!(path = %archived_path.display(), "original disabled and archived");

        if new_path == old_path {
            tracing::info!(
                path = %old_path.display(),
                "renamed artifact replaced the original in place; nothing to remove"
            );
        } else if let Err(error) = std::fs::remove_file(old_path) {
            tracing::warn!(
                path = %old_path.display(),
                error = %error,
                "failed to remove original artifact"
            );
        } else {
            tracing::info!(path = %old_path.display(), "original file removed");
        }

        Ok(ProcessingOutcome::Renamed {
            role: entry.original_name.clone(),
            old_path: old_path.to_path_buf(),
            new_path,
            archived_path,
        })
    }
}
