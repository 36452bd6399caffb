//! Batch runner: every mapping row, in order, with per-row isolation.

use std::path::{Path, PathBuf};

use bundle_io::write_text;

use crate::error::RenameError;
use crate::mapping::read_mapping;
use crate::processor::RoleProcessor;
use crate::types::BatchReport;

/// Runs a mapping file through a [`RoleProcessor`].
#[derive(Debug, Clone)]
pub struct BatchRunner {
    processor: RoleProcessor,
    report_path: PathBuf,
}

impl BatchRunner {
    /// Runner writing its unresolved-roles report to `report_path`.
    pub fn new(processor: RoleProcessor, report_path: impl Into<PathBuf>) -> Self {
        Self {
            processor,
            report_path: report_path.into(),
        }
    }

    /// Process every row of the mapping at `mapping_path`.
    ///
    /// Rows never abort the batch. The report file is written only when at
    /// least one row was not renamed, and never in dry-run mode; failing to
    /// write it is logged and leaves `report_path` unset.
    ///
    /// # Errors
    /// Fatal mapping problems only: missing file, missing columns, bad CSV.
    /// Nothing has been processed when an error is returned.
    pub fn run(&self, mapping_path: &Path) -> Result<BatchReport, RenameError> {
        let table = read_mapping(mapping_path)?;
        tracing::info!(headers = ?table.headers, rows = table.entries.len(), "mapping loaded");

        let mut report = BatchReport {
            dry_run: self.processor.is_dry_run(),
            ..BatchReport::default()
        };
        for entry in &table.entries {
            let outcome = self.processor.process(entry);
            if !outcome.is_success() {
                report.unresolved.push(entry.original_name.clone());
            }
            report.outcomes.push(outcome);
        }

        if !report.unresolved.is_empty() && !report.dry_run {
            report.report_path = self.write_report(&report.unresolved);
        }

        tracing::info!(
            renamed = report.renamed_count(),
            unresolved = report.unresolved.len(),
            "process completed"
        );
        Ok(report)
    }

    fn write_report(&self, unresolved: &[String]) -> Option<PathBuf> {
        let body: String = unresolved.iter().map(|role| format!("{role}\n")).collect();
        match write_text(&self.report_path, &body) {
            Ok(()) => {
                tracing::info!(path = %self.report_path.display(), "roles not found file created");
                Some(self.report_path.clone())
            }
            Err(error) => {
                tracing::error!(
                    path = %self.report_path.display(),
                    error = %error,
                    "failed to write roles not found file"
                );
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_report_write_failure_is_not_fatal() {
        let dir = TempDir::new().expect("Create temp dir");
        let mapping = dir.path().join("map.csv");
        std::fs::write(&mapping, "Original Role Name,New Role Name\nGhost,Spirit\n")
            .expect("write");

        let runner = BatchRunner::new(
            RoleProcessor::new(dir.path(), dir.path().join("00_Disabled")),
            dir.path().join("no_such_dir").join("not_found_roles.txt"),
        );
        let report = runner.run(&mapping).expect("run");

        assert_eq!(report.unresolved, vec!["Ghost".to_string()]);
        assert!(report.report_path.is_none());
    }

    #[test]
    fn test_dry_run_writes_no_report() {
        let dir = TempDir::new().expect("Create temp dir");
        let mapping = dir.path().join("map.csv");
        std::fs::write(&mapping, "Original Role Name,New Role Name\nGhost,Spirit\n")
            .expect("write");
        let report_path = dir.path().join("not_found_roles.txt");

        let runner = BatchRunner::new(
            RoleProcessor::new(dir.path(), dir.path().join("00_Disabled")).with_dry_run(true),
            &report_path,
        );
        let report = runner.run(&mapping).expect("run");

        assert!(report.dry_run);
        assert_eq!(report.unresolved.len(), 1);
        assert!(!report_path.exists());
    }
}
