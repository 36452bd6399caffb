//! Triggering boundary: one guarded run per request.

use std::path::Path;

use crate::batch::BatchRunner;
use crate::controller::{RunController, RunState};
use crate::error::RenameError;
use crate::processor::RoleProcessor;
use crate::settings::RenameSettings;
use crate::types::BatchReport;

/// Owns settings and the run controller for a front end.
#[derive(Debug, Default)]
pub struct RenameSession {
    settings: RenameSettings,
    controller: RunController,
}

impl RenameSession {
    /// Session with the given settings.
    #[must_use]
    pub fn new(settings: RenameSettings) -> Self {
        Self {
            settings,
            controller: RunController::new(),
        }
    }

    /// Effective settings.
    #[must_use]
    pub fn settings(&self) -> &RenameSettings {
        &self.settings
    }

    /// Whether a run is in flight.
    #[must_use]
    pub fn state(&self) -> RunState {
        self.controller.state()
    }

    /// Run the mapping at `mapping_path` against `bundle_root`.
    ///
    /// Ensures the archive directory exists (unless previewing), then runs
    /// the batch once. Concurrent calls on the same session are rejected.
    ///
    /// # Errors
    /// `AlreadyRunning`, `ArchiveDir`, or any fatal error of
    /// [`BatchRunner::run`].
    pub fn run(&self, bundle_root: &Path, mapping_path: &Path) -> Result<BatchReport, RenameError> {
        let _guard = self.controller.try_begin()?;

        let archive_dir = self.settings.archive_dir_for(bundle_root);
        let dry_run = self.settings.dry_run();
        if !dry_run && !archive_dir.is_dir() {
            std::fs::create_dir_all(&archive_dir).map_err(|source| RenameError::ArchiveDir {
                path: archive_dir.clone(),
                source,
            })?;
            tracing::info!(path = %archive_dir.display(), "created archive folder");
        }

        tracing::info!(
            bundle = %bundle_root.display(),
            mapping = %mapping_path.display(),
            dry_run,
            "starting processing"
        );
        let processor = RoleProcessor::new(bundle_root, archive_dir)
            .with_max_file_size(self.settings.max_file_size())
            .with_dry_run(dry_run);
        let runner = BatchRunner::new(processor, self.settings.report_path_for(bundle_root));

        runner.run(mapping_path).inspect_err(|error| {
            tracing::error!(error = %error, "run aborted");
        })
    }
}
