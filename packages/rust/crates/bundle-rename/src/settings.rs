//! Runtime settings for bundle-rename.
//!
//! Loads and merges:
//! - Built-in defaults
//! - Settings file: `--config <path>`, else `$BUNDLE_RENAME_CONFIG`
//! - CLI flags (applied by the binary as a final overlay)
//!
//! Later layers win field by field.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Environment variable naming the settings file.
pub const CONFIG_ENV_VAR: &str = "BUNDLE_RENAME_CONFIG";

/// Archive folder created under the bundle root.
pub const DEFAULT_ARCHIVE_DIR_NAME: &str = "00_Disabled";

/// Unresolved-roles report written into the bundle root.
pub const DEFAULT_REPORT_FILE_NAME: &str = "not_found_roles.txt";

/// Largest artifact the processor will read (16 MiB).
pub const DEFAULT_MAX_FILE_SIZE: u64 = 16 * 1024 * 1024;

/// Layered settings; every field is optional so layers can be merged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RenameSettings {
    /// Name of the archive folder under the bundle root.
    pub archive_dir_name: Option<String>,
    /// Explicit archive directory; relative paths resolve against the bundle root.
    pub archive_dir: Option<PathBuf>,
    /// File name of the unresolved-roles report.
    pub report_file_name: Option<String>,
    /// Maximum artifact size in bytes.
    pub max_file_size: Option<u64>,
    /// Preview only.
    pub dry_run: Option<bool>,
}

impl RenameSettings {
    /// Overlay `overlay` on top of `self`.
    #[must_use]
    pub fn merge(self, overlay: Self) -> Self {
        Self {
            archive_dir_name: overlay.archive_dir_name.or(self.archive_dir_name),
            archive_dir: overlay.archive_dir.or(self.archive_dir),
            report_file_name: overlay.report_file_name.or(self.report_file_name),
            max_file_size: overlay.max_file_size.or(self.max_file_size),
            dry_run: overlay.dry_run.or(self.dry_run),
        }
    }

    /// Archive folder name, defaulting to `00_Disabled`.
    #[must_use]
    pub fn archive_dir_name(&self) -> &str {
        self.archive_dir_name
            .as_deref()
            .unwrap_or(DEFAULT_ARCHIVE_DIR_NAME)
    }

    /// Report file name, defaulting to `not_found_roles.txt`.
    #[must_use]
    pub fn report_file_name(&self) -> &str {
        self.report_file_name
            .as_deref()
            .unwrap_or(DEFAULT_REPORT_FILE_NAME)
    }

    /// Maximum artifact size in bytes.
    #[must_use]
    pub fn max_file_size(&self) -> u64 {
        self.max_file_size.unwrap_or(DEFAULT_MAX_FILE_SIZE)
    }

    /// Whether runs only preview.
    #[must_use]
    pub fn dry_run(&self) -> bool {
        self.dry_run.unwrap_or(false)
    }

    /// Archive directory for a given bundle root.
    #[must_use]
    pub fn archive_dir_for(&self, bundle_root: &Path) -> PathBuf {
        match &self.archive_dir {
            Some(dir) if dir.is_absolute() => dir.clone(),
            Some(dir) => bundle_root.join(dir),
            None => bundle_root.join(self.archive_dir_name()),
        }
    }

    /// Report path for a given bundle root.
    #[must_use]
    pub fn report_path_for(&self, bundle_root: &Path) -> PathBuf {
        bundle_root.join(self.report_file_name())
    }
}

/// Load settings from `explicit`, else from `$BUNDLE_RENAME_CONFIG`, over defaults.
pub fn load_settings(explicit: Option<&Path>) -> RenameSettings {
    let from_env = std::env::var(CONFIG_ENV_VAR)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .map(PathBuf::from);

    match explicit.map(Path::to_path_buf).or(from_env) {
        Some(path) => RenameSettings::default().merge(load_settings_file(&path)),
        None => RenameSettings::default(),
    }
}

/// Read one YAML settings file. Missing, unreadable, or invalid files yield defaults.
pub fn load_settings_file(path: &Path) -> RenameSettings {
    if !path.exists() {
        tracing::warn!(path = %path.display(), "settings file not found; using defaults");
        return RenameSettings::default();
    }
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(error) => {
            tracing::warn!(
                path = %path.display(),
                error = %error,
                "failed to read settings file; ignoring"
            );
            return RenameSettings::default();
        }
    };
    match serde_yaml::from_str::<Option<RenameSettings>>(&raw) {
        Ok(value) => value.unwrap_or_default(),
        Err(error) => {
            tracing::warn!(
                path = %path.display(),
                error = %error,
                "failed to parse settings yaml; ignoring file"
            );
            RenameSettings::default()
        }
    }
}
