//! Settings loading errors.

use std::path::PathBuf;

/// Errors that can occur while loading settings.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// The settings file exists but could not be read.
    #[error("failed to read settings file {path}: {source}")]
    Io {
        /// Settings file path.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The settings file is not valid JSON for [`crate::InsightSettings`].
    #[error("failed to parse settings file {path}: {source}")]
    Parse {
        /// Settings file path.
        path: PathBuf,
        /// Underlying parse error.
        source: serde_json::Error,
    },
}
