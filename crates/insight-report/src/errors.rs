//! Render-step error taxonomy.

use std::path::PathBuf;

/// Errors that can occur while rendering the report artifact.
///
/// There is no retry anywhere in the render path; every variant is fatal for
/// that render call. No partial state is cleaned up beyond what the
/// underlying write primitive guarantees.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// The template file could not be read.
    #[error("failed to load report template {path}: {source}")]
    Template {
        /// Template path that failed to load.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The output directory could not be created or the artifact could not
    /// be written.
    #[error("failed to write report artifact {path}: {source}")]
    Write {
        /// Artifact (or directory) path that failed.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}
