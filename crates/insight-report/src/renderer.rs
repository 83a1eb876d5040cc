//! The [`ReportRenderer`] — template substitution and artifact output.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

use crate::errors::ReportError;

/// Placeholder token replaced by the serialized trace.
///
/// Every occurrence in the template is substituted; a template without the
/// token renders unchanged.
pub const PLACEHOLDER: &str = "$timestampCsvString";

/// Default report template compiled into the crate.
const EMBEDDED_TEMPLATE: &str = include_str!("../templates/report.html");

/// Where the report template comes from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum TemplateSource {
    /// The compiled-in default template.
    #[default]
    Embedded,
    /// A template file on disk, read fully into memory at render time.
    Path(PathBuf),
}

impl TemplateSource {
    fn load(&self) -> Result<String, ReportError> {
        match self {
            Self::Embedded => Ok(EMBEDDED_TEMPLATE.to_owned()),
            Self::Path(path) => fs::read_to_string(path).map_err(|source| {
                ReportError::Template {
                    path: path.clone(),
                    source,
                }
            }),
        }
    }
}

/// Renders the final report artifact.
///
/// Construction is cheap; all I/O happens in [`render`](Self::render). The
/// renderer holds no trace state, so a caller that (against contract) renders
/// twice simply gets two independent artifacts.
#[derive(Clone, Debug)]
pub struct ReportRenderer {
    template: TemplateSource,
    output_dir: PathBuf,
}

impl ReportRenderer {
    /// Create a renderer writing into `output_dir` from the given template.
    pub fn new(template: TemplateSource, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            template,
            output_dir: output_dir.into(),
        }
    }

    /// The directory artifacts are written into.
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Render the serialized trace into the template and write the artifact.
    ///
    /// Replaces every occurrence of [`PLACEHOLDER`] with `rows` and writes
    /// the result to `insight_<yyyy-MM-dd_HH-mm-ss>.html` (named from
    /// `run_started_at`) inside the output directory, creating the directory
    /// if needed. Returns the artifact path.
    ///
    /// Called at most once per run by contract. If the target path already
    /// exists (a second render in the same run), the name gets a `_2`,
    /// `_3`, … suffix so each call produces a distinct artifact.
    ///
    /// Substitution is literal and performs no escaping. A label or template
    /// that itself contains the placeholder token, or characters with
    /// structural meaning in HTML, corrupts the output. That is a documented
    /// boundary of the report format, not something this method repairs.
    pub fn render(
        &self,
        rows: &str,
        run_started_at: DateTime<Local>,
    ) -> Result<PathBuf, ReportError> {
        let template = self.template.load()?;
        let html = template.replace(PLACEHOLDER, rows);

        fs::create_dir_all(&self.output_dir).map_err(|source| ReportError::Write {
            path: self.output_dir.clone(),
            source,
        })?;

        let path = self.artifact_path(run_started_at);
        fs::write(&path, html).map_err(|source| ReportError::Write {
            path: path.clone(),
            source,
        })?;

        tracing::info!(path = %path.display(), "report artifact written");
        Ok(path)
    }

    /// First free artifact path for the given run start time.
    fn artifact_path(&self, run_started_at: DateTime<Local>) -> PathBuf {
        let stem = format!("insight_{}", run_started_at.format("%Y-%m-%d_%H-%M-%S"));
        let first = self.output_dir.join(format!("{stem}.html"));
        if !first.exists() {
            return first;
        }
        let mut counter = 2_u32;
        loop {
            let candidate = self.output_dir.join(format!("{stem}_{counter}.html"));
            if !candidate.exists() {
                return candidate;
            }
            counter += 1;
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
