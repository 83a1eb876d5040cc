//! Settings type definitions.
//!
//! All types use `#[serde(rename_all = "camelCase")]` JSON field names and
//! `#[serde(default)]`, so partial files are fine — missing fields get their
//! compiled default during deserialization.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Root settings for the insight instrumentation.
///
/// # JSON Format
///
/// All field names are camelCase. Example:
///
/// ```json
/// {
///   "deltaMode": true,
///   "report": { "outputDir": "target/insights" }
/// }
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InsightSettings {
    /// Store inter-event deltas instead of absolute timestamps.
    pub delta_mode: bool,
    /// Emit one diagnostic log line per recorded event.
    pub log_output: bool,
    /// Report output settings.
    pub report: ReportSettings,
}

impl Default for InsightSettings {
    fn default() -> Self {
        Self {
            delta_mode: false,
            log_output: false,
            report: ReportSettings::default(),
        }
    }
}

/// Where the report artifact goes and which template it uses.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReportSettings {
    /// Directory the report artifact is written into. Created if missing.
    pub output_dir: PathBuf,
    /// Template file overriding the compiled-in default. `None` uses the
    /// embedded template.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_path: Option<PathBuf>,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("insights"),
            template_path: None,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
