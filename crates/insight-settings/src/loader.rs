//! Settings loading: file layer plus environment overrides.

use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::SettingsError;
use crate::types::InsightSettings;

/// Environment variable overriding [`InsightSettings::delta_mode`].
pub const ENV_DELTA_MODE: &str = "INSIGHT_DELTA_MODE";
/// Environment variable overriding [`InsightSettings::log_output`].
pub const ENV_LOG_OUTPUT: &str = "INSIGHT_LOG_OUTPUT";
/// Environment variable overriding the report output directory.
pub const ENV_REPORT_DIR: &str = "INSIGHT_REPORT_DIR";
/// Environment variable overriding the template path. An empty value
/// clears a file-configured override back to the embedded template.
pub const ENV_TEMPLATE_PATH: &str = "INSIGHT_TEMPLATE_PATH";

/// Default settings file location: `insight.json` in the working directory.
///
/// Instrumented suites run from the project root, so the settings file is
/// project-local rather than per-user.
pub fn settings_path() -> PathBuf {
    PathBuf::from("insight.json")
}

/// Load settings from the default location with env overrides applied.
pub fn load_settings() -> Result<InsightSettings, SettingsError> {
    load_settings_from_path(&settings_path())
}

/// Load settings from `path` with env overrides applied.
///
/// A missing file yields the compiled defaults; an unreadable or malformed
/// file is an error so a typo never silently reverts a run to defaults.
pub fn load_settings_from_path(path: &Path) -> Result<InsightSettings, SettingsError> {
    let mut settings = if path.exists() {
        let text = fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })?
    } else {
        InsightSettings::default()
    };
    apply_env_overrides(&mut settings, |name| std::env::var(name).ok());
    Ok(settings)
}

/// Apply `INSIGHT_*` overrides from an arbitrary lookup.
///
/// The lookup is a parameter so tests can drive this without touching
/// process-wide environment state.
pub fn apply_env_overrides(
    settings: &mut InsightSettings,
    lookup: impl Fn(&str) -> Option<String>,
) {
    if let Some(value) = lookup(ENV_DELTA_MODE) {
        match parse_bool(&value) {
            Some(flag) => settings.delta_mode = flag,
            None => warn_invalid_bool(ENV_DELTA_MODE, &value),
        }
    }
    if let Some(value) = lookup(ENV_LOG_OUTPUT) {
        match parse_bool(&value) {
            Some(flag) => settings.log_output = flag,
            None => warn_invalid_bool(ENV_LOG_OUTPUT, &value),
        }
    }
    if let Some(value) = lookup(ENV_REPORT_DIR) {
        if value.is_empty() {
            tracing::warn!("{ENV_REPORT_DIR} is empty, keeping configured output dir");
        } else {
            settings.report.output_dir = PathBuf::from(value);
        }
    }
    if let Some(value) = lookup(ENV_TEMPLATE_PATH) {
        settings.report.template_path = if value.is_empty() {
            None
        } else {
            Some(PathBuf::from(value))
        };
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn warn_invalid_bool(name: &str, value: &str) {
    tracing::warn!("{name}={value} is not a boolean, keeping configured value");
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
