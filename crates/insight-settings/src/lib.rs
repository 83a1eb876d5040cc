//! # insight-settings
//!
//! Configuration for the insight instrumentation, loaded from three layers
//! (in priority order):
//!
//! 1. **Compiled defaults** — [`InsightSettings::default()`]
//! 2. **Project file** — `insight.json` in the working directory, partial
//!    files allowed (missing fields keep their defaults)
//! 3. **Environment variables** — `INSIGHT_*` overrides (highest priority)
//!
//! A missing settings file is not an error; a malformed one is, so a typo
//! never silently reverts a run to defaults.
//!
//! # Usage
//!
//! ```no_run
//! use insight_settings::load_settings;
//!
//! let settings = load_settings().unwrap_or_default();
//! assert!(!settings.delta_mode);
//! ```

#![deny(unsafe_code)]

pub mod errors;
pub mod loader;
pub mod types;

pub use errors::SettingsError;
pub use loader::{apply_env_overrides, load_settings, load_settings_from_path, settings_path};
pub use types::{InsightSettings, ReportSettings};
