//! # insight-report
//!
//! The report renderer: turns a serialized trace into a single
//! self-contained HTML artifact.
//!
//! - **[`TemplateSource`]**: the compiled-in default template or a file
//!   override.
//! - **[`ReportRenderer`]**: loads the template, substitutes the trace into
//!   the [`PLACEHOLDER`] token, writes `insight_<run start>.html` into the
//!   output directory.
//! - **[`ReportError`]**: template-load and artifact-write failures; both
//!   are fatal for the render call and surface to the caller.
//!
//! Substitution is literal. Trace content is not escaped on the way into the
//! template; see [`ReportRenderer::render`] for the documented boundary.

#![deny(unsafe_code)]

pub mod errors;
pub mod renderer;

pub use errors::ReportError;
pub use renderer::{PLACEHOLDER, ReportRenderer, TemplateSource};
