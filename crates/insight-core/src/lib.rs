//! # insight-core
//!
//! Foundation types for the insight suite instrumentation.
//!
//! This crate provides the shared vocabulary the other insight crates depend
//! on:
//!
//! - **Kinds**: [`event::EventKind`] — the fixed set of lifecycle labels.
//! - **Events**: [`event::Event`] — one timed occurrence in a run, with its
//!   row serialization.
//! - **Sanitization**: [`sanitize::sanitize_label`] — idempotent cleanup of
//!   display labels before storage.
//!
//! ## Crate Position
//!
//! Foundation crate. Depended on by all other insight crates.

#![deny(unsafe_code)]

pub mod event;
pub mod sanitize;

pub use event::{ALL_EVENT_KINDS, Event, EventKind};
pub use sanitize::sanitize_label;
