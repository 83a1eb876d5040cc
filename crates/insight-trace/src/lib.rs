//! # insight-trace
//!
//! The event recorder: a run-scoped, append-only buffer of lifecycle
//! [`Event`](insight_core::Event)s.
//!
//! - **[`TraceRecorder`]**: thread-safe recorder owning the buffer and the
//!   delta-time bookkeeping. Share it across runner threads via `Arc`.
//! - **[`TraceConfig`]**: per-run knobs (delta mode, diagnostic logging),
//!   fixed at construction so they apply uniformly to the whole run.
//!
//! The trace grows only by append, is never reordered or deduplicated, and
//! is read exactly once at render time via [`TraceRecorder::serialize`].

#![deny(unsafe_code)]

pub mod recorder;

pub use recorder::{TraceConfig, TraceRecorder};
