//! # insight-runtime
//!
//! Lifecycle adapters between external notification sources and the trace
//! recorder.
//!
//! - **[`RunContext`]**: owns the recorder, the renderer, and the run start
//!   time for one run. There is no process-wide state; isolated runs are
//!   just separate contexts.
//! - **[`RunnerObserver`]**: one entry point per test-runner notification
//!   (`before all` … `after test execution`). Honors the per-element skip
//!   marker by dropping the event before it reaches the recorder.
//! - **[`ContextObserver`]**: application-context notifications; the
//!   `context closed` notification records its event and then performs the
//!   run's single render.
//! - **[`Clock`]** / **[`SystemClock`]**: time source threaded through the
//!   observers so tests run against scripted clocks.

#![deny(unsafe_code)]

pub mod clock;
pub mod context;
pub mod element;
pub mod observer;

pub use clock::{Clock, SystemClock};
pub use context::RunContext;
pub use element::TestElement;
pub use observer::{ContextObserver, RunnerObserver};
