//! The [`TraceRecorder`] — ordered accumulation of lifecycle events.

use parking_lot::Mutex;

use insight_core::{Event, EventKind};

/// Per-run recorder configuration.
///
/// Fixed at construction: once a run starts, its timestamp encoding cannot
/// change, so every event in a trace uses the same policy.
#[derive(Clone, Copy, Debug, Default)]
pub struct TraceConfig {
    /// Store inter-event deltas instead of absolute timestamps. Only the
    /// first event of the run keeps its absolute value (it anchors the
    /// run's time origin).
    pub delta_mode: bool,
    /// Emit one structured diagnostic log line per recorded event.
    pub log_output: bool,
}

/// Buffer plus delta-time bookkeeping, guarded as a unit.
#[derive(Debug, Default)]
struct TraceState {
    events: Vec<Event>,
    /// Raw timestamp of the most recent `record` call; `None` until the
    /// first event of the run arrives.
    last_raw: Option<u64>,
}

/// Run-scoped, append-only recorder of lifecycle events.
///
/// Lifecycle notifications can arrive concurrently from runner threads, so
/// every [`record`](Self::record) call is one critical section: the
/// delta-state read-modify-write and the append happen under a single lock.
///
/// INVARIANT: trace order equals the order in which `record` calls acquired
/// the lock. Events are never reordered, deduplicated, or dropped; the only
/// events missing from a trace are those the caller chose not to record.
#[derive(Debug)]
pub struct TraceRecorder {
    config: TraceConfig,
    state: Mutex<TraceState>,
}

impl TraceRecorder {
    /// Create an empty recorder for a new run.
    pub fn new(config: TraceConfig) -> Self {
        Self {
            config,
            state: Mutex::new(TraceState::default()),
        }
    }

    /// The configuration this run was started with.
    pub fn config(&self) -> TraceConfig {
        self.config
    }

    /// Append one event to the trace.
    ///
    /// `raw_timestamp_ms` is milliseconds since epoch. In delta mode the
    /// stored timestamp is the difference to the previous call's raw value
    /// (the first call stores the raw value itself); otherwise the raw value
    /// is stored as-is. Both labels are sanitized before storage; `failed`
    /// is meaningful only for [`EventKind::AfterTestExecution`].
    ///
    /// Never fails. Handing in raw timestamps out of order is a caller
    /// contract violation; in delta mode it yields negative deltas, nothing
    /// worse.
    pub fn record(
        &self,
        raw_timestamp_ms: u64,
        kind: EventKind,
        class_label: &str,
        method_label: &str,
        failed: Option<bool>,
    ) {
        let mut state = self.state.lock();

        let timestamp = if self.config.delta_mode {
            let stored = match state.last_raw {
                None => raw_timestamp_ms as i64,
                Some(last) => raw_timestamp_ms as i64 - last as i64,
            };
            state.last_raw = Some(raw_timestamp_ms);
            stored
        } else {
            raw_timestamp_ms as i64
        };

        let event = Event::new(timestamp, kind, class_label, method_label, failed);
        if self.config.log_output {
            tracing::info!(
                timestamp = event.timestamp,
                kind = %event.kind,
                class = %event.class_label,
                method = %event.method_label,
                failed = ?event.failed,
                "suite lifecycle event recorded"
            );
        }
        state.events.push(event);
    }

    /// Serialize the whole trace as newline-terminated rows, in trace order.
    ///
    /// One row per recorded event, formatted by
    /// [`Event::to_row`](insight_core::Event::to_row). The trace itself is
    /// left untouched; serializing twice yields the same text if nothing was
    /// recorded in between.
    pub fn serialize(&self) -> String {
        let state = self.state.lock();
        let mut out = String::new();
        for event in &state.events {
            out.push_str(&event.to_row());
            out.push('\n');
        }
        out
    }

    /// A point-in-time copy of the trace, taken under the same lock that
    /// guards appends.
    pub fn snapshot(&self) -> Vec<Event> {
        self.state.lock().events.clone()
    }

    /// Number of events recorded so far.
    pub fn len(&self) -> usize {
        self.state.lock().events.len()
    }

    /// Whether nothing has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.state.lock().events.is_empty()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
