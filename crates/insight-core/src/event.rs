//! The [`Event`] struct and [`EventKind`] enum — one timed lifecycle
//! occurrence in a suite run.
//!
//! Events are stored exactly as they will be serialized: the timestamp is
//! already absolute-or-delta (the recorder decides), and both labels are
//! already sanitized. An `Event` is immutable once constructed.

use serde::{Deserialize, Serialize};

use crate::sanitize::sanitize_label;

/// Lifecycle moment that produced an event.
///
/// The wire labels are fixed; they appear verbatim in serialized report rows
/// and are what the report template's parser matches on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    /// Start of a test class, before any of its tests.
    #[serde(rename = "before all")]
    BeforeAll,
    /// End of a test class, after all of its tests.
    #[serde(rename = "after all")]
    AfterAll,
    /// Per-test setup has started.
    #[serde(rename = "before each")]
    BeforeEach,
    /// Per-test teardown has finished.
    #[serde(rename = "after each")]
    AfterEach,
    /// The test body itself is about to run.
    #[serde(rename = "before test execution")]
    BeforeTestExecution,
    /// The test body has just returned. Carries the failed flag.
    #[serde(rename = "after test execution")]
    AfterTestExecution,
    /// The application context came up (or was refreshed).
    #[serde(rename = "context refreshed")]
    ContextRefreshed,
    /// The application context shut down. The report is rendered after this.
    #[serde(rename = "context closed")]
    ContextClosed,
}

/// All event kinds, in lifecycle order.
pub const ALL_EVENT_KINDS: [EventKind; 8] = [
    EventKind::BeforeAll,
    EventKind::AfterAll,
    EventKind::BeforeEach,
    EventKind::AfterEach,
    EventKind::BeforeTestExecution,
    EventKind::AfterTestExecution,
    EventKind::ContextRefreshed,
    EventKind::ContextClosed,
];

impl EventKind {
    /// The wire label, e.g. `"before all"`.
    pub fn label(self) -> &'static str {
        match self {
            Self::BeforeAll => "before all",
            Self::AfterAll => "after all",
            Self::BeforeEach => "before each",
            Self::AfterEach => "after each",
            Self::BeforeTestExecution => "before test execution",
            Self::AfterTestExecution => "after test execution",
            Self::ContextRefreshed => "context refreshed",
            Self::ContextClosed => "context closed",
        }
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One timed occurrence in a suite run.
///
/// `timestamp` is milliseconds: absolute for the first event of a delta-mode
/// run and for every event of an absolute-mode run, otherwise the delta since
/// the previous event. Signed, so out-of-order raw timestamps from a
/// misbehaving caller produce negative deltas instead of wrapping.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Milliseconds since epoch, or a delta (see above).
    pub timestamp: i64,
    /// Lifecycle moment that produced this event.
    pub kind: EventKind,
    /// Sanitized test-class display label; may be empty.
    pub class_label: String,
    /// Sanitized test-method display label; may be empty.
    pub method_label: String,
    /// Whether the test body failed. Present only for
    /// [`EventKind::AfterTestExecution`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failed: Option<bool>,
}

impl Event {
    /// Build an event, sanitizing both labels.
    ///
    /// The failed flag is kept only for [`EventKind::AfterTestExecution`];
    /// for every other kind it is dropped so the stored event matches the
    /// row format.
    pub fn new(
        timestamp: i64,
        kind: EventKind,
        class_label: &str,
        method_label: &str,
        failed: Option<bool>,
    ) -> Self {
        let failed = match kind {
            EventKind::AfterTestExecution => failed,
            _ => None,
        };
        Self {
            timestamp,
            kind,
            class_label: sanitize_label(class_label),
            method_label: sanitize_label(method_label),
            failed,
        }
    }

    /// The serialized row for this event, without the trailing newline:
    /// `timestamp;kind;class;method` plus `;failed` for
    /// [`EventKind::AfterTestExecution`].
    pub fn to_row(&self) -> String {
        let mut row = format!(
            "{};{};{};{}",
            self.timestamp, self.kind, self.class_label, self.method_label
        );
        if let (EventKind::AfterTestExecution, Some(failed)) = (self.kind, self.failed) {
            row.push(';');
            row.push_str(if failed { "true" } else { "false" });
        }
        row
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_match_wire_format() {
        assert_eq!(EventKind::BeforeAll.label(), "before all");
        assert_eq!(EventKind::AfterTestExecution.label(), "after test execution");
        assert_eq!(EventKind::ContextClosed.label(), "context closed");
    }

    #[test]
    fn serde_uses_wire_labels() {
        let json = serde_json::to_value(EventKind::BeforeTestExecution).unwrap();
        assert_eq!(json, "before test execution");
        let back: EventKind = serde_json::from_value(json).unwrap();
        assert_eq!(back, EventKind::BeforeTestExecution);
    }

    #[test]
    fn all_kinds_has_every_variant_once() {
        let mut labels: Vec<&str> = ALL_EVENT_KINDS.iter().map(|k| k.label()).collect();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), 8);
    }

    #[test]
    fn row_without_failed_flag() {
        let event = Event::new(1000, EventKind::BeforeAll, "Suite", "", None);
        assert_eq!(event.to_row(), "1000;before all;Suite;");
    }

    #[test]
    fn row_with_method_label() {
        let event = Event::new(500, EventKind::BeforeEach, "Suite", "t1", None);
        assert_eq!(event.to_row(), "500;before each;Suite;t1");
    }

    #[test]
    fn row_with_failed_flag() {
        let event = Event::new(
            42,
            EventKind::AfterTestExecution,
            "Suite",
            "t1",
            Some(true),
        );
        assert_eq!(event.to_row(), "42;after test execution;Suite;t1;true");

        let passed = Event::new(
            42,
            EventKind::AfterTestExecution,
            "Suite",
            "t1",
            Some(false),
        );
        assert_eq!(passed.to_row(), "42;after test execution;Suite;t1;false");
    }

    #[test]
    fn failed_flag_dropped_for_other_kinds() {
        let event = Event::new(7, EventKind::AfterEach, "Suite", "t1", Some(true));
        assert_eq!(event.failed, None);
        assert_eq!(event.to_row(), "7;after each;Suite;t1");
    }

    #[test]
    fn labels_are_sanitized_on_construction() {
        let event = Event::new(0, EventKind::BeforeEach, "[Suite]", "Optional.empty", None);
        assert_eq!(event.class_label, "Suite");
        assert_eq!(event.method_label, "");
    }

    #[test]
    fn negative_delta_round_trips() {
        let event = Event::new(-250, EventKind::AfterEach, "Suite", "t1", None);
        assert_eq!(event.to_row(), "-250;after each;Suite;t1");
    }

    #[test]
    fn context_events_have_empty_labels() {
        let event = Event::new(1234, EventKind::ContextRefreshed, "", "", None);
        assert_eq!(event.to_row(), "1234;context refreshed;;");
    }
}
