//! Observers mapping external notifications onto the recorder.

use std::path::PathBuf;
use std::sync::Arc;

use chrono::{DateTime, Local};

use insight_core::EventKind;
use insight_report::{ReportError, ReportRenderer};
use insight_trace::TraceRecorder;

use crate::clock::Clock;
use crate::element::TestElement;

/// Adapter for test-runner notifications, one entry point per recognized
/// event kind.
///
/// Every entry point checks the element's skip marker first: a marked
/// element is dropped before the recorder is ever called, no matter how many
/// notifications reference it.
pub struct RunnerObserver {
    recorder: Arc<TraceRecorder>,
    clock: Arc<dyn Clock>,
}

impl RunnerObserver {
    /// Build an observer recording through `recorder` with `clock` time.
    pub fn new(recorder: Arc<TraceRecorder>, clock: Arc<dyn Clock>) -> Self {
        Self { recorder, clock }
    }

    /// Start of a test class.
    pub fn before_all(&self, element: &TestElement) {
        self.notify(EventKind::BeforeAll, element, None);
    }

    /// End of a test class.
    pub fn after_all(&self, element: &TestElement) {
        self.notify(EventKind::AfterAll, element, None);
    }

    /// Per-test setup started.
    pub fn before_each(&self, element: &TestElement) {
        self.notify(EventKind::BeforeEach, element, None);
    }

    /// Per-test teardown finished.
    ///
    /// Distinct from [`after_test_execution`](Self::after_test_execution):
    /// both fire around the same logical moment and both are recorded.
    pub fn after_each(&self, element: &TestElement) {
        self.notify(EventKind::AfterEach, element, None);
    }

    /// Test body about to run.
    pub fn before_test_execution(&self, element: &TestElement) {
        self.notify(EventKind::BeforeTestExecution, element, None);
    }

    /// Test body just returned; `failed` reports whether it threw.
    pub fn after_test_execution(&self, element: &TestElement, failed: bool) {
        self.notify(EventKind::AfterTestExecution, element, Some(failed));
    }

    fn notify(&self, kind: EventKind, element: &TestElement, failed: Option<bool>) {
        if element.skip {
            tracing::debug!(
                kind = %kind,
                class = %element.class_label,
                method = %element.method_label,
                "skip marker present, event suppressed"
            );
            return;
        }
        self.recorder.record(
            self.clock.now_ms(),
            kind,
            &element.class_label,
            &element.method_label,
            failed,
        );
    }
}

/// Adapter for application-context notifications.
pub struct ContextObserver {
    recorder: Arc<TraceRecorder>,
    clock: Arc<dyn Clock>,
    renderer: ReportRenderer,
    run_started_at: DateTime<Local>,
}

impl ContextObserver {
    /// Build an observer recording through `recorder` and rendering with
    /// `renderer` when the context closes.
    pub fn new(
        recorder: Arc<TraceRecorder>,
        clock: Arc<dyn Clock>,
        renderer: ReportRenderer,
        run_started_at: DateTime<Local>,
    ) -> Self {
        Self {
            recorder,
            clock,
            renderer,
            run_started_at,
        }
    }

    /// The application context came up (or was refreshed). Recorded with
    /// empty class and method labels.
    pub fn context_refreshed(&self) {
        self.recorder
            .record(self.clock.now_ms(), EventKind::ContextRefreshed, "", "", None);
    }

    /// The application context shut down.
    ///
    /// Records the `context closed` event and then performs the run's single
    /// render. Render failures surface to the caller; nothing is retried.
    pub fn context_closed(&self) -> Result<PathBuf, ReportError> {
        self.recorder
            .record(self.clock.now_ms(), EventKind::ContextClosed, "", "", None);
        self.renderer
            .render(&self.recorder.serialize(), self.run_started_at)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicU64, Ordering};

    use insight_trace::{TraceConfig, TraceRecorder};

    use super::*;

    /// Scripted clock: starts at 1000 ms and advances 100 ms per reading.
    struct StepClock(AtomicU64);

    impl StepClock {
        fn new() -> Self {
            Self(AtomicU64::new(1_000))
        }
    }

    impl Clock for StepClock {
        fn now_ms(&self) -> u64 {
            self.0.fetch_add(100, Ordering::SeqCst)
        }
    }

    fn runner(recorder: &Arc<TraceRecorder>) -> RunnerObserver {
        RunnerObserver::new(Arc::clone(recorder), Arc::new(StepClock::new()))
    }

    #[test]
    fn each_entry_point_records_its_kind() {
        let recorder = Arc::new(TraceRecorder::new(TraceConfig::default()));
        let observer = runner(&recorder);
        let class = TestElement::class("Suite");
        let method = TestElement::method("Suite", "t1");

        observer.before_all(&class);
        observer.before_each(&method);
        observer.before_test_execution(&method);
        observer.after_test_execution(&method, false);
        observer.after_each(&method);
        observer.after_all(&class);

        let kinds: Vec<EventKind> = recorder.snapshot().iter().map(|e| e.kind).collect();
        assert_eq!(
            kinds,
            vec![
                EventKind::BeforeAll,
                EventKind::BeforeEach,
                EventKind::BeforeTestExecution,
                EventKind::AfterTestExecution,
                EventKind::AfterEach,
                EventKind::AfterAll,
            ]
        );
    }

    #[test]
    fn timestamps_come_from_the_clock() {
        let recorder = Arc::new(TraceRecorder::new(TraceConfig::default()));
        let observer = runner(&recorder);
        observer.before_all(&TestElement::class("Suite"));
        observer.after_all(&TestElement::class("Suite"));

        let stored: Vec<i64> = recorder.snapshot().iter().map(|e| e.timestamp).collect();
        assert_eq!(stored, vec![1_000, 1_100]);
    }

    #[test]
    fn failed_flag_reaches_the_trace() {
        let recorder = Arc::new(TraceRecorder::new(TraceConfig::default()));
        let observer = runner(&recorder);
        observer.after_test_execution(&TestElement::method("Suite", "t1"), true);

        let events = recorder.snapshot();
        assert_eq!(events[0].failed, Some(true));
        assert_eq!(events[0].to_row(), "1000;after test execution;Suite;t1;true");
    }

    #[test]
    fn skip_marker_suppresses_every_notification() {
        let recorder = Arc::new(TraceRecorder::new(TraceConfig::default()));
        let observer = runner(&recorder);
        let skipped = TestElement::method("Suite", "t1").skipped();

        observer.before_all(&skipped);
        observer.before_each(&skipped);
        observer.before_test_execution(&skipped);
        observer.after_test_execution(&skipped, true);
        observer.after_each(&skipped);
        observer.after_all(&skipped);

        assert!(recorder.is_empty());
    }

    #[test]
    fn skipped_and_recorded_elements_interleave() {
        let recorder = Arc::new(TraceRecorder::new(TraceConfig::default()));
        let observer = runner(&recorder);
        let live = TestElement::method("Suite", "t1");
        let skipped = TestElement::method("Suite", "t2").skipped();

        observer.before_each(&live);
        observer.before_each(&skipped);
        observer.after_each(&skipped);
        observer.after_each(&live);

        let rows = recorder.serialize();
        assert_eq!(rows, "1000;before each;Suite;t1\n1100;after each;Suite;t1\n");
    }

    #[test]
    fn context_events_have_empty_labels() {
        let recorder = Arc::new(TraceRecorder::new(TraceConfig::default()));
        let dir = tempfile::tempdir().unwrap();
        let observer = ContextObserver::new(
            Arc::clone(&recorder),
            Arc::new(StepClock::new()),
            ReportRenderer::new(insight_report::TemplateSource::Embedded, dir.path()),
            Local::now(),
        );

        observer.context_refreshed();
        let events = recorder.snapshot();
        assert_eq!(events[0].kind, EventKind::ContextRefreshed);
        assert_eq!(events[0].class_label, "");
        assert_eq!(events[0].method_label, "");
    }

    #[test]
    fn context_closed_records_then_renders() {
        let recorder = Arc::new(TraceRecorder::new(TraceConfig::default()));
        let dir = tempfile::tempdir().unwrap();
        let observer = ContextObserver::new(
            Arc::clone(&recorder),
            Arc::new(StepClock::new()),
            ReportRenderer::new(insight_report::TemplateSource::Embedded, dir.path()),
            Local::now(),
        );

        let path = observer.context_closed().unwrap();
        assert!(path.exists());
        // The closed event itself is part of the rendered trace.
        let html = std::fs::read_to_string(path).unwrap();
        assert!(html.contains("1000;context closed;;"));
    }

    #[test]
    fn context_closed_render_failure_surfaces() {
        let recorder = Arc::new(TraceRecorder::new(TraceConfig::default()));
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing-template.html");
        let observer = ContextObserver::new(
            Arc::clone(&recorder),
            Arc::new(StepClock::new()),
            ReportRenderer::new(insight_report::TemplateSource::Path(missing), dir.path()),
            Local::now(),
        );

        assert!(observer.context_closed().is_err());
        // The event was still recorded before the render attempt.
        assert_eq!(recorder.len(), 1);
    }
}
