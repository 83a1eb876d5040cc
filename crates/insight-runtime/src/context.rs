//! The [`RunContext`] — everything one run owns.

use std::sync::Arc;

use chrono::{DateTime, Local};

use insight_report::{ReportRenderer, TemplateSource};
use insight_settings::InsightSettings;
use insight_trace::{TraceConfig, TraceRecorder};

use crate::clock::{Clock, SystemClock};
use crate::observer::{ContextObserver, RunnerObserver};

/// State owned by a single suite run: the recorder, the renderer, the clock,
/// and the run start time the artifact is named after.
///
/// There are no process-wide singletons; two concurrent runs are two
/// contexts with fully isolated traces.
pub struct RunContext {
    recorder: Arc<TraceRecorder>,
    renderer: ReportRenderer,
    clock: Arc<dyn Clock>,
    started_at: DateTime<Local>,
}

impl RunContext {
    /// Build a run context from settings, using the system clock and the
    /// current time as the run start.
    pub fn new(settings: &InsightSettings) -> Self {
        Self::with_clock(settings, Arc::new(SystemClock))
    }

    /// Build a run context with an explicit clock. The run start time is
    /// still taken from the wall clock; it only names the artifact.
    pub fn with_clock(settings: &InsightSettings, clock: Arc<dyn Clock>) -> Self {
        let recorder = Arc::new(TraceRecorder::new(TraceConfig {
            delta_mode: settings.delta_mode,
            log_output: settings.log_output,
        }));
        let template = settings
            .report
            .template_path
            .clone()
            .map_or(TemplateSource::Embedded, TemplateSource::Path);
        let renderer = ReportRenderer::new(template, settings.report.output_dir.clone());
        Self {
            recorder,
            renderer,
            clock,
            started_at: Local::now(),
        }
    }

    /// The run's recorder. Shared with every observer this context hands out.
    pub fn recorder(&self) -> &Arc<TraceRecorder> {
        &self.recorder
    }

    /// When this run started; names the report artifact.
    pub fn started_at(&self) -> DateTime<Local> {
        self.started_at
    }

    /// Adapter for test-runner notifications.
    pub fn runner_observer(&self) -> RunnerObserver {
        RunnerObserver::new(Arc::clone(&self.recorder), Arc::clone(&self.clock))
    }

    /// Adapter for application-context notifications.
    pub fn context_observer(&self) -> ContextObserver {
        ContextObserver::new(
            Arc::clone(&self.recorder),
            Arc::clone(&self.clock),
            self.renderer.clone(),
            self.started_at,
        )
    }
}

#[cfg(test)]
mod tests {
    use insight_settings::InsightSettings;

    use super::*;

    #[test]
    fn contexts_are_isolated() {
        let settings = InsightSettings::default();
        let a = RunContext::new(&settings);
        let b = RunContext::new(&settings);

        a.recorder()
            .record(1, insight_core::EventKind::BeforeAll, "Suite", "", None);
        assert_eq!(a.recorder().len(), 1);
        assert!(b.recorder().is_empty());
    }

    #[test]
    fn observers_share_the_context_recorder() {
        let settings = InsightSettings::default();
        let context = RunContext::new(&settings);
        let runner = context.runner_observer();
        let app = context.context_observer();

        runner.before_all(&crate::TestElement::class("Suite"));
        app.context_refreshed();
        assert_eq!(context.recorder().len(), 2);
    }
}
