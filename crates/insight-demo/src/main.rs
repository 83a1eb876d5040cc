//! Demo harness for the insight instrumentation.
//!
//! Simulates a deterministic suite run (classes × tests with scripted
//! durations, optional skips and failures), drives the full adapter →
//! recorder → renderer pipeline, and prints the artifact path.

#![deny(unsafe_code)]

use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use anyhow::{Context, Result};
use clap::Parser;

use insight_runtime::{Clock, RunContext, TestElement};
use insight_settings::InsightSettings;

#[derive(Debug, Parser)]
#[command(
    name = "insight-demo",
    about = "Simulate a suite run and write an insight report"
)]
struct Args {
    /// Number of simulated test classes.
    #[arg(long, default_value_t = 3)]
    classes: usize,

    /// Tests per class.
    #[arg(long, default_value_t = 4)]
    tests: usize,

    /// Mark every n-th test with the skip marker (0 = no skips).
    #[arg(long, default_value_t = 0)]
    skip_every: usize,

    /// Fail every n-th test (0 = no failures).
    #[arg(long, default_value_t = 5)]
    fail_every: usize,

    /// Record inter-event deltas instead of absolute timestamps.
    #[arg(long, default_value_t = false)]
    delta: bool,

    /// Output directory for the report artifact.
    #[arg(long, default_value = "insights")]
    output: PathBuf,
}

/// Deterministic clock: fixed start, step size varies with the reading
/// count so the simulated durations are not all identical.
struct ScriptedClock {
    now: AtomicU64,
    reads: AtomicU64,
}

impl ScriptedClock {
    fn new(start: u64) -> Self {
        Self {
            now: AtomicU64::new(start),
            reads: AtomicU64::new(0),
        }
    }
}

impl Clock for ScriptedClock {
    fn now_ms(&self) -> u64 {
        let reads = self.reads.fetch_add(1, Ordering::SeqCst);
        let step = 15 + (reads * 7) % 60;
        self.now.fetch_add(step, Ordering::SeqCst)
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let mut settings = InsightSettings::default();
    settings.delta_mode = args.delta;
    settings.log_output = true;
    settings.report.output_dir = args.output.clone();

    // 2024-01-01T00:00:00Z, so generated reports are stable run to run.
    let clock = Arc::new(ScriptedClock::new(1_704_067_200_000));
    let context = RunContext::with_clock(&settings, clock);
    let runner = context.runner_observer();
    let app = context.context_observer();

    app.context_refreshed();

    let mut test_counter = 0_usize;
    for class_index in 0..args.classes {
        let class = TestElement::class(format!("DemoSuite{class_index}"));
        runner.before_all(&class);

        for test_index in 0..args.tests {
            test_counter += 1;
            let skip = args.skip_every > 0 && test_counter % args.skip_every == 0;
            let failed = args.fail_every > 0 && test_counter % args.fail_every == 0;

            let mut element = TestElement::method(
                format!("DemoSuite{class_index}"),
                format!("test{test_index}"),
            );
            if skip {
                element = element.skipped();
            }

            runner.before_each(&element);
            runner.before_test_execution(&element);
            runner.after_test_execution(&element, failed);
            runner.after_each(&element);
        }

        runner.after_all(&class);
    }

    let artifact = app
        .context_closed()
        .context("failed to render the insight report")?;

    println!("{}", artifact.display());
    Ok(())
}
