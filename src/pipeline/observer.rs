//! Pipeline observer: hooks for logging, profiling and debugging.
//!
//! Observers receive notifications at stage boundaries without coupling to
//! stage logic.

use std::time::{Duration, Instant};

use crate::types::Summary;

pub const STAGE_EXTRACT: &str = "extract";
pub const STAGE_SUMMARIZE: &str = "summarize";
pub const STAGE_RENDER: &str = "render";

/// Wall-clock timer for one stage.
#[derive(Debug, Clone, Copy)]
pub struct StageClock(Instant);

impl StageClock {
    pub fn start() -> Self {
        Self(Instant::now())
    }

    pub fn elapsed(&self) -> Duration {
        self.0.elapsed()
    }
}

/// What a finished stage reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageReport {
    pub elapsed: Duration,
    /// Characters produced by the stage (extracted text, summary text, or
    /// rendered bytes), when meaningful.
    pub output_len: Option<usize>,
}

impl StageReport {
    pub fn new(elapsed: Duration) -> Self {
        Self {
            elapsed,
            output_len: None,
        }
    }

    pub fn with_output_len(mut self, len: usize) -> Self {
        self.output_len = Some(len);
        self
    }
}

/// Stage-boundary callbacks. All methods default to no-ops.
pub trait PipelineObserver {
    fn on_stage_start(&mut self, _stage: &'static str) {}

    fn on_stage_end(&mut self, _stage: &'static str, _report: &StageReport) {}

    fn on_summary(&mut self, _summary: &Summary) {}
}

/// Observer that does nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl PipelineObserver for NoopObserver {}

/// Observer that emits a `tracing` event per finished stage.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl PipelineObserver for TracingObserver {
    fn on_stage_end(&mut self, stage: &'static str, report: &StageReport) {
        tracing::debug!(
            stage,
            elapsed_us = report.elapsed.as_micros() as u64,
            output_len = report.output_len,
            "stage finished"
        );
    }

    fn on_summary(&mut self, summary: &Summary) {
        tracing::info!(
            sentences = summary.len(),
            input_words = summary.input_word_count,
            summary_words = summary.summary_word_count,
            "summary ready"
        );
    }
}

/// Observer that records every stage report in order.
#[derive(Debug, Clone, Default)]
pub struct StageTimings {
    pub stages: Vec<(&'static str, StageReport)>,
}

impl StageTimings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|(name, _)| *name).collect()
    }

    pub fn total(&self) -> Duration {
        self.stages.iter().map(|(_, r)| r.elapsed).sum()
    }
}

impl PipelineObserver for StageTimings {
    fn on_stage_end(&mut self, stage: &'static str, report: &StageReport) {
        self.stages.push((stage, report.clone()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_timings_records_in_order() {
        let mut timings = StageTimings::new();
        timings.on_stage_start(STAGE_EXTRACT);
        timings.on_stage_end(STAGE_EXTRACT, &StageReport::new(Duration::from_millis(2)));
        timings.on_stage_end(
            STAGE_SUMMARIZE,
            &StageReport::new(Duration::from_millis(3)).with_output_len(40),
        );

        assert_eq!(timings.stage_names(), vec![STAGE_EXTRACT, STAGE_SUMMARIZE]);
        assert_eq!(timings.total(), Duration::from_millis(5));
        assert_eq!(timings.stages[1].1.output_len, Some(40));
    }

    #[test]
    fn test_clock_is_monotonic() {
        let clock = StageClock::start();
        let a = clock.elapsed();
        let b = clock.elapsed();
        assert!(b >= a);
    }

    #[test]
    fn test_observer_as_trait_object() {
        let mut observer: Box<dyn PipelineObserver> = Box::new(TracingObserver);
        observer.on_stage_start(STAGE_RENDER);
        observer.on_stage_end(STAGE_RENDER, &StageReport::new(Duration::ZERO));
    }
}
