//! Request pipeline and configuration
//!
//! A [`SummaryPipeline`] takes one request through extraction, summarization
//! and export rendering. Configuration files are parsed into a [`ConfigSpec`]
//! and checked by the [`ValidationEngine`] before they configure anything.

pub mod diagnostics;
pub mod observer;
pub mod runner;
pub mod spec;
pub mod validation;

pub use diagnostics::{ConfigIssue, ErrorCode};
pub use observer::{NoopObserver, PipelineObserver, StageReport, StageTimings, TracingObserver};
pub use runner::{InputSource, SummaryOutcome, SummaryPipeline, SummaryRequest};
pub use spec::ConfigSpec;
pub use validation::{ValidationEngine, ValidationReport};
