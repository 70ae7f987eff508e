//! Pipeline runner for one summarization request, from input to download.
//!
//! [`SummaryPipeline::run`] executes three stages in order, notifying a
//! [`PipelineObserver`] at each boundary:
//!
//! 1. Extract text (documents only)
//! 2. Summarize
//! 3. Render the export
//!
//! Any failure ends that request only. The pipeline holds no per-request
//! state and can be shared across threads.

use crate::document;
use crate::errors::{InputOrigin, Result, SummarizeError};
use crate::export::{self, ExportFormat, RenderedExport};
use crate::pipeline::observer::{
    PipelineObserver, StageClock, StageReport, STAGE_EXTRACT, STAGE_RENDER, STAGE_SUMMARIZE,
};
use crate::pipeline::spec::ConfigSpec;
use crate::pipeline::validation::ValidationEngine;
use crate::summarizer::Summarizer;
use crate::types::Summary;

/// Enter a tracing span for a pipeline stage.
macro_rules! trace_stage {
    ($name:expr) => {
        let _span = tracing::info_span!("pipeline_stage", stage = $name).entered();
    };
}

/// Where the text to summarize comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Text entered directly
    Text(String),
    /// An uploaded document with its declared MIME type
    Document { bytes: Vec<u8>, content_type: String },
}

impl InputSource {
    pub fn origin(&self) -> InputOrigin {
        match self {
            Self::Text(_) => InputOrigin::Text,
            Self::Document { .. } => InputOrigin::Document,
        }
    }
}

/// One summarization request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryRequest {
    pub input: InputSource,
    pub format: ExportFormat,
}

impl SummaryRequest {
    pub fn text(text: impl Into<String>, format: ExportFormat) -> Self {
        Self {
            input: InputSource::Text(text.into()),
            format,
        }
    }

    pub fn document(
        bytes: Vec<u8>,
        content_type: impl Into<String>,
        format: ExportFormat,
    ) -> Self {
        Self {
            input: InputSource::Document {
                bytes,
                content_type: content_type.into(),
            },
            format,
        }
    }
}

/// Result of a successful request
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryOutcome {
    pub summary: Summary,
    pub export: RenderedExport,
}

/// Request pipeline around a [`Summarizer`]
#[derive(Debug, Clone, Default)]
pub struct SummaryPipeline {
    summarizer: Summarizer,
}

impl SummaryPipeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_summarizer(summarizer: Summarizer) -> Self {
        Self { summarizer }
    }

    /// Build from a parsed config, rejecting it if validation fails.
    /// Warnings are logged.
    pub fn from_spec(spec: &ConfigSpec) -> Result<Self> {
        let report = ValidationEngine::with_defaults().validate(spec);
        for warning in report.warnings() {
            tracing::warn!(%warning, "config warning");
        }
        report.into_result()?;
        Ok(Self::with_summarizer(Summarizer::with_config(
            spec.summarizer_config(),
        )))
    }

    pub fn summarizer(&self) -> &Summarizer {
        &self.summarizer
    }

    /// Execute the request.
    pub fn run(
        &self,
        request: &SummaryRequest,
        observer: &mut impl PipelineObserver,
    ) -> Result<SummaryOutcome> {
        let origin = request.input.origin();

        // Stage 1: Extract
        let raw = {
            trace_stage!(STAGE_EXTRACT);
            observer.on_stage_start(STAGE_EXTRACT);
            let clock = StageClock::start();
            let raw = match &request.input {
                InputSource::Text(text) => text.clone(),
                InputSource::Document {
                    bytes,
                    content_type,
                } => document::extract_text(bytes, content_type)?,
            };
            let report = StageReport::new(clock.elapsed()).with_output_len(raw.len());
            observer.on_stage_end(STAGE_EXTRACT, &report);
            raw
        };

        if raw.trim().is_empty() {
            return Err(SummarizeError::EmptyInput(origin));
        }

        // Stage 2: Summarize
        let summary = {
            trace_stage!(STAGE_SUMMARIZE);
            observer.on_stage_start(STAGE_SUMMARIZE);
            let clock = StageClock::start();
            let summary = self.summarizer.summarize(&raw)?;
            let report = StageReport::new(clock.elapsed()).with_output_len(summary.text.len());
            observer.on_stage_end(STAGE_SUMMARIZE, &report);
            observer.on_summary(&summary);
            summary
        };

        // Stage 3: Render
        let export = {
            trace_stage!(STAGE_RENDER);
            observer.on_stage_start(STAGE_RENDER);
            let clock = StageClock::start();
            let export = export::render(&summary.text, request.format)?;
            let report = StageReport::new(clock.elapsed()).with_output_len(export.bytes.len());
            observer.on_stage_end(STAGE_RENDER, &report);
            export
        };

        Ok(SummaryOutcome { summary, export })
    }
}
