//! Rapid Summarizer: frequency-based extractive summarization
//!
//! Scores every sentence of a text by the normalized frequency of its
//! content words and returns up to seven of the highest-scoring sentences
//! verbatim. Plain text, PDF and DOCX uploads can be summarized, and the
//! result can be exported as plain text, PDF or DOCX.
//!
//! # Example
//!
//! ```rust,ignore
//! use rapid_summarizer::summarize;
//!
//! let summary = summarize("The cat sat. The cat sat on the mat. A dog barked loudly at night.")?;
//! println!("{}", summary.text);
//! println!("Input Length: {} words", summary.input_word_count);
//! ```

pub mod document;
pub mod errors;
pub mod export;
pub mod logging;
pub mod nlp;
pub mod pipeline;
pub mod summarizer;
pub mod types;

use std::path::Path;

pub use document::DocumentKind;
pub use errors::{InputOrigin, Result, SummarizeError};
pub use export::{ExportFormat, RenderedExport};
pub use pipeline::{ConfigSpec, SummaryPipeline, SummaryRequest};
pub use summarizer::Summarizer;
pub use types::{
    FrequencyKeying, ScoredSentence, StopwordSource, Summary, SummarizerConfig,
    MAX_SUMMARY_SENTENCES, SENTENCE_WORD_LIMIT,
};

/// Summarize `raw` with the default configuration.
pub fn summarize(raw: &str) -> Result<Summary> {
    Summarizer::new().summarize(raw)
}

/// Load the shared stop-word lists. Later calls are no-ops.
pub fn init() {
    nlp::stopwords::init();
}

/// Whether [`init`] has completed.
pub fn is_ready() -> bool {
    nlp::stopwords::is_ready()
}

/// Read a config file and validate it. Warnings are logged, errors are
/// returned joined into one [`SummarizeError::Config`].
pub fn load_config(path: &Path) -> Result<ConfigSpec> {
    let spec = ConfigSpec::from_file(path)?;
    let report = pipeline::ValidationEngine::with_defaults().validate(&spec);
    for warning in report.warnings() {
        tracing::warn!(%warning, path = %path.display(), "config warning");
    }
    report.into_result()?;
    Ok(spec)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        init();
        init();
        assert!(is_ready());
    }

    #[test]
    fn test_summarize_shortcut() {
        let summary = summarize("Rust is fast. Rust is safe. Coffee is hot.").unwrap();
        assert_eq!(summary.sentences[0].text, "Rust is fast.");
        assert_eq!(summary.input_word_count, 9);
    }

    #[test]
    fn test_load_config_rejects_bad_version() {
        let path = std::env::temp_dir().join(format!(
            "rapid-summarizer-bad-config-{}.json",
            std::process::id()
        ));
        std::fs::write(&path, r#"{ "v": 9 }"#).unwrap();

        let err = load_config(&path).unwrap_err();
        std::fs::remove_file(&path).ok();
        assert!(matches!(err, SummarizeError::Config(_)));
    }
}
