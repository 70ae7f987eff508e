//! Error types for summarization requests.
//!
//! Every failure is scoped to one request. The surface reports it through
//! [`SummarizeError::user_message`] and carries on.

use std::fmt;

use thiserror::Error;

use crate::document::DocumentKind;
use crate::export::ExportFormat;

/// Result type alias for summarizer operations.
pub type Result<T> = std::result::Result<T, SummarizeError>;

/// Where the text of a request came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOrigin {
    /// Text typed or passed directly
    Text,
    /// Text extracted from an uploaded document
    Document,
}

impl fmt::Display for InputOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => f.write_str("input text"),
            Self::Document => f.write_str("uploaded document"),
        }
    }
}

/// Errors that can occur while handling a summarization request.
#[derive(Debug, Error)]
pub enum SummarizeError {
    /// Input is blank or whitespace-only.
    #[error("nothing to summarize: the {0} is empty")]
    EmptyInput(InputOrigin),

    /// Every word was removed by the stop-word filter.
    #[error("nothing summarizable: every word is a stop word")]
    EmptyFrequency,

    /// Document decoding or parsing failed.
    #[error("failed to extract text from {kind} document: {reason}")]
    Extraction { kind: DocumentKind, reason: String },

    /// Content type or export format is not one of the supported kinds.
    #[error("unsupported format: {content_type}")]
    UnsupportedFormat { content_type: String },

    /// Rendering the summary into an export format failed.
    #[error("failed to render {format} export: {reason}")]
    Export { format: ExportFormat, reason: String },

    /// Configuration could not be loaded or did not validate.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// I/O error while reading input or writing output.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization failed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl SummarizeError {
    /// Create an extraction error.
    #[must_use]
    pub fn extraction(kind: DocumentKind, reason: impl Into<String>) -> Self {
        Self::Extraction {
            kind,
            reason: reason.into(),
        }
    }

    /// Create an unsupported format error.
    #[must_use]
    pub fn unsupported(content_type: impl Into<String>) -> Self {
        Self::UnsupportedFormat {
            content_type: content_type.into(),
        }
    }

    /// Create an export error.
    #[must_use]
    pub fn export(format: ExportFormat, reason: impl Into<String>) -> Self {
        Self::Export {
            format,
            reason: reason.into(),
        }
    }

    /// Message shown to the person who made the request.
    pub fn user_message(&self) -> String {
        match self {
            Self::EmptyInput(InputOrigin::Text) => "Please enter some text to summarize".to_string(),
            Self::EmptyInput(InputOrigin::Document) => "The uploaded document is empty".to_string(),
            Self::EmptyFrequency => {
                "Nothing to summarize: the text contains only stop words".to_string()
            }
            Self::Extraction { .. } | Self::UnsupportedFormat { .. } => {
                format!("Error processing file: {self}")
            }
            _ => self.to_string(),
        }
    }
}
