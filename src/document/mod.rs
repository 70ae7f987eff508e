//! Document text extraction
//!
//! Turns an uploaded payload into plain text for the summarizer. Three
//! content types are understood: plain text, PDF and DOCX. Anything else
//! extracts to an empty string, which the request pipeline reports as an
//! empty document.

pub mod docx;
pub mod pdf;

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::errors::{Result, SummarizeError};

pub const PLAIN_TEXT_MIME: &str = "text/plain";
pub const PDF_MIME: &str = "application/pdf";
pub const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// Supported upload kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    PlainText,
    Pdf,
    Docx,
}

impl DocumentKind {
    /// Resolve a MIME content type. Parameters such as `; charset=utf-8` are
    /// ignored.
    pub fn from_content_type(content_type: &str) -> Result<Self> {
        let essence = content_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();
        match essence.as_str() {
            PLAIN_TEXT_MIME => Ok(Self::PlainText),
            PDF_MIME => Ok(Self::Pdf),
            DOCX_MIME => Ok(Self::Docx),
            _ => Err(SummarizeError::unsupported(content_type)),
        }
    }

    /// Guess the kind from a file name's extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let guess = mime_guess::from_path(path)
            .first_raw()
            .ok_or_else(|| SummarizeError::unsupported(path.display().to_string()))?;
        Self::from_content_type(guess)
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::PlainText => PLAIN_TEXT_MIME,
            Self::Pdf => PDF_MIME,
            Self::Docx => DOCX_MIME,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PlainText => "text",
            Self::Pdf => "pdf",
            Self::Docx => "docx",
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Extract text from a payload with a declared content type.
///
/// Unsupported content types are logged and yield an empty string.
pub fn extract_text(payload: &[u8], content_type: &str) -> Result<String> {
    match DocumentKind::from_content_type(content_type) {
        Ok(kind) => extract(payload, kind),
        Err(err) => {
            warn!(error = %err, "ignoring upload with unsupported content type");
            Ok(String::new())
        }
    }
}

/// Extract text from a payload of a known kind.
pub fn extract(payload: &[u8], kind: DocumentKind) -> Result<String> {
    match kind {
        DocumentKind::PlainText => decode_plain_text(payload),
        DocumentKind::Pdf => pdf::extract_text(payload),
        DocumentKind::Docx => docx::extract_text(payload),
    }
}

/// Strict UTF-8 with an optional byte-order mark.
fn decode_plain_text(payload: &[u8]) -> Result<String> {
    let payload = payload.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(payload);
    String::from_utf8(payload.to_vec())
        .map_err(|e| SummarizeError::extraction(DocumentKind::PlainText, e.to_string()))
}
