//! Summary export rendering
//!
//! Renders a summary string into a downloadable byte stream. Each renderer is
//! a pure transform of the summary text.

pub mod docx;
pub mod pdf;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::document::{DOCX_MIME, PDF_MIME, PLAIN_TEXT_MIME};
use crate::errors::{Result, SummarizeError};

/// Download format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    #[default]
    Text,
    Pdf,
    Docx,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Pdf => "pdf",
            Self::Docx => "docx",
        }
    }

    /// Default download file name
    pub fn file_name(&self) -> &'static str {
        match self {
            Self::Text => "summary.txt",
            Self::Pdf => "summary.pdf",
            Self::Docx => "summary.docx",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Text => PLAIN_TEXT_MIME,
            Self::Pdf => PDF_MIME,
            Self::Docx => DOCX_MIME,
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExportFormat {
    type Err = SummarizeError;

    fn from_str(value: &str) -> Result<Self> {
        match value.to_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "pdf" => Ok(Self::Pdf),
            "docx" | "word" => Ok(Self::Docx),
            _ => Err(SummarizeError::unsupported(value)),
        }
    }
}

/// A rendered download
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedExport {
    pub format: ExportFormat,
    pub bytes: Vec<u8>,
}

impl RenderedExport {
    pub fn file_name(&self) -> &'static str {
        self.format.file_name()
    }

    pub fn mime_type(&self) -> &'static str {
        self.format.mime_type()
    }
}

/// Render `summary` in the requested format.
pub fn render(summary: &str, format: ExportFormat) -> Result<RenderedExport> {
    let bytes = match format {
        ExportFormat::Text => summary.as_bytes().to_vec(),
        ExportFormat::Pdf => pdf::render(summary)?,
        ExportFormat::Docx => docx::render(summary)?,
    };
    Ok(RenderedExport { format, bytes })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document;

    #[test]
    fn test_parse_formats() {
        assert_eq!("TXT".parse::<ExportFormat>().unwrap(), ExportFormat::Text);
        assert_eq!("pdf".parse::<ExportFormat>().unwrap(), ExportFormat::Pdf);
        assert_eq!("Docx".parse::<ExportFormat>().unwrap(), ExportFormat::Docx);
        assert!(matches!(
            "rtf".parse::<ExportFormat>(),
            Err(SummarizeError::UnsupportedFormat { .. })
        ));
    }

    #[test]
    fn test_download_metadata() {
        let export = render("Short summary.", ExportFormat::Pdf).unwrap();
        assert_eq!(export.file_name(), "summary.pdf");
        assert_eq!(export.mime_type(), "application/pdf");
        assert_eq!(ExportFormat::Text.file_name(), "summary.txt");
    }

    #[test]
    fn test_text_round_trip() {
        let summary = "Résumé lines — with “quotes”. Second sentence.";
        let export = render(summary, ExportFormat::Text).unwrap();
        let back = document::extract(&export.bytes, document::DocumentKind::PlainText).unwrap();
        assert_eq!(back, summary);
    }

    #[test]
    fn test_docx_round_trip() {
        let summary = "The cat sat on the mat. The cat sat.";
        let export = render(summary, ExportFormat::Docx).unwrap();
        let back = document::extract(&export.bytes, document::DocumentKind::Docx).unwrap();
        assert_eq!(back, summary);
    }
}
