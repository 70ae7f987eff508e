//! PDF text extraction
//!
//! Page texts are concatenated in page order with no separator.

use lopdf::Document;

use crate::document::DocumentKind;
use crate::errors::{Result, SummarizeError};

pub fn extract_text(payload: &[u8]) -> Result<String> {
    let doc = Document::load_mem(payload)
        .map_err(|e| SummarizeError::extraction(DocumentKind::Pdf, e.to_string()))?;

    let mut text = String::new();
    for page_number in doc.get_pages().keys() {
        let page_text = doc.extract_text(&[*page_number]).map_err(|e| {
            SummarizeError::extraction(DocumentKind::Pdf, format!("page {page_number}: {e}"))
        })?;
        text.push_str(&page_text);
    }

    tracing::debug!(pages = doc.get_pages().len(), chars = text.len(), "extracted pdf text");
    Ok(text)
}
