//! DOCX export: the summary as a single paragraph.

use std::io::Cursor;

use docx_rs::{Docx, Paragraph, Run};

use crate::errors::{Result, SummarizeError};
use crate::export::ExportFormat;

pub fn render(summary: &str) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    Docx::new()
        .add_paragraph(Paragraph::new().add_run(Run::new().add_text(summary)))
        .build()
        .pack(Cursor::new(&mut bytes))
        .map_err(|e| SummarizeError::export(ExportFormat::Docx, e.to_string()))?;
    Ok(bytes)
}
