//! DOCX text extraction
//!
//! Body paragraphs are joined with newlines. Hyperlink text is kept. Tables
//! and other non-paragraph blocks are skipped.

use docx_rs::{read_docx, DocumentChild, Paragraph, ParagraphChild, RunChild};

use crate::document::DocumentKind;
use crate::errors::{Result, SummarizeError};

pub fn extract_text(payload: &[u8]) -> Result<String> {
    let docx = read_docx(payload)
        .map_err(|e| SummarizeError::extraction(DocumentKind::Docx, e.to_string()))?;

    let paragraphs: Vec<String> = docx
        .document
        .children
        .iter()
        .filter_map(|child| match child {
            DocumentChild::Paragraph(paragraph) => Some(paragraph_text(paragraph)),
            _ => None,
        })
        .collect();

    Ok(paragraphs.join("\n"))
}

fn paragraph_text(paragraph: &Paragraph) -> String {
    let mut text = String::new();
    push_children(&paragraph.children, &mut text);
    text
}

/// Runs, including those nested in hyperlinks.
fn push_children(children: &[ParagraphChild], text: &mut String) {
    for child in children {
        match child {
            ParagraphChild::Run(run) => {
                for run_child in &run.children {
                    if let RunChild::Text(t) = run_child {
                        text.push_str(&t.text);
                    }
                }
            }
            ParagraphChild::Hyperlink(link) => push_children(&link.children, text),
            _ => {}
        }
    }
}
