//! End-to-end tests for summarization requests.

use std::io::Cursor;

use docx_rs::{Docx, Paragraph, Run};
use rapid_summarizer::document::{DOCX_MIME, PDF_MIME, PLAIN_TEXT_MIME};
use rapid_summarizer::export::{self, ExportFormat};
use rapid_summarizer::pipeline::{NoopObserver, StageTimings};
use rapid_summarizer::{
    ConfigSpec, DocumentKind, FrequencyKeying, InputOrigin, SummarizeError, SummaryPipeline,
    SummaryRequest,
};

const ARTICLE: &str = "Solar panels convert sunlight into electricity. \
Modern solar panels are cheaper than ever. \
Many homes now install solar panels on their roofs. \
Wind turbines also generate electricity. \
Batteries store electricity for cloudy days. \
Grid operators balance supply and demand. \
Policy incentives helped solar adoption grow. \
Critics worry about manufacturing waste. \
Recycling programs are starting to appear.";

fn run(request: SummaryRequest) -> rapid_summarizer::Result<rapid_summarizer::pipeline::SummaryOutcome> {
    SummaryPipeline::new().run(&request, &mut NoopObserver)
}

#[test]
fn text_request_caps_at_seven_sentences() {
    let outcome = run(SummaryRequest::text(ARTICLE, ExportFormat::Text)).unwrap();
    let summary = &outcome.summary;

    assert_eq!(summary.len(), 7);
    assert_eq!(summary.input_word_count, ARTICLE.split_whitespace().count());
    assert!(summary.summary_word_count < summary.input_word_count);
    assert_eq!(outcome.export.mime_type(), "text/plain");
    assert_eq!(outcome.export.bytes, summary.text.as_bytes());
}

#[test]
fn text_request_ranks_solar_sentences_first() {
    let outcome = run(SummaryRequest::text(ARTICLE, ExportFormat::Text)).unwrap();
    let top: Vec<_> = outcome.summary.sentences.iter().take(3).map(|s| s.index).collect();
    assert_eq!(top, vec![0, 2, 1]);
}

#[test]
fn plain_text_upload_matches_text_request() {
    let typed = run(SummaryRequest::text(ARTICLE, ExportFormat::Text)).unwrap();
    let uploaded = run(SummaryRequest::document(
        ARTICLE.as_bytes().to_vec(),
        PLAIN_TEXT_MIME,
        ExportFormat::Text,
    ))
    .unwrap();
    assert_eq!(typed.summary, uploaded.summary);
}

#[test]
fn content_type_parameters_are_ignored() {
    let outcome = run(SummaryRequest::document(
        ARTICLE.as_bytes().to_vec(),
        "text/plain; charset=utf-8",
        ExportFormat::Text,
    ))
    .unwrap();
    assert_eq!(outcome.summary.len(), 7);
}

#[test]
fn docx_upload_and_export() {
    let docx = export::render(ARTICLE, ExportFormat::Docx).unwrap();
    assert_eq!(docx.file_name(), "summary.docx");

    let outcome = run(SummaryRequest::document(docx.bytes, DOCX_MIME, ExportFormat::Docx)).unwrap();
    assert_eq!(outcome.summary.input_word_count, ARTICLE.split_whitespace().count());
    assert!(outcome.export.bytes.starts_with(b"PK"));
}

#[test]
fn hard_wrapped_upload_keeps_whole_sentences() {
    let text = "Solar panels convert sunlight into electricity for\n\
homes and businesses across the country. Modern solar\n\
panels are cheaper than ever before.\n\
\n\
Wind turbines also generate electricity. Batteries store\n\
electricity for cloudy days.\n";
    let expected = [
        "Solar panels convert sunlight into electricity for\nhomes and businesses across the country.",
        "Modern solar\npanels are cheaper than ever before.",
        "Wind turbines also generate electricity.",
        "Batteries store\nelectricity for cloudy days.",
    ];

    let outcome = run(SummaryRequest::document(
        text.as_bytes().to_vec(),
        PLAIN_TEXT_MIME,
        ExportFormat::Text,
    ))
    .unwrap();
    let mut selected: Vec<_> = outcome.summary.sentences.iter().map(|s| s.text.as_str()).collect();
    selected.sort_unstable();
    let mut expected = expected.to_vec();
    expected.sort_unstable();
    assert_eq!(selected, expected);
    for sentence in &selected {
        assert!(text.contains(sentence));
    }
}

#[test]
fn multi_paragraph_docx_upload_keeps_whole_sentences() {
    let mut docx = Docx::new();
    for paragraph in [
        "Solar panels convert sunlight into electricity for",
        "homes and businesses across the country.",
        "Wind turbines also generate electricity.",
    ] {
        docx = docx.add_paragraph(Paragraph::new().add_run(Run::new().add_text(paragraph)));
    }
    let mut bytes = Vec::new();
    docx.build().pack(Cursor::new(&mut bytes)).unwrap();

    let outcome = run(SummaryRequest::document(bytes, DOCX_MIME, ExportFormat::Text)).unwrap();
    let mut selected: Vec<_> = outcome.summary.sentences.iter().map(|s| s.text.as_str()).collect();
    selected.sort_unstable();
    assert_eq!(
        selected,
        vec![
            "Solar panels convert sunlight into electricity for\nhomes and businesses across the country.",
            "Wind turbines also generate electricity.",
        ]
    );
}

#[test]
fn pdf_export_is_a_pdf() {
    let outcome = run(SummaryRequest::text(ARTICLE, ExportFormat::Pdf)).unwrap();
    assert_eq!(outcome.export.file_name(), "summary.pdf");
    assert_eq!(outcome.export.mime_type(), PDF_MIME);
    assert!(outcome.export.bytes.starts_with(b"%PDF"));
}

#[test]
fn blank_text_is_rejected() {
    let err = run(SummaryRequest::text("\n\t  ", ExportFormat::Pdf)).unwrap_err();
    assert!(matches!(err, SummarizeError::EmptyInput(InputOrigin::Text)));
}

#[test]
fn blank_document_is_rejected() {
    let err = run(SummaryRequest::document(
        b"   \n".to_vec(),
        PLAIN_TEXT_MIME,
        ExportFormat::Text,
    ))
    .unwrap_err();
    assert_eq!(err.user_message(), "The uploaded document is empty");
}

#[test]
fn invalid_utf8_upload_reports_processing_error() {
    let err = run(SummaryRequest::document(
        vec![0x66, 0x6f, 0xff, 0xfe],
        PLAIN_TEXT_MIME,
        ExportFormat::Text,
    ))
    .unwrap_err();
    assert!(matches!(
        err,
        SummarizeError::Extraction {
            kind: DocumentKind::PlainText,
            ..
        }
    ));
    assert!(err.user_message().starts_with("Error processing file:"));
}

#[test]
fn stop_word_text_is_empty_frequency() {
    let err = run(SummaryRequest::text("It is what it is.", ExportFormat::Text)).unwrap_err();
    assert!(matches!(err, SummarizeError::EmptyFrequency));
}

#[test]
fn failures_do_not_poison_the_pipeline() {
    let pipeline = SummaryPipeline::new();
    let bad = SummaryRequest::document(b"garbage".to_vec(), DOCX_MIME, ExportFormat::Text);
    assert!(pipeline.run(&bad, &mut NoopObserver).is_err());

    let good = SummaryRequest::text(ARTICLE, ExportFormat::Text);
    assert!(pipeline.run(&good, &mut NoopObserver).is_ok());
}

#[test]
fn configured_pipeline_uses_case_preserved_keys() {
    let spec = ConfigSpec::from_json(r#"{ "v": 1, "keying": "case_preserved" }"#).unwrap();
    let pipeline = SummaryPipeline::from_spec(&spec).unwrap();
    assert_eq!(
        pipeline.summarizer().config().keying,
        FrequencyKeying::CasePreserved
    );

    let mut timings = StageTimings::new();
    let request = SummaryRequest::text("Rust compiles. Rust checks. Go runs.", ExportFormat::Text);
    let outcome = pipeline.run(&request, &mut timings).unwrap();
    // Capitalized keys never match the lowercased sentence lookup.
    let scores: Vec<_> = outcome.summary.sentences.iter().map(|s| s.score).collect();
    assert_eq!(scores, vec![0.5, 0.5, 0.5]);
    assert_eq!(timings.stages.len(), 3);
}
