//! Summarization components
//!
//! Provides extractive summarization by word-frequency sentence scoring:
//! normalized word weights, per-sentence score sums, and top-K selection.

pub mod engine;
pub mod frequency;
pub mod scoring;
pub mod selector;

pub use engine::Summarizer;
pub use frequency::WordFrequencyTable;
pub use scoring::SentenceScoreTable;
pub use selector::SentenceSelector;
