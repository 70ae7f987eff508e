//! The summarization engine
//!
//! Ties tokenization, frequency weighting, sentence scoring and selection
//! together. A [`Summarizer`] holds no per-request state, so one instance can
//! serve any number of threads.

use std::sync::Arc;

use rayon::prelude::*;

use crate::errors::{InputOrigin, Result, SummarizeError};
use crate::nlp::{stopwords, whitespace_word_count, SentenceSplitter, StopwordFilter, WordTokenizer};
use crate::summarizer::frequency::WordFrequencyTable;
use crate::summarizer::scoring::SentenceScoreTable;
use crate::summarizer::selector::SentenceSelector;
use crate::types::{Summary, SummarizerConfig};

/// Frequency-based extractive summarizer
#[derive(Debug, Clone)]
pub struct Summarizer {
    config: SummarizerConfig,
    stopwords: Arc<StopwordFilter>,
    tokenizer: WordTokenizer,
    splitter: SentenceSplitter,
    selector: SentenceSelector,
}

impl Default for Summarizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Summarizer {
    /// Create a summarizer with default config
    pub fn new() -> Self {
        Self::with_config(SummarizerConfig::default())
    }

    /// Create with custom config
    pub fn with_config(config: SummarizerConfig) -> Self {
        let shared = stopwords::shared(config.stopwords);
        let stopwords = if config.extra_stopwords.is_empty() {
            shared
        } else {
            let mut filter = (*shared).clone();
            filter.add_stopwords(&config.extra_stopwords);
            Arc::new(filter)
        };

        Self {
            config,
            stopwords,
            tokenizer: WordTokenizer::new(),
            splitter: SentenceSplitter::new(),
            selector: SentenceSelector::new(),
        }
    }

    pub fn config(&self) -> &SummarizerConfig {
        &self.config
    }

    /// Summarize `raw` into at most seven of its own sentences.
    ///
    /// Sentences come back highest score first, not in document order.
    pub fn summarize(&self, raw: &str) -> Result<Summary> {
        if raw.trim().is_empty() {
            return Err(SummarizeError::EmptyInput(InputOrigin::Text));
        }

        let tokens = self.tokenizer.tokenize(raw);
        let frequencies = WordFrequencyTable::build(&tokens, &self.stopwords, self.config.keying)?;

        let sentences = self.splitter.split(raw);
        let scores = SentenceScoreTable::build(&sentences, &frequencies, &self.tokenizer);
        tracing::debug!(
            tokens = tokens.len(),
            vocabulary = frequencies.len(),
            sentences = sentences.len(),
            candidates = scores.len(),
            "scored sentences"
        );

        let selected = self.selector.select(scores.into_entries());
        let text = selected
            .iter()
            .map(|s| s.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");

        Ok(Summary {
            input_word_count: whitespace_word_count(raw),
            summary_word_count: whitespace_word_count(&text),
            text,
            sentences: selected,
        })
    }

    /// Summarize independent inputs in parallel.
    pub fn summarize_batch(&self, inputs: &[&str]) -> Vec<Result<Summary>> {
        inputs.par_iter().map(|raw| self.summarize(raw)).collect()
    }
}
