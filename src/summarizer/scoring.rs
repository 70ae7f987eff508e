//! Sentence scoring
//!
//! A sentence scores the sum of the weights of its words found in the
//! frequency table. Sentences of [`SENTENCE_WORD_LIMIT`] whitespace tokens or
//! more are skipped, and sentences without a scoring word are left out.

use crate::nlp::{whitespace_word_count, WordTokenizer};
use crate::summarizer::frequency::WordFrequencyTable;
use crate::types::{ScoredSentence, SENTENCE_WORD_LIMIT};

/// Scored candidates in document order
#[derive(Debug, Clone, Default)]
pub struct SentenceScoreTable {
    entries: Vec<ScoredSentence>,
}

impl SentenceScoreTable {
    /// Score every sentence against `frequencies`.
    ///
    /// Each sentence keeps its position as identity, so repeated sentences
    /// are separate candidates.
    pub fn build(
        sentences: &[&str],
        frequencies: &WordFrequencyTable,
        tokenizer: &WordTokenizer,
    ) -> Self {
        let mut entries = Vec::new();

        for (index, sentence) in sentences.iter().enumerate() {
            if whitespace_word_count(sentence) >= SENTENCE_WORD_LIMIT {
                continue;
            }

            let lowered = sentence.to_lowercase();
            let mut score = None;
            for word in tokenizer.tokenize(&lowered) {
                if let Some(weight) = frequencies.weight(word) {
                    *score.get_or_insert(0.0) += weight;
                }
            }

            if let Some(score) = score {
                entries.push(ScoredSentence {
                    index,
                    text: (*sentence).to_string(),
                    score,
                });
            }
        }

        Self { entries }
    }

    pub fn entries(&self) -> &[ScoredSentence] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<ScoredSentence> {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
