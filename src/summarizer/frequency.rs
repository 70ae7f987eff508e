//! Normalized word frequencies
//!
//! Counts every non-stop-word token and scales the counts by the largest one,
//! so the most frequent word weighs exactly 1.0.

use rustc_hash::FxHashMap;

use crate::errors::{Result, SummarizeError};
use crate::nlp::StopwordFilter;
use crate::types::FrequencyKeying;

/// Word -> weight in (0, 1]
#[derive(Debug, Clone, Default)]
pub struct WordFrequencyTable {
    weights: FxHashMap<String, f64>,
    max_count: usize,
}

impl WordFrequencyTable {
    /// Build the table from word tokens.
    ///
    /// Fails with [`SummarizeError::EmptyFrequency`] when every token is a
    /// stop word, since there is no maximum to normalize by.
    pub fn build(
        tokens: &[&str],
        stopwords: &StopwordFilter,
        keying: FrequencyKeying,
    ) -> Result<Self> {
        let mut counts: FxHashMap<String, usize> = FxHashMap::default();
        for token in tokens {
            if stopwords.is_stopword(token) {
                continue;
            }
            *counts.entry(keying.key(token)).or_insert(0) += 1;
        }

        let max_count = counts
            .values()
            .copied()
            .max()
            .ok_or(SummarizeError::EmptyFrequency)?;

        let weights = counts
            .into_iter()
            .map(|(word, count)| (word, count as f64 / max_count as f64))
            .collect();

        Ok(Self { weights, max_count })
    }

    /// Weight of `word`, if it is in the table
    pub fn weight(&self, word: &str) -> Option<f64> {
        self.weights.get(word).copied()
    }

    /// Raw count of the most frequent word
    pub fn max_count(&self) -> usize {
        self.max_count
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.weights.iter().map(|(w, &s)| (w.as_str(), s))
    }
}
