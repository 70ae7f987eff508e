//! Top-K sentence selection
//!
//! Picks the highest-scoring sentences and returns them best first. The sort
//! is stable, so equal scores keep document order.

use crate::types::{ScoredSentence, MAX_SUMMARY_SENTENCES};

/// Score-ordered sentence selector
#[derive(Debug, Clone, Copy, Default)]
pub struct SentenceSelector;

impl SentenceSelector {
    pub fn new() -> Self {
        Self
    }

    /// Select up to [`MAX_SUMMARY_SENTENCES`] sentences by descending score.
    ///
    /// `candidates` must be in document order for ties to resolve to the
    /// earliest sentence.
    pub fn select(&self, mut candidates: Vec<ScoredSentence>) -> Vec<ScoredSentence> {
        candidates.sort_by(|a, b| b.score.total_cmp(&a.score));
        candidates.truncate(MAX_SUMMARY_SENTENCES);
        candidates
    }
}
