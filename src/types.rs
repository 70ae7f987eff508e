//! Core types shared across the summarizer.

use serde::{Deserialize, Serialize};

/// Maximum number of sentences in a summary.
pub const MAX_SUMMARY_SENTENCES: usize = 7;

/// Sentences with this many whitespace-separated tokens or more are never scored.
pub const SENTENCE_WORD_LIMIT: usize = 30;

/// How words are keyed in the frequency table.
///
/// Stop-word lookup always uses the lowercase form; this only decides whether
/// `Cat` and `cat` share one entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FrequencyKeying {
    /// Keys are lowercased before counting.
    #[default]
    CaseFolded,
    /// Keys keep their original case. Sentence scoring looks words up in
    /// lowercase, so capitalized occurrences only score through their
    /// lowercase twins.
    CasePreserved,
}

impl FrequencyKeying {
    /// Produce the table key for a token.
    pub fn key(&self, word: &str) -> String {
        match self {
            Self::CaseFolded => word.to_lowercase(),
            Self::CasePreserved => word.to_string(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CaseFolded => "case_folded",
            Self::CasePreserved => "case_preserved",
        }
    }
}

/// Which English stop-word list to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopwordSource {
    /// The 179-word NLTK English corpus.
    #[default]
    Nltk,
    /// The stopwords-iso English list bundled with the `stop-words` crate.
    Iso,
}

/// Configuration for the summarization engine
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SummarizerConfig {
    /// Frequency-table keying
    pub keying: FrequencyKeying,
    /// Stop-word list
    pub stopwords: StopwordSource,
    /// Additional stop words, matched case-insensitively
    pub extra_stopwords: Vec<String>,
}

/// A sentence that received a nonzero score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredSentence {
    /// Position of the sentence in the segmented input
    pub index: usize,
    /// The sentence exactly as segmented from the input
    pub text: String,
    /// Sum of the weights of its scoring words
    pub score: f64,
}

/// Result of summarizing one input.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    /// Selected sentences joined by single spaces
    pub text: String,
    /// Selected sentences in output (score-descending) order
    pub sentences: Vec<ScoredSentence>,
    /// Whitespace-split word count of the input
    pub input_word_count: usize,
    /// Whitespace-split word count of `text`
    pub summary_word_count: usize,
}

impl Summary {
    /// Number of selected sentences
    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }
}
