//! Stop-word sets
//!
//! English stop-word sets, loaded once per process and shared read-only
//! between summarizers. The default set is the NLTK English corpus; the
//! stopwords-iso list from the `stop-words` crate is available as an
//! alternative.

use std::sync::Arc;

use once_cell::sync::OnceCell;
use rustc_hash::FxHashSet;
use stop_words::{get, LANGUAGE};

use crate::types::StopwordSource;

static NLTK_ENGLISH: OnceCell<Arc<StopwordFilter>> = OnceCell::new();
static ISO_ENGLISH: OnceCell<Arc<StopwordFilter>> = OnceCell::new();

/// Load every shared stop-word set. Safe to call more than once.
pub fn init() {
    shared(StopwordSource::Nltk);
    shared(StopwordSource::Iso);
}

/// Whether the default stop-word set has been loaded.
pub fn is_ready() -> bool {
    NLTK_ENGLISH.get().is_some()
}

/// The process-wide filter for `source`, loading it on first use.
pub fn shared(source: StopwordSource) -> Arc<StopwordFilter> {
    let cell = match source {
        StopwordSource::Nltk => &NLTK_ENGLISH,
        StopwordSource::Iso => &ISO_ENGLISH,
    };
    cell.get_or_init(|| {
        let filter = StopwordFilter::from_source(source);
        tracing::debug!(source = ?source, words = filter.len(), "loaded stop words");
        Arc::new(filter)
    })
    .clone()
}

/// Case-insensitive stop-word set
#[derive(Debug, Clone, Default)]
pub struct StopwordFilter {
    /// Set of stopwords (lowercase, ASCII apostrophes)
    stopwords: FxHashSet<String>,
}

impl StopwordFilter {
    /// Create a filter from one of the bundled English lists
    pub fn from_source(source: StopwordSource) -> Self {
        match source {
            StopwordSource::Nltk => Self::from_list(NLTK_ENGLISH_WORDS),
            StopwordSource::Iso => Self {
                stopwords: get(LANGUAGE::English)
                    .iter()
                    .map(|s| normalize(s))
                    .collect(),
            },
        }
    }

    /// A filter that keeps every word
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_list(words: &[&str]) -> Self {
        Self {
            stopwords: words.iter().map(|w| normalize(w)).collect(),
        }
    }

    /// Extend the set, e.g. with configured extra stop words.
    pub fn add_stopwords<S: AsRef<str>>(&mut self, words: &[S]) {
        for word in words {
            self.stopwords.insert(normalize(word.as_ref()));
        }
    }

    /// Check if a word is a stopword, ignoring case
    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(&normalize(word))
    }

    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }
}

/// Lowercase and fold typographic apostrophes so "Don’t" matches "don't".
fn normalize(word: &str) -> String {
    word.to_lowercase().replace('\u{2019}', "'")
}

/// NLTK's English stop-word corpus.
const NLTK_ENGLISH_WORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn",
    "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn",
    "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan", "shan't",
    "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't", "wouldn",
    "wouldn't",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nltk_stopwords() {
        let filter = StopwordFilter::from_source(StopwordSource::Nltk);

        assert_eq!(filter.len(), 179);
        assert!(filter.is_stopword("the"));
        assert!(filter.is_stopword("The"));
        assert!(filter.is_stopword("don't"));
        assert!(filter.is_stopword("Don\u{2019}t"));
        assert!(!filter.is_stopword("machine"));
        assert!(!filter.is_stopword("night"));
    }

    #[test]
    fn test_iso_stopwords() {
        let filter = StopwordFilter::from_source(StopwordSource::Iso);

        assert!(filter.is_stopword("the"));
        assert!(filter.is_stopword("and"));
        assert!(!filter.is_stopword("summarizer"));
    }

    #[test]
    fn test_list_and_extension() {
        let mut filter = StopwordFilter::from_list(&["lorem", "ipsum"]);

        assert!(filter.is_stopword("lorem"));
        assert!(filter.is_stopword("Ipsum"));
        assert!(!filter.is_stopword("the"));

        filter.add_stopwords(&["Extra"]);
        assert!(filter.is_stopword("extra"));
    }

    #[test]
    fn test_empty_keeps_everything() {
        let empty = StopwordFilter::empty();
        assert!(empty.is_empty());
        assert!(!empty.is_stopword("the"));
    }

    #[test]
    fn test_shared_sets_are_loaded_once() {
        init();
        assert!(is_ready());

        let a = shared(StopwordSource::Nltk);
        let b = shared(StopwordSource::Nltk);
        assert!(Arc::ptr_eq(&a, &b));
    }
}
