//! Word tokenization
//!
//! Words follow Unicode UAX #29 word boundaries. Whitespace and punctuation
//! segments are dropped, so "cat." yields `cat` and "don't" stays whole.
//! Word counts for reporting use the cruder whitespace split instead.

use unicode_segmentation::UnicodeSegmentation;

/// Unicode-aware word tokenizer
#[derive(Debug, Clone, Copy, Default)]
pub struct WordTokenizer;

impl WordTokenizer {
    pub fn new() -> Self {
        Self
    }

    /// Split `text` into word tokens, borrowing from the input.
    pub fn tokenize<'a>(&self, text: &'a str) -> Vec<&'a str> {
        text.unicode_words().collect()
    }
}

/// Count whitespace-separated tokens. Runs of whitespace count as one
/// separator, so no empty tokens are produced.
pub fn whitespace_word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_punctuation_is_not_a_word() {
        let tokens = WordTokenizer::new().tokenize("The cat sat. Then, it left!");
        assert_eq!(tokens, vec!["The", "cat", "sat", "Then", "it", "left"]);
    }

    #[test]
    fn test_contractions_and_numbers_stay_whole() {
        let tokens = WordTokenizer::new().tokenize("Don't pay 3.50 for it");
        assert_eq!(tokens, vec!["Don't", "pay", "3.50", "for", "it"]);
    }

    #[test]
    fn test_unicode_words() {
        let tokens = WordTokenizer::new().tokenize("Café owners über-charge");
        assert_eq!(tokens, vec!["Café", "owners", "über", "charge"]);
    }

    #[test]
    fn test_whitespace_word_count_collapses_runs() {
        assert_eq!(whitespace_word_count("a  b\t\tc\n\nd"), 4);
        assert_eq!(whitespace_word_count("   "), 0);
        assert_eq!(whitespace_word_count("one, two. three!"), 3);
    }
}
