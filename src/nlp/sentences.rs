//! Sentence segmentation
//!
//! Sentence boundaries come from Unicode UAX #29, which already keeps decimal
//! numbers ("3.14") and lowercase continuations ("e.g. the") together. Three
//! rules sit on top of it:
//!
//! - A fragment ending in a common abbreviation ("Dr.", "vs.") is joined with
//!   the fragment that follows.
//! - A single capital letter before a dot is an initial, and is joined, only
//!   when the word before it is capitalized or absent ("John F. Kennedy",
//!   "J. R. Tolkien"). After a lowercase word it ends the sentence, so
//!   "Take vitamin C. It helps." stays two sentences. The cost is that
//!   "Follow Plan B. Then rest." reads as one.
//! - UAX #29 breaks after every line break. A fragment cut at a line break
//!   without terminal punctuation is a hard-wrapped line and continues on
//!   the next line. A blank line always ends the sentence.
//!
//! Returned sentences are trimmed slices of the input, so every sentence is
//! verbatim source text, line breaks included.

use unicode_segmentation::UnicodeSegmentation;

/// Abbreviations that almost never end a sentence (lowercase, no final dot).
const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "rev", "hon", "gen", "sen", "rep", "gov", "lt", "col",
    "sgt", "capt", "cmdr", "st", "mt", "vs", "e.g", "i.e", "cf", "viz", "approx", "fig",
    "vol", "pp", "jan", "feb", "mar", "apr", "jun", "jul", "aug", "sep", "sept", "oct", "nov",
    "dec",
];

/// Rule-based sentence splitter
#[derive(Debug, Clone, Copy, Default)]
pub struct SentenceSplitter;

impl SentenceSplitter {
    pub fn new() -> Self {
        Self
    }

    /// Split `text` into sentences in document order.
    pub fn split<'a>(&self, text: &'a str) -> Vec<&'a str> {
        let mut sentences = Vec::new();
        let mut pending: Option<usize> = None;

        for (offset, fragment) in text.split_sentence_bound_indices() {
            if fragment.trim().is_empty() {
                // blank line
                if ends_line(fragment) {
                    if let Some(begin) = pending.take() {
                        push_trimmed(&mut sentences, &text[begin..offset]);
                    }
                }
                continue;
            }

            let begin = pending.unwrap_or(offset);
            if ends_with_abbreviation(fragment) || is_wrapped_line(fragment) {
                pending = Some(begin);
                continue;
            }
            push_trimmed(&mut sentences, &text[begin..offset + fragment.len()]);
            pending = None;
        }

        if let Some(begin) = pending {
            push_trimmed(&mut sentences, &text[begin..]);
        }

        sentences
    }
}

fn push_trimmed<'a>(sentences: &mut Vec<&'a str>, candidate: &'a str) {
    let trimmed = candidate.trim();
    if !trimmed.is_empty() {
        sentences.push(trimmed);
    }
}

fn ends_line(fragment: &str) -> bool {
    fragment.ends_with(|c: char| matches!(c, '\n' | '\r' | '\u{85}' | '\u{2028}' | '\u{2029}'))
}

/// A fragment cut at a line break before any terminal punctuation.
fn is_wrapped_line(fragment: &str) -> bool {
    ends_line(fragment) && !ends_with_terminal(fragment.trim_end())
}

/// Whether `text` ends in `.`, `!`, `?` or `…`, possibly followed by closing
/// quotes or brackets.
fn ends_with_terminal(text: &str) -> bool {
    text.trim_end_matches(|c: char| {
        matches!(c, '"' | '\'' | '\u{201d}' | '\u{2019}' | ')' | ']' | '}' | '\u{bb}')
    })
    .ends_with(|c: char| matches!(c, '.' | '!' | '?' | '\u{2026}'))
}

/// Whether a fragment's final token is an abbreviation or an initial.
fn ends_with_abbreviation(fragment: &str) -> bool {
    let Some(stem) = fragment.trim_end().strip_suffix('.') else {
        return false;
    };
    let mut tokens = stem.split_whitespace().rev();
    let last = tokens
        .next()
        .unwrap_or_default()
        .trim_start_matches(|c: char| !c.is_alphanumeric());

    let mut chars = last.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => c.is_uppercase() && tokens.next().map_or(true, is_capitalized),
        (Some(_), Some(_)) => ABBREVIATIONS.contains(&last.to_lowercase().as_str()),
        _ => false,
    }
}

fn is_capitalized(token: &str) -> bool {
    token
        .chars()
        .find(|c| c.is_alphanumeric())
        .is_some_and(char::is_uppercase)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_punctuation() {
        let sentences = SentenceSplitter::new().split("The cat sat. Did it? Yes! It did.");
        assert_eq!(sentences, vec!["The cat sat.", "Did it?", "Yes!", "It did."]);
    }

    #[test]
    fn test_titles_do_not_split() {
        let sentences =
            SentenceSplitter::new().split("Dr. Smith arrived late. Mr. J. Jones left early.");
        assert_eq!(
            sentences,
            vec!["Dr. Smith arrived late.", "Mr. J. Jones left early."]
        );
    }

    #[test]
    fn test_decimal_numbers_do_not_split() {
        let sentences = SentenceSplitter::new().split("Pi is about 3.14 in value. Next one.");
        assert_eq!(sentences, vec!["Pi is about 3.14 in value.", "Next one."]);
    }

    #[test]
    fn test_sentences_are_verbatim_slices() {
        let text = "  First   sentence here.\n\nSecond  one.  ";
        let sentences = SentenceSplitter::new().split(text);
        assert_eq!(sentences, vec!["First   sentence here.", "Second  one."]);
        for s in sentences {
            assert!(text.contains(s));
        }
    }

    #[test]
    fn test_trailing_abbreviation_is_kept() {
        let sentences = SentenceSplitter::new().split("Ask the Dr.");
        assert_eq!(sentences, vec!["Ask the Dr."]);
    }

    #[test]
    fn test_no_terminal_punctuation() {
        let sentences = SentenceSplitter::new().split("just some words");
        assert_eq!(sentences, vec!["just some words"]);
    }

    #[test]
    fn test_hard_wrapped_lines_join() {
        let text = "Solar panels convert sunlight into electricity for\nhomes and businesses across the country. Wind\r\nturbines help too.";
        let sentences = SentenceSplitter::new().split(text);
        assert_eq!(
            sentences,
            vec![
                "Solar panels convert sunlight into electricity for\nhomes and businesses across the country.",
                "Wind\r\nturbines help too.",
            ]
        );
    }

    #[test]
    fn test_line_ending_in_punctuation_ends_sentence() {
        let sentences = SentenceSplitter::new().split("It rained.\nthe roads flooded!\n\"Stay home.\"\nWe did.");
        assert_eq!(
            sentences,
            vec!["It rained.", "the roads flooded!", "\"Stay home.\"", "We did."]
        );
    }

    #[test]
    fn test_blank_line_ends_unpunctuated_text() {
        let sentences =
            SentenceSplitter::new().split("Introduction\n\nThe cat sat.\nNotes\r\n\r\nAsk the Dr.\n\nDone");
        assert_eq!(
            sentences,
            vec!["Introduction", "The cat sat.", "Notes", "Ask the Dr.", "Done"]
        );
    }

    #[test]
    fn test_capital_after_lowercase_word_ends_sentence() {
        let splitter = SentenceSplitter::new();
        assert_eq!(
            splitter.split("Take vitamin C. It helps."),
            vec!["Take vitamin C.", "It helps."]
        );
        assert_eq!(
            splitter.split("Follow plan B. Then rest."),
            vec!["Follow plan B.", "Then rest."]
        );
        assert_eq!(
            splitter.split("John F. Kennedy spoke. J. R. Tolkien wrote."),
            vec!["John F. Kennedy spoke.", "J. R. Tolkien wrote."]
        );
    }

    #[test]
    fn test_empty_input() {
        assert!(SentenceSplitter::new().split("   ").is_empty());
    }
}
