//! Natural Language Processing components
//!
//! This module provides word tokenization, sentence segmentation and stopword
//! filtering.

pub mod sentences;
pub mod stopwords;
pub mod tokenizer;

pub use sentences::SentenceSplitter;
pub use stopwords::StopwordFilter;
pub use tokenizer::{whitespace_word_count, WordTokenizer};
