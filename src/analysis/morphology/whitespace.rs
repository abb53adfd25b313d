//! Whitespace engine for text that is already segmented.
//!
//! Every whitespace-separated chunk becomes one token. Chunks containing a
//! letter, digit or CJK character are tagged as nouns, everything else as
//! symbols, mirroring how IPADIC tags punctuation.

use crate::analysis::morphology::{MorphToken, MorphologicalAnalyzer};
use crate::analysis::tokenizer::{POS_NOUN, POS_SYMBOL};
use crate::error::{Result, RipperError};

#[derive(Clone, Debug, Default)]
pub struct WhitespaceAnalyzer;

impl WhitespaceAnalyzer {
    /// Create a new whitespace engine.
    pub fn new() -> Self {
        WhitespaceAnalyzer
    }
}

impl MorphologicalAnalyzer for WhitespaceAnalyzer {
    fn analyze(&self, text: &str) -> Result<Vec<MorphToken>> {
        Ok(text
            .split_whitespace()
            .map(|word| {
                let pos = if word.chars().any(char::is_alphanumeric) {
                    POS_NOUN
                } else {
                    POS_SYMBOL
                };
                MorphToken::new(word, pos, vec![pos.to_string(), "一般".to_string()])
            })
            .collect())
    }

    fn set_dictionary(&mut self, uri: &str) -> Result<()> {
        Err(RipperError::analysis(format!(
            "whitespace engine does not use a dictionary: {}",
            uri
        )))
    }

    fn name(&self) -> &'static str {
        "whitespace"
    }
}
