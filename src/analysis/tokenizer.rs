//! Word tokenizer.
//!
//! [`WordTokenizer`] owns a morphological engine and splits its output into
//! a "word" list and a "non-word" list. A token is a word when:
//!
//! 1. its part-of-speech is in the allow-list (noun, verb and adjective by default),
//! 2. its surface has at least `min_letter_size` characters,
//! 3. it is not a stop word,
//! 4. it contains at least one CJK ideograph, kana, or half/full-width
//!    Latin letter or digit.
//!
//! Dummy tokens from the engine are dropped before classification; every
//! other token lands in exactly one of the two lists.
//!
//! # Examples
//!
//! ```
//! use text_ripper::analysis::morphology::whitespace::WhitespaceAnalyzer;
//! use text_ripper::analysis::tokenizer::{TokenizerConfig, WordTokenizer};
//!
//! let mut tokenizer = WordTokenizer::new(Box::new(WhitespaceAnalyzer::new()), TokenizerConfig::default());
//! tokenizer.add_stop_words(["the"]);
//!
//! let (words, non_words) = tokenizer.tokenize("the quick fox !").unwrap();
//! assert_eq!(words.words(), vec!["quick", "fox"]);
//! assert_eq!(non_words.surfaces(), vec!["the", "!"]);
//! ```

use ahash::AHashSet;

use crate::analysis::morphology::MorphologicalAnalyzer;
use crate::analysis::token::{Token, TokenList};
use crate::error::Result;

pub const POS_NOUN: &str = "名詞";
pub const POS_VERB: &str = "動詞";
pub const POS_ADJECTIVE: &str = "形容詞";
pub const POS_SYMBOL: &str = "記号";

/// Settings for [`WordTokenizer`].
#[derive(Clone, Debug)]
pub struct TokenizerConfig {
    /// Parts of speech kept as words; empty means noun, verb and adjective
    pub word_pos_list: Vec<String>,
    /// Initial stop words
    pub stop_words: Vec<String>,
    /// Minimum number of characters of a word
    pub min_letter_size: usize,
    /// Expose base forms instead of surfaces in the word list
    pub use_original_form: bool,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        TokenizerConfig {
            word_pos_list: Vec::new(),
            stop_words: Vec::new(),
            min_letter_size: 1,
            use_original_form: false,
        }
    }
}

/// Check whether `c` can make a token a word.
pub fn is_valid_word_char(c: char) -> bool {
    matches!(c,
        '0'..='9' | 'A'..='Z' | 'a'..='z' |
        '\u{3041}'..='\u{3096}' |   // Hiragana
        '\u{309D}'..='\u{309F}' |
        '\u{30A1}'..='\u{30FA}' |   // Katakana
        '\u{30FD}'..='\u{30FF}' |
        '\u{31F0}'..='\u{31FF}' |   // Katakana phonetic extensions
        '\u{3400}'..='\u{4DBF}' |   // CJK Extension A
        '\u{4E00}'..='\u{9FFF}' |   // CJK Unified Ideographs
        '\u{F900}'..='\u{FAFF}' |   // CJK Compatibility Ideographs
        '\u{FF10}'..='\u{FF19}' |   // Full-width digits
        '\u{FF21}'..='\u{FF3A}' |   // Full-width upper case
        '\u{FF41}'..='\u{FF5A}' |   // Full-width lower case
        '\u{FF66}'..='\u{FF9D}' |   // Half-width katakana
        '\u{20000}'..='\u{2A6DF}'   // CJK Extension B
    )
}

/// Tokenizer adapter around a morphological engine.
pub struct WordTokenizer {
    analyzer: Box<dyn MorphologicalAnalyzer>,
    word_pos: AHashSet<String>,
    stop_words: AHashSet<String>,
    min_letter_size: usize,
    use_original_form: bool,
}

impl WordTokenizer {
    /// Create a tokenizer over `analyzer`.
    pub fn new(analyzer: Box<dyn MorphologicalAnalyzer>, config: TokenizerConfig) -> Self {
        let word_pos: AHashSet<String> = if config.word_pos_list.is_empty() {
            [POS_NOUN, POS_VERB, POS_ADJECTIVE]
                .iter()
                .map(|p| p.to_string())
                .collect()
        } else {
            config.word_pos_list.into_iter().collect()
        };

        WordTokenizer {
            analyzer,
            word_pos,
            stop_words: config.stop_words.into_iter().collect(),
            min_letter_size: config.min_letter_size,
            use_original_form: config.use_original_form,
        }
    }

    /// Replace the engine's dictionary.
    pub fn set_dictionary(&mut self, uri: &str) -> Result<()> {
        self.analyzer.set_dictionary(uri)
    }

    /// Add stop words; later calls to [`WordTokenizer::tokenize`] see them.
    pub fn add_stop_words<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stop_words.extend(words.into_iter().map(Into::into));
    }

    /// Check whether `word` is a stop word.
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    pub fn stop_word_count(&self) -> usize {
        self.stop_words.len()
    }

    /// Name of the underlying engine.
    pub fn engine_name(&self) -> &'static str {
        self.analyzer.name()
    }

    /// Split `text` into (words, non-words).
    pub fn tokenize(&self, text: &str) -> Result<(TokenList, TokenList)> {
        let analyzed = self.analyzer.analyze(text)?;

        let mut words = Vec::with_capacity(analyzed.len());
        let mut non_words = Vec::with_capacity(analyzed.len());
        for token in analyzed {
            if token.dummy {
                continue;
            }

            let token = Token::from(token);
            if self.is_word(&token) {
                words.push(token);
            } else {
                non_words.push(token);
            }
        }

        Ok((
            TokenList::new(words, self.use_original_form),
            TokenList::new(non_words, self.use_original_form),
        ))
    }

    fn is_word(&self, token: &Token) -> bool {
        if !self.word_pos.contains(token.pos()) {
            return false;
        }
        if token.char_len() < self.min_letter_size {
            return false;
        }
        if self.stop_words.contains(token.surface()) {
            return false;
        }
        if self.use_original_form && self.stop_words.contains(token.original_form()) {
            return false;
        }
        token.surface().chars().any(is_valid_word_char)
    }
}
