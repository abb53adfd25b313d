//! Token types produced by the word tokenizer.
//!
//! A [`Token`] wraps a single unit emitted by the morphological engine and
//! exposes derived views (surface vs. original form, feature membership).
//! A [`TokenList`] is the ordered sequence of tokens for one cell, either the
//! "word" side or the "non-word" side of a classification.
//!
//! # Examples
//!
//! ```
//! use text_ripper::analysis::token::{Token, TokenList};
//!
//! let token = Token::new("走っ", "動詞", vec![
//!     "動詞", "自立", "*", "*", "五段・ラ行", "連用タ接続", "走る", "ハシッ", "ハシッ",
//! ]);
//! assert_eq!(token.surface(), "走っ");
//! assert_eq!(token.original_form(), "走る");
//!
//! let list = TokenList::new(vec![token], true);
//! assert_eq!(list.words(), vec!["走る"]);
//! ```

use std::fmt;

use crate::analysis::morphology::MorphToken;

/// Index of the base (dictionary) form in an IPADIC-style feature list.
pub const ORIGINAL_FORM_INDEX: usize = 6;

/// Feature value used by dictionaries for "no value".
pub const FEATURE_PLACEHOLDER: &str = "*";

/// A single analyzed token.
///
/// Tokens are immutable once produced by the tokenizer adapter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    surface: String,
    pos: String,
    features: Vec<String>,
}

impl Token {
    /// Create a new token from its surface, part-of-speech and features.
    pub fn new<S, P, F>(surface: S, pos: P, features: Vec<F>) -> Self
    where
        S: Into<String>,
        P: Into<String>,
        F: Into<String>,
    {
        Token {
            surface: surface.into(),
            pos: pos.into(),
            features: features.into_iter().map(Into::into).collect(),
        }
    }

    /// The text as it appears in the input.
    pub fn surface(&self) -> &str {
        &self.surface
    }

    /// The part-of-speech tag.
    pub fn pos(&self) -> &str {
        &self.pos
    }

    /// All morphological features in engine order.
    pub fn features(&self) -> &[String] {
        &self.features
    }

    /// The base form when the dictionary provides one, otherwise the surface.
    pub fn original_form(&self) -> &str {
        match self.features.get(ORIGINAL_FORM_INDEX) {
            Some(form) if !form.is_empty() && form != FEATURE_PLACEHOLDER => form,
            _ => &self.surface,
        }
    }

    /// Check whether any feature equals `feature`.
    pub fn has_feature(&self, feature: &str) -> bool {
        self.features.iter().any(|f| f == feature)
    }

    /// Number of characters in the surface.
    pub fn char_len(&self) -> usize {
        self.surface.chars().count()
    }
}

impl From<MorphToken> for Token {
    fn from(token: MorphToken) -> Self {
        Token {
            surface: token.surface,
            pos: token.pos,
            features: token.features,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}", self.surface, self.features.join(","))
    }
}

/// An ordered list of tokens.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TokenList {
    tokens: Vec<Token>,
    use_original_form: bool,
}

impl TokenList {
    /// Create a list; `use_original_form` switches [`TokenList::words`] to base forms.
    pub fn new(tokens: Vec<Token>, use_original_form: bool) -> Self {
        TokenList {
            tokens,
            use_original_form,
        }
    }

    /// The tokens in input order.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Word strings of the list: original forms if enabled, surfaces otherwise.
    pub fn words(&self) -> Vec<&str> {
        self.tokens
            .iter()
            .map(|t| {
                if self.use_original_form {
                    t.original_form()
                } else {
                    t.surface()
                }
            })
            .collect()
    }

    /// Surfaces of the list, regardless of the original-form setting.
    pub fn surfaces(&self) -> Vec<&str> {
        self.tokens.iter().map(Token::surface).collect()
    }

    /// Count tokens carrying `feature`.
    pub fn count_features(&self, feature: &str) -> usize {
        self.tokens.iter().filter(|t| t.has_feature(feature)).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ipadic_token(surface: &str, pos: &str, sub: &str, base: &str) -> Token {
        Token::new(
            surface,
            pos,
            vec![pos, sub, "*", "*", "*", "*", base, "*", "*"],
        )
    }

    #[test]
    fn test_original_form_falls_back_to_surface() {
        let token = ipadic_token("東京", "名詞", "固有名詞", "*");
        assert_eq!(token.original_form(), "東京");

        let short = Token::new("abc", "名詞", vec!["名詞"]);
        assert_eq!(short.original_form(), "abc");
    }

    #[test]
    fn test_has_feature() {
        let token = ipadic_token("田中", "名詞", "人名", "田中");
        assert!(token.has_feature("人名"));
        assert!(!token.has_feature("地域"));
    }

    #[test]
    fn test_token_list_words() {
        let tokens = vec![
            ipadic_token("食べ", "動詞", "自立", "食べる"),
            ipadic_token("たい", "助動詞", "*", "たい"),
        ];

        let surface = TokenList::new(tokens.clone(), false);
        assert_eq!(surface.words(), vec!["食べ", "たい"]);

        let original = TokenList::new(tokens, true);
        assert_eq!(original.words(), vec!["食べる", "たい"]);
        assert_eq!(original.surfaces(), vec!["食べ", "たい"]);
    }

    #[test]
    fn test_count_features() {
        let list = TokenList::new(
            vec![
                ipadic_token("、", "記号", "読点", "、"),
                ipadic_token("。", "記号", "句点", "。"),
                ipadic_token("の", "助詞", "連体化", "の"),
            ],
            false,
        );
        assert_eq!(list.count_features("記号"), 2);
        assert_eq!(list.len(), 3);
    }
}
