//! Multi-pattern string replacement.
//!
//! [`Replacer`] scans the input once and replaces every non-overlapping match.
//! When several patterns match at the same position, the one listed first
//! wins, so longer patterns that share a prefix must be listed before the
//! shorter ones (e.g. `"ｶﾞ"` before `"ｶ"`).

use aho_corasick::{AhoCorasick, MatchKind};

use crate::error::{Result, RipperError};

#[derive(Clone, Debug)]
pub struct Replacer {
    ac: AhoCorasick,
    replacements: Vec<String>,
}

impl Replacer {
    /// Build a replacer from `(pattern, replacement)` pairs.
    pub fn new(pairs: &[(&str, &str)]) -> Result<Self> {
        let (patterns, replacements): (Vec<&str>, Vec<String>) = pairs
            .iter()
            .map(|(from, to)| (*from, to.to_string()))
            .unzip();

        let ac = AhoCorasick::builder()
            .match_kind(MatchKind::LeftmostFirst)
            .build(&patterns)
            .map_err(|e| RipperError::Anyhow(anyhow::Error::from(e)))?;

        Ok(Self { ac, replacements })
    }

    /// Replace every match in `input`.
    pub fn replace(&self, input: &str) -> String {
        self.ac.replace_all(input, &self.replacements)
    }
}
