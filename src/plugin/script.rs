//! Character class counts over the normalized text.

use regex::Regex;

use crate::error::{Result, RipperError};
use crate::pipeline::{Plugin, TextData};

/// Counts characters of the normalized text matching a character class.
#[derive(Clone, Debug)]
pub struct ScriptCountPlugin {
    title: &'static str,
    pattern: Regex,
}

impl ScriptCountPlugin {
    pub fn new(title: &'static str, pattern: &str) -> Result<Self> {
        let pattern = Regex::new(pattern)
            .map_err(|e| RipperError::config(format!("Invalid pattern for {}: {}", title, e)))?;
        Ok(ScriptCountPlugin { title, pattern })
    }

    pub fn alphanum() -> Result<Self> {
        Self::new("alphanum_count", r"[a-zA-Z0-9]")
    }

    pub fn alphabet() -> Result<Self> {
        Self::new("alphabet_count", r"[a-zA-Z]")
    }

    pub fn number() -> Result<Self> {
        Self::new("number_count", r"[0-9]")
    }

    /// Kanji, hiragana and katakana.
    pub fn japanese() -> Result<Self> {
        Self::new("kana_count", r"[\p{sc=Han}\p{sc=Hiragana}\p{sc=Katakana}]")
    }

    pub fn hiragana() -> Result<Self> {
        Self::new("hiragana_count", r"\p{sc=Hiragana}")
    }

    pub fn katakana() -> Result<Self> {
        Self::new("katakana_count", r"\p{sc=Katakana}")
    }

    pub fn kanji() -> Result<Self> {
        Self::new("kanji_count", r"\p{sc=Han}")
    }

    pub fn count(&self, text: &str) -> usize {
        self.pattern.find_iter(text).count()
    }
}

impl Plugin for ScriptCountPlugin {
    fn title(&self) -> &str {
        self.title
    }

    fn apply(&self, text: &TextData) -> String {
        self.count(text.normalized()).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "東京カメラは333mです";

    #[test]
    fn test_ascii_classes() {
        assert_eq!(ScriptCountPlugin::alphanum().unwrap().count(SAMPLE), 4);
        assert_eq!(ScriptCountPlugin::alphabet().unwrap().count(SAMPLE), 1);
        assert_eq!(ScriptCountPlugin::number().unwrap().count(SAMPLE), 3);
    }

    #[test]
    fn test_japanese_classes() {
        assert_eq!(ScriptCountPlugin::kanji().unwrap().count(SAMPLE), 2);
        assert_eq!(ScriptCountPlugin::hiragana().unwrap().count(SAMPLE), 3);
        assert_eq!(ScriptCountPlugin::katakana().unwrap().count(SAMPLE), 3);
        assert_eq!(ScriptCountPlugin::japanese().unwrap().count(SAMPLE), 8);
        // punctuation and the prolonged sound mark belong to the common script
        assert_eq!(ScriptCountPlugin::japanese().unwrap().count("ー。、"), 0);
    }

    #[test]
    fn test_reads_normalized_text() {
        let plugin = ScriptCountPlugin::number().unwrap();
        let text = TextData::new(
            "１２３".to_string(),
            "123".to_string(),
            Default::default(),
            Default::default(),
        );
        assert_eq!(plugin.apply(&text), "3");
    }
}
