//! Counts of letters and numbers spelled out in kana.
//!
//! Katakana is folded to hiragana first, so `ワン` and `わん` both count as
//! one number.

use crate::error::Result;
use crate::pipeline::{Plugin, TextData};
use crate::util::replacer::Replacer;

const MARK: &str = "\u{0001}";

const NUMBER_SPELLINGS: &[&str] = &[
    "ぜろ", "いち", "にー", "さん", "よん", "ごー", "ろく", "しち", "はち",
    "きゅう", "きゅー", "じゅう", "じゅー",
    "わん", "つー", "すりー", "ふぉー", "ふぁいぶ", "しっくす", "せぶん", "えいと", "ないん", "てん",
];

const ALPHABET_SPELLINGS: &[&str] = &[
    "えー", "びー", "びい", "しー", "でぃー", "いー", "えふ", "じー",
    "えっち", "えいち", "えち", "あい", "じぇー", "じぇい", "けー", "けい",
    "える", "えむ", "えぬ", "おー", "ぴー", "きゅー", "あーる", "えす",
    "てぃー", "ゆー", "ぶい", "だぶる", "だぶりゅ", "えっくす", "えくす",
    "わい", "ぜっと", "ぜっど",
];

#[derive(Clone, Debug)]
pub struct KanaLikeCountPlugin {
    title: &'static str,
    replacers: Vec<Replacer>,
}

impl KanaLikeCountPlugin {
    /// Letters first, then numbers in what is left.
    pub fn alphanum() -> Result<Self> {
        Ok(KanaLikeCountPlugin {
            title: "kana_alphanum_count",
            replacers: vec![marker(ALPHABET_SPELLINGS)?, marker(NUMBER_SPELLINGS)?],
        })
    }

    pub fn number() -> Result<Self> {
        Ok(KanaLikeCountPlugin {
            title: "kana_number_count",
            replacers: vec![marker(NUMBER_SPELLINGS)?],
        })
    }

    pub fn alphabet() -> Result<Self> {
        Ok(KanaLikeCountPlugin {
            title: "kana_alphabet_count",
            replacers: vec![marker(ALPHABET_SPELLINGS)?],
        })
    }

    pub fn count(&self, text: &str) -> usize {
        let mut folded = to_hiragana(text);
        for replacer in &self.replacers {
            folded = replacer.replace(&folded);
        }
        folded.matches(MARK).count()
    }
}

impl Plugin for KanaLikeCountPlugin {
    fn title(&self) -> &str {
        self.title
    }

    fn apply(&self, text: &TextData) -> String {
        self.count(text.normalized()).to_string()
    }
}

fn marker(spellings: &[&str]) -> Result<Replacer> {
    let pairs: Vec<(&str, &str)> = spellings.iter().map(|s| (*s, MARK)).collect();
    Replacer::new(&pairs)
}

/// Fold katakana `ァ`..=`ン` to hiragana and lowercase everything else.
fn to_hiragana(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\u{30A1}'..='\u{30F3}' => out.push(char::from_u32(c as u32 - 0x60).unwrap_or(c)),
            _ => out.extend(c.to_lowercase()),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_spellings() {
        let plugin = KanaLikeCountPlugin::number().unwrap();
        assert_eq!(plugin.count("いちにさん"), 2);
        assert_eq!(plugin.count("ワン ツー スリー"), 3);
        assert_eq!(plugin.count("こんにちは"), 0);
    }

    #[test]
    fn test_alphabet_spellings() {
        let plugin = KanaLikeCountPlugin::alphabet().unwrap();
        assert_eq!(plugin.count("えーびーしー"), 3);
        assert_eq!(plugin.count("エックスワイゼット"), 3);
    }

    #[test]
    fn test_alphanum_applies_letters_first() {
        let plugin = KanaLikeCountPlugin::alphanum().unwrap();
        assert_eq!(plugin.count("えーいち"), 2);
        // "きゅー" is consumed as the letter Q before numbers are matched
        assert_eq!(plugin.count("きゅー"), 1);
    }

    #[test]
    fn test_to_hiragana() {
        assert_eq!(to_hiragana("カタカナABC"), "かたかなabc");
        assert_eq!(to_hiragana("ヴ"), "ヴ");
    }
}
