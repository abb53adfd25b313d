//! Character and token frequency plugins.

use ahash::{AHashMap, AHashSet};

use crate::analysis::tokenizer::POS_SYMBOL;
use crate::pipeline::{Plugin, TextData};

/// Number of distinct characters in the normalized text.
#[derive(Clone, Copy, Debug, Default)]
pub struct CharTypeCountPlugin;

impl Plugin for CharTypeCountPlugin {
    fn title(&self) -> &str {
        "char_type_count"
    }

    fn apply(&self, text: &TextData) -> String {
        let kinds: AHashSet<char> = text.normalized().chars().collect();
        kinds.len().to_string()
    }
}

/// Frequency of the most frequent character in the normalized text.
#[derive(Clone, Copy, Debug, Default)]
pub struct MaxCharCountPlugin;

impl Plugin for MaxCharCountPlugin {
    fn title(&self) -> &str {
        "max_char_count"
    }

    fn apply(&self, text: &TextData) -> String {
        max_frequency(text.normalized().chars()).to_string()
    }
}

/// Frequency of the most frequent word surface.
#[derive(Clone, Copy, Debug, Default)]
pub struct MaxWordCountPlugin;

impl Plugin for MaxWordCountPlugin {
    fn title(&self) -> &str {
        "max_word_count"
    }

    fn apply(&self, text: &TextData) -> String {
        max_frequency(text.words().surfaces().into_iter()).to_string()
    }
}

/// Number of non-word tokens tagged as symbols.
#[derive(Clone, Copy, Debug, Default)]
pub struct SymbolCountPlugin;

impl Plugin for SymbolCountPlugin {
    fn title(&self) -> &str {
        "symbol_count"
    }

    fn apply(&self, text: &TextData) -> String {
        text.non_words().count_features(POS_SYMBOL).to_string()
    }
}

fn max_frequency<T, I>(items: I) -> usize
where
    T: std::hash::Hash + Eq,
    I: Iterator<Item = T>,
{
    let mut counts: AHashMap<T, usize> = AHashMap::new();
    let mut max = 0;
    for item in items {
        let count = counts.entry(item).or_insert(0);
        *count += 1;
        max = max.max(*count);
    }
    max
}
