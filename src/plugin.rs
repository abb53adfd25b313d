//! Built-in plugins.
//!
//! Every plugin derives one output column from a row's [`TextData`](crate::pipeline::TextData).
//! Plugins are looked up by title with [`by_name`]; the output column is the
//! title with the configured prefix.
//!
//! # Available Plugins
//!
//! | Title | Source | Counts |
//! |-------|--------|--------|
//! | `alphanum_count` | normalized text | ASCII letters and digits |
//! | `alphabet_count` | normalized text | ASCII letters |
//! | `number_count` | normalized text | ASCII digits |
//! | `char_type_count` | normalized text | distinct characters |
//! | `max_char_count` | normalized text | frequency of the most frequent character |
//! | `max_word_count` | words | frequency of the most frequent word |
//! | `symbol_count` | non-words | tokens tagged `記号` |
//! | `kana_count` | normalized text | kanji, hiragana and katakana |
//! | `hiragana_count` | normalized text | hiragana |
//! | `katakana_count` | normalized text | katakana |
//! | `kanji_count` | normalized text | kanji |
//! | `kana_alphanum_count` | normalized text | kana spellings of letters and numbers |
//! | `kana_number_count` | normalized text | kana spellings of numbers |
//! | `kana_alphabet_count` | normalized text | kana spellings of letters |
//! | `name_count` | words | tokens tagged `人名` |
//! | `numeral_count` | words | tokens tagged `数` |
//! | `location_count` | words | tokens tagged `地域` |
//! | `organization_count` | words | tokens tagged `組織` |

use std::sync::Arc;

use crate::error::{Result, RipperError};
use crate::pipeline::Plugin;

pub mod character;
pub mod feature;
pub mod kana;
pub mod script;

/// Titles accepted by [`by_name`].
pub const PLUGIN_NAMES: &[&str] = &[
    "alphanum_count",
    "alphabet_count",
    "number_count",
    "char_type_count",
    "max_char_count",
    "max_word_count",
    "symbol_count",
    "kana_count",
    "hiragana_count",
    "katakana_count",
    "kanji_count",
    "kana_alphanum_count",
    "kana_number_count",
    "kana_alphabet_count",
    "name_count",
    "numeral_count",
    "location_count",
    "organization_count",
];

/// Look up a built-in plugin by title.
pub fn by_name(name: &str) -> Result<Arc<dyn Plugin>> {
    let plugin: Arc<dyn Plugin> = match name {
        "alphanum_count" => Arc::new(script::ScriptCountPlugin::alphanum()?),
        "alphabet_count" => Arc::new(script::ScriptCountPlugin::alphabet()?),
        "number_count" => Arc::new(script::ScriptCountPlugin::number()?),
        "kana_count" => Arc::new(script::ScriptCountPlugin::japanese()?),
        "hiragana_count" => Arc::new(script::ScriptCountPlugin::hiragana()?),
        "katakana_count" => Arc::new(script::ScriptCountPlugin::katakana()?),
        "kanji_count" => Arc::new(script::ScriptCountPlugin::kanji()?),
        "char_type_count" => Arc::new(character::CharTypeCountPlugin),
        "max_char_count" => Arc::new(character::MaxCharCountPlugin),
        "max_word_count" => Arc::new(character::MaxWordCountPlugin),
        "symbol_count" => Arc::new(character::SymbolCountPlugin),
        "kana_alphanum_count" => Arc::new(kana::KanaLikeCountPlugin::alphanum()?),
        "kana_number_count" => Arc::new(kana::KanaLikeCountPlugin::number()?),
        "kana_alphabet_count" => Arc::new(kana::KanaLikeCountPlugin::alphabet()?),
        "name_count" => Arc::new(feature::FeatureCountPlugin::new("name_count", "人名")),
        "numeral_count" => Arc::new(feature::FeatureCountPlugin::new("numeral_count", "数")),
        "location_count" => Arc::new(feature::FeatureCountPlugin::new("location_count", "地域")),
        "organization_count" => {
            Arc::new(feature::FeatureCountPlugin::new("organization_count", "組織"))
        }
        _ => {
            return Err(RipperError::config(format!(
                "unknown plugin: {} (available: {})",
                name,
                PLUGIN_NAMES.join(", ")
            )));
        }
    };
    Ok(plugin)
}
