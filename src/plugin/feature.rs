//! Counts of word tokens carrying a dictionary feature.
//!
//! IPADIC tags proper nouns with sub-categories such as `人名` (person),
//! `地域` (location) and `組織` (organization), and numerals with `数`.

use crate::pipeline::{Plugin, TextData};

#[derive(Clone, Debug)]
pub struct FeatureCountPlugin {
    title: &'static str,
    feature: &'static str,
}

impl FeatureCountPlugin {
    pub fn new(title: &'static str, feature: &'static str) -> Self {
        FeatureCountPlugin { title, feature }
    }
}

impl Plugin for FeatureCountPlugin {
    fn title(&self) -> &str {
        self.title
    }

    fn apply(&self, text: &TextData) -> String {
        text.words().count_features(self.feature).to_string()
    }
}
