use unicode_normalization::UnicodeNormalization;

use crate::pipeline::PreFilter;

/// Unicode NFKC normalization (full-width ASCII to half-width, half-width
/// katakana to full-width, compatibility ideographs to unified ones).
#[derive(Clone, Debug, Default)]
pub struct NfkcNormalizer;

impl NfkcNormalizer {
    pub fn new() -> Self {
        NfkcNormalizer
    }
}

impl PreFilter for NfkcNormalizer {
    fn title(&self) -> &str {
        "nfkc"
    }

    fn apply(&self, text: &str) -> String {
        text.nfkc().collect()
    }
}
