use regex::Regex;

use crate::error::{Result, RipperError};
use crate::pipeline::PreFilter;

/// A pre-filter that replaces every regex match.
#[derive(Clone, Debug)]
pub struct PatternReplaceFilter {
    title: String,
    pattern: Regex,
    replacement: String,
}

impl PatternReplaceFilter {
    /// Create a new pattern replace filter.
    pub fn new(pattern: &str, replacement: &str) -> Result<Self> {
        Ok(Self {
            title: format!("pattern_replace({})", pattern),
            pattern: Regex::new(pattern)
                .map_err(|e| RipperError::config(format!("invalid pattern '{}': {}", pattern, e)))?,
            replacement: replacement.to_string(),
        })
    }
}

impl PreFilter for PatternReplaceFilter {
    fn title(&self) -> &str {
        &self.title
    }

    fn apply(&self, text: &str) -> String {
        self.pattern
            .replace_all(text, self.replacement.as_str())
            .into_owned()
    }
}
