//! Built-in pre-filters.
//!
//! Pre-filters normalize the raw cell before tokenization.
//!
//! # Available Filters
//!
//! - [`default::DefaultNormalizer`] (`default`) - Replaces quotes, tabs, newlines and ideographic spaces with a space
//! - [`neologd::NeologdNormalizer`] (`neologd`) - Normalization recommended for mecab-ipadic-NEologd
//! - [`nfkc::NfkcNormalizer`] (`nfkc`) - Unicode NFKC normalization
//! - [`pattern::PatternReplaceFilter`] - Regex-based replacement
//!
//! # Examples
//!
//! ```
//! use text_ripper::prefilter;
//!
//! let filter = prefilter::by_name("neologd").unwrap();
//! assert_eq!(filter.apply("ﾃｽﾄ　ＡＢＣ"), "テストABC");
//! ```

use std::sync::Arc;

use crate::error::{Result, RipperError};
use crate::pipeline::PreFilter;

pub mod default;
pub mod neologd;
pub mod nfkc;
pub mod pattern;

/// Names accepted by [`by_name`].
pub const PRE_FILTER_NAMES: &[&str] = &["default", "neologd", "nfkc"];

/// Look up a built-in pre-filter by name.
pub fn by_name(name: &str) -> Result<Arc<dyn PreFilter>> {
    match name {
        "default" => Ok(Arc::new(default::DefaultNormalizer::new()?)),
        "neologd" => Ok(Arc::new(neologd::NeologdNormalizer::new()?)),
        "nfkc" => Ok(Arc::new(nfkc::NfkcNormalizer::new())),
        _ => Err(RipperError::config(format!(
            "unknown pre-filter: {} (available: {})",
            name,
            PRE_FILTER_NAMES.join(", ")
        ))),
    }
}
