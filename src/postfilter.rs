//! Built-in post-filters.
//!
//! Post-filters read the assembled row by column title, so a ratio filter
//! only produces a value when the plugin it divides is registered before it.

use std::sync::Arc;

use crate::error::{Result, RipperError};
use crate::pipeline::PostFilter;

pub mod ratio;

/// Titles accepted by [`by_name`].
pub const POST_FILTER_NAMES: &[&str] = &[
    "ratio_alphanum_count",
    "ratio_alphabet_count",
    "ratio_number_count",
    "ratio_jp_count",
];

/// Look up a built-in post-filter by title.
pub fn by_name(name: &str) -> Result<Arc<dyn PostFilter>> {
    let filter = match name {
        "ratio_alphanum_count" => ratio::RatioPostFilter::new(name, "alphanum_count"),
        "ratio_alphabet_count" => ratio::RatioPostFilter::new(name, "alphabet_count"),
        "ratio_number_count" => ratio::RatioPostFilter::new(name, "number_count"),
        "ratio_jp_count" => ratio::RatioPostFilter::new(name, "kana_count"),
        _ => {
            return Err(RipperError::config(format!(
                "unknown post-filter: {} (available: {})",
                name,
                POST_FILTER_NAMES.join(", ")
            )));
        }
    };
    Ok(Arc::new(filter))
}
