//! Hook stages around the tokenize step.
//!
//! Rows flow through four stages in a fixed order:
//!
//! ```text
//! raw cell → PreFilters → WordTokenizer → Plugins → PostFilters
//! ```
//!
//! - [`PreFilter`]: text → text normalization, each consuming the previous output.
//! - [`Plugin`]: [`TextData`] → one derived output column.
//! - [`PostFilter`]: assembled row (by column title) → one derived output column.
//!
//! Stages are registered once and applied in registration order. That order
//! decides the output column order and which plugin values a post-filter
//! can see.
//!
//! # Examples
//!
//! ```
//! use text_ripper::pipeline::{FilterChain, plugin_fn, pre_filter_fn};
//!
//! let chain = FilterChain::new()
//!     .add_pre_filter(pre_filter_fn("trim", |s| s.trim().to_string()))
//!     .add_plugin(plugin_fn("raw_len", |t| t.raw().len().to_string()));
//!
//! assert_eq!(chain.apply_pre_filters("  text  "), "text");
//! assert_eq!(chain.plugin_titles(), vec!["raw_len"]);
//! ```

use std::fmt;
use std::sync::Arc;

use ahash::AHashMap;
use log::debug;

use crate::analysis::token::TokenList;

/// Values of one assembled output row keyed by column title (prefix stripped).
pub type RowValues = AHashMap<String, String>;

/// One row's analyzed unit, created fresh per row.
#[derive(Clone, Debug, Default)]
pub struct TextData {
    raw: String,
    normalized: String,
    words: TokenList,
    non_words: TokenList,
}

impl TextData {
    pub fn new(raw: String, normalized: String, words: TokenList, non_words: TokenList) -> Self {
        TextData {
            raw,
            normalized,
            words,
            non_words,
        }
    }

    /// The cell text as read from the input.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The cell text after the pre-filter chain.
    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    pub fn words(&self) -> &TokenList {
        &self.words
    }

    pub fn non_words(&self) -> &TokenList {
        &self.non_words
    }
}

/// Text normalization applied before tokenization.
pub trait PreFilter: Send + Sync {
    fn title(&self) -> &str;

    fn apply(&self, text: &str) -> String;
}

/// Per-row derived column computed from the analyzed text.
///
/// Plugins have no error channel; an empty string is a valid result.
pub trait Plugin: Send + Sync {
    fn title(&self) -> &str;

    fn apply(&self, text: &TextData) -> String;
}

/// Per-row derived column computed from the assembled row.
///
/// Receives the original columns and every plugin value of the row, but not
/// the values of other post-filters.
pub trait PostFilter: Send + Sync {
    fn title(&self) -> &str;

    fn apply(&self, row: &RowValues) -> String;
}

type PreFilterFn = dyn Fn(&str) -> String + Send + Sync;
type PluginFn = dyn Fn(&TextData) -> String + Send + Sync;
type PostFilterFn = dyn Fn(&RowValues) -> String + Send + Sync;

/// A stage backed by a closure.
pub struct FnStage<F: ?Sized> {
    title: String,
    f: Box<F>,
}

impl<F: ?Sized> fmt::Debug for FnStage<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnStage").field("title", &self.title).finish()
    }
}

impl PreFilter for FnStage<PreFilterFn> {
    fn title(&self) -> &str {
        &self.title
    }

    fn apply(&self, text: &str) -> String {
        (self.f)(text)
    }
}

impl Plugin for FnStage<PluginFn> {
    fn title(&self) -> &str {
        &self.title
    }

    fn apply(&self, text: &TextData) -> String {
        (self.f)(text)
    }
}

impl PostFilter for FnStage<PostFilterFn> {
    fn title(&self) -> &str {
        &self.title
    }

    fn apply(&self, row: &RowValues) -> String {
        (self.f)(row)
    }
}

/// Wrap a closure as a [`PreFilter`].
pub fn pre_filter_fn<S, F>(title: S, f: F) -> Arc<dyn PreFilter>
where
    S: Into<String>,
    F: Fn(&str) -> String + Send + Sync + 'static,
{
    Arc::new(FnStage::<PreFilterFn> {
        title: title.into(),
        f: Box::new(f),
    })
}

/// Wrap a closure as a [`Plugin`].
pub fn plugin_fn<S, F>(title: S, f: F) -> Arc<dyn Plugin>
where
    S: Into<String>,
    F: Fn(&TextData) -> String + Send + Sync + 'static,
{
    Arc::new(FnStage::<PluginFn> {
        title: title.into(),
        f: Box::new(f),
    })
}

/// Wrap a closure as a [`PostFilter`].
pub fn post_filter_fn<S, F>(title: S, f: F) -> Arc<dyn PostFilter>
where
    S: Into<String>,
    F: Fn(&RowValues) -> String + Send + Sync + 'static,
{
    Arc::new(FnStage::<PostFilterFn> {
        title: title.into(),
        f: Box::new(f),
    })
}

/// The registered stages, in registration order.
#[derive(Clone, Default)]
pub struct FilterChain {
    pre_filters: Vec<Arc<dyn PreFilter>>,
    plugins: Vec<Arc<dyn Plugin>>,
    post_filters: Vec<Arc<dyn PostFilter>>,
}

impl FilterChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_pre_filter(mut self, filter: Arc<dyn PreFilter>) -> Self {
        self.pre_filters.push(filter);
        self
    }

    pub fn add_plugin(mut self, plugin: Arc<dyn Plugin>) -> Self {
        self.plugins.push(plugin);
        self
    }

    pub fn add_post_filter(mut self, filter: Arc<dyn PostFilter>) -> Self {
        self.post_filters.push(filter);
        self
    }

    pub fn pre_filters(&self) -> &[Arc<dyn PreFilter>] {
        &self.pre_filters
    }

    pub fn plugins(&self) -> &[Arc<dyn Plugin>] {
        &self.plugins
    }

    pub fn post_filters(&self) -> &[Arc<dyn PostFilter>] {
        &self.post_filters
    }

    pub fn plugin_titles(&self) -> Vec<&str> {
        self.plugins.iter().map(|p| p.title()).collect()
    }

    pub fn post_filter_titles(&self) -> Vec<&str> {
        self.post_filters.iter().map(|p| p.title()).collect()
    }

    /// Run the pre-filters, each on the previous output.
    pub fn apply_pre_filters(&self, text: &str) -> String {
        let mut text = text.to_string();
        for filter in &self.pre_filters {
            text = filter.apply(&text);
        }
        text
    }

    /// Append one value per plugin to `results`.
    pub fn apply_plugins(&self, text: &TextData, results: &mut Vec<String>, debug: bool) {
        for plugin in &self.plugins {
            let value = plugin.apply(text);
            if debug {
                debug!("[apply_plugins] {}: {}", plugin.title(), value);
            }
            results.push(value);
        }
    }

    /// Append one value per post-filter to `results`.
    ///
    /// `line` followed by `results` must be positionally aligned with the
    /// first columns of `header`.
    pub fn apply_post_filters(
        &self,
        header: &[String],
        prefix: &str,
        line: &[String],
        results: &mut Vec<String>,
        debug: bool,
    ) {
        if self.post_filters.is_empty() {
            return;
        }

        let row: RowValues = header
            .iter()
            .zip(line.iter().chain(results.iter()))
            .map(|(title, value)| {
                let title = title.strip_prefix(prefix).unwrap_or(title.as_str());
                (title.to_string(), value.clone())
            })
            .collect();

        for filter in &self.post_filters {
            let value = filter.apply(&row);
            if debug {
                debug!("[apply_post_filters] {}: {}", filter.title(), value);
            }
            results.push(value);
        }
    }
}

impl fmt::Debug for FilterChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pre: Vec<&str> = self.pre_filters.iter().map(|p| p.title()).collect();
        f.debug_struct("FilterChain")
            .field("pre_filters", &pre)
            .field("plugins", &self.plugin_titles())
            .field("post_filters", &self.post_filter_titles())
            .finish()
    }
}
