//! Morphological engines.
//!
//! The word tokenizer does not analyze text itself. It delegates to a
//! [`MorphologicalAnalyzer`], which turns a normalized string into an ordered
//! sequence of [`MorphToken`]s.
//!
//! # Available Engines
//!
//! - [`lindera::LinderaAnalyzer`] - Japanese morphological analysis (IPADIC by default)
//! - [`whitespace::WhitespaceAnalyzer`] - Splits pre-segmented text on whitespace
//!
//! # Examples
//!
//! Implementing a custom engine:
//!
//! ```
//! use text_ripper::analysis::morphology::{MorphToken, MorphologicalAnalyzer};
//! use text_ripper::error::Result;
//!
//! struct CommaAnalyzer;
//!
//! impl MorphologicalAnalyzer for CommaAnalyzer {
//!     fn analyze(&self, text: &str) -> Result<Vec<MorphToken>> {
//!         Ok(text
//!             .split(',')
//!             .map(|s| MorphToken::new(s, "名詞", vec!["名詞".to_string()]))
//!             .collect())
//!     }
//!
//!     fn set_dictionary(&mut self, _uri: &str) -> Result<()> {
//!         Ok(())
//!     }
//!
//!     fn name(&self) -> &'static str {
//!         "comma"
//!     }
//! }
//! ```

use crate::error::Result;

/// One unit of engine output.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MorphToken {
    /// The text as it appears in the input
    pub surface: String,

    /// Part-of-speech tag
    pub pos: String,

    /// Morphological features in engine-defined order
    pub features: Vec<String>,

    /// Engine-internal placeholder (sentence boundary and similar)
    pub dummy: bool,
}

impl MorphToken {
    /// Create a regular (non-dummy) token.
    pub fn new<S: Into<String>, P: Into<String>>(
        surface: S,
        pos: P,
        features: Vec<String>,
    ) -> Self {
        MorphToken {
            surface: surface.into(),
            pos: pos.into(),
            features,
            dummy: false,
        }
    }

    /// Create a placeholder token that the tokenizer drops before classification.
    pub fn dummy() -> Self {
        MorphToken {
            surface: String::new(),
            pos: String::new(),
            features: Vec::new(),
            dummy: true,
        }
    }
}

/// Trait for morphological engines.
///
/// The trait requires `Send + Sync` so an engine can sit behind the
/// processor while the progress monitor runs on another thread.
pub trait MorphologicalAnalyzer: Send + Sync {
    /// Analyze `text` into tokens in input order.
    fn analyze(&self, text: &str) -> Result<Vec<MorphToken>>;

    /// Replace the system dictionary with the one at `uri`.
    ///
    /// Fails when the dictionary cannot be loaded; callers abort
    /// construction in that case.
    fn set_dictionary(&mut self, uri: &str) -> Result<()>;

    /// Get the name of this engine (for logging).
    fn name(&self) -> &'static str;
}

pub mod lindera;
pub mod whitespace;
