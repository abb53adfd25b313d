//! # text-ripper
//!
//! Splits the text of one column of a CSV/TSV file into words with a
//! Japanese morphological analyzer.
//!
//! ## Features
//!
//! - Word / non-word classification by part of speech, length, stop words
//!   and character ranges
//! - Pre-filter, plugin and post-filter hooks around tokenization
//! - Word frequency ranking with top/last cuts
//! - Stop words seeded from a ranking pass over the same input
//!
//! ## Modes
//!
//! - **rip** writes every input row with the words and derived columns
//!   appended (see [`processor::RipProcessor`]).
//! - **rank** writes a word frequency report (see [`processor::RankProcessor`]).

pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod plugin;
pub mod postfilter;
pub mod prefilter;
pub mod processor;
pub mod ranking;
pub mod table;
pub mod util;

pub mod prelude {
    pub use crate::config::{ColumnSelector, CommonConfig, EngineKind, RankConfig, RipConfig};
    pub use crate::error::{Result, RipperError};
    pub use crate::pipeline::{FilterChain, PostFilter, PreFilter, Plugin, TextData};
    pub use crate::processor::{RunStatus, do_rank, do_rip};
    pub use crate::ranking::{RankResult, RankThresholds, WordCount};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
