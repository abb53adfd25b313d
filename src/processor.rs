//! Row processors.
//!
//! Both commands share a [`CommonProcessor`] that owns the reader, the writer,
//! the tokenizer and the filter chain:
//!
//! - [`RipProcessor`] writes one augmented row per input row.
//! - [`RankProcessor`] writes a word frequency report.
//!
//! A processor moves through `created → header resolved → streaming →
//! finished`; files are closed when it is dropped.
//!
//! # Row faults
//!
//! A row that cannot be processed (missing target column, analyzer failure)
//! stops the pass. The run then ends with [`RunStatus::Aborted`] carrying
//! the line number and text of that row, instead of an error, so output
//! written so far stays valid. I/O errors are returned as errors.

use log::info;

use crate::VERSION;
use crate::config::{RankConfig, RipConfig};
use crate::error::Result;

pub mod common;
pub mod progress;
pub mod rank;
pub mod rip;

pub use common::CommonProcessor;
pub use progress::ProgressMonitor;
pub use rank::{RankProcessor, RankRun};
pub use rip::RipProcessor;

/// How a pass ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RunStatus {
    /// Every row was processed
    Completed,
    /// Stopped at a faulty row; later rows were not processed
    Aborted {
        /// Line number in the input, the header being line 1
        line: usize,
        /// Target cell of the faulty row, empty when it was missing
        text: String,
        reason: String,
    },
}

impl RunStatus {
    pub fn is_completed(&self) -> bool {
        matches!(self, RunStatus::Completed)
    }
}

/// Initialize and validate `config`, then run the rip command.
pub fn do_rip(mut config: RipConfig) -> Result<RunStatus> {
    config.init()?;
    config.validate()?;

    info!("text-ripper version: {}", VERSION);
    let mut processor = RipProcessor::new(config)?;
    processor.write_header()?;
    processor.run_with_progress()
}

/// Initialize and validate `config`, then run the rank command.
pub fn do_rank(mut config: RankConfig) -> Result<RunStatus> {
    config.init()?;
    config.validate()?;

    info!("text-ripper version: {}", VERSION);
    let mut processor = RankProcessor::new(config)?;
    processor.write_header()?;
    processor.run_with_progress()
}
