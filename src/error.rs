//! Error types for text-ripper.
//!
//! All fallible operations return [`Result`], whose error side is the
//! [`RipperError`] enum. Configuration problems are reported before any row
//! is read, I/O problems abort the current pass, and per-row faults are
//! turned into a [`RunStatus`](crate::processor::RunStatus) by the row loop.
//!
//! # Examples
//!
//! ```
//! use text_ripper::error::{Result, RipperError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(RipperError::config("no input file"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for text-ripper operations.
#[derive(Error, Debug)]
pub enum RipperError {
    /// I/O errors (opening, reading or writing files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Delimited file framing errors
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Invalid or incomplete configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Morphological analysis errors (dictionary loading, segmentation)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// File extension that has no reader backend
    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    /// A single input row could not be processed
    #[error("Row error: {0}")]
    Row(String),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with RipperError.
pub type Result<T> = std::result::Result<T, RipperError>;

impl RipperError {
    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        RipperError::Config(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        RipperError::Analysis(msg.into())
    }

    /// Create a new row error.
    pub fn row<S: Into<String>>(msg: S) -> Self {
        RipperError::Row(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        RipperError::Other(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = RipperError::config("no target column");
        assert_eq!(error.to_string(), "Configuration error: no target column");

        let error = RipperError::analysis("dictionary not found");
        assert_eq!(error.to_string(), "Analysis error: dictionary not found");

        let error = RipperError::row("column 3 is missing");
        assert_eq!(error.to_string(), "Row error: column 3 is missing");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let ripper_error = RipperError::from(io_error);

        match ripper_error {
            RipperError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }
}
