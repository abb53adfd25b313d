//! Delimited file backends.
//!
//! The format is picked from the file extension: `.csv` is comma separated,
//! `.tsv` is tab separated. Records may have any number of fields.

use std::path::Path;

use crate::error::{Result, RipperError};

pub mod reader;
pub mod writer;

pub use reader::RecordReader;
pub use writer::RecordWriter;

/// Supported delimited formats.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TableFormat {
    Csv,
    Tsv,
}

impl TableFormat {
    /// Detect the format from the extension of `path`.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        match path.extension().and_then(|e| e.to_str()) {
            Some("csv") => Ok(TableFormat::Csv),
            Some("tsv") => Ok(TableFormat::Tsv),
            other => Err(RipperError::UnsupportedFormat(format!(
                "{} (extension: {})",
                path.display(),
                other.unwrap_or("none")
            ))),
        }
    }

    pub fn delimiter(self) -> u8 {
        match self {
            TableFormat::Csv => b',',
            TableFormat::Tsv => b'\t',
        }
    }
}
