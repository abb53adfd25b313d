use std::fs::File;
use std::path::Path;

use csv::{Writer, WriterBuilder};

use crate::error::Result;
use crate::table::TableFormat;

/// Record sink: a delimited file, or nothing at all.
///
/// A path ending in `.tsv` is written tab separated, anything else comma
/// separated. Every record is flushed as soon as it is written.
pub enum RecordWriter {
    File(Writer<File>),
    Discard,
}

impl RecordWriter {
    /// Create (or truncate) the file at `path`.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let delimiter = TableFormat::from_path(&path)
            .map(TableFormat::delimiter)
            .unwrap_or(b',');
        let file = File::create(path.as_ref())?;
        let writer = WriterBuilder::new()
            .delimiter(delimiter)
            .flexible(true)
            .from_writer(file);
        Ok(RecordWriter::File(writer))
    }

    /// A sink that drops every record.
    pub fn discard() -> Self {
        RecordWriter::Discard
    }

    /// Open `path` when given, otherwise discard.
    pub fn from_option<P: AsRef<Path>>(path: Option<P>) -> Result<Self> {
        match path {
            Some(path) => Self::create(path),
            None => Ok(Self::discard()),
        }
    }

    pub fn write_record<I, S>(&mut self, record: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<[u8]>,
    {
        match self {
            RecordWriter::File(writer) => {
                writer.write_record(record)?;
                writer.flush()?;
                Ok(())
            }
            RecordWriter::Discard => Ok(()),
        }
    }

    pub fn is_discard(&self) -> bool {
        matches!(self, RecordWriter::Discard)
    }
}

impl std::fmt::Debug for RecordWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordWriter::File(_) => write!(f, "RecordWriter::File"),
            RecordWriter::Discard => write!(f, "RecordWriter::Discard"),
        }
    }
}
