use std::fs::File;
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use csv::{ByteRecord, Reader, ReaderBuilder};

use crate::error::Result;
use crate::table::TableFormat;

/// Record reader that tracks how many records have been read.
///
/// Fields are decoded as UTF-8 one by one; invalid bytes become U+FFFD.
///
/// The position is shared through an atomic counter so a progress monitor on
/// another thread can observe it.
pub struct RecordReader {
    inner: Reader<File>,
    record: ByteRecord,
    position: Arc<AtomicUsize>,
}

impl RecordReader {
    /// Open `path`; the format is taken from its extension.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let format = TableFormat::from_path(&path)?;
        let file = File::open(path.as_ref())?;
        let inner = ReaderBuilder::new()
            .delimiter(format.delimiter())
            .has_headers(false)
            .flexible(true)
            .from_reader(file);

        Ok(RecordReader {
            inner,
            record: ByteRecord::new(),
            position: Arc::new(AtomicUsize::new(0)),
        })
    }

    /// Read the next record, `None` at end of input.
    pub fn read_record(&mut self) -> Result<Option<Vec<String>>> {
        if !self.inner.read_byte_record(&mut self.record)? {
            return Ok(None);
        }
        self.position.fetch_add(1, Ordering::Relaxed);
        Ok(Some(
            self.record
                .iter()
                .map(|field| String::from_utf8_lossy(field).into_owned())
                .collect(),
        ))
    }

    /// Number of records read so far, the header included.
    pub fn position(&self) -> usize {
        self.position.load(Ordering::Relaxed)
    }

    /// Shared handle to the position counter.
    pub fn position_handle(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.position)
    }
}

impl std::fmt::Debug for RecordReader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecordReader")
            .field("position", &self.position())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    use tempfile::Builder;

    #[test]
    fn test_read_csv_with_ragged_rows() {
        let mut file = Builder::new().suffix(".csv").tempfile().unwrap();
        write!(file, "id,text\n1,\"hello, world\"\n2\n").unwrap();

        let mut reader = RecordReader::open(file.path()).unwrap();
        assert_eq!(reader.read_record().unwrap().unwrap(), vec!["id", "text"]);
        assert_eq!(
            reader.read_record().unwrap().unwrap(),
            vec!["1", "hello, world"]
        );
        assert_eq!(reader.read_record().unwrap().unwrap(), vec!["2"]);
        assert_eq!(reader.position(), 3);
        assert!(reader.read_record().unwrap().is_none());
        assert_eq!(reader.position(), 3);
    }

    #[test]
    fn test_read_tsv() {
        let mut file = Builder::new().suffix(".tsv").tempfile().unwrap();
        write!(file, "id\ttext\n1\ta,b\n").unwrap();

        let mut reader = RecordReader::open(file.path()).unwrap();
        let handle = reader.position_handle();
        reader.read_record().unwrap();
        assert_eq!(reader.read_record().unwrap().unwrap(), vec!["1", "a,b"]);
        assert_eq!(handle.load(Ordering::Relaxed), 2);
    }

    #[test]
    fn test_invalid_utf8_is_replaced() {
        let mut file = Builder::new().suffix(".csv").tempfile().unwrap();
        file.write_all(b"id,text\n1,bad \xff\xfe bytes\n2,next\n").unwrap();

        let mut reader = RecordReader::open(file.path()).unwrap();
        reader.read_record().unwrap();
        assert_eq!(
            reader.read_record().unwrap().unwrap(),
            vec!["1", "bad \u{FFFD}\u{FFFD} bytes"]
        );
        assert_eq!(reader.read_record().unwrap().unwrap(), vec!["2", "next"]);
        assert_eq!(reader.position(), 3);
    }

    #[test]
    fn test_unsupported_extension() {
        let file = Builder::new().suffix(".json").tempfile().unwrap();
        assert!(RecordReader::open(file.path()).is_err());
    }
}
