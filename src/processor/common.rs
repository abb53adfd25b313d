use std::sync::Arc;
use std::sync::atomic::AtomicUsize;

use log::{debug, error};

use crate::analysis::tokenizer::WordTokenizer;
use crate::config::{ColumnSelector, CommonConfig};
use crate::error::{Result, RipperError};
use crate::pipeline::{FilterChain, TextData};
use crate::processor::RunStatus;
use crate::processor::progress::ProgressMonitor;
use crate::table::{RecordReader, RecordWriter};

/// Reader, writer, tokenizer and filters shared by both commands.
pub struct CommonProcessor {
    reader: RecordReader,
    writer: RecordWriter,
    tokenizer: WordTokenizer,
    filters: FilterChain,

    input_header: Vec<String>,
    output_header: Vec<String>,
    column_index: usize,
    header_read: bool,

    config: CommonConfig,
}

impl CommonProcessor {
    /// Open the input and output and load the dictionary.
    pub fn new(config: &CommonConfig) -> Result<Self> {
        let input = config
            .input
            .as_ref()
            .ok_or_else(|| RipperError::config("no input file"))?;

        let reader = RecordReader::open(input)?;
        let tokenizer = config.build_tokenizer()?;
        let writer = RecordWriter::from_option(config.output.as_ref())?;

        Ok(CommonProcessor {
            reader,
            writer,
            tokenizer,
            filters: config.filters.clone(),
            input_header: Vec::new(),
            output_header: Vec::new(),
            column_index: 0,
            header_read: false,
            config: config.clone(),
        })
    }

    /// Read the first record and resolve the target column.
    pub fn read_header(&mut self) -> Result<()> {
        let header = self
            .reader
            .read_record()?
            .ok_or_else(|| RipperError::config("input has no header line"))?;

        let column = self
            .config
            .column
            .as_ref()
            .ok_or_else(|| RipperError::config("no target column"))?;

        self.column_index = match column {
            ColumnSelector::Index(index) if *index >= 1 && *index <= header.len() => index - 1,
            ColumnSelector::Index(index) => {
                return Err(RipperError::config(format!(
                    "column index {} is out of range: header has {} columns",
                    index,
                    header.len()
                )));
            }
            ColumnSelector::Name(name) => {
                header.iter().position(|h| h == name).ok_or_else(|| {
                    RipperError::config(format!(
                        "cannot find column name in header: col:[{}] headers:[{}]",
                        name,
                        header.join(",")
                    ))
                })?
            }
        };

        debug!(
            "target column: {} (index {})",
            column, self.column_index
        );
        self.input_header = header;
        self.header_read = true;
        Ok(())
    }

    pub fn is_header_read(&self) -> bool {
        self.header_read
    }

    pub fn input_header(&self) -> &[String] {
        &self.input_header
    }

    pub fn output_header(&self) -> &[String] {
        &self.output_header
    }

    /// Fix the output header and write it.
    pub fn write_header(&mut self, header: Vec<String>) -> Result<()> {
        self.writer.write_record(&header)?;
        self.output_header = header;
        Ok(())
    }

    /// 0-based index of the target column.
    pub fn column_index(&self) -> usize {
        self.column_index
    }

    /// Index of `name` in the input header.
    pub fn header_index(&self, name: &str) -> Option<usize> {
        self.input_header.iter().position(|h| h == name)
    }

    pub fn read_record(&mut self) -> Result<Option<Vec<String>>> {
        self.reader.read_record()
    }

    pub fn write_record(&mut self, record: &[String]) -> Result<()> {
        self.writer.write_record(record)
    }

    /// Target cell of `row`.
    pub fn target_cell<'a>(&self, row: &'a [String]) -> Result<&'a str> {
        row.get(self.column_index).map(String::as_str).ok_or_else(|| {
            RipperError::row(format!(
                "no column {} in a line of {} columns",
                self.column_index + 1,
                row.len()
            ))
        })
    }

    /// Pre-filter and tokenize one cell.
    pub fn analyze(&self, raw: &str) -> Result<TextData> {
        let normalized = self.filters.apply_pre_filters(raw);
        let (words, non_words) = self.tokenizer.tokenize(&normalized)?;
        Ok(TextData::new(raw.to_string(), normalized, words, non_words))
    }

    /// Records read so far, the header included.
    pub fn position(&self) -> usize {
        self.reader.position()
    }

    pub fn position_handle(&self) -> Arc<AtomicUsize> {
        self.reader.position_handle()
    }

    /// Start reporting progress in the background.
    pub fn start_progress(&self) -> Result<Option<ProgressMonitor>> {
        ProgressMonitor::start(self.config.progress_interval, self.position_handle())
    }

    pub fn tokenizer(&self) -> &WordTokenizer {
        &self.tokenizer
    }

    pub fn tokenizer_mut(&mut self) -> &mut WordTokenizer {
        &mut self.tokenizer
    }

    pub fn filters(&self) -> &FilterChain {
        &self.filters
    }

    pub fn config(&self) -> &CommonConfig {
        &self.config
    }
}

/// Turn a failed row into the pass result.
///
/// Row and analysis faults end the pass with [`RunStatus::Aborted`]; any
/// other error is returned as is.
pub(crate) fn row_fault(
    context: &str,
    line: usize,
    text: String,
    err: RipperError,
) -> Result<RunStatus> {
    match err {
        RipperError::Row(_) | RipperError::Analysis(_) => {
            error!(
                "[{}] error occurred on Line:[{}] Text:[{}]: {}",
                context, line, text, err
            );
            Ok(RunStatus::Aborted {
                line,
                text,
                reason: err.to_string(),
            })
        }
        other => Err(other),
    }
}

/// Log the analysis of one row at debug level.
pub(crate) fn log_text_data(text: &TextData) {
    const SEP: &str = "==============================";
    const SEP_MIN: &str = "------";

    let mut lines = vec![
        SEP.to_string(),
        text.raw().to_string(),
        SEP_MIN.to_string(),
        text.normalized().to_string(),
        format!("{} words: {}", SEP_MIN, text.words().len()),
    ];
    lines.extend(text.words().tokens().iter().map(ToString::to_string));
    lines.push(format!("{} non-words: {}", SEP_MIN, text.non_words().len()));
    lines.extend(text.non_words().tokens().iter().map(ToString::to_string));
    lines.push(SEP_MIN.to_string());

    debug!("{}", lines.join("\n"));
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::Path;

    use tempfile::Builder;

    use crate::config::EngineKind;

    fn config(input: &Path, column: ColumnSelector) -> CommonConfig {
        CommonConfig {
            input: Some(input.to_path_buf()),
            column: Some(column),
            engine: EngineKind::Whitespace,
            ..CommonConfig::default()
        }
    }

    fn input(content: &str) -> tempfile::NamedTempFile {
        let mut file = Builder::new().suffix(".csv").tempfile().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    #[test]
    fn test_read_header_by_name_and_index() {
        let file = input("id,title,body\n1,a,b\n");

        let mut processor =
            CommonProcessor::new(&config(file.path(), ColumnSelector::Name("body".into()))).unwrap();
        processor.read_header().unwrap();
        assert_eq!(processor.column_index(), 2);
        assert_eq!(processor.input_header(), ["id", "title", "body"]);
        assert_eq!(processor.header_index("title"), Some(1));
        assert_eq!(processor.position(), 1);

        let mut processor =
            CommonProcessor::new(&config(file.path(), ColumnSelector::Index(2))).unwrap();
        processor.read_header().unwrap();
        assert_eq!(processor.column_index(), 1);
    }

    #[test]
    fn test_read_header_errors() {
        let file = input("id,title\n");

        let mut processor =
            CommonProcessor::new(&config(file.path(), ColumnSelector::Name("body".into()))).unwrap();
        assert!(matches!(processor.read_header(), Err(RipperError::Config(_))));

        let mut processor =
            CommonProcessor::new(&config(file.path(), ColumnSelector::Index(3))).unwrap();
        assert!(matches!(processor.read_header(), Err(RipperError::Config(_))));

        let empty = input("");
        let mut processor =
            CommonProcessor::new(&config(empty.path(), ColumnSelector::Index(1))).unwrap();
        assert!(processor.read_header().is_err());
    }

    #[test]
    fn test_target_cell_and_analyze() {
        let file = input("id,text\n");
        let mut processor =
            CommonProcessor::new(&config(file.path(), ColumnSelector::Name("text".into()))).unwrap();
        processor.read_header().unwrap();

        let row = vec!["1".to_string(), "hello , world".to_string()];
        let cell = processor.target_cell(&row).unwrap();
        let text = processor.analyze(cell).unwrap();
        assert_eq!(text.words().words(), vec!["hello", "world"]);
        assert_eq!(text.non_words().surfaces(), vec![","]);

        let short = vec!["1".to_string()];
        assert!(matches!(processor.target_cell(&short), Err(RipperError::Row(_))));
    }

    #[test]
    fn test_row_fault_policy() {
        let status = row_fault("test", 3, "text".into(), RipperError::row("bad")).unwrap();
        assert_eq!(
            status,
            RunStatus::Aborted {
                line: 3,
                text: "text".into(),
                reason: "Row error: bad".into(),
            }
        );

        let io = std::io::Error::other("disk full");
        assert!(row_fault("test", 3, String::new(), RipperError::from(io)).is_err());
    }

    #[test]
    fn test_missing_input_file() {
        let config = config(Path::new("/nonexistent/input.csv"), ColumnSelector::Index(1));
        assert!(matches!(CommonProcessor::new(&config), Err(RipperError::Io(_))));
    }
}
