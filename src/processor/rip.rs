use log::{debug, info, warn};

use crate::config::RipConfig;
use crate::error::Result;
use crate::pipeline::FilterChain;
use crate::processor::RunStatus;
use crate::processor::common::{CommonProcessor, log_text_data, row_fault};
use crate::processor::rank::RankProcessor;

pub const COLUMN_TEXT: &str = "text";
pub const COLUMN_WORD_COUNT: &str = "word_count";
pub const COLUMN_NON_WORD_COUNT: &str = "non_word_count";
pub const COLUMN_RAW_CHAR_COUNT: &str = "raw_char_count";

/// Build the rip output header.
///
/// Layout: input columns, `text` unless replacing, the three counts, one
/// column per plugin, one column per post-filter. Added columns carry
/// `prefix`.
pub fn build_output_header(
    input_header: &[String],
    prefix: &str,
    replace_text: bool,
    filters: &FilterChain,
) -> Vec<String> {
    let mut header = input_header.to_vec();
    if !replace_text {
        header.push(format!("{prefix}{COLUMN_TEXT}"));
    }
    for column in [COLUMN_WORD_COUNT, COLUMN_NON_WORD_COUNT, COLUMN_RAW_CHAR_COUNT] {
        header.push(format!("{prefix}{column}"));
    }
    for title in filters.plugin_titles() {
        header.push(format!("{prefix}{title}"));
    }
    for title in filters.post_filter_titles() {
        header.push(format!("{prefix}{title}"));
    }
    header
}

/// Splits the target column into words and appends derived columns.
pub struct RipProcessor {
    common: CommonProcessor,
    config: RipConfig,
    quote_indexes: Vec<usize>,
}

impl RipProcessor {
    pub fn new(config: RipConfig) -> Result<Self> {
        let common = CommonProcessor::new(&config.common)?;
        Ok(RipProcessor {
            common,
            config,
            quote_indexes: Vec::new(),
        })
    }

    /// Read the input header, resolving the target and quoted columns.
    pub fn read_header(&mut self) -> Result<()> {
        self.common.read_header()?;

        let mut indexes = Vec::with_capacity(self.config.quotes.len());
        for name in &self.config.quotes {
            match self.common.header_index(name) {
                Some(idx) => indexes.push(idx),
                None => warn!("quote column not found in header: {}", name),
            }
        }
        indexes.sort_unstable();
        indexes.dedup();
        self.quote_indexes = indexes;
        Ok(())
    }

    /// Write the output header, reading the input header first if needed.
    pub fn write_header(&mut self) -> Result<()> {
        if !self.common.is_header_read() {
            self.read_header()?;
        }
        let header = build_output_header(
            self.common.input_header(),
            &self.config.common.prefix,
            self.config.replace_text,
            self.common.filters(),
        );
        self.common.write_header(header)
    }

    pub fn common(&self) -> &CommonProcessor {
        &self.common
    }

    /// 0-based indexes of the quoted columns.
    pub fn quote_indexes(&self) -> &[usize] {
        &self.quote_indexes
    }

    /// Run with the progress monitor.
    pub fn run_with_progress(&mut self) -> Result<RunStatus> {
        let _monitor = self.common.start_progress()?;

        info!("read and write lines...");
        let status = self.run()?;
        if status.is_completed() {
            info!("finish process");
        }
        Ok(status)
    }

    /// Process every row; seeds stop words from a ranking pass first when
    /// configured.
    pub fn run(&mut self) -> Result<RunStatus> {
        if self.common.output_header().is_empty() {
            self.write_header()?;
        }

        if self.config.use_ranking_for_stop_word() {
            let status = self.seed_stop_words()?;
            if !status.is_completed() {
                return Ok(status);
            }
        }

        while let Some(row) = self.common.read_record()? {
            let line = self.common.position();
            let text = self.common.target_cell(&row).unwrap_or_default().to_string();
            if let Err(err) = self.process_row(row) {
                return row_fault("rip", line, text, err);
            }
        }
        Ok(RunStatus::Completed)
    }

    /// Rank the whole input on a separate reader and add both cuts to the
    /// stop words.
    fn seed_stop_words(&mut self) -> Result<RunStatus> {
        info!("ranking words for stop words...");
        let mut ranking = RankProcessor::new(self.config.stop_word_rank_config())?;
        let run = ranking.get_rank()?;
        if !run.status.is_completed() {
            return Ok(run.status);
        }

        let top = run.result.top_words();
        let last = run.result.last_words();
        debug!("stop words from ranking: top {:?}, last {:?}", top, last);

        let tokenizer = self.common.tokenizer_mut();
        tokenizer.add_stop_words(top);
        tokenizer.add_stop_words(last);
        info!("stop words: {}", tokenizer.stop_word_count());
        Ok(RunStatus::Completed)
    }

    fn process_row(&mut self, mut line: Vec<String>) -> Result<()> {
        let idx = self.common.column_index();
        let raw = self.common.target_cell(&line)?.to_string();
        line.resize(self.common.input_header().len(), String::new());

        let text = self.common.analyze(&raw)?;
        let debug = self.config.common.debug;
        if debug {
            log_text_data(&text);
        }

        let words = text.words().words();
        let word_line = words.join(" ");
        if self.config.common.show {
            info!("{}", word_line);
        }
        if self.config.drop_empty && word_line.is_empty() {
            return Ok(());
        }

        let mut results = Vec::with_capacity(
            self.common.output_header().len().saturating_sub(line.len()),
        );
        let word_count = words.len().to_string();
        if self.config.replace_text {
            line[idx] = word_line;
        } else {
            results.push(word_line);
        }
        results.push(word_count);
        results.push(text.non_words().len().to_string());
        results.push(raw.chars().count().to_string());

        let filters = self.common.filters();
        filters.apply_plugins(&text, &mut results, debug);
        filters.apply_post_filters(
            self.common.output_header(),
            &self.config.common.prefix,
            &line,
            &mut results,
            debug,
        );

        for &i in &self.quote_indexes {
            line[i] = format!("\"{}\"", line[i]);
        }

        line.extend(results);
        self.common.write_record(&line)
    }
}
