use log::{debug, info};

use crate::config::RankConfig;
use crate::error::Result;
use crate::processor::RunStatus;
use crate::processor::common::{CommonProcessor, log_text_data, row_fault};
use crate::ranking::{RankDirection, RankResult, WordCount, WordCounter};

/// Columns of the rank report.
pub const RANK_HEADER: [&str; 5] = ["type", "rank", "word", "countN", "countP"];

/// Outcome of a counting pass.
#[derive(Clone, Debug)]
pub struct RankRun {
    /// Counts and cuts; partial when the pass was aborted
    pub result: RankResult,
    pub status: RunStatus,
}

/// Word frequency ranking over the target column.
pub struct RankProcessor {
    common: CommonProcessor,
    config: RankConfig,
}

impl RankProcessor {
    pub fn new(config: RankConfig) -> Result<Self> {
        let common = CommonProcessor::new(&config.common)?;
        Ok(RankProcessor { common, config })
    }

    pub fn read_header(&mut self) -> Result<()> {
        self.common.read_header()
    }

    /// Write the report header, reading the input header first if needed.
    pub fn write_header(&mut self) -> Result<()> {
        if !self.common.is_header_read() {
            self.read_header()?;
        }
        self.common
            .write_header(RANK_HEADER.iter().map(|s| s.to_string()).collect())
    }

    pub fn common(&self) -> &CommonProcessor {
        &self.common
    }

    /// Run the report with the progress monitor.
    pub fn run_with_progress(&mut self) -> Result<RunStatus> {
        let _monitor = self.common.start_progress()?;

        info!("read lines...");
        let status = self.run()?;
        if status.is_completed() {
            info!("finish process");
        }
        Ok(status)
    }

    /// Count every row and write the top and last lists.
    pub fn run(&mut self) -> Result<RunStatus> {
        let run = self.get_rank()?;
        if !run.status.is_completed() {
            return Ok(run.status);
        }

        info!("Total Words: {}", run.result.total_word_size());
        self.output(RankDirection::Top, &run.result.top_list)?;
        self.output(RankDirection::Last, &run.result.last_list)?;
        Ok(RunStatus::Completed)
    }

    /// Count word frequencies over the remaining rows and cut the lists.
    pub fn get_rank(&mut self) -> Result<RankRun> {
        if !self.common.is_header_read() {
            self.read_header()?;
        }

        let mut counter = WordCounter::new(self.config.thresholds.unique);
        let mut status = RunStatus::Completed;
        while let Some(row) = self.common.read_record()? {
            let line = self.common.position();
            if let Err(err) = self.count_row(&row, &mut counter) {
                let text = self.common.target_cell(&row).unwrap_or_default().to_string();
                status = row_fault("get_rank", line, text, err)?;
                break;
            }
        }

        let mut result = counter.into_result();
        result.apply_thresholds(&self.config.thresholds);
        debug!(
            "ranked {} words: top {}, last {}",
            result.total_word_size(),
            result.top_list.len(),
            result.last_list.len()
        );
        Ok(RankRun { result, status })
    }

    fn count_row(&self, row: &[String], counter: &mut WordCounter) -> Result<()> {
        let raw = self.common.target_cell(row)?;
        let text = self.common.analyze(raw)?;
        if self.config.common.debug {
            log_text_data(&text);
        }
        counter.add_words(text.words().words());
        Ok(())
    }

    fn output(&mut self, direction: RankDirection, list: &[WordCount]) -> Result<()> {
        for entry in list {
            if self.config.common.show {
                info!(
                    "[{}] #{} {}:{} ({:.5})",
                    direction.as_str(),
                    entry.rank,
                    entry.word,
                    entry.count,
                    entry.percent
                );
            }

            let record = [
                direction.as_str().to_string(),
                entry.rank.to_string(),
                entry.word.clone(),
                entry.count.to_string(),
                format!("{:.5}", entry.percent),
            ];
            self.common.write_record(&record)?;
        }
        Ok(())
    }
}
