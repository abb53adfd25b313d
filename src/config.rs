//! Run configuration.
//!
//! Configurations are plain values: build one (directly or from the CLI),
//! call `init()` once to load files and apply defaults, then `validate()`.
//! Processors only read them afterwards.
//!
//! # Examples
//!
//! ```no_run
//! use text_ripper::config::{ColumnSelector, RipConfig};
//!
//! let mut config = RipConfig::default();
//! config.common.input = Some("reviews.csv".into());
//! config.common.output = Some("reviews_out.csv".into());
//! config.common.column = Some(ColumnSelector::Name("comment".to_string()));
//! config.init().unwrap();
//! config.validate().unwrap();
//! ```

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use clap::ValueEnum;

use crate::analysis::morphology::MorphologicalAnalyzer;
use crate::analysis::morphology::lindera::{DEFAULT_DICTIONARY, LinderaAnalyzer};
use crate::analysis::morphology::whitespace::WhitespaceAnalyzer;
use crate::analysis::tokenizer::{
    POS_ADJECTIVE, POS_NOUN, POS_VERB, TokenizerConfig, WordTokenizer,
};
use crate::error::{Result, RipperError};
use crate::pipeline::FilterChain;

pub use crate::ranking::RankThresholds;

/// Prefix of the columns added by rip mode.
pub const DEFAULT_PREFIX: &str = "op_";

/// Top count used by rank mode when no top threshold is set.
pub const DEFAULT_TOP_NUMBER: usize = 100;

/// Seconds between progress reports.
pub const DEFAULT_PROGRESS_INTERVAL: u64 = 30;

/// How the target column is chosen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ColumnSelector {
    /// Header name, looked up in the first record
    Name(String),
    /// 1-based position
    Index(usize),
}

impl fmt::Display for ColumnSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnSelector::Name(name) => write!(f, "{}", name),
            ColumnSelector::Index(index) => write!(f, "#{}", index),
        }
    }
}

/// Morphological engine backing the tokenizer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum EngineKind {
    /// Lindera with an IPADIC-format dictionary
    #[default]
    Lindera,
    /// Split on whitespace; for text that is already segmented
    Whitespace,
}

/// Options shared by rip and rank.
#[derive(Clone, Debug)]
pub struct CommonConfig {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub column: Option<ColumnSelector>,

    pub engine: EngineKind,
    /// Dictionary URI; `None` means the engine default
    pub dictionary: Option<String>,
    pub user_dictionary: Option<String>,

    /// Log each result line
    pub show: bool,
    /// Log a dump of every row
    pub debug: bool,
    /// Seconds between progress reports, 0 disables them
    pub progress_interval: u64,
    /// Prefix of added output columns
    pub prefix: String,

    pub filters: FilterChain,

    pub min_letter_size: usize,
    pub stop_word_path: Option<PathBuf>,
    pub stop_words: Vec<String>,
    pub use_original_form: bool,
    pub use_noun: bool,
    pub use_verb: bool,
    pub use_adjective: bool,
}

impl Default for CommonConfig {
    fn default() -> Self {
        CommonConfig {
            input: None,
            output: None,
            column: None,
            engine: EngineKind::default(),
            dictionary: None,
            user_dictionary: None,
            show: false,
            debug: false,
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
            prefix: String::new(),
            filters: FilterChain::new(),
            min_letter_size: 1,
            stop_word_path: None,
            stop_words: Vec::new(),
            use_original_form: false,
            use_noun: false,
            use_verb: false,
            use_adjective: false,
        }
    }
}

impl CommonConfig {
    /// Load the stop-word file, if any.
    pub fn init(&mut self) -> Result<()> {
        if let Some(path) = &self.stop_word_path {
            let words = load_stop_words(path)?;
            self.stop_words.extend(words);
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        match &self.column {
            None => {
                return Err(RipperError::config(
                    "no target column; set --column <name> or --column-index <index>",
                ));
            }
            Some(ColumnSelector::Index(0)) => {
                return Err(RipperError::config("column index starts at 1"));
            }
            Some(ColumnSelector::Name(name)) if name.is_empty() => {
                return Err(RipperError::config("column name is empty"));
            }
            _ => {}
        }

        match &self.input {
            Some(path) if !path.as_os_str().is_empty() => Ok(()),
            _ => Err(RipperError::config(
                "no input file; set --input <input file path>",
            )),
        }
    }

    /// Parts of speech kept as words; empty means the tokenizer default.
    pub fn pos_list(&self) -> Vec<String> {
        let mut pos = Vec::new();
        if self.use_noun {
            pos.push(POS_NOUN.to_string());
        }
        if self.use_verb {
            pos.push(POS_VERB.to_string());
        }
        if self.use_adjective {
            pos.push(POS_ADJECTIVE.to_string());
        }
        pos
    }

    pub fn tokenizer_config(&self) -> TokenizerConfig {
        TokenizerConfig {
            word_pos_list: self.pos_list(),
            stop_words: self.stop_words.clone(),
            min_letter_size: self.min_letter_size,
            use_original_form: self.use_original_form,
        }
    }

    /// Build the tokenizer, loading the configured dictionary.
    pub fn build_tokenizer(&self) -> Result<WordTokenizer> {
        let analyzer: Box<dyn MorphologicalAnalyzer> = match self.engine {
            EngineKind::Lindera => Box::new(LinderaAnalyzer::new(
                "normal",
                self.dictionary.as_deref().unwrap_or(DEFAULT_DICTIONARY),
                self.user_dictionary.as_deref(),
            )?),
            EngineKind::Whitespace => Box::new(WhitespaceAnalyzer::new()),
        };

        let mut tokenizer = WordTokenizer::new(analyzer, self.tokenizer_config());
        if self.engine == EngineKind::Whitespace {
            if let Some(dictionary) = &self.dictionary {
                tokenizer.set_dictionary(dictionary)?;
            }
        }
        Ok(tokenizer)
    }
}

/// Options of the rip command.
#[derive(Clone, Debug, Default)]
pub struct RipConfig {
    pub common: CommonConfig,
    /// Columns whose values are wrapped in double quotes
    pub quotes: Vec<String>,
    /// Overwrite the target column instead of adding a text column
    pub replace_text: bool,
    /// Skip rows without words
    pub drop_empty: bool,
    /// Thresholds of the ranking pass that seeds stop words
    pub stop_word: RankThresholds,
}

impl RipConfig {
    pub fn init(&mut self) -> Result<()> {
        if self.common.prefix.is_empty() {
            self.common.prefix = DEFAULT_PREFIX.to_string();
        }
        self.quotes = self
            .quotes
            .iter()
            .map(|q| q.trim().to_string())
            .filter(|q| !q.is_empty())
            .collect();
        self.common.init()
    }

    pub fn validate(&self) -> Result<()> {
        self.common.validate()?;
        if self.common.output.is_none() && !self.common.show && !self.common.debug {
            return Err(RipperError::config(
                "no output file; set --output <output file path> (or --show)",
            ));
        }
        self.stop_word.validate()
    }

    /// Check whether a ranking pass seeds the stop words.
    pub fn use_ranking_for_stop_word(&self) -> bool {
        self.stop_word.is_enabled()
    }

    /// Configuration of the stop-word ranking pass: same input, column,
    /// tokenizer and pre-filters, no output.
    pub fn stop_word_rank_config(&self) -> RankConfig {
        RankConfig {
            common: CommonConfig {
                output: None,
                show: false,
                debug: false,
                progress_interval: 0,
                ..self.common.clone()
            },
            thresholds: self.stop_word.clone(),
        }
    }
}

/// Options of the rank command.
#[derive(Clone, Debug, Default)]
pub struct RankConfig {
    pub common: CommonConfig,
    pub thresholds: RankThresholds,
}

impl RankConfig {
    /// Load stop words; the top cut defaults to 100 entries when neither
    /// top limit is set, whatever the last limits are.
    pub fn init(&mut self) -> Result<()> {
        if self.thresholds.top_number == 0 && self.thresholds.top_percent == 0.0 {
            self.thresholds.top_number = DEFAULT_TOP_NUMBER;
        }
        self.common.init()
    }

    pub fn validate(&self) -> Result<()> {
        self.common.validate()?;
        if self.common.output.is_none() && !self.common.show {
            return Err(RipperError::config(
                "no output file; set --output <output file path> (or --show)",
            ));
        }
        self.thresholds.validate()
    }
}

/// Read a newline separated word list; blank lines are skipped.
pub fn load_stop_words<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let content = fs::read_to_string(path.as_ref())?;
    Ok(content
        .lines()
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    use tempfile::NamedTempFile;

    fn common() -> CommonConfig {
        CommonConfig {
            input: Some(PathBuf::from("in.csv")),
            column: Some(ColumnSelector::Name("text".to_string())),
            ..CommonConfig::default()
        }
    }

    #[test]
    fn test_common_validation() {
        assert!(common().validate().is_ok());

        let missing_column = CommonConfig {
            column: None,
            ..common()
        };
        assert!(matches!(missing_column.validate(), Err(RipperError::Config(_))));

        let zero_index = CommonConfig {
            column: Some(ColumnSelector::Index(0)),
            ..common()
        };
        assert!(zero_index.validate().is_err());

        let missing_input = CommonConfig {
            input: None,
            ..common()
        };
        assert!(missing_input.validate().is_err());
    }

    #[test]
    fn test_rip_requires_a_sink() {
        let mut config = RipConfig {
            common: common(),
            ..RipConfig::default()
        };
        config.init().unwrap();
        assert_eq!(config.common.prefix, DEFAULT_PREFIX);
        assert!(config.validate().is_err());

        config.common.debug = true;
        assert!(config.validate().is_ok());

        config.common.debug = false;
        config.common.output = Some(PathBuf::from("out.csv"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rip_percent_range() {
        let mut config = RipConfig {
            common: CommonConfig {
                show: true,
                ..common()
            },
            ..RipConfig::default()
        };
        config.stop_word.top_percent = 1.5;
        assert!(config.validate().is_err());

        config.stop_word.top_percent = 1.0;
        assert!(config.validate().is_ok());
        assert!(config.use_ranking_for_stop_word());
    }

    #[test]
    fn test_rank_defaults_and_sink() {
        let mut config = RankConfig {
            common: common(),
            ..RankConfig::default()
        };
        config.init().unwrap();
        assert_eq!(config.thresholds.top_number, DEFAULT_TOP_NUMBER);
        assert!(config.validate().is_err());

        // debug alone is not a sink for rank
        config.common.debug = true;
        assert!(config.validate().is_err());

        config.common.show = true;
        assert!(config.validate().is_ok());

        let mut config = RankConfig {
            common: common(),
            thresholds: RankThresholds {
                top_percent: 0.5,
                ..RankThresholds::default()
            },
        };
        config.init().unwrap();
        assert_eq!(config.thresholds.top_number, 0);

        let mut config = RankConfig {
            common: common(),
            thresholds: RankThresholds {
                last_number: 1,
                ..RankThresholds::default()
            },
        };
        config.init().unwrap();
        assert_eq!(config.thresholds.top_number, DEFAULT_TOP_NUMBER);
        assert_eq!(config.thresholds.last_number, 1);
    }

    #[test]
    fn test_stop_word_rank_config_has_no_output() {
        let config = RipConfig {
            common: CommonConfig {
                output: Some(PathBuf::from("out.csv")),
                show: true,
                stop_words: vec!["the".to_string()],
                ..common()
            },
            stop_word: RankThresholds {
                top_number: 3,
                unique: true,
                ..RankThresholds::default()
            },
            ..RipConfig::default()
        };

        let rank = config.stop_word_rank_config();
        assert!(rank.common.output.is_none());
        assert!(!rank.common.show);
        assert_eq!(rank.common.progress_interval, 0);
        assert_eq!(rank.common.stop_words, vec!["the"]);
        assert_eq!(rank.thresholds.top_number, 3);
        assert!(rank.thresholds.unique);
    }

    #[test]
    fn test_load_stop_words() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "これ\r\nそれ\n\nあれ").unwrap();

        let mut config = CommonConfig {
            stop_word_path: Some(file.path().to_path_buf()),
            stop_words: vec!["どれ".to_string()],
            ..common()
        };
        config.init().unwrap();
        assert_eq!(config.stop_words, vec!["どれ", "これ", "それ", "あれ"]);
    }

    #[test]
    fn test_missing_stop_word_file() {
        let mut config = CommonConfig {
            stop_word_path: Some(PathBuf::from("/nonexistent/stopwords.txt")),
            ..common()
        };
        assert!(matches!(config.init(), Err(RipperError::Io(_))));
    }

    #[test]
    fn test_pos_list() {
        let config = CommonConfig {
            use_noun: true,
            use_adjective: true,
            ..common()
        };
        assert_eq!(config.pos_list(), vec![POS_NOUN, POS_ADJECTIVE]);
        assert!(common().pos_list().is_empty());
    }

    #[test]
    fn test_whitespace_engine_rejects_dictionary() {
        let config = CommonConfig {
            engine: EngineKind::Whitespace,
            dictionary: Some("/some/dictionary".to_string()),
            ..common()
        };
        assert!(config.build_tokenizer().is_err());

        let config = CommonConfig {
            engine: EngineKind::Whitespace,
            ..common()
        };
        assert_eq!(config.build_tokenizer().unwrap().engine_name(), "whitespace");
    }
}
