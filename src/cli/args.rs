//! Command line argument parsing for text-ripper using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::EngineKind;

/// text-ripper - Split Japanese text in CSV/TSV files into words
#[derive(Parser, Debug, Clone)]
#[command(name = "text-ripper")]
#[command(about = "Split Japanese text in CSV/TSV files into words")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct RipperArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=debug, 3=trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl RipperArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }

    /// Whether per-row debug dumps were requested.
    pub fn debug(&self) -> bool {
        match &self.command {
            Command::Rip(args) => args.common.debug,
            Command::Rank(args) => args.common.debug,
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Separate text into words and add derived columns
    Rip(RipArgs),

    /// Rank word frequencies of a column
    Rank(RankArgs),
}

/// Options shared by every command
#[derive(Args, Debug, Clone)]
pub struct CommonArgs {
    /// Input file (.csv or .tsv)
    #[arg(short, long, value_name = "FILE")]
    pub input: PathBuf,

    /// Output file (.csv or .tsv)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Target column name
    #[arg(short, long, value_name = "NAME")]
    pub column: Option<String>,

    /// Target column index (first=1); wins over --column
    #[arg(long = "column-index", value_name = "INDEX")]
    pub column_index: Option<usize>,

    /// Morphological engine
    #[arg(long, value_enum, default_value_t = EngineKind::Lindera)]
    pub engine: EngineKind,

    /// Dictionary URI (e.g. embedded://ipadic or a directory path)
    #[arg(long = "dic", value_name = "URI")]
    pub dictionary: Option<String>,

    /// User dictionary path
    #[arg(long = "user-dic", value_name = "PATH")]
    pub user_dictionary: Option<String>,

    /// Stop word list file, one word per line
    #[arg(long = "stopword", value_name = "FILE")]
    pub stop_word: Option<PathBuf>,

    /// Print results to the console
    #[arg(long)]
    pub show: bool,

    /// Print a dump of every row to the console
    #[arg(long)]
    pub debug: bool,

    /// Seconds between progress reports (0 disables them)
    #[arg(long, value_name = "SECONDS", default_value_t = 30)]
    pub progress: u64,

    /// Minimum number of characters of a word
    #[arg(long = "min", value_name = "SIZE", default_value_t = 1)]
    pub min_letter_size: usize,

    /// Use the original form of words
    #[arg(long)]
    pub original: bool,

    /// Keep nouns as words
    #[arg(long)]
    pub noun: bool,

    /// Keep verbs as words
    #[arg(long)]
    pub verb: bool,

    /// Keep adjectives as words
    #[arg(long)]
    pub adjective: bool,

    /// Apply the neologd normalizer
    #[arg(long)]
    pub neologd: bool,

    /// Pre-filters to apply, in order (default, neologd, nfkc)
    #[arg(long, value_delimiter = ',', value_name = "NAMES")]
    pub prefilters: Vec<String>,

    /// Regex removed from the text before tokenizing
    #[arg(long = "remove-pattern", value_name = "REGEX")]
    pub remove_pattern: Option<String>,
}

/// Arguments of the rip command
#[derive(Args, Debug, Clone)]
pub struct RipArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Plugins adding columns, in order
    #[arg(long, value_delimiter = ',', value_name = "NAMES")]
    pub plugins: Vec<String>,

    /// Post-filters adding columns, in order
    #[arg(long, value_delimiter = ',', value_name = "NAMES")]
    pub postfilters: Vec<String>,

    /// Columns to wrap in double quotes
    #[arg(long, value_delimiter = ',', value_name = "COLUMNS")]
    pub quote: Vec<String>,

    /// Prefix of added columns
    #[arg(long, value_name = "PREFIX")]
    pub prefix: Option<String>,

    /// Replace the target column with the words
    #[arg(short, long)]
    pub replace: bool,

    /// Drop rows without words
    #[arg(long = "dropempty")]
    pub drop_empty: bool,

    /// Use the top N ranked words as stop words
    #[arg(long = "stoptop", value_name = "N", default_value_t = 0)]
    pub stop_top: usize,

    /// Use the top ranked words up to this share as stop words (0.0 ~ 1.0)
    #[arg(long = "stoptopp", value_name = "RATIO", default_value_t = 0.0)]
    pub stop_top_percent: f64,

    /// Use the last N ranked words as stop words
    #[arg(long = "stoplast", value_name = "N", default_value_t = 0)]
    pub stop_last: usize,

    /// Use the last ranked words up to this share as stop words (0.0 ~ 1.0)
    #[arg(long = "stoplastp", value_name = "RATIO", default_value_t = 0.0)]
    pub stop_last_percent: f64,

    /// Count a word once per line when ranking stop words
    #[arg(long = "stopunique")]
    pub stop_unique: bool,
}

/// Arguments of the rank command
#[derive(Args, Debug, Clone)]
pub struct RankArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Show the top N words
    #[arg(long, value_name = "N", default_value_t = 0)]
    pub top: usize,

    /// Show the top words up to this share (0.0 ~ 1.0)
    #[arg(long = "topp", value_name = "RATIO", default_value_t = 0.0)]
    pub top_percent: f64,

    /// Show the last N words
    #[arg(long, value_name = "N", default_value_t = 0)]
    pub last: usize,

    /// Show the last words up to this share (0.0 ~ 1.0)
    #[arg(long = "lastp", value_name = "RATIO", default_value_t = 0.0)]
    pub last_percent: f64,

    /// Count a word once per line
    #[arg(long)]
    pub unique: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rip_command() {
        let args = RipperArgs::try_parse_from([
            "text-ripper",
            "rip",
            "--input",
            "in.csv",
            "--output",
            "out.tsv",
            "--column",
            "comment",
            "--plugins",
            "alphanum_count,kana_count",
            "--postfilters",
            "ratio_jp_count",
            "--quote",
            "title,comment",
            "--replace",
            "--dropempty",
            "--stoptop",
            "10",
            "--stoplastp",
            "0.2",
        ])
        .unwrap();

        if let Command::Rip(rip_args) = args.command {
            assert_eq!(rip_args.common.input, PathBuf::from("in.csv"));
            assert_eq!(rip_args.common.output, Some(PathBuf::from("out.tsv")));
            assert_eq!(rip_args.common.column.as_deref(), Some("comment"));
            assert_eq!(rip_args.plugins, vec!["alphanum_count", "kana_count"]);
            assert_eq!(rip_args.postfilters, vec!["ratio_jp_count"]);
            assert_eq!(rip_args.quote, vec!["title", "comment"]);
            assert!(rip_args.replace);
            assert!(rip_args.drop_empty);
            assert_eq!(rip_args.stop_top, 10);
            assert_eq!(rip_args.stop_last_percent, 0.2);
            assert_eq!(rip_args.common.progress, 30);
            assert_eq!(rip_args.common.engine, EngineKind::Lindera);
        } else {
            panic!("Expected Rip command");
        }
    }

    #[test]
    fn test_rank_command() {
        let args = RipperArgs::try_parse_from([
            "text-ripper",
            "rank",
            "-i",
            "in.csv",
            "--column-index",
            "2",
            "--engine",
            "whitespace",
            "--top",
            "5",
            "--lastp",
            "0.1",
            "--unique",
            "--show",
        ])
        .unwrap();

        if let Command::Rank(rank_args) = args.command {
            assert_eq!(rank_args.common.column_index, Some(2));
            assert_eq!(rank_args.common.engine, EngineKind::Whitespace);
            assert_eq!(rank_args.top, 5);
            assert_eq!(rank_args.last_percent, 0.1);
            assert!(rank_args.unique);
            assert!(rank_args.common.show);
        } else {
            panic!("Expected Rank command");
        }
    }

    #[test]
    fn test_input_is_required() {
        assert!(RipperArgs::try_parse_from(["text-ripper", "rip", "--column", "a"]).is_err());
    }

    #[test]
    fn test_verbosity_levels() {
        let args = RipperArgs::try_parse_from(["text-ripper", "rank", "-i", "a.csv"]).unwrap();
        assert_eq!(args.verbosity(), 1);
        assert!(!args.debug());

        let args =
            RipperArgs::try_parse_from(["text-ripper", "-vv", "rank", "-i", "a.csv"]).unwrap();
        assert_eq!(args.verbosity(), 2);

        let args = RipperArgs::try_parse_from(["text-ripper", "--quiet", "rip", "-i", "a.csv", "--debug"])
            .unwrap();
        assert_eq!(args.verbosity(), 0);
        assert!(args.debug());
    }
}
