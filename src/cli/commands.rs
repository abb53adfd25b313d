//! Command implementations for text-ripper CLI.

use std::sync::Arc;

use crate::cli::args::*;
use crate::config::{ColumnSelector, CommonConfig, RankConfig, RipConfig};
use crate::error::Result;
use crate::pipeline::FilterChain;
use crate::prefilter::{self, pattern::PatternReplaceFilter};
use crate::processor::{RunStatus, do_rank, do_rip};
use crate::ranking::RankThresholds;
use crate::{plugin, postfilter};

/// Execute a CLI command.
pub fn execute_command(args: RipperArgs) -> Result<RunStatus> {
    match args.command {
        Command::Rip(rip_args) => do_rip(rip_config(&rip_args)?),
        Command::Rank(rank_args) => do_rank(rank_config(&rank_args)?),
    }
}

/// Build the rip configuration, resolving plugin and filter names.
pub fn rip_config(args: &RipArgs) -> Result<RipConfig> {
    let mut common = common_config(&args.common)?;
    common.prefix = args.prefix.clone().unwrap_or_default();

    let mut filters = common.filters;
    for name in &args.plugins {
        filters = filters.add_plugin(plugin::by_name(name.trim())?);
    }
    for name in &args.postfilters {
        filters = filters.add_post_filter(postfilter::by_name(name.trim())?);
    }
    common.filters = filters;

    Ok(RipConfig {
        common,
        quotes: args.quote.clone(),
        replace_text: args.replace,
        drop_empty: args.drop_empty,
        stop_word: RankThresholds {
            top_number: args.stop_top,
            top_percent: args.stop_top_percent,
            last_number: args.stop_last,
            last_percent: args.stop_last_percent,
            unique: args.stop_unique,
        },
    })
}

/// Build the rank configuration.
pub fn rank_config(args: &RankArgs) -> Result<RankConfig> {
    Ok(RankConfig {
        common: common_config(&args.common)?,
        thresholds: RankThresholds {
            top_number: args.top,
            top_percent: args.top_percent,
            last_number: args.last,
            last_percent: args.last_percent,
            unique: args.unique,
        },
    })
}

fn common_config(args: &CommonArgs) -> Result<CommonConfig> {
    let column = match (&args.column_index, &args.column) {
        (Some(index), _) => Some(ColumnSelector::Index(*index)),
        (None, Some(name)) => Some(ColumnSelector::Name(name.clone())),
        (None, None) => None,
    };

    Ok(CommonConfig {
        input: Some(args.input.clone()),
        output: args.output.clone(),
        column,
        engine: args.engine,
        dictionary: args.dictionary.clone(),
        user_dictionary: args.user_dictionary.clone(),
        show: args.show,
        debug: args.debug,
        progress_interval: args.progress,
        filters: pre_filter_chain(args)?,
        min_letter_size: args.min_letter_size,
        stop_word_path: args.stop_word.clone(),
        use_original_form: args.original,
        use_noun: args.noun,
        use_verb: args.verb,
        use_adjective: args.adjective,
        ..CommonConfig::default()
    })
}

/// Pre-filters in order: the named ones, `--neologd`, then `--remove-pattern`.
fn pre_filter_chain(args: &CommonArgs) -> Result<FilterChain> {
    let mut names: Vec<&str> = args.prefilters.iter().map(|n| n.trim()).collect();
    if args.neologd && !names.contains(&"neologd") {
        names.push("neologd");
    }

    let mut chain = FilterChain::new();
    for name in names {
        chain = chain.add_pre_filter(prefilter::by_name(name)?);
    }
    if let Some(pattern) = &args.remove_pattern {
        chain = chain.add_pre_filter(Arc::new(PatternReplaceFilter::new(pattern, "")?));
    }
    Ok(chain)
}
