//! Word frequency ranking.
//!
//! [`WordCounter`] accumulates word frequencies row by row and produces a
//! [`RankResult`] sorted by descending count (ties by word). The top and
//! last sublists are then cut with [`filter_by_rank`].
//!
//! # Cut rule
//!
//! Entries are scanned from the head (top) or the tail (last) of the sorted
//! list while a running share `sum` of the scanned entries is kept. The scan
//! stops *before* the entry at 1-based rank `r` when
//!
//! ```text
//! r > max_number && sum > max_percent
//! ```
//!
//! where `sum` only covers the entries already taken. Both limits must be
//! exceeded, so a scan always takes at least one entry of a non-empty list.
//!
//! # Examples
//!
//! ```
//! use text_ripper::ranking::{RankThresholds, WordCounter};
//!
//! let mut counter = WordCounter::new(false);
//! counter.add_words(["a", "a", "b"]);
//! counter.add_words(["b", "c"]);
//! counter.add_words(["a"]);
//!
//! let mut result = counter.into_result();
//! result.apply_thresholds(&RankThresholds { top_number: 1, ..Default::default() });
//!
//! assert_eq!(result.total_count, 6);
//! assert_eq!(result.top_words(), vec!["a"]);
//! ```

use std::cmp::Ordering;

use ahash::AHashMap;

use crate::error::{Result, RipperError};

/// Limits of the top and last cuts.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RankThresholds {
    pub top_number: usize,
    /// Share in `[0, 1]`
    pub top_percent: f64,
    pub last_number: usize,
    /// Share in `[0, 1]`
    pub last_percent: f64,
    /// Count a word at most once per row
    pub unique: bool,
}

impl RankThresholds {
    /// Check whether any limit is set.
    pub fn is_enabled(&self) -> bool {
        self.top_number > 0
            || self.top_percent > 0.0
            || self.last_number > 0
            || self.last_percent > 0.0
    }

    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("top percent", self.top_percent),
            ("last percent", self.last_percent),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(RipperError::config(format!(
                    "{} must be between 0.0 and 1.0: {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}

/// One ranked word.
#[derive(Clone, Debug, PartialEq)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
    /// Share of the total count; set when the entry is taken by a cut
    pub percent: f64,
    /// Running share of the cut up to and including this entry
    pub cumulative_percent: f64,
    /// 1-based position within the cut
    pub rank: usize,
}

impl WordCount {
    pub fn new<S: Into<String>>(word: S, count: usize) -> Self {
        WordCount {
            word: word.into(),
            count,
            percent: 0.0,
            cumulative_percent: 0.0,
            rank: 0,
        }
    }
}

/// Direction of a cut.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RankDirection {
    Top,
    Last,
}

impl RankDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            RankDirection::Top => "top",
            RankDirection::Last => "last",
        }
    }

    fn index(self, i: usize, len: usize) -> usize {
        match self {
            RankDirection::Top => i,
            RankDirection::Last => len - i - 1,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct RankResult {
    /// Sum of all counted occurrences
    pub total_count: usize,
    /// Every distinct word, by descending count
    pub list: Vec<WordCount>,
    pub top_list: Vec<WordCount>,
    pub last_list: Vec<WordCount>,
}

impl RankResult {
    /// Number of distinct words.
    pub fn total_word_size(&self) -> usize {
        self.list.len()
    }

    pub fn top_words(&self) -> Vec<&str> {
        self.top_list.iter().map(|w| w.word.as_str()).collect()
    }

    pub fn last_words(&self) -> Vec<&str> {
        self.last_list.iter().map(|w| w.word.as_str()).collect()
    }

    /// Compute both cuts.
    pub fn apply_thresholds(&mut self, thresholds: &RankThresholds) {
        self.top_list = filter_by_rank(
            &self.list,
            self.total_count,
            thresholds.top_number,
            thresholds.top_percent,
            RankDirection::Top,
        );
        self.last_list = filter_by_rank(
            &self.list,
            self.total_count,
            thresholds.last_number,
            thresholds.last_percent,
            RankDirection::Last,
        );
    }
}

/// Accumulates word frequencies.
#[derive(Clone, Debug, Default)]
pub struct WordCounter {
    counts: AHashMap<String, usize>,
    total_count: usize,
    unique: bool,
}

impl WordCounter {
    /// `unique` counts every word at most once per [`WordCounter::add_words`] call.
    pub fn new(unique: bool) -> Self {
        WordCounter {
            unique,
            ..Default::default()
        }
    }

    /// Add the words of one row.
    pub fn add_words<'a, I>(&mut self, words: I)
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut row: AHashMap<&str, usize> = AHashMap::new();
        for word in words {
            *row.entry(word).or_insert(0) += 1;
        }

        for (word, count) in row {
            let count = if self.unique { 1 } else { count };
            *self.counts.entry(word.to_string()).or_insert(0) += count;
            self.total_count += count;
        }
    }

    pub fn total_count(&self) -> usize {
        self.total_count
    }

    /// Sorted frequency list; cuts are left empty.
    pub fn into_result(self) -> RankResult {
        let mut list: Vec<WordCount> = self
            .counts
            .into_iter()
            .map(|(word, count)| WordCount::new(word, count))
            .collect();
        list.sort_by(compare_word_count);

        RankResult {
            total_count: self.total_count,
            list,
            top_list: Vec::new(),
            last_list: Vec::new(),
        }
    }
}

fn compare_word_count(a: &WordCount, b: &WordCount) -> Ordering {
    b.count.cmp(&a.count).then_with(|| a.word.cmp(&b.word))
}

/// Cut `list` from the head or the tail.
///
/// `list` must be sorted by descending count.
pub fn filter_by_rank(
    list: &[WordCount],
    total_count: usize,
    max_number: usize,
    max_percent: f64,
    direction: RankDirection,
) -> Vec<WordCount> {
    let len = list.len();
    let mut sum = 0.0;
    let mut results = Vec::new();

    for i in 0..len {
        let idx = direction.index(i, len);
        let rank = idx + 1;
        if rank > max_number && sum > max_percent {
            break;
        }

        let entry = &list[idx];
        let percent = if total_count == 0 {
            0.0
        } else {
            entry.count as f64 / total_count as f64
        };
        sum += percent;

        results.push(WordCount {
            word: entry.word.clone(),
            count: entry.count,
            percent,
            cumulative_percent: sum,
            rank: i + 1,
        });
    }
    results
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(unique: bool) -> RankResult {
        let mut counter = WordCounter::new(unique);
        for row in ["a a b", "b c", "a"] {
            counter.add_words(row.split_whitespace());
        }
        counter.into_result()
    }

    fn counts(list: &[WordCount]) -> Vec<(&str, usize)> {
        list.iter().map(|w| (w.word.as_str(), w.count)).collect()
    }

    #[test]
    fn test_counting() {
        let result = sample(false);
        assert_eq!(result.total_count, 6);
        assert_eq!(counts(&result.list), vec![("a", 3), ("b", 2), ("c", 1)]);

        let unique = sample(true);
        assert_eq!(unique.total_count, 5);
        assert_eq!(counts(&unique.list), vec![("a", 2), ("b", 2), ("c", 1)]);
    }

    #[test]
    fn test_top_one() {
        let mut result = sample(false);
        result.apply_thresholds(&RankThresholds {
            top_number: 1,
            ..RankThresholds::default()
        });

        assert_eq!(result.top_list.len(), 1);
        let top = &result.top_list[0];
        assert_eq!((top.word.as_str(), top.count, top.rank), ("a", 3, 1));
        assert!((top.percent - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_zero_thresholds_take_one_entry() {
        let mut result = sample(false);
        result.apply_thresholds(&RankThresholds::default());

        assert_eq!(result.top_words(), vec!["a"]);
        assert_eq!(result.last_words(), vec!["c"]);
    }

    #[test]
    fn test_both_limits_must_be_exceeded() {
        let result = sample(false);

        // count alone allows 2, but the share of "a" (0.5) is not above 0.6
        let top = filter_by_rank(&result.list, 6, 1, 0.6, RankDirection::Top);
        assert_eq!(counts(&top), vec![("a", 3), ("b", 2)]);

        // share is compared before adding the current entry
        let top = filter_by_rank(&result.list, 6, 0, 0.5, RankDirection::Top);
        assert_eq!(counts(&top), vec![("a", 3), ("b", 2)]);

        let top = filter_by_rank(&result.list, 6, 0, 0.49, RankDirection::Top);
        assert_eq!(counts(&top), vec![("a", 3)]);

        let top = filter_by_rank(&result.list, 6, 10, 0.0, RankDirection::Top);
        assert_eq!(top.len(), 3);
        assert!((top[2].cumulative_percent - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_last_uses_absolute_rank() {
        let result = sample(false);

        let last = filter_by_rank(&result.list, 6, 0, 0.0, RankDirection::Last);
        assert_eq!(counts(&last), vec![("c", 1)]);
        assert_eq!(last[0].rank, 1);

        let last = filter_by_rank(&result.list, 6, 0, 0.2, RankDirection::Last);
        assert_eq!(counts(&last), vec![("c", 1), ("b", 2)]);

        // ranks count from the head, so ranks 1 and 2 are always within 2
        let last = filter_by_rank(&result.list, 6, 2, 0.0, RankDirection::Last);
        assert_eq!(counts(&last), vec![("c", 1), ("b", 2), ("a", 3)]);
    }

    #[test]
    fn test_cuts_are_prefix_and_suffix() {
        let result = sample(false);
        let words: Vec<&str> = result.list.iter().map(|w| w.word.as_str()).collect();

        for n in 0..4 {
            for p in [0.0, 0.3, 0.7, 1.0] {
                let top = filter_by_rank(&result.list, 6, n, p, RankDirection::Top);
                let top_words: Vec<&str> = top.iter().map(|w| w.word.as_str()).collect();
                assert_eq!(top_words, words[..top.len()]);

                let last = filter_by_rank(&result.list, 6, n, p, RankDirection::Last);
                let mut last_words: Vec<&str> = last.iter().map(|w| w.word.as_str()).collect();
                last_words.reverse();
                assert_eq!(last_words, words[words.len() - last.len()..]);
            }
        }
    }

    #[test]
    fn test_empty_list() {
        let result = WordCounter::new(false).into_result();
        assert!(filter_by_rank(&result.list, 0, 0, 0.0, RankDirection::Top).is_empty());
        assert_eq!(result.total_word_size(), 0);
    }

    #[test]
    fn test_threshold_validation() {
        let thresholds = RankThresholds {
            last_percent: -0.1,
            ..RankThresholds::default()
        };
        assert!(thresholds.validate().is_err());
        assert!(!RankThresholds::default().is_enabled());
    }
}
