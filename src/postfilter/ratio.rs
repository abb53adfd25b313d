use crate::pipeline::{PostFilter, RowValues};

/// Column holding the character count of the raw cell.
pub const RAW_CHAR_COUNT: &str = "raw_char_count";

/// Ratio of a plugin count to `raw_char_count`, formatted with 8 decimals.
///
/// Yields an empty string when either column is missing, is not an integer,
/// or the character count is zero.
#[derive(Clone, Debug)]
pub struct RatioPostFilter {
    title: String,
    target: String,
}

impl RatioPostFilter {
    pub fn new<S: Into<String>, T: Into<String>>(title: S, target: T) -> Self {
        RatioPostFilter {
            title: title.into(),
            target: target.into(),
        }
    }

    fn ratio(&self, row: &RowValues) -> Option<String> {
        let target: u64 = row.get(&self.target)?.parse().ok()?;
        let chars: u64 = row.get(RAW_CHAR_COUNT)?.parse().ok()?;
        if chars == 0 {
            return None;
        }
        Some(format!("{:.8}", target as f64 / chars as f64))
    }
}

impl PostFilter for RatioPostFilter {
    fn title(&self) -> &str {
        &self.title
    }

    fn apply(&self, row: &RowValues) -> String {
        self.ratio(row).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(pairs: &[(&str, &str)]) -> RowValues {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_ratio() {
        let filter = RatioPostFilter::new("ratio_number_count", "number_count");
        let values = row(&[("number_count", "1"), ("raw_char_count", "3")]);
        assert_eq!(filter.apply(&values), "0.33333333");

        let values = row(&[("number_count", "4"), ("raw_char_count", "4")]);
        assert_eq!(filter.apply(&values), "1.00000000");
    }

    #[test]
    fn test_missing_or_invalid_inputs() {
        let filter = RatioPostFilter::new("ratio_number_count", "number_count");
        assert_eq!(filter.apply(&row(&[("raw_char_count", "3")])), "");
        assert_eq!(filter.apply(&row(&[("number_count", "x"), ("raw_char_count", "3")])), "");
        assert_eq!(filter.apply(&row(&[("number_count", "1")])), "");
        assert_eq!(filter.apply(&row(&[("number_count", "0"), ("raw_char_count", "0")])), "");
    }
}
