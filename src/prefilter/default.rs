use crate::error::Result;
use crate::pipeline::PreFilter;
use crate::util::replacer::Replacer;

const DEFAULT_REPLACEMENTS: &[(&str, &str)] = &[
    ("↵", " "),
    ("\"", " "),
    ("　", " "),
    ("\\t", " "),
    ("\t", " "),
    ("\\n", " "),
    ("\n", " "),
];

/// Replaces quotes, tabs, newlines (real and escaped) and ideographic spaces
/// with a plain space.
#[derive(Clone, Debug)]
pub struct DefaultNormalizer {
    replacer: Replacer,
}

impl DefaultNormalizer {
    pub fn new() -> Result<Self> {
        Ok(Self {
            replacer: Replacer::new(DEFAULT_REPLACEMENTS)?,
        })
    }
}

impl PreFilter for DefaultNormalizer {
    fn title(&self) -> &str {
        "default"
    }

    fn apply(&self, text: &str) -> String {
        self.replacer.replace(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_normalizer() {
        let filter = DefaultNormalizer::new().unwrap();
        assert_eq!(filter.apply("a\tb\nc"), "a b c");
        assert_eq!(filter.apply(r"a\tb\nc"), "a b c");
        assert_eq!(filter.apply("\"引用\"　です↵"), " 引用  です ");
    }
}
