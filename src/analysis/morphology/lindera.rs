use std::borrow::Cow;
use std::str::FromStr;

use lindera::dictionary::{load_dictionary, load_user_dictionary};
use lindera::mode::Mode;
use lindera::segmenter::Segmenter;

use crate::analysis::morphology::{MorphToken, MorphologicalAnalyzer};
use crate::error::{Result, RipperError};

/// Dictionary used when no custom dictionary is configured.
pub const DEFAULT_DICTIONARY: &str = "embedded://ipadic";

/// Part-of-speech reported when the dictionary gives no details.
const UNKNOWN_POS: &str = "UNK";

pub struct LinderaAnalyzer {
    mode: Mode,
    user_dict_uri: Option<String>,
    inner: Segmenter,
}

impl LinderaAnalyzer {
    /// Create a new Lindera engine.
    pub fn new(mode_str: &str, dict_uri: &str, user_dict_uri: Option<&str>) -> Result<Self> {
        let mode = Mode::from_str(mode_str)
            .map_err(|e| RipperError::analysis(format!("Invalid mode '{}': {}", mode_str, e)))?;
        let user_dict_uri = user_dict_uri.map(str::to_string);
        let inner = build_segmenter(mode.clone(), dict_uri, user_dict_uri.as_deref())?;

        Ok(Self {
            mode,
            user_dict_uri,
            inner,
        })
    }

    /// Create an engine over the embedded IPADIC dictionary.
    pub fn with_default_dictionary() -> Result<Self> {
        Self::new("normal", DEFAULT_DICTIONARY, None)
    }
}

fn build_segmenter(mode: Mode, dict_uri: &str, user_dict_uri: Option<&str>) -> Result<Segmenter> {
    let dict = load_dictionary(dict_uri).map_err(|e| {
        RipperError::analysis(format!("Failed to load dictionary '{}': {}", dict_uri, e))
    })?;
    let metadata = &dict.metadata;
    let user_dict = match user_dict_uri {
        Some(uri) => Some(load_user_dictionary(uri, metadata).map_err(|e| {
            RipperError::analysis(format!("Failed to load user dictionary '{}': {}", uri, e))
        })?),
        None => None,
    };
    Ok(Segmenter::new(mode, dict, user_dict))
}

impl MorphologicalAnalyzer for LinderaAnalyzer {
    fn analyze(&self, text: &str) -> Result<Vec<MorphToken>> {
        let segmented = self
            .inner
            .segment(Cow::Borrowed(text))
            .map_err(|e| RipperError::analysis(format!("Failed to segment text: {}", e)))?;

        let mut tokens = Vec::with_capacity(segmented.len());
        for mut token in segmented {
            let features: Vec<String> = token.details().iter().map(|d| d.to_string()).collect();
            let surface = token.surface.to_string();
            if surface.is_empty() {
                tokens.push(MorphToken::dummy());
                continue;
            }

            let pos = features
                .first()
                .cloned()
                .unwrap_or_else(|| UNKNOWN_POS.to_string());
            tokens.push(MorphToken::new(surface, pos, features));
        }

        Ok(tokens)
    }

    fn set_dictionary(&mut self, uri: &str) -> Result<()> {
        self.inner = build_segmenter(self.mode.clone(), uri, self.user_dict_uri.as_deref())?;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "lindera"
    }
}
