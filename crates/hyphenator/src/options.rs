// Hyphenator configuration.
//
// One typed struct replaces free-form key/value configuration. Every field has
// a default, so partial TOML files are accepted.

use std::path::Path;

use serde::{Deserialize, Serialize};

use hyphenator_core::character::{SOFT_HYPHEN, ZERO_WIDTH_SPACE};
use hyphenator_core::enums::OrphanControl;

use crate::handle::HyphenatorError;

/// Configuration options for the hyphenation engine.
///
/// Options that shape a prepared language (`min_word_length`, `enable_cache`,
/// `enable_reduced_pattern_set`, `pre_decode_patterns`) are read when the
/// language is prepared. Break markers and orphan control are read on every call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HyphenatorOptions {
    /// Minimum length of a word (and of a text) to be hyphenated.
    pub min_word_length: usize,

    /// Keep a per-language cache of hyphenated words.
    pub enable_cache: bool,

    /// Record which patterns actually matched (see `ReducedPatternSet`).
    pub enable_reduced_pattern_set: bool,

    /// Treatment of the last word of a text.
    pub orphan_control: OrphanControl,

    /// Break marker inserted into words.
    pub hyphen: String,

    /// Break marker inserted into URLs and mail addresses.
    pub url_hyphen: String,

    /// Decode every pattern while preparing instead of on first match.
    pub pre_decode_patterns: bool,
}

impl Default for HyphenatorOptions {
    fn default() -> Self {
        Self {
            min_word_length: 6,
            enable_cache: true,
            enable_reduced_pattern_set: false,
            orphan_control: OrphanControl::HyphenateLastWord,
            hyphen: SOFT_HYPHEN.to_string(),
            url_hyphen: ZERO_WIDTH_SPACE.to_string(),
            pre_decode_patterns: false,
        }
    }
}

impl HyphenatorOptions {
    /// Load options from a TOML file.
    pub fn load_toml<P: AsRef<Path>>(path: P) -> Result<Self, HyphenatorError> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_toml_str(&content)?)
    }

    /// Parse options from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Serialize options to a TOML string.
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
