// Prepared languages.
//
// Preparing turns raw `LanguageData` into everything the engine needs at call
// time: the flattened pattern table, the compiled exceptions, the optional
// word cache and reduced-set tracker, and the text matcher. A prepared
// language serializes to JSON and can be restored without re-preparation.

pub mod matcher;

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use hyphenator_core::language::LanguageData;
use hyphenator_patterns::{ExceptionRegistry, ExceptionSet, PatternTable, ReducedPatternSet};

use crate::cache::WordCache;
use crate::options::HyphenatorOptions;

/// A language ready for hyphenation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreparedLanguage {
    pub(crate) table: PatternTable,
    pub(crate) exceptions: ExceptionSet,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) cache: Option<WordCache>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) reduced_pattern_set: Option<ReducedPatternSet>,
    pub(crate) min_word_length: usize,
    #[serde(skip)]
    matcher: OnceLock<Regex>,
}

/// Prepare `lang` from its raw data.
///
/// Consumes the language's pending exception registration from `registry`;
/// global registrations stay for later languages.
pub fn prepare(
    lang: &str,
    data: &LanguageData,
    registry: &mut ExceptionRegistry,
    options: &HyphenatorOptions,
) -> PreparedLanguage {
    let exceptions = registry.take_for_preparation(lang, data.exceptions.as_deref());
    let mut table = PatternTable::compile(data);
    if options.pre_decode_patterns {
        table.decode_all();
    }
    debug!(
        lang,
        patterns = table.len(),
        exceptions = exceptions.len(),
        "prepared language"
    );
    PreparedLanguage {
        table,
        exceptions,
        cache: options.enable_cache.then(WordCache::new),
        reduced_pattern_set: options
            .enable_reduced_pattern_set
            .then(ReducedPatternSet::new),
        min_word_length: options.min_word_length,
        matcher: OnceLock::new(),
    }
}

impl PreparedLanguage {
    pub fn table(&self) -> &PatternTable {
        &self.table
    }

    pub fn exceptions(&self) -> &ExceptionSet {
        &self.exceptions
    }

    pub fn cache(&self) -> Option<&WordCache> {
        self.cache.as_ref()
    }

    /// Patterns recorded so far, when tracking is enabled.
    pub fn reduced_pattern_set(&self) -> Option<&ReducedPatternSet> {
        self.reduced_pattern_set.as_ref()
    }

    /// Pattern file containing only the recorded patterns and every
    /// exception of the language.
    pub fn reduced_language_data(&self) -> Option<LanguageData> {
        self.reduced_pattern_set
            .as_ref()
            .map(|set| set.to_language_data(&self.table, &self.exceptions))
    }

    pub fn min_word_length(&self) -> usize {
        self.min_word_length
    }

    /// Change the minimum word length used for text matching.
    pub fn set_min_word_length(&mut self, min_word_length: usize) {
        if self.min_word_length != min_word_length {
            self.min_word_length = min_word_length;
            self.matcher = OnceLock::new();
        }
    }

    /// Replace exception spellings, e.g. after restoring from JSON.
    pub fn override_exceptions(&mut self, overrides: ExceptionSet) {
        self.exceptions.override_with(overrides);
    }

    /// The combined URL, mail and word matcher, built on first use.
    pub fn matcher(&self) -> Result<&Regex, regex::Error> {
        if let Some(re) = self.matcher.get() {
            return Ok(re);
        }
        let re = matcher::text_matcher(&self.table.special_chars, self.min_word_length)?;
        Ok(self.matcher.get_or_init(|| re))
    }

    /// Hyphenate one word with `hyphen` as the break marker.
    pub fn hyphenate_word(&mut self, word: &str, hyphen: &str) -> String {
        crate::hyphenator::hyphenate_word(self, word, hyphen)
    }

    /// Serialize the prepared state, including cache and decoded patterns.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Restore a prepared language produced by [`to_json`](Self::to_json).
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> LanguageData {
        LanguageData {
            left_min: 2,
            right_min: 2,
            shortest_pattern: 2,
            longest_pattern: 5,
            special_chars: String::new(),
            patterns: [(5, "hy3ph".to_string())].into_iter().collect(),
            exceptions: Some("Fort-ran".to_string()),
            char_substitution: None,
        }
    }

    #[test]
    fn prepare_follows_options() {
        let mut registry = ExceptionRegistry::new();
        let options = HyphenatorOptions {
            enable_cache: false,
            enable_reduced_pattern_set: true,
            pre_decode_patterns: true,
            ..Default::default()
        };
        let lang = prepare("xx", &sample(), &mut registry, &options);
        assert!(lang.cache().is_none());
        assert!(lang.reduced_pattern_set().is_some());
        assert_eq!(lang.table().decoded_count(), lang.table().len());
        assert_eq!(lang.exceptions().get("Fortran"), Some("Fort-ran"));
        assert_eq!(lang.min_word_length(), 6);
    }

    #[test]
    fn default_preparation_decodes_lazily() {
        let mut registry = ExceptionRegistry::new();
        let lang = prepare("xx", &sample(), &mut registry, &HyphenatorOptions::default());
        assert!(lang.cache().is_some());
        assert!(lang.reduced_pattern_set().is_none());
        assert_eq!(lang.table().decoded_count(), 0);
    }

    #[test]
    fn matcher_rebuilt_after_min_length_change() {
        let mut registry = ExceptionRegistry::new();
        let mut lang = prepare("xx", &sample(), &mut registry, &HyphenatorOptions::default());
        assert!(!lang.matcher().unwrap().is_match("four"));
        lang.set_min_word_length(4);
        assert!(lang.matcher().unwrap().is_match("four"));
    }

    #[test]
    fn json_round_trip_keeps_state() {
        let mut registry = ExceptionRegistry::new();
        let mut lang = prepare("xx", &sample(), &mut registry, &HyphenatorOptions::default());
        let first = lang.hyphenate_word("hyphen", "|");
        let json = lang.to_json().unwrap();

        let mut restored = PreparedLanguage::from_json(&json).unwrap();
        assert_eq!(restored.cache().map(WordCache::len), Some(1));
        assert_eq!(restored.table().decoded_count(), lang.table().decoded_count());
        assert_eq!(restored.hyphenate_word("hyphen", "|"), first);
        assert!(restored.matcher().unwrap().is_match("hyphen"));
    }

    #[test]
    fn reduced_data_keeps_exceptions() {
        let mut registry = ExceptionRegistry::new();
        registry.add("xx", "Hy-phen");
        let options = HyphenatorOptions {
            enable_reduced_pattern_set: true,
            ..Default::default()
        };
        let mut lang = prepare("xx", &sample(), &mut registry, &options);
        assert_eq!(lang.hyphenate_word("hyphen", "|"), "hy|phen");
        assert_eq!(lang.hyphenate_word("Fortran", "|"), "Fort|ran");

        let data = lang.reduced_language_data().unwrap();
        assert_eq!(data.exceptions.as_deref(), Some("Fort-ran, Hy-phen"));
        let mut reduced = prepare("xx", &data, &mut ExceptionRegistry::new(), &options);
        assert_eq!(reduced.hyphenate_word("hyphen", "|"), "hy|phen");
        assert_eq!(reduced.hyphenate_word("Fortran", "|"), "Fort|ran");
        assert_eq!(reduced.hyphenate_word("Hyphen", "|"), "Hy|phen");
    }
}
