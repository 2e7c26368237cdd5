// HyphenatorHandle: top-level integration point.
//
// Owns the options, every supplied language and the pending exception
// registrations. Languages start out as raw data and are prepared on first
// use (or explicitly); a prepared language replaces its raw data in place.
//
// Design notes:
// - Options that shape preparation (cache, reduced set, pre-decoding) only
//   affect languages prepared after the change. Break markers and orphan
//   control are read on every call. The minimum word length is pushed to
//   already prepared languages so their text matchers follow it.
// - Exceptions registered after a language was prepared take effect when the
//   language is restored from JSON, not before.

use hashbrown::HashMap;
use tracing::debug;

use hyphenator_core::enums::{InvalidOrphanControl, OrphanControl};
use hyphenator_core::language::LanguageData;
use hyphenator_patterns::{ExceptionRegistry, ReducedPatternSet};

use crate::hyphenator::{hyphenate_url, hyphenate_word};
use crate::language::{self, PreparedLanguage};
use crate::options::HyphenatorOptions;
use crate::text;

/// Error type for handle operations.
#[derive(Debug, thiserror::Error)]
pub enum HyphenatorError {
    /// No data was supplied for the language.
    #[error("language not loaded: {0}")]
    LanguageNotLoaded(String),

    /// The language was supplied but has not been prepared yet.
    #[error("language not prepared: {0}")]
    LanguageNotPrepared(String),

    /// Orphan control level outside 1..=3.
    #[error(transparent)]
    InvalidOrphanControl(#[from] InvalidOrphanControl),

    /// Language data or a stored language could not be (de)serialized.
    #[error("invalid language JSON: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A configuration file could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    /// A configuration file could not be read.
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    /// The text matcher of a language could not be built.
    #[error("failed to build text matcher: {0}")]
    Matcher(#[from] regex::Error),
}

/// Storage state of one language.
#[derive(Debug, Clone)]
enum LanguageSlot {
    Supplied(LanguageData),
    Prepared(Box<PreparedLanguage>),
}

/// Top-level handle owning options, languages and exception registrations.
#[derive(Debug, Clone, Default)]
pub struct HyphenatorHandle {
    options: HyphenatorOptions,
    languages: HashMap<String, LanguageSlot>,
    exceptions: ExceptionRegistry,
}

impl HyphenatorHandle {
    /// Create an empty handle with the given options.
    pub fn new(options: HyphenatorOptions) -> Self {
        Self {
            options,
            languages: HashMap::new(),
            exceptions: ExceptionRegistry::new(),
        }
    }

    /// Create a handle with every bundled language supplied.
    #[cfg(feature = "bundled")]
    pub fn with_bundled_languages(options: HyphenatorOptions) -> Result<Self, HyphenatorError> {
        let mut handle = Self::new(options);
        for &lang in crate::bundled::BUNDLED_LANGUAGES {
            handle.supply_language(lang, crate::bundled::language_data(lang)?);
        }
        Ok(handle)
    }

    // =========================================================================
    // Languages
    // =========================================================================

    /// Supply raw data for `lang`, replacing any earlier data or prepared state.
    pub fn supply_language(&mut self, lang: &str, data: LanguageData) {
        debug!(lang, records = data.record_count(), "language supplied");
        self.languages
            .insert(lang.to_string(), LanguageSlot::Supplied(data));
    }

    /// Parse and supply raw JSON data for `lang`.
    pub fn supply_language_json(&mut self, lang: &str, json: &str) -> Result<(), HyphenatorError> {
        self.supply_language(lang, LanguageData::from_json(json)?);
        Ok(())
    }

    /// Register exceptions for `lang` (`""` for every language).
    ///
    /// `words` is a comma-space separated list of hyphenated words.
    pub fn add_exceptions(&mut self, lang: &str, words: &str) {
        self.exceptions.add(lang, words);
    }

    /// Prepare `lang` if it has not been prepared yet.
    pub fn prepare(&mut self, lang: &str) -> Result<&mut PreparedLanguage, HyphenatorError> {
        Self::prepared_mut(&mut self.languages, &mut self.exceptions, &self.options, lang)
    }

    /// Prepare every supplied language.
    pub fn prepare_all(&mut self) -> Result<(), HyphenatorError> {
        let mut pending: Vec<String> = self
            .languages
            .iter()
            .filter(|(_, slot)| matches!(slot, LanguageSlot::Supplied(_)))
            .map(|(lang, _)| lang.clone())
            .collect();
        pending.sort();
        for lang in pending {
            self.prepare(&lang)?;
        }
        Ok(())
    }

    /// Supplied language ids, sorted.
    pub fn languages(&self) -> Vec<&str> {
        let mut langs: Vec<&str> = self.languages.keys().map(String::as_str).collect();
        langs.sort_unstable();
        langs
    }

    /// Whether `lang` has been prepared.
    pub fn is_prepared(&self, lang: &str) -> bool {
        matches!(self.languages.get(lang), Some(LanguageSlot::Prepared(_)))
    }

    /// The prepared state of `lang`.
    pub fn prepared(&self, lang: &str) -> Result<&PreparedLanguage, HyphenatorError> {
        match self.languages.get(lang) {
            Some(LanguageSlot::Prepared(prepared)) => Ok(prepared),
            Some(LanguageSlot::Supplied(_)) => {
                Err(HyphenatorError::LanguageNotPrepared(lang.to_string()))
            }
            None => Err(HyphenatorError::LanguageNotLoaded(lang.to_string())),
        }
    }

    // =========================================================================
    // Hyphenation
    // =========================================================================

    /// Hyphenate one word of `lang`, preparing the language if needed.
    pub fn hyphenate_word(&mut self, lang: &str, word: &str) -> Result<String, HyphenatorError> {
        let prepared =
            Self::prepared_mut(&mut self.languages, &mut self.exceptions, &self.options, lang)?;
        Ok(hyphenate_word(prepared, word, &self.options.hyphen))
    }

    /// Hyphenate a whole text of `lang`, preparing the language if needed.
    pub fn hyphenate_text(&mut self, lang: &str, text: &str) -> Result<String, HyphenatorError> {
        let prepared =
            Self::prepared_mut(&mut self.languages, &mut self.exceptions, &self.options, lang)?;
        Ok(text::hyphenate_text(prepared, text, &self.options)?)
    }

    /// Insert URL breaks into a URL or mail address.
    pub fn hyphenate_url(&self, url: &str) -> String {
        hyphenate_url(url, &self.options.url_hyphen)
    }

    /// Remove every break marker this handle inserts.
    pub fn remove_hyphenation(&self, text: &str) -> String {
        text::remove_hyphenation(text, &self.options.hyphen, &self.options.url_hyphen)
    }

    // =========================================================================
    // Persistence and introspection
    // =========================================================================

    /// Patterns recorded for `lang`, or `None` when tracking is disabled.
    pub fn reduced_pattern_set(
        &self,
        lang: &str,
    ) -> Result<Option<&ReducedPatternSet>, HyphenatorError> {
        Ok(self.prepared(lang)?.reduced_pattern_set())
    }

    /// Serialize the prepared state of `lang`.
    pub fn export_language(&self, lang: &str) -> Result<String, HyphenatorError> {
        Ok(self.prepared(lang)?.to_json()?)
    }

    /// Restore `lang` from [`export_language`](Self::export_language) output.
    ///
    /// Pending exceptions are applied on top of the stored ones: global
    /// registrations first, then the language's own. The current minimum
    /// word length replaces the stored one.
    pub fn restore_language(&mut self, lang: &str, json: &str) -> Result<(), HyphenatorError> {
        let mut prepared = PreparedLanguage::from_json(json)?;
        prepared.override_exceptions(self.exceptions.take_overrides(lang));
        prepared.set_min_word_length(self.options.min_word_length);
        debug!(lang, patterns = prepared.table().len(), "language restored");
        self.languages
            .insert(lang.to_string(), LanguageSlot::Prepared(Box::new(prepared)));
        Ok(())
    }

    // =========================================================================
    // Options
    // =========================================================================

    pub fn options(&self) -> &HyphenatorOptions {
        &self.options
    }

    /// Replace all options.
    pub fn set_options(&mut self, options: HyphenatorOptions) {
        let min_word_length = options.min_word_length;
        self.options = options;
        self.set_min_word_length(min_word_length);
    }

    /// Set the minimum word length, for prepared languages too.
    pub fn set_min_word_length(&mut self, value: usize) {
        self.options.min_word_length = value;
        for slot in self.languages.values_mut() {
            if let LanguageSlot::Prepared(prepared) = slot {
                prepared.set_min_word_length(value);
            }
        }
    }

    /// Set the orphan control level (1, 2 or 3).
    pub fn set_orphan_control(&mut self, level: u8) -> Result<(), HyphenatorError> {
        self.options.orphan_control = OrphanControl::try_from(level)?;
        Ok(())
    }

    pub fn set_hyphen(&mut self, hyphen: &str) {
        self.options.hyphen = hyphen.to_string();
    }

    pub fn set_url_hyphen(&mut self, url_hyphen: &str) {
        self.options.url_hyphen = url_hyphen.to_string();
    }

    pub fn set_enable_cache(&mut self, value: bool) {
        self.options.enable_cache = value;
    }

    pub fn set_enable_reduced_pattern_set(&mut self, value: bool) {
        self.options.enable_reduced_pattern_set = value;
    }

    // =========================================================================
    // Internal
    // =========================================================================

    fn prepared_mut<'a>(
        languages: &'a mut HashMap<String, LanguageSlot>,
        exceptions: &mut ExceptionRegistry,
        options: &HyphenatorOptions,
        lang: &str,
    ) -> Result<&'a mut PreparedLanguage, HyphenatorError> {
        let slot = languages
            .get_mut(lang)
            .ok_or_else(|| HyphenatorError::LanguageNotLoaded(lang.to_string()))?;
        if let LanguageSlot::Supplied(data) = slot {
            let prepared = language::prepare(lang, data, exceptions, options);
            debug!(lang, "language prepared");
            *slot = LanguageSlot::Prepared(Box::new(prepared));
        }
        match slot {
            LanguageSlot::Prepared(prepared) => Ok(prepared.as_mut()),
            LanguageSlot::Supplied(_) => Err(HyphenatorError::LanguageNotPrepared(lang.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data() -> LanguageData {
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

    fn handle() -> HyphenatorHandle {
        let mut handle = HyphenatorHandle::new(HyphenatorOptions {
            hyphen: "|".to_string(),
            url_hyphen: "~".to_string(),
            ..Default::default()
        });
        handle.supply_language("xx", data());
        handle
    }

    #[test]
    fn unknown_language() {
        let mut h = handle();
        assert!(matches!(
            h.hyphenate_word("yy", "hyphen"),
            Err(HyphenatorError::LanguageNotLoaded(lang)) if lang == "yy"
        ));
    }

    #[test]
    fn prepared_on_first_use() {
        let mut h = handle();
        assert!(!h.is_prepared("xx"));
        assert!(matches!(
            h.prepared("xx"),
            Err(HyphenatorError::LanguageNotPrepared(_))
        ));
        assert_eq!(h.hyphenate_word("xx", "hyphen").unwrap(), "hy|phen");
        assert!(h.is_prepared("xx"));
    }

    #[test]
    fn prepare_all_and_list() {
        let mut h = handle();
        h.supply_language("aa", data());
        h.prepare_all().unwrap();
        assert_eq!(h.languages(), vec!["aa", "xx"]);
        assert!(h.is_prepared("aa"));
        assert!(h.is_prepared("xx"));
    }

    #[test]
    fn registered_exceptions_precede_embedded() {
        let mut h = handle();
        h.add_exceptions("xx", "Fortr-an");
        assert_eq!(h.hyphenate_word("xx", "Fortran").unwrap(), "Fortr|an");
    }

    #[test]
    fn global_exceptions_reach_every_language() {
        let mut h = handle();
        h.supply_language("aa", data());
        h.add_exceptions("", "hyphe-nation");
        assert_eq!(h.hyphenate_word("xx", "hyphenation").unwrap(), "hyphe|nation");
        assert_eq!(h.hyphenate_word("aa", "hyphenation").unwrap(), "hyphe|nation");
    }

    #[test]
    fn text_and_url() {
        let mut h = handle();
        assert_eq!(
            h.hyphenate_text("xx", "a hyphen at www.example.com").unwrap(),
            "a hy|phen at www.~example.~com"
        );
        assert_eq!(h.hyphenate_url("a.b"), "a.~b");
        assert_eq!(h.remove_hyphenation("hy|phen a.~b"), "hyphen a.b");
    }

    #[test]
    fn orphan_control_setter() {
        let mut h = handle();
        assert!(h.set_orphan_control(4).is_err());
        h.set_orphan_control(2).unwrap();
        assert_eq!(h.options().orphan_control, OrphanControl::KeepLastWord);
        assert_eq!(
            h.hyphenate_text("xx", "hyphen hyphen").unwrap(),
            "hy|phen hyphen"
        );
    }

    #[test]
    fn min_word_length_reaches_prepared_language() {
        let mut h = handle();
        h.prepare("xx").unwrap();
        h.set_min_word_length(3);
        assert_eq!(h.prepared("xx").unwrap().min_word_length(), 3);
    }

    #[test]
    fn export_and_restore() {
        let mut h = handle();
        h.hyphenate_word("xx", "hyphen").unwrap();
        let json = h.export_language("xx").unwrap();

        let mut other = HyphenatorHandle::new(h.options().clone());
        other.add_exceptions("", "hyp-hen, Fo-rtran");
        other.add_exceptions("xx", "For-tran");
        other.restore_language("xx", &json).unwrap();
        assert!(other.is_prepared("xx"));
        // Cached result survives the round trip and precedes exceptions
        assert_eq!(other.hyphenate_word("xx", "hyphen").unwrap(), "hy|phen");
        // Language registration overrides the global one
        assert_eq!(other.hyphenate_word("xx", "Fortran").unwrap(), "For|tran");
    }

    #[test]
    fn marker_change_after_cached_call() {
        let mut h = handle();
        assert_eq!(h.hyphenate_word("xx", "hyphen").unwrap(), "hy|phen");
        h.set_hyphen("=");
        assert_eq!(h.hyphenate_word("xx", "hyphen").unwrap(), "hy=phen");
        assert_eq!(h.hyphenate_text("xx", "a hyphen here").unwrap(), "a hy=phen here");
        assert_eq!(h.remove_hyphenation("a hy=phen here"), "a hyphen here");
        assert_eq!(h.prepared("xx").unwrap().cache().unwrap().hits(), 2);
    }

    #[test]
    fn restore_renders_with_own_marker() {
        let mut h = handle();
        h.hyphenate_word("xx", "hyphen").unwrap();
        let json = h.export_language("xx").unwrap();

        let mut other = HyphenatorHandle::new(HyphenatorOptions::default());
        other.restore_language("xx", &json).unwrap();
        assert_eq!(other.hyphenate_word("xx", "hyphen").unwrap(), "hy\u{AD}phen");
        assert_eq!(other.prepared("xx").unwrap().cache().unwrap().hits(), 1);
        let text = other.hyphenate_text("xx", "a hyphen here").unwrap();
        assert_eq!(other.remove_hyphenation(&text), "a hyphen here");
    }

    #[test]
    fn export_requires_preparation() {
        let h = handle();
        assert!(matches!(
            h.export_language("xx"),
            Err(HyphenatorError::LanguageNotPrepared(_))
        ));
    }

    #[test]
    fn reduced_set_follows_option() {
        let mut h = handle();
        h.set_enable_reduced_pattern_set(true);
        h.hyphenate_word("xx", "hyphen").unwrap();
        let set = h.reduced_pattern_set("xx").unwrap().unwrap();
        assert!(set.contains_key("hyph"));
    }
}
