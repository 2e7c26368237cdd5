// Exception lists: author-specified hyphenations that override the patterns.
//
// Sources are comma-space separated hyphenated words ("Fortran, Hy-phen-a-tion").
// `ExceptionRegistry` accumulates registrations per language (and globally)
// until a language is prepared; `ExceptionSet` is the compiled lookup.

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use hyphenator_core::character::HYPHEN_MINUS;

/// Separator between words in an exception source.
pub const EXCEPTION_SEPARATOR: &str = ", ";

/// Registry key used for exceptions that apply to every language.
pub const GLOBAL_EXCEPTIONS: &str = "global";

/// Canonical key of an exception token: the token with all hyphens removed.
pub fn canonical_key(token: &str) -> String {
    token.chars().filter(|&c| c != HYPHEN_MINUS).collect()
}

// ---------------------------------------------------------------------------
// ExceptionSet
// ---------------------------------------------------------------------------

/// Compiled exceptions of one language: canonical word to hyphenated spelling.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExceptionSet {
    words: HashMap<String, String>,
}

impl ExceptionSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Compile a comma-space separated source. The first token for a given
    /// canonical word wins; empty tokens are ignored.
    pub fn compile(source: &str) -> Self {
        let mut set = Self::new();
        set.extend_first_wins(source);
        set
    }

    /// Add tokens from `source` whose canonical key is not yet present.
    pub fn extend_first_wins(&mut self, source: &str) {
        for token in source.split(EXCEPTION_SEPARATOR) {
            if token.is_empty() {
                continue;
            }
            self.words
                .entry(canonical_key(token))
                .or_insert_with(|| token.to_string());
        }
    }

    /// Insert every entry of `other`, replacing existing spellings.
    pub fn override_with(&mut self, other: ExceptionSet) {
        self.words.extend(other.words);
    }

    /// Hyphenated spelling registered for `word`.
    pub fn get(&self, word: &str) -> Option<&str> {
        self.words.get(word).map(String::as_str)
    }

    /// Whether `word` has a registered spelling.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains_key(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over `(canonical word, hyphenated spelling)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.words.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Comma-space separated source of every spelling, sorted, or `None`
    /// when the set is empty. Compiling it yields an equal set.
    pub fn to_source(&self) -> Option<String> {
        if self.words.is_empty() {
            return None;
        }
        let mut spellings: Vec<&str> = self.words.values().map(String::as_str).collect();
        spellings.sort_unstable();
        Some(spellings.join(EXCEPTION_SEPARATOR))
    }
}

// ---------------------------------------------------------------------------
// ExceptionRegistry
// ---------------------------------------------------------------------------

/// Pending exception registrations, keyed by language id.
///
/// Registrations are plain source text; they are only compiled when a language
/// is prepared or restored. The global entry is never consumed.
#[derive(Debug, Clone, Default)]
pub struct ExceptionRegistry {
    pending: HashMap<String, String>,
}

impl ExceptionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `words` to the registration of `lang`. An empty `lang` registers
    /// global exceptions.
    pub fn add(&mut self, lang: &str, words: &str) {
        let key = if lang.is_empty() { GLOBAL_EXCEPTIONS } else { lang };
        match self.pending.get_mut(key) {
            Some(existing) => {
                existing.push_str(EXCEPTION_SEPARATOR);
                existing.push_str(words);
            }
            None => {
                self.pending.insert(key.to_string(), words.to_string());
            }
        }
    }

    /// Pending source text for `lang` (use `""` for global).
    pub fn pending(&self, lang: &str) -> Option<&str> {
        let key = if lang.is_empty() { GLOBAL_EXCEPTIONS } else { lang };
        self.pending.get(key).map(String::as_str)
    }

    /// Build the exception set for preparing `lang`.
    ///
    /// `embedded` (exceptions shipped inside the language data) is appended to
    /// the language's registration, then the global registration is appended.
    /// The language's registration is consumed; first token wins across the
    /// concatenated source.
    pub fn take_for_preparation(&mut self, lang: &str, embedded: Option<&str>) -> ExceptionSet {
        if let Some(embedded) = embedded {
            self.add(lang, embedded);
        }
        let mut source = self.pending.remove(lang).unwrap_or_default();
        if let Some(global) = self.pending.get(GLOBAL_EXCEPTIONS) {
            if !source.is_empty() {
                source.push_str(EXCEPTION_SEPARATOR);
            }
            source.push_str(global);
        }
        ExceptionSet::compile(&source)
    }

    /// Build the overrides for a restored (already prepared) language.
    ///
    /// Global entries are applied first, then the language's own, each
    /// replacing what is already there. The language's registration is consumed.
    pub fn take_overrides(&mut self, lang: &str) -> ExceptionSet {
        let mut overrides = ExceptionSet::new();
        if let Some(global) = self.pending.get(GLOBAL_EXCEPTIONS) {
            overrides.override_with(ExceptionSet::compile(global));
        }
        if let Some(own) = self.pending.remove(lang) {
            overrides.override_with(ExceptionSet::compile(&own));
        }
        overrides
    }
}
