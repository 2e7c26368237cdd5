// Raw per-language pattern data as supplied by a host (pattern file, storage,
// bundled JSON). This is the uncompiled form; `hyphenator-patterns` turns it
// into a `PatternTable`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Raw pattern data for one language.
///
/// JSON shape:
///
/// ```json
/// {
///   "leftMin": 2, "rightMin": 2,
///   "shortestPattern": 2, "longestPattern": 12,
///   "specialChars": "äöüß",
///   "patterns": { "3": "2aaa1äa1b", "4": "_ax4_äm3" },
///   "exceptions": "Fortran, Hy-phen-a-tion",
///   "charSubstitution": { "ſ": "s" }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageData {
    /// Minimum number of characters kept before any break.
    #[serde(alias = "leftmin")]
    pub left_min: usize,

    /// Minimum number of characters kept after any break.
    #[serde(alias = "rightmin")]
    pub right_min: usize,

    /// Length of the shortest letters-only pattern key.
    pub shortest_pattern: usize,

    /// Length of the longest letters-only pattern key.
    pub longest_pattern: usize,

    /// Letters beyond ASCII that may appear inside a hyphenatable word.
    #[serde(default)]
    pub special_chars: String,

    /// Pattern records grouped by record length (letters plus digits).
    /// Each group is a concatenation of fixed-width records.
    pub patterns: BTreeMap<usize, String>,

    /// Comma-space separated hyphenated exception words embedded in the data.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exceptions: Option<String>,

    /// Characters replaced before matching (e.g. long s to s).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub char_substitution: Option<BTreeMap<char, char>>,
}

impl LanguageData {
    /// Parse language data from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Total number of pattern records across all length groups.
    ///
    /// Records are counted per group as the number of fixed-width chunks,
    /// so a garbled trailing chunk still counts.
    pub fn record_count(&self) -> usize {
        self.patterns
            .iter()
            .filter(|(len, _)| **len > 0)
            .map(|(len, group)| group.chars().count().div_ceil(*len))
            .sum()
    }
}
