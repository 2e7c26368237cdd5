// Compiled per-language pattern table.
//
// Pattern groups arrive as concatenations of fixed-width records, one group per
// record width. Compilation flattens all groups into a single map from the
// letters-only key to its entry; decoding of each entry is deferred until the
// key first matches (see `PatternEntry::decode`).

use std::collections::BTreeMap;

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use hyphenator_core::character::strip_digits;
use hyphenator_core::language::LanguageData;

use crate::entry::{PatternEntry, Weight};

/// Per-language pattern table in compiled form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternTable {
    /// Minimum characters before any break.
    pub left_min: usize,
    /// Minimum characters after any break.
    pub right_min: usize,
    /// Shortest window length scanned.
    pub shortest_pattern: usize,
    /// Longest window length scanned.
    pub longest_pattern: usize,
    /// Additional letters valid inside hyphenatable words.
    pub special_chars: String,
    /// Character normalization applied before matching.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub char_substitution: Option<BTreeMap<char, char>>,
    patterns: HashMap<String, PatternEntry>,
}

impl PatternTable {
    /// Flatten the length groups of `data` into a key-to-record table.
    ///
    /// Each group keyed `n` is split into chunks of `n` characters; a chunk's key
    /// is the chunk with its digits removed. A later record with the same key
    /// replaces an earlier one. Embedded exceptions are not touched.
    pub fn compile(data: &LanguageData) -> Self {
        let mut patterns = HashMap::with_capacity(data.record_count());
        for (&width, group) in &data.patterns {
            if width == 0 {
                tracing::warn!(group_len = group.len(), "skipping pattern group with width 0");
                continue;
            }
            let chars: Vec<char> = group.chars().collect();
            for chunk in chars.chunks(width) {
                let record: String = chunk.iter().collect();
                patterns.insert(strip_digits(&record), PatternEntry::Raw(record));
            }
        }

        Self {
            left_min: data.left_min,
            right_min: data.right_min,
            shortest_pattern: data.shortest_pattern,
            longest_pattern: data.longest_pattern,
            special_chars: data.special_chars.clone(),
            char_substitution: data.char_substitution.clone(),
            patterns,
        }
    }

    /// Number of distinct pattern keys.
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Whether the table holds no patterns at all.
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Whether `key` is a known pattern key.
    pub fn contains_key(&self, key: &str) -> bool {
        self.patterns.contains_key(key)
    }

    /// The entry stored for `key`, in whatever form it currently has.
    pub fn get(&self, key: &str) -> Option<&PatternEntry> {
        self.patterns.get(key)
    }

    /// Mutable access to the entry stored for `key`.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut PatternEntry> {
        self.patterns.get_mut(key)
    }

    /// Look up `key`, decoding its entry on first use.
    pub fn lookup(&mut self, key: &str) -> Option<&[Weight]> {
        self.patterns.get_mut(key).map(|entry| entry.decode())
    }

    /// Decode every entry up front so later lookups never mutate the table.
    pub fn decode_all(&mut self) {
        for entry in self.patterns.values_mut() {
            entry.decode();
        }
    }

    /// Number of entries already decoded.
    pub fn decoded_count(&self) -> usize {
        self.patterns.values().filter(|e| e.is_decoded()).count()
    }

    /// Iterate over all keys and entries.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PatternEntry)> {
        self.patterns.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Apply the character substitution map to one character.
    pub fn substitute(&self, c: char) -> char {
        match &self.char_substitution {
            Some(map) => map.get(&c).copied().unwrap_or(c),
            None => c,
        }
    }
}
