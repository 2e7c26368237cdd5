// Reduced pattern set: the patterns that actually matched real input.
//
// Collected by the engine when tracking is enabled and never read back by it.
// Useful for shipping a smaller pattern file for a known corpus.

use std::collections::BTreeMap;

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use hyphenator_core::language::LanguageData;

use crate::entry::PatternEntry;
use crate::exceptions::ExceptionSet;
use crate::table::PatternTable;

/// Pattern key to entry, for every key that matched at least once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReducedPatternSet {
    patterns: HashMap<String, PatternEntry>,
}

impl ReducedPatternSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a matched key. The form stored is the entry as it was when the
    /// key first matched; later matches of the same key are ignored.
    pub fn record(&mut self, key: &str, entry: &PatternEntry) {
        if !self.patterns.contains_key(key) {
            self.patterns.insert(key.to_string(), entry.clone());
        }
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.patterns.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&PatternEntry> {
        self.patterns.get(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PatternEntry)> {
        self.patterns.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Re-encode the recorded patterns as length groups of concatenated
    /// records, sorted within each group.
    pub fn to_pattern_groups(&self) -> BTreeMap<usize, String> {
        let mut by_width: BTreeMap<usize, Vec<String>> = BTreeMap::new();
        for (key, entry) in &self.patterns {
            let record = entry.to_record(key);
            by_width
                .entry(record.chars().count())
                .or_default()
                .push(record);
        }
        by_width
            .into_iter()
            .map(|(width, mut records)| {
                records.sort();
                (width, records.concat())
            })
            .collect()
    }

    /// Build a pattern file holding only the recorded patterns, reusing the
    /// limits and alphabet of `table`. Every exception in `exceptions` is
    /// carried over, since exception words never reach the patterns.
    pub fn to_language_data(
        &self,
        table: &PatternTable,
        exceptions: &ExceptionSet,
    ) -> LanguageData {
        let key_lengths = self.patterns.keys().map(|k| k.chars().count());
        let shortest = key_lengths.clone().min().unwrap_or(table.shortest_pattern);
        let longest = key_lengths.max().unwrap_or(table.longest_pattern);
        LanguageData {
            left_min: table.left_min,
            right_min: table.right_min,
            shortest_pattern: shortest,
            longest_pattern: longest,
            special_chars: table.special_chars.clone(),
            patterns: self.to_pattern_groups(),
            exceptions: exceptions.to_source(),
            char_substitution: table.char_substitution.clone(),
        }
    }
}
