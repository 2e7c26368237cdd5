// Per-language cache of hyphenated words.
//
// Unbounded and never invalidated: a prepared language's patterns do not
// change, so a cached result stays correct for the lifetime of the language.
// Words that contain a hyphen, are exceptions, or already carry the break
// marker never reach the cache.
//
// Entries hold break offsets, not rendered words, so the break marker can
// change between calls.

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

/// Word to the byte offsets of its breaks, plus hit/miss counters.
///
/// Only the entries are serialized; the counters restart at zero.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WordCache {
    entries: HashMap<String, Vec<usize>>,
    #[serde(skip)]
    hits: u64,
    #[serde(skip)]
    misses: u64,
}

impl WordCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the break offsets of a word, counting the outcome.
    pub fn lookup(&mut self, word: &str) -> Option<&[usize]> {
        match self.entries.get(word) {
            Some(offsets) => {
                self.hits += 1;
                Some(offsets.as_slice())
            }
            None => {
                self.misses += 1;
                None
            }
        }
    }

    /// Look up a word without touching the counters.
    pub fn peek(&self, word: &str) -> Option<&[usize]> {
        self.entries.get(word).map(Vec::as_slice)
    }

    /// Store the break offsets of `word`, ascending.
    pub fn insert(&mut self, word: &str, offsets: Vec<usize>) {
        self.entries.insert(word.to_string(), offsets);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of lookups answered from the cache.
    pub fn hits(&self) -> u64 {
        self.hits
    }

    /// Number of lookups that missed.
    pub fn misses(&self) -> u64 {
        self.misses
    }
}
