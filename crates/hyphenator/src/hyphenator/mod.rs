// Word hyphenation -- Liang's pattern algorithm
//
// The word is padded with boundary markers ("_word_") and every substring of
// length shortest..=longest is looked up in the pattern table. Each match
// contributes weights to the gaps it covers; a gap keeps the highest weight
// seen. Odd weights mark breaks, subject to the language's left/right minimums.
//
// Before the pattern scan, `hyphenate_word` takes the following fast paths in
// order: empty input, input already carrying the break marker, cache hit,
// exception hit, and hyphen-minus compounds (each part hyphenated on its own).

pub mod url;

use tracing::trace;

use hyphenator_core::character::{
    APOSTROPHE, HYPHEN_MINUS, RIGHT_SINGLE_QUOTATION_MARK, WORD_BOUNDARY, ZERO_WIDTH_NON_JOINER,
    simple_lower,
};
use hyphenator_patterns::{PatternTable, ReducedPatternSet};

use crate::language::PreparedLanguage;

pub use url::hyphenate_url;

/// Hyphenate a single word, inserting `hyphen` at every permitted break.
///
/// The word is assumed to contain no whitespace. Break offsets found by the
/// pattern scan are cached under the word as given, so a cache hit renders
/// with the marker of the current call. Exception spellings are not cached.
pub fn hyphenate_word(lang: &mut PreparedLanguage, word: &str, hyphen: &str) -> String {
    if word.is_empty() {
        return String::new();
    }
    if !hyphen.is_empty() && word.contains(hyphen) {
        return word.to_string();
    }
    if let Some(offsets) = lang.cache.as_mut().and_then(|cache| cache.lookup(word)) {
        trace!(word, "cache hit");
        return insert_breaks(word, offsets, hyphen);
    }
    if let Some(spelling) = lang.exceptions.get(word) {
        trace!(word, spelling, "exception hit");
        return spelling.replace(HYPHEN_MINUS, hyphen);
    }
    if word.contains(HYPHEN_MINUS) {
        return word
            .split(HYPHEN_MINUS)
            .map(|part| hyphenate_word(lang, part, hyphen))
            .collect::<Vec<_>>()
            .join("-");
    }

    let offsets = pattern_breaks(lang, word);
    let hyphenated = insert_breaks(word, &offsets, hyphen);
    trace!(word, hyphenated = %hyphenated, "hyphenated");
    if let Some(cache) = lang.cache.as_mut() {
        cache.insert(word, offsets);
    }
    hyphenated
}

// ---------------------------------------------------------------------------
// Pattern scan
// ---------------------------------------------------------------------------

/// A word padded with boundary markers, with zero-width non-joiners removed.
struct PaddedWord {
    /// Characters as written, between two boundary markers.
    chars: Vec<char>,
}

impl PaddedWord {
    fn new(word: &str) -> Self {
        let mut chars = Vec::with_capacity(word.len() + 2);
        chars.push(WORD_BOUNDARY);
        chars.extend(word.chars().filter(|&c| c != ZERO_WIDTH_NON_JOINER));
        chars.push(WORD_BOUNDARY);
        Self { chars }
    }

    /// The form patterns are matched against: substituted and lowercased,
    /// with the first apostrophe turned into a right single quotation mark.
    fn subject(&self, table: &PatternTable) -> Vec<char> {
        let mut subject: Vec<char> = self
            .chars
            .iter()
            .map(|&c| simple_lower(table.substitute(c)))
            .collect();
        if let Some(c) = subject.iter_mut().find(|c| **c == APOSTROPHE) {
            *c = RIGHT_SINGLE_QUOTATION_MARK;
        }
        subject
    }
}

/// Byte offsets into `word` at which the pattern scan allows a break.
fn pattern_breaks(lang: &mut PreparedLanguage, word: &str) -> Vec<usize> {
    let padded = PaddedWord::new(word);
    let subject = padded.subject(&lang.table);
    let levels = gap_levels(
        &mut lang.table,
        lang.reduced_pattern_set.as_mut(),
        &subject,
    );
    let breaks = break_positions(&levels, lang.table.left_min, lang.table.right_min);
    break_offsets(word, &breaks)
}

/// Highest weight seen for the gap after each padded index.
fn gap_levels(
    table: &mut PatternTable,
    mut reduced: Option<&mut ReducedPatternSet>,
    subject: &[char],
) -> Vec<u8> {
    let len = subject.len();
    let mut levels = vec![0u8; len];
    let shortest = table.shortest_pattern.max(1);
    let longest = table.longest_pattern;
    if len < shortest {
        return levels;
    }

    let mut key = String::with_capacity(longest * 4);
    for start in 0..=len - shortest {
        key.clear();
        let window = longest.min(len - start);
        for (width, &c) in subject[start..start + window].iter().enumerate() {
            key.push(c);
            if width + 1 < shortest {
                continue;
            }
            let Some(entry) = table.get_mut(&key) else {
                continue;
            };
            if let Some(reduced) = reduced.as_deref_mut() {
                reduced.record(&key, entry);
            }
            for &(offset, weight) in entry.decode() {
                let Some(gap) = (start + offset).checked_sub(1) else {
                    continue;
                };
                if let Some(level) = levels.get_mut(gap) {
                    if *level < weight {
                        *level = weight;
                    }
                }
            }
        }
    }
    levels
}

/// Padded indices after which a break is allowed: odd level and at least
/// `left_min` characters before, `right_min` after.
fn break_positions(levels: &[u8], left_min: usize, right_min: usize) -> Vec<bool> {
    let mut breaks = vec![false; levels.len()];
    let Some(last) = levels.len().checked_sub(2 + right_min) else {
        return breaks;
    };
    for i in left_min..=last {
        breaks[i] = levels[i] % 2 == 1;
    }
    breaks
}

/// Map breaks after padded indices to byte offsets into `word`.
///
/// A break lands directly after its character, ahead of any zero-width
/// non-joiner that follows it.
fn break_offsets(word: &str, breaks: &[bool]) -> Vec<usize> {
    let mut offsets = Vec::new();
    if breaks.first() == Some(&true) {
        offsets.push(0);
    }
    let mut index = 0;
    for (at, c) in word.char_indices() {
        if c == ZERO_WIDTH_NON_JOINER {
            continue;
        }
        index += 1;
        if breaks.get(index) == Some(&true) {
            offsets.push(at + c.len_utf8());
        }
    }
    offsets
}

/// Insert `hyphen` into `word` at each byte offset. Offsets that are not
/// ascending character boundaries are skipped.
fn insert_breaks(word: &str, offsets: &[usize], hyphen: &str) -> String {
    let mut out = String::with_capacity(word.len() + offsets.len() * hyphen.len());
    let mut from = 0;
    for &at in offsets {
        let Some(part) = word.get(from..at) else {
            continue;
        };
        out.push_str(part);
        out.push_str(hyphen);
        from = at;
    }
    out.push_str(&word[from..]);
    out
}
