// Pattern entries: one record of a Liang pattern table, either still in its
// compact record form ("hy3ph") or decoded into (offset, weight) pairs.

use serde::{Deserialize, Serialize};

use hyphenator_core::character::pattern_digit;

/// A break weight: `(offset, weight)`.
///
/// `offset` is the number of key letters before the break position, so an
/// offset of 2 in key `"hyph"` denotes the gap between `y` and `p`. Weights are
/// 1..=9; zero weights are never stored.
pub type Weight = (usize, u8);

/// Storage slot for one pattern key.
///
/// Starts as [`PatternEntry::Raw`] and is turned into
/// [`PatternEntry::Decoded`] the first time the key matches. Serialized
/// untagged: a JSON string before decoding, an array of `[offset, weight]`
/// pairs afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PatternEntry {
    /// The record as it appeared in the pattern group, digits included.
    Raw(String),
    /// Decoded break weights, ordered by offset.
    Decoded(Vec<Weight>),
}

impl PatternEntry {
    /// Decode the entry in place (once) and return its weights.
    ///
    /// Calling this on an already decoded entry is a no-op.
    pub fn decode(&mut self) -> &[Weight] {
        if let PatternEntry::Raw(record) = self {
            let weights = decode_record(record);
            *self = PatternEntry::Decoded(weights);
        }
        match self {
            PatternEntry::Decoded(weights) => weights.as_slice(),
            PatternEntry::Raw(_) => &[],
        }
    }

    /// Whether [`decode`](Self::decode) has already run on this entry.
    pub fn is_decoded(&self) -> bool {
        matches!(self, PatternEntry::Decoded(_))
    }

    /// Reconstruct the compact record for `key`.
    pub fn to_record(&self, key: &str) -> String {
        match self {
            PatternEntry::Raw(record) => record.clone(),
            PatternEntry::Decoded(weights) => encode_record(key, weights),
        }
    }
}

/// Decode a compact record such as `"a5b"` into `[(1, 5)]`.
///
/// A digit's offset is the count of letters seen before it.
pub fn decode_record(record: &str) -> Vec<Weight> {
    let mut weights = Vec::new();
    let mut letters = 0;
    for c in record.chars() {
        match pattern_digit(c) {
            Some(0) => {}
            Some(weight) => weights.push((letters, weight)),
            None => letters += 1,
        }
    }
    weights
}

/// Encode a letters-only key and its weights back into a compact record.
pub fn encode_record(key: &str, weights: &[Weight]) -> String {
    let mut record = String::with_capacity(key.len() + weights.len());
    let mut pending = weights.iter().peekable();
    let mut push_digits = |offset: usize, record: &mut String| {
        while let Some(&&(o, w)) = pending.peek() {
            if o != offset {
                break;
            }
            if let Some(d) = char::from_digit(u32::from(w), 10) {
                record.push(d);
            }
            pending.next();
        }
    };
    let mut letters = 0;
    for c in key.chars() {
        push_digits(letters, &mut record);
        record.push(c);
        letters += 1;
    }
    push_digits(letters, &mut record);
    record
}
