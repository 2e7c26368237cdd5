// Character constants and small Unicode helpers shared by the pattern
// compiler and the hyphenation engine.

// ---------------------------------------------------------------------------
// Break markers and special code points
// ---------------------------------------------------------------------------

/// SOFT HYPHEN (U+00AD), the default break marker inserted into words.
pub const SOFT_HYPHEN: char = '\u{00AD}';

/// ZERO WIDTH SPACE (U+200B), the default break marker for URLs and mail addresses.
pub const ZERO_WIDTH_SPACE: char = '\u{200B}';

/// ZERO WIDTH NON-JOINER (U+200C). Marks a morpheme seam that must survive
/// hyphenation.
pub const ZERO_WIDTH_NON_JOINER: char = '\u{200C}';

/// NO-BREAK SPACE (U+00A0), used by orphan control level 3.
pub const NO_BREAK_SPACE: char = '\u{00A0}';

/// The ASCII hyphen-minus. Automatic breaks never cross it.
pub const HYPHEN_MINUS: char = '-';

/// ASCII apostrophe as typed by authors.
pub const APOSTROPHE: char = '\'';

/// RIGHT SINGLE QUOTATION MARK (U+2019), the apostrophe form pattern data uses.
pub const RIGHT_SINGLE_QUOTATION_MARK: char = '\u{2019}';

/// Word boundary marker wrapped around a word before pattern matching.
pub const WORD_BOUNDARY: char = '_';

/// Punctuation after which a URL or mail address may be broken.
const URL_BREAK_CHARS: &[char] = &[':', '/', '.', '?', '#', '&', '_', ',', ';', '!', '@'];

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Convert a character to its simple lowercase equivalent.
///
/// For characters with multi-character lowercase expansions the first
/// character is returned, so the character count of a word never changes.
pub fn simple_lower(c: char) -> char {
    let mut iter = c.to_lowercase();
    iter.next().unwrap_or(c)
}

/// Check whether a character may be followed by a URL break.
pub fn is_url_break_char(c: char) -> bool {
    URL_BREAK_CHARS.contains(&c)
}

/// Return the numeric weight of a pattern digit, or `None` for letters.
pub fn pattern_digit(c: char) -> Option<u8> {
    c.to_digit(10).map(|d| d as u8)
}

/// Remove every pattern digit from a record, leaving the letters-only key.
pub fn strip_digits(record: &str) -> String {
    record.chars().filter(|c| !c.is_ascii_digit()).collect()
}
