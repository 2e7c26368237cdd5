//! Golden tests: bundled German and British English data against reference
//! hyphenations recorded in `tests/golden/hyphenation.json`.
//!
//! Words and texts use `|` as the hyphen; URLs use the default zero-width
//! space.
//!
//! Run: cargo test -p hyphenator --test golden

#![cfg(feature = "bundled")]

use std::path::PathBuf;

use serde_json::Value;

use hyphenator::{HyphenatorHandle, HyphenatorOptions};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn load_golden() -> Value {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/golden/hyphenation.json");
    let contents = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read golden file {}: {}", path.display(), e));
    serde_json::from_str(&contents)
        .unwrap_or_else(|e| panic!("failed to parse golden file {}: {}", path.display(), e))
}

fn create_handle() -> HyphenatorHandle {
    let options = HyphenatorOptions {
        hyphen: "|".to_string(),
        ..Default::default()
    };
    HyphenatorHandle::with_bundled_languages(options)
        .unwrap_or_else(|e| panic!("failed to load bundled languages: {e}"))
}

/// Run `f` over every `(input, expected)` pair of `section` and report all
/// mismatches at once.
fn check_section(
    golden: &Value,
    lang: &str,
    section: &str,
    mut f: impl FnMut(&str) -> String,
) {
    let cases = golden[lang][section]
        .as_object()
        .unwrap_or_else(|| panic!("missing section {lang}.{section}"));
    let mut mismatches = Vec::new();
    for (input, expected) in cases {
        let expected = expected.as_str().unwrap();
        let actual = f(input);
        if actual != expected {
            mismatches.push(format!("  {input:?}: expected {expected:?}, got {actual:?}"));
        }
    }
    assert!(
        mismatches.is_empty(),
        "{}/{} {lang}.{section} mismatches:\n{}",
        mismatches.len(),
        cases.len(),
        mismatches.join("\n")
    );
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[test]
fn german_words() {
    let golden = load_golden();
    let mut handle = create_handle();
    check_section(&golden, "de", "words", |w| handle.hyphenate_word("de", w).unwrap());
}

#[test]
fn german_texts() {
    let golden = load_golden();
    let mut handle = create_handle();
    check_section(&golden, "de", "texts", |t| handle.hyphenate_text("de", t).unwrap());
}

#[test]
fn english_words() {
    let golden = load_golden();
    let mut handle = create_handle();
    check_section(&golden, "en-gb", "words", |w| {
        handle.hyphenate_word("en-gb", w).unwrap()
    });
}

#[test]
fn english_texts() {
    let golden = load_golden();
    let mut handle = create_handle();
    check_section(&golden, "en-gb", "texts", |t| {
        handle.hyphenate_text("en-gb", t).unwrap()
    });
}

#[test]
fn urls() {
    let golden = load_golden();
    let cases = golden["urls"].as_object().unwrap();
    let handle = create_handle();
    for (url, expected) in cases {
        assert_eq!(handle.hyphenate_url(url), expected.as_str().unwrap(), "{url}");
    }
}

#[test]
fn words_stable_with_pre_decoded_patterns() {
    let golden = load_golden();
    let mut handle = HyphenatorHandle::with_bundled_languages(HyphenatorOptions {
        hyphen: "|".to_string(),
        pre_decode_patterns: true,
        enable_cache: false,
        ..Default::default()
    })
    .unwrap();
    check_section(&golden, "de", "words", |w| handle.hyphenate_word("de", w).unwrap());
    check_section(&golden, "en-gb", "words", |w| {
        handle.hyphenate_word("en-gb", w).unwrap()
    });
}

#[test]
fn reduced_set_reproduces_results() {
    let golden = load_golden();
    let mut full = HyphenatorHandle::with_bundled_languages(HyphenatorOptions {
        hyphen: "|".to_string(),
        enable_reduced_pattern_set: true,
        ..Default::default()
    })
    .unwrap();
    check_section(&golden, "en-gb", "words", |w| {
        full.hyphenate_word("en-gb", w).unwrap()
    });

    let reduced = full
        .prepared("en-gb")
        .unwrap()
        .reduced_language_data()
        .unwrap();
    let mut small = HyphenatorHandle::new(full.options().clone());
    small.supply_language("en-gb", reduced);
    check_section(&golden, "en-gb", "words", |w| {
        small.hyphenate_word("en-gb", w).unwrap()
    });
}
