//! Behavioural properties of word and text hyphenation that hold for any
//! language data, checked against small hand-written pattern sets and the
//! bundled languages.

use hyphenator::{HyphenatorError, HyphenatorHandle, HyphenatorOptions};
use hyphenator_core::language::LanguageData;

const ZWSP: &str = "\u{200B}";

fn hy3ph() -> LanguageData {
    LanguageData::from_json(
        r#"{"leftMin":2,"rightMin":2,"shortestPattern":2,"longestPattern":4,
            "patterns":{"5":"hy3ph"}}"#,
    )
    .unwrap()
}

fn handle_with(options: HyphenatorOptions) -> HyphenatorHandle {
    let mut handle = HyphenatorHandle::new(options);
    handle.supply_language("xx", hy3ph());
    handle
}

fn handle() -> HyphenatorHandle {
    handle_with(HyphenatorOptions {
        hyphen: "|".to_string(),
        ..Default::default()
    })
}

#[test]
fn single_pattern_scenario() {
    let mut h = handle_with(HyphenatorOptions::default());
    assert_eq!(h.hyphenate_word("xx", "hyphen").unwrap(), "hy\u{00AD}phen");
}

#[test]
fn hyphenated_output_is_stable() {
    let mut h = handle();
    let once = h.hyphenate_word("xx", "hyphen").unwrap();
    let twice = h.hyphenate_word("xx", &once).unwrap();
    assert_eq!(once, twice);
}

#[test]
fn cached_and_uncached_agree() {
    let mut cached = handle();
    let mut uncached = handle_with(HyphenatorOptions {
        hyphen: "|".to_string(),
        enable_cache: false,
        ..Default::default()
    });
    for word in ["hyphen", "Hyphen", "hyphen", "philosophy"] {
        assert_eq!(
            cached.hyphenate_word("xx", word).unwrap(),
            uncached.hyphenate_word("xx", word).unwrap()
        );
    }
    assert_eq!(cached.prepared("xx").unwrap().cache().unwrap().hits(), 1);
    assert!(uncached.prepared("xx").unwrap().cache().is_none());
}

#[test]
fn hyphen_minus_is_preserved() {
    let mut h = handle();
    let out = h.hyphenate_word("xx", "hyphen-hyphen-x").unwrap();
    assert_eq!(out, "hy|phen-hy|phen-x");
    assert_eq!(out.matches('-').count(), 2);
}

#[test]
fn exceptions_win_over_patterns() {
    let mut h = handle();
    h.add_exceptions("xx", "hyphe-n");
    assert_eq!(h.hyphenate_word("xx", "hyphen").unwrap(), "hyphe|n");
}

#[test]
fn unhyphenated_exception_blocks_breaks() {
    let mut h = HyphenatorHandle::new(HyphenatorOptions {
        hyphen: "|".to_string(),
        ..Default::default()
    });
    h.supply_language_json(
        "xx",
        r#"{"leftMin":2,"rightMin":2,"shortestPattern":2,"longestPattern":2,
            "patterns":{"3":"t1r"}}"#,
    )
    .unwrap();
    h.add_exceptions("xx", "Fortran");
    assert_eq!(h.hyphenate_word("xx", "Fortran").unwrap(), "Fortran");
    assert_eq!(
        h.hyphenate_text("xx", "Fortran and fortran").unwrap(),
        "Fortran and fort|ran"
    );
    assert!(h.prepared("xx").unwrap().cache().unwrap().peek("Fortran").is_none());
}

#[test]
fn removal_restores_input() {
    let mut h = handle_with(HyphenatorOptions::default());
    let text = "Another hyphen: see http://example.com/path or hyphen@example.org.";
    let hyphenated = h.hyphenate_text("xx", text).unwrap();
    assert_ne!(hyphenated, text);
    assert_eq!(h.remove_hyphenation(&hyphenated), text);
}

#[test]
fn url_scenario() {
    let h = handle_with(HyphenatorOptions::default());
    assert_eq!(
        h.hyphenate_url("http://example.com/path"),
        format!("http://{ZWSP}example.{ZWSP}com/{ZWSP}path")
    );
}

#[test]
fn breaks_respect_minimums() {
    let data = LanguageData::from_json(
        r#"{"leftMin":3,"rightMin":3,"shortestPattern":1,"longestPattern":1,
            "patterns":{"2":"a1b1c1d1e1f1g1h1"}}"#,
    )
    .unwrap();
    let mut h = handle();
    h.supply_language("odd", data);
    let out = h.hyphenate_word("odd", "abcdefgh").unwrap();
    assert_eq!(out, "abc|d|e|fgh");
    let pieces: Vec<&str> = out.split('|').collect();
    assert!(pieces.first().unwrap().chars().count() >= 3);
    assert!(pieces.last().unwrap().chars().count() >= 3);
}

#[test]
fn round_trip_through_json() {
    let mut h = handle();
    h.hyphenate_word("xx", "hyphen").unwrap();
    let json = h.export_language("xx").unwrap();

    let mut restored = HyphenatorHandle::new(h.options().clone());
    restored.restore_language("xx", &json).unwrap();
    for word in ["hyphen", "hyphenhyphen", "HYPHEN"] {
        assert_eq!(
            restored.hyphenate_word("xx", word).unwrap(),
            h.hyphenate_word("xx", word).unwrap()
        );
    }
    assert!(restored.prepared("xx").unwrap().cache().unwrap().hits() >= 1);
}

#[test]
fn restore_rejects_garbage() {
    let mut h = handle();
    assert!(matches!(
        h.restore_language("xx", "{not json"),
        Err(HyphenatorError::Serialization(_))
    ));
}

#[cfg(feature = "bundled")]
#[test]
fn bundled_words_are_stable() {
    let mut h = HyphenatorHandle::with_bundled_languages(HyphenatorOptions::default()).unwrap();
    for (lang, word) in [("de", "Silbentrennung"), ("en-gb", "hyphenation")] {
        let once = h.hyphenate_word(lang, word).unwrap();
        assert_ne!(once, word);
        assert_eq!(h.hyphenate_word(lang, &once).unwrap(), once);
        assert_eq!(h.remove_hyphenation(&once), word);
    }
}
