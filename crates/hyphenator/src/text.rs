// Bulk text hyphenation.
//
// A text is tokenized with the prepared language's matcher. URLs and mail
// addresses get URL breaks, every other token goes through word hyphenation.
// Everything between tokens (spaces, punctuation, short words) is copied as is.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use hyphenator_core::character::NO_BREAK_SPACE;
use hyphenator_core::enums::OrphanControl;

use crate::hyphenator::{hyphenate_url, hyphenate_word};
use crate::language::PreparedLanguage;
use crate::language::matcher::is_url_or_mail;
use crate::options::HyphenatorOptions;

static LAST_WORD_PAIR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+ \S+$").expect("last word pattern is valid"));

/// Hyphenate every word, URL and mail address in `text`.
///
/// Texts shorter than the minimum word length are returned unchanged. Orphan
/// control is applied to the result.
pub fn hyphenate_text(
    lang: &mut PreparedLanguage,
    text: &str,
    options: &HyphenatorOptions,
) -> Result<String, regex::Error> {
    if text.chars().count() < options.min_word_length {
        return Ok(text.to_string());
    }
    let matcher = lang.matcher()?.clone();
    let hyphenated = matcher.replace_all(text, |caps: &Captures<'_>| {
        let token = &caps[0];
        if is_url_or_mail(token) {
            hyphenate_url(token, &options.url_hyphen)
        } else {
            hyphenate_word(lang, token, &options.hyphen)
        }
    });
    Ok(control_orphans(
        &hyphenated,
        options.orphan_control,
        &options.hyphen,
        &options.url_hyphen,
    ))
}

/// Adjust the last two words of `text` according to `level`.
///
/// `KeepLastWord` strips break markers from the last word;
/// `KeepLastWordNoBreak` also joins the pair with a no-break space.
pub fn control_orphans(text: &str, level: OrphanControl, hyphen: &str, url_hyphen: &str) -> String {
    if level == OrphanControl::HyphenateLastWord {
        return text.to_string();
    }
    LAST_WORD_PAIR
        .replace(text, |caps: &Captures<'_>| {
            let pair = &caps[0];
            let Some((first, last)) = pair.split_once(' ') else {
                return pair.to_string();
            };
            let last = remove_hyphenation(last, hyphen, url_hyphen);
            match level {
                OrphanControl::KeepLastWordNoBreak => format!("{first}{NO_BREAK_SPACE}{last}"),
                _ => format!("{first} {last}"),
            }
        })
        .into_owned()
}

/// Remove every `hyphen` and `url_hyphen` marker from `text`.
pub fn remove_hyphenation(text: &str, hyphen: &str, url_hyphen: &str) -> String {
    let mut out = text.to_string();
    for marker in [hyphen, url_hyphen] {
        if !marker.is_empty() {
            out = out.replace(marker, "");
        }
    }
    out
}
