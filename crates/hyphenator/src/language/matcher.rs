// Token matchers for bulk text.
//
// A text is scanned with one combined expression: URL, then mail address,
// then word. Alternatives are tried leftmost-first, so a URL or address is
// consumed whole before the word alternative can split it. The word
// alternative depends on the language's alphabet and the minimum word length,
// so it is built per prepared language.

use std::sync::LazyLock;

use regex::Regex;

/// URLs with optional scheme, credentials, port and path.
pub const URL_PATTERN: &str = concat!(
    r"(?:[0-9A-Za-z_]*://)?",
    r"(?:(?:[0-9A-Za-z_]*:)?[0-9A-Za-z_]*@)?",
    r"(?:(?:[0-9]{1,3}\.){3}[0-9]{1,3}",
    r"|(?:www\.|[a-zA-Z]\.)?[a-zA-Z0-9\-.]+\.[a-z]{2,4})",
    r"(?::[0-9]*)?",
    r"(?:/[0-9A-Za-z_#!:.?+=&%@\-]*)*",
);

/// Mail addresses.
pub const MAIL_PATTERN: &str = r"[0-9A-Za-z_\-.]+@[0-9A-Za-z_.]+";

static URL_OR_MAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("(?i)(?:{URL_PATTERN})|(?:{MAIL_PATTERN})"))
        .expect("URL and mail patterns are valid")
});

/// Whether a matched token should be treated as a URL or mail address.
pub fn is_url_or_mail(token: &str) -> bool {
    URL_OR_MAIL.is_match(token)
}

/// Character class body for words of a language with `special_chars`.
///
/// ASCII word characters, the language's extra letters, `@`, soft hyphen,
/// zero-width non-joiner and hyphen-minus.
fn word_class(special_chars: &str) -> String {
    let mut class = String::from("0-9A-Za-z_");
    for c in special_chars.chars() {
        class.push_str(&regex::escape(c.encode_utf8(&mut [0; 4])));
    }
    class.push_str("@\u{00AD}\u{200C}\\-");
    class
}

/// Build the combined URL, mail and word matcher for one language.
pub fn text_matcher(special_chars: &str, min_word_length: usize) -> Result<Regex, regex::Error> {
    let class = word_class(special_chars);
    let min = min_word_length.max(1);
    Regex::new(&format!(
        "(?i)(?:{URL_PATTERN})|(?:{MAIL_PATTERN})|(?:[{class}]{{{min},}})"
    ))
}
