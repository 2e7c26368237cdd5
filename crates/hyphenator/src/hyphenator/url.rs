// URL and mail-address hyphenation.
//
// Addresses are not split by patterns. Instead a break marker goes after each
// run of URL punctuation, so "http://example.com" breaks after "://" and ".".

use hyphenator_core::character::is_url_break_char;

/// Insert `url_hyphen` after every run of URL punctuation in `text`.
pub fn hyphenate_url(text: &str, url_hyphen: &str) -> String {
    let mut out = String::with_capacity(text.len() + url_hyphen.len() * 4);
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        out.push(c);
        if is_url_break_char(c) && !chars.peek().copied().is_some_and(is_url_break_char) {
            out.push_str(url_hyphen);
        }
    }
    out
}
