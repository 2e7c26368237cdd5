// Language data compiled into the binary.

use hyphenator_core::language::LanguageData;

use crate::handle::HyphenatorError;

const DE: &str = include_str!("../data/de.json");
const EN_GB: &str = include_str!("../data/en-gb.json");

/// Ids of the bundled languages.
pub const BUNDLED_LANGUAGES: &[&str] = &["de", "en-gb"];

/// Raw JSON of a bundled language.
pub fn language_json(lang: &str) -> Option<&'static str> {
    match lang {
        "de" => Some(DE),
        "en-gb" => Some(EN_GB),
        _ => None,
    }
}

/// Parsed data of a bundled language.
pub fn language_data(lang: &str) -> Result<LanguageData, HyphenatorError> {
    let json =
        language_json(lang).ok_or_else(|| HyphenatorError::LanguageNotLoaded(lang.to_string()))?;
    Ok(LanguageData::from_json(json)?)
}
