// WASM bindings for the hyphenation engine.
//
// Provides a `WasmHyphenator` class exported via wasm-bindgen that wraps
// `HyphenatorHandle`. The bundled German and British English data are
// supplied on construction; further languages can be supplied as JSON.
// Structured return values are converted with serde-wasm-bindgen as plain
// JavaScript objects.
//
// Usage from JavaScript:
//
//   const h = new WasmHyphenator('{"hyphen": "-"}');
//   h.hyphenateWord("en-gb", "hyphenation");   // => "hy-phen-a-tion"
//   h.hyphenate("Automatic hyphenation.", "en-gb");
//   h.hyphenateUrl("http://example.com");      // => "http://​example.​com"
//   h.addExceptions("", "Fort-ran");
//   const saved = h.exportLanguage("en-gb");
//   h.restoreLanguage("en-gb", saved);

use serde::Serialize;
use wasm_bindgen::prelude::*;

use hyphenator::{HyphenatorError, HyphenatorHandle, HyphenatorOptions};

fn to_js_error(e: HyphenatorError) -> JsError {
    JsError::new(&e.to_string())
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsError> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| JsError::new(&e.to_string()))
}

// ============================================================================
// WasmHyphenator
// ============================================================================

/// Pattern-based hyphenation engine for WebAssembly.
#[wasm_bindgen]
pub struct WasmHyphenator {
    handle: HyphenatorHandle,
}

#[wasm_bindgen]
impl WasmHyphenator {
    /// Create an instance with the bundled languages supplied.
    ///
    /// - `options_json`: optional JSON object with any of the option fields
    ///   (`min_word_length`, `enable_cache`, `hyphen`, `url_hyphen`, ...)
    #[wasm_bindgen(constructor)]
    pub fn new(options_json: Option<String>) -> Result<WasmHyphenator, JsError> {
        let options = match options_json.as_deref() {
            Some(json) => serde_json::from_str::<HyphenatorOptions>(json)
                .map_err(|e| JsError::new(&format!("invalid options: {e}")))?,
            None => HyphenatorOptions::default(),
        };
        let handle = HyphenatorHandle::with_bundled_languages(options).map_err(to_js_error)?;
        Ok(WasmHyphenator { handle })
    }

    /// Supply language data as JSON (`leftMin`, `rightMin`, `patterns`, ...).
    #[wasm_bindgen(js_name = "supplyLanguage")]
    pub fn supply_language(&mut self, lang: &str, json: &str) -> Result<(), JsError> {
        self.handle
            .supply_language_json(lang, json)
            .map_err(to_js_error)
    }

    /// Register comma-space separated exceptions; `lang` "" means every language.
    #[wasm_bindgen(js_name = "addExceptions")]
    pub fn add_exceptions(&mut self, lang: &str, words: &str) {
        self.handle.add_exceptions(lang, words);
    }

    /// Hyphenate a text: words, URLs and mail addresses.
    pub fn hyphenate(&mut self, text: &str, lang: &str) -> Result<String, JsError> {
        self.handle.hyphenate_text(lang, text).map_err(to_js_error)
    }

    /// Hyphenate a single word.
    #[wasm_bindgen(js_name = "hyphenateWord")]
    pub fn hyphenate_word(&mut self, lang: &str, word: &str) -> Result<String, JsError> {
        self.handle.hyphenate_word(lang, word).map_err(to_js_error)
    }

    /// Insert URL breaks into a URL or mail address.
    #[wasm_bindgen(js_name = "hyphenateUrl")]
    pub fn hyphenate_url(&self, url: &str) -> String {
        self.handle.hyphenate_url(url)
    }

    /// Strip every break marker from a text.
    #[wasm_bindgen(js_name = "removeHyphenation")]
    pub fn remove_hyphenation(&self, text: &str) -> String {
        self.handle.remove_hyphenation(text)
    }

    /// Patterns matched so far, as an object of key to record or weights.
    ///
    /// Returns `undefined` when reduced-set tracking is disabled.
    #[wasm_bindgen(js_name = "reducedPatternSet")]
    pub fn reduced_pattern_set(&self, lang: &str) -> Result<JsValue, JsError> {
        match self.handle.reduced_pattern_set(lang).map_err(to_js_error)? {
            Some(set) => to_js_value(set),
            None => Ok(JsValue::UNDEFINED),
        }
    }

    /// Serialize a prepared language (prepares it first if needed).
    #[wasm_bindgen(js_name = "exportLanguage")]
    pub fn export_language(&mut self, lang: &str) -> Result<String, JsError> {
        self.handle.prepare(lang).map_err(to_js_error)?;
        self.handle.export_language(lang).map_err(to_js_error)
    }

    /// Restore a language from `exportLanguage` output.
    #[wasm_bindgen(js_name = "restoreLanguage")]
    pub fn restore_language(&mut self, lang: &str, json: &str) -> Result<(), JsError> {
        self.handle
            .restore_language(lang, json)
            .map_err(to_js_error)
    }

    /// Ids of all supplied languages.
    pub fn languages(&self) -> js_sys::Array {
        self.handle
            .languages()
            .into_iter()
            .map(JsValue::from_str)
            .collect()
    }

    // =========================================================================
    // Option setters
    // =========================================================================

    /// Set the minimum word length for hyphenation.
    #[wasm_bindgen(js_name = "setMinWordLength")]
    pub fn set_min_word_length(&mut self, value: usize) {
        self.handle.set_min_word_length(value);
    }

    /// Set the orphan control level (1, 2 or 3).
    #[wasm_bindgen(js_name = "setOrphanControl")]
    pub fn set_orphan_control(&mut self, level: u8) -> Result<(), JsError> {
        self.handle.set_orphan_control(level).map_err(to_js_error)
    }

    /// Set the break marker inserted into words.
    #[wasm_bindgen(js_name = "setHyphen")]
    pub fn set_hyphen(&mut self, hyphen: &str) {
        self.handle.set_hyphen(hyphen);
    }

    /// Set the break marker inserted into URLs and mail addresses.
    #[wasm_bindgen(js_name = "setUrlHyphen")]
    pub fn set_url_hyphen(&mut self, url_hyphen: &str) {
        self.handle.set_url_hyphen(url_hyphen);
    }
}
