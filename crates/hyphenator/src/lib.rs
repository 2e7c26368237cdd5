//! Liang-pattern hyphenation engine.
//!
//! Inserts break markers (soft hyphens by default) into words, texts, URLs
//! and mail addresses, driven by per-language pattern tables.
//!
//! # Architecture
//!
//! - [`options`] -- engine configuration, loadable from TOML
//! - [`language`] -- preparation of raw language data, text matcher
//! - [`hyphenator`] -- word hyphenation (pattern scan and fast paths), URL breaks
//! - [`text`] -- bulk text hyphenation, orphan control, marker removal
//! - [`cache`] -- per-language word cache
//! - [`handle`] -- [`HyphenatorHandle`], the entry point owning all languages
//! - `bundled` -- German and British English data (feature `bundled`)
//!
//! # Example
//!
//! ```
//! use hyphenator::{HyphenatorHandle, HyphenatorOptions};
//!
//! let options = HyphenatorOptions { hyphen: "-".into(), ..Default::default() };
//! let mut handle = HyphenatorHandle::new(options);
//! handle
//!     .supply_language_json(
//!         "xx",
//!         r#"{"leftMin":2,"rightMin":2,"shortestPattern":2,"longestPattern":4,
//!             "patterns":{"5":"hy3ph"}}"#,
//!     )
//!     .unwrap();
//! assert_eq!(handle.hyphenate_word("xx", "hyphen").unwrap(), "hy-phen");
//! ```

#[cfg(feature = "bundled")]
pub mod bundled;
pub mod cache;
pub mod handle;
pub mod hyphenator;
pub mod language;
pub mod options;
pub mod text;

pub use handle::{HyphenatorError, HyphenatorHandle};
pub use language::PreparedLanguage;
pub use options::HyphenatorOptions;
