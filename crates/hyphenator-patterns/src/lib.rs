//! Pattern and exception compilers for Liang hyphenation tables.
//!
//! A language's raw data ([`LanguageData`](hyphenator_core::language::LanguageData))
//! carries its patterns as length groups of compact records such as `"hy3ph"`.
//! This crate turns that into lookup structures the engine can scan.
//!
//! # Architecture
//!
//! - [`entry`] -- one pattern slot: raw record or decoded `(offset, weight)` pairs
//! - [`table`] -- flattened key-to-entry table with lazy, in-place decoding
//! - [`exceptions`] -- exception-list compiler and pending-registration registry
//! - [`reduced`] -- usage-driven subset of a table, exportable as a pattern file

pub mod entry;
pub mod exceptions;
pub mod reduced;
pub mod table;

pub use entry::{PatternEntry, Weight};
pub use exceptions::{ExceptionRegistry, ExceptionSet};
pub use reduced::ReducedPatternSet;
pub use table::PatternTable;
