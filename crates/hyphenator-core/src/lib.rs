//! Shared types for Liang pattern hyphenation.
//!
//! - [`character`] -- break-marker constants and character helpers
//! - [`enums`] -- option enums shared by the engine and its hosts
//! - [`language`] -- raw per-language pattern data as supplied by a host

pub mod character;
pub mod enums;
pub mod language;
