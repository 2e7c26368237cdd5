// Shared enums: orphan control level

use serde::{Deserialize, Serialize};

/// How the last word of a hyphenated text is treated.
///
/// Serialized as its numeric level (1, 2 or 3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum OrphanControl {
    /// Level 1: the last word is hyphenated like any other.
    #[default]
    HyphenateLastWord,
    /// Level 2: the last word is left unhyphenated.
    KeepLastWord,
    /// Level 3: the last word is left unhyphenated and the space before it
    /// becomes a no-break space.
    KeepLastWordNoBreak,
}

/// Error for an orphan control level outside 1..=3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("invalid orphan control level {0}, expected 1, 2 or 3")]
pub struct InvalidOrphanControl(pub u8);

impl OrphanControl {
    /// Numeric level of this setting.
    pub fn level(self) -> u8 {
        match self {
            OrphanControl::HyphenateLastWord => 1,
            OrphanControl::KeepLastWord => 2,
            OrphanControl::KeepLastWordNoBreak => 3,
        }
    }
}

impl TryFrom<u8> for OrphanControl {
    type Error = InvalidOrphanControl;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        match level {
            1 => Ok(OrphanControl::HyphenateLastWord),
            2 => Ok(OrphanControl::KeepLastWord),
            3 => Ok(OrphanControl::KeepLastWordNoBreak),
            other => Err(InvalidOrphanControl(other)),
        }
    }
}

impl From<OrphanControl> for u8 {
    fn from(value: OrphanControl) -> Self {
        value.level()
    }
}
