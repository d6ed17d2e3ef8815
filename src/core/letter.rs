//! Per-letter evaluation state
//!
//! Each grid cell carries one of these states. A cell starts `Blank`, becomes
//! `Guessed` while the player is typing, and is fixed to one of the three
//! evaluated states when the row is submitted.

use std::fmt;

/// State of a single letter cell in the guess grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterState {
    /// Cell has not been touched yet
    Blank,
    /// Letter entered but the row has not been evaluated
    Guessed,
    /// Letter is not available in the secret at this position's evaluation
    Absent,
    /// Letter is in the secret but at a different position
    Present,
    /// Letter is in the secret at exactly this position
    Correct,
}

impl LetterState {
    /// True once the row containing this cell has been evaluated
    #[inline]
    #[must_use]
    pub const fn is_evaluated(self) -> bool {
        matches!(self, Self::Absent | Self::Present | Self::Correct)
    }
}

impl fmt::Display for LetterState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Blank => "blank",
            Self::Guessed => "guessed",
            Self::Absent => "absent",
            Self::Present => "present",
            Self::Correct => "correct",
        };
        write!(f, "{name}")
    }
}
