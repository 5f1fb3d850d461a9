//! Note representation (letter + accidental, no octave)

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::elements::{accidental_offset, letter_half_steps, Accidental, Letter};
use crate::errors::{IntervalError, Result};

/// A note name such as "C", "F#" or "Bbb"
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Note {
    pub letter: Letter,
    pub accidental: Accidental,
}

impl Note {
    pub fn new(letter: Letter, accidental: Accidental) -> Self {
        Self { letter, accidental }
    }

    /// Chromatic distance from C within one octave, in [-2, 13]
    pub fn half_steps(&self) -> i8 {
        self.letter.half_steps() + self.accidental.semitone_offset()
    }

    /// Staff distance from C, in [0, 6]
    pub fn whole_steps(&self) -> u8 {
        self.letter.whole_steps()
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.letter.as_char(), self.accidental.symbol())
    }
}

impl FromStr for Note {
    type Err = IntervalError;

    fn from_str(s: &str) -> Result<Self> {
        crate::parse::note::parse_note(s)
    }
}

/// Half steps above C for a note token, e.g. "Cb" = -1, "B#" = 12
///
/// Expects a validated token; anything else is an internal error.
pub fn note_half_steps(note: &str) -> Result<i8> {
    let mut chars = note.chars();
    let letter = chars
        .next()
        .ok_or_else(|| IntervalError::InternalInconsistency("empty note".to_string()))?;
    Ok(letter_half_steps(letter)? + accidental_offset(chars.as_str())?)
}
