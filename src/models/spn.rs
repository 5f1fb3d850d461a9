//! Scientific pitch notation (SPN) voicing and audio sample lookup
//!
//! The bottom note is always placed in octave 4. The top note goes in octave 4
//! or 5, whichever gives the closed-position (smallest) voicing.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::note::Note;
use crate::errors::{IntervalError, Result};
use crate::parse::note::parse_validated_note;

/// Octave the bottom note is anchored to (middle C octave)
pub const BOTTOM_OCTAVE: i8 = 4;

/// Octaves an SPN can carry, one digit each
pub const MIN_OCTAVE: i8 = 0;
pub const MAX_OCTAVE: i8 = 9;

/// MIDI key number of middle C (C4)
pub const MIDDLE_C_MIDI_KEY: u8 = 60;

/// A note with an octave number, e.g. "F#5"
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(try_from = "RawSpn")]
pub struct Spn {
    note: Note,
    octave: i8,
}

/// Unchecked wire form of `Spn`
#[derive(Deserialize)]
struct RawSpn {
    note: Note,
    octave: i8,
}

impl TryFrom<RawSpn> for Spn {
    type Error = IntervalError;

    fn try_from(raw: RawSpn) -> Result<Self> {
        Spn::new(raw.note, raw.octave)
    }
}

impl Spn {
    /// Build an SPN, rejecting octaves outside 0-9
    pub fn new(note: Note, octave: i8) -> Result<Self> {
        if !(MIN_OCTAVE..=MAX_OCTAVE).contains(&octave) {
            return Err(IntervalError::InternalInconsistency(format!(
                "octave {} out of range for {}",
                octave, note
            )));
        }
        Ok(Self { note, octave })
    }

    pub fn note(&self) -> Note {
        self.note
    }

    pub fn octave(&self) -> i8 {
        self.octave
    }

    /// Sample offset from middle C, one per half step (C4 = 0)
    pub fn audio_index(&self) -> i16 {
        self.note.half_steps() as i16 + 12 * (self.octave as i16 - BOTTOM_OCTAVE as i16)
    }

    /// MIDI key number (C4 = 60)
    pub fn midi_key(&self) -> Result<u8> {
        let key = MIDDLE_C_MIDI_KEY as i16 + self.audio_index();
        u8::try_from(key)
            .ok()
            .filter(|k| *k <= 127)
            .ok_or_else(|| IntervalError::InternalInconsistency(format!("{} has no MIDI key", self)))
    }
}

impl fmt::Display for Spn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.note, self.octave)
    }
}

impl FromStr for Spn {
    type Err = IntervalError;

    /// Parse "C4", "Bb3", "F##5" (and "F*5")
    fn from_str(s: &str) -> Result<Self> {
        let (pitch, octave) = split_spn(s)?;
        Spn::new(pitch.parse()?, octave)
    }
}

/// Split an SPN string into its pitch part and octave digit
fn split_spn(spn: &str) -> Result<(&str, i8)> {
    let digit = spn
        .chars()
        .last()
        .and_then(|c| c.to_digit(10))
        .ok_or_else(|| IntervalError::MalformedInput(format!("'{}' has no octave digit", spn)))?;
    Ok((&spn[..spn.len() - 1], digit as i8))
}

/// Octave for the top note giving the closest voicing above `bottom`
fn top_octave(bottom_whole_steps: u8, whole_step_difference: u8) -> i8 {
    if whole_step_difference >= 1 && whole_step_difference <= 6 - bottom_whole_steps {
        BOTTOM_OCTAVE
    } else {
        BOTTOM_OCTAVE + 1
    }
}

/// Closed-position voicing of two typed notes
pub fn voice_notes(bottom: &Note, top: &Note) -> (Spn, Spn) {
    let difference = (top.whole_steps() as i16 - bottom.whole_steps() as i16).rem_euclid(7) as u8;
    // Octaves 4 and 5 are always in range
    (
        Spn { note: *bottom, octave: BOTTOM_OCTAVE },
        Spn { note: *top, octave: top_octave(bottom.whole_steps(), difference) },
    )
}

/// Closed-position SPN strings for two validated note tokens
///
/// ("C", "G") -> ("C4", "G4"); ("G", "C") -> ("G4", "C5"). Double sharps
/// written "*" come back as "##".
pub fn to_spn(bottom: &str, top: &str) -> Result<(String, String)> {
    let (bottom_spn, top_spn) = voice_notes(&parse_validated_note(bottom)?, &parse_validated_note(top)?);
    Ok((bottom_spn.to_string(), top_spn.to_string()))
}

/// Audio sample index for an SPN string, e.g. "C4" = 0, "G3" = -5
pub fn audio_index(spn: &str) -> Result<i16> {
    Ok(spn.parse::<Spn>()?.audio_index())
}
