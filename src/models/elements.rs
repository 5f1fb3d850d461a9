//! Note letters and accidentals
//!
//! Pitch arithmetic is done relative to C, the first letter of a
//! scientific pitch notation octave.

use serde::{Deserialize, Serialize};

use crate::errors::{IntervalError, Result};

/// Half steps above C for each letter, indexed by whole steps above C
const LETTER_HALF_STEPS: [i8; 7] = [0, 2, 4, 5, 7, 9, 11];

/// Note letter (staff position), numbered by whole steps above C
#[repr(u8)]
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Letter {
    C = 0,
    D = 1,
    E = 2,
    F = 3,
    G = 4,
    A = 5,
    B = 6,
}

impl Letter {
    /// All letters in staff order starting at C
    pub const ALL: [Letter; 7] = [
        Letter::C,
        Letter::D,
        Letter::E,
        Letter::F,
        Letter::G,
        Letter::A,
        Letter::B,
    ];

    /// Parse an uppercase letter A-G
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'C' => Some(Letter::C),
            'D' => Some(Letter::D),
            'E' => Some(Letter::E),
            'F' => Some(Letter::F),
            'G' => Some(Letter::G),
            'A' => Some(Letter::A),
            'B' => Some(Letter::B),
            _ => None,
        }
    }

    pub fn as_char(&self) -> char {
        match self {
            Letter::C => 'C',
            Letter::D => 'D',
            Letter::E => 'E',
            Letter::F => 'F',
            Letter::G => 'G',
            Letter::A => 'A',
            Letter::B => 'B',
        }
    }

    /// Whole steps above C, in [0, 6]
    pub fn whole_steps(&self) -> u8 {
        *self as u8
    }

    /// Half steps above C before any accidental is applied
    pub fn half_steps(&self) -> i8 {
        LETTER_HALF_STEPS[self.whole_steps() as usize]
    }
}

/// Accidental attached to a note letter
#[repr(i8)]
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Accidental {
    /// Double flat (bb)
    DoubleFlat = -2,

    /// Flat (b)
    Flat = -1,

    /// No accidental
    Natural = 0,

    /// Sharp (#)
    Sharp = 1,

    /// Double sharp (## or *)
    DoubleSharp = 2,
}

impl Accidental {
    /// Parse accidental text; "*" is accepted as a double sharp
    pub fn parse(text: &str) -> Option<Self> {
        match text {
            "" => Some(Accidental::Natural),
            "b" => Some(Accidental::Flat),
            "bb" => Some(Accidental::DoubleFlat),
            "#" => Some(Accidental::Sharp),
            "##" | "*" => Some(Accidental::DoubleSharp),
            _ => None,
        }
    }

    /// Display symbol; double sharps always render as "##"
    pub fn symbol(&self) -> &'static str {
        match self {
            Accidental::DoubleFlat => "bb",
            Accidental::Flat => "b",
            Accidental::Natural => "",
            Accidental::Sharp => "#",
            Accidental::DoubleSharp => "##",
        }
    }

    /// Get the semitone offset for this accidental
    pub fn semitone_offset(&self) -> i8 {
        *self as i8
    }
}

impl Default for Accidental {
    fn default() -> Self {
        Accidental::Natural
    }
}

/// Half steps above C for a letter, before accidentals
pub fn letter_half_steps(letter: char) -> Result<i8> {
    Letter::from_char(letter)
        .map(|l| l.half_steps())
        .ok_or(IntervalError::InvalidNote(letter))
}

/// Half-step change caused by an accidental string
pub fn accidental_offset(accidental: &str) -> Result<i8> {
    Accidental::parse(accidental)
        .map(|a| a.semitone_offset())
        .ok_or_else(|| IntervalError::InvalidAccidental(accidental.to_string()))
}

/// Whole steps above C for a letter: C = 0 through B = 6
pub fn note_whole_steps(letter: char) -> Result<u8> {
    if !('A'..='G').contains(&letter) {
        return Err(IntervalError::InvalidNote(letter));
    }
    Ok((letter as i32 - 'C' as i32).rem_euclid(7) as u8)
}

/// Upward letter distance from bottom to top, wrapping at the octave
pub fn whole_step_difference(bottom: char, top: char) -> Result<u8> {
    let bottom_steps = note_whole_steps(bottom)? as i32;
    let top_steps = note_whole_steps(top)? as i32;
    Ok((top_steps - bottom_steps).rem_euclid(7) as u8)
}
