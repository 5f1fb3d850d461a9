//! LilyPond notation mapping
//!
//! Absolute-octave pitch names in the "nederlands" language, the LilyPond
//! default: sharps add "is", flats add "es", `c'` is middle C.

use crate::models::{Accidental, Letter, Spn};

/// LilyPond's absolute octave without any marks (c = C3)
const UNMARKED_OCTAVE: i8 = 3;

/// Convert an SPN pitch to an absolute LilyPond pitch, e.g. Bb4 -> "bes'"
pub fn lilypond_pitch(spn: &Spn) -> String {
    let note = spn.note();
    let letter = note.letter.as_char().to_ascii_lowercase();
    let suffix = match (note.letter, note.accidental) {
        (_, Accidental::Natural) => "",
        (_, Accidental::Sharp) => "is",
        (_, Accidental::DoubleSharp) => "isis",
        (Letter::E, Accidental::Flat) | (Letter::A, Accidental::Flat) => "s",
        (Letter::E, Accidental::DoubleFlat) | (Letter::A, Accidental::DoubleFlat) => "ses",
        (_, Accidental::Flat) => "es",
        (_, Accidental::DoubleFlat) => "eses",
    };

    format!("{}{}{}", letter, suffix, octave_marks(spn.octave()))
}

fn octave_marks(octave: i8) -> String {
    let shift = octave - UNMARKED_OCTAVE;
    if shift > 0 {
        "'".repeat(shift as usize)
    } else if shift < 0 {
        ",".repeat((-shift) as usize)
    } else {
        String::new()
    }
}

/// Both notes as one whole-note chord, e.g. "<c' g'>1"
pub fn lilypond_chord(bottom: &Spn, top: &Spn) -> String {
    format!("<{} {}>1", lilypond_pitch(bottom), lilypond_pitch(top))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pitch(s: &str) -> String {
        lilypond_pitch(&s.parse().unwrap())
    }

    #[test]
    fn test_naturals_and_octaves() {
        assert_eq!(pitch("C4"), "c'");
        assert_eq!(pitch("C5"), "c''");
        assert_eq!(pitch("G3"), "g");
        assert_eq!(pitch("A2"), "a,");
    }

    #[test]
    fn test_accidentals() {
        assert_eq!(pitch("F#4"), "fis'");
        assert_eq!(pitch("F##4"), "fisis'");
        assert_eq!(pitch("Bb4"), "bes'");
        assert_eq!(pitch("Bbb4"), "beses'");
        assert_eq!(pitch("Eb4"), "es'");
        assert_eq!(pitch("Ab5"), "as''");
        assert_eq!(pitch("Abb4"), "ases'");
    }

    #[test]
    fn test_chord() {
        let chord = lilypond_chord(&"G4".parse().unwrap(), &"C5".parse().unwrap());
        assert_eq!(chord, "<g' c''>1");
    }
}
