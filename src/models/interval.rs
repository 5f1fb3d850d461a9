//! Interval classification
//!
//! The generic size comes from the letter distance alone; the quality comes
//! from how far the half-step distance sits from that size's reference
//! (major or perfect) interval.
//!
//! ```text
//!  offset  flexible (2,3,6,7)      inflexible (4,5,8)
//!    -6    Quintuple-Diminished
//!    -5    Quadruple-Diminished    Quintuple-Diminished
//!    -4    Triple-Diminished       Quadruple-Diminished
//!    -3    Double-Diminished       Triple-Diminished
//!    -2    Diminished              Double-Diminished
//!    -1    Minor                   Diminished
//!     0    Major                   Perfect
//!     1    Augmented               Augmented
//!   2..5   Double- .. Quintuple-Augmented (both)
//! ```

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use super::note::Note;
use crate::errors::{IntervalError, Result};
use crate::parse::note::parse_validated_note;

/// Quality labels for sizes that can be major or minor, offsets -6..=5
const FLEXIBLE_QUALITIES: [&str; 12] = [
    "Quintuple-Diminished",
    "Quadruple-Diminished",
    "Triple-Diminished",
    "Double-Diminished",
    "Diminished",
    "Minor",
    "Major",
    "Augmented",
    "Double-Augmented",
    "Triple-Augmented",
    "Quadruple-Augmented",
    "Quintuple-Augmented",
];
const FLEXIBLE_LOWEST: i8 = -6;

/// Quality labels for perfect sizes, offsets -5..=5
const INFLEXIBLE_QUALITIES: [&str; 11] = [
    "Quintuple-Diminished",
    "Quadruple-Diminished",
    "Triple-Diminished",
    "Double-Diminished",
    "Diminished",
    "Perfect",
    "Augmented",
    "Double-Augmented",
    "Triple-Augmented",
    "Quadruple-Augmented",
    "Quintuple-Augmented",
];
const INFLEXIBLE_LOWEST: i8 = -5;

/// Generic interval size, ignoring accidentals
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GenericIntervalSize {
    Second,
    Third,
    Fourth,
    Fifth,
    Sixth,
    Seventh,
    Octave,
}

impl GenericIntervalSize {
    /// Map an upward letter distance to a size; 0 is the octave
    pub fn from_whole_steps(whole_steps: u8) -> Result<Self> {
        match whole_steps {
            1 => Ok(GenericIntervalSize::Second),
            2 => Ok(GenericIntervalSize::Third),
            3 => Ok(GenericIntervalSize::Fourth),
            4 => Ok(GenericIntervalSize::Fifth),
            5 => Ok(GenericIntervalSize::Sixth),
            6 => Ok(GenericIntervalSize::Seventh),
            0 | 7 => Ok(GenericIntervalSize::Octave),
            other => Err(IntervalError::InternalInconsistency(format!(
                "whole step difference {} has no generic interval size",
                other
            ))),
        }
    }

    /// Half steps in the major or perfect form of this size
    pub fn reference_half_steps(&self) -> i8 {
        match self {
            GenericIntervalSize::Second => 2,
            GenericIntervalSize::Third => 4,
            GenericIntervalSize::Fourth => 5,
            GenericIntervalSize::Fifth => 7,
            GenericIntervalSize::Sixth => 9,
            GenericIntervalSize::Seventh => 11,
            GenericIntervalSize::Octave => 0,
        }
    }

    /// Flexible sizes can be major/minor; the others are perfect
    pub fn is_flexible(&self) -> bool {
        matches!(
            self,
            GenericIntervalSize::Second
                | GenericIntervalSize::Third
                | GenericIntervalSize::Sixth
                | GenericIntervalSize::Seventh
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GenericIntervalSize::Second => "Second",
            GenericIntervalSize::Third => "Third",
            GenericIntervalSize::Fourth => "Fourth",
            GenericIntervalSize::Fifth => "Fifth",
            GenericIntervalSize::Sixth => "Sixth",
            GenericIntervalSize::Seventh => "Seventh",
            GenericIntervalSize::Octave => "Octave",
        }
    }
}

impl fmt::Display for GenericIntervalSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A classified interval: generic size plus signed quality offset
///
/// Offset 0 is Major for flexible sizes and Perfect for the others. Names
/// only come from `new`, so the quality label always exists.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct IntervalName {
    size: GenericIntervalSize,
    quality_offset: i8,
    quality: &'static str,
}

/// Wire form of `IntervalName`; deserializing goes back through `new`
#[derive(Serialize, Deserialize)]
struct RawIntervalName {
    size: GenericIntervalSize,
    quality_offset: i8,
}

impl IntervalName {
    /// Build a name, rejecting offsets outside the quality table for the size
    pub fn new(size: GenericIntervalSize, quality_offset: i8) -> Result<Self> {
        let (table, lowest): (&[&'static str], i8) = if size.is_flexible() {
            (&FLEXIBLE_QUALITIES[..], FLEXIBLE_LOWEST)
        } else {
            (&INFLEXIBLE_QUALITIES[..], INFLEXIBLE_LOWEST)
        };

        let index = quality_offset as i16 - lowest as i16;
        let quality = usize::try_from(index)
            .ok()
            .and_then(|i| table.get(i).copied())
            .ok_or_else(|| {
                IntervalError::InternalInconsistency(format!(
                    "quality offset {} out of range for {}",
                    quality_offset, size
                ))
            })?;

        Ok(Self { size, quality_offset, quality })
    }

    pub fn size(&self) -> GenericIntervalSize {
        self.size
    }

    pub fn quality_offset(&self) -> i8 {
        self.quality_offset
    }

    /// Quality label with its degree prefix, e.g. "Double-Diminished"
    pub fn quality(&self) -> &'static str {
        self.quality
    }
}

impl Serialize for IntervalName {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        RawIntervalName {
            size: self.size,
            quality_offset: self.quality_offset,
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for IntervalName {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = RawIntervalName::deserialize(deserializer)?;
        IntervalName::new(raw.size, raw.quality_offset).map_err(de::Error::custom)
    }
}

impl fmt::Display for IntervalName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.quality, self.size)
    }
}

/// Wrap an offset by octaves into [-6, 6]
fn wrap_offset(offset: i8) -> i8 {
    if offset > 6 {
        offset - 12
    } else if offset < -6 {
        offset + 12
    } else {
        offset
    }
}

/// Upward half-step distance from bottom to top, in [0, 11]
pub fn half_step_difference(bottom: &Note, top: &Note) -> u8 {
    (top.half_steps() as i16 - bottom.half_steps() as i16).rem_euclid(12) as u8
}

/// Classify the interval from `bottom` up to `top`
pub fn classify_notes(bottom: &Note, top: &Note) -> Result<IntervalName> {
    let whole_steps = (top.whole_steps() as i16 - bottom.whole_steps() as i16).rem_euclid(7) as u8;
    let size = GenericIntervalSize::from_whole_steps(whole_steps)?;
    let half_steps = half_step_difference(bottom, top) as i8;
    let offset = wrap_offset(half_steps - size.reference_half_steps());

    IntervalName::new(size, offset)
}

/// Classify two note tokens, e.g. ("C", "Eb") -> "Minor Third"
///
/// Both tokens must already be valid notes; anything else is an internal error.
pub fn classify(bottom: &str, top: &str) -> Result<IntervalName> {
    let name = classify_notes(&parse_validated_note(bottom)?, &parse_validated_note(top)?)?;
    log::debug!("{} -> {}: {}", bottom, top, name);
    Ok(name)
}
