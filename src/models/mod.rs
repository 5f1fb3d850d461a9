//! Models module for the interval engine
//!
//! Note letters, accidentals, interval names and SPN voicings.

pub mod elements;
pub mod interval;
pub mod note;
pub mod spn;

// Re-export commonly used types
pub use elements::{Accidental, Letter};
pub use interval::{classify, GenericIntervalSize, IntervalName};
pub use note::Note;
pub use spn::{audio_index, to_spn, Spn};
