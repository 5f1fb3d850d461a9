//! Renderers module for the interval identifier
//!
//! Presentation adapters consuming the engine's output: a sentence for the
//! text panel, a VexFlow staff description, LilyPond source, audio sample
//! cues and a MIDI file.

pub mod audio;
pub mod lilypond;
pub mod midi;
pub mod settings;
pub mod staff;
pub mod text;

// Re-export commonly used types
pub use audio::{audio_cues, AudioCue};
pub use lilypond::interval_to_lilypond;
pub use midi::interval_to_midi;
pub use settings::IdentifierSettings;
pub use staff::{staff_description, StaffDescription};
pub use text::{error_message, interval_sentence, invalid_notes_message};
