//! MIDI export for an interval
//!
//! Offline counterpart to the sample-based audio cues: both notes of the
//! interval written as one Standard MIDI File.

pub mod defaults;
pub mod write;

pub use defaults::{DEFAULT_PROGRAM, DEFAULT_TEMPO_BPM, DEFAULT_TPQ, DEFAULT_VELOCITY};
pub use write::write_interval_smf;

use crate::errors::Result;
use crate::models::Spn;
use crate::renderers::settings::IdentifierSettings;

/// Convert an interval's voicing to SMF bytes
///
/// # Returns
/// * MIDI file bytes ready for download
pub fn interval_to_midi(bottom: &Spn, top: &Spn, settings: &IdentifierSettings) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    write_interval_smf(bottom, top, settings, &mut out)?;
    Ok(out)
}
