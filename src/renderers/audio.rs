//! Audio sample selection
//!
//! Playback uses a bank of recordings one half step apart, named by their
//! offset from middle C ("0.mp3" is C4). Both cues are played at once.

use serde::{Deserialize, Serialize};

use super::settings::IdentifierSettings;
use crate::models::Spn;

/// One sample to play
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudioCue {
    pub index: i16,
    pub src: String,
    pub volume: f32,
}

impl AudioCue {
    pub fn for_spn(spn: &Spn, settings: &IdentifierSettings) -> Self {
        let index = spn.audio_index();
        Self {
            index,
            src: sample_path(index, settings),
            volume: settings.volume.clamp(0.0, 1.0),
        }
    }
}

/// Asset path for an audio index, e.g. "sounds/7.mp3"
pub fn sample_path(index: i16, settings: &IdentifierSettings) -> String {
    let directory = settings.sound_directory.trim_end_matches('/');
    if directory.is_empty() {
        format!("{}.{}", index, settings.sound_extension)
    } else {
        format!("{}/{}.{}", directory, index, settings.sound_extension)
    }
}

/// Cues for the bottom and top notes, in that order
pub fn audio_cues(bottom: &Spn, top: &Spn, settings: &IdentifierSettings) -> [AudioCue; 2] {
    [AudioCue::for_spn(bottom, settings), AudioCue::for_spn(top, settings)]
}
