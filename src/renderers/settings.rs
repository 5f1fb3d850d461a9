//! Presentation settings
//!
//! Defaults reproduce the stock web page: piano samples under `sounds/`,
//! a 100x150 VexFlow renderer widened to 250px, LilyPond 2.24.

use serde::{Deserialize, Serialize};

use super::midi::defaults::{DEFAULT_PROGRAM, DEFAULT_TEMPO_BPM, DEFAULT_TPQ, DEFAULT_VELOCITY};

/// Settings for the text, staff, audio and MIDI adapters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IdentifierSettings {
    /// Directory holding one sample per half step, named by audio index
    pub sound_directory: String,

    /// Sample file extension
    pub sound_extension: String,

    /// Playback volume for each note (0.0-1.0)
    pub volume: f32,

    /// Target LilyPond version (e.g., "2.24.0")
    pub lilypond_version: String,

    /// VexFlow renderer width in pixels
    pub staff_width: u32,

    /// VexFlow renderer height in pixels
    pub staff_height: u32,

    /// Width applied to the generated svg element
    pub svg_width: u32,

    pub tempo_bpm: f64,
    pub velocity: u8,
    pub program: u8,
    pub ticks_per_quarter: u16,
}

impl Default for IdentifierSettings {
    fn default() -> Self {
        Self {
            sound_directory: "sounds".to_string(),
            sound_extension: "mp3".to_string(),
            volume: 0.4,
            lilypond_version: "2.24.0".to_string(),
            staff_width: 100,
            staff_height: 150,
            svg_width: 250,
            tempo_bpm: DEFAULT_TEMPO_BPM,
            velocity: DEFAULT_VELOCITY,
            program: DEFAULT_PROGRAM,
            ticks_per_quarter: DEFAULT_TPQ,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_settings_fill_defaults() {
        let settings: IdentifierSettings =
            serde_json::from_str(r#"{"soundDirectory": "audio/piano", "volume": 0.8}"#).unwrap();
        assert_eq!(settings.sound_directory, "audio/piano");
        assert_eq!(settings.volume, 0.8);
        assert_eq!(settings.sound_extension, "mp3");
        assert_eq!(settings.ticks_per_quarter, 480);
    }
}
