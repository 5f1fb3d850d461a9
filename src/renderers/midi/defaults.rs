//! Default values for MIDI export
//!
//! Provides sensible defaults for tempo, velocity, channel and length.

/// Default tempo in beats per minute
pub const DEFAULT_TEMPO_BPM: f64 = 120.0;

/// Default MIDI velocity (1-127, where 64 is "normal")
pub const DEFAULT_VELOCITY: u8 = 64;

/// Default MIDI program (0 = Acoustic Grand Piano in General MIDI)
pub const DEFAULT_PROGRAM: u8 = 0;

/// Default ticks per quarter note (MIDI resolution)
/// 480 is standard and provides good resolution
pub const DEFAULT_TPQ: u16 = 480;

/// Channel both notes are played on
pub const INTERVAL_CHANNEL: u8 = 0;

/// Quarter notes the dyad sounds for (one whole note)
pub const INTERVAL_QUARTERS: u32 = 4;

/// Microseconds per quarter note for a tempo
pub fn microseconds_per_quarter(bpm: f64) -> u32 {
    if bpm <= 0.0 {
        return (60_000_000.0 / DEFAULT_TEMPO_BPM) as u32;
    }
    (60_000_000.0 / bpm) as u32
}
