// Export adapters: MIDI file on disk and LilyPond source

use std::io::Write;

use interval_wasm::renderers::{interval_to_lilypond, interval_to_midi, IdentifierSettings};
use interval_wasm::{classify, Spn};

#[test]
fn test_midi_file_written_to_disk() {
    let bottom: Spn = "G4".parse().unwrap();
    let top: Spn = "C5".parse().unwrap();
    let bytes = interval_to_midi(&bottom, &top, &IdentifierSettings::default()).expect("MIDI export should succeed");

    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(&bytes).unwrap();
    file.flush().unwrap();

    let read_back = std::fs::read(file.path()).unwrap();
    assert_eq!(read_back, bytes);
    assert_eq!(&read_back[0..4], b"MThd");
    assert!(read_back.windows(4).any(|w| w == b"MTrk"));
}

#[test]
fn test_midi_respects_settings() {
    let bottom: Spn = "C4".parse().unwrap();
    let top: Spn = "E4".parse().unwrap();
    let slow = IdentifierSettings {
        tempo_bpm: 60.0,
        ..IdentifierSettings::default()
    };

    let default_bytes = interval_to_midi(&bottom, &top, &IdentifierSettings::default()).unwrap();
    let slow_bytes = interval_to_midi(&bottom, &top, &slow).unwrap();
    assert_ne!(default_bytes, slow_bytes);
}

#[test]
fn test_lilypond_export() {
    let bottom: Spn = "Bb4".parse().unwrap();
    let top: Spn = "F5".parse().unwrap();
    let name = classify("Bb", "F").unwrap();

    let ly = interval_to_lilypond(&bottom, &top, Some(&name), &IdentifierSettings::default())
        .expect("LilyPond export should succeed");

    assert!(ly.contains("\\version \"2.24.0\""));
    assert!(ly.contains("\\clef treble"));
    assert!(ly.contains("<bes' f''>1"));
    assert!(ly.contains("Perfect Fifth"));
}
