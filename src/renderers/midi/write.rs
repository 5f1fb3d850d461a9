use midly::{Format, Header, MetaMessage, MidiMessage, Smf, Timing, Track, TrackEvent, TrackEventKind};

use super::defaults::{microseconds_per_quarter, INTERVAL_CHANNEL, INTERVAL_QUARTERS};
use crate::errors::{IntervalError, Result};
use crate::models::Spn;
use crate::renderers::settings::IdentifierSettings;

/// Write the two notes of an interval as a single-track Standard MIDI File
///
/// Both notes start together and sound for one whole note.
pub fn write_interval_smf(
    bottom: &Spn,
    top: &Spn,
    settings: &IdentifierSettings,
    out: &mut Vec<u8>,
) -> Result<()> {
    let keys = [bottom.midi_key()?, top.midi_key()?];
    let tpq = settings.ticks_per_quarter.max(1);

    let header = Header {
        format: Format::SingleTrack,
        timing: Timing::Metrical(tpq.into()),
    };

    let smf = Smf {
        header,
        tracks: vec![build_interval_track(&keys, tpq, settings)],
    };

    smf.write(out)
        .map_err(|e| IntervalError::Render(format!("Failed to write MIDI: {}", e)))?;

    log::debug!("Wrote MIDI for {} {} ({} bytes)", bottom, top, out.len());
    Ok(())
}

fn build_interval_track<'a>(keys: &[u8], tpq: u16, settings: &IdentifierSettings) -> Track<'a> {
    let channel = INTERVAL_CHANNEL;
    let velocity = settings.velocity.min(127);
    let mut events = Vec::new();

    events.push(TrackEvent {
        delta: 0.into(),
        kind: TrackEventKind::Meta(MetaMessage::TrackName(b"Interval")),
    });
    events.push(TrackEvent {
        delta: 0.into(),
        kind: TrackEventKind::Meta(MetaMessage::Tempo(
            microseconds_per_quarter(settings.tempo_bpm).into(),
        )),
    });
    events.push(TrackEvent {
        delta: 0.into(),
        kind: TrackEventKind::Midi {
            channel: channel.into(),
            message: MidiMessage::ProgramChange {
                program: settings.program.min(127).into(),
            },
        },
    });

    // Note On for every key at tick 0
    for key in keys {
        events.push(TrackEvent {
            delta: 0.into(),
            kind: TrackEventKind::Midi {
                channel: channel.into(),
                message: MidiMessage::NoteOn {
                    key: (*key).into(),
                    vel: velocity.into(),
                },
            },
        });
    }

    // Note Off: the first carries the whole duration, the rest follow immediately
    for (i, key) in keys.iter().enumerate() {
        let delta = if i == 0 { tpq as u32 * INTERVAL_QUARTERS } else { 0 };
        events.push(TrackEvent {
            delta: delta.into(),
            kind: TrackEventKind::Midi {
                channel: channel.into(),
                message: MidiMessage::NoteOff {
                    key: (*key).into(),
                    vel: 0.into(),
                },
            },
        });
    }

    // End of track
    events.push(TrackEvent {
        delta: 0.into(),
        kind: TrackEventKind::Meta(MetaMessage::EndOfTrack),
    });

    events
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spn(s: &str) -> Spn {
        s.parse().unwrap()
    }

    #[test]
    fn test_smf_header_and_notes() {
        let mut out = Vec::new();
        write_interval_smf(&spn("C4"), &spn("G4"), &IdentifierSettings::default(), &mut out).unwrap();
        assert_eq!(&out[0..4], b"MThd");

        let smf = Smf::parse(&out).unwrap();
        assert_eq!(smf.header.format, Format::SingleTrack);
        assert_eq!(smf.tracks.len(), 1);

        let note_ons: Vec<u8> = smf.tracks[0]
            .iter()
            .filter_map(|e| match e.kind {
                TrackEventKind::Midi { message: MidiMessage::NoteOn { key, .. }, .. } => Some(key.as_int()),
                _ => None,
            })
            .collect();
        assert_eq!(note_ons, vec![60, 67]);
    }

    #[test]
    fn test_whole_note_duration() {
        let mut out = Vec::new();
        write_interval_smf(&spn("G4"), &spn("C5"), &IdentifierSettings::default(), &mut out).unwrap();
        let smf = Smf::parse(&out).unwrap();

        let total: u32 = smf.tracks[0].iter().map(|e| e.delta.as_int()).sum();
        assert_eq!(total, 480 * 4);
    }
}
