// MIDI file output for improvised phrases.
//
// Converts a Phrase into a Standard MIDI File for playback and
// inspection. Output is SMF Format 1: a tempo meta track followed by
// one note track playing every sonority in order on the piano program.
//
// Uses the `midly` crate for MIDI writing.

use crate::phrase::Phrase;
use madrigal_theory::Duration;
use midly::{
    Format, Header, MidiMessage, Smf, Timing, Track, TrackEvent, TrackEventKind,
    num::{u4, u7, u15, u24, u28},
};
use std::path::Path;

/// Ticks per quarter note in MIDI output.
const TICKS_PER_QUARTER: u16 = 480;

/// Note-on velocity for every emitted note.
const VELOCITY: u8 = 80;

/// A duration's length in MIDI ticks.
fn ticks(duration: Duration) -> u32 {
    (duration.value() * 4.0 * TICKS_PER_QUARTER as f64) as u32
}

/// Convert a phrase to MIDI and write it to a file.
pub fn write_midi(
    phrase: &Phrase,
    tempo_bpm: u16,
    path: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    let smf = phrase_to_smf(phrase, tempo_bpm);
    let mut buf = Vec::new();
    smf.write(&mut buf)?;
    std::fs::write(path, &buf)?;
    Ok(())
}

/// Convert a phrase to an in-memory SMF.
fn phrase_to_smf(phrase: &Phrase, tempo_bpm: u16) -> Smf<'static> {
    let mut smf = Smf::new(Header::new(
        Format::Parallel,
        Timing::Metrical(u15::new(TICKS_PER_QUARTER)),
    ));

    // Track 0: tempo track
    let mut tempo_track: Track<'static> = Vec::new();
    let tempo_microseconds = 60_000_000 / tempo_bpm as u32;
    tempo_track.push(TrackEvent {
        delta: u28::new(0),
        kind: TrackEventKind::Meta(midly::MetaMessage::Tempo(u24::new(tempo_microseconds))),
    });
    tempo_track.push(TrackEvent {
        delta: u28::new(0),
        kind: TrackEventKind::Meta(midly::MetaMessage::EndOfTrack),
    });
    smf.tracks.push(tempo_track);

    // Track 1: every sonority in order on channel 0.
    let channel = u4::new(0);
    let mut track: Track<'static> = Vec::new();
    track.push(TrackEvent {
        delta: u28::new(0),
        kind: TrackEventKind::Meta(midly::MetaMessage::TrackName(b"improvisation")),
    });
    // Program 0: acoustic grand.
    track.push(TrackEvent {
        delta: u28::new(0),
        kind: TrackEventKind::Midi {
            channel,
            message: MidiMessage::ProgramChange {
                program: u7::new(0),
            },
        },
    });

    for sonority in phrase.sonorities() {
        let pitches = sonority.pitches();
        for pitch in &pitches {
            track.push(TrackEvent {
                delta: u28::new(0),
                kind: TrackEventKind::Midi {
                    channel,
                    message: MidiMessage::NoteOn {
                        key: u7::new(pitch.midi_key()),
                        vel: u7::new(VELOCITY),
                    },
                },
            });
        }
        let span = ticks(sonority.duration());
        for (i, pitch) in pitches.iter().enumerate() {
            // The first off-event carries the sonority's whole span;
            // the rest release at the same instant.
            let delta = if i == 0 { span } else { 0 };
            track.push(TrackEvent {
                delta: u28::new(delta),
                kind: TrackEventKind::Midi {
                    channel,
                    message: MidiMessage::NoteOff {
                        key: u7::new(pitch.midi_key()),
                        vel: u7::new(0),
                    },
                },
            });
        }
    }

    track.push(TrackEvent {
        delta: u28::new(0),
        kind: TrackEventKind::Meta(midly::MetaMessage::EndOfTrack),
    });
    smf.tracks.push(track);

    smf
}
