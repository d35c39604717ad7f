// Measures: an ordered run of sonorities under a time signature.
//
// A `Sonority` is the uniform playable unit (a single note or a chord
// stack), so consumers like the MIDI writer iterate one shape
// instead of switching on note-vs-chord at every seam. The builder is
// the only way to make a `Measure` and rejects overfilling the bar.

use crate::chord::Chord;
use crate::duration::Duration;
use crate::error::TheoryError;
use crate::note::Note;
use crate::pitch::Pitch;
use crate::time_signature::TimeSignature;
use serde::{Deserialize, Serialize};

/// Tolerance for duration-sum comparisons.
const EPSILON: f64 = 1e-9;

/// One vertical slice of sound: a note or a chord.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sonority {
    Note(Note),
    Chord(Chord),
}

impl Sonority {
    /// The sounding pitches, lowest-constructed first.
    pub fn pitches(&self) -> Vec<Pitch> {
        match self {
            Sonority::Note(note) => vec![note.pitch()],
            Sonority::Chord(chord) => chord.pitches(),
        }
    }

    pub fn duration(&self) -> Duration {
        match self {
            Sonority::Note(note) => note.duration(),
            Sonority::Chord(chord) => chord.duration(),
        }
    }
}

impl From<Note> for Sonority {
    fn from(note: Note) -> Self {
        Sonority::Note(note)
    }
}

impl From<Chord> for Sonority {
    fn from(chord: Chord) -> Self {
        Sonority::Chord(chord)
    }
}

/// A filled bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measure {
    time_signature: TimeSignature,
    sonorities: Vec<Sonority>,
}

impl Measure {
    pub fn builder(time_signature: TimeSignature) -> MeasureBuilder {
        MeasureBuilder {
            time_signature,
            sonorities: Vec::new(),
        }
    }

    pub fn time_signature(&self) -> TimeSignature {
        self.time_signature
    }

    pub fn sonorities(&self) -> &[Sonority] {
        &self.sonorities
    }

    /// Sum of the contained durations, as a fraction of a whole note.
    pub fn total_value(&self) -> f64 {
        self.sonorities.iter().map(|s| s.duration().value()).sum()
    }
}

/// Accumulates sonorities, then checks them against the bar length.
#[derive(Debug, Clone)]
pub struct MeasureBuilder {
    time_signature: TimeSignature,
    sonorities: Vec<Sonority>,
}

impl MeasureBuilder {
    /// Append a note or chord.
    pub fn add(mut self, sonority: impl Into<Sonority>) -> Self {
        self.sonorities.push(sonority.into());
        self
    }

    /// Finish the measure, failing if the contents overflow the bar.
    /// Underfilled measures are allowed (trailing silence).
    pub fn build(self) -> Result<Measure, TheoryError> {
        let capacity = self.time_signature.measure_value();
        let attempted: f64 = self.sonorities.iter().map(|s| s.duration().value()).sum();
        if attempted > capacity + EPSILON {
            return Err(TheoryError::MeasureOverflow {
                capacity,
                attempted,
            });
        }
        Ok(Measure {
            time_signature: self.time_signature,
            sonorities: self.sonorities,
        })
    }
}
