// Pitches: a key placed at a specific octave.
//
// Absolute height uses MIDI numbering with C4 = 60. The height is
// computed from the letter's natural class plus the raw alteration,
// NOT from the wrapped pitch class: Cb4 must land a semitone below
// C4 (MIDI 59), not eleven above it.
//
// Stepping keeps spelling honest: `step` advances the letter by the
// interval's letter count and then picks whatever alteration lands on
// the exact semitone target, so a perfect fifth above C is G and a
// perfect fifth above F# is C#. `half_step_up` spells sharp-wise, the
// ascending-chromatic convention, which closes the 12-step cycle from
// any starting point.

use crate::error::TheoryError;
use crate::interval::Interval;
use crate::key::Key;
use crate::letter::Letter;
use crate::signature::KeySignature;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// A key at an octave (scientific pitch notation; C4 is middle C).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pitch {
    key: Key,
    octave: i8,
}

/// Sharp-wise spellings for each pitch class, used by `half_step_up`.
const SHARP_SPELLINGS: [(Letter, i8); 12] = [
    (Letter::C, 0),
    (Letter::C, 1),
    (Letter::D, 0),
    (Letter::D, 1),
    (Letter::E, 0),
    (Letter::F, 0),
    (Letter::F, 1),
    (Letter::G, 0),
    (Letter::G, 1),
    (Letter::A, 0),
    (Letter::A, 1),
    (Letter::B, 0),
];

impl Pitch {
    pub const fn new(key: Key, octave: i8) -> Self {
        Pitch { key, octave }
    }

    pub fn key(self) -> Key {
        self.key
    }

    pub fn octave(self) -> i8 {
        self.octave
    }

    /// Absolute height in MIDI numbering (C4 = 60). Unclamped, so
    /// extreme spellings below C-1 go negative rather than wrapping.
    pub fn midi_number(self) -> i16 {
        (self.octave as i16 + 1) * 12
            + self.key.letter().natural_pitch_class() as i16
            + self.key.alteration() as i16
    }

    /// Height clamped into the 0..=127 MIDI key range for emission.
    pub fn midi_key(self) -> u8 {
        self.midi_number().clamp(0, 127) as u8
    }

    /// The pitch one semitone up, spelled sharp-wise (C4 -> C#4 -> D4).
    pub fn half_step_up(self) -> Pitch {
        let target = self.midi_number() + 1;
        let (letter, alteration) = SHARP_SPELLINGS[target.rem_euclid(12) as usize];
        Pitch {
            key: Key::with_alteration(letter, alteration),
            octave: (target.div_euclid(12) - 1) as i8,
        }
    }

    /// The pitch an interval above this one, spelled per the interval:
    /// the letter advances `interval.letter_steps()` (wrapping past B
    /// bumps the octave) and the alteration absorbs the difference so
    /// the height advances exactly `interval.semitones()`.
    pub fn step(self, interval: Interval) -> Pitch {
        let raw_index = self.key.letter().index() + interval.letter_steps();
        let letter = Letter::ALL[raw_index % 7];
        let octave = self.octave + (raw_index / 7) as i8;
        let target = self.midi_number() + interval.semitones() as i16;
        let natural = (octave as i16 + 1) * 12 + letter.natural_pitch_class() as i16;
        Pitch {
            key: Key::with_alteration(letter, (target - natural) as i8),
            octave,
        }
    }

    /// The lowest pitch spelling `target` at or above this pitch:
    /// same octave if the target key sits at or above us there,
    /// otherwise the next one up.
    pub fn higher_pitch(self, target: Key) -> Pitch {
        let base = Pitch::new(target, self.octave);
        let deficit = self.midi_number() - base.midi_number();
        // ceil(deficit / 12) octaves up; negative deficits can pull down.
        let octaves = (deficit + 11).div_euclid(12);
        Pitch {
            key: target,
            octave: self.octave + octaves as i8,
        }
    }

    /// Respell this pitch's key per the signature, keeping the octave.
    pub fn apply(self, signature: &KeySignature) -> Pitch {
        Pitch {
            key: self.key.apply(signature),
            octave: self.octave,
        }
    }
}

// Ordering is by absolute height; enharmonic spellings of the same
// height tie-break by letter then alteration so Ord stays consistent
// with Eq (C#4 and Db4 are unequal, so they may not compare Equal).
impl Ord for Pitch {
    fn cmp(&self, other: &Self) -> Ordering {
        self.midi_number()
            .cmp(&other.midi_number())
            .then(self.key.letter().index().cmp(&other.key.letter().index()))
            .then(self.key.alteration().cmp(&other.key.alteration()))
    }
}

impl PartialOrd for Pitch {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl FromStr for Pitch {
    type Err = TheoryError;

    /// Parses literals like `"C4"`, `"F#3"`, `"Bb2"`, `"Eb-1"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let octave_start = s
            .char_indices()
            .find(|&(i, c)| c.is_ascii_digit() || (c == '-' && i > 0))
            .map(|(i, _)| i)
            .ok_or_else(|| TheoryError::parse("pitch", s))?;
        let key: Key = s[..octave_start]
            .parse()
            .map_err(|_| TheoryError::parse("pitch", s))?;
        let octave: i8 = s[octave_start..]
            .parse()
            .map_err(|_| TheoryError::parse("pitch", s))?;
        Ok(Pitch { key, octave })
    }
}

impl fmt::Display for Pitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.key, self.octave)
    }
}
