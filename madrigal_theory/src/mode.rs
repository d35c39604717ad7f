// Scale patterns: major and the three minor variants.
//
// Each mode is defined by its semitone offsets from the tonic for
// degrees 1-7. KeySignature combines a pattern with a tonic letter
// cycle to spell the diatonic keys; the melodic minor pattern is the
// ascending form (the descending form coincides with natural minor).

use serde::{Deserialize, Serialize};
use std::fmt;

/// A scale pattern applied to a tonic by `KeySignature`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// W-W-H-W-W-W-H, the Ionian pattern.
    Major,
    /// The Aeolian pattern (b3, b6, b7).
    NaturalMinor,
    /// Natural minor with a raised 7th.
    HarmonicMinor,
    /// Natural minor with raised 6th and 7th, ascending form.
    MelodicMinor,
}

impl Mode {
    /// Semitone offsets from the tonic for degrees 1-7.
    pub fn intervals(self) -> [u8; 7] {
        match self {
            Mode::Major => [0, 2, 4, 5, 7, 9, 11],
            Mode::NaturalMinor => [0, 2, 3, 5, 7, 8, 10],
            Mode::HarmonicMinor => [0, 2, 3, 5, 7, 8, 11],
            Mode::MelodicMinor => [0, 2, 3, 5, 7, 9, 11],
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Mode::Major => "major",
            Mode::NaturalMinor => "natural minor",
            Mode::HarmonicMinor => "harmonic minor",
            Mode::MelodicMinor => "melodic minor",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patterns_start_on_the_tonic() {
        for mode in [
            Mode::Major,
            Mode::NaturalMinor,
            Mode::HarmonicMinor,
            Mode::MelodicMinor,
        ] {
            assert_eq!(mode.intervals()[0], 0);
            // Offsets ascend strictly within the octave.
            let iv = mode.intervals();
            for i in 1..7 {
                assert!(iv[i] > iv[i - 1]);
                assert!(iv[i] < 12);
            }
        }
    }

    #[test]
    fn test_minor_variants_differ_only_in_upper_degrees() {
        let natural = Mode::NaturalMinor.intervals();
        let harmonic = Mode::HarmonicMinor.intervals();
        let melodic = Mode::MelodicMinor.intervals();
        assert_eq!(natural[..5], harmonic[..5]);
        assert_eq!(natural[..5], melodic[..5]);
        assert_eq!(harmonic[6], 11);
        assert_eq!(melodic[5], 9);
    }
}
