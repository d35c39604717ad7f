// Chords: a root pitch, a quality, and a duration.
//
// Each quality is a fixed stack of intervals above the root; expansion
// goes through `Pitch::step`, so the constituent pitches come out with
// their proper spellings (C4 diminished seventh is C Eb Gb Bbb, not
// C D# F# A).

use crate::duration::Duration;
use crate::interval::Interval;
use crate::pitch::Pitch;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Chord quality, triads and the seventh variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChordQuality {
    Major,
    Minor,
    Diminished,
    Augmented,
    MajorSeventh,
    MinorSeventh,
    DominantSeventh,
    DiminishedSeventh,
    HalfDiminishedSeventh,
    MinorMajorSeventh,
    AugmentedMajorSeventh,
}

impl ChordQuality {
    /// The interval stack above the root.
    pub fn intervals(self) -> &'static [Interval] {
        match self {
            ChordQuality::Major => &[Interval::MAJOR_THIRD, Interval::PERFECT_FIFTH],
            ChordQuality::Minor => &[Interval::MINOR_THIRD, Interval::PERFECT_FIFTH],
            ChordQuality::Diminished => &[Interval::MINOR_THIRD, Interval::DIMINISHED_FIFTH],
            ChordQuality::Augmented => &[Interval::MAJOR_THIRD, Interval::AUGMENTED_FIFTH],
            ChordQuality::MajorSeventh => &[
                Interval::MAJOR_THIRD,
                Interval::PERFECT_FIFTH,
                Interval::MAJOR_SEVENTH,
            ],
            ChordQuality::MinorSeventh => &[
                Interval::MINOR_THIRD,
                Interval::PERFECT_FIFTH,
                Interval::MINOR_SEVENTH,
            ],
            ChordQuality::DominantSeventh => &[
                Interval::MAJOR_THIRD,
                Interval::PERFECT_FIFTH,
                Interval::MINOR_SEVENTH,
            ],
            ChordQuality::DiminishedSeventh => &[
                Interval::MINOR_THIRD,
                Interval::DIMINISHED_FIFTH,
                Interval::DIMINISHED_SEVENTH,
            ],
            ChordQuality::HalfDiminishedSeventh => &[
                Interval::MINOR_THIRD,
                Interval::DIMINISHED_FIFTH,
                Interval::MINOR_SEVENTH,
            ],
            ChordQuality::MinorMajorSeventh => &[
                Interval::MINOR_THIRD,
                Interval::PERFECT_FIFTH,
                Interval::MAJOR_SEVENTH,
            ],
            ChordQuality::AugmentedMajorSeventh => &[
                Interval::MAJOR_THIRD,
                Interval::AUGMENTED_FIFTH,
                Interval::MAJOR_SEVENTH,
            ],
        }
    }

    /// Compact chord-symbol suffix.
    pub fn symbol(self) -> &'static str {
        match self {
            ChordQuality::Major => "maj",
            ChordQuality::Minor => "min",
            ChordQuality::Diminished => "dim",
            ChordQuality::Augmented => "aug",
            ChordQuality::MajorSeventh => "maj7",
            ChordQuality::MinorSeventh => "min7",
            ChordQuality::DominantSeventh => "dom7",
            ChordQuality::DiminishedSeventh => "dim7",
            ChordQuality::HalfDiminishedSeventh => "m7b5",
            ChordQuality::MinorMajorSeventh => "minmaj7",
            ChordQuality::AugmentedMajorSeventh => "augmaj7",
        }
    }
}

/// A root pitch with a quality and a duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Chord {
    root: Pitch,
    quality: ChordQuality,
    duration: Duration,
}

impl Chord {
    pub const fn new(root: Pitch, quality: ChordQuality, duration: Duration) -> Self {
        Chord {
            root,
            quality,
            duration,
        }
    }

    pub fn root(self) -> Pitch {
        self.root
    }

    pub fn quality(self) -> ChordQuality {
        self.quality
    }

    pub fn duration(self) -> Duration {
        self.duration
    }

    /// The constituent pitches, root first, correctly spelled.
    pub fn pitches(self) -> Vec<Pitch> {
        let mut out = vec![self.root];
        out.extend(self.quality.intervals().iter().map(|&iv| self.root.step(iv)));
        out
    }
}

impl fmt::Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.root, self.quality.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spelled(chord: Chord) -> Vec<String> {
        chord.pitches().iter().map(|p| p.to_string()).collect()
    }

    fn c4(quality: ChordQuality) -> Chord {
        Chord::new("C4".parse().unwrap(), quality, Duration::Half)
    }

    #[test]
    fn test_triad_spellings() {
        assert_eq!(spelled(c4(ChordQuality::Major)), ["C4", "E4", "G4"]);
        assert_eq!(spelled(c4(ChordQuality::Minor)), ["C4", "Eb4", "G4"]);
        assert_eq!(spelled(c4(ChordQuality::Diminished)), ["C4", "Eb4", "Gb4"]);
        assert_eq!(spelled(c4(ChordQuality::Augmented)), ["C4", "E4", "G#4"]);
    }

    #[test]
    fn test_seventh_spellings() {
        assert_eq!(
            spelled(c4(ChordQuality::DominantSeventh)),
            ["C4", "E4", "G4", "Bb4"]
        );
        assert_eq!(
            spelled(c4(ChordQuality::DiminishedSeventh)),
            ["C4", "Eb4", "Gb4", "Bbb4"]
        );
        assert_eq!(
            spelled(c4(ChordQuality::HalfDiminishedSeventh)),
            ["C4", "Eb4", "Gb4", "Bb4"]
        );
        assert_eq!(
            spelled(c4(ChordQuality::MinorMajorSeventh)),
            ["C4", "Eb4", "G4", "B4"]
        );
        assert_eq!(
            spelled(c4(ChordQuality::AugmentedMajorSeventh)),
            ["C4", "E4", "G#4", "B4"]
        );
    }

    #[test]
    fn test_roots_away_from_c() {
        let e_minor = Chord::new("E3".parse().unwrap(), ChordQuality::Minor, Duration::Quarter);
        assert_eq!(spelled(e_minor), ["E3", "G3", "B3"]);
        let fs_major = Chord::new(
            "F#4".parse().unwrap(),
            ChordQuality::Major,
            Duration::Quarter,
        );
        assert_eq!(spelled(fs_major), ["F#4", "A#4", "C#5"]);
    }

    #[test]
    fn test_display() {
        assert_eq!(c4(ChordQuality::Major).to_string(), "C4maj");
        assert_eq!(c4(ChordQuality::DominantSeventh).to_string(), "C4dom7");
    }
}
