// Intervals: a quality plus a diatonic size.
//
// The size counts letter names inclusively (C up to G is a fifth), so a
// size-n interval always spans n-1 letter steps. The quality then fixes
// the exact semitone width relative to the major-scale distance for
// that size. Construction is validated: perfect only exists for
// unisons, fourths, fifths, and octaves; major/minor only for seconds,
// thirds, sixths, and sevenths.

use crate::error::TheoryError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Interval quality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IntervalQuality {
    Perfect,
    Major,
    Minor,
    Augmented,
    Diminished,
}

impl fmt::Display for IntervalQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            IntervalQuality::Perfect => "perfect",
            IntervalQuality::Major => "major",
            IntervalQuality::Minor => "minor",
            IntervalQuality::Augmented => "augmented",
            IntervalQuality::Diminished => "diminished",
        })
    }
}

/// Semitone widths of the major scale, indexed by size - 1.
const MAJOR_WIDTHS: [i8; 8] = [0, 2, 4, 5, 7, 9, 11, 12];

/// True for the sizes whose base quality is perfect rather than major.
fn perfect_class(size: u8) -> bool {
    matches!(size, 1 | 4 | 5 | 8)
}

/// A directed upward distance between pitches: quality + size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Interval {
    quality: IntervalQuality,
    size: u8,
}

impl Interval {
    pub const UNISON: Interval = Interval {
        quality: IntervalQuality::Perfect,
        size: 1,
    };
    pub const MINOR_SECOND: Interval = Interval {
        quality: IntervalQuality::Minor,
        size: 2,
    };
    pub const MAJOR_SECOND: Interval = Interval {
        quality: IntervalQuality::Major,
        size: 2,
    };
    pub const MINOR_THIRD: Interval = Interval {
        quality: IntervalQuality::Minor,
        size: 3,
    };
    pub const MAJOR_THIRD: Interval = Interval {
        quality: IntervalQuality::Major,
        size: 3,
    };
    pub const PERFECT_FOURTH: Interval = Interval {
        quality: IntervalQuality::Perfect,
        size: 4,
    };
    pub const DIMINISHED_FIFTH: Interval = Interval {
        quality: IntervalQuality::Diminished,
        size: 5,
    };
    pub const PERFECT_FIFTH: Interval = Interval {
        quality: IntervalQuality::Perfect,
        size: 5,
    };
    pub const AUGMENTED_FIFTH: Interval = Interval {
        quality: IntervalQuality::Augmented,
        size: 5,
    };
    pub const MINOR_SIXTH: Interval = Interval {
        quality: IntervalQuality::Minor,
        size: 6,
    };
    pub const MAJOR_SIXTH: Interval = Interval {
        quality: IntervalQuality::Major,
        size: 6,
    };
    pub const DIMINISHED_SEVENTH: Interval = Interval {
        quality: IntervalQuality::Diminished,
        size: 7,
    };
    pub const MINOR_SEVENTH: Interval = Interval {
        quality: IntervalQuality::Minor,
        size: 7,
    };
    pub const MAJOR_SEVENTH: Interval = Interval {
        quality: IntervalQuality::Major,
        size: 7,
    };
    pub const PERFECT_OCTAVE: Interval = Interval {
        quality: IntervalQuality::Perfect,
        size: 8,
    };

    /// Build an interval, rejecting quality/size pairs that name
    /// nothing: sizes outside 1..=8, perfect thirds, minor fifths, and
    /// the diminished unison (which would descend).
    pub fn new(quality: IntervalQuality, size: u8) -> Result<Interval, TheoryError> {
        let valid = match quality {
            IntervalQuality::Perfect => perfect_class(size),
            IntervalQuality::Major | IntervalQuality::Minor => {
                (1..=8).contains(&size) && !perfect_class(size)
            }
            IntervalQuality::Augmented => (1..=8).contains(&size),
            IntervalQuality::Diminished => (2..=8).contains(&size),
        };
        if valid {
            Ok(Interval { quality, size })
        } else {
            Err(TheoryError::InvalidInterval { quality, size })
        }
    }

    pub fn quality(self) -> IntervalQuality {
        self.quality
    }

    pub fn size(self) -> u8 {
        self.size
    }

    /// Letter steps spanned: a size-n interval moves n-1 letters up.
    pub fn letter_steps(self) -> usize {
        self.size as usize - 1
    }

    /// Exact semitone width.
    pub fn semitones(self) -> i8 {
        let base = MAJOR_WIDTHS[self.size as usize - 1];
        match self.quality {
            IntervalQuality::Perfect | IntervalQuality::Major => base,
            IntervalQuality::Minor => base - 1,
            IntervalQuality::Augmented => base + 1,
            IntervalQuality::Diminished => {
                if perfect_class(self.size) {
                    base - 1
                } else {
                    base - 2
                }
            }
        }
    }
}

impl fmt::Display for Interval {
    /// Conventional shorthand: P5, M3, m3, A4, d5.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = match self.quality {
            IntervalQuality::Perfect => 'P',
            IntervalQuality::Major => 'M',
            IntervalQuality::Minor => 'm',
            IntervalQuality::Augmented => 'A',
            IntervalQuality::Diminished => 'd',
        };
        write!(f, "{}{}", prefix, self.size)
    }
}
