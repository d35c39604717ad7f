// Note lengths as fractions of a whole note.
//
// Duration arithmetic is plain f64 addition and comparison. All five
// values are exact binary fractions, so sums of them compare exactly;
// the generator code still uses a small epsilon at its boundaries.

use crate::error::TheoryError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An enumerated note length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Duration {
    Whole,
    Half,
    Quarter,
    Eighth,
    Sixteenth,
}

impl Duration {
    /// All durations, longest first.
    pub const ALL: [Duration; 5] = [
        Duration::Whole,
        Duration::Half,
        Duration::Quarter,
        Duration::Eighth,
        Duration::Sixteenth,
    ];

    /// Length as a fraction of a whole note.
    pub fn value(self) -> f64 {
        match self {
            Duration::Whole => 1.0,
            Duration::Half => 0.5,
            Duration::Quarter => 0.25,
            Duration::Eighth => 0.125,
            Duration::Sixteenth => 0.0625,
        }
    }

    /// The denominator for time-signature display (quarter -> 4).
    pub fn denominator(self) -> u8 {
        match self {
            Duration::Whole => 1,
            Duration::Half => 2,
            Duration::Quarter => 4,
            Duration::Eighth => 8,
            Duration::Sixteenth => 16,
        }
    }
}

impl FromStr for Duration {
    type Err = TheoryError;

    /// Parses decimal-fraction literals: `".25"`, `"0.5"`, `"1"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: f64 = s.parse().map_err(|_| TheoryError::parse("duration", s))?;
        Duration::ALL
            .into_iter()
            .find(|d| d.value() == value)
            .ok_or_else(|| TheoryError::parse("duration", s))
    }
}

impl fmt::Display for Duration {
    /// The literal form the parser accepts (a quarter prints as ".25").
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Duration::Whole => "1",
            Duration::Half => ".5",
            Duration::Quarter => ".25",
            Duration::Eighth => ".125",
            Duration::Sixteenth => ".0625",
        })
    }
}
