// Scale degree names, numbered 1..=7.

use crate::error::TheoryError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The 1-based position of a key within a key signature's letter cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Degree {
    Tonic = 1,
    Supertonic = 2,
    Mediant = 3,
    Subdominant = 4,
    Dominant = 5,
    Submediant = 6,
    LeadingTone = 7,
}

impl Degree {
    /// All degrees in ascending order.
    pub const ALL: [Degree; 7] = [
        Degree::Tonic,
        Degree::Supertonic,
        Degree::Mediant,
        Degree::Subdominant,
        Degree::Dominant,
        Degree::Submediant,
        Degree::LeadingTone,
    ];

    /// The 1-based degree number.
    pub fn number(self) -> u8 {
        self as u8
    }

    /// Look up a degree by number, failing outside 1..=7.
    pub fn from_number(number: u8) -> Result<Degree, TheoryError> {
        match number {
            1..=7 => Ok(Degree::ALL[number as usize - 1]),
            _ => Err(TheoryError::InvalidDegree { number }),
        }
    }
}

impl fmt::Display for Degree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Degree::Tonic => "tonic",
            Degree::Supertonic => "supertonic",
            Degree::Mediant => "mediant",
            Degree::Subdominant => "subdominant",
            Degree::Dominant => "dominant",
            Degree::Submediant => "submediant",
            Degree::LeadingTone => "leading tone",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_roundtrip() {
        for degree in Degree::ALL {
            assert_eq!(Degree::from_number(degree.number()), Ok(degree));
        }
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(
            Degree::from_number(0),
            Err(TheoryError::InvalidDegree { number: 0 })
        );
        assert_eq!(
            Degree::from_number(8),
            Err(TheoryError::InvalidDegree { number: 8 })
        );
    }
}
