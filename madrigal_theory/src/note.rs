// A single pitch with a duration, and its bracket literal.

use crate::duration::Duration;
use crate::error::TheoryError;
use crate::pitch::Pitch;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One pitch sounded for one duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Note {
    pitch: Pitch,
    duration: Duration,
}

impl Note {
    pub const fn new(pitch: Pitch, duration: Duration) -> Self {
        Note { pitch, duration }
    }

    pub fn pitch(self) -> Pitch {
        self.pitch
    }

    pub fn duration(self) -> Duration {
        self.duration
    }
}

impl FromStr for Note {
    type Err = TheoryError;

    /// Parses literals like `"C4[.25]"`: a pitch literal followed by a
    /// bracketed duration literal.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (pitch_part, rest) = s
            .split_once('[')
            .ok_or_else(|| TheoryError::parse("note", s))?;
        let duration_part = rest
            .strip_suffix(']')
            .ok_or_else(|| TheoryError::parse("note", s))?;
        let pitch: Pitch = pitch_part
            .parse()
            .map_err(|_| TheoryError::parse("note", s))?;
        let duration: Duration = duration_part
            .parse()
            .map_err(|_| TheoryError::parse("note", s))?;
        Ok(Note { pitch, duration })
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]", self.pitch, self.duration)
    }
}
