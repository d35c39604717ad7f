// Time signatures: beats per measure and the duration of one beat.

use crate::duration::Duration;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Beats per measure plus the beat value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeSignature {
    beats: u8,
    beat_value: Duration,
}

impl TimeSignature {
    /// 4/4.
    pub const COMMON_TIME: TimeSignature = TimeSignature {
        beats: 4,
        beat_value: Duration::Quarter,
    };

    pub const fn new(beats: u8, beat_value: Duration) -> Self {
        TimeSignature { beats, beat_value }
    }

    pub fn beats(self) -> u8 {
        self.beats
    }

    pub fn beat_value(self) -> Duration {
        self.beat_value
    }

    /// One full measure as a fraction of a whole note (1.0 in 4/4).
    pub fn measure_value(self) -> f64 {
        self.beats as f64 * self.beat_value.value()
    }
}

impl fmt::Display for TimeSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.beats, self.beat_value.denominator())
    }
}
