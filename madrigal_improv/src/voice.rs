// Voices and their generation styles.
//
// Style is a closed sum: every generation site matches on it, so a new
// style extends the match arms rather than an out-of-band flag table.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How a voice's material is generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    /// A single line with a free rhythm.
    Melody,
    /// Block chords in steady quarters.
    Harmony,
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Style::Melody => "melody",
            Style::Harmony => "harmony",
        })
    }
}

/// A part to improvise, tagged with its style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Voice {
    style: Style,
}

impl Voice {
    pub const fn new(style: Style) -> Self {
        Voice { style }
    }

    pub fn style(self) -> Style {
        self.style
    }
}
