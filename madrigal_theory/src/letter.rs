// The seven natural note names and their cyclic ordering.
//
// Letters carry two orderings at once: the cyclic letter order
// (C D E F G A B, then C again) used for degree indexing and interval
// letter-counting, and the natural pitch class each letter occupies in
// the chromatic scale (C=0, D=2, E=4, F=5, G=7, A=9, B=11). Both are
// pure lookups with no hidden state.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A natural note name, without accidental or octave.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Letter {
    C,
    D,
    E,
    F,
    G,
    A,
    B,
}

impl Letter {
    /// The letters in C-first cyclic order.
    pub const ALL: [Letter; 7] = [
        Letter::C,
        Letter::D,
        Letter::E,
        Letter::F,
        Letter::G,
        Letter::A,
        Letter::B,
    ];

    /// Position within the C-first ordering (C=0 .. B=6).
    pub fn index(self) -> usize {
        self as usize
    }

    /// The pitch class of this letter with no accidental applied.
    pub fn natural_pitch_class(self) -> u8 {
        match self {
            Letter::C => 0,
            Letter::D => 2,
            Letter::E => 4,
            Letter::F => 5,
            Letter::G => 7,
            Letter::A => 9,
            Letter::B => 11,
        }
    }

    /// The next letter in cyclic order (after B comes C).
    pub fn next(self) -> Letter {
        Letter::ALL[(self.index() + 1) % 7]
    }

    /// The seven letters in cyclic order starting at `start`.
    ///
    /// This is the ordering scale degrees index into: degree 1 is
    /// `start` itself, degree 2 the next letter up, and so on.
    pub fn cycle_from(start: Letter) -> [Letter; 7] {
        let mut out = [start; 7];
        for (i, slot) in out.iter_mut().enumerate() {
            *slot = Letter::ALL[(start.index() + i) % 7];
        }
        out
    }

    /// Forward steps (0..=6) from `self` to `other` in cyclic order.
    pub fn distance_to(self, other: Letter) -> usize {
        (other.index() + 7 - self.index()) % 7
    }

    pub fn from_char(c: char) -> Option<Letter> {
        match c.to_ascii_uppercase() {
            'C' => Some(Letter::C),
            'D' => Some(Letter::D),
            'E' => Some(Letter::E),
            'F' => Some(Letter::F),
            'G' => Some(Letter::G),
            'A' => Some(Letter::A),
            'B' => Some(Letter::B),
            _ => None,
        }
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Letter::C => "C",
            Letter::D => "D",
            Letter::E => "E",
            Letter::F => "F",
            Letter::G => "G",
            Letter::A => "A",
            Letter::B => "B",
        })
    }
}
