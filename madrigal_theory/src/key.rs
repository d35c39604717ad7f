// Keys: a letter plus an accidental, independent of octave.
//
// The alteration is a signed semitone offset from the letter's natural
// pitch class. Flats are negative, sharps positive, and it may
// exceed one in either direction (Bbb, Fx-style spellings come out of
// interval arithmetic). Two keys are enharmonic when their pitch
// classes mod 12 agree, regardless of spelling.

use crate::error::TheoryError;
use crate::letter::Letter;
use crate::signature::KeySignature;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A letter with an accidental offset (e.g. C#, Eb, Bbb).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Key {
    letter: Letter,
    alteration: i8,
}

impl Key {
    /// The natural key on a letter.
    pub const fn new(letter: Letter) -> Self {
        Key {
            letter,
            alteration: 0,
        }
    }

    /// A key with an explicit accidental offset (flats negative).
    pub const fn with_alteration(letter: Letter, alteration: i8) -> Self {
        Key { letter, alteration }
    }

    pub fn letter(self) -> Letter {
        self.letter
    }

    pub fn alteration(self) -> i8 {
        self.alteration
    }

    /// This key lowered a semitone, keeping the letter (C -> Cb).
    pub fn flat(self) -> Key {
        Key {
            letter: self.letter,
            alteration: self.alteration - 1,
        }
    }

    /// This key raised a semitone, keeping the letter (C -> C#).
    pub fn sharp(self) -> Key {
        Key {
            letter: self.letter,
            alteration: self.alteration + 1,
        }
    }

    /// The natural on this key's letter.
    pub fn natural(self) -> Key {
        Key {
            letter: self.letter,
            alteration: 0,
        }
    }

    /// Pitch class 0..=11, C = 0.
    pub fn pitch_class(self) -> u8 {
        (self.letter.natural_pitch_class() as i16 + self.alteration as i16).rem_euclid(12) as u8
    }

    /// True iff `a` and `b` denote the same pitch class, regardless of
    /// spelling (C# and Db are enharmonic; C# and C are not).
    pub fn is_enharmonic(a: Key, b: Key) -> bool {
        a.pitch_class() == b.pitch_class()
    }

    /// Respell this key's letter with the accidental the signature
    /// implies for it (E in C natural minor becomes Eb).
    pub fn apply(self, signature: &KeySignature) -> Key {
        signature.key_of(signature.degree_of(self))
    }
}

impl FromStr for Key {
    type Err = TheoryError;

    /// Parses literals like `"C"`, `"F#"`, `"Bb"`, `"Abb"`. The
    /// accidental run must be uniform: `"Cbb"` is a double flat, but
    /// `"Cb#"` is malformed rather than a net natural.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let letter = chars
            .next()
            .and_then(Letter::from_char)
            .ok_or_else(|| TheoryError::parse("key", s))?;
        let accidentals = chars.as_str();
        let alteration = if accidentals.is_empty() {
            0
        } else if accidentals.chars().all(|c| c == '#') {
            accidentals.len() as i8
        } else if accidentals.chars().all(|c| c == 'b') {
            -(accidentals.len() as i8)
        } else {
            return Err(TheoryError::parse("key", s));
        };
        Ok(Key { letter, alteration })
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter)?;
        let accidental = if self.alteration < 0 { 'b' } else { '#' };
        for _ in 0..self.alteration.unsigned_abs() {
            write!(f, "{}", accidental)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::letter::Letter;

    #[test]
    fn test_parse_and_display_roundtrip() {
        for literal in ["C", "F#", "Bb", "Abb", "G##"] {
            let key: Key = literal.parse().unwrap();
            assert_eq!(key.to_string(), literal);
        }
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for bad in ["H", "", "C%", "#C", "Cbb#"] {
            let result: Result<Key, _> = bad.parse();
            match result {
                Err(TheoryError::Parse { kind, token }) => {
                    assert_eq!(kind, "key");
                    assert_eq!(token, bad);
                }
                other => panic!("expected parse error for '{}', got {:?}", bad, other),
            }
        }
    }

    #[test]
    fn test_pitch_classes() {
        let cs: Key = "C#".parse().unwrap();
        let db: Key = "Db".parse().unwrap();
        assert_eq!(cs.pitch_class(), 1);
        assert_eq!(db.pitch_class(), 1);
        // Cb wraps below C.
        assert_eq!(Key::new(Letter::C).flat().pitch_class(), 11);
    }

    #[test]
    fn test_enharmonic_symmetry_and_reflexivity() {
        let cs: Key = "C#".parse().unwrap();
        let db: Key = "Db".parse().unwrap();
        assert!(Key::is_enharmonic(cs, db));
        assert!(Key::is_enharmonic(db, cs));
        for literal in ["C", "F#", "Bb", "Abb"] {
            let key: Key = literal.parse().unwrap();
            assert!(Key::is_enharmonic(key, key));
        }
        assert!(!Key::is_enharmonic(cs, Key::new(Letter::C)));
    }

    #[test]
    fn test_flat_sharp_natural() {
        let c = Key::new(Letter::C);
        assert_eq!(c.flat().to_string(), "Cb");
        assert_eq!(c.sharp().to_string(), "C#");
        assert_eq!(c.flat().flat().to_string(), "Cbb");
        assert_eq!(c.flat().natural(), c);
    }
}
