// Key signatures: a tonic key plus a mode.
//
// The two lookups are exact inverses over the seven letters. Degree
// identity is decided by letter name alone: the octave and any
// accidental on the queried key are ignored, so `degree_of` is total
// and `degree_of(key_of(d)) == d` holds for every degree in every mode.

use crate::degree::Degree;
use crate::key::Key;
use crate::letter::Letter;
use crate::mode::Mode;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A tonic and a mode, mapping scale degrees to spelled keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeySignature {
    tonic: Key,
    mode: Mode,
}

impl KeySignature {
    pub const fn new(tonic: Key, mode: Mode) -> Self {
        KeySignature { tonic, mode }
    }

    pub fn tonic(self) -> Key {
        self.tonic
    }

    pub fn mode(self) -> Mode {
        self.mode
    }

    /// Which degree the key's letter occupies in this signature's
    /// letter cycle. Accidentals are ignored: E, Eb, and E# all sit on
    /// the mediant of anything tonicized on C.
    pub fn degree_of(&self, key: Key) -> Degree {
        let position = self.tonic.letter().distance_to(key.letter());
        Degree::ALL[position]
    }

    /// The fully spelled key at a degree: the cycle letter for that
    /// position, with the alteration the mode's semitone pattern
    /// implies (mediant of C natural minor is Eb, not D#).
    pub fn key_of(&self, degree: Degree) -> Key {
        let index = degree.number() as usize - 1;
        let letter = Letter::cycle_from(self.tonic.letter())[index];
        let target_pc =
            (self.tonic.pitch_class() as i16 + self.mode.intervals()[index] as i16) % 12;
        // Normalize the spelling to the nearest alteration of the letter.
        let mut alteration = target_pc - letter.natural_pitch_class() as i16;
        if alteration > 6 {
            alteration -= 12;
        } else if alteration < -6 {
            alteration += 12;
        }
        Key::with_alteration(letter, alteration as i8)
    }
}

impl fmt::Display for KeySignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.tonic, self.mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sig(tonic: &str, mode: Mode) -> KeySignature {
        KeySignature::new(tonic.parse().unwrap(), mode)
    }

    #[test]
    fn test_degree_roundtrip_all_modes() {
        for tonic in ["C", "G", "F#", "Eb", "B"] {
            for mode in [
                Mode::Major,
                Mode::NaturalMinor,
                Mode::HarmonicMinor,
                Mode::MelodicMinor,
            ] {
                let signature = sig(tonic, mode);
                for degree in Degree::ALL {
                    assert_eq!(
                        signature.degree_of(signature.key_of(degree)),
                        degree,
                        "roundtrip failed for {} degree {}",
                        signature,
                        degree
                    );
                }
            }
        }
    }

    #[test]
    fn test_degree_mapping_is_a_bijection() {
        let signature = sig("D", Mode::Major);
        let mut seen = [false; 7];
        for degree in Degree::ALL {
            let key = signature.key_of(degree);
            let index = key.letter().index();
            assert!(!seen[index], "letter {} mapped twice", key.letter());
            seen[index] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_c_natural_minor_mediant_is_e_flat() {
        let signature = sig("C", Mode::NaturalMinor);
        assert_eq!(signature.key_of(Degree::Mediant).to_string(), "Eb");
    }

    #[test]
    fn test_c_major_scale_is_all_naturals() {
        let signature = sig("C", Mode::Major);
        for degree in Degree::ALL {
            assert_eq!(signature.key_of(degree).alteration(), 0);
        }
    }

    #[test]
    fn test_c_harmonic_minor_spelling() {
        let signature = sig("C", Mode::HarmonicMinor);
        let spelled: Vec<String> = Degree::ALL
            .iter()
            .map(|&d| signature.key_of(d).to_string())
            .collect();
        assert_eq!(spelled, ["C", "D", "Eb", "F", "G", "Ab", "B"]);
    }

    #[test]
    fn test_degree_of_ignores_accidental_and_spelling() {
        let signature = sig("C", Mode::NaturalMinor);
        let e: Key = "E".parse().unwrap();
        let eb: Key = "Eb".parse().unwrap();
        let es: Key = "E#".parse().unwrap();
        assert_eq!(signature.degree_of(e), Degree::Mediant);
        assert_eq!(signature.degree_of(eb), Degree::Mediant);
        assert_eq!(signature.degree_of(es), Degree::Mediant);
    }

    #[test]
    fn test_sharp_tonic_spelling() {
        // F# major: F# G# A# B C# D# E#.
        let signature = sig("F#", Mode::Major);
        let spelled: Vec<String> = Degree::ALL
            .iter()
            .map(|&d| signature.key_of(d).to_string())
            .collect();
        assert_eq!(spelled, ["F#", "G#", "A#", "B", "C#", "D#", "E#"]);
    }
}
