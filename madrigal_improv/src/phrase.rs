// Phrase assembly: laying pitches onto generated rhythms.
//
// Rhythm comes first, one measure at a time. Melodies then walk the
// key signature's degrees with a weighted draw: structurally important
// degrees (tonic, dominant, mediant) weigh more, nearby pitches weigh
// more than leaps, and the comfortable register weighs more than the
// extremes. These are soft constraints, so an occasional leap still
// happens.
// Harmony lays I-IV-V-I triads under the fixed quarter-note bar, with
// each triad's quality read off the mode's own scale pattern (so the
// dominant of harmonic minor comes out major).

use crate::error::ImprovError;
use crate::rhythm::RhythmGenerator;
use crate::voice::{Style, Voice};
use madrigal_theory::{
    Chord, ChordQuality, Degree, Duration, Key, KeySignature, Mode, Note, Pitch, Sonority,
    TimeSignature,
};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Tolerance for duration-sum comparisons.
const EPSILON: f64 = 1e-9;

/// The degree loop under a harmony voice.
const HARMONY_DEGREES: [Degree; 4] = [
    Degree::Tonic,
    Degree::Subdominant,
    Degree::Dominant,
    Degree::Tonic,
];

/// An improvised run of sonorities with its generating context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Phrase {
    key_signature: KeySignature,
    time_signature: TimeSignature,
    sonorities: Vec<Sonority>,
}

impl Phrase {
    pub fn key_signature(&self) -> KeySignature {
        self.key_signature
    }

    pub fn time_signature(&self) -> TimeSignature {
        self.time_signature
    }

    pub fn sonorities(&self) -> &[Sonority] {
        &self.sonorities
    }

    /// Sum of all durations, as a fraction of a whole note.
    pub fn total_value(&self) -> f64 {
        self.sonorities.iter().map(|s| s.duration().value()).sum()
    }
}

/// Improvise `measures` measures for one voice.
///
/// Melodies need the measure length to be one of the enumerated note
/// values (a whole note in common time); anything else fails with
/// `UnfillableTarget` before any sampling happens.
pub fn improvise(
    key_signature: KeySignature,
    time_signature: TimeSignature,
    voice: Voice,
    measures: usize,
    rng: &mut impl Rng,
) -> Result<Phrase, ImprovError> {
    let generator = RhythmGenerator::new(key_signature, time_signature, voice);
    let mut sonorities = Vec::new();

    match voice.style() {
        Style::Melody => {
            let target = measure_target(time_signature)?;
            let scale: Vec<Key> = Degree::ALL
                .iter()
                .map(|&d| key_signature.key_of(d))
                .collect();
            let mut current = Pitch::new(key_signature.tonic(), 4);
            for _ in 0..measures {
                for duration in generator.generate(target, rng)? {
                    let pitch = pick_melody_pitch(&scale, current, rng);
                    sonorities.push(Sonority::Note(Note::new(pitch, duration)));
                    current = pitch;
                }
            }
        }
        Style::Harmony => {
            for _ in 0..measures {
                // The harmony rhythm ignores its target.
                let rhythm = generator.generate(Duration::Whole, rng)?;
                for (slot, duration) in rhythm.into_iter().enumerate() {
                    let degree = HARMONY_DEGREES[slot % HARMONY_DEGREES.len()];
                    let root = Pitch::new(key_signature.key_of(degree), 3);
                    let quality = triad_quality(key_signature.mode(), degree);
                    sonorities.push(Sonority::Chord(Chord::new(root, quality, duration)));
                }
            }
        }
    }

    Ok(Phrase {
        key_signature,
        time_signature,
        sonorities,
    })
}

/// The rhythm target for one measure, if it is an enumerated value.
fn measure_target(time_signature: TimeSignature) -> Result<Duration, ImprovError> {
    let value = time_signature.measure_value();
    Duration::ALL
        .into_iter()
        .find(|d| (d.value() - value).abs() < EPSILON)
        .ok_or(ImprovError::UnfillableTarget { value })
}

/// Weight for a scale position: tonic, then dominant, then mediant.
fn degree_fitness(index: usize) -> f64 {
    match index {
        0 => 1.5,
        4 => 1.3,
        2 => 1.1,
        _ => 1.0,
    }
}

/// Pick the next melody pitch by a weighted cumulative draw over the
/// scale spellings within an octave of the current pitch.
fn pick_melody_pitch(scale: &[Key], current: Pitch, rng: &mut impl Rng) -> Pitch {
    let mut candidates: Vec<(Pitch, f64)> = Vec::with_capacity(scale.len() * 2);
    for (index, &key) in scale.iter().enumerate() {
        let above = current.higher_pitch(key);
        let below = Pitch::new(above.key(), above.octave() - 1);
        for candidate in [above, below] {
            let distance = (candidate.midi_number() - current.midi_number()).unsigned_abs();
            if distance > 12 {
                continue;
            }
            let reach = match distance {
                0..=2 => 1.0,
                3..=4 => 0.7,
                5..=7 => 0.4,
                _ => 0.15,
            };
            let register = if (3..=5).contains(&candidate.octave()) {
                1.0
            } else {
                0.2
            };
            candidates.push((candidate, degree_fitness(index) * reach * register));
        }
    }

    let total: f64 = candidates.iter().map(|(_, w)| w).sum();
    let r = rng.random::<f64>() * total;
    let mut cumulative = 0.0;
    let mut chosen = candidates[0].0;
    for &(candidate, weight) in &candidates {
        cumulative += weight;
        if cumulative > r {
            chosen = candidate;
            break;
        }
    }
    chosen
}

/// The triad quality a mode implies on a degree, read from the stacked
/// thirds of its own scale pattern.
fn triad_quality(mode: Mode, degree: Degree) -> ChordQuality {
    let intervals = mode.intervals();
    let index = degree.number() as usize - 1;
    let offset = |steps: usize| -> i16 {
        (intervals[(index + steps) % 7] as i16 - intervals[index] as i16).rem_euclid(12)
    };
    match (offset(2), offset(4)) {
        (4, 7) => ChordQuality::Major,
        (3, 7) => ChordQuality::Minor,
        (3, 6) => ChordQuality::Diminished,
        (4, 8) => ChordQuality::Augmented,
        _ => ChordQuality::Major, // unreachable with the four supported patterns
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use madrigal_theory::Letter;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn c_major() -> KeySignature {
        KeySignature::new(Key::new(Letter::C), Mode::Major)
    }

    fn c_minor() -> KeySignature {
        KeySignature::new(Key::new(Letter::C), Mode::NaturalMinor)
    }

    #[test]
    fn test_melody_phrase_fills_its_measures() {
        let mut rng = StdRng::seed_from_u64(42);
        let phrase = improvise(
            c_major(),
            TimeSignature::COMMON_TIME,
            Voice::new(Style::Melody),
            4,
            &mut rng,
        )
        .unwrap();
        assert!((phrase.total_value() - 4.0).abs() < 1e-9);
        assert!(
            phrase
                .sonorities()
                .iter()
                .all(|s| matches!(s, Sonority::Note(_)))
        );
    }

    #[test]
    fn test_melody_stays_in_the_scale() {
        let signature = c_minor();
        let scale: Vec<Key> = Degree::ALL.iter().map(|&d| signature.key_of(d)).collect();
        let mut rng = StdRng::seed_from_u64(7);
        let phrase = improvise(
            signature,
            TimeSignature::COMMON_TIME,
            Voice::new(Style::Melody),
            8,
            &mut rng,
        )
        .unwrap();
        for sonority in phrase.sonorities() {
            if let Sonority::Note(note) = sonority {
                assert!(
                    scale.contains(&note.pitch().key()),
                    "{} is outside C natural minor",
                    note.pitch()
                );
            }
        }
    }

    #[test]
    fn test_melody_leaps_stay_within_an_octave() {
        let mut rng = StdRng::seed_from_u64(13);
        let phrase = improvise(
            c_major(),
            TimeSignature::COMMON_TIME,
            Voice::new(Style::Melody),
            8,
            &mut rng,
        )
        .unwrap();
        let heights: Vec<i16> = phrase
            .sonorities()
            .iter()
            .flat_map(|s| s.pitches())
            .map(|p| p.midi_number())
            .collect();
        for pair in heights.windows(2) {
            assert!((pair[1] - pair[0]).abs() <= 12);
        }
    }

    #[test]
    fn test_harmony_phrase_is_degree_loop_triads() {
        let mut rng = StdRng::seed_from_u64(1);
        let phrase = improvise(
            c_minor(),
            TimeSignature::COMMON_TIME,
            Voice::new(Style::Harmony),
            2,
            &mut rng,
        )
        .unwrap();
        let chords: Vec<&Chord> = phrase
            .sonorities()
            .iter()
            .map(|s| match s {
                Sonority::Chord(chord) => chord,
                Sonority::Note(_) => panic!("harmony phrase held a bare note"),
            })
            .collect();
        assert_eq!(chords.len(), 8);
        let roots: Vec<String> = chords.iter().map(|c| c.root().to_string()).collect();
        assert_eq!(roots[..4], ["C3", "F3", "G3", "C3"]);
        assert!(chords.iter().all(|c| c.duration() == Duration::Quarter));
        // Natural minor: i, iv, and v are all minor triads.
        assert!(chords.iter().all(|c| c.quality() == ChordQuality::Minor));
    }

    #[test]
    fn test_harmonic_minor_dominant_is_major() {
        let signature = KeySignature::new(Key::new(Letter::C), Mode::HarmonicMinor);
        assert_eq!(
            triad_quality(signature.mode(), Degree::Dominant),
            ChordQuality::Major
        );
        assert_eq!(
            triad_quality(signature.mode(), Degree::Tonic),
            ChordQuality::Minor
        );
        assert_eq!(
            triad_quality(Mode::HarmonicMinor, Degree::Mediant),
            ChordQuality::Augmented
        );
    }

    #[test]
    fn test_melody_rejects_untileable_meter() {
        let six_eight = TimeSignature::new(6, Duration::Eighth);
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            improvise(
                c_major(),
                six_eight,
                Voice::new(Style::Melody),
                1,
                &mut rng
            ),
            Err(ImprovError::UnfillableTarget { value: 0.75 })
        );
    }

    #[test]
    fn test_same_seed_same_phrase() {
        let mut a = StdRng::seed_from_u64(2024);
        let mut b = StdRng::seed_from_u64(2024);
        let voice = Voice::new(Style::Melody);
        let first = improvise(c_major(), TimeSignature::COMMON_TIME, voice, 4, &mut a).unwrap();
        let second = improvise(c_major(), TimeSignature::COMMON_TIME, voice, 4, &mut b).unwrap();
        assert_eq!(first, second);
    }
}
