// Rhythm generation: filling a span with note values.
//
// Melodies draw uniformly from {half, quarter, eighth}, redrawing any
// candidate that would overshoot the target. Because the eighth note is
// the smallest choice and the target is validated to be a multiple of
// it, an eighth always fits in whatever remains, the accumulator
// strictly increases, and the loop lands on the target exactly.
//
// Harmony is a fixed bar of four quarters, one measure of common
// time, regardless of the requested target or the generator's time
// signature. Deriving the pattern from the time signature is a
// deliberate non-feature; callers wanting other meters get melodic
// rhythms.

use crate::error::ImprovError;
use crate::voice::{Style, Voice};
use madrigal_theory::{Duration, KeySignature, TimeSignature};
use rand::Rng;

/// Tolerance for duration-sum comparisons.
const EPSILON: f64 = 1e-9;

/// The note values melodic sampling draws from.
const MELODY_CHOICES: [Duration; 3] = [Duration::Half, Duration::Quarter, Duration::Eighth];

/// Generates rhythms for one voice.
///
/// The key and time signatures are carried for callers and future
/// strategies; the current strategies read only the voice's style.
#[derive(Debug, Clone, Copy)]
pub struct RhythmGenerator {
    key_signature: KeySignature,
    time_signature: TimeSignature,
    voice: Voice,
}

impl RhythmGenerator {
    pub fn new(key_signature: KeySignature, time_signature: TimeSignature, voice: Voice) -> Self {
        RhythmGenerator {
            key_signature,
            time_signature,
            voice,
        }
    }

    pub fn key_signature(&self) -> KeySignature {
        self.key_signature
    }

    pub fn time_signature(&self) -> TimeSignature {
        self.time_signature
    }

    pub fn voice(&self) -> Voice {
        self.voice
    }

    /// Produce an ordered rhythm summing exactly to `target`.
    ///
    /// Harmony ignores the target and returns its fixed bar. Melody
    /// validates the target first: anything not tileable by eighth
    /// notes (in practice, a sixteenth) fails with `UnfillableTarget`
    /// instead of sampling forever.
    pub fn generate(
        &self,
        target: Duration,
        rng: &mut impl Rng,
    ) -> Result<Vec<Duration>, ImprovError> {
        match self.voice.style() {
            Style::Harmony => Ok(vec![Duration::Quarter; 4]),
            Style::Melody => self.generate_melodic(target.value(), rng),
        }
    }

    /// Rejection-sample a melodic rhythm filling `total` exactly.
    fn generate_melodic(
        &self,
        total: f64,
        rng: &mut impl Rng,
    ) -> Result<Vec<Duration>, ImprovError> {
        let eighths = total / Duration::Eighth.value();
        if eighths < 1.0 - EPSILON || (eighths - eighths.round()).abs() > EPSILON {
            return Err(ImprovError::UnfillableTarget { value: total });
        }

        let mut rhythm = Vec::new();
        let mut so_far = 0.0;
        while so_far + EPSILON < total {
            let candidate = loop {
                let pick = MELODY_CHOICES[rng.random_range(0..MELODY_CHOICES.len())];
                if so_far + pick.value() <= total + EPSILON {
                    break pick;
                }
            };
            rhythm.push(candidate);
            so_far += candidate.value();
        }
        Ok(rhythm)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use madrigal_theory::{Key, Letter, Mode};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn generator(style: Style) -> RhythmGenerator {
        let signature = KeySignature::new(Key::new(Letter::C), Mode::Major);
        RhythmGenerator::new(signature, TimeSignature::COMMON_TIME, Voice::new(style))
    }

    #[test]
    fn test_melody_sums_exactly_to_target() {
        let generator = generator(Style::Melody);
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            for target in [
                Duration::Whole,
                Duration::Half,
                Duration::Quarter,
                Duration::Eighth,
            ] {
                let rhythm = generator.generate(target, &mut rng).unwrap();
                let sum: f64 = rhythm.iter().map(|d| d.value()).sum();
                assert!(
                    (sum - target.value()).abs() < 1e-9,
                    "seed {} target {} summed to {}",
                    seed,
                    target.value(),
                    sum
                );
            }
        }
    }

    #[test]
    fn test_melody_draws_only_from_the_three_values() {
        let generator = generator(Style::Melody);
        let mut rng = StdRng::seed_from_u64(7);
        let rhythm = generator.generate(Duration::Whole, &mut rng).unwrap();
        assert!(rhythm.iter().all(|d| MELODY_CHOICES.contains(d)));
        // A whole note holds between two halves and eight eighths.
        assert!((2..=8).contains(&rhythm.len()), "got {}", rhythm.len());
    }

    #[test]
    fn test_melody_rejects_sixteenth_target() {
        let generator = generator(Style::Melody);
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            generator.generate(Duration::Sixteenth, &mut rng),
            Err(ImprovError::UnfillableTarget { value: 0.0625 })
        );
    }

    #[test]
    fn test_harmony_is_four_quarters_for_any_target() {
        let generator = generator(Style::Harmony);
        let mut rng = StdRng::seed_from_u64(3);
        for target in Duration::ALL {
            let rhythm = generator.generate(target, &mut rng).unwrap();
            assert_eq!(rhythm, vec![Duration::Quarter; 4]);
        }
    }

    #[test]
    fn test_same_seed_same_rhythm() {
        let generator = generator(Style::Melody);
        let mut a = StdRng::seed_from_u64(99);
        let mut b = StdRng::seed_from_u64(99);
        assert_eq!(
            generator.generate(Duration::Whole, &mut a).unwrap(),
            generator.generate(Duration::Whole, &mut b).unwrap()
        );
    }

    #[test]
    fn test_eighth_target_is_a_single_eighth() {
        let generator = generator(Style::Melody);
        let mut rng = StdRng::seed_from_u64(11);
        let rhythm = generator.generate(Duration::Eighth, &mut rng).unwrap();
        assert_eq!(rhythm, vec![Duration::Eighth]);
    }
}
