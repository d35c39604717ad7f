// Madrigal improviser.
//
// Generates short phrases over the `madrigal_theory` kernel and writes
// them to Standard MIDI Files. Generation is rhythm-first: a voice's
// style picks the rhythm strategy, then pitches (or chords) are laid
// onto the rhythm from the key signature's degrees.
//
// Architecture:
// - `voice.rs`: Voice + Style (melody vs. block harmony)
// - `rhythm.rs`: RhythmGenerator, rejection-sampled melodic rhythms,
//   fixed four-quarter harmony bars, up-front target validation
// - `phrase.rs`: Phrase assembly, weighted degree selection for
//   melodies, I-IV-V-I triads for harmony
// - `midi.rs`: Phrase -> SMF output via midly
// - `error.rs`: Typed generation failures
// - `main.rs`: The `improvise` binary (theory tour + seeded improvisation)
//
// All randomness comes through a caller-supplied `rand::Rng`, so a
// fixed seed reproduces the same phrase exactly.

pub mod error;
pub mod midi;
pub mod phrase;
pub mod rhythm;
pub mod voice;

pub use error::ImprovError;
pub use phrase::{Phrase, improvise};
pub use rhythm::RhythmGenerator;
pub use voice::{Style, Voice};
