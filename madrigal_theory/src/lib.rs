// Shared music-theory value types.
//
// Provides the theory kernel consumed by `madrigal_improv` (rhythm and
// phrase improvisation) and by anything else that needs to talk about
// pitches precisely. Everything here is an immutable Copy value type:
// equality, ordering, and enharmonic equivalence are pure functions of
// the stored state.
//
// Architecture:
// - `letter.rs`: The seven natural note names and their cyclic ordering
// - `key.rs`: Letter + accidental, pitch classes, enharmonic equivalence
// - `pitch.rs`: Key + octave, interval stepping, chromatic stepping
// - `interval.rs`: Quality/size pairs with validated construction
// - `degree.rs`: Scale degree names, 1..=7
// - `mode.rs`: Scale patterns (major and the three minors)
// - `signature.rs`: KeySignature, degree <-> key lookups over a tonic
// - `duration.rs`: Note lengths as fractions of a whole note
// - `time_signature.rs`: Beats per measure + beat value
// - `chord.rs`: Root + quality + duration, expanded to pitch stacks
// - `note.rs`: Pitch + duration, the `"C4[.25]"` literal
// - `measure.rs`: A bar of sonorities with an overflow-checked builder
// - `error.rs`: Typed construction and parse failures
//
// Spelling matters throughout: `Pitch::step` names a perfect fifth above
// C as G (never Abb), and `KeySignature::key_of` spells the mediant of
// C natural minor as Eb (never D#). Absolute heights use MIDI numbering
// with C4 = 60.

pub mod chord;
pub mod degree;
pub mod duration;
pub mod error;
pub mod interval;
pub mod key;
pub mod letter;
pub mod measure;
pub mod mode;
pub mod note;
pub mod pitch;
pub mod signature;
pub mod time_signature;

// Re-export key types at crate root for convenience.
pub use chord::{Chord, ChordQuality};
pub use degree::Degree;
pub use duration::Duration;
pub use error::TheoryError;
pub use interval::{Interval, IntervalQuality};
pub use key::Key;
pub use letter::Letter;
pub use measure::{Measure, MeasureBuilder, Sonority};
pub use mode::Mode;
pub use note::Note;
pub use pitch::Pitch;
pub use signature::KeySignature;
pub use time_signature::TimeSignature;
