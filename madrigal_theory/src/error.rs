// Typed failures for theory value construction and literal parsing.
//
// Every variant is a local, deterministic construction failure: nothing
// here is retried and nothing is fatal. Callers decide whether to abort
// or substitute. The MIDI file boundary in `madrigal_improv` keeps its
// own `Box<dyn Error>` signature and does not use these.

use crate::interval::IntervalQuality;
use thiserror::Error;

/// Errors from constructing or parsing theory values.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TheoryError {
    /// A string literal did not match its grammar. `kind` names the
    /// grammar ("key", "pitch", "duration", "note"), `token` the input.
    #[error("unparseable {kind} literal '{token}'")]
    Parse { kind: &'static str, token: String },

    /// A scale degree number outside 1..=7.
    #[error("scale degree {number} is outside 1..=7")]
    InvalidDegree { number: u8 },

    /// A quality/size pair that names no interval (e.g. perfect third).
    #[error("no {quality} interval of size {size}")]
    InvalidInterval { quality: IntervalQuality, size: u8 },

    /// A measure builder was asked to hold more than its bar.
    #[error("measure holds {capacity} whole notes, {attempted} would overflow it")]
    MeasureOverflow { capacity: f64, attempted: f64 },
}

impl TheoryError {
    /// Shorthand used by the `FromStr` impls.
    pub(crate) fn parse(kind: &'static str, token: &str) -> Self {
        TheoryError::Parse {
            kind,
            token: token.to_string(),
        }
    }
}
