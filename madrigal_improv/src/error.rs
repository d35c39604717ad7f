// Typed generation failures.

use thiserror::Error;

/// Errors from rhythm or phrase generation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ImprovError {
    /// The requested span cannot be tiled by the melodic note values:
    /// it is smaller than an eighth note or not a whole multiple of one.
    /// Without this check the rejection sampler would redraw forever.
    #[error("target duration {value} is not a positive multiple of the eighth note")]
    UnfillableTarget { value: f64 },
}
