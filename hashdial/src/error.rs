//! Invalid-argument errors for the decision operations.

use thiserror::Error;

use crate::bounds::MAX_EXACT_FLOAT_INT;

/// Every variant is an invalid-argument failure: the input violated a
/// precondition and the call had no effect.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DialError {
    /// Probability under the lower bound, or NaN.
    #[error("probability ({0}) must be >= 0.0")]
    ProbabilityBelowZero(f64),

    /// Probability over the upper bound.
    #[error("probability ({0}) must be <= 1.0")]
    ProbabilityAboveOne(f64),

    /// `stop <= start`.
    #[error("stop ({stop}) must be > start ({start})")]
    EmptyRange { start: i64, stop: i64 },

    /// `stop - start` cannot be represented exactly as an f64.
    #[error(
        "stop-start ({span}) must be <= {max} due to limitations of floats \
         (start {start}, stop {stop})",
        max = MAX_EXACT_FLOAT_INT
    )]
    RangeTooWide { start: i64, stop: i64, span: i128 },

    /// Choice over an empty sequence.
    #[error("non-empty sequence required (got 0 elements)")]
    EmptySequence,
}

pub type Result<T> = std::result::Result<T, DialError>;
