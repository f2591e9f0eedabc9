//! Error types raised while configuring the compatibility scorer.

use thiserror::Error;

/// Errors returned by [`ScoreWeights::validate`](crate::ScoreWeights::validate).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScoreWeightsError {
    /// A weight was NaN or infinite.
    #[error("{name} weight must be finite")]
    NonFinite {
        /// Which weight failed.
        name: &'static str,
    },
    /// A weight was below zero.
    #[error("{name} weight must not be negative (got {value})")]
    Negative {
        /// Which weight failed.
        name: &'static str,
        /// Value supplied.
        value: f64,
    },
    /// The weights did not add up to one.
    #[error("weights must sum to 1 (got {sum})")]
    InvalidSum {
        /// Actual sum of the four weights.
        sum: f64,
    },
}
