//! Error types for run-partition operations.

use thiserror::Error;

/// Error variants for Chtholly tree operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// An index was provided that is out of the structure's bounds.
    #[error("index out of bounds: {0}")]
    IndexOutOfBounds(usize),

    /// A range query or update was given an invalid `[lo, hi]` range.
    #[error("invalid range [{lo}, {hi}] for sequence of length {len}")]
    InvalidRange {
        /// Inclusive lower bound of the rejected range.
        lo: usize,
        /// Inclusive upper bound of the rejected range.
        hi: usize,
        /// Length of the sequence at the time of the call.
        len: usize,
    },

    /// An order-statistic query asked for a rank that does not exist.
    #[error("rank {0} out of range for sub-range")]
    RankOutOfRange(usize),

    /// A modular query was given a modulus that is not positive.
    #[error("invalid modulus: {0} (must be > 0)")]
    InvalidModulus(i64),
}

/// A specialized Result type for Chtholly tree operations.
pub type Result<T> = std::result::Result<T, Error>;
