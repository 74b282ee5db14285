//! Error handling for the encryption pipeline.
//!
//! All faults are synchronous and non-recoverable: a call either yields a
//! fully block-aligned result or nothing, and retrying identical bad input
//! reproduces the same failure.

use thiserror::Error;

/// Errors raised by public-key construction and the block pipeline.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PkeError {
    /// A capability violated its contract, e.g. a padding strategy that
    /// returned fewer bytes than it was given.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A word block's width does not match the trapdoor function's required
    /// input width. Always a configuration defect, never expected in correct
    /// operation.
    #[error("block width mismatch: trapdoor requires {expected_bits} bits, block has {actual_bits} bits")]
    LengthMismatch {
        /// Input width the trapdoor function requires.
        expected_bits: usize,
        /// Width of the offending block.
        actual_bits: usize,
    },

    /// Degenerate private-key dimensions that would make every block-width
    /// check vacuous.
    #[error("public key construction failed: {0}")]
    Construction(String),
}

/// Result type for pipeline operations.
pub type Result<T> = std::result::Result<T, PkeError>;
