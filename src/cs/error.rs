//! Error types shared by the coding algorithms in this crate.

use thiserror::Error;

/// Errors raised while configuring, encoding or decoding a code.
///
/// Only structural problems are errors. A received word whose corruption
/// cannot be localized is reported through the decoder's diagnosis, not here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The word length does not match the requested matrix shape.
    #[error("a word of {len} bits cannot be arranged as a {rows}x{cols} matrix")]
    Shape { len: usize, rows: usize, cols: usize },

    /// The received frame is shorter than the configured layout requires.
    #[error("received frame has {actual} bits but the layout needs {expected}")]
    FrameLength { expected: usize, actual: usize },

    /// The number of parity directions is outside `0..=4`.
    #[error("parity direction count must be between 0 and 4, got {0}")]
    InvalidParityCount(usize),

    /// Any other invalid argument.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
