//! Iterative (product) parity code implementation.
//!
//! An iterative code arranges a message of `rows * cols` bits as a matrix and
//! protects it with one parity bit per line in up to four directions: rows,
//! columns, descending diagonals and ascending diagonals. The transmitted
//! frame is the message followed by the parity blocks. At the receiver every
//! mismatched parity bit implicates the cells on its line; a cell implicated
//! in every direction is taken to be in error and flipped.
//!
//! This implementation provides:
//! - Encoding with 0 to 4 parity directions
//! - Decoding with single-bit error localization and correction
//! - An explicit diagnosis separating clean, corrected and undiagnosable frames
//! - A random bit-flip channel and a parallel Monte Carlo simulator
//!
//! Multiple errors are not guaranteed to be corrected. With only row and
//! column checks, two errors in distinct rows and columns are located as the
//! four corners of their rectangle, which flips two good bits.
//!
//! # Examples
//!
//! ```
//! use bitvec::prelude::*;
//! use iterparity::ecc::iterative::{Coord, Diagnosis, IterativeCode};
//!
//! let code = IterativeCode::new(6, 2, 3, 4).unwrap();
//! let word = bitvec![u8, Msb0; 1, 0, 1, 1, 1, 0];
//!
//! let mut frame = code.encode(&word).unwrap();
//! assert_eq!(frame.len(), 6 + 2 + 3 + 4 + 4);
//!
//! frame.set(4, false);
//! let decoded = code.diagnose(&frame).unwrap();
//! assert_eq!(
//!     decoded.diagnosis,
//!     Diagnosis::Located([Coord::new(1, 1)].into_iter().collect())
//! );
//! assert_eq!(decoded.correct(), word);
//! ```

use bitvec::prelude::*;

use crate::cs::ecc::ErrorCorrection;
use crate::cs::error::Result;

pub mod channel;
pub mod corrector;
pub mod decoder;
pub mod display;
pub mod encoder;
pub mod index;
pub mod layout;
pub mod matrix;
pub mod parity;
pub mod params;
pub mod simulation;

#[cfg(test)]
mod tests;

pub use decoder::{Diagnosed, Diagnosis, SplitFrame};
pub use encoder::Encoded;
pub use layout::FrameLayout;
pub use matrix::{BitMatrix, Coord, CoordinateSet};
pub use parity::ParitySet;
pub use params::{CodeParams, Direction};
pub use simulation::{simulate, SimulationReport};

/// Owned bit sequence used for words, frames and parity blocks
pub type Bits = BitVec<u8, Msb0>;

/// An iterative parity code with a fixed configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IterativeCode {
    params: CodeParams,
}

impl IterativeCode {
    /// Creates a new iterative code.
    ///
    /// # Arguments
    ///
    /// * `length` - Number of message bits
    /// * `rows` - Matrix rows
    /// * `cols` - Matrix columns, with `rows * cols == length`
    /// * `parity_count` - Number of parity directions, `0..=4`
    ///
    /// # Returns
    ///
    /// A new `IterativeCode` instance or an error if invalid parameters
    pub fn new(length: usize, rows: usize, cols: usize, parity_count: usize) -> Result<Self> {
        CodeParams::new(length, rows, cols, parity_count).map(Self::with_params)
    }

    pub fn with_params(params: CodeParams) -> Self {
        IterativeCode { params }
    }

    pub fn params(&self) -> &CodeParams {
        &self.params
    }

    /// Block boundaries of this code's frames
    pub fn layout(&self) -> FrameLayout {
        FrameLayout::new(&self.params)
    }

    /// Encodes a message into a frame
    pub fn encode(&self, word: &BitSlice<u8, Msb0>) -> Result<Bits> {
        encoder::encode(&self.params, word).map(|encoded| encoded.frame)
    }

    /// Encodes a message, keeping the matrix and parities alongside the frame
    pub fn encode_detailed(&self, word: &BitSlice<u8, Msb0>) -> Result<Encoded> {
        encoder::encode(&self.params, word)
    }

    /// Splits and diagnoses a received frame without correcting it
    pub fn diagnose(&self, frame: &BitSlice<u8, Msb0>) -> Result<Diagnosed> {
        decoder::decode(&self.params, frame)
    }

    /// Decodes a received frame and returns the corrected message
    pub fn decode(&self, frame: &BitSlice<u8, Msb0>) -> Result<Bits> {
        self.diagnose(frame).map(|decoded| decoded.correct())
    }
}

impl ErrorCorrection for IterativeCode {
    fn encode(&self, data: &BitSlice<u8, Msb0>) -> Result<BitVec<u8, Msb0>> {
        IterativeCode::encode(self, data)
    }

    fn decode(&self, data: &BitSlice<u8, Msb0>) -> Result<BitVec<u8, Msb0>> {
        IterativeCode::decode(self, data)
    }
}

/// Creates an iterative code with custom parameters
pub fn create_iterative_code(
    length: usize,
    rows: usize,
    cols: usize,
    parity_count: usize,
) -> Result<IterativeCode> {
    IterativeCode::new(length, rows, cols, parity_count)
}

/// Encodes a `rows` x `cols` message with `parity_count` parity directions
pub fn iterative_encode(
    word: &BitSlice<u8, Msb0>,
    rows: usize,
    cols: usize,
    parity_count: usize,
) -> Result<Bits> {
    create_iterative_code(word.len(), rows, cols, parity_count)?.encode(word)
}

/// Decodes a frame produced by [`iterative_encode`] with the same parameters
pub fn iterative_decode(
    frame: &BitSlice<u8, Msb0>,
    rows: usize,
    cols: usize,
    parity_count: usize,
) -> Result<Bits> {
    let length = rows.saturating_mul(cols);
    create_iterative_code(length, rows, cols, parity_count)?.decode(frame)
}
