//! Sender side: message matrix, parities and the transmitted frame.

use bitvec::prelude::*;
use log::debug;

use super::layout::FrameLayout;
use super::matrix::BitMatrix;
use super::parity::ParitySet;
use super::params::CodeParams;
use super::Bits;
use crate::cs::error::Result;

/// Everything the sender derives from one message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Encoded {
    /// The message arranged as a matrix
    pub matrix: BitMatrix,
    /// Parities of the enabled directions
    pub parities: ParitySet,
    /// Message bits followed by the parity blocks
    pub frame: Bits,
}

/// Encodes `word` into a frame.
///
/// Fails only if `word` does not fit the configured matrix shape.
pub fn encode(params: &CodeParams, word: &BitSlice<u8, Msb0>) -> Result<Encoded> {
    let matrix = BitMatrix::from_word(word, params.rows(), params.cols())?;
    let parities = ParitySet::compute(&matrix, params.parity_count());
    let frame = assemble(&FrameLayout::new(params), word, &parities);

    debug!(
        "encoded {} message bits into a {}-bit frame with {} parity directions",
        word.len(),
        frame.len(),
        parities.len()
    );

    Ok(Encoded {
        matrix,
        parities,
        frame,
    })
}

fn assemble(layout: &FrameLayout, word: &BitSlice<u8, Msb0>, parities: &ParitySet) -> Bits {
    let mut frame = bitvec![u8, Msb0; 0; layout.total_len()];
    frame[layout.message()].copy_from_bitslice(word);
    for (direction, range) in layout.blocks() {
        if let Some(bits) = parities.get(direction) {
            frame[range].copy_from_bitslice(bits);
        }
    }
    frame
}
