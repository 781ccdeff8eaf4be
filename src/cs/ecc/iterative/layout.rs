//! Bit offsets of the message and parity blocks inside a transmitted frame.
//!
//! A frame is the message followed by one parity block per enabled direction
//! in the order row, col, diag_down, diag_up. Encoder and decoder both take
//! their split points from [`FrameLayout`].

use std::ops::Range;

use super::params::{CodeParams, Direction};

/// Precomputed block boundaries for one code configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameLayout {
    message: Range<usize>,
    blocks: Vec<(Direction, Range<usize>)>,
    total_len: usize,
}

impl FrameLayout {
    pub fn new(params: &CodeParams) -> Self {
        let message = 0..params.length();
        let mut offset = message.end;
        let blocks = params
            .directions()
            .map(|direction| {
                let start = offset;
                offset += direction.block_len(params.rows(), params.cols());
                (direction, start..offset)
            })
            .collect();

        FrameLayout {
            message,
            blocks,
            total_len: offset,
        }
    }

    /// Range of the message bits
    pub fn message(&self) -> Range<usize> {
        self.message.clone()
    }

    /// Range of `direction`'s parity block, or `None` if it is disabled
    pub fn block(&self, direction: Direction) -> Option<Range<usize>> {
        self.blocks
            .iter()
            .find(|(d, _)| *d == direction)
            .map(|(_, range)| range.clone())
    }

    /// Enabled parity blocks in frame order
    pub fn blocks(&self) -> impl Iterator<Item = (Direction, Range<usize>)> + '_ {
        self.blocks.iter().cloned()
    }

    /// Number of bits in a complete frame
    pub fn total_len(&self) -> usize {
        self.total_len
    }
}
