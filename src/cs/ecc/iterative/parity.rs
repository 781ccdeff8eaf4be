//! Parity computation along rows, columns and both diagonal families.
//!
//! Each direction partitions the matrix into lines and summarizes every line
//! by its mod-2 sum. Diagonal families have `rows + cols - 1` lines, indexed
//! so that index 0 is the line through the bottom-left corner for ascending
//! diagonals and the top-left corner for descending ones. An empty line has
//! parity 0.

use std::collections::BTreeMap;

use bitvec::prelude::*;

use super::matrix::BitMatrix;
use super::params::Direction;
use super::Bits;

/// Parity blocks for the enabled directions, keyed and iterated in frame order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParitySet {
    blocks: BTreeMap<Direction, Bits>,
}

impl ParitySet {
    /// Computes the parity blocks of every direction enabled for `parity_count`
    pub fn compute(matrix: &BitMatrix, parity_count: usize) -> Self {
        let blocks = Direction::enabled(parity_count)
            .map(|direction| (direction, parities(matrix, direction)))
            .collect();
        ParitySet { blocks }
    }

    /// Parity block of `direction`, if that direction is enabled
    pub fn get(&self, direction: Direction) -> Option<&BitSlice<u8, Msb0>> {
        self.blocks.get(&direction).map(|bits| bits.as_bitslice())
    }

    pub fn contains(&self, direction: Direction) -> bool {
        self.blocks.contains_key(&direction)
    }

    /// Blocks in frame order
    pub fn iter(&self) -> impl Iterator<Item = (Direction, &BitSlice<u8, Msb0>)> {
        self.blocks
            .iter()
            .map(|(&direction, bits)| (direction, bits.as_bitslice()))
    }

    /// Number of enabled directions
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Total number of parity bits across all blocks
    pub fn bit_len(&self) -> usize {
        self.blocks.values().map(|bits| bits.len()).sum()
    }

    pub(crate) fn insert(&mut self, direction: Direction, bits: Bits) {
        self.blocks.insert(direction, bits);
    }
}

/// Parity block of a single direction
pub fn parities(matrix: &BitMatrix, direction: Direction) -> Bits {
    match direction {
        Direction::Row => row_parities(matrix),
        Direction::Col => col_parities(matrix),
        Direction::DiagDown => diag_down_parities(matrix),
        Direction::DiagUp => diag_up_parities(matrix),
    }
}

/// `parity[i]` is the XOR of row `i`
pub fn row_parities(matrix: &BitMatrix) -> Bits {
    (0..matrix.rows())
        .map(|row| matrix.row(row).count_ones() % 2 == 1)
        .collect()
}

/// `parity[j]` is the XOR of column `j`
pub fn col_parities(matrix: &BitMatrix) -> Bits {
    (0..matrix.cols())
        .map(|col| xor_all(matrix.column(col)))
        .collect()
}

/// `parity[p]` is the XOR of the diagonal `col - row == p - (rows - 1)`
pub fn diag_up_parities(matrix: &BitMatrix) -> Bits {
    let first = -(matrix.rows() as isize - 1);
    let last = matrix.cols() as isize;
    (first..last)
        .map(|offset| xor_all(matrix.diagonal(offset)))
        .collect()
}

/// Ascending-diagonal parities of the mirrored matrix, read back to front.
///
/// This places `parity[p]` on the anti-diagonal `row + col == p` of the
/// original matrix.
pub fn diag_down_parities(matrix: &BitMatrix) -> Bits {
    let mut bits = diag_up_parities(&matrix.mirrored());
    bits.reverse();
    bits
}

fn xor_all(bits: impl Iterator<Item = bool>) -> bool {
    bits.fold(false, |acc, bit| acc ^ bit)
}
