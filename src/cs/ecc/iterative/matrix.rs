//! Row-major bit matrix holding the message of an iterative code.

use std::collections::BTreeSet;

use bitvec::prelude::*;

use super::Bits;
use crate::cs::error::{Error, Result};

/// Position of a single cell in a [`BitMatrix`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub fn new(row: usize, col: usize) -> Self {
        Coord { row, col }
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Coord { row, col }
    }
}

/// Ordered set of matrix cells; union and intersection iterate deterministically
pub type CoordinateSet = BTreeSet<Coord>;

/// A `rows` x `cols` grid of bits stored row-major.
///
/// Cell `(r, c)` is bit `r * cols + c` of the word the matrix was built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitMatrix {
    rows: usize,
    cols: usize,
    bits: Bits,
}

impl BitMatrix {
    /// Arranges `word` into a `rows` x `cols` matrix.
    ///
    /// Fails with [`Error::Shape`] unless `word.len() == rows * cols`, and with
    /// [`Error::InvalidInput`] if either dimension is zero.
    pub fn from_word(word: &BitSlice<u8, Msb0>, rows: usize, cols: usize) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(Error::InvalidInput(
                "Matrix dimensions must be positive".to_string(),
            ));
        }
        if rows.checked_mul(cols) != Some(word.len()) {
            return Err(Error::Shape {
                len: word.len(),
                rows,
                cols,
            });
        }

        Ok(BitMatrix {
            rows,
            cols,
            bits: word.to_bitvec(),
        })
    }

    /// Flattens the matrix back into a row-major word
    pub fn to_word(&self) -> Bits {
        self.bits.clone()
    }

    pub fn into_word(self) -> Bits {
        self.bits
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Bit at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if the position lies outside the matrix.
    pub fn get(&self, row: usize, col: usize) -> bool {
        assert!(row < self.rows && col < self.cols, "cell out of bounds");
        self.bits[row * self.cols + col]
    }

    /// Inverts the bit at `coord`.
    ///
    /// # Panics
    ///
    /// Panics if `coord` lies outside the matrix.
    pub fn flip(&mut self, coord: Coord) {
        assert!(
            coord.row < self.rows && coord.col < self.cols,
            "cell out of bounds"
        );
        let index = coord.row * self.cols + coord.col;
        let bit = self.bits[index];
        self.bits.set(index, !bit);
    }

    /// Bits of row `row`
    pub fn row(&self, row: usize) -> &BitSlice<u8, Msb0> {
        let start = row * self.cols;
        &self.bits[start..start + self.cols]
    }

    /// Bits of column `col`, top to bottom
    pub fn column(&self, col: usize) -> impl Iterator<Item = bool> + '_ {
        (0..self.rows).map(move |row| self.get(row, col))
    }

    /// Bits of the diagonal `col - row == offset`, top to bottom.
    ///
    /// Offsets run from `-(rows - 1)` to `cols - 1`; anything outside yields
    /// an empty diagonal.
    pub fn diagonal(&self, offset: isize) -> impl Iterator<Item = bool> + '_ {
        let (first_row, first_col) = if offset >= 0 {
            (0, offset.unsigned_abs())
        } else {
            (offset.unsigned_abs(), 0)
        };
        let len = self
            .rows
            .saturating_sub(first_row)
            .min(self.cols.saturating_sub(first_col));
        (0..len).map(move |i| self.get(first_row + i, first_col + i))
    }

    /// Left-right mirror image: column `c` becomes column `cols - 1 - c`
    pub fn mirrored(&self) -> BitMatrix {
        let mut bits = Bits::with_capacity(self.bits.len());
        for row in 0..self.rows {
            bits.extend((0..self.cols).rev().map(|col| self.get(row, col)));
        }
        BitMatrix {
            rows: self.rows,
            cols: self.cols,
            bits,
        }
    }
}
