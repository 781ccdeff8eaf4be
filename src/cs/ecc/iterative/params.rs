//! Code configuration and parity directions.

use std::fmt;

use crate::cs::error::{Error, Result};

/// Highest supported number of parity directions.
pub const MAX_PARITY_COUNT: usize = 4;

/// A family of parity lines over the message matrix.
///
/// The declaration order is the order in which parity blocks appear in a
/// transmitted frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Direction {
    /// One parity bit per matrix row
    Row,
    /// One parity bit per matrix column
    Col,
    /// One parity bit per anti-diagonal (`row + col` constant)
    DiagDown,
    /// One parity bit per diagonal (`col - row` constant)
    DiagUp,
}

impl Direction {
    /// All directions, in frame order
    pub const ALL: [Direction; 4] = [
        Direction::Row,
        Direction::Col,
        Direction::DiagDown,
        Direction::DiagUp,
    ];

    /// Whether this direction is checked when `parity_count` directions are configured.
    ///
    /// Rows and columns are enabled together at two, the descending diagonals
    /// at three and the ascending diagonals at four.
    pub fn is_enabled(self, parity_count: usize) -> bool {
        match self {
            Direction::Row | Direction::Col => parity_count >= 2,
            Direction::DiagDown => parity_count >= 3,
            Direction::DiagUp => parity_count >= 4,
        }
    }

    /// Directions enabled for `parity_count`, in frame order
    pub fn enabled(parity_count: usize) -> impl Iterator<Item = Direction> {
        Self::ALL
            .into_iter()
            .filter(move |direction| direction.is_enabled(parity_count))
    }

    /// Number of parity bits this direction produces for a `rows` x `cols` matrix.
    ///
    /// A matrix with no cells has no diagonals.
    pub fn block_len(self, rows: usize, cols: usize) -> usize {
        match self {
            Direction::Row => rows,
            Direction::Col => cols,
            Direction::DiagDown | Direction::DiagUp => (rows + cols).saturating_sub(1),
        }
    }

    /// Short name used in dumps and logs
    pub fn name(self) -> &'static str {
        match self {
            Direction::Row => "row",
            Direction::Col => "col",
            Direction::DiagDown => "diag_down",
            Direction::DiagUp => "diag_up",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Validated construction parameters of an iterative code.
///
/// There are no defaults: message length, matrix shape and the number of
/// parity directions must all be given, and must agree with each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeParams {
    length: usize,
    rows: usize,
    cols: usize,
    parity_count: usize,
}

impl CodeParams {
    /// Creates a new configuration.
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
    /// The parameters, or an error if they are inconsistent
    pub fn new(length: usize, rows: usize, cols: usize, parity_count: usize) -> Result<Self> {
        if length == 0 || rows == 0 || cols == 0 {
            return Err(Error::InvalidInput(
                "Length, rows and columns must be positive".to_string(),
            ));
        }
        if rows.checked_mul(cols) != Some(length) {
            return Err(Error::Shape {
                len: length,
                rows,
                cols,
            });
        }
        if parity_count > MAX_PARITY_COUNT {
            return Err(Error::InvalidParityCount(parity_count));
        }

        Ok(CodeParams {
            length,
            rows,
            cols,
            parity_count,
        })
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn parity_count(&self) -> usize {
        self.parity_count
    }

    /// Directions checked under this configuration, in frame order
    pub fn directions(&self) -> impl Iterator<Item = Direction> {
        Direction::enabled(self.parity_count)
    }
}
