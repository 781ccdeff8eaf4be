//! Applies localized corrections to the received message.

use super::matrix::{BitMatrix, CoordinateSet};
use super::Bits;

/// Flips every cell in `coords` and flattens the matrix row-major.
///
/// An empty set returns the message unchanged. Coordinates come from the
/// decoder's line mapping and are always inside the matrix.
pub fn correct(mut matrix: BitMatrix, coords: &CoordinateSet) -> Bits {
    for &coord in coords {
        matrix.flip(coord);
    }
    matrix.into_word()
}
