//! Maps a parity bit back to the matrix cells it summarizes.

use super::matrix::Coord;
use super::params::Direction;

/// Cells contributing to parity bit `index` of `direction` in a `rows` x `cols` matrix.
///
/// This is the exact inverse of the grouping in [`super::parity`]: XOR-ing
/// the returned cells reproduces the parity bit. An index past the end of the
/// direction's block yields no cells.
pub fn line_cells(direction: Direction, index: usize, rows: usize, cols: usize) -> Vec<Coord> {
    match direction {
        Direction::Row if index < rows => (0..cols).map(|col| Coord::new(index, col)).collect(),
        Direction::Col if index < cols => (0..rows).map(|row| Coord::new(row, index)).collect(),
        Direction::DiagUp => diag_up_cells(index, rows, cols),
        Direction::DiagDown => diag_up_cells(index, rows, cols)
            .into_iter()
            .map(|coord| Coord::new(rows - 1 - coord.row, coord.col))
            .collect(),
        _ => Vec::new(),
    }
}

fn diag_up_cells(index: usize, rows: usize, cols: usize) -> Vec<Coord> {
    if rows == 0 || index >= rows + cols - 1 {
        return Vec::new();
    }

    let offset = index as isize - (rows as isize - 1);
    if offset >= 0 {
        let shift = offset.unsigned_abs();
        (0..rows.min(cols - shift))
            .map(|i| Coord::new(i, i + shift))
            .collect()
    } else {
        let shift = offset.unsigned_abs();
        (0..(rows - shift).min(cols))
            .map(|i| Coord::new(i + shift, i))
            .collect()
    }
}
