//! Receiver side: split a frame, diagnose parity mismatches, localize errors.
//!
//! Decoding is one linear pass through three stages:
//!
//! 1. [`split`] cuts the received frame into message bits and received parity
//!    blocks at the offsets given by [`FrameLayout`].
//! 2. [`diagnose`] rebuilds the message matrix, recomputes the parities and,
//!    for each direction, collects every cell lying on a mismatched line into
//!    that direction's suspect set. The cells common to all suspect sets are
//!    taken as the error locations.
//! 3. [`Diagnosed::correct`] flips those cells and returns the message.
//!
//! A single flipped message bit disturbs exactly one line of every enabled
//! direction, and the row and column lines alone meet in one cell, so with
//! two or more directions a single error is always located. Several errors
//! can produce an empty intersection, or an intersection holding cells that
//! were never flipped. The first case is reported as [`Diagnosis::Ambiguous`];
//! the second cannot be told apart from a genuine correction.

use std::collections::BTreeMap;

use bitvec::prelude::*;
use log::{debug, trace, warn};

use super::corrector;
use super::index::line_cells;
use super::layout::FrameLayout;
use super::matrix::{BitMatrix, CoordinateSet};
use super::parity::ParitySet;
use super::params::{CodeParams, Direction};
use super::Bits;
use crate::cs::error::{Error, Result};

/// Outcome of checking a received frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnosis {
    /// No parity direction is enabled, so nothing could be checked
    Unchecked,
    /// Every received parity block matches the recomputed one
    Clean,
    /// Mismatches in every direction meet in these cells
    Located(CoordinateSet),
    /// Mismatches were found but could not be localized; nothing is flipped
    Ambiguous {
        /// Number of directions with at least one mismatched line
        implicated: usize,
    },
}

impl Diagnosis {
    /// Cells that will be flipped; empty unless the diagnosis is `Located`
    pub fn located(&self) -> Option<&CoordinateSet> {
        match self {
            Diagnosis::Located(coords) => Some(coords),
            _ => None,
        }
    }

    pub fn is_clean(&self) -> bool {
        matches!(self, Diagnosis::Clean)
    }

    pub fn is_ambiguous(&self) -> bool {
        matches!(self, Diagnosis::Ambiguous { .. })
    }
}

/// A received frame cut at the layout's block boundaries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitFrame {
    /// Received message bits
    pub message: Bits,
    /// Received parity blocks of the enabled directions
    pub received: ParitySet,
}

/// A frame after diagnosis, ready to be corrected
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnosed {
    /// Received message arranged as a matrix
    pub matrix: BitMatrix,
    /// Parity blocks as received
    pub received: ParitySet,
    /// Parity blocks recomputed from the received message
    pub expected: ParitySet,
    /// Cells lying on a mismatched line, per enabled direction
    pub suspects: BTreeMap<Direction, CoordinateSet>,
    pub diagnosis: Diagnosis,
}

impl Diagnosed {
    /// Cells localized as errors; empty unless the diagnosis is `Located`
    pub fn errors(&self) -> CoordinateSet {
        self.diagnosis.located().cloned().unwrap_or_default()
    }

    /// Received message with the localized cells flipped
    pub fn correct(&self) -> Bits {
        corrector::correct(self.matrix.clone(), &self.errors())
    }
}

/// Cuts `frame` into the message and the enabled parity blocks.
///
/// Fails with [`Error::FrameLength`] if `frame` is shorter than the layout.
/// Bits past the end of the layout are ignored.
pub fn split(params: &CodeParams, frame: &BitSlice<u8, Msb0>) -> Result<SplitFrame> {
    let layout = FrameLayout::new(params);
    if frame.len() < layout.total_len() {
        return Err(Error::FrameLength {
            expected: layout.total_len(),
            actual: frame.len(),
        });
    }
    if frame.len() > layout.total_len() {
        warn!(
            "ignoring {} trailing bits after a {}-bit frame",
            frame.len() - layout.total_len(),
            layout.total_len()
        );
    }

    let mut received = ParitySet::default();
    for (direction, range) in layout.blocks() {
        received.insert(direction, frame[range].to_bitvec());
    }

    Ok(SplitFrame {
        message: frame[layout.message()].to_bitvec(),
        received,
    })
}

/// Compares received and recomputed parities and localizes the errors.
///
/// Fails with [`Error::FrameLength`] if a received block of an enabled
/// direction is missing or does not have that direction's length.
pub fn diagnose(params: &CodeParams, split: SplitFrame) -> Result<Diagnosed> {
    let SplitFrame { message, received } = split;
    let matrix = BitMatrix::from_word(&message, params.rows(), params.cols())?;
    let expected = ParitySet::compute(&matrix, params.parity_count());

    let mut suspects = BTreeMap::new();
    for (direction, expected_bits) in expected.iter() {
        let received_bits = received.get(direction).unwrap_or(BitSlice::empty());
        if received_bits.len() != expected_bits.len() {
            return Err(Error::FrameLength {
                expected: expected_bits.len(),
                actual: received_bits.len(),
            });
        }

        let mut cells = CoordinateSet::new();
        let mismatches = received_bits
            .iter()
            .by_vals()
            .zip(expected_bits.iter().by_vals())
            .enumerate()
            .filter(|(_, (got, want))| got != want)
            .map(|(index, _)| index);
        for index in mismatches {
            trace!("{direction} parity {index} mismatched");
            cells.extend(line_cells(direction, index, params.rows(), params.cols()));
        }
        suspects.insert(direction, cells);
    }

    let diagnosis = localize(params, &suspects);
    debug!("diagnosed {}-bit message: {:?}", message.len(), diagnosis);

    Ok(Diagnosed {
        matrix,
        received,
        expected,
        suspects,
        diagnosis,
    })
}

/// Splits and diagnoses `frame` in one call
pub fn decode(params: &CodeParams, frame: &BitSlice<u8, Msb0>) -> Result<Diagnosed> {
    let split = split(params, frame)?;
    diagnose(params, split)
}

fn localize(params: &CodeParams, suspects: &BTreeMap<Direction, CoordinateSet>) -> Diagnosis {
    if suspects.is_empty() {
        return Diagnosis::Unchecked;
    }

    let implicated = suspects.values().filter(|cells| !cells.is_empty()).count();
    if implicated == 0 {
        return Diagnosis::Clean;
    }
    if implicated < params.parity_count() {
        return Diagnosis::Ambiguous { implicated };
    }

    let mut sets = suspects.values();
    let mut common = sets.next().cloned().unwrap_or_default();
    for cells in sets {
        common.retain(|coord| cells.contains(coord));
    }

    if common.is_empty() {
        Diagnosis::Ambiguous { implicated }
    } else {
        Diagnosis::Located(common)
    }
}
