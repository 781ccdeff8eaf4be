//! Random words and a bit-flip channel for exercising the code.

use bitvec::prelude::*;
use rand::seq::index;
use rand::Rng;

use super::Bits;
use crate::cs::error::{Error, Result};

/// Uniformly random word of `len` bits
pub fn random_word<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Bits {
    (0..len).map(|_| rng.gen::<bool>()).collect()
}

/// Flips exactly `count` distinct bits of `frame`.
///
/// # Returns
///
/// The corrupted frame and the flipped positions in ascending order, or an
/// error if `count` exceeds the frame length
pub fn inject_errors<R: Rng + ?Sized>(
    frame: &BitSlice<u8, Msb0>,
    count: usize,
    rng: &mut R,
) -> Result<(Bits, Vec<usize>)> {
    if count > frame.len() {
        return Err(Error::InvalidInput(format!(
            "Cannot flip {} bits of a {}-bit frame",
            count,
            frame.len()
        )));
    }

    let mut positions = index::sample(rng, frame.len(), count).into_vec();
    positions.sort_unstable();

    let mut corrupted = frame.to_bitvec();
    for &position in &positions {
        let bit = corrupted[position];
        corrupted.set(position, !bit);
    }

    Ok((corrupted, positions))
}
