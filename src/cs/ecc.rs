//! Error correction code implementations.
//!
//! This module provides iterative parity (product) codes: a message is laid
//! out as a rectangular bit matrix and protected by parity checks along rows,
//! columns and both diagonal families.
//!
//! # Error Correction Algorithms
//!
//! Error correction codes are used to detect and correct errors in data
//! transmission and storage, making digital communications more reliable.
//!
//! Currently implemented:
//! - Iterative (product) parity codes with up to four check directions
//!
//! # Examples
//!
//! ```rust
//! use bitvec::prelude::*;
//! use iterparity::ecc::ErrorCorrection;
//! use iterparity::ecc::iterative::IterativeCode;
//!
//! let code = IterativeCode::new(20, 4, 5, 4).unwrap();
//! let word = bitvec![u8, Msb0; 1, 0, 1, 1, 0, 0, 1, 0, 1, 1, 1, 0, 0, 1, 0, 1, 0, 0, 1, 1];
//!
//! let mut frame = ErrorCorrection::encode(&code, &word).unwrap();
//! let flipped = !frame[7];
//! frame.set(7, flipped);
//!
//! let fixed = ErrorCorrection::decode(&code, &frame).unwrap();
//! assert_eq!(fixed, word);
//! ```

use bitvec::prelude::*;

pub use crate::cs::error::Result;

/// Trait for error correction code implementations
pub trait ErrorCorrection {
    /// Encode data bits into a transmitted frame
    fn encode(&self, data: &BitSlice<u8, Msb0>) -> Result<BitVec<u8, Msb0>>;

    /// Decode a received frame and correct errors if possible
    fn decode(&self, data: &BitSlice<u8, Msb0>) -> Result<BitVec<u8, Msb0>>;
}

/// Iterative (product) parity codes
pub mod iterative;
pub use iterative::{
    create_iterative_code, iterative_decode, iterative_encode, CodeParams, Coord, Diagnosis,
    Direction, IterativeCode,
};
