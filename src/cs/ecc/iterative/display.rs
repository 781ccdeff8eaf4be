//! Human-readable dumps of words, matrices, parities and diagnoses.

use std::fmt::{self, Display, Formatter};

use bitvec::prelude::*;

use super::decoder::{Diagnosed, Diagnosis};
use super::encoder::Encoded;
use super::matrix::{BitMatrix, Coord, CoordinateSet};
use super::parity::ParitySet;

/// Wraps a bit slice so it prints as `[1 0 1 1]`
pub struct BitsDisplay<'a>(pub &'a BitSlice<u8, Msb0>);

impl Display for BitsDisplay<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, bit) in self.0.iter().by_vals().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(if bit { "1" } else { "0" })?;
        }
        f.write_str("]")
    }
}

impl Display for Coord {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

fn write_coords(f: &mut Formatter<'_>, coords: &CoordinateSet) -> fmt::Result {
    f.write_str("{")?;
    for (i, coord) in coords.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{}", coord)?;
    }
    f.write_str("}")
}

impl Display for BitMatrix {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows() {
            if row > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", BitsDisplay(self.row(row)))?;
        }
        Ok(())
    }
}

impl Display for ParitySet {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("no parities");
        }
        for (i, (direction, bits)) in self.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{:<9} {}", direction, BitsDisplay(bits))?;
        }
        Ok(())
    }
}

impl Display for Diagnosis {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Diagnosis::Unchecked => f.write_str("unchecked (no parity directions)"),
            Diagnosis::Clean => f.write_str("no errors detected"),
            Diagnosis::Located(coords) => {
                f.write_str("errors at ")?;
                write_coords(f, coords)
            }
            Diagnosis::Ambiguous { implicated } => write!(
                f,
                "errors detected in {} direction(s) but not localized",
                implicated
            ),
        }
    }
}

impl Display for Encoded {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let word = self.matrix.to_word();
        writeln!(f, "word:     {}", BitsDisplay(&word))?;
        writeln!(f, "matrix:\n{}", self.matrix)?;
        writeln!(f, "parities:\n{}", self.parities)?;
        write!(f, "frame:    {}", BitsDisplay(&self.frame))
    }
}

impl Display for Diagnosed {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let word = self.matrix.to_word();
        writeln!(f, "word:     {}", BitsDisplay(&word))?;
        writeln!(f, "matrix:\n{}", self.matrix)?;
        writeln!(f, "received:\n{}", self.received)?;
        writeln!(f, "expected:\n{}", self.expected)?;
        writeln!(f, "result:   {}", self.diagnosis)?;
        write!(f, "fixed:    {}", BitsDisplay(&self.correct()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cs::ecc::iterative::params::CodeParams;
    use crate::cs::ecc::iterative::{decoder, encoder};

    #[test]
    fn test_bits_display() {
        assert_eq!(
            BitsDisplay(bits![u8, Msb0; 1, 0, 1]).to_string(),
            "[1 0 1]"
        );
        assert_eq!(BitsDisplay(BitSlice::empty()).to_string(), "[]");
    }

    #[test]
    fn test_matrix_display() {
        let word = bitvec![u8, Msb0; 1, 0, 0, 1, 1, 0];
        let matrix = BitMatrix::from_word(&word, 2, 3).unwrap();
        assert_eq!(matrix.to_string(), "[1 0 0]\n[1 1 0]");
    }

    #[test]
    fn test_parity_display() {
        let word = bitvec![u8, Msb0; 1, 0, 0, 1];
        let matrix = BitMatrix::from_word(&word, 2, 2).unwrap();
        let set = ParitySet::compute(&matrix, 3);
        assert_eq!(
            set.to_string(),
            "row       [1 1]\ncol       [1 1]\ndiag_down [1 0 1]"
        );
        assert_eq!(ParitySet::compute(&matrix, 1).to_string(), "no parities");
    }

    #[test]
    fn test_diagnosis_display() {
        let coords: CoordinateSet = [Coord::new(1, 2), Coord::new(0, 4)].into_iter().collect();
        assert_eq!(
            Diagnosis::Located(coords).to_string(),
            "errors at {(0, 4), (1, 2)}"
        );
        assert_eq!(
            Diagnosis::Ambiguous { implicated: 2 }.to_string(),
            "errors detected in 2 direction(s) but not localized"
        );
    }

    #[test]
    fn test_full_dump() {
        let params = CodeParams::new(4, 2, 2, 2).unwrap();
        let word = bitvec![u8, Msb0; 1, 0, 0, 1];
        let encoded = encoder::encode(&params, &word).unwrap();
        assert!(encoded.to_string().ends_with("frame:    [1 0 0 1 1 1 1 1]"));

        let decoded = decoder::decode(&params, &encoded.frame).unwrap();
        let dump = decoded.to_string();
        assert!(dump.contains("result:   no errors detected"));
        assert!(dump.ends_with("fixed:    [1 0 0 1]"));
    }
}
