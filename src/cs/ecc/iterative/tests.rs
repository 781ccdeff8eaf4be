use bitvec::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::cs::ecc::iterative::channel::{inject_errors, random_word};
use crate::cs::ecc::iterative::{
    create_iterative_code, iterative_decode, iterative_encode, BitMatrix, Coord, CoordinateSet,
    Diagnosis, Direction, IterativeCode, ParitySet,
};
use crate::cs::ecc::ErrorCorrection;
use crate::cs::error::Error;

#[test]
fn test_matrix_round_trip_any_shape() {
    let mut rng = ChaCha20Rng::seed_from_u64(2024);
    for rows in 1..=6 {
        for cols in 1..=6 {
            let word = random_word(rows * cols, &mut rng);
            let matrix = BitMatrix::from_word(&word, rows, cols).unwrap();
            assert_eq!(matrix.to_word(), word, "{rows}x{cols}");
        }
    }
}

#[test]
fn test_zero_matrix_has_zero_parities() {
    for rows in 1..=5 {
        for cols in 1..=5 {
            let word = bitvec![u8, Msb0; 0; rows * cols];
            let matrix = BitMatrix::from_word(&word, rows, cols).unwrap();
            for n in 0..=4 {
                let set = ParitySet::compute(&matrix, n);
                assert!(set.iter().all(|(_, bits)| bits.not_any()));
            }
        }
    }
}

#[test]
fn test_frame_length_4x5_all_directions() {
    let code = create_iterative_code(20, 4, 5, 4).unwrap();
    let word = random_word(20, &mut ChaCha20Rng::seed_from_u64(0));
    let frame = code.encode(&word).unwrap();
    assert_eq!(frame.len(), 20 + 4 + 5 + 8 + 8);
    assert_eq!(frame.len(), 45);
}

#[test]
fn test_encoder_and_decoder_agree_for_every_count() {
    let mut rng = ChaCha20Rng::seed_from_u64(8);
    for (rows, cols) in [(1, 1), (1, 5), (4, 1), (4, 5), (3, 3), (6, 2)] {
        for n in 0..=4 {
            let code = IterativeCode::new(rows * cols, rows, cols, n).unwrap();
            let word = random_word(rows * cols, &mut rng);
            let encoded = code.encode_detailed(&word).unwrap();
            let decoded = code.diagnose(&encoded.frame).unwrap();

            assert_eq!(encoded.frame.len(), code.layout().total_len());
            assert_eq!(decoded.received, encoded.parities);
            assert_eq!(decoded.expected, encoded.parities);
            let expected = if n < 2 {
                Diagnosis::Unchecked
            } else {
                Diagnosis::Clean
            };
            assert_eq!(decoded.diagnosis, expected);
            assert!(decoded.errors().is_empty());
            assert_eq!(decoded.correct(), word);
        }
    }
}

#[test]
fn test_single_error_correction_4x5() {
    let code = IterativeCode::new(20, 4, 5, 4).unwrap();
    let mut rng = ChaCha20Rng::seed_from_u64(77);
    for _ in 0..20 {
        let word = random_word(20, &mut rng);
        let mut frame = code.encode(&word).unwrap();
        let position = rng.gen_range(0..20);
        let bit = frame[position];
        frame.set(position, !bit);

        let decoded = code.diagnose(&frame).unwrap();
        let expected: CoordinateSet = [Coord::new(position / 5, position % 5)]
            .into_iter()
            .collect();
        assert_eq!(decoded.errors(), expected);
        assert_eq!(decoded.correct(), word);
    }
}

#[test]
fn test_no_error_idempotence() {
    let code = IterativeCode::new(20, 4, 5, 4).unwrap();
    let mut rng = ChaCha20Rng::seed_from_u64(13);
    let word = random_word(20, &mut rng);
    let frame = code.encode(&word).unwrap();
    let (untouched, positions) = inject_errors(&frame, 0, &mut rng).unwrap();
    assert!(positions.is_empty());

    let decoded = code.diagnose(&untouched).unwrap();
    assert!(decoded.diagnosis.is_clean());
    assert!(decoded.errors().is_empty());
    assert_eq!(code.decode(&untouched).unwrap(), word);
}

#[test]
fn test_two_errors_with_rows_and_cols_are_not_trusted() {
    let code = IterativeCode::new(20, 4, 5, 2).unwrap();
    let mut rng = ChaCha20Rng::seed_from_u64(31);
    let mut checked = 0;
    while checked < 25 {
        let word = random_word(20, &mut rng);
        let frame = code.encode(&word).unwrap();
        let first = rng.gen_range(0..20);
        let second = rng.gen_range(0..20);
        let (a, b) = (Coord::new(first / 5, first % 5), Coord::new(second / 5, second % 5));
        if a.row == b.row || a.col == b.col {
            continue;
        }
        checked += 1;

        let mut corrupted = frame.clone();
        for position in [first, second] {
            let bit = corrupted[position];
            corrupted.set(position, !bit);
        }

        let decoded = code.diagnose(&corrupted).unwrap();
        let located = decoded.errors();
        let truth: CoordinateSet = [a, b].into_iter().collect();
        assert_ne!(located, truth);
        assert!(located.is_empty() || located.iter().any(|coord| !truth.contains(coord)));
    }
}

#[test]
fn test_random_single_frame_error_never_corrupts_message() {
    for n in 2..=4 {
        let code = IterativeCode::new(20, 4, 5, n).unwrap();
        let mut rng = ChaCha20Rng::seed_from_u64(n as u64);
        for _ in 0..50 {
            let word = random_word(20, &mut rng);
            let frame = code.encode(&word).unwrap();
            let (corrupted, positions) = inject_errors(&frame, 1, &mut rng).unwrap();
            let decoded = code.diagnose(&corrupted).unwrap();

            if positions[0] < 20 {
                assert!(decoded.diagnosis.located().is_some());
            } else {
                assert!(decoded.diagnosis.is_ambiguous());
            }
            assert_eq!(decoded.correct(), word);
        }
    }
}

#[test]
fn test_diag_down_is_mirrored_diag_up_reversed() {
    let mut rng = ChaCha20Rng::seed_from_u64(4);
    for (rows, cols) in [(2, 2), (4, 5), (5, 4), (1, 6)] {
        let word = random_word(rows * cols, &mut rng);
        let matrix = BitMatrix::from_word(&word, rows, cols).unwrap();
        let down = ParitySet::compute(&matrix, 4);
        let mirrored = ParitySet::compute(&matrix.mirrored(), 4);

        let mut reversed = mirrored.get(Direction::DiagUp).unwrap().to_bitvec();
        reversed.reverse();
        assert_eq!(down.get(Direction::DiagDown).unwrap(), reversed.as_bitslice());
    }
}

#[test]
fn test_helper_functions() {
    let word = bitvec![u8, Msb0; 0, 1, 1, 0, 1, 0, 0, 1, 1];
    let mut frame = iterative_encode(&word, 3, 3, 3).unwrap();
    assert_eq!(frame.len(), 9 + 3 + 3 + 5);

    frame.set(0, true);
    assert_eq!(iterative_decode(&frame, 3, 3, 3).unwrap(), word);

    assert_eq!(
        iterative_encode(&word, 2, 4, 3),
        Err(Error::Shape {
            len: 9,
            rows: 2,
            cols: 4
        })
    );
    assert_eq!(
        iterative_decode(&frame[..19], 3, 3, 3),
        Err(Error::FrameLength {
            expected: 20,
            actual: 19
        })
    );
}

#[test]
fn test_error_correction_trait() {
    let code = IterativeCode::new(12, 3, 4, 4).unwrap();
    let codec: &dyn ErrorCorrection = &code;
    let word = bitvec![u8, Msb0; 1, 1, 0, 0, 1, 0, 1, 0, 0, 0, 1, 1];

    let mut frame = codec.encode(&word).unwrap();
    let bit = frame[6];
    frame.set(6, !bit);
    assert_eq!(codec.decode(&frame).unwrap(), word);
}
