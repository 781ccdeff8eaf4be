//! Monte Carlo estimate of how often a code recovers from random bit flips.
//!
//! Trials are independent and run in parallel. Trial `i` draws its message and
//! error positions from a ChaCha20 stream seeded with `seed + i`, so a report
//! depends only on its arguments and not on thread scheduling.

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use rayon::prelude::*;

use super::channel::{inject_errors, random_word};
use super::decoder::Diagnosis;
use super::IterativeCode;
use crate::cs::error::{Error, Result};

/// Tally of trial outcomes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimulationReport {
    pub trials: usize,
    /// The fixed message equals the original
    pub recovered: usize,
    /// Cells were flipped but the fixed message is still wrong
    pub miscorrected: usize,
    /// Mismatches were found but not localized, leaving the message wrong
    pub ambiguous: usize,
    /// Every parity matched (or none was checked) but the message is wrong
    pub undetected: usize,
}

impl SimulationReport {
    /// Fraction of trials whose message was recovered
    pub fn recovery_rate(&self) -> f64 {
        if self.trials == 0 {
            return 0.0;
        }
        self.recovered as f64 / self.trials as f64
    }

    fn merge(self, other: SimulationReport) -> SimulationReport {
        SimulationReport {
            trials: self.trials + other.trials,
            recovered: self.recovered + other.recovered,
            miscorrected: self.miscorrected + other.miscorrected,
            ambiguous: self.ambiguous + other.ambiguous,
            undetected: self.undetected + other.undetected,
        }
    }
}

/// Runs `trials` rounds of encode, flip `errors` frame bits, decode and fix.
pub fn simulate(
    code: &IterativeCode,
    errors: usize,
    trials: usize,
    seed: u64,
) -> Result<SimulationReport> {
    let frame_len = code.layout().total_len();
    if errors > frame_len {
        return Err(Error::InvalidInput(format!(
            "Cannot flip {} bits of a {}-bit frame",
            errors, frame_len
        )));
    }

    (0..trials)
        .into_par_iter()
        .map(|trial| run_trial(code, errors, seed.wrapping_add(trial as u64)))
        .try_reduce(SimulationReport::default, |a, b| Ok(a.merge(b)))
}

fn run_trial(code: &IterativeCode, errors: usize, seed: u64) -> Result<SimulationReport> {
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    let word = random_word(code.params().length(), &mut rng);
    let frame = code.encode(&word)?;
    let (corrupted, _) = inject_errors(&frame, errors, &mut rng)?;
    let decoded = code.diagnose(&corrupted)?;

    let mut report = SimulationReport {
        trials: 1,
        ..SimulationReport::default()
    };
    if decoded.correct() == word {
        report.recovered = 1;
    } else {
        match decoded.diagnosis {
            Diagnosis::Located(_) => report.miscorrected = 1,
            Diagnosis::Ambiguous { .. } => report.ambiguous = 1,
            Diagnosis::Clean | Diagnosis::Unchecked => report.undetected = 1,
        }
    }
    Ok(report)
}
