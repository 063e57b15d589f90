//! Experiment harness.
//!
//! Drives repeated enrolment/reproduction trials against synthetic
//! readings and tallies the outcomes: exact reproductions, explicit
//! rejections, and silent mismatches. A mismatch — a key that reproduced
//! but differs from the enrolled one — would mean a locker opened under a
//! wrong block value, and must stay at zero in any healthy run.

use crate::bits::BitString;
use crate::config::ExtractorConfig;
use crate::extractor::{FuzzyExtractor, GenError};
use crate::pattern;

/// Parameters for one experiment run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrialConfig {
    /// Extractor parameters under test.
    pub extractor: ExtractorConfig,
    /// Number of enrolment/reproduction rounds.
    pub trials: usize,
    /// Bits flipped between the reference and the candidate reading.
    pub flipped_bits: usize,
}

/// Aggregated outcomes of an experiment run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TrialReport {
    /// Rounds executed.
    pub trials: usize,
    /// Rounds whose reproduced key matched the enrolled key exactly.
    pub reproduced: usize,
    /// Rounds that ended in an explicit reproduction failure.
    pub rejected: usize,
    /// Rounds that reproduced a wrong key. Always zero unless the
    /// construction is broken.
    pub mismatched: usize,
    /// Total helper data volume across all rounds.
    pub helper_bytes_total: usize,
}

impl TrialReport {
    /// Fraction of rounds that reproduced the key, in [0, 1].
    pub fn success_rate(&self) -> f64 {
        if self.trials == 0 {
            0.0
        } else {
            self.reproduced as f64 / self.trials as f64
        }
    }

    /// Mean helper data size per round, in bytes.
    pub fn helper_bytes_mean(&self) -> f64 {
        if self.trials == 0 {
            0.0
        } else {
            self.helper_bytes_total as f64 / self.trials as f64
        }
    }
}

/// Runs `cfg.trials` rounds: enrol a random reading, perturb it by
/// `cfg.flipped_bits`, reproduce, compare.
///
/// Reproduction failures are tallied, not propagated — they are the
/// phenomenon under measurement. Only enrolment faults (bad parameters,
/// a dead entropy source) abort the run.
pub fn run_trials<R: crate::entropy::EntropySource + ?Sized>(
    cfg: &TrialConfig,
    rng: &mut R,
) -> Result<TrialReport, GenError> {
    let extractor = FuzzyExtractor::new(cfg.extractor).map_err(GenError::Config)?;
    let mut report = TrialReport::default();

    for _ in 0..cfg.trials {
        let w = pattern::random_pattern(cfg.extractor.n, rng)?;
        let (helper, key) = extractor.generate(&w, rng)?;
        report.helper_bytes_total += helper.size_bytes();

        let noisy = pattern::flip_random_bits(&w, cfg.flipped_bits, rng)?;
        match extractor.reproduce(&noisy, &helper) {
            Ok(reproduced) if reproduced == key => report.reproduced += 1,
            Ok(_) => report.mismatched += 1,
            Err(_) => report.rejected += 1,
        }
        report.trials += 1;
    }

    log::info!(
        "trials: {} reproduced: {} rejected: {} mismatched: {} mean helper bytes: {:.1}",
        report.trials,
        report.reproduced,
        report.rejected,
        report.mismatched,
        report.helper_bytes_mean()
    );
    Ok(report)
}

/// Convenience check used by callers that only need the dropout ratio:
/// Hamming distance between two readings of nominally the same source,
/// as a fraction of the reading length.
pub fn error_rate(a: &BitString, b: &BitString) -> Option<f64> {
    let dist = a.hamming(b)?;
    if a.is_empty() {
        return Some(0.0);
    }
    Some(dist as f64 / a.len() as f64)
}
