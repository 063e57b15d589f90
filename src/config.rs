//! Extractor configuration.
//!
//! The parameter record `{n, l, m, t, k}` is fixed at enrolment time and
//! travels with the helper data. Block length `l` and threshold `t` are the
//! two knobs that trade brute-force resistance against noise tolerance:
//! a locker falls to guessing with probability `2^-l`, while reproduction
//! succeeds exactly when at least `t` of the `m` blocks come through
//! clean. They must be chosen jointly from the expected per-bit error rate
//! of the source.

/// Errors for invalid parameter combinations.
///
/// All of these are caller errors, surfaced loudly at construction time
/// and never retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Block length is zero.
    ZeroBlockLength,
    /// Reading length is not a multiple of the block length.
    LengthNotDivisible,
    /// More than 255 blocks; share identifiers are single field elements.
    TooManyBlocks,
    /// Threshold outside `[1, m]`.
    ThresholdOutOfRange,
    /// Requested key length is zero.
    ZeroKeyLength,
}

/// Fixed parameter set for one enrolment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExtractorConfig {
    /// Total reading length in bits (`n = m * l`).
    pub n: usize,
    /// Block length in bits.
    pub l: usize,
    /// Number of blocks.
    pub m: usize,
    /// Reconstruction threshold: blocks that must unlock.
    pub t: usize,
    /// Extracted key length in bits.
    pub k: usize,
}

impl ExtractorConfig {
    /// Builds a configuration from the reading length, block length,
    /// threshold and key length, deriving the block count.
    pub fn new(n: usize, l: usize, t: usize, k: usize) -> Result<Self, ConfigError> {
        if l == 0 {
            return Err(ConfigError::ZeroBlockLength);
        }
        if n == 0 || n % l != 0 {
            return Err(ConfigError::LengthNotDivisible);
        }
        let cfg = Self { n, l, m: n / l, t, k };
        cfg.validate()?;
        Ok(cfg)
    }

    /// Re-checks every invariant. Used both at construction and when a
    /// configuration arrives embedded in externally supplied helper data.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.l == 0 {
            return Err(ConfigError::ZeroBlockLength);
        }
        if self.n == 0 || self.m == 0 || self.m * self.l != self.n {
            return Err(ConfigError::LengthNotDivisible);
        }
        if self.m > 255 {
            return Err(ConfigError::TooManyBlocks);
        }
        if self.t < 1 || self.t > self.m {
            return Err(ConfigError::ThresholdOutOfRange);
        }
        if self.k == 0 {
            return Err(ConfigError::ZeroKeyLength);
        }
        Ok(())
    }

    /// Bytes needed to carry the key (`ceil(k / 8)`); shares have this
    /// length too.
    pub fn key_bytes(&self) -> usize {
        self.k.div_ceil(8)
    }
}
