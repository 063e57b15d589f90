//! The fuzzy extractor: enrolment (`generate`) and reproduction
//! (`reproduce`).
//!
//! `generate` turns one reference reading into public helper data plus a
//! fresh key; `reproduce` turns a noisy re-reading plus the helper data
//! back into the identical key, or an explicit failure. Both are pure
//! functions over their inputs — the extractor keeps no state between
//! calls and cannot distinguish "too noisy" from "wrong helper data".
//!
//! Partitioning converts bit-level noise tolerance into block erasure
//! tolerance: a corrupted block simply fails its locker's tag check and
//! drops out of the share pool, and the threshold scheme absorbs up to
//! `m - t` such erasures. Per-block unlocks are mutually independent and
//! could run in parallel; reconstruction is the barrier after them.

extern crate alloc;
use alloc::vec::Vec;
use core::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::bits::BitString;
use crate::config::{ConfigError, ExtractorConfig};
use crate::entropy::{EntropyError, EntropySource};
use crate::locker::{self, Locker, LockerError};
use crate::mpc::{quorum, reconstruct, share::Share, MpcError};

pub mod codec;
pub mod permutation;

pub use codec::CodecError;
pub use permutation::Permutation;

/// Errors during enrolment. All of these are caller or environment
/// faults; enrolment has no expected failure mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenError {
    /// Invalid parameter combination.
    Config(ConfigError),
    /// Reference reading length disagrees with the configuration.
    InputLength { expected: usize, actual: usize },
    /// Entropy source failure.
    Rng(EntropyError),
    /// Share splitting failure.
    Sharing(MpcError),
    /// Locker construction failure.
    Locking(LockerError),
}

impl From<EntropyError> for GenError {
    fn from(e: EntropyError) -> Self {
        GenError::Rng(e)
    }
}

impl From<MpcError> for GenError {
    fn from(e: MpcError) -> Self {
        GenError::Sharing(e)
    }
}

impl From<LockerError> for GenError {
    fn from(e: LockerError) -> Self {
        GenError::Locking(e)
    }
}

/// Outcomes of a failed reproduction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepError {
    /// Helper data is internally inconsistent (wrong locker count, broken
    /// permutation, invalid embedded configuration).
    MalformedHelperData,
    /// Candidate reading length disagrees with the helper data.
    LengthMismatch { expected: usize, actual: usize },
    /// Fewer blocks unlocked than the threshold requires. The expected,
    /// frequent outcome under high noise; callers typically re-acquire
    /// the reading.
    InsufficientShares { unlocked: usize, threshold: usize },
}

/// Public helper data from one enrolment.
///
/// Safe to persist and transmit in the clear: the permutation scrambles
/// addressing only, and each locker reveals its payload only to the exact
/// block value that sealed it. The key itself appears nowhere.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HelperData {
    /// Parameter record the helper data was produced under.
    pub config: ExtractorConfig,
    /// Secret-at-generation-time block permutation.
    pub permutation: Permutation,
    /// One locker per permuted block position.
    pub lockers: Vec<Locker>,
}

impl HelperData {
    /// Serialized size in bytes (permutation entries as single bytes,
    /// plus every locker). Matches the original experiment's helper-data
    /// accounting.
    pub fn size_bytes(&self) -> usize {
        let lockers: usize = self.lockers.iter().map(Locker::size_bytes).sum();
        self.permutation.len() + lockers
    }

    /// Shape check against the embedded configuration.
    fn is_consistent(&self) -> bool {
        self.config.validate().is_ok()
            && self.permutation.len() == self.config.m
            && self.permutation.is_valid()
            && self.lockers.len() == self.config.m
            && self
                .lockers
                .iter()
                .all(|l| l.payload_len() == self.config.key_bytes())
    }
}

/// The extracted key: `k` bits, uniform conditioned on the helper data.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct ExtractedKey {
    bits: BitString,
}

impl ExtractedKey {
    /// Key length in bits.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// The key material.
    pub fn bits(&self) -> &BitString {
        &self.bits
    }
}

impl fmt::Debug for ExtractedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExtractedKey")
            .field("len", &self.bits.len())
            .field("bits", &"***SENSITIVE***")
            .finish()
    }
}

/// The extractor, fixed to one validated parameter set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FuzzyExtractor {
    config: ExtractorConfig,
}

impl FuzzyExtractor {
    /// Creates an extractor, validating the configuration up front.
    /// Parameter faults surface here, loudly, never per call.
    pub fn new(config: ExtractorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Enrolment: derives `(helper data, key)` from the reference reading.
    ///
    /// Draws the permutation, the key and every locker nonce from `rng`;
    /// all outputs of one call belong together and are never mixed across
    /// calls.
    pub fn generate<R: EntropySource + ?Sized>(
        &self,
        w: &BitString,
        rng: &mut R,
    ) -> Result<(HelperData, ExtractedKey), GenError> {
        let cfg = &self.config;
        if w.len() != cfg.n {
            return Err(GenError::InputLength {
                expected: cfg.n,
                actual: w.len(),
            });
        }

        let permutation = Permutation::random(cfg.m, rng)?;
        let blocks = codec::partition(w, &permutation, cfg.l)
            .map_err(|_| GenError::Config(ConfigError::LengthNotDivisible))?;

        let key = BitString::random(cfg.k, rng)?;
        let shares = quorum::split_secret(key.as_bytes(), cfg.t as u8, cfg.m as u8, rng)?;

        let mut lockers = Vec::with_capacity(cfg.m);
        for (block, share) in blocks.iter().zip(shares.iter()) {
            lockers.push(locker::lock(block, share.value(), rng)?);
        }

        let helper = HelperData {
            config: *cfg,
            permutation,
            lockers,
        };
        Ok((helper, ExtractedKey { bits: key }))
    }

    /// Reproduction: recovers the enrolled key from a noisy reading.
    ///
    /// Every locker that fails its tag check is treated as an erasure and
    /// silently dropped; with at least `t` survivors the shares
    /// reconstruct the key exactly, otherwise the call fails closed.
    /// A partial or best-effort key is never returned.
    pub fn reproduce(
        &self,
        w_prime: &BitString,
        helper: &HelperData,
    ) -> Result<ExtractedKey, RepError> {
        if helper.config != self.config || !helper.is_consistent() {
            return Err(RepError::MalformedHelperData);
        }
        let cfg = &self.config;
        if w_prime.len() != cfg.n {
            return Err(RepError::LengthMismatch {
                expected: cfg.n,
                actual: w_prime.len(),
            });
        }

        let blocks = codec::partition(w_prime, &helper.permutation, cfg.l)
            .map_err(|_| RepError::MalformedHelperData)?;

        let mut recovered: Vec<Share> = Vec::with_capacity(cfg.m);
        for (i, (block, sealed)) in blocks.iter().zip(helper.lockers.iter()).enumerate() {
            if let Some(value) = locker::unlock(block, sealed) {
                // Identifier i + 1 matches the x-coordinate the share was
                // evaluated at during enrolment.
                let share =
                    Share::new(i as u8 + 1, value).map_err(|_| RepError::MalformedHelperData)?;
                recovered.push(share);
            }
        }

        log::debug!(
            "reproduce: {}/{} lockers opened (threshold {})",
            recovered.len(),
            cfg.m,
            cfg.t
        );

        if recovered.len() < cfg.t {
            return Err(RepError::InsufficientShares {
                unlocked: recovered.len(),
                threshold: cfg.t,
            });
        }

        let secret = reconstruct::reconstruct_secret(&recovered, cfg.t as u8)
            .map_err(|_| RepError::MalformedHelperData)?;
        let bits =
            BitString::from_bytes(&secret, cfg.k).map_err(|_| RepError::MalformedHelperData)?;
        Ok(ExtractedKey { bits })
    }
}
