//! Threshold secret sharing.
//!
//! Shamir's scheme over GF(2^8): the extracted key is split into `m`
//! shares such that any `t` of them reconstruct it exactly and fewer than
//! `t` are information-theoretically independent of it. The extractor
//! relies on that erasure tolerance — every block that fails to unlock
//! simply removes one share from the pool.
//!
//! # Components
//! - `share`: definition of a secret share.
//! - `quorum`: threshold validation and polynomial generation.
//! - `reconstruct`: Lagrange interpolation for secret recovery.
//!
//! # Security
//! - GF(2^8) operations are constant-time.
//! - Shares and polynomial coefficients are zeroized.
//! - Unlike the usual `k >= 2` convention, a threshold of 1 is admitted:
//!   the extractor's parameter range is `t in [1, m]`, and `t = 1`
//!   degenerates to every share carrying the secret directly.

pub mod quorum;
pub mod reconstruct;
pub mod share;
pub(crate) mod polynomial;

use alloc::vec::Vec;

use crate::entropy::EntropySource;

/// Errors for secret sharing operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MpcError {
    /// Invalid share index (must be 1..=255).
    InvalidShareIndex,
    /// Share or secret value is empty.
    EmptyShare,
    /// Threshold configuration error (k > n or k < 1).
    InvalidThreshold,
    /// Not enough shares to reconstruct.
    InsufficientShares,
    /// Duplicate share indices provided.
    DuplicateShareIndex,
    /// Mismatch in share lengths.
    ShareLengthMismatch,
    /// Random number generator failure.
    RngFailure,
}

/// Trait for secret sharing schemes.
///
/// Seam for swapping the field or scheme without touching the extractor.
pub trait SecretSharingScheme {
    type Share;
    type Secret;
    type Error;

    /// Splits a secret into n shares with threshold k.
    fn split<R: EntropySource + ?Sized>(
        &self,
        secret: &Self::Secret,
        k: u8,
        n: u8,
        rng: &mut R,
    ) -> Result<Vec<Self::Share>, Self::Error>;

    /// Reconstructs a secret from at least k shares.
    fn reconstruct(&self, shares: &[Self::Share], k: u8) -> Result<Self::Secret, Self::Error>;
}

/// Shamir's secret sharing over GF(2^8).
pub struct ShamirGF256;

impl SecretSharingScheme for ShamirGF256 {
    type Share = share::Share;
    type Secret = Vec<u8>;
    type Error = MpcError;

    fn split<R: EntropySource + ?Sized>(
        &self,
        secret: &Self::Secret,
        k: u8,
        n: u8,
        rng: &mut R,
    ) -> Result<Vec<Self::Share>, Self::Error> {
        quorum::split_secret(secret, k, n, rng)
    }

    fn reconstruct(&self, shares: &[Self::Share], k: u8) -> Result<Self::Secret, Self::Error> {
        reconstruct::reconstruct_secret(shares, k)
    }
}
