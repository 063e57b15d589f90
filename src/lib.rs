//! puflock — a fuzzy extractor built from digital lockers.
//!
//! Derives a reproducible cryptographic key from a noisy, non-uniform
//! bit-string (a PUF response or any biometric-like reading). Two readings
//! of the same source that differ within the error budget yield the same
//! key; readings from a different source, or beyond the budget, yield an
//! explicit failure and leak nothing about the true key.
//!
//! # Construction
//! The reference string is cut into `m` blocks of `l` bits under a secret
//! permutation. A fresh `k`-bit key is split into `m` Shamir shares with
//! threshold `t`, and each share is sealed in a digital locker keyed by its
//! block's exact value. Reproduction re-derives the blocks from a noisy
//! reading; every locker that still opens contributes its share, tag
//! mismatches are treated as erasures, and any `t` recovered shares
//! reconstruct the key exactly.
//!
//! Ran Canetti et al., "Reusable fuzzy extractors for low-entropy
//! distributions", Journal of Cryptology 34 (2021).

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod bits;
pub mod config;
pub mod core;
pub mod entropy;
pub mod extractor;
pub mod harness;
pub mod locker;
pub mod mpc;
pub mod pattern;

pub use bits::BitString;
pub use config::{ConfigError, ExtractorConfig};
pub use extractor::{ExtractedKey, FuzzyExtractor, GenError, HelperData, RepError};
