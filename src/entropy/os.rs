//! Operating-system entropy source.
//!
//! Thin adapter over `rand_core::OsRng` (getrandom underneath). This is
//! the production source for enrolment; everything secret the extractor
//! draws ultimately comes from here unless a caller injects another
//! source.

use rand_core::{OsRng, RngCore};

use super::{EntropyError, EntropySource};

/// CSPRNG backed by the operating system.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsEntropy;

impl OsEntropy {
    pub fn new() -> Self {
        Self
    }
}

impl EntropySource for OsEntropy {
    fn name(&self) -> &'static str {
        "OsRng"
    }

    fn fill(&mut self, dest: &mut [u8]) -> Result<(), EntropyError> {
        OsRng
            .try_fill_bytes(dest)
            .map_err(|_| EntropyError::CollectionFailed)
    }

    fn entropy_estimate(&self) -> f64 {
        8.0
    }
}
