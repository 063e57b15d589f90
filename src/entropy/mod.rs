//! Randomness sources.
//!
//! Every random choice the extractor makes — the block permutation, the
//! key and share-splitting entropy, the per-lock nonce — flows through one
//! injectable [`EntropySource`] abstraction. Production callers hand in the
//! OS generator; tests and experiments hand in a seeded deterministic
//! source without weakening the production path or touching global state.
//!
//! Reusing the same randomness across two enrolments of different readings
//! is a security violation (helper data for one reading could leak
//! information about another), which is why sources are explicit mutable
//! arguments rather than ambient defaults.

#[cfg(feature = "std")]
pub mod os;
pub mod seeded;

#[cfg(feature = "std")]
pub use os::OsEntropy;
pub use seeded::SeededXof;

/// Error types for entropy collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntropyError {
    /// Failed to collect sufficient bytes.
    CollectionFailed,
    /// Source is exhausted (e.g. a fixed buffer ran dry).
    Exhausted,
    /// Platform not supported.
    NotSupported,
}

/// A trait for entropy sources.
pub trait EntropySource {
    /// Returns a unique identifier for the source.
    fn name(&self) -> &'static str;

    /// Fills `dest` with random bytes from the source.
    fn fill(&mut self, dest: &mut [u8]) -> Result<(), EntropyError>;

    /// Estimated entropy per byte (in bits, 0.0-8.0). Conservative;
    /// deterministic test sources report 0.0.
    fn entropy_estimate(&self) -> f64;
}

/// Draws a uniform index in `[0, bound)` by rejection sampling.
///
/// Modulo reduction alone would bias small indices; draws above the
/// largest multiple of `bound` are discarded instead. `bound` must fit
/// in 32 bits; `bound <= 1` short-circuits to 0.
pub fn uniform_index<R: EntropySource + ?Sized>(
    rng: &mut R,
    bound: usize,
) -> Result<usize, EntropyError> {
    debug_assert!(bound as u64 <= u64::from(u32::MAX));
    if bound <= 1 {
        return Ok(0);
    }
    let bound = bound as u64;
    let range = u64::from(u32::MAX) + 1;
    let zone = range - (range % bound);

    loop {
        let mut buf = [0u8; 4];
        rng.fill(&mut buf)?;
        let draw = u64::from(u32::from_le_bytes(buf));
        if draw < zone {
            return Ok((draw % bound) as usize);
        }
    }
}
