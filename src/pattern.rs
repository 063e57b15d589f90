//! Synthetic pattern source.
//!
//! Stands in for hardware acquisition when exercising the extractor:
//! uniform random readings plus a bounded bit-flip noise model (flip a
//! fixed number of distinct positions, chosen without replacement). The
//! extractor itself never depends on this module; it only consumes the
//! bit-strings produced here.

extern crate alloc;
use alloc::vec::Vec;

use crate::bits::BitString;
use crate::entropy::{uniform_index, EntropyError, EntropySource};

/// Draws a uniform random reading of `len` bits.
pub fn random_pattern<R: EntropySource + ?Sized>(
    len: usize,
    rng: &mut R,
) -> Result<BitString, EntropyError> {
    BitString::random(len, rng)
}

/// Returns a copy of `s` with `count` distinct bit positions flipped.
///
/// `count` saturates at the string length. Positions are chosen without
/// replacement by a partial Fisher-Yates pass, so the result's Hamming
/// distance to `s` is exactly `min(count, len)`.
pub fn flip_random_bits<R: EntropySource + ?Sized>(
    s: &BitString,
    count: usize,
    rng: &mut R,
) -> Result<BitString, EntropyError> {
    let len = s.len();
    let count = count.min(len);

    let mut indices: Vec<usize> = (0..len).collect();
    let mut noisy = s.clone();
    for drawn in 0..count {
        let pick = drawn + uniform_index(rng, len - drawn)?;
        indices.swap(drawn, pick);
        noisy.flip(indices[drawn]);
    }
    Ok(noisy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entropy::SeededXof;

    #[test]
    fn test_flip_exact_distance() {
        let mut rng = SeededXof::new(b"flip distance");
        let w = random_pattern(256, &mut rng).unwrap();
        for count in [0usize, 1, 7, 100, 256] {
            let noisy = flip_random_bits(&w, count, &mut rng).unwrap();
            assert_eq!(w.hamming(&noisy), Some(count));
        }
    }

    #[test]
    fn test_flip_saturates_at_length() {
        let mut rng = SeededXof::new(b"flip saturation");
        let w = random_pattern(16, &mut rng).unwrap();
        let noisy = flip_random_bits(&w, 1000, &mut rng).unwrap();
        assert_eq!(w.hamming(&noisy), Some(16));
    }

    #[test]
    fn test_random_patterns_vary() {
        let mut rng = SeededXof::new(b"patterns vary");
        let a = random_pattern(128, &mut rng).unwrap();
        let b = random_pattern(128, &mut rng).unwrap();
        assert_ne!(a, b);
    }
}
