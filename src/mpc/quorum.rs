//! Share generation for Shamir's scheme over GF(2^8).
//!
//! Each secret byte gets its own random polynomial of degree k-1 with the
//! byte as the constant term; share i collects the evaluations at x = i
//! across all bytes.
//!
//! # Security
//! - Polynomial coefficients live in `Zeroizing` buffers.
//! - k = 1 is legal and produces constant polynomials (no hiding); the
//!   extractor admits threshold 1, and the degenerate case is the caller's
//!   deliberate parameter choice, not an error.

extern crate alloc;
use alloc::vec;
use alloc::vec::Vec;
use zeroize::Zeroizing;

use crate::core::gf256::GF256;
use crate::entropy::EntropySource;
use crate::mpc::polynomial::evaluate_polynomial;
use crate::mpc::{share::Share, MpcError};

/// Splits `secret` into `n` shares with reconstruction threshold `k`.
pub fn split_secret<R: EntropySource + ?Sized>(
    secret: &[u8],
    k: u8,
    n: u8,
    rng: &mut R,
) -> Result<Vec<Share>, MpcError> {
    if secret.is_empty() {
        return Err(MpcError::EmptyShare);
    }
    if k < 1 || k > n {
        return Err(MpcError::InvalidThreshold);
    }

    // share_values[i] accumulates the byte evaluations for share i + 1.
    let mut share_values: Vec<Vec<u8>> = Vec::with_capacity(n as usize);
    for _ in 0..n {
        share_values.push(Vec::with_capacity(secret.len()));
    }

    // One random buffer for the k - 1 non-constant coefficients, refilled
    // per secret byte and wiped on drop. Empty when k = 1.
    let mut random_buf = Zeroizing::new(vec![0u8; (k - 1) as usize]);

    for &byte in secret {
        if !random_buf.is_empty() {
            rng.fill(&mut random_buf).map_err(|_| MpcError::RngFailure)?;
        }

        let mut coeffs = Zeroizing::new(Vec::with_capacity(k as usize));
        coeffs.push(GF256(byte));
        for &r in random_buf.iter() {
            coeffs.push(GF256(r));
        }

        for (i, values) in share_values.iter_mut().enumerate() {
            // Share indices are 1-based; x = 0 would expose the secret.
            let x = GF256(i as u8 + 1);
            values.push(evaluate_polynomial(&coeffs, x).0);
        }
    }

    let mut shares = Vec::with_capacity(n as usize);
    for (i, value) in share_values.into_iter().enumerate() {
        shares.push(Share::new(i as u8 + 1, value)?);
    }

    Ok(shares)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entropy::SeededXof;

    #[test]
    fn test_split_shapes() {
        let mut rng = SeededXof::new(b"split shapes");
        let shares = split_secret(&[0x42, 0x99], 2, 3, &mut rng).unwrap();

        assert_eq!(shares.len(), 3);
        for (i, share) in shares.iter().enumerate() {
            assert_eq!(share.identifier, i as u8 + 1);
            assert_eq!(share.value().len(), 2);
        }
    }

    #[test]
    fn test_split_rejects_bad_params() {
        let mut rng = SeededXof::new(b"bad params");
        assert_eq!(
            split_secret(&[1, 2], 4, 3, &mut rng),
            Err(MpcError::InvalidThreshold)
        );
        assert_eq!(
            split_secret(&[1, 2], 0, 3, &mut rng),
            Err(MpcError::InvalidThreshold)
        );
        assert_eq!(split_secret(&[], 2, 3, &mut rng), Err(MpcError::EmptyShare));
    }

    #[test]
    fn test_threshold_one_is_degenerate_copy() {
        // k = 1: constant polynomials, every share equals the secret.
        let mut rng = SeededXof::new(b"threshold one");
        let secret = [0xDE, 0xAD];
        let shares = split_secret(&secret, 1, 4, &mut rng).unwrap();
        for share in &shares {
            assert_eq!(share.value(), &secret);
        }
    }

    #[test]
    fn test_shares_differ_for_hiding_thresholds() {
        let mut rng = SeededXof::new(b"shares differ");
        let shares = split_secret(&[0x55; 8], 3, 5, &mut rng).unwrap();
        assert_ne!(shares[0].value(), shares[1].value());
    }
}
