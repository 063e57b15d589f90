//! Secret reconstruction by Lagrange interpolation over GF(2^8).
//!
//! Interpolating at x = 0 recovers the polynomial's constant term, i.e.
//! the secret byte. Any set of at least k correct shares of a degree-(k-1)
//! polynomial yields the same constant term, so reconstruction is
//! invariant to which shares survived — the threshold scheme's defining
//! property. Below k shares the function fails closed; it never
//! extrapolates a plausible-looking secret.

extern crate alloc;
use alloc::vec::Vec;

use crate::core::gf256::GF256;
use crate::mpc::{share::Share, MpcError};

/// Reconstructs the secret from `shares`, requiring at least `k` of them.
pub fn reconstruct_secret(shares: &[Share], k: u8) -> Result<Vec<u8>, MpcError> {
    if k < 1 {
        return Err(MpcError::InvalidThreshold);
    }
    if shares.len() < k as usize {
        return Err(MpcError::InsufficientShares);
    }

    let num_shares = shares.len();
    let share_len = shares[0].value.len();

    for share in shares {
        if share.value.len() != share_len {
            return Err(MpcError::ShareLengthMismatch);
        }
    }

    // Duplicate identifiers would make the denominators vanish. O(N^2)
    // is fine for N <= 255.
    for i in 0..num_shares {
        for j in (i + 1)..num_shares {
            if shares[i].identifier == shares[j].identifier {
                return Err(MpcError::DuplicateShareIndex);
            }
        }
    }

    // Lagrange basis at x = 0:
    // lambda_j = prod_{m != j} x_m / (x_m - x_j); subtraction is XOR here.
    let mut lambdas = Vec::with_capacity(num_shares);
    for j in 0..num_shares {
        let xj = GF256(shares[j].identifier);
        let mut numerator = GF256(1);
        let mut denominator = GF256(1);

        for m in 0..num_shares {
            if m == j {
                continue;
            }
            let xm = GF256(shares[m].identifier);
            numerator *= xm;
            denominator *= xm + xj;
        }

        lambdas.push(numerator * denominator.inv());
    }

    // secret[p] = sum_j share_j[p] * lambda_j
    let mut secret = Vec::with_capacity(share_len);
    for p in 0..share_len {
        let mut sum = GF256(0);
        for j in 0..num_shares {
            sum += GF256(shares[j].value[p]) * lambdas[j];
        }
        secret.push(sum.0);
    }

    Ok(secret)
}
