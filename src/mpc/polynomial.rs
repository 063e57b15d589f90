//! Shared polynomial evaluation for the sharing and reconstruction paths.

use crate::core::gf256::GF256;

/// Evaluates f(x) = c[0] + c[1]*x + ... + c[k-1]*x^(k-1) by Horner's rule.
///
/// An empty coefficient slice evaluates to zero.
#[inline(always)]
pub(crate) fn evaluate_polynomial(coeffs: &[GF256], x: GF256) -> GF256 {
    let mut result = GF256(0);
    for &coeff in coeffs.iter().rev() {
        result = result * x + coeff;
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evaluate_linear() {
        // f(x) = 1 + 2x over GF(2^8): f(1) = 3, f(2) = 5, f(3) = 7.
        let coeffs = [GF256(1), GF256(2)];
        assert_eq!(evaluate_polynomial(&coeffs, GF256(1)), GF256(3));
        assert_eq!(evaluate_polynomial(&coeffs, GF256(2)), GF256(5));
        assert_eq!(evaluate_polynomial(&coeffs, GF256(3)), GF256(7));
    }

    #[test]
    fn test_evaluate_constant_and_empty() {
        assert_eq!(evaluate_polynomial(&[GF256(0x42)], GF256(0xFF)), GF256(0x42));
        assert_eq!(evaluate_polynomial(&[], GF256(0x01)), GF256(0));
    }
}
