//! GF(2^8) arithmetic.
//!
//! Finite field arithmetic over GF(2^8) with the irreducible polynomial
//! x^8 + x^4 + x^3 + x + 1 (0x11B). Multiplication is bit-serial and
//! branch-free, with mask-based conditionals instead of lookup tables, so
//! share material never drives a data-dependent branch or memory access.
//!
//! Addition is XOR (characteristic 2), and the multiplicative inverse is
//! computed as a^254 with a fixed square-and-multiply schedule.

#![forbid(unsafe_code)]

use core::ops::{Add, AddAssign, Mul, MulAssign};

/// Irreducible polynomial x^8 + x^4 + x^3 + x + 1.
const POLY_FULL: u16 = 0x11B;

/// A field element, wrapping a byte.
///
/// The wrapper keeps field semantics distinct from raw byte arithmetic;
/// share values enter and leave as `u8` only at module boundaries.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[repr(transparent)]
pub struct GF256(pub u8);

// Lets polynomial coefficient buffers live in `Zeroizing` wrappers.
impl zeroize::DefaultIsZeroes for GF256 {}

impl From<u8> for GF256 {
    #[inline(always)]
    fn from(value: u8) -> Self {
        GF256(value)
    }
}

impl From<GF256> for u8 {
    #[inline(always)]
    fn from(element: GF256) -> u8 {
        element.0
    }
}

impl Add for GF256 {
    type Output = Self;

    /// Field addition: XOR.
    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        GF256(self.0 ^ rhs.0)
    }
}

impl AddAssign for GF256 {
    #[inline(always)]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Mul for GF256 {
    type Output = Self;

    /// Field multiplication, reduced modulo 0x11B.
    ///
    /// Fixed 8 iterations; the conditional add and the conditional
    /// reduction both use full-width masks derived from the relevant bit.
    #[inline(always)]
    fn mul(self, rhs: Self) -> Self {
        let mut result: u8 = 0;
        let mut shifted: u16 = self.0 as u16;
        let mut multiplier: u8 = rhs.0;

        for _ in 0..8 {
            let take = multiplier & 1;
            let take_mask = take.wrapping_mul(!0u8) as u16;
            result ^= (shifted & take_mask) as u8;

            let carry = ((shifted >> 7) & 1) as u8;
            let carry_mask = carry.wrapping_mul(!0u8) as u16 | (carry as u16) << 8;
            shifted = ((shifted << 1) & 0x1FF) ^ (POLY_FULL & carry_mask);

            multiplier >>= 1;
        }

        GF256(result)
    }
}

impl MulAssign for GF256 {
    #[inline(always)]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl GF256 {
    /// Multiplicative inverse, with inv(0) = 0 by convention.
    ///
    /// Computes a^254 (the group has order 255) with a fixed exponent
    /// schedule; only the public zero check branches.
    #[inline(always)]
    pub fn inv(self) -> Self {
        if self.0 == 0 {
            return GF256(0);
        }

        let mut result = GF256(1);
        let mut base = self;
        let mut exp: u8 = 0xFE;

        for _ in 0..8 {
            let bit = exp & 1;
            let mask = bit.wrapping_mul(!0u8);
            // factor = base when the exponent bit is set, 1 otherwise.
            let factor = GF256((base.0 & mask) | (1 & !mask));
            result = result * factor;
            base = base * base;
            exp >>= 1;
        }

        result
    }

    /// Division, `None` on a zero divisor.
    pub fn div(self, rhs: Self) -> Option<Self> {
        if rhs.0 == 0 {
            None
        } else {
            Some(self * rhs.inv())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_is_xor() {
        assert_eq!(GF256(0x01) + GF256(0x01), GF256(0x00));
        assert_eq!(GF256(0xA5) + GF256(0x5A), GF256(0xFF));
    }

    #[test]
    fn test_mul_known_vectors() {
        // Standard AES-field products.
        assert_eq!(GF256(0x02) * GF256(0x03), GF256(0x06));
        assert_eq!(GF256(0x02) * GF256(0x1B), GF256(0x36));
        assert_eq!(GF256(0x57) * GF256(0x83), GF256(0xC1));
        assert_eq!(GF256(0x00) * GF256(0xFF), GF256(0x00));
        assert_eq!(GF256(0xFF) * GF256(0x00), GF256(0x00));
    }

    #[test]
    fn test_mul_commutes() {
        for a in [0x01u8, 0x02, 0x53, 0x80, 0xFF] {
            for b in [0x01u8, 0x1B, 0x47, 0xCA, 0xFE] {
                assert_eq!(GF256(a) * GF256(b), GF256(b) * GF256(a));
            }
        }
    }

    #[test]
    fn test_inv_known_vectors() {
        assert_eq!(GF256(0x01).inv(), GF256(0x01));
        assert_eq!(GF256(0x02).inv(), GF256(0x8D));
        assert_eq!(GF256(0x02) * GF256(0x8D), GF256(0x01));
        assert_eq!(GF256(0x00).inv(), GF256(0x00));
    }

    #[test]
    fn test_inv_exhaustive() {
        for a in 1u8..=255 {
            assert_eq!(
                GF256(a) * GF256(a).inv(),
                GF256(1),
                "inv failed for {:#04x}",
                a
            );
        }
    }

    #[test]
    fn test_div() {
        assert_eq!(GF256(0x06).div(GF256(0x03)), Some(GF256(0x02)));
        assert_eq!(GF256(0x01).div(GF256(0x00)), None);
        assert_eq!(GF256(0x00).div(GF256(0x07)), Some(GF256(0x00)));
    }
}
