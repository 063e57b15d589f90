//! Fixed-length packed bit-strings.
//!
//! `BitString` is the raw-material type of the extractor: PUF readings,
//! per-position blocks and extracted keys are all fixed-length bit
//! sequences. Bits are packed MSB-first into bytes so that the textual
//! form `"1011..."` and the byte form agree, and the unused trailing bits
//! of the last byte are always zero. That invariant is what makes byte-wise
//! equality, Hamming weight counting and hashing of packed bytes sound.
//!
//! # Security
//! - Readings and keys are secret material: the backing bytes implement
//!   `Zeroize`/`ZeroizeOnDrop` and `Debug` redacts the content.
//! - `Display` intentionally renders the bits; callers format a value only
//!   when they have decided it may be shown.

extern crate alloc;
use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::entropy::{EntropyError, EntropySource};

/// Errors for bit-string construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitStringError {
    /// A character other than '0' or '1' in textual input.
    InvalidCharacter,
    /// Byte buffer length does not match the declared bit length.
    LengthMismatch,
}

/// A fixed-length sequence of bits, packed MSB-first.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct BitString {
    /// Number of valid bits. Public information (the reading length is
    /// a configuration parameter, not a secret).
    #[zeroize(skip)]
    len: usize,

    /// Packed bit content. Sensitive.
    bytes: Vec<u8>,
}

impl fmt::Debug for BitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BitString")
            .field("len", &self.len)
            .field("bits", &"***SENSITIVE***")
            .finish()
    }
}

impl BitString {
    /// Creates an all-zero string of `len` bits.
    pub fn zeros(len: usize) -> Self {
        Self {
            len,
            bytes: vec![0u8; Self::byte_len(len)],
        }
    }

    /// Wraps packed bytes as a `len`-bit string.
    ///
    /// The buffer must be exactly `ceil(len / 8)` bytes; surplus bits in
    /// the final byte are cleared rather than rejected, so callers may pass
    /// buffers whose tail padding is arbitrary (e.g. reconstructed share
    /// bytes).
    pub fn from_bytes(bytes: &[u8], len: usize) -> Result<Self, BitStringError> {
        if bytes.len() != Self::byte_len(len) {
            return Err(BitStringError::LengthMismatch);
        }
        let mut s = Self {
            len,
            bytes: bytes.to_vec(),
        };
        s.mask_tail();
        Ok(s)
    }

    /// Draws a uniformly random `len`-bit string from `rng`.
    pub fn random<R: EntropySource + ?Sized>(
        len: usize,
        rng: &mut R,
    ) -> Result<Self, EntropyError> {
        let mut s = Self::zeros(len);
        rng.fill(&mut s.bytes)?;
        s.mask_tail();
        Ok(s)
    }

    /// Number of bits.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True when the string holds no bits.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Packed content, MSB-first, trailing bits zero.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Returns bit `index`.
    ///
    /// # Panics
    /// If `index >= len()`.
    pub fn get(&self, index: usize) -> bool {
        assert!(index < self.len, "bit index out of range");
        self.bytes[index / 8] & Self::bit_mask(index) != 0
    }

    /// Sets bit `index` to `value`.
    ///
    /// # Panics
    /// If `index >= len()`.
    pub fn set(&mut self, index: usize, value: bool) {
        assert!(index < self.len, "bit index out of range");
        let mask = Self::bit_mask(index);
        if value {
            self.bytes[index / 8] |= mask;
        } else {
            self.bytes[index / 8] &= !mask;
        }
    }

    /// Inverts bit `index`.
    ///
    /// # Panics
    /// If `index >= len()`.
    pub fn flip(&mut self, index: usize) {
        assert!(index < self.len, "bit index out of range");
        self.bytes[index / 8] ^= Self::bit_mask(index);
    }

    /// Copies bits `[start, start + len)` into a fresh string.
    ///
    /// # Panics
    /// If the range exceeds the string.
    pub fn slice(&self, start: usize, len: usize) -> Self {
        assert!(
            start.checked_add(len).is_some_and(|end| end <= self.len),
            "slice out of range"
        );
        let mut out = Self::zeros(len);
        for i in 0..len {
            if self.get(start + i) {
                out.set(i, true);
            }
        }
        out
    }

    /// Hamming distance to `other`, or `None` when lengths differ.
    pub fn hamming(&self, other: &Self) -> Option<usize> {
        if self.len != other.len {
            return None;
        }
        let dist = self
            .bytes
            .iter()
            .zip(other.bytes.iter())
            .map(|(a, b)| (a ^ b).count_ones() as usize)
            .sum();
        Some(dist)
    }

    fn byte_len(bits: usize) -> usize {
        bits.div_ceil(8)
    }

    fn bit_mask(index: usize) -> u8 {
        1 << (7 - (index % 8))
    }

    /// Clears the unused bits of the final byte.
    fn mask_tail(&mut self) {
        let rem = self.len % 8;
        if rem != 0 {
            if let Some(last) = self.bytes.last_mut() {
                *last &= 0xFFu8 << (8 - rem);
            }
        }
    }
}

impl FromStr for BitString {
    type Err = BitStringError;

    /// Parses `"0101..."` text into a bit-string of matching length.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut out = Self::zeros(s.len());
        for (i, c) in s.chars().enumerate() {
            match c {
                '0' => {}
                '1' => out.set(i, true),
                _ => return Err(BitStringError::InvalidCharacter),
            }
        }
        Ok(out)
    }
}

impl fmt::Display for BitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut text = String::with_capacity(self.len);
        for i in 0..self.len {
            text.push(if self.get(i) { '1' } else { '0' });
        }
        f.write_str(&text)
    }
}
