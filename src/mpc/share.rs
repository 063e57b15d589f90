//! Secret share definition.
//!
//! A share is a point (x, y) on the hiding polynomial:
//! - x (identifier): a non-zero byte. Inside the extractor this is the
//!   permuted block position plus one, so each locker payload carries its
//!   own interpolation point.
//! - y (value): one polynomial evaluation per secret byte.
//!
//! # Security
//! - `Zeroize`/`ZeroizeOnDrop` wipe the value on drop.
//! - `Debug` redacts the value; only the identifier and length print.

extern crate alloc;
use alloc::vec::Vec;
use core::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::MpcError;

/// A share of a secret.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Share {
    /// The x-coordinate (1..=255). Public addressing information.
    #[zeroize(skip)]
    pub identifier: u8,

    /// The y-coordinates, one per secret byte. Sensitive.
    pub value: Vec<u8>,
}

impl fmt::Debug for Share {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Share")
            .field("identifier", &self.identifier)
            .field("length", &self.value.len())
            .field("value", &"***SENSITIVE***")
            .finish()
    }
}

impl Share {
    /// Creates a share, rejecting the zero identifier (the secret sits at
    /// x = 0) and empty values.
    pub fn new(identifier: u8, value: Vec<u8>) -> Result<Self, MpcError> {
        if identifier == 0 {
            return Err(MpcError::InvalidShareIndex);
        }
        if value.is_empty() {
            return Err(MpcError::EmptyShare);
        }
        Ok(Self { identifier, value })
    }

    /// The y-coordinate bytes.
    pub fn value(&self) -> &[u8] {
        &self.value
    }
}
