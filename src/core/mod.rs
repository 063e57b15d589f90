//! Core arithmetic and byte-level primitives.
//!
//! - `gf256`: constant-time GF(2^8) field arithmetic backing the threshold
//!   secret sharing.
//! - `xor`: constant-time XOR used to apply locker keystreams.

pub mod gf256;
pub mod xor;
