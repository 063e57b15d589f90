//! Digital lockers.
//!
//! A keyed commit/reveal primitive: `lock` seals a short payload under a
//! block value acting as the key, producing a public (nonce, tag,
//! ciphertext) triple; `unlock` releases the payload only when presented
//! the exact original key and otherwise fails closed.
//!
//! # Scheme
//! 1. nonce <- 16 random bytes, fresh per lock
//! 2. tag = BLAKE3_derive("puflock v1 locker tag", nonce || len(key) || key)[0..16]
//! 3. pad = BLAKE3_XOF_derive("puflock v1 locker pad", nonce || len(key) || key)
//! 4. ciphertext = payload XOR pad
//!
//! Domain-separated contexts keep the tag from leaking keystream bytes.
//! The nonce (after Canetti-Dakdouk; the classic random-oracle locker)
//! makes repeated locks under equal keys unlinkable. Hashing the key's bit
//! length alongside its packed bytes stops distinct-length keys from
//! colliding through their shared byte padding.
//!
//! # Failure policy
//! A wrong key is an ordinary, expected outcome — an erasure — and maps to
//! `None`, never an error. An adversary holding the triple learns the
//! payload only by guessing the key (probability 2^-l for an l-bit block)
//! or finding a tag collision (2^-128).

extern crate alloc;
use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use crate::bits::BitString;
use crate::core::xor::xor;
use crate::entropy::EntropySource;

/// Nonce length in bytes.
const NONCE_LEN: usize = 16;
/// Tag length in bytes; the false-unlock probability is 2^-128.
pub const TAG_LEN: usize = 16;

const TAG_CONTEXT: &str = "puflock v1 locker tag";
const PAD_CONTEXT: &str = "puflock v1 locker pad";

/// Errors for lock construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockerError {
    /// Nothing to seal.
    EmptyPayload,
    /// Locking key has no bits.
    EmptyKey,
    /// Random number generator failure while drawing the nonce.
    RngFailure,
}

/// A sealed payload: public helper data bound to one block position.
///
/// None of the fields reveal the payload or the key; the triple may be
/// stored and transmitted in the clear.
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Locker {
    nonce: [u8; NONCE_LEN],
    tag: [u8; TAG_LEN],
    ciphertext: Vec<u8>,
}

impl fmt::Debug for Locker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Locker")
            .field("nonce", &hex::encode(self.nonce))
            .field("tag", &hex::encode(self.tag))
            .field("ciphertext_len", &self.ciphertext.len())
            .finish()
    }
}

impl Locker {
    /// Payload length in bytes.
    pub fn payload_len(&self) -> usize {
        self.ciphertext.len()
    }

    /// Serialized size in bytes (nonce + tag + ciphertext).
    pub fn size_bytes(&self) -> usize {
        NONCE_LEN + TAG_LEN + self.ciphertext.len()
    }
}

/// Seals `payload` under `key`, drawing a fresh nonce from `rng`.
pub fn lock<R: EntropySource + ?Sized>(
    key: &BitString,
    payload: &[u8],
    rng: &mut R,
) -> Result<Locker, LockerError> {
    if payload.is_empty() {
        return Err(LockerError::EmptyPayload);
    }
    if key.is_empty() {
        return Err(LockerError::EmptyKey);
    }

    let mut nonce = [0u8; NONCE_LEN];
    rng.fill(&mut nonce).map_err(|_| LockerError::RngFailure)?;

    let tag = compute_tag(&nonce, key);

    let mut ciphertext = vec![0u8; payload.len()];
    let pad = keystream(&nonce, key, payload.len());
    xor(payload, &pad, &mut ciphertext);

    Ok(Locker {
        nonce,
        tag,
        ciphertext,
    })
}

/// Attempts to open `locker` with `candidate`.
///
/// Returns the payload on an exact key match and `None` on a tag
/// mismatch. The ciphertext is not touched unless the tag verifies.
pub fn unlock(candidate: &BitString, locker: &Locker) -> Option<Vec<u8>> {
    let tag = compute_tag(&locker.nonce, candidate);
    if !constant_time_eq(&tag, &locker.tag) {
        return None;
    }

    let mut payload = vec![0u8; locker.ciphertext.len()];
    let pad = keystream(&locker.nonce, candidate, locker.ciphertext.len());
    xor(&locker.ciphertext, &pad, &mut payload);
    Some(payload)
}

// --- Helpers ---

fn keyed_hasher(context: &str, nonce: &[u8; NONCE_LEN], key: &BitString) -> blake3::Hasher {
    let mut hasher = blake3::Hasher::new_derive_key(context);
    hasher.update(nonce);
    hasher.update(&(key.len() as u64).to_le_bytes());
    hasher.update(key.as_bytes());
    hasher
}

fn compute_tag(nonce: &[u8; NONCE_LEN], key: &BitString) -> [u8; TAG_LEN] {
    let digest = keyed_hasher(TAG_CONTEXT, nonce, key).finalize();
    let mut tag = [0u8; TAG_LEN];
    tag.copy_from_slice(&digest.as_bytes()[..TAG_LEN]);
    tag
}

fn keystream(nonce: &[u8; NONCE_LEN], key: &BitString, len: usize) -> Vec<u8> {
    let mut pad = vec![0u8; len];
    keyed_hasher(PAD_CONTEXT, nonce, key)
        .finalize_xof()
        .fill(&mut pad);
    pad
}

#[inline(never)]
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut diff = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        diff |= x ^ y;
    }
    diff == 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entropy::SeededXof;

    fn key(bits: &str) -> BitString {
        bits.parse().unwrap()
    }

    #[test]
    fn test_exact_key_round_trip() {
        let mut rng = SeededXof::new(b"locker round trip");
        let block = key("10110101");
        let payload = [0xDE, 0xAD, 0xBE, 0xEF];

        let locker = lock(&block, &payload, &mut rng).unwrap();
        assert_eq!(unlock(&block, &locker).unwrap(), payload);
    }

    #[test]
    fn test_single_bit_difference_is_erasure() {
        let mut rng = SeededXof::new(b"locker erasure");
        let block = key("10110101");
        let locker = lock(&block, &[0x55], &mut rng).unwrap();

        let mut near = block.clone();
        near.flip(3);
        assert_eq!(unlock(&near, &locker), None);
    }

    #[test]
    fn test_length_is_part_of_the_key() {
        // "1011" packs to the same byte as "10110000"; the hashed bit
        // length must still keep them apart.
        let mut rng = SeededXof::new(b"locker length");
        let locker = lock(&key("1011"), &[0x11], &mut rng).unwrap();
        assert_eq!(unlock(&key("10110000"), &locker), None);
        assert_eq!(unlock(&key("1011"), &locker).unwrap(), [0x11]);
    }

    #[test]
    fn test_repeated_locks_differ() {
        let mut rng = SeededXof::new(b"locker freshness");
        let block = key("0110");
        let a = lock(&block, &[0x42], &mut rng).unwrap();
        let b = lock(&block, &[0x42], &mut rng).unwrap();
        assert_ne!(a, b);
        assert_eq!(unlock(&block, &a).unwrap(), [0x42]);
        assert_eq!(unlock(&block, &b).unwrap(), [0x42]);
    }

    #[test]
    fn test_rejects_empty_inputs() {
        let mut rng = SeededXof::new(b"locker empty");
        assert_eq!(
            lock(&key("1011"), &[], &mut rng),
            Err(LockerError::EmptyPayload)
        );
        assert_eq!(
            lock(&BitString::zeros(0), &[0x01], &mut rng),
            Err(LockerError::EmptyKey)
        );
    }

    #[test]
    fn test_ciphertext_hides_payload() {
        let mut rng = SeededXof::new(b"locker hiding");
        let payload = [0x00u8; 8];
        let locker = lock(&key("11001010"), &payload, &mut rng).unwrap();
        // An all-zero payload XORed with the keystream must not come out
        // all-zero (keystream is pseudorandom).
        assert_ne!(locker.ciphertext, payload);
    }
}
