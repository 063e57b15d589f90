#![forbid(unsafe_code)]
// Constant-time XOR.
// - Processes 8-byte words first, then a byte tail; no secret-dependent
//   branching. Length agreement is enforced by callers.
// - Used by the digital locker to apply the BLAKE3 keystream.

/// XOR of `input` with `keystream`, written into `out`.
/// Requires `out.len() == input.len()` and `keystream.len() >= input.len()`.
#[inline(always)]
pub fn xor(input: &[u8], keystream: &[u8], out: &mut [u8]) {
    let len = out.len();
    let mut i = 0;

    while i + 8 <= len {
        let mut a = [0u8; 8];
        let mut b = [0u8; 8];
        a.copy_from_slice(&input[i..i + 8]);
        b.copy_from_slice(&keystream[i..i + 8]);
        let x = u64::from_ne_bytes(a) ^ u64::from_ne_bytes(b);
        out[i..i + 8].copy_from_slice(&x.to_ne_bytes());
        i += 8;
    }

    while i < len {
        out[i] = input[i] ^ keystream[i];
        i += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use alloc::vec::Vec;

    #[test]
    fn test_xor_round_trip() {
        let data: Vec<u8> = (0..37).map(|i| i as u8).collect();
        let key: Vec<u8> = (0..37).map(|i| (i as u8).wrapping_mul(7)).collect();
        let mut masked = vec![0u8; data.len()];
        xor(&data, &key, &mut masked);
        assert_ne!(masked, data);
        let mut back = vec![0u8; data.len()];
        xor(&masked, &key, &mut back);
        assert_eq!(back, data);
    }

    #[test]
    fn test_xor_empty() {
        let mut out = [0u8; 0];
        xor(&[], &[], &mut out);
    }
}
