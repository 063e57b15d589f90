//! Block partitioning under a permutation.
//!
//! Cuts an n-bit reading into m contiguous l-bit blocks in natural order,
//! then re-addresses them through the permutation: output position `i`
//! receives natural block `pi(i)`. Pure and deterministic in `(s, pi)`;
//! `recombine` is the exact inverse when all blocks are present.

extern crate alloc;
use alloc::vec::Vec;

use crate::bits::BitString;
use crate::extractor::permutation::Permutation;

/// Errors for partition/recombine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodecError {
    /// Block length is zero or does not divide the reading length.
    LengthNotDivisible,
    /// Permutation size disagrees with the block count.
    PermutationMismatch,
    /// A block has the wrong length, or the set is empty.
    MalformedBlocks,
}

/// Slices `s` into permuted l-bit blocks.
pub fn partition(
    s: &BitString,
    pi: &Permutation,
    block_len: usize,
) -> Result<Vec<BitString>, CodecError> {
    if block_len == 0 || s.len() % block_len != 0 {
        return Err(CodecError::LengthNotDivisible);
    }
    let m = s.len() / block_len;
    if pi.len() != m {
        return Err(CodecError::PermutationMismatch);
    }

    let mut blocks = Vec::with_capacity(m);
    for i in 0..m {
        let natural = pi.apply(i);
        blocks.push(s.slice(natural * block_len, block_len));
    }
    Ok(blocks)
}

/// Reassembles the original reading from permuted blocks.
pub fn recombine(blocks: &[BitString], pi: &Permutation) -> Result<BitString, CodecError> {
    if blocks.is_empty() {
        return Err(CodecError::MalformedBlocks);
    }
    if pi.len() != blocks.len() {
        return Err(CodecError::PermutationMismatch);
    }
    let block_len = blocks[0].len();
    if block_len == 0 || blocks.iter().any(|b| b.len() != block_len) {
        return Err(CodecError::MalformedBlocks);
    }

    let mut out = BitString::zeros(blocks.len() * block_len);
    for (i, block) in blocks.iter().enumerate() {
        let natural = pi.apply(i);
        for bit in 0..block_len {
            if block.get(bit) {
                out.set(natural * block_len + bit, true);
            }
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entropy::SeededXof;

    #[test]
    fn test_partition_identity() {
        let s: BitString = "101101011010".parse().unwrap();
        let blocks = partition(&s, &Permutation::identity(3), 4).unwrap();
        assert_eq!(blocks.len(), 3);
        assert_eq!(blocks[0], "1011".parse().unwrap());
        assert_eq!(blocks[1], "0101".parse().unwrap());
        assert_eq!(blocks[2], "1010".parse().unwrap());
    }

    #[test]
    fn test_partition_respects_permutation() {
        let s: BitString = "101101011010".parse().unwrap();
        let mut rng = SeededXof::new(b"codec perm");
        let pi = Permutation::random(3, &mut rng).unwrap();
        let blocks = partition(&s, &pi, 4).unwrap();
        for i in 0..3 {
            assert_eq!(blocks[i], s.slice(pi.apply(i) * 4, 4));
        }
    }

    #[test]
    fn test_recombine_inverts_partition() {
        let mut rng = SeededXof::new(b"codec inverse");
        for (n, l) in [(12usize, 4usize), (64, 8), (30, 5), (7, 7)] {
            let s = BitString::random(n, &mut rng).unwrap();
            let pi = Permutation::random(n / l, &mut rng).unwrap();
            let blocks = partition(&s, &pi, l).unwrap();
            assert_eq!(recombine(&blocks, &pi).unwrap(), s);
        }
    }

    #[test]
    fn test_partition_errors() {
        let s: BitString = "101101011010".parse().unwrap();
        assert_eq!(
            partition(&s, &Permutation::identity(3), 5),
            Err(CodecError::LengthNotDivisible)
        );
        assert_eq!(
            partition(&s, &Permutation::identity(3), 0),
            Err(CodecError::LengthNotDivisible)
        );
        assert_eq!(
            partition(&s, &Permutation::identity(4), 4),
            Err(CodecError::PermutationMismatch)
        );
    }

    #[test]
    fn test_recombine_errors() {
        let blocks = [
            "1011".parse::<BitString>().unwrap(),
            "010".parse::<BitString>().unwrap(),
        ];
        assert_eq!(
            recombine(&blocks, &Permutation::identity(2)),
            Err(CodecError::MalformedBlocks)
        );
        assert_eq!(
            recombine(&[], &Permutation::identity(0)),
            Err(CodecError::MalformedBlocks)
        );
        let ok = ["10".parse::<BitString>().unwrap()];
        assert_eq!(
            recombine(&ok, &Permutation::identity(2)),
            Err(CodecError::PermutationMismatch)
        );
    }
}
