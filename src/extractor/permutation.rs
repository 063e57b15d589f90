//! Secret permutation of block positions.
//!
//! Drawn fresh per enrolment and shipped inside the helper data. The
//! permutation scrambles block addressing only, never block content, so
//! publishing it costs nothing — but reusing one across enrolments would
//! correlate the helper data of different readings, which is why
//! generation always goes through the caller's entropy source.

extern crate alloc;
use alloc::vec::Vec;

use crate::entropy::{uniform_index, EntropyError, EntropySource};

/// A bijection over block indices `{0..m-1}`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Permutation {
    /// Image table: position `i` maps to `map[i]`.
    map: Vec<usize>,
}

impl Permutation {
    /// The identity over `m` indices.
    pub fn identity(m: usize) -> Self {
        Self {
            map: (0..m).collect(),
        }
    }

    /// A uniformly random permutation via Fisher-Yates with
    /// rejection-sampled swap indices.
    pub fn random<R: EntropySource + ?Sized>(m: usize, rng: &mut R) -> Result<Self, EntropyError> {
        let mut map: Vec<usize> = (0..m).collect();
        for i in (1..m).rev() {
            let j = uniform_index(rng, i + 1)?;
            map.swap(i, j);
        }
        Ok(Self { map })
    }

    /// Number of indices.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Image of `index`.
    ///
    /// # Panics
    /// If `index >= len()`.
    pub fn apply(&self, index: usize) -> usize {
        self.map[index]
    }

    /// True when the table is a bijection over `{0..len-1}`. Checked when
    /// helper data arrives from outside.
    pub fn is_valid(&self) -> bool {
        let m = self.map.len();
        let mut seen = alloc::vec![false; m];
        for &image in &self.map {
            if image >= m || seen[image] {
                return false;
            }
            seen[image] = true;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entropy::SeededXof;

    #[test]
    fn test_identity() {
        let p = Permutation::identity(4);
        for i in 0..4 {
            assert_eq!(p.apply(i), i);
        }
        assert!(p.is_valid());
    }

    #[test]
    fn test_random_is_bijection() {
        let mut rng = SeededXof::new(b"perm bijection");
        for m in [1usize, 2, 3, 16, 255] {
            let p = Permutation::random(m, &mut rng).unwrap();
            assert_eq!(p.len(), m);
            assert!(p.is_valid());
        }
    }

    #[test]
    fn test_random_actually_shuffles() {
        // With m = 64 the identity outcome has probability 1/64!.
        let mut rng = SeededXof::new(b"perm shuffles");
        let p = Permutation::random(64, &mut rng).unwrap();
        assert_ne!(p, Permutation::identity(64));
    }

    #[test]
    fn test_is_valid_rejects_broken_tables() {
        let dup = Permutation {
            map: alloc::vec![0, 0, 2],
        };
        assert!(!dup.is_valid());
        let out_of_range = Permutation {
            map: alloc::vec![0, 3],
        };
        assert!(!out_of_range.is_valid());
    }
}
