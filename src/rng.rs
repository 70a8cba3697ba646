//! Cryptographically secure uniform sampling.
//!
//! Every random decision in the crate flows through [`RandomSource`]. The
//! `CryptoRng` bound makes it impossible to plug in a non-cryptographic
//! generator.

use rand::rngs::OsRng;
use rand::{CryptoRng, Rng};

use crate::{Error, Result};

/// Uniform integer sampling, element choice and shuffling over a CSPRNG.
pub struct RandomSource<R = OsRng> {
    rng: R,
}

impl RandomSource<OsRng> {
    /// A source backed by the operating system generator.
    pub fn new() -> Self {
        Self { rng: OsRng }
    }
}

impl Default for RandomSource<OsRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng + CryptoRng> RandomSource<R> {
    /// Wraps an existing cryptographically secure generator.
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Returns an integer uniformly distributed over `[0, n)`.
    pub fn uniform_int(&mut self, n: usize) -> Result<usize> {
        if n == 0 {
            return Err(Error::Range);
        }
        Ok(self.rng.gen_range(0..n))
    }

    /// Returns a uniformly random element of `items`.
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Result<&'a T> {
        if items.is_empty() {
            return Err(Error::EmptyInput);
        }
        let index = self.uniform_int(items.len())?;
        Ok(&items[index])
    }

    /// Unbiased in-place Fisher-Yates permutation.
    pub fn shuffle<T>(&mut self, items: &mut [T]) -> Result<()> {
        for i in (1..items.len()).rev() {
            let j = self.uniform_int(i + 1)?;
            items.swap(i, j);
        }
        Ok(())
    }

    /// Draws `k` pairwise-distinct indices uniformly from `0..n` without
    /// replacement (partial Fisher-Yates). Returns fewer than `k` indices
    /// only if the caller asked for more than `n`.
    pub fn distinct_indices(&mut self, n: usize, k: usize) -> Result<Vec<usize>> {
        if n == 0 {
            return Err(Error::EmptyInput);
        }
        let take = k.min(n);
        let mut pool: Vec<usize> = (0..n).collect();
        for i in 0..take {
            let j = i + self.uniform_int(n - i)?;
            pool.swap(i, j);
        }
        pool.truncate(take);
        Ok(pool)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_uniform_int_zero_bound() {
        let mut rng = RandomSource::new();
        assert!(matches!(rng.uniform_int(0), Err(Error::Range)));
    }

    #[test]
    fn test_uniform_int_in_range() {
        let mut rng = RandomSource::new();
        for _ in 0..100 {
            let v = rng.uniform_int(7).unwrap();
            assert!(v < 7);
        }
    }

    #[test]
    fn test_uniform_int_single_value() {
        let mut rng = RandomSource::new();
        assert_eq!(rng.uniform_int(1).unwrap(), 0);
    }

    #[test]
    fn test_choose_empty() {
        let mut rng = RandomSource::new();
        let empty: Vec<u8> = Vec::new();
        assert!(matches!(rng.choose(&empty), Err(Error::EmptyInput)));
    }

    #[test]
    fn test_choose_member() {
        let mut rng = RandomSource::new();
        let items = ['a', 'b', 'c'];
        for _ in 0..50 {
            let c = rng.choose(&items).unwrap();
            assert!(items.contains(c));
        }
    }

    #[test]
    fn test_shuffle_preserves_elements() {
        let mut rng = RandomSource::new();
        let mut items: Vec<u32> = (0..32).collect();
        rng.shuffle(&mut items).unwrap();
        let mut sorted = items.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..32).collect::<Vec<u32>>());
    }

    #[test]
    fn test_shuffle_empty_and_single() {
        let mut rng = RandomSource::new();
        let mut empty: Vec<u8> = Vec::new();
        rng.shuffle(&mut empty).unwrap();
        let mut single = vec![9];
        rng.shuffle(&mut single).unwrap();
        assert_eq!(single, vec![9]);
    }

    #[test]
    fn test_distinct_indices_are_distinct() {
        let mut rng = RandomSource::new();
        for _ in 0..20 {
            let picked = rng.distinct_indices(10, 6).unwrap();
            assert_eq!(picked.len(), 6);
            let unique: HashSet<usize> = picked.iter().copied().collect();
            assert_eq!(unique.len(), 6);
            assert!(picked.iter().all(|&i| i < 10));
        }
    }

    #[test]
    fn test_distinct_indices_caps_at_population() {
        let mut rng = RandomSource::new();
        let picked = rng.distinct_indices(3, 10).unwrap();
        assert_eq!(picked.len(), 3);
    }

    #[test]
    fn test_distinct_indices_empty_population() {
        let mut rng = RandomSource::new();
        assert!(matches!(rng.distinct_indices(0, 1), Err(Error::EmptyInput)));
    }
}
