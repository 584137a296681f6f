//! Seeded hash functions mapping fingerprints to bit indices

use super::fingerprint::{Fingerprint, NULL_FINGERPRINT};
use xxhash_rust::xxh3::xxh3_64_with_seed;

/// Largest supported capacity.
///
/// The legacy arithmetic multiplies the seed by `capacity - 1` in 32-bit
/// two's complement, so `capacity - 1` must fit in an `i32`.
pub const MAX_CAPACITY: usize = 1 << 30;

/// How a hash function turns a fingerprint into an index
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum IndexStrategy {
    /// `abs(seed * (capacity - 1) & (h ^ (h >>> 16)))` in 32-bit arithmetic,
    /// folded into range with `& (capacity - 1)`.
    ///
    /// Bit-compatible with the classic JVM `SimpleHash` construction. The
    /// multiplier is not a clean mask, so outputs of different seeds are
    /// correlated and the raw value can land outside `[0, capacity)`.
    #[default]
    Legacy,
    /// Seeded xxh3 of the fingerprint bytes, masked to the capacity
    Xxh3,
}

/// A single member of a hash family, bound to `(capacity, seed)`
///
/// # Example
///
/// ```
/// use seenset::hash::HashFunction;
///
/// let f = HashFunction::new(1 << 25, 3);
/// assert_eq!(f.index("a"), 97);
/// assert_eq!(f.index(&None::<&str>), 0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct HashFunction {
    capacity: usize,
    seed: i32,
    strategy: IndexStrategy,
}

impl HashFunction {
    /// Create a legacy hash function
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero, not a power of two or exceeds
    /// [`MAX_CAPACITY`], or if `seed` is zero. Use
    /// [`FilterConfig::validate`](crate::membership::FilterConfig::validate)
    /// to get these as a [`ConfigError`](crate::ConfigError) instead.
    pub fn new(capacity: usize, seed: i32) -> Self {
        Self::with_strategy(capacity, seed, IndexStrategy::Legacy)
    }

    /// Create a hash function with an explicit index strategy
    ///
    /// # Panics
    ///
    /// Same conditions as [`new`](Self::new)
    pub fn with_strategy(capacity: usize, seed: i32, strategy: IndexStrategy) -> Self {
        assert!(capacity.is_power_of_two(), "capacity must be a power of two");
        assert!(
            capacity <= MAX_CAPACITY,
            "capacity must not exceed {}",
            MAX_CAPACITY
        );
        assert!(seed != 0, "seed must be non-zero");

        Self {
            capacity,
            seed,
            strategy,
        }
    }

    /// Size of the index space
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Seed differentiating this function from its siblings
    pub fn seed(&self) -> i32 {
        self.seed
    }

    /// Index strategy in use
    pub fn strategy(&self) -> IndexStrategy {
        self.strategy
    }

    /// Index of a value, always in `[0, capacity)`
    #[inline]
    pub fn index<T: Fingerprint + ?Sized>(&self, value: &T) -> usize {
        self.index_of(value.fingerprint())
    }

    /// Index of a precomputed fingerprint, always in `[0, capacity)`
    #[inline]
    pub fn index_of(&self, fingerprint: i32) -> usize {
        let mask = self.capacity - 1;
        match self.strategy {
            IndexStrategy::Legacy => (self.raw_index(fingerprint) as u32 as usize) & mask,
            IndexStrategy::Xxh3 => {
                if fingerprint == NULL_FINGERPRINT {
                    return 0;
                }
                let hash = xxh3_64_with_seed(&fingerprint.to_le_bytes(), self.seed as u32 as u64);
                (hash as usize) & mask
            }
        }
    }

    /// The unreduced legacy index, exactly as the JVM construction computes it
    ///
    /// May be `>= capacity`, and is `i32::MIN` when the masked value is
    /// `i32::MIN` (whose absolute value does not fit). [`index_of`] folds it
    /// into range.
    ///
    /// [`index_of`]: Self::index_of
    pub fn raw_index(&self, fingerprint: i32) -> i32 {
        let spread = fingerprint ^ ((fingerprint as u32) >> 16) as i32;
        let multiplier = self.seed.wrapping_mul(self.capacity as i32 - 1);
        (multiplier & spread).wrapping_abs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CAPACITY: usize = 1 << 25;
    const SEEDS: [i32; 6] = [3, 13, 46, 71, 91, 134];

    #[test]
    fn test_raw_index_matches_jvm() {
        let h = "https://example.com/".fingerprint();
        let raw: Vec<i32> = SEEDS
            .iter()
            .map(|&s| HashFunction::new(CAPACITY, s).raw_index(h))
            .collect();
        assert_eq!(
            raw,
            vec![22578297, 291013745, 291013712, 2124905415, 1856469983, 22578296]
        );
    }

    #[test]
    fn test_out_of_range_raw_is_folded() {
        let f = HashFunction::new(CAPACITY, 13);
        let h = "https://example.com/".fingerprint();
        assert_eq!(f.raw_index(h), 291013745);
        assert_eq!(f.index_of(h), 22578289);
    }

    #[test]
    fn test_min_value_raw_index() {
        // spread == 0x8000_0000, masked by a multiplier with the sign bit set
        let h = 0x8000_8000_u32 as i32;
        let f = HashFunction::new(CAPACITY, 71);
        assert_eq!(f.raw_index(h), i32::MIN);
        assert_eq!(f.index_of(h), 0);
    }

    #[test]
    fn test_small_values_map_directly() {
        let f = HashFunction::new(CAPACITY, 3);
        assert_eq!(f.index(&13423), 13421);
        assert_eq!(f.index("a"), 97);
    }

    #[test]
    fn test_null_maps_to_zero() {
        for strategy in [IndexStrategy::Legacy, IndexStrategy::Xxh3] {
            for &seed in &SEEDS {
                let f = HashFunction::with_strategy(CAPACITY, seed, strategy);
                assert_eq!(f.index(&None::<String>), 0);
                assert_eq!(f.index(&()), 0);
            }
        }
    }

    #[test]
    fn test_index_in_range_for_extremes() {
        let fingerprints = [i32::MIN, i32::MIN + 1, -1, 0, 1, i32::MAX, 0x8000_8000_u32 as i32];
        for capacity in [1, 2, 64, 1024, CAPACITY, MAX_CAPACITY] {
            for strategy in [IndexStrategy::Legacy, IndexStrategy::Xxh3] {
                for &seed in SEEDS.iter().chain([-1, i32::MAX, i32::MIN].iter()) {
                    let f = HashFunction::with_strategy(capacity, seed, strategy);
                    for &h in &fingerprints {
                        assert!(f.index_of(h) < capacity);
                    }
                }
            }
        }
    }

    #[test]
    fn test_xxh3_differs_by_seed() {
        let a = HashFunction::with_strategy(CAPACITY, 3, IndexStrategy::Xxh3);
        let b = HashFunction::with_strategy(CAPACITY, 13, IndexStrategy::Xxh3);
        let differing = (1..1000).filter(|&h| a.index_of(h) != b.index_of(h)).count();
        assert!(differing > 990, "only {} of 999 indices differ", differing);
    }

    #[test]
    #[should_panic(expected = "power of two")]
    fn test_rejects_non_power_of_two() {
        HashFunction::new(1000, 3);
    }

    #[test]
    #[should_panic(expected = "power of two")]
    fn test_rejects_zero_capacity() {
        HashFunction::new(0, 3);
    }

    #[test]
    #[should_panic(expected = "seed must be non-zero")]
    fn test_rejects_zero_seed() {
        HashFunction::with_strategy(CAPACITY, 0, IndexStrategy::Xxh3);
    }
}
