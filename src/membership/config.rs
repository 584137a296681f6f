//! Filter configuration and builder

use super::BloomFilter;
use crate::hash::{IndexStrategy, MAX_CAPACITY};
use crate::traits::ConfigError;

#[cfg(feature = "std")]
use std::vec::Vec;

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// Default bit array length, 2^25 bits (4 MiB)
pub const DEFAULT_CAPACITY: usize = 1 << 25;

/// Default seeds, one hash function each
pub const DEFAULT_SEEDS: [i32; 6] = [3, 13, 46, 71, 91, 134];

/// Construction parameters of a [`BloomFilter`]
///
/// The default is the reference configuration: [`DEFAULT_CAPACITY`] bits,
/// [`DEFAULT_SEEDS`], [`IndexStrategy::Legacy`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FilterConfig {
    /// Bit array length; a power of two no larger than [`MAX_CAPACITY`]
    pub capacity: usize,
    /// Distinct non-zero seeds, one hash function each
    pub seeds: Vec<i32>,
    /// How fingerprints become indices
    pub strategy: IndexStrategy,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            seeds: DEFAULT_SEEDS.to_vec(),
            strategy: IndexStrategy::default(),
        }
    }
}

impl FilterConfig {
    /// Check the configuration, reporting the first problem found
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        if !self.capacity.is_power_of_two() {
            return Err(ConfigError::CapacityNotPowerOfTwo(self.capacity));
        }
        if self.capacity > MAX_CAPACITY {
            return Err(ConfigError::CapacityTooLarge {
                max: MAX_CAPACITY,
                found: self.capacity,
            });
        }
        if self.seeds.is_empty() {
            return Err(ConfigError::NoSeeds);
        }
        for (position, &seed) in self.seeds.iter().enumerate() {
            if seed == 0 {
                return Err(ConfigError::ZeroSeed { position });
            }
            if let Some(first) = self.seeds[..position].iter().position(|&s| s == seed) {
                return Err(ConfigError::DuplicateSeed {
                    seed,
                    first,
                    second: position,
                });
            }
        }
        Ok(())
    }
}

/// Fluent construction of a [`BloomFilter`]
///
/// # Example
///
/// ```
/// use seenset::hash::IndexStrategy;
/// use seenset::membership::BloomFilterBuilder;
///
/// let filter = BloomFilterBuilder::new()
///     .capacity(1 << 16)
///     .seeds([5, 7, 11])
///     .strategy(IndexStrategy::Xxh3)
///     .build()
///     .unwrap();
/// assert_eq!(filter.num_hashes(), 3);
///
/// assert!(BloomFilterBuilder::new().capacity(1000).build().is_err());
/// ```
#[derive(Clone, Debug, Default)]
pub struct BloomFilterBuilder {
    config: FilterConfig,
}

impl BloomFilterBuilder {
    /// Start from the reference configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the bit array length
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.config.capacity = capacity;
        self
    }

    /// Replace the seed list
    pub fn seeds(mut self, seeds: impl IntoIterator<Item = i32>) -> Self {
        self.config.seeds = seeds.into_iter().collect();
        self
    }

    /// Set the index strategy
    pub fn strategy(mut self, strategy: IndexStrategy) -> Self {
        self.config.strategy = strategy;
        self
    }

    /// The configuration built so far
    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    /// Validate the configuration and allocate the filter
    pub fn build(self) -> Result<BloomFilter, ConfigError> {
        BloomFilter::with_config(self.config)
    }
}
