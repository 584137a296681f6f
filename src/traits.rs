//! Core traits and errors for membership filters
//!
//! Filters implement [`MembershipFilter`]; construction problems are reported
//! as [`ConfigError`]. Once built, no filter operation can fail.

use crate::hash::Fingerprint;
use crate::math;
use core::fmt::Debug;

/// Error raised when a filter configuration is rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Capacity of zero bits
    ZeroCapacity,
    /// Capacity is not a power of two
    CapacityNotPowerOfTwo(usize),
    /// Capacity exceeds the supported maximum
    CapacityTooLarge { max: usize, found: usize },
    /// No seeds, so no hash functions
    NoSeeds,
    /// A zero seed sends every value to index 0
    ZeroSeed { position: usize },
    /// The same seed appears twice
    DuplicateSeed {
        seed: i32,
        first: usize,
        second: usize,
    },
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::ZeroCapacity => write!(f, "capacity must be positive"),
            ConfigError::CapacityNotPowerOfTwo(found) => {
                write!(f, "capacity must be a power of two, found {}", found)
            }
            ConfigError::CapacityTooLarge { max, found } => {
                write!(f, "capacity too large: max {}, found {}", max, found)
            }
            ConfigError::NoSeeds => write!(f, "at least one seed is required"),
            ConfigError::ZeroSeed { position } => {
                write!(f, "seed at position {} is zero", position)
            }
            ConfigError::DuplicateSeed {
                seed,
                first,
                second,
            } => write!(
                f,
                "duplicate seed {} at positions {} and {}",
                seed, first, second
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

/// Approximate set membership
///
/// - `query` returning `false` means the value was definitely never inserted
/// - `query` returning `true` means it might have been (possible false positive)
pub trait MembershipFilter: Clone + Debug {
    /// Record a value as seen
    fn insert<T: Fingerprint + ?Sized>(&mut self, value: &T);

    /// Test whether a value might have been inserted
    fn query<T: Fingerprint + ?Sized>(&self, value: &T) -> bool;

    /// Number of bits (m)
    fn capacity(&self) -> usize;

    /// Number of hash functions (k)
    fn num_hashes(&self) -> usize;

    /// Number of bits currently set
    fn bits_set(&self) -> usize;

    /// Fraction of bits set, in `[0, 1]`
    fn fill_ratio(&self) -> f64 {
        self.bits_set() as f64 / self.capacity() as f64
    }

    /// Probability that a value never inserted queries true, given the
    /// current fill
    ///
    /// The default `fill_ratio ^ k` holds only for independent hash
    /// functions; implementations with correlated indices must override it.
    fn false_positive_rate(&self) -> f64 {
        math::powi(self.fill_ratio(), self.num_hashes() as i32)
    }

    /// True if nothing has been inserted yet
    fn is_empty(&self) -> bool {
        self.bits_set() == 0
    }
}
