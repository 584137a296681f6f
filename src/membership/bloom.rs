//! Bloom filter for probabilistic set membership
//!
//! A Bloom filter is a space-efficient probabilistic data structure that tests
//! whether an element is a member of a set. False positives are possible, but
//! false negatives are not.

use super::bits::BitArray;
use super::config::{BloomFilterBuilder, FilterConfig};
use crate::hash::{Fingerprint, HashFamily, IndexStrategy};
use crate::math;
use crate::traits::{ConfigError, MembershipFilter};

/// Fingerprints queried by the legacy false positive estimate
pub const FPP_SAMPLES: usize = 16_384;

/// Start state of the xorshift sequence behind the sampled estimate
const SAMPLE_SEED: u32 = 0x2545_f491;

/// Fixed-capacity Bloom filter
///
/// Owns a bit array of `capacity` bits and one hash function per seed. Every
/// function shares the array's capacity, so each index it produces is a valid
/// bit position.
///
/// # Example
///
/// ```
/// use seenset::membership::BloomFilter;
///
/// // 2^25 bits, seeds {3, 13, 46, 71, 91, 134}
/// let mut filter = BloomFilter::new();
///
/// filter.insert("https://example.com/");
/// filter.insert(&13423);
///
/// assert!(filter.query("https://example.com/")); // true - definitely inserted
/// assert!(filter.query(&13423));
/// assert!(!filter.query("https://example.org/")); // false - never inserted
/// ```
///
/// # False Positive Rate
///
/// The capacity and number of hash functions are fixed, so the false positive
/// rate grows with every distinct value inserted. See
/// [`estimated_false_positive_rate`](Self::estimated_false_positive_rate).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BloomFilter {
    /// Bit array
    bits: BitArray,
    /// Hash functions, all bound to `bits.len()`
    hashers: HashFamily,
}

impl BloomFilter {
    /// Create a filter with the reference configuration
    ///
    /// See [`FilterConfig::default`].
    pub fn new() -> Self {
        Self::from_valid(&FilterConfig::default())
    }

    /// Create a filter from an explicit configuration
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the capacity is not a supported power of
    /// two, or the seeds are empty, zero or repeated.
    pub fn with_config(config: FilterConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_valid(&config))
    }

    /// Start a [`BloomFilterBuilder`] from the reference configuration
    pub fn builder() -> BloomFilterBuilder {
        BloomFilterBuilder::new()
    }

    fn from_valid(config: &FilterConfig) -> Self {
        tracing::debug!(
            capacity = config.capacity,
            num_hashes = config.seeds.len(),
            strategy = ?config.strategy,
            "allocating bloom filter"
        );

        Self {
            bits: BitArray::new(config.capacity),
            hashers: HashFamily::new(config.capacity, &config.seeds, config.strategy),
        }
    }

    /// Insert a value into the filter
    ///
    /// Sets the bit at each hash function's index. Inserting the same value
    /// again changes nothing.
    pub fn insert<T: Fingerprint + ?Sized>(&mut self, value: &T) {
        for index in self.hashers.indices(value) {
            self.bits.set(index);
        }
    }

    /// Check if a value might be in the filter
    ///
    /// Returns `true` if the value might be in the set (possibly a false
    /// positive), or `false` if it is definitely not in the set.
    #[doc(alias = "contains")]
    pub fn query<T: Fingerprint + ?Sized>(&self, value: &T) -> bool {
        self.hashers.indices(value).all(|index| self.bits.get(index))
    }

    /// Insert the absent value
    pub fn insert_null(&mut self) {
        self.insert(&None::<()>);
    }

    /// Check the absent value
    pub fn query_null(&self) -> bool {
        self.query(&None::<()>)
    }

    /// Get the number of bits in the filter
    pub fn capacity(&self) -> usize {
        self.bits.len()
    }

    /// Get the number of hash functions
    pub fn num_hashes(&self) -> usize {
        self.hashers.len()
    }

    /// Seeds of the hash functions, in order
    pub fn seeds(&self) -> impl Iterator<Item = i32> + '_ {
        self.hashers.seeds()
    }

    /// Index strategy of the hash functions
    pub fn strategy(&self) -> IndexStrategy {
        self.hashers.strategy()
    }

    /// The hash family
    pub fn hashers(&self) -> &HashFamily {
        &self.hashers
    }

    /// The underlying bit array
    pub fn bits(&self) -> &BitArray {
        &self.bits
    }

    /// Get the number of bits set to 1
    pub fn bits_set(&self) -> usize {
        self.bits.count_ones()
    }

    /// Fraction of bits set to 1
    pub fn fill_ratio(&self) -> f64 {
        self.bits_set() as f64 / self.capacity() as f64
    }

    /// True if no bit is set
    pub fn is_empty(&self) -> bool {
        self.bits_set() == 0
    }

    /// Estimate the current false positive rate
    ///
    /// Under [`IndexStrategy::Xxh3`] the hash functions behave independently
    /// and the rate is `fill_ratio ^ k`.
    ///
    /// Under [`IndexStrategy::Legacy`] that formula is off by many orders of
    /// magnitude: seeds share indices and the indices of one value are
    /// correlated. The rate is instead measured by querying a fixed sequence
    /// of [`FPP_SAMPLES`] pseudo-random fingerprints against the bit array,
    /// floored at `fill_ratio ^ k`. The result is deterministic for a given
    /// bit array and resolves rates down to about `1 / FPP_SAMPLES`.
    pub fn estimated_false_positive_rate(&self) -> f64 {
        let independent = math::powi(self.fill_ratio(), self.num_hashes() as i32);
        match self.strategy() {
            IndexStrategy::Xxh3 => independent,
            IndexStrategy::Legacy => self.sampled_false_positive_rate().max(independent),
        }
    }

    /// Fraction of [`FPP_SAMPLES`] xorshift fingerprints that query true
    fn sampled_false_positive_rate(&self) -> f64 {
        if self.is_empty() {
            return 0.0;
        }

        let mut state = SAMPLE_SEED;
        let hits = (0..FPP_SAMPLES)
            .filter(|_| {
                state ^= state << 13;
                state ^= state >> 17;
                state ^= state << 5;
                self.hashers
                    .indices_of(state as i32)
                    .all(|index| self.bits.get(index))
            })
            .count();

        hits as f64 / FPP_SAMPLES as f64
    }

    /// Estimate the number of distinct values inserted
    ///
    /// Uses the fill ratio: `n ≈ -m/k * ln(1 - X/m)` where X is bits set.
    /// Assumes independent hash functions, so it underestimates under
    /// [`IndexStrategy::Legacy`], whose seeds often agree on an index.
    pub fn estimated_count(&self) -> f64 {
        let bits_set = self.bits_set() as f64;
        let m = self.capacity() as f64;
        let k = self.num_hashes() as f64;

        if bits_set >= m {
            return f64::INFINITY;
        }

        -(m / k) * math::ln_1p(-bits_set / m)
    }

    /// Memory usage in bytes
    pub fn size_bytes(&self) -> usize {
        core::mem::size_of::<Self>()
            + self.bits.size_bytes()
            + self.hashers.len() * core::mem::size_of::<crate::hash::HashFunction>()
    }
}

impl Default for BloomFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl MembershipFilter for BloomFilter {
    fn insert<T: Fingerprint + ?Sized>(&mut self, value: &T) {
        self.insert(value);
    }

    fn query<T: Fingerprint + ?Sized>(&self, value: &T) -> bool {
        self.query(value)
    }

    fn capacity(&self) -> usize {
        self.capacity()
    }

    fn num_hashes(&self) -> usize {
        self.num_hashes()
    }

    fn bits_set(&self) -> usize {
        self.bits_set()
    }

    fn false_positive_rate(&self) -> f64 {
        self.estimated_false_positive_rate()
    }
}
