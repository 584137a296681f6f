//! Ordered family of hash functions sharing one capacity

use super::fingerprint::Fingerprint;
use super::function::{HashFunction, IndexStrategy};
use core::iter::FusedIterator;
use core::slice;

#[cfg(feature = "std")]
use std::vec::Vec;

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// `k` hash functions, one per seed, all bound to the same capacity
///
/// # Example
///
/// ```
/// use seenset::hash::{HashFamily, IndexStrategy};
///
/// let family = HashFamily::new(1 << 25, &[3, 13, 46], IndexStrategy::Legacy);
/// let indices: Vec<usize> = family.indices("a").collect();
/// assert_eq!(indices, vec![97, 97, 64]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HashFamily {
    capacity: usize,
    strategy: IndexStrategy,
    functions: Vec<HashFunction>,
}

impl HashFamily {
    /// Build one function per seed, in seed order
    ///
    /// # Panics
    ///
    /// Panics if `seeds` is empty or repeats a seed, or on any condition
    /// [`HashFunction::new`] panics on. Use
    /// [`FilterConfig::validate`](crate::membership::FilterConfig::validate)
    /// to get these as a [`ConfigError`](crate::ConfigError) instead.
    pub fn new(capacity: usize, seeds: &[i32], strategy: IndexStrategy) -> Self {
        assert!(!seeds.is_empty(), "at least one seed is required");
        for (position, seed) in seeds.iter().enumerate() {
            assert!(
                !seeds[..position].contains(seed),
                "duplicate seed {}",
                seed
            );
        }

        let functions = seeds
            .iter()
            .map(|&seed| HashFunction::with_strategy(capacity, seed, strategy))
            .collect();

        Self {
            capacity,
            strategy,
            functions,
        }
    }

    /// Indices of a value under every function, in seed order
    ///
    /// The fingerprint is computed once and shared by all functions.
    #[inline]
    pub fn indices<T: Fingerprint + ?Sized>(&self, value: &T) -> Indices<'_> {
        self.indices_of(value.fingerprint())
    }

    /// Indices of a precomputed fingerprint, in seed order
    #[inline]
    pub fn indices_of(&self, fingerprint: i32) -> Indices<'_> {
        Indices {
            functions: self.functions.iter(),
            fingerprint,
        }
    }

    /// Number of functions (k)
    pub fn len(&self) -> usize {
        self.functions.len()
    }

    /// True if the family has no functions
    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    /// Shared index space of all functions
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Index strategy shared by all functions
    pub fn strategy(&self) -> IndexStrategy {
        self.strategy
    }

    /// Seeds in construction order
    pub fn seeds(&self) -> impl Iterator<Item = i32> + '_ {
        self.functions.iter().map(HashFunction::seed)
    }

    /// The functions themselves
    pub fn functions(&self) -> &[HashFunction] {
        &self.functions
    }
}

/// Iterator over the indices of one fingerprint, see [`HashFamily::indices`]
#[derive(Clone, Debug)]
pub struct Indices<'a> {
    functions: slice::Iter<'a, HashFunction>,
    fingerprint: i32,
}

impl Iterator for Indices<'_> {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<usize> {
        self.functions.next().map(|f| f.index_of(self.fingerprint))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.functions.size_hint()
    }
}

impl ExactSizeIterator for Indices<'_> {}

impl FusedIterator for Indices<'_> {}
