//! Fixed-length bit storage backed by `u64` words

use core::fmt;

#[cfg(feature = "std")]
use std::vec::Vec;

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(not(feature = "std"))]
use alloc::{vec, vec::Vec};

/// `len` bits, all initially clear
///
/// The length is fixed at construction. Bits can be set but never cleared.
#[derive(Clone, PartialEq, Eq)]
pub struct BitArray {
    words: Vec<u64>,
    len: usize,
}

impl BitArray {
    /// Allocate `len` clear bits
    pub fn new(len: usize) -> Self {
        Self {
            words: vec![0u64; len.div_ceil(64)],
            len,
        }
    }

    /// Number of bits
    pub fn len(&self) -> usize {
        self.len
    }

    /// True if the array holds no bits at all
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Read the bit at `index`
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`
    #[inline]
    pub fn get(&self, index: usize) -> bool {
        assert!(index < self.len, "bit index {} out of range {}", index, self.len);
        self.words[index / 64] & (1u64 << (index % 64)) != 0
    }

    /// Set the bit at `index`, returning true if it was previously clear
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`
    #[inline]
    pub fn set(&mut self, index: usize) -> bool {
        assert!(index < self.len, "bit index {} out of range {}", index, self.len);
        let word = &mut self.words[index / 64];
        let mask = 1u64 << (index % 64);
        let was_clear = *word & mask == 0;
        *word |= mask;
        was_clear
    }

    /// Number of set bits
    pub fn count_ones(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Positions of the set bits, ascending
    pub fn iter_ones(&self) -> impl Iterator<Item = usize> + '_ {
        self.words.iter().enumerate().flat_map(|(i, &word)| {
            let mut rest = word;
            core::iter::from_fn(move || {
                if rest == 0 {
                    return None;
                }
                let bit = rest.trailing_zeros() as usize;
                rest &= rest - 1;
                Some(i * 64 + bit)
            })
        })
    }

    /// Backing words, least significant bit first
    pub fn as_words(&self) -> &[u64] {
        &self.words
    }

    /// Heap memory used by the words
    pub fn size_bytes(&self) -> usize {
        self.words.len() * 8
    }
}

impl fmt::Debug for BitArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BitArray")
            .field("len", &self.len)
            .field("ones", &self.count_ones())
            .finish()
    }
}
