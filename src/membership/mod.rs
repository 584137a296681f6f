//! Membership testing data structures
//!
//! This module provides a fixed-capacity Bloom filter for testing set
//! membership. It trades a small probability of false positives for
//! significant space savings compared to an exact set representation.
//!
//! # Example
//!
//! ```
//! use seenset::membership::BloomFilter;
//!
//! let mut filter = BloomFilter::new();
//! filter.insert("hello");
//! assert!(filter.query("hello"));
//! ```

mod bits;
mod bloom;
mod config;

pub use bits::BitArray;
pub use bloom::{BloomFilter, FPP_SAMPLES};
pub use config::{BloomFilterBuilder, FilterConfig, DEFAULT_CAPACITY, DEFAULT_SEEDS};
