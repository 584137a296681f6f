//! # Seenset
//!
//! Fixed-capacity approximate membership for Rust.
//!
//! Seenset answers "have I seen this value before?" with no false negatives
//! and a bounded false positive rate, using a fixed-size bit array and a small
//! family of seeded hash functions.
//!
//! ## Features
//!
//! - **Membership**: [`BloomFilter`] with `insert` and `query`
//! - **Stable fingerprints**: values hash exactly as JVM `hashCode` does, so
//!   filters are bit-compatible with JVM-side filters of the same shape
//! - **Configurable**: capacity, seeds and index strategy are constructor
//!   parameters with documented defaults
//! - **Statistics**: fill ratio, estimated false positive rate and estimated
//!   distinct count
//!
//! ## Quick Start
//!
//! ```rust
//! use seenset::prelude::*;
//!
//! // 2^25 bits, six hash functions
//! let mut seen = BloomFilter::new();
//! for url in ["https://example.com/", "https://example.net/"] {
//!     seen.insert(url);
//! }
//!
//! assert!(seen.query("https://example.com/"));
//! assert!(!seen.query("https://example.org/"));
//! ```
//!
//! ## Custom configuration
//!
//! ```rust
//! use seenset::hash::{Hashed, IndexStrategy};
//! use seenset::membership::BloomFilter;
//!
//! let mut filter = BloomFilter::builder()
//!     .capacity(1 << 20)
//!     .seeds([5, 7, 11, 13])
//!     .strategy(IndexStrategy::Xxh3)
//!     .build()
//!     .unwrap();
//!
//! filter.insert(&Hashed(("tenant-a", 42_u64)));
//! assert!(filter.query(&Hashed(("tenant-a", 42_u64))));
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Standard library support
//! - `serde`: Serialize and deserialize [`FilterConfig`](membership::FilterConfig)

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(not(feature = "std"))]
extern crate alloc;

mod math;

// Core traits always available
pub mod traits;

pub mod hash;
pub mod membership;

pub mod prelude {
    pub use crate::hash::{Fingerprint, Hashed, IndexStrategy};
    pub use crate::membership::{BloomFilter, BloomFilterBuilder, FilterConfig};
    pub use crate::traits::*;
}

pub use membership::BloomFilter;
pub use traits::ConfigError;
