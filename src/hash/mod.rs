//! Hash family: fingerprints, seeded hash functions and their grouping
//!
//! Hashing happens in two steps. A value is first reduced to a 32-bit
//! [`Fingerprint`]; each [`HashFunction`] of a [`HashFamily`] then maps that
//! fingerprint to an index in `[0, capacity)` according to its seed and
//! [`IndexStrategy`].
//!
//! # Example
//!
//! ```
//! use seenset::hash::{Fingerprint, HashFunction};
//!
//! let f = HashFunction::new(1 << 25, 13);
//! let index = f.index_of("https://example.com/".fingerprint());
//! assert!(index < 1 << 25);
//! ```

mod family;
mod fingerprint;
mod function;

pub use family::{HashFamily, Indices};
pub use fingerprint::{Fingerprint, Hashed, NULL_FINGERPRINT};
pub use function::{HashFunction, IndexStrategy, MAX_CAPACITY};
