//! Stable integer fingerprints for hashable values
//!
//! A fingerprint is the 32-bit content hash a value feeds into every hash
//! function of a filter. The built-in implementations reproduce the content
//! hashes of the JVM (`String.hashCode`, `Long.hashCode`, `List.hashCode`, ...)
//! so that a filter built here sets exactly the bits a JVM-side filter with the
//! same capacity and seeds would set.
//!
//! Types that only implement [`core::hash::Hash`] can be wrapped in
//! [`Hashed`], which fingerprints the value's hash stream with xxh3.

use core::hash::{Hash, Hasher};
use xxhash_rust::xxh3::Xxh3;

#[cfg(feature = "std")]
use std::{boxed::Box, rc::Rc, string::String, sync::Arc, vec::Vec};

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(not(feature = "std"))]
use alloc::{boxed::Box, rc::Rc, string::String, sync::Arc, vec::Vec};

/// Fingerprint of the absent value.
///
/// Every hash function maps this fingerprint to index 0.
pub const NULL_FINGERPRINT: i32 = 0;

/// A value that produces a deterministic integer fingerprint
///
/// Equal values must produce equal fingerprints, for the whole lifetime of
/// the process and across processes.
///
/// # Example
///
/// ```
/// use seenset::hash::Fingerprint;
///
/// assert_eq!("a".fingerprint(), 97);
/// assert_eq!(13423_i32.fingerprint(), 13423);
/// assert_eq!(None::<&str>.fingerprint(), 0);
/// ```
pub trait Fingerprint {
    /// Compute the fingerprint of this value
    fn fingerprint(&self) -> i32;
}

impl Fingerprint for str {
    /// Polynomial hash over UTF-16 code units: `h = 31 * h + unit`
    fn fingerprint(&self) -> i32 {
        self.encode_utf16()
            .fold(0i32, |h, unit| h.wrapping_mul(31).wrapping_add(i32::from(unit)))
    }
}

impl Fingerprint for String {
    fn fingerprint(&self) -> i32 {
        self.as_str().fingerprint()
    }
}

macro_rules! impl_fingerprint_narrow {
    ($($t:ty),*) => {
        $(
            impl Fingerprint for $t {
                #[inline]
                fn fingerprint(&self) -> i32 {
                    *self as i32
                }
            }
        )*
    };
}

macro_rules! impl_fingerprint_wide {
    ($($t:ty),*) => {
        $(
            impl Fingerprint for $t {
                #[inline]
                fn fingerprint(&self) -> i32 {
                    fold_u64(*self as u64)
                }
            }
        )*
    };
}

impl_fingerprint_narrow!(i8, i16, i32, u8, u16, u32);
impl_fingerprint_wide!(i64, u64, isize, usize);

/// `(v ^ (v >>> 32))` truncated to 32 bits
#[inline]
fn fold_u64(v: u64) -> i32 {
    (v ^ (v >> 32)) as i32
}

impl Fingerprint for bool {
    fn fingerprint(&self) -> i32 {
        if *self {
            1231
        } else {
            1237
        }
    }
}

impl Fingerprint for char {
    fn fingerprint(&self) -> i32 {
        *self as i32
    }
}

impl Fingerprint for f32 {
    fn fingerprint(&self) -> i32 {
        let bits = if self.is_nan() {
            0x7fc0_0000
        } else {
            self.to_bits()
        };
        bits as i32
    }
}

impl Fingerprint for f64 {
    fn fingerprint(&self) -> i32 {
        let bits = if self.is_nan() {
            0x7ff8_0000_0000_0000
        } else {
            self.to_bits()
        };
        fold_u64(bits)
    }
}

impl Fingerprint for () {
    fn fingerprint(&self) -> i32 {
        NULL_FINGERPRINT
    }
}

impl<T: Fingerprint> Fingerprint for Option<T> {
    fn fingerprint(&self) -> i32 {
        match self {
            Some(value) => value.fingerprint(),
            None => NULL_FINGERPRINT,
        }
    }
}

impl<T: Fingerprint> Fingerprint for [T] {
    fn fingerprint(&self) -> i32 {
        self.iter()
            .fold(1i32, |h, item| h.wrapping_mul(31).wrapping_add(item.fingerprint()))
    }
}

impl<T: Fingerprint, const N: usize> Fingerprint for [T; N] {
    fn fingerprint(&self) -> i32 {
        self.as_slice().fingerprint()
    }
}

impl<T: Fingerprint> Fingerprint for Vec<T> {
    fn fingerprint(&self) -> i32 {
        self.as_slice().fingerprint()
    }
}

impl<T: Fingerprint + ?Sized> Fingerprint for &T {
    fn fingerprint(&self) -> i32 {
        (**self).fingerprint()
    }
}

impl<T: Fingerprint + ?Sized> Fingerprint for Box<T> {
    fn fingerprint(&self) -> i32 {
        (**self).fingerprint()
    }
}

impl<T: Fingerprint + ?Sized> Fingerprint for Rc<T> {
    fn fingerprint(&self) -> i32 {
        (**self).fingerprint()
    }
}

impl<T: Fingerprint + ?Sized> Fingerprint for Arc<T> {
    fn fingerprint(&self) -> i32 {
        (**self).fingerprint()
    }
}

/// Adapter that fingerprints any [`Hash`] value with xxh3
///
/// The value's `Hash` stream is fed to an unseeded xxh3 hasher and the
/// 64-bit digest is folded to 32 bits. Use it for structs, tuples and other
/// types without a native [`Fingerprint`].
///
/// # Example
///
/// ```
/// use seenset::hash::{Fingerprint, Hashed};
///
/// let a = Hashed(("user", 42_u32));
/// let b = Hashed(("user", 42_u32));
/// assert_eq!(a.fingerprint(), b.fingerprint());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Hashed<T>(pub T);

impl<T: Hash> Fingerprint for Hashed<T> {
    fn fingerprint(&self) -> i32 {
        let mut hasher = Xxh3::new();
        self.0.hash(&mut hasher);
        fold_u64(hasher.finish())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_matches_jvm() {
        assert_eq!("".fingerprint(), 0);
        assert_eq!("a".fingerprint(), 97);
        assert_eq!("hello".fingerprint(), 99162322);
        assert_eq!("https://example.com/".fingerprint(), -1856498399);
        assert_eq!("https://example.org/".fingerprint(), -1856138210);
        assert_eq!(String::from("hello").fingerprint(), 99162322);
    }

    #[test]
    fn test_string_uses_utf16_units() {
        // U+1F600 is the surrogate pair D83D DE00
        assert_eq!("\u{1F600}".fingerprint(), 0xD83D * 31 + 0xDE00);
    }

    #[test]
    fn test_integers() {
        assert_eq!(13423_i32.fingerprint(), 13423);
        assert_eq!((-7_i8).fingerprint(), -7);
        assert_eq!(u32::MAX.fingerprint(), -1);
        assert_eq!((1_i64 << 32).fingerprint(), 1);
        assert_eq!((-1_i64).fingerprint(), 0);
        assert_eq!(42_u64.fingerprint(), 42);
        assert_eq!(42_usize.fingerprint(), 42_u64.fingerprint());
    }

    #[test]
    fn test_scalars() {
        assert_eq!(true.fingerprint(), 1231);
        assert_eq!(false.fingerprint(), 1237);
        assert_eq!('a'.fingerprint(), 97);
        assert_eq!(1.0_f32.fingerprint(), 0x3f80_0000);
        assert_eq!(f64::NAN.fingerprint(), (-f64::NAN).fingerprint());
        assert_ne!(0.0_f64.fingerprint(), (-0.0_f64).fingerprint());
    }

    #[test]
    fn test_absent_values() {
        assert_eq!(().fingerprint(), NULL_FINGERPRINT);
        assert_eq!(None::<i32>.fingerprint(), NULL_FINGERPRINT);
        assert_eq!(Some("a").fingerprint(), 97);
    }

    #[test]
    fn test_sequences() {
        assert_eq!([1_i32, 2, 3].fingerprint(), 30817);
        assert_eq!(vec![1_i32, 2, 3].fingerprint(), 30817);
        assert_eq!(Vec::<i32>::new().fingerprint(), 1);
    }

    #[test]
    fn test_smart_pointers_delegate() {
        let expected = "abc".fingerprint();
        assert_eq!(Box::<str>::from("abc").fingerprint(), expected);
        assert_eq!(Rc::<str>::from("abc").fingerprint(), expected);
        assert_eq!(Arc::<str>::from("abc").fingerprint(), expected);
        assert_eq!((&&"abc").fingerprint(), expected);
    }

    #[test]
    fn test_hashed_is_content_based() {
        let a = Hashed((String::from("x"), 1_u8));
        let b = Hashed((String::from("x"), 1_u8));
        let c = Hashed((String::from("x"), 2_u8));
        assert_eq!(a.fingerprint(), b.fingerprint());
        assert_ne!(a.fingerprint(), c.fingerprint());
    }
}
