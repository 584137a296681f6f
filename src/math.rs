//! Float helpers for the filter statistics
//!
//! Uses standard library math when available, falls back to libm for no_std.

/// `ln(1 + x)`, precise for small `x`
#[inline]
pub(crate) fn ln_1p(x: f64) -> f64 {
    #[cfg(feature = "std")]
    {
        x.ln_1p()
    }
    #[cfg(not(feature = "std"))]
    {
        libm::log1p(x)
    }
}

#[inline]
pub(crate) fn powi(x: f64, n: i32) -> f64 {
    #[cfg(feature = "std")]
    {
        x.powi(n)
    }
    #[cfg(not(feature = "std"))]
    {
        libm::pow(x, f64::from(n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ln_1p() {
        assert_eq!(ln_1p(0.0), 0.0);
        assert!((ln_1p(core::f64::consts::E - 1.0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_powi() {
        assert_eq!(powi(0.5, 3), 0.125);
        assert_eq!(powi(0.0, 6), 0.0);
    }
}
