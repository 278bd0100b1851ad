//! Auxiliary functions.

use crate::common::consts::NEG_POW10;
use crate::common::consts::NEG_POW10_MAX;
use crate::common::consts::POW10;
use crate::common::consts::POW10_MAX;
use crate::defs::Magnitude;

/// Returns `10^n` for `0 <= n <= 308`, and infinity for larger `n`.
#[inline]
pub fn pow10(n: usize) -> f64 {
    if n <= POW10_MAX {
        POW10[n]
    } else {
        f64::INFINITY
    }
}

/// Returns `10^-n` for `0 <= n <= 323`, and zero for larger `n`.
#[inline]
pub fn neg_pow10(n: usize) -> f64 {
    if n <= NEG_POW10_MAX {
        NEG_POW10[n]
    } else {
        0.0
    }
}

/// Integer part of the decimal logarithm of a finite positive number.
#[inline]
pub fn floor_log10(a: f64) -> Magnitude {
    debug_assert!(a > 0.0 && a.is_finite());
    a.log10().floor() as Magnitude
}

/// Multiplies `f` by `10^n`.
/// Shifts beyond the table are applied in two steps, which matters for subnormal `f`.
pub fn scale_up(f: f64, n: usize) -> f64 {
    if n <= POW10_MAX {
        f * POW10[n]
    } else {
        f * POW10[POW10_MAX] * pow10(n - POW10_MAX)
    }
}

/// Divides `f` by `10^n`.
pub fn scale_down(f: f64, n: usize) -> f64 {
    if n <= POW10_MAX {
        f / POW10[n]
    } else {
        f / POW10[POW10_MAX] * neg_pow10(n - POW10_MAX)
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_util() {
        assert_eq!(pow10(3), 1000.0);
        assert!(pow10(309).is_infinite());
        assert_eq!(neg_pow10(3), 0.001);
        assert_eq!(neg_pow10(324), 0.0);

        assert_eq!(floor_log10(1.0), 0);
        assert_eq!(floor_log10(9.99), 0);
        assert_eq!(floor_log10(10.0), 1);
        assert_eq!(floor_log10(57000.0), 4);
        assert_eq!(floor_log10(0.5), -1);
        assert_eq!(floor_log10(0.001), -3);
        assert_eq!(floor_log10(f64::MAX), 308);
        assert_eq!(floor_log10(5e-324), -324);

        assert_eq!(scale_up(5.7, 4), 57000.0);
        assert_eq!(scale_down(57000.0, 4), 5.7);
        let sub = scale_up(5e-324, 323);
        assert!(sub > 0.4 && sub < 0.6);
        let sub = scale_up(5e-324, 324);
        assert!(sub > 4.0 && sub < 6.0);
        assert!(scale_down(1e300, 310) > 9e-11 && scale_down(1e300, 310) < 1.1e-10);
    }
}
