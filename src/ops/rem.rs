//! Remainder of division.

use crate::num::Real;
use crate::num::NAN;
use crate::num::ZERO;

/// Mantissas scaled by this value are integers below 2^56.
const MANTISSA_SCALE: f64 = 4503599627370496.0;

impl Real {
    /// Returns the remainder of division of `self` by `d2`.
    /// The result has the sign of `self` and is smaller than `d2` in absolute value.
    pub fn rem(&self, d2: &Self) -> Self {
        if self.is_nan() || d2.is_nan() || self.is_inf() || d2.is_zero() {
            return NAN;
        }

        if d2.is_inf() || self.is_zero() {
            return *self;
        }

        let d = d2.abs();
        let r = self.abs();

        if r < d {
            return *self;
        }

        // with u = 2^-52 * 10^d.e, r = a * 10^gap * u and d = b * u for integers a and b,
        // so r mod d = (a * 10^gap mod b) * u.
        let a = (r.m * MANTISSA_SCALE) as u64;
        let b = (d.m * MANTISSA_SCALE) as u64;
        let gap = (r.e - d.e) as u64;

        let mut m = (a as u128 % b as u128) * pow10_mod(gap, b) as u128 % b as u128;

        // truncate to 53 bits so the conversion to f64 cannot round up to b.
        let bits = 128 - m.leading_zeros();
        if bits > 53 {
            m = m >> (bits - 53) << (bits - 53);
        }

        let ret = Self::rectify_flush(m as f64 / MANTISSA_SCALE, d.e);

        if self.is_negative() {
            ret.inv_sign()
        } else {
            ret
        }
    }
}

// Returns 10^n mod b.
fn pow10_mod(mut n: u64, b: u64) -> u64 {
    let b = b as u128;
    let mut base = 10 % b;
    let mut ret = 1 % b;

    while n > 0 {
        if n & 1 == 1 {
            ret = ret * base % b;
        }
        base = base * base % b;
        n >>= 1;
    }

    ret as u64
}
