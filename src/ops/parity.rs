//! Parity of a number used as an exponent of a negative base.

use crate::common::buf::DigitBuf;
use crate::defs::Magnitude;
use crate::defs::Parity;
use crate::defs::PARITY_MAGNITUDE_LIMIT;
use crate::num::Real;

/// Numbers whose mantissa has fewer significant digits are not treated as rounded repeating fractions.
const REPEATING_MIN_DIGITS: usize = 15;

/// The largest denominator of a recovered fraction.
const CF_MAX_DENOMINATOR: i64 = 1 << 20;

/// The largest number of continued fraction terms.
const CF_MAX_TERMS: usize = 40;

impl Real {
    /// Classifies the number as an exponent of a negative base.
    ///
    /// Integers are `Even` or `Odd`. A fraction `p/q` in lowest terms is `Even` or `Odd` by `p` when `q` is odd,
    /// and `NonParity` when `q` is even. Numbers with a magnitude above `PARITY_MAGNITUDE_LIMIT` are `Even`.
    /// Numbers with a magnitude below the negated limit, NaN and infinities are `NonParity`.
    ///
    /// Mantissas rounded from repeating fractions, like `1/3`, are recognized when the fraction has a small denominator.
    pub fn parity(&self) -> Parity {
        if !self.is_finite() {
            return Parity::NonParity;
        }

        if self.is_zero() {
            return Parity::Even;
        }

        if self.e > PARITY_MAGNITUDE_LIMIT {
            return Parity::Even;
        }

        if self.e < -PARITY_MAGNITUDE_LIMIT {
            return Parity::NonParity;
        }

        let (digits, _) = DigitBuf::from_f64(self.m);

        let n = match digits.to_u64() {
            Some(n) => n,
            None => return Parity::NonParity,
        };

        // the value is n * 10^scale.
        let scale = self.e - (digits.len() as Magnitude - 1);

        if scale > 0 {
            return Parity::Even;
        }

        let (n, twos) = Self::reduce_decimal_fraction(n, -scale);

        if twos == 0 {
            return Self::parity_of(n);
        }

        if digits.len() >= REPEATING_MIN_DIGITS {
            if let Some((p, q)) = Self::rational_approx(self.to_f64()) {
                if q % 2 == 1 {
                    return Self::parity_of(p as u64);
                }
            }
        }

        Parity::NonParity
    }

    #[inline]
    fn parity_of(n: u64) -> Parity {
        if n % 2 == 0 {
            Parity::Even
        } else {
            Parity::Odd
        }
    }

    // Removes common factors of n and 10^k.
    // Returns the reduced numerator and the number of factors 2 left in the denominator.
    fn reduce_decimal_fraction(mut n: u64, k: Magnitude) -> (u64, Magnitude) {
        let mut twos = k;
        let mut fives = k;

        while twos > 0 && n % 2 == 0 {
            n /= 2;
            twos -= 1;
        }

        while fives > 0 && n % 5 == 0 {
            n /= 5;
            fives -= 1;
        }

        (n, twos)
    }

    // Finds a fraction p/q with a bounded denominator equal to |x| within a few ulps,
    // using continued fraction expansion.
    fn rational_approx(x: f64) -> Option<(i64, i64)> {
        let x = x.abs();
        let tol = x * 4.0 * f64::EPSILON;

        let (mut p0, mut q0) = (0i64, 1i64);
        let (mut p1, mut q1) = (1i64, 0i64);
        let mut r = x;

        for _ in 0..CF_MAX_TERMS {
            let a = r.floor();

            if a > CF_MAX_DENOMINATOR as f64 * 2.0 {
                return None;
            }

            let a = a as i64;
            let p2 = a.checked_mul(p1)?.checked_add(p0)?;
            let q2 = a.checked_mul(q1)?.checked_add(q0)?;

            if q2 > CF_MAX_DENOMINATOR {
                return None;
            }

            if (x - p2 as f64 / q2 as f64).abs() <= tol {
                return Some((p2, q2));
            }

            let f = r - r.floor();
            if f == 0.0 {
                return None;
            }
            r = 1.0 / f;

            p0 = p1;
            q0 = q1;
            p1 = p2;
            q1 = q2;
        }

        None
    }
}
