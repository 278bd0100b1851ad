//! Real number definition, rectification, and basic number manipulation operations.

use crate::common::buf::DigitBuf;
use crate::common::util::floor_log10;
use crate::common::util::scale_down;
use crate::common::util::scale_up;
use crate::defs::Magnitude;
use crate::defs::Sign;
use crate::defs::MAX_MAGNITUDE;
use crate::defs::MAX_MANTISSA;
use crate::defs::MIN_MAGNITUDE;
use core::num::FpCategory;

#[cfg(feature = "random")]
use crate::defs::Error;

/// Not a number.
pub const NAN: Real = Real { m: f64::NAN, e: 0 };

/// Positive infinity.
pub const INF_POS: Real = Real {
    m: f64::INFINITY,
    e: 0,
};

/// Negative infinity.
pub const INF_NEG: Real = Real {
    m: f64::NEG_INFINITY,
    e: 0,
};

/// Zero.
pub const ZERO: Real = Real { m: 0.0, e: 0 };

/// Value of 1.
pub const ONE: Real = Real { m: 1.0, e: 0 };

/// Value of -1.
pub const MINUS_ONE: Real = Real { m: -1.0, e: 0 };

/// Value of 2.
pub const TWO: Real = Real { m: 2.0, e: 0 };

/// Value of 10.
pub const TEN: Real = Real { m: 1.0, e: 1 };

/// Maximum finite value.
pub const MAX_VALUE: Real = Real {
    m: MAX_MANTISSA,
    e: MAX_MAGNITUDE,
};

/// Minimum finite value.
pub const MIN_VALUE: Real = Real {
    m: -MAX_MANTISSA,
    e: MAX_MAGNITUDE,
};

/// The smallest positive value.
pub const EPSILON: Real = Real {
    m: 1.0,
    e: MIN_MAGNITUDE,
};

/// The number π.
pub const PI: Real = Real {
    m: core::f64::consts::PI,
    e: 0,
};

/// Euler's number.
pub const E: Real = Real {
    m: core::f64::consts::E,
    e: 0,
};

/// Real number with a double precision mantissa and a decimal exponent.
///
/// A finite non-zero number is always kept in the form `m * 10^e` where `1 <= |m| < 10`
/// and `MIN_MAGNITUDE <= e <= MAX_MAGNITUDE`.
/// Zero, infinities and NaN are stored with magnitude 0.
#[derive(Copy, Clone, Debug)]
pub struct Real {
    pub(crate) m: f64,
    pub(crate) e: Magnitude,
}

impl Real {
    /// Zero.
    pub const ZERO: Real = ZERO;

    /// Value of 1.
    pub const ONE: Real = ONE;

    /// Value of -1.
    pub const MINUS_ONE: Real = MINUS_ONE;

    /// Value of 2.
    pub const TWO: Real = TWO;

    /// Value of 10.
    pub const TEN: Real = TEN;

    /// Maximum finite value.
    pub const MAX_VALUE: Real = MAX_VALUE;

    /// Minimum finite value.
    pub const MIN_VALUE: Real = MIN_VALUE;

    /// The smallest positive value.
    pub const EPSILON: Real = EPSILON;

    /// Positive infinity.
    pub const INFINITY: Real = INF_POS;

    /// Negative infinity.
    pub const NEG_INFINITY: Real = INF_NEG;

    /// Not a number.
    pub const NAN: Real = NAN;

    /// The number π.
    pub const PI: Real = PI;

    /// Euler's number.
    pub const E: Real = E;

    /// Constructs a number from a mantissa and a magnitude.
    /// The pair is brought to the normal form, e.g. `Real::new(57.0, 3)` is `5.7e4`.
    ///
    /// A result above the maximum value becomes infinity of the corresponding sign,
    /// and a result below the smallest positive value becomes zero.
    /// A mantissa smaller than 1 in absolute value which would have to
    /// be shifted below the minimum magnitude gives infinity as well.
    pub fn new(mantissa: f64, magnitude: Magnitude) -> Self {
        Self::rectify(mantissa, magnitude)
    }

    /// Brings a mantissa and a magnitude to the normal form.
    pub(crate) fn rectify(m: f64, e: Magnitude) -> Self {
        if m.is_nan() {
            return NAN;
        }

        if m.is_infinite() {
            return Self::inf(Sign::of_f64(m));
        }

        if m == 0.0 {
            return ZERO;
        }

        let s = Sign::of_f64(m);
        let mut m = m;
        let mut e = e;

        if m.abs() >= 10.0 {
            let shift = floor_log10(m.abs());
            if e.saturating_add(shift) > MAX_MAGNITUDE {
                return Self::inf(s);
            }
            m = scale_down(m, shift as usize);
            e += shift;
        }

        if m.abs() < 1.0 {
            let shift = -floor_log10(m.abs());
            if e.saturating_sub(shift) < MIN_MAGNITUDE {
                return Self::inf(s);
            }
            m = scale_up(m, shift as usize);
            e -= shift;
        }

        // the decimal logarithm can be off by one near powers of 10.
        if m.abs() >= 10.0 {
            m /= 10.0;
            e += 1;
        } else if m.abs() < 1.0 {
            m *= 10.0;
            e -= 1;
        }

        if e > MAX_MAGNITUDE {
            Self::inf(s)
        } else if e < MIN_MAGNITUDE {
            ZERO
        } else {
            Real { m, e }
        }
    }

    /// Same as `rectify`, except that a finite result below the smallest positive value is always zero.
    /// Results of arithmetic operations are built with this function.
    pub(crate) fn rectify_flush(m: f64, e: Magnitude) -> Self {
        if m.is_finite() && m != 0.0 && m.abs() < 1.0 {
            let shift = -floor_log10(m.abs());
            if e.saturating_sub(shift) < MIN_MAGNITUDE {
                return ZERO;
            }
        }

        Self::rectify(m, e)
    }

    /// Constructs a number from the decimal digits `d0.d1d2...` of the mantissa, its sign, and the magnitude.
    /// The first digit must not be zero.
    pub(crate) fn from_digits(s: Sign, digits: &DigitBuf, e: Magnitude) -> Self {
        if digits.is_empty() {
            return ZERO;
        }

        Self::rectify_flush(s.to_f64() * digits.to_mantissa(), e)
    }

    /// Returns infinity with sign `s`.
    #[inline]
    pub(crate) fn inf(s: Sign) -> Self {
        if s.is_positive() {
            INF_POS
        } else {
            INF_NEG
        }
    }

    /// Returns the mantissa of the number.
    /// For zero, infinities and NaN the mantissa is the value itself.
    #[inline]
    pub fn mantissa(&self) -> f64 {
        self.m
    }

    /// Returns the decimal magnitude of the number.
    #[inline]
    pub fn magnitude(&self) -> Magnitude {
        self.e
    }

    /// Returns a copy of `self` with the mantissa replaced by `mantissa`.
    /// The result is rectified.
    pub fn with_mantissa(&self, mantissa: f64) -> Self {
        Self::rectify(mantissa, self.e)
    }

    /// Returns a copy of `self` with the magnitude replaced by `magnitude`.
    /// The result is rectified.
    pub fn with_magnitude(&self, magnitude: Magnitude) -> Self {
        Self::rectify(self.m, magnitude)
    }

    /// Returns true if `self` is not a number.
    #[inline]
    pub fn is_nan(&self) -> bool {
        self.m.is_nan()
    }

    /// Returns true if `self` is positive or negative infinity.
    #[inline]
    pub fn is_inf(&self) -> bool {
        self.m.is_infinite()
    }

    /// Returns true if `self` is positive infinity.
    #[inline]
    pub fn is_inf_pos(&self) -> bool {
        self.m == f64::INFINITY
    }

    /// Returns true if `self` is negative infinity.
    #[inline]
    pub fn is_inf_neg(&self) -> bool {
        self.m == f64::NEG_INFINITY
    }

    /// Returns true if `self` is neither infinite nor NaN.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.m.is_finite()
    }

    /// Returns true if `self` is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.m == 0.0
    }

    /// Returns true if `self` is greater than zero.
    #[inline]
    pub fn is_positive(&self) -> bool {
        self.m > 0.0
    }

    /// Returns true if `self` is less than zero.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.m < 0.0
    }

    #[inline]
    pub(crate) fn is_one(&self) -> bool {
        self.m == 1.0 && self.e == 0
    }

    #[inline]
    pub(crate) fn is_minus_one(&self) -> bool {
        self.m == -1.0 && self.e == 0
    }

    /// Returns the sign of the number. Zero and NaN are considered positive.
    #[inline]
    pub fn sign(&self) -> Sign {
        Sign::of_f64(self.m)
    }

    /// Returns the floating point category of the number.
    pub fn classify(&self) -> FpCategory {
        if self.is_nan() {
            FpCategory::Nan
        } else if self.is_inf() {
            FpCategory::Infinite
        } else if self.is_zero() {
            FpCategory::Zero
        } else {
            FpCategory::Normal
        }
    }

    /// Returns the absolute value of `self`.
    pub fn abs(&self) -> Self {
        Real {
            m: self.m.abs(),
            e: self.e,
        }
    }

    /// Returns `self` with the opposite sign. Zero and NaN are returned as is.
    pub fn inv_sign(&self) -> Self {
        if self.is_zero() || self.is_nan() {
            *self
        } else {
            Real {
                m: -self.m,
                e: self.e,
            }
        }
    }

    /// Returns 1 if `self` is positive, -1 if `self` is negative,
    /// zero if `self` is zero, and NaN if `self` is NaN.
    pub fn signum(&self) -> Self {
        if self.is_nan() {
            NAN
        } else if self.is_zero() {
            ZERO
        } else if self.is_negative() {
            MINUS_ONE
        } else {
            ONE
        }
    }

    /// Returns `1 / self`.
    pub fn reciprocal(&self) -> Self {
        ONE.div(self)
    }

    /// Decimal digits of the mantissa. The first digit has weight `10^e`.
    fn mantissa_digits(&self) -> DigitBuf {
        DigitBuf::from_f64(self.m).0
    }

    /// Returns true if the number of digits of the mantissa does not exceed the number of integer digits.
    pub fn is_integer(&self) -> bool {
        if self.is_zero() {
            return true;
        }

        if !self.is_finite() || self.e < 0 {
            return false;
        }

        self.mantissa_digits().len() as Magnitude <= self.e + 1
    }

    /// Returns the integer part of the number, and true if a non-zero fractional part was discarded.
    fn trunc_impl(&self) -> (Self, bool) {
        if !self.is_finite() || self.is_zero() {
            return (*self, false);
        }

        if self.e < 0 {
            return (ZERO, true);
        }

        let digits = self.mantissa_digits();
        let int_len = (self.e + 1) as usize;

        if digits.len() <= int_len {
            return (*self, false);
        }

        let mut int_digits = DigitBuf::new();
        for d in digits[..int_len].iter() {
            int_digits.push(*d);
        }

        (Self::from_digits(self.sign(), &int_digits, self.e), true)
    }

    /// Returns the integer part of the number rounded towards zero.
    pub fn trunc(&self) -> Self {
        self.trunc_impl().0
    }

    /// Returns the fractional part of the number: `self - self.trunc()`.
    /// The result has the sign of `self`.
    pub fn fract(&self) -> Self {
        if !self.is_finite() {
            return NAN;
        }

        let (int, has_fract) = self.trunc_impl();

        if has_fract {
            self.sub(&int)
        } else {
            ZERO
        }
    }

    /// Returns the largest integer less than or equal to `self`.
    pub fn floor(&self) -> Self {
        let (int, has_fract) = self.trunc_impl();

        if has_fract && self.is_negative() {
            int.sub(&ONE)
        } else {
            int
        }
    }

    /// Returns the smallest integer greater than or equal to `self`.
    pub fn ceil(&self) -> Self {
        let (int, has_fract) = self.trunc_impl();

        if has_fract && self.is_positive() {
            int.add(&ONE)
        } else {
            int
        }
    }

    /// Returns the nearest integer to `self`. Half-way cases are rounded away from zero.
    pub fn round(&self) -> Self {
        let (int, has_fract) = self.trunc_impl();

        if !has_fract {
            return int;
        }

        // the first digit of the fractional part decides.
        let first_fract_digit = if self.e < -1 {
            0
        } else {
            self.mantissa_digits()[(self.e + 1) as usize]
        };

        if first_fract_digit < 5 {
            int
        } else if self.is_negative() {
            int.sub(&ONE)
        } else {
            int.add(&ONE)
        }
    }

    /// Returns a random normalized number with a random sign and magnitude in the range from `mag_from` to `mag_to` inclusive.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: `mag_from` is greater than `mag_to`, or the range exceeds the allowed magnitude range.
    #[cfg(feature = "random")]
    pub fn random_normal(mag_from: Magnitude, mag_to: Magnitude) -> Result<Self, Error> {
        if mag_from > mag_to || mag_from < MIN_MAGNITUDE || mag_to > MAX_MAGNITUDE {
            return Err(Error::InvalidArgument);
        }

        let m = 1.0 + rand::random::<f64>() * 9.0;
        let m = if rand::random::<bool>() { m } else { -m };

        let range = (mag_to - mag_from) as u64 + 1;
        let e = mag_from + (rand::random::<u64>() % range) as Magnitude;

        Ok(Self::rectify(m, e))
    }
}

impl Default for Real {
    fn default() -> Real {
        ZERO
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_rectify() {
        let d = Real::new(57.0, 3);
        assert_eq!(d.mantissa(), 5.7);
        assert_eq!(d.magnitude(), 4);

        let d = Real::new(-0.0057, 3);
        assert_eq!(d.mantissa(), -5.7);
        assert_eq!(d.magnitude(), 0);

        let d = Real::new(1234.5, -7);
        assert_eq!(d.mantissa(), 1.2345);
        assert_eq!(d.magnitude(), -4);

        // zero, infinities and NaN have magnitude 0.
        let d = Real::new(0.0, 12);
        assert!(d.is_zero());
        assert_eq!(d.magnitude(), 0);
        assert!(d.mantissa().is_sign_positive());
        assert!(Real::new(-0.0, -12).mantissa().is_sign_positive());
        assert!(Real::new(f64::NAN, 5).is_nan());
        assert_eq!(Real::new(f64::NAN, 5).magnitude(), 0);
        assert!(Real::new(f64::NEG_INFINITY, 5).is_inf_neg());
        assert_eq!(Real::new(f64::INFINITY, 5).magnitude(), 0);

        // the mantissa range is [1, 10).
        for m in [1.0, 9.99, 10.0, 99.99, 100.0, 0.1, 0.999, 1e-300, 1e300, 5e-324, f64::MAX] {
            let d = Real::new(m, 0);
            assert!(d.mantissa() >= 1.0 && d.mantissa() < 10.0);
        }
        assert_eq!(Real::new(1e300, 0).magnitude(), 300);
        assert_eq!(Real::new(1e-300, 0).magnitude(), -300);
        assert_eq!(Real::new(f64::MAX, 0).magnitude(), 308);
        assert_eq!(Real::new(5e-324, 0).magnitude(), -324);

        // saturation.
        assert!(Real::new(10.0, MAX_MAGNITUDE).is_inf_pos());
        assert!(Real::new(-10.0, MAX_MAGNITUDE).is_inf_neg());
        assert!(Real::new(1.0, MAX_MAGNITUDE + 1).is_inf_pos());
        assert!(Real::new(1.0, Magnitude::MAX).is_inf_pos());
        assert!(Real::new(1.0, MIN_MAGNITUDE - 1).is_zero());
        assert!(Real::new(-5.0, MIN_MAGNITUDE - 1).is_zero());
        assert!(Real::new(1.0, MAX_MAGNITUDE).is_finite());
        assert!(Real::new(1.0, MIN_MAGNITUDE).is_finite());

        // shifting a small mantissa below the minimum magnitude gives infinity.
        assert!(Real::new(0.5, MIN_MAGNITUDE).is_inf_pos());
        assert!(Real::new(-0.5, MIN_MAGNITUDE).is_inf_neg());
        assert!(Real::new(0.5, Magnitude::MIN).is_inf_pos());

        // arithmetic variant flushes to zero instead.
        assert!(Real::rectify_flush(0.5, MIN_MAGNITUDE).is_zero());
        assert_eq!(Real::rectify_flush(0.5, MIN_MAGNITUDE + 1).magnitude(), MIN_MAGNITUDE);
    }

    #[test]
    fn test_setters() {
        let d = Real::new(2.5, 10);
        let d2 = d.with_mantissa(25.0);
        assert_eq!(d2.mantissa(), 2.5);
        assert_eq!(d2.magnitude(), 11);

        let d2 = d.with_magnitude(-3);
        assert_eq!(d2.mantissa(), 2.5);
        assert_eq!(d2.magnitude(), -3);

        assert!(d.with_magnitude(MAX_MAGNITUDE + 5).is_inf_pos());
        assert!(d.with_mantissa(0.0).is_zero());
    }

    #[test]
    fn test_predicates() {
        assert!(NAN.is_nan());
        assert!(!NAN.is_finite());
        assert!(!NAN.is_positive() && !NAN.is_negative());
        assert!(INF_POS.is_inf() && INF_POS.is_inf_pos() && !INF_POS.is_inf_neg());
        assert!(INF_NEG.is_inf() && INF_NEG.is_inf_neg());
        assert!(ZERO.is_zero() && !ZERO.is_positive() && !ZERO.is_negative());
        assert!(ONE.is_one() && MINUS_ONE.is_minus_one());
        assert!(!TEN.is_one());

        assert_eq!(NAN.classify(), FpCategory::Nan);
        assert_eq!(INF_NEG.classify(), FpCategory::Infinite);
        assert_eq!(ZERO.classify(), FpCategory::Zero);
        assert_eq!(EPSILON.classify(), FpCategory::Normal);

        assert_eq!(MIN_VALUE.sign(), Sign::Neg);
        assert_eq!(ZERO.sign(), Sign::Pos);
        assert_eq!(Real::default().mantissa(), 0.0);

        assert!(MAX_VALUE.inv_sign().mantissa() == MIN_VALUE.mantissa());
        assert!(ZERO.inv_sign().mantissa().is_sign_positive());
        assert!(MIN_VALUE.abs().mantissa() == MAX_MANTISSA);

        assert!(Real::new(-3.0, 100).signum().is_minus_one());
        assert!(Real::new(3.0, -100).signum().is_one());
        assert!(ZERO.signum().is_zero());
        assert!(NAN.signum().is_nan());
    }

    #[test]
    fn test_int_parts() {
        let d = Real::new(1.2345, 2);
        assert_eq!(d.trunc().mantissa(), 1.23);
        assert_eq!(d.trunc().magnitude(), 2);
        assert_eq!(d.floor().mantissa(), 1.23);
        assert!((d.ceil().mantissa() - 1.24).abs() < 1e-15);
        assert_eq!(d.round().mantissa(), 1.23);
        assert!((d.fract().mantissa() - 4.5).abs() < 1e-12);
        assert_eq!(d.fract().magnitude(), -1);

        let d = Real::new(-1.2355, 2);
        assert_eq!(d.trunc().mantissa(), -1.23);
        assert!((d.floor().mantissa() + 1.24).abs() < 1e-15);
        assert_eq!(d.ceil().mantissa(), -1.23);
        assert!((d.round().mantissa() + 1.24).abs() < 1e-15);
        assert!(d.fract().is_negative());

        let d = Real::new(2.5, 0);
        assert_eq!(d.round().mantissa(), 3.0);
        assert_eq!(d.inv_sign().round().mantissa(), -3.0);

        let d = Real::new(9.5, 0);
        assert_eq!(d.round().mantissa(), 1.0);
        assert_eq!(d.round().magnitude(), 1);

        let d = Real::new(3.0, -5);
        assert!(d.trunc().is_zero());
        assert!(d.floor().is_zero());
        assert!(d.ceil().is_one());
        assert!(d.round().is_zero());
        assert!(d.inv_sign().floor().is_minus_one());
        assert!(d.inv_sign().ceil().is_zero());
        assert_eq!(d.fract().mantissa(), 3.0);

        let d = Real::new(6.0, -1);
        assert!(d.round().is_one());
        assert!(d.inv_sign().round().is_minus_one());

        // large numbers are integers.
        let d = Real::new(1.2345, 40);
        assert!(d.is_integer());
        assert_eq!(d.trunc().mantissa(), 1.2345);
        assert!(d.fract().is_zero());
        assert_eq!(d.floor().magnitude(), 40);

        assert!(Real::new(1.5, 1).is_integer());
        assert!(!Real::new(1.5, 0).is_integer());
        assert!(ZERO.is_integer());
        assert!(!NAN.is_integer());
        assert!(!INF_POS.is_integer());

        assert!(INF_POS.trunc().is_inf_pos());
        assert!(INF_NEG.floor().is_inf_neg());
        assert!(NAN.round().is_nan());
        assert!(INF_POS.fract().is_nan());
    }

    #[test]
    fn test_reciprocal() {
        let d = Real::new(4.0, 10);
        let r = d.reciprocal();
        assert_eq!(r.mantissa(), 2.5);
        assert_eq!(r.magnitude(), -11);
        assert!(ZERO.reciprocal().is_inf_pos());
        assert!(INF_NEG.reciprocal().is_zero());
    }

    #[cfg(feature = "random")]
    #[test]
    fn test_random_normal() {
        for _ in 0..1000 {
            let d = Real::random_normal(-20, 20).unwrap();
            assert!(d.mantissa().abs() >= 1.0 && d.mantissa().abs() < 10.0);
            assert!(d.magnitude() >= -20 && d.magnitude() <= 20);
        }

        let d = Real::random_normal(MAX_MAGNITUDE, MAX_MAGNITUDE).unwrap();
        assert_eq!(d.magnitude(), MAX_MAGNITUDE);

        assert_eq!(Real::random_normal(3, 2).unwrap_err(), Error::InvalidArgument);
        assert_eq!(
            Real::random_normal(0, MAX_MAGNITUDE + 1).unwrap_err(),
            Error::InvalidArgument
        );
    }
}
