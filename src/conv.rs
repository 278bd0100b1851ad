//! Conversion to and from native numbers.

use crate::common::buf::DigitBuf;
use crate::common::util::floor_log10;
use crate::common::util::scale_down;
use crate::common::util::scale_up;
use crate::defs::Error;
use crate::defs::Magnitude;
use crate::defs::Sign;
use crate::num::Real;

/// Doubles with at most this many significant decimal digits are converted through their digits
/// and round-trip exactly.
const EXACT_DIGITS: usize = 15;

/// Magnitude range in which `to_f64` goes through the digits of the mantissa.
const DIGITS_MAGNITUDE_LIMIT: Magnitude = 400;

impl Real {
    /// Constructs a number from `f64`. NaN and infinities are converted to the corresponding special values.
    pub fn from_f64(f: f64) -> Self {
        if f.is_finite() && f != 0.0 {
            let (digits, e) = DigitBuf::from_f64(f);
            if digits.len() <= EXACT_DIGITS {
                return Self::from_digits(Sign::of_f64(f), &digits, e);
            }
        }

        Self::rectify(f, 0)
    }

    /// Constructs a number from `f32`.
    pub fn from_f32(f: f32) -> Self {
        Self::from_f64(f as f64)
    }

    /// Converts the number to `f64`.
    /// Numbers outside of the range of `f64` become infinity or zero of the corresponding sign.
    pub fn to_f64(&self) -> f64 {
        if !self.is_finite() || self.is_zero() {
            return self.m;
        }

        if self.e.abs() <= DIGITS_MAGNITUDE_LIMIT {
            let (digits, e0) = DigitBuf::from_f64(self.m);
            if digits.len() <= EXACT_DIGITS {
                let f = digits.to_f64(self.e + e0);
                return if self.is_negative() { -f } else { f };
            }
        }

        if self.e >= 0 {
            scale_up(self.m, self.e as usize)
        } else {
            scale_down(self.m, self.e.unsigned_abs() as usize)
        }
    }

    /// Converts the number to `f32`.
    /// Numbers outside of the range of `f32` become infinity or zero of the corresponding sign.
    pub fn to_f32(&self) -> f32 {
        self.to_f64() as f32
    }

    /// Returns the integer part of the number as `f64` if it lies in the range of an integer type
    /// with `bits` bits and the given signedness.
    fn to_int_f64(&self, signed: bool, bits: i32) -> Result<f64, Error> {
        if self.is_nan() {
            return Err(Error::InvalidArgument);
        }

        if self.is_inf() {
            return Err(Error::Overflow(self.sign()));
        }

        if self.is_zero() || self.e < 0 {
            return Ok(0.0);
        }

        // exclusive upper bound of the type's range.
        let lim = 2f64.powi(if signed { bits - 1 } else { bits });

        if self.e > floor_log10(lim) {
            return Err(Error::Overflow(self.sign()));
        }

        // truncation takes the decimal digits, rounding removes scaling noise.
        let int = self.trunc();
        let v = scale_up(int.m, int.e as usize).round();

        let lo = if signed { -lim } else { 0.0 };

        if v >= lim {
            Err(Error::Overflow(Sign::Pos))
        } else if v < lo {
            Err(Error::Overflow(Sign::Neg))
        } else {
            Ok(v)
        }
    }
}

macro_rules! impl_int_conv {
    ($t:ty, $signed:literal, $from_comment:literal, $from:ident, $to_comment:literal, $to:ident) => {
        impl Real {
            #[doc=$from_comment]
            pub fn $from(i: $t) -> Self {
                Self::rectify(i as f64, 0)
            }

            #[doc=$to_comment]
            /// The fractional part is discarded.
            ///
            /// ## Errors
            ///
            ///  - InvalidArgument: `self` is NaN.
            ///  - Overflow: `self` is infinite, or its integer part does not fit into the target type.
            pub fn $to(&self) -> Result<$t, Error> {
                let v = self.to_int_f64($signed, <$t>::BITS as i32)?;
                Ok(v as $t)
            }
        }

        impl From<$t> for Real {
            fn from(i: $t) -> Self {
                Real::$from(i)
            }
        }

        impl TryFrom<Real> for $t {
            type Error = Error;

            fn try_from(d: Real) -> Result<Self, Error> {
                d.$to()
            }
        }
    };
}

impl_int_conv!(i8, true, "Constructs a number from `i8`.", from_i8, "Converts the number to `i8`.", to_i8);
impl_int_conv!(i16, true, "Constructs a number from `i16`.", from_i16, "Converts the number to `i16`.", to_i16);
impl_int_conv!(i32, true, "Constructs a number from `i32`.", from_i32, "Converts the number to `i32`.", to_i32);
impl_int_conv!(i64, true, "Constructs a number from `i64`.", from_i64, "Converts the number to `i64`.", to_i64);
impl_int_conv!(i128, true, "Constructs a number from `i128`.", from_i128, "Converts the number to `i128`.", to_i128);
impl_int_conv!(isize, true, "Constructs a number from `isize`.", from_isize, "Converts the number to `isize`.", to_isize);
impl_int_conv!(u8, false, "Constructs a number from `u8`.", from_u8, "Converts the number to `u8`.", to_u8);
impl_int_conv!(u16, false, "Constructs a number from `u16`.", from_u16, "Converts the number to `u16`.", to_u16);
impl_int_conv!(u32, false, "Constructs a number from `u32`.", from_u32, "Converts the number to `u32`.", to_u32);
impl_int_conv!(u64, false, "Constructs a number from `u64`.", from_u64, "Converts the number to `u64`.", to_u64);
impl_int_conv!(u128, false, "Constructs a number from `u128`.", from_u128, "Converts the number to `u128`.", to_u128);
impl_int_conv!(usize, false, "Constructs a number from `usize`.", from_usize, "Converts the number to `usize`.", to_usize);

impl From<f64> for Real {
    fn from(f: f64) -> Self {
        Real::from_f64(f)
    }
}

impl From<f32> for Real {
    fn from(f: f32) -> Self {
        Real::from_f32(f)
    }
}

impl From<Real> for f64 {
    fn from(d: Real) -> Self {
        d.to_f64()
    }
}
