//! Trigonometric functions and their inverses.

use crate::num::Real;
use crate::num::NAN;
use crate::num::ONE;
use crate::num::PI;
use core::f64::consts::FRAC_PI_2;
use core::f64::consts::TAU;

/// For numbers with a smaller magnitude `sin(x) = tan(x) = asin(x) = atan(x) = x` and `cos(x) = 1` in double precision.
pub(crate) const SMALL_ARG_MAGNITUDE: i64 = -8;

/// For numbers with a larger magnitude `atan(x) = ±π/2` in double precision.
const ATAN_LARGE_ARG_MAGNITUDE: i64 = 16;

impl Real {
    /// Computes the sine of a number. The argument is reduced modulo 2π.
    pub fn sin(&self) -> Self {
        if !self.is_finite() {
            return NAN;
        }

        if self.is_zero() || self.e < SMALL_ARG_MAGNITUDE {
            return *self;
        }

        let x = self.rem(&Self::from_f64(TAU));

        Self::from_f64(x.to_f64().sin())
    }

    /// Computes the cosine of a number. The argument is reduced modulo 2π.
    pub fn cos(&self) -> Self {
        if !self.is_finite() {
            return NAN;
        }

        if self.is_zero() || self.e < SMALL_ARG_MAGNITUDE {
            return ONE;
        }

        let x = self.rem(&Self::from_f64(TAU));

        Self::from_f64(x.to_f64().cos())
    }

    /// Computes the tangent of a number. The argument is reduced modulo π.
    pub fn tan(&self) -> Self {
        if !self.is_finite() {
            return NAN;
        }

        if self.is_zero() || self.e < SMALL_ARG_MAGNITUDE {
            return *self;
        }

        let x = self.rem(&PI);

        Self::from_f64(x.to_f64().tan())
    }

    /// Computes the arcsine of a number. The result is NaN for arguments outside of the range from -1 to 1.
    pub fn asin(&self) -> Self {
        if self.is_nan() || self.abs() > ONE {
            return NAN;
        }

        if self.is_zero() || self.e < SMALL_ARG_MAGNITUDE {
            return *self;
        }

        Self::from_f64(self.to_f64().asin())
    }

    /// Computes the arccosine of a number. The result is NaN for arguments outside of the range from -1 to 1.
    pub fn acos(&self) -> Self {
        if self.is_nan() || self.abs() > ONE {
            return NAN;
        }

        Self::from_f64(self.to_f64().acos())
    }

    /// Computes the arctangent of a number.
    pub fn atan(&self) -> Self {
        if self.is_nan() {
            return NAN;
        }

        if self.is_inf() || self.e > ATAN_LARGE_ARG_MAGNITUDE {
            return Self::from_f64(FRAC_PI_2.copysign(self.m));
        }

        if self.is_zero() || self.e < SMALL_ARG_MAGNITUDE {
            return *self;
        }

        Self::from_f64(self.to_f64().atan())
    }
}
