//! Hyperbolic functions and their inverses.

use crate::num::Real;
use crate::num::INF_POS;
use crate::num::NAN;
use crate::num::ONE;
use crate::num::TWO;
use crate::ops::trig::SMALL_ARG_MAGNITUDE;
use core::f64::consts::LN_2;

/// Exponent functions are computed by `f64` for arguments smaller than this value in absolute value.
const DIRECT_EXP_MAX: f64 = 700.0;

/// `tanh(x) = ±1` in double precision for arguments larger than this value in absolute value.
const TANH_ONE_MIN: f64 = 20.0;

/// Inverse hyperbolic functions are computed by `f64` for numbers with magnitude not exceeding this value.
const DIRECT_INV_MAX_MAGNITUDE: i64 = 300;

impl Real {
    /// Computes the hyperbolic sine of a number.
    pub fn sinh(&self) -> Self {
        if self.is_nan() || self.is_inf() {
            return *self;
        }

        if self.is_zero() || self.e < SMALL_ARG_MAGNITUDE {
            return *self;
        }

        let x = self.to_f64();

        if x.abs() < DIRECT_EXP_MAX {
            Self::from_f64(x.sinh())
        } else {
            self.exp().sub(&self.inv_sign().exp()).div(&TWO)
        }
    }

    /// Computes the hyperbolic cosine of a number.
    pub fn cosh(&self) -> Self {
        if self.is_nan() {
            return NAN;
        }

        if self.is_inf() {
            return INF_POS;
        }

        if self.is_zero() || self.e < SMALL_ARG_MAGNITUDE {
            return ONE;
        }

        let x = self.to_f64();

        if x.abs() < DIRECT_EXP_MAX {
            Self::from_f64(x.cosh())
        } else {
            self.exp().add(&self.inv_sign().exp()).div(&TWO)
        }
    }

    /// Computes the hyperbolic tangent of a number.
    pub fn tanh(&self) -> Self {
        if self.is_nan() {
            return NAN;
        }

        if self.is_zero() || self.e < SMALL_ARG_MAGNITUDE {
            return *self;
        }

        let x = self.to_f64();

        if x.abs() > TANH_ONE_MIN {
            self.signum()
        } else {
            Self::from_f64(x.tanh())
        }
    }

    /// Computes the inverse hyperbolic sine of a number.
    pub fn asinh(&self) -> Self {
        if self.is_nan() || self.is_inf() {
            return *self;
        }

        if self.is_zero() || self.e < SMALL_ARG_MAGNITUDE {
            return *self;
        }

        if self.e <= DIRECT_INV_MAX_MAGNITUDE {
            return Self::from_f64(self.to_f64().asinh());
        }

        // asinh(x) = ln(2|x|) for large |x|
        let ret = self.abs().ln().add(&Self::from_f64(LN_2));

        if self.is_negative() {
            ret.inv_sign()
        } else {
            ret
        }
    }

    /// Computes the inverse hyperbolic cosine of a number. The result is NaN for arguments less than 1.
    pub fn acosh(&self) -> Self {
        if self.is_nan() || *self < ONE {
            return NAN;
        }

        if self.is_inf() {
            return INF_POS;
        }

        if self.e <= DIRECT_INV_MAX_MAGNITUDE {
            return Self::from_f64(self.to_f64().acosh());
        }

        // acosh(x) = ln(2x) for large x
        self.ln().add(&Self::from_f64(LN_2))
    }

    /// Computes the inverse hyperbolic tangent of a number.
    /// The result is NaN for arguments outside of the range from -1 to 1, and infinity for 1 and -1.
    pub fn atanh(&self) -> Self {
        if self.is_nan() || self.abs() > ONE {
            return NAN;
        }

        if self.abs() == ONE {
            return Self::inf(self.sign());
        }

        if self.is_zero() || self.e < SMALL_ARG_MAGNITUDE {
            return *self;
        }

        Self::from_f64(self.to_f64().atanh())
    }
}
