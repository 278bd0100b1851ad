//! Exponentiation.

use crate::defs::Magnitude;
use crate::defs::Parity;
use crate::defs::MAX_MAGNITUDE;
use crate::defs::MIN_MAGNITUDE;
use crate::defs::PARITY_MAGNITUDE_LIMIT;
use crate::num::Real;
use crate::num::INF_NEG;
use crate::num::INF_POS;
use crate::num::MINUS_ONE;
use crate::num::NAN;
use crate::num::ONE;
use crate::num::ZERO;
use core::cmp::Ordering;
use core::f64::consts::LOG10_E;

/// `exp` is computed by `f64` directly for arguments smaller than this value in absolute value.
const EXP_DIRECT_MAX: f64 = 700.0;

impl Real {
    /// Computes `e` to the power of `self`.
    pub fn exp(&self) -> Self {
        if let Some(ret) = self.exp_special() {
            return ret;
        }

        let x = self.to_f64();

        if x.abs() < EXP_DIRECT_MAX {
            return Self::from_f64(x.exp());
        }

        // e^x = 10^(x * log10(e)), the rounding error of the product is kept separately.
        let p = x * LOG10_E;
        let err = x.mul_add(LOG10_E, -p);

        Self::exp10_parts(p, err)
    }

    /// Computes 10 to the power of `self`.
    pub fn exp10(&self) -> Self {
        if let Some(ret) = self.exp_special() {
            return ret;
        }

        Self::exp10_parts(self.to_f64(), 0.0)
    }

    // Results of exponent functions that don't depend on the base.
    fn exp_special(&self) -> Option<Self> {
        if self.is_nan() {
            Some(NAN)
        } else if self.is_zero() {
            Some(ONE)
        } else if self.is_inf_pos() || (self.e > PARITY_MAGNITUDE_LIMIT && self.is_positive()) {
            Some(INF_POS)
        } else if self.is_inf_neg() || self.e > PARITY_MAGNITUDE_LIMIT {
            Some(ZERO)
        } else {
            None
        }
    }

    /// Computes `10^(a + b)`, where `b` is a small correction to `a`.
    fn exp10_parts(a: f64, b: f64) -> Self {
        if a.is_nan() || b.is_nan() {
            return NAN;
        }

        if a.is_infinite() {
            return if a > 0.0 { INF_POS } else { ZERO };
        }

        let int = a.floor();
        let frac = (a - int) + b;
        let k = frac.floor();
        let int = int + k;
        let frac = frac - k;

        if int > MAX_MAGNITUDE as f64 {
            INF_POS
        } else if int < MIN_MAGNITUDE as f64 {
            ZERO
        } else {
            Self::rectify(10f64.powf(frac), int as Magnitude)
        }
    }

    /// Computes `self` to the power of integer `n` by binary exponentiation.
    pub fn powi(&self, n: i64) -> Self {
        if self.is_nan() {
            return NAN;
        }

        if n == 0 {
            return ONE;
        }

        let mut i = n.unsigned_abs();
        let mut x = *self;
        let mut ret = ONE;

        loop {
            if i & 1 == 1 {
                ret = ret.mul(&x);
            }

            i >>= 1;

            if i == 0 {
                break;
            }

            x = x.mul(&x);
        }

        if n < 0 {
            ret.reciprocal()
        } else {
            ret
        }
    }

    /// Computes `self` to the power of `d2`.
    ///
    /// A negative base is raised to a non-integer power when the power is a fraction with an odd denominator,
    /// e.g. `(-8)^(1/3) = -2`. Otherwise the result of raising a negative base to a non-integer power is NaN.
    pub fn pow(&self, d2: &Self) -> Self {
        if self.is_nan() || d2.is_nan() {
            return NAN;
        }

        if d2.is_zero() {
            return ONE;
        }

        if d2.is_one() {
            return *self;
        }

        if self.is_one() {
            return ONE;
        }

        if self.is_zero() {
            return if d2.is_positive() { ZERO } else { INF_POS };
        }

        if d2.is_inf() {
            return match self.abs_cmp(&ONE) {
                Some(Ordering::Greater) => {
                    if d2.is_inf_pos() {
                        INF_POS
                    } else {
                        ZERO
                    }
                }
                Some(Ordering::Less) => {
                    if d2.is_inf_pos() {
                        ZERO
                    } else {
                        INF_POS
                    }
                }
                _ => ONE,
            };
        }

        if self.is_inf() {
            return if d2.is_negative() {
                ZERO
            } else if self.is_inf_neg() && d2.parity() == Parity::Odd {
                INF_NEG
            } else {
                INF_POS
            };
        }

        if self.is_minus_one() {
            return match d2.parity() {
                Parity::Even => ONE,
                Parity::Odd => MINUS_ONE,
                Parity::NonParity => NAN,
            };
        }

        if d2.is_minus_one() {
            return self.reciprocal();
        }

        if d2.e <= PARITY_MAGNITUDE_LIMIT && d2.is_integer() {
            if let Ok(n) = d2.to_i64() {
                return self.powi(n);
            }
        }

        if self.is_negative() {
            match d2.parity() {
                Parity::Even => self.abs().pow_positive(d2),
                Parity::Odd => self.abs().pow_positive(d2).inv_sign(),
                Parity::NonParity => NAN,
            }
        } else {
            self.pow_positive(d2)
        }
    }

    // Positive finite base, finite non-zero power.
    fn pow_positive(&self, d2: &Self) -> Self {
        let ret = self.pow_mantissa(d2.m);

        if d2.e > 0 {
            Self::pow_refine(ret, 10.0, d2.e)
        } else if d2.e < 0 {
            Self::pow_refine(ret, 0.1, -d2.e)
        } else {
            ret
        }
    }

    // self^y = 10^(log10(m^y) + e*y)
    fn pow_mantissa(&self, y: f64) -> Self {
        let e = self.e as f64;
        let p = e * y;
        let err = e.mul_add(y, -p);

        Self::exp10_parts(p, err + self.m.powf(y).log10())
    }

    // Raises `ret` to the power of `y` `steps` times.
    fn pow_refine(mut ret: Self, y: f64, steps: Magnitude) -> Self {
        for _ in 0..steps {
            if ret.is_zero() || !ret.is_finite() {
                break;
            }

            let next = ret.pow_mantissa(y);
            if next == ret {
                break;
            }

            ret = next;
        }

        ret
    }
}
