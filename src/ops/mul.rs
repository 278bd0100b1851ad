//! Multiplication and division.

use crate::defs::Magnitude;
use crate::defs::Sign;
use crate::defs::MAX_MAGNITUDE;
use crate::defs::MIN_MAGNITUDE;
use crate::num::Real;
use crate::num::NAN;
use crate::num::ZERO;

impl Real {
    /// Multiplies `self` by `d2` and returns the result of the operation.
    pub fn mul(&self, d2: &Self) -> Self {
        if self.is_nan() || d2.is_nan() {
            return NAN;
        }

        if self.is_inf() || d2.is_inf() {
            if self.is_zero() || d2.is_zero() {
                return NAN;
            }
            return Self::inf(Self::product_sign(self, d2));
        }

        if self.is_zero() || d2.is_zero() {
            return ZERO;
        }

        if self.is_one() {
            return *d2;
        }

        if d2.is_one() {
            return *self;
        }

        if self.is_minus_one() {
            return d2.inv_sign();
        }

        if d2.is_minus_one() {
            return self.inv_sign();
        }

        Self::mul_div_result(self.m * d2.m, self.e + d2.e)
    }

    /// Divides `self` by `d2` and returns the result of the operation.
    pub fn div(&self, d2: &Self) -> Self {
        if self.is_nan() || d2.is_nan() {
            return NAN;
        }

        if self.is_inf() {
            if d2.is_inf() {
                return NAN;
            }
            // zero divisor counts as positive.
            return Self::inf(Self::product_sign(self, d2));
        }

        if d2.is_inf() {
            return ZERO;
        }

        if d2.is_zero() {
            if self.is_zero() {
                return NAN;
            }
            return Self::inf(self.sign());
        }

        if self.is_zero() {
            return ZERO;
        }

        if d2.is_one() {
            return *self;
        }

        if d2.is_minus_one() {
            return self.inv_sign();
        }

        Self::mul_div_result(self.m / d2.m, self.e - d2.e)
    }

    #[inline]
    fn product_sign(d1: &Self, d2: &Self) -> Sign {
        if d1.sign() == d2.sign() {
            Sign::Pos
        } else {
            Sign::Neg
        }
    }

    // The product of mantissas is in [1, 100) and the quotient is in (0.1, 10),
    // so one shift normalizes the result before the magnitude is checked.
    fn mul_div_result(mut m: f64, mut e: Magnitude) -> Self {
        if m.abs() >= 10.0 {
            m /= 10.0;
            e += 1;
        } else if m.abs() < 1.0 {
            m *= 10.0;
            e -= 1;
        }

        if e > MAX_MAGNITUDE {
            Self::inf(Sign::of_f64(m))
        } else if e < MIN_MAGNITUDE {
            ZERO
        } else {
            Self::rectify(m, e)
        }
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::num::EPSILON;
    use crate::num::INF_NEG;
    use crate::num::INF_POS;
    use crate::num::MAX_VALUE;
    use crate::num::MINUS_ONE;
    use crate::num::MIN_VALUE;
    use crate::num::ONE;
    use crate::num::TEN;

    #[test]
    fn test_mul() {
        let d1 = Real::new(2.5, 10);
        let d2 = Real::new(-4.0, -3);
        let r = d1.mul(&d2);
        assert_eq!(r.mantissa(), -1.0);
        assert_eq!(r.magnitude(), 8);

        let r = Real::new(3.0, 2).mul(&Real::new(2.0, 3));
        assert_eq!(r.mantissa(), 6.0);
        assert_eq!(r.magnitude(), 5);

        assert!(d1.mul(&ONE) == d1);
        assert!(ONE.mul(&d1) == d1);
        assert!(d1.mul(&MINUS_ONE) == d1.inv_sign());
        assert!(MINUS_ONE.mul(&d2) == d2.inv_sign());

        // saturation at the magnitude limits.
        assert!(MAX_VALUE.mul(&TEN).is_inf_pos());
        assert!(MIN_VALUE.mul(&TEN).is_inf_neg());
        assert!(MAX_VALUE.mul(&MIN_VALUE).is_inf_neg());
        assert!(EPSILON.mul(&Real::new(1.0, -1)).is_zero());
        assert!(EPSILON.mul(&EPSILON).is_zero());
        assert!(EPSILON.mul(&Real::new(5.0, -1)).is_zero());
        assert!(EPSILON.mul(&Real::new(5.0, 0)) == Real::new(5.0, MIN_MAGNITUDE));
        assert!(Real::new(2.0, MAX_MAGNITUDE - 1).mul(&Real::new(5.0, 0)).is_finite());
        assert!(Real::new(2.0, MAX_MAGNITUDE).mul(&Real::new(5.0, 0)).is_inf_pos());

        // magnitude one below the limit comes back after normalization.
        let r = Real::new(2.0, MIN_MAGNITUDE).mul(&Real::new(5.0, -1));
        assert_eq!(r.mantissa(), 1.0);
        assert_eq!(r.magnitude(), MIN_MAGNITUDE);
        assert!(r == EPSILON);
    }

    #[test]
    fn test_mul_special() {
        let x = Real::new(-7.0, 3);

        assert!(NAN.mul(&x).is_nan());
        assert!(x.mul(&NAN).is_nan());
        assert!(INF_POS.mul(&ZERO).is_nan());
        assert!(ZERO.mul(&INF_NEG).is_nan());
        assert!(INF_POS.mul(&x).is_inf_neg());
        assert!(x.mul(&INF_NEG).is_inf_pos());
        assert!(INF_NEG.mul(&INF_NEG).is_inf_pos());
        assert!(INF_NEG.mul(&INF_POS).is_inf_neg());
        assert!(x.mul(&ZERO).is_zero());
        assert!(ZERO.mul(&x).is_zero());
        assert!(ZERO.mul(&x).mantissa().is_sign_positive());
    }

    #[test]
    fn test_div() {
        let d1 = Real::new(1.0, 10);
        let d2 = Real::new(4.0, -3);
        let r = d1.div(&d2);
        assert_eq!(r.mantissa(), 2.5);
        assert_eq!(r.magnitude(), 12);

        let r = Real::new(-9.0, 4).div(&Real::new(3.0, 1));
        assert_eq!(r.mantissa(), -3.0);
        assert_eq!(r.magnitude(), 3);

        assert!(d1.div(&ONE) == d1);
        assert!(d1.div(&MINUS_ONE) == d1.inv_sign());
        assert!(d1.div(&d1) == ONE);

        assert!(EPSILON.div(&TEN).is_zero());
        assert!(MAX_VALUE.div(&Real::new(1.0, -1)).is_inf_pos());
        assert!(MIN_VALUE.div(&EPSILON).is_inf_neg());
        assert!(EPSILON.div(&MAX_VALUE).is_zero());

        // magnitude one above the limit comes back after normalization.
        let r = Real::new(1.0, MAX_MAGNITUDE).div(&Real::new(2.0, -1));
        assert_eq!(r.mantissa(), 5.0);
        assert_eq!(r.magnitude(), MAX_MAGNITUDE);
        assert!(r.is_finite());
        let r = Real::new(-1.0, MIN_MAGNITUDE + 1).div(&Real::new(2.0, 0));
        assert_eq!(r.mantissa(), -5.0);
        assert_eq!(r.magnitude(), MIN_MAGNITUDE);
    }

    #[test]
    fn test_div_special() {
        let x = Real::new(-7.0, 3);

        assert!(NAN.div(&x).is_nan());
        assert!(x.div(&NAN).is_nan());
        assert!(INF_POS.div(&INF_POS).is_nan());
        assert!(INF_NEG.div(&INF_POS).is_nan());
        assert!(INF_POS.div(&x).is_inf_neg());
        assert!(INF_NEG.div(&x).is_inf_pos());
        assert!(INF_POS.div(&ZERO).is_inf_pos());
        assert!(INF_NEG.div(&ZERO).is_inf_neg());
        assert!(x.div(&INF_POS).is_zero());
        assert!(x.div(&INF_NEG).is_zero());
        assert!(x.div(&ZERO).is_inf_neg());
        assert!(x.inv_sign().div(&ZERO).is_inf_pos());
        assert!(ZERO.div(&ZERO).is_nan());
        assert!(ZERO.div(&x).is_zero());
    }
}
