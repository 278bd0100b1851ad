//! Square and cube roots.

use crate::common::util::pow10;
use crate::num::Real;
use crate::num::INF_POS;
use crate::num::NAN;

impl Real {
    /// Computes the square root of a number. The result is NaN for a negative argument.
    pub fn sqrt(&self) -> Self {
        if self.is_nan() || self.is_negative() {
            return NAN;
        }

        if self.is_zero() {
            return *self;
        }

        if self.is_inf_pos() {
            return INF_POS;
        }

        // an odd magnitude moves one digit into the mantissa.
        let r = self.e.rem_euclid(2);
        let m = self.m * pow10(r as usize);

        Self::rectify(m.sqrt(), self.e.div_euclid(2))
    }

    /// Computes the cube root of a number.
    pub fn cbrt(&self) -> Self {
        if !self.is_finite() || self.is_zero() {
            return *self;
        }

        let r = self.e.rem_euclid(3);
        let m = self.m * pow10(r as usize);

        Self::rectify(m.cbrt(), self.e.div_euclid(3))
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::defs::MAX_MAGNITUDE;
    use crate::defs::MIN_MAGNITUDE;
    use crate::num::EPSILON;
    use crate::num::INF_NEG;
    use crate::num::MAX_VALUE;
    use crate::num::ONE;
    use crate::num::ZERO;

    #[test]
    fn test_sqrt() {
        let r = Real::new(4.0, 100).sqrt();
        assert!(r == Real::new(2.0, 50));

        let r = Real::new(4.0, 101).sqrt();
        assert_eq!(r.magnitude(), 50);
        assert_eq!(r.mantissa(), 40f64.sqrt());

        let r = Real::new(9.0, -3).sqrt();
        assert_eq!(r.magnitude(), -2);
        assert_eq!(r.mantissa(), 90f64.sqrt());

        let r = Real::new(1.0, -4).sqrt();
        assert!(r == Real::new(1.0, -2));

        let r = MAX_VALUE.sqrt();
        assert_eq!(r.magnitude(), MAX_MAGNITUDE / 2);
        let r = EPSILON.sqrt();
        assert_eq!(r.magnitude(), MIN_MAGNITUDE.div_euclid(2));

        assert!(ONE.sqrt() == ONE);
        assert!(ZERO.sqrt().is_zero());
        assert!(NAN.sqrt().is_nan());
        assert!(ONE.inv_sign().sqrt().is_nan());
        assert!(INF_NEG.sqrt().is_nan());
        assert!(INF_POS.sqrt().is_inf_pos());
    }

    #[test]
    fn test_cbrt() {
        let r = Real::new(8.0, 300).cbrt();
        assert!(r == Real::new(2.0, 100));

        let r = Real::new(-2.7, 1).cbrt();
        assert_eq!(r.magnitude(), 0);
        assert!((r.mantissa() + 3.0).abs() < 1e-15);

        let r = Real::new(1.0, -7).cbrt();
        assert_eq!(r.magnitude(), -3);
        assert_eq!(r.mantissa(), 100f64.cbrt());

        assert!(ZERO.cbrt().is_zero());
        assert!(NAN.cbrt().is_nan());
        assert!(INF_NEG.cbrt().is_inf_neg());
        assert!(INF_POS.cbrt().is_inf_pos());
    }
}
