//! Logarithms.

use crate::num::Real;
use crate::num::INF_NEG;
use crate::num::INF_POS;
use crate::num::NAN;
use core::f64::consts::LN_10;
use core::f64::consts::LOG2_10;

impl Real {
    // Special values of logarithm functions, or None for a finite positive argument.
    fn log_special(&self) -> Option<Self> {
        if self.is_nan() || self.is_negative() {
            Some(NAN)
        } else if self.is_zero() {
            Some(INF_NEG)
        } else if self.is_inf_pos() {
            Some(INF_POS)
        } else {
            None
        }
    }

    /// Computes the natural logarithm of a number.
    /// The result is NaN for a negative argument, and negative infinity for zero.
    pub fn ln(&self) -> Self {
        if let Some(ret) = self.log_special() {
            return ret;
        }

        // ln(m * 10^e) = ln(m) + e * ln(10)
        let ln_m = Self::from_f64(self.m.ln());
        let scaled = Self::from_i64(self.e).mul(&Self::from_f64(LN_10));

        ln_m.add(&scaled)
    }

    /// Computes the decimal logarithm of a number.
    pub fn log10(&self) -> Self {
        if let Some(ret) = self.log_special() {
            return ret;
        }

        Self::from_f64(self.m.log10()).add(&Self::from_i64(self.e))
    }

    /// Computes the binary logarithm of a number.
    pub fn log2(&self) -> Self {
        if let Some(ret) = self.log_special() {
            return ret;
        }

        let scaled = Self::from_i64(self.e).mul(&Self::from_f64(LOG2_10));

        Self::from_f64(self.m.log2()).add(&scaled)
    }

    /// Computes the logarithm of a number with base `base`.
    pub fn log(&self, base: &Self) -> Self {
        self.ln().div(&base.ln())
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::defs::MAX_MAGNITUDE;
    use crate::defs::MIN_MAGNITUDE;
    use crate::num::EPSILON;
    use crate::num::E;
    use crate::num::MAX_VALUE;
    use crate::num::ONE;
    use crate::num::TEN;
    use crate::num::TWO;
    use crate::num::ZERO;

    fn assert_close(d1: &Real, d2: &Real, eps: f64) {
        assert!(
            d1.sub(d2).abs() <= d2.abs().mul(&Real::from_f64(eps)),
            "{:?} != {:?}",
            d1,
            d2
        );
    }

    #[test]
    fn test_ln() {
        assert!(ONE.ln().is_zero());
        assert_close(&E.ln(), &ONE, 1e-15);
        assert_close(&TWO.ln(), &Real::from_f64(core::f64::consts::LN_2), 1e-15);

        // ln(10^1000) = 1000 ln(10)
        let r = Real::new(1.0, 1000).ln();
        assert_close(&r, &Real::from_f64(1000.0 * LN_10), 1e-15);

        // ln(2.5e-400) = ln(2.5) - 400 ln(10)
        let r = Real::new(2.5, -400).ln();
        assert_close(&r, &Real::from_f64(2.5f64.ln() - 400.0 * LN_10), 1e-14);

        let r = MAX_VALUE.ln();
        assert_close(&r, &Real::from_f64(MAX_MAGNITUDE as f64 * LN_10), 1e-14);
        assert!(EPSILON.ln().is_negative());
        assert_close(&EPSILON.ln(), &Real::from_f64(MIN_MAGNITUDE as f64 * LN_10), 1e-14);

        assert!(NAN.ln().is_nan());
        assert!(ONE.inv_sign().ln().is_nan());
        assert!(INF_NEG.ln().is_nan());
        assert!(ZERO.ln().is_inf_neg());
        assert!(INF_POS.ln().is_inf_pos());
    }

    #[test]
    fn test_log10() {
        assert!(Real::new(1.0, 12345).log10() == Real::from_i64(12345));
        assert!(Real::new(1.0, -7).log10() == Real::from_i64(-7));
        assert!(TEN.log10() == ONE);

        let r = Real::new(2.0, 100).log10();
        assert_close(&r, &Real::from_f64(100.0 + 2f64.log10()), 1e-15);

        assert!(ZERO.log10().is_inf_neg());
        assert!(TWO.inv_sign().log10().is_nan());
    }

    #[test]
    fn test_log2() {
        assert!(Real::from_f64(1024.0).log2().sub(&Real::from_f64(10.0)).abs() < Real::new(1.0, -14));
        assert_close(&Real::new(1.0, 300).log2(), &Real::from_f64(300.0 * LOG2_10), 1e-15);
        assert!(ZERO.log2().is_inf_neg());
        assert!(NAN.log2().is_nan());
    }

    #[test]
    fn test_log() {
        let r = Real::new(1.0, 30).log(&Real::new(1.0, 3));
        assert_close(&r, &Real::from_f64(10.0), 1e-15);

        let r = Real::from_f64(81.0).log(&Real::from_f64(3.0));
        assert_close(&r, &Real::from_f64(4.0), 1e-14);

        assert!(TWO.log(&ONE).is_inf_pos());
        assert!(TWO.log(&TWO.inv_sign()).is_nan());
        assert!(ONE.log(&ONE).is_nan());
    }
}
