//! Addition and subtraction.

use crate::common::util::scale_down;
use crate::defs::Sign;
use crate::defs::ADD_PRECISION_WINDOW;
use crate::num::Real;
use crate::num::NAN;

impl Real {
    /// Adds `d2` to `self` and returns the result of the operation.
    ///
    /// When the magnitudes of the operands differ by more than `ADD_PRECISION_WINDOW`,
    /// the operand with the larger magnitude is returned.
    pub fn add(&self, d2: &Self) -> Self {
        self.add_sub(d2, Sign::Pos)
    }

    /// Subtracts `d2` from `self` and returns the result of the operation.
    pub fn sub(&self, d2: &Self) -> Self {
        self.add_sub(d2, Sign::Neg)
    }

    fn add_sub(&self, d2: &Self, op: Sign) -> Self {
        if self.is_nan() || d2.is_nan() {
            return NAN;
        }

        let d2 = if op.is_negative() { d2.inv_sign() } else { *d2 };

        if self.is_inf() {
            if d2.is_inf() && d2.m != self.m {
                return NAN;
            }
            return *self;
        }

        if d2.is_inf() || self.is_zero() {
            return d2;
        }

        if d2.is_zero() {
            return *self;
        }

        let de = self.e - d2.e;

        if de > ADD_PRECISION_WINDOW {
            *self
        } else if de < -ADD_PRECISION_WINDOW {
            d2
        } else if de >= 0 {
            Self::rectify_flush(self.m + scale_down(d2.m, de as usize), self.e)
        } else {
            Self::rectify_flush(scale_down(self.m, (-de) as usize) + d2.m, d2.e)
        }
    }
}
