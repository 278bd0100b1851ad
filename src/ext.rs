//! Implementation of the standard library traits.

use crate::defs::Error;
use crate::num::Real;
use crate::num::ONE;
use crate::num::ZERO;
use core::iter::Product;
use core::iter::Sum;
use core::ops::Add;
use core::ops::AddAssign;
use core::ops::Div;
use core::ops::DivAssign;
use core::ops::Mul;
use core::ops::MulAssign;
use core::ops::Neg;
use core::ops::Rem;
use core::ops::RemAssign;
use core::ops::Sub;
use core::ops::SubAssign;
use core::str::FromStr;

macro_rules! impl_op {
    ($trait:ident, $fname:ident, $assign_trait:ident, $assign_fname:ident) => {
        impl $trait for Real {
            type Output = Self;
            fn $fname(self, rhs: Self) -> Self::Output {
                Real::$fname(&self, &rhs)
            }
        }

        impl $trait<&Real> for Real {
            type Output = Self;
            fn $fname(self, rhs: &Real) -> Self::Output {
                Real::$fname(&self, rhs)
            }
        }

        impl $trait<Real> for &Real {
            type Output = Real;
            fn $fname(self, rhs: Real) -> Self::Output {
                Real::$fname(self, &rhs)
            }
        }

        impl<'a> $trait<&'a Real> for &Real {
            type Output = Real;
            fn $fname(self, rhs: &'a Real) -> Self::Output {
                Real::$fname(self, rhs)
            }
        }

        impl $assign_trait for Real {
            fn $assign_fname(&mut self, rhs: Self) {
                *self = Real::$fname(self, &rhs)
            }
        }

        impl $assign_trait<&Real> for Real {
            fn $assign_fname(&mut self, rhs: &Real) {
                *self = Real::$fname(self, rhs)
            }
        }
    };
}

impl_op!(Add, add, AddAssign, add_assign);
impl_op!(Sub, sub, SubAssign, sub_assign);
impl_op!(Mul, mul, MulAssign, mul_assign);
impl_op!(Div, div, DivAssign, div_assign);
impl_op!(Rem, rem, RemAssign, rem_assign);

impl Neg for Real {
    type Output = Self;
    fn neg(self) -> Self::Output {
        self.inv_sign()
    }
}

impl Neg for &Real {
    type Output = Real;
    fn neg(self) -> Self::Output {
        self.inv_sign()
    }
}

impl FromStr for Real {
    type Err = Error;

    /// Returns parsed number or `Error::InvalidArgument` if the string does not represent a number.
    fn from_str(src: &str) -> Result<Real, Self::Err> {
        Real::parse(src)
    }
}

impl Product for Real {
    fn product<I: Iterator<Item = Real>>(iter: I) -> Self {
        let mut acc = ONE;
        for v in iter {
            acc *= v;
        }
        acc
    }
}

impl Sum for Real {
    fn sum<I: Iterator<Item = Real>>(iter: I) -> Self {
        let mut acc = ZERO;
        for v in iter {
            acc += v;
        }
        acc
    }
}

impl<'a> Product<&'a Real> for Real {
    fn product<I: Iterator<Item = &'a Real>>(iter: I) -> Self {
        let mut acc = ONE;
        for v in iter {
            acc *= v;
        }
        acc
    }
}

impl<'a> Sum<&'a Real> for Real {
    fn sum<I: Iterator<Item = &'a Real>>(iter: I) -> Self {
        let mut acc = ZERO;
        for v in iter {
            acc += v;
        }
        acc
    }
}
