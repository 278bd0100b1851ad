//! Comparison of numbers.

use crate::num::Real;
use core::cmp::Ordering;
use core::hash::Hash;
use core::hash::Hasher;

impl Real {
    /// Compares two numbers which are not NaN.
    fn cmp_ordered(&self, d2: &Self) -> Ordering {
        if self.is_inf()
            || d2.is_inf()
            || self.is_zero()
            || d2.is_zero()
            || self.sign() != d2.sign()
        {
            // mantissas carry the sign, infinities, and zeroes.
            return self.m.partial_cmp(&d2.m).unwrap_or(Ordering::Equal);
        }

        let abs_ord = self
            .e
            .cmp(&d2.e)
            .then_with(|| self.m.abs().partial_cmp(&d2.m.abs()).unwrap_or(Ordering::Equal));

        if self.is_negative() {
            abs_ord.reverse()
        } else {
            abs_ord
        }
    }

    /// Returns the total order of `self` and `d2`: NaN is less than any other value
    /// and equal to NaN; the rest are compared numerically.
    pub fn total_cmp(&self, d2: &Self) -> Ordering {
        match (self.is_nan(), d2.is_nan()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (false, false) => self.cmp_ordered(d2),
        }
    }

    /// Returns true if `self` and `d2` are equal, or both are NaN.
    pub fn total_eq(&self, d2: &Self) -> bool {
        self.total_cmp(d2) == Ordering::Equal
    }

    /// Compares absolute values of `self` and `d2`. Returns None if any of them is NaN.
    pub fn abs_cmp(&self, d2: &Self) -> Option<Ordering> {
        self.abs().partial_cmp(&d2.abs())
    }

    /// Returns the smaller of `self` and `d2`. If one of the arguments is NaN, the other is returned.
    pub fn min(&self, d2: &Self) -> Self {
        if self.is_nan() || d2 < self {
            *d2
        } else {
            *self
        }
    }

    /// Returns the larger of `self` and `d2`. If one of the arguments is NaN, the other is returned.
    pub fn max(&self, d2: &Self) -> Self {
        if self.is_nan() || d2 > self {
            *d2
        } else {
            *self
        }
    }

    /// Restricts `self` to the range from `min` to `max`. NaN is returned as is.
    pub fn clamp(&self, min: &Self, max: &Self) -> Self {
        if self < min {
            *min
        } else if self > max {
            *max
        } else {
            *self
        }
    }
}

impl PartialEq for Real {
    fn eq(&self, other: &Self) -> bool {
        !self.is_nan() && !other.is_nan() && self.m == other.m && self.e == other.e
    }
}

impl PartialOrd for Real {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.is_nan() || other.is_nan() {
            None
        } else {
            Some(self.cmp_ordered(other))
        }
    }
}

impl Hash for Real {
    fn hash<H: Hasher>(&self, state: &mut H) {
        if self.is_nan() {
            // all NaNs are hashed the same.
            f64::NAN.to_bits().hash(state);
        } else {
            self.m.to_bits().hash(state);
            self.e.hash(state);
        }
    }
}

/// A number usable as a key of hash and ordered collections.
///
/// Keys are equal and ordered according to `Real::total_eq` and `Real::total_cmp`:
/// all NaNs are the same key, which is smaller than any other key.
#[derive(Debug, Clone, Copy)]
pub struct RealKey(pub Real);

impl PartialEq for RealKey {
    fn eq(&self, other: &Self) -> bool {
        self.0.total_eq(&other.0)
    }
}

impl Eq for RealKey {}

impl PartialOrd for RealKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for RealKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl Hash for RealKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl From<Real> for RealKey {
    fn from(d: Real) -> Self {
        RealKey(d)
    }
}
