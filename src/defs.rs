//! Definitions.

use core::fmt::Display;

/// A decimal exponent.
pub type Magnitude = i64;

/// Maximum magnitude value.
/// The largest integer such that every integer of smaller absolute value is exactly representable by `f64`.
pub const MAX_MAGNITUDE: Magnitude = 999_999_999_999_999;

/// Minimum magnitude value.
pub const MIN_MAGNITUDE: Magnitude = -999_999_999_999_999;

/// The largest mantissa of a finite number.
pub const MAX_MANTISSA: f64 = 9.999999999999999;

/// Terms more than this many orders of magnitude smaller than the other operand of an addition are dropped.
pub const ADD_PRECISION_WINDOW: Magnitude = 16;

/// Numbers with larger magnitude are always even; numbers with magnitude below the negated value have no parity.
pub const PARITY_MAGNITUDE_LIMIT: Magnitude = 15;

/// Sign.
#[derive(PartialEq, Eq, Copy, Clone, Debug, Hash)]
pub enum Sign {
    /// Negative.
    Neg = -1,

    /// Positive.
    Pos = 1,
}

impl Sign {
    /// Changes the sign to the opposite.
    pub fn invert(&self) -> Self {
        match *self {
            Sign::Pos => Sign::Neg,
            Sign::Neg => Sign::Pos,
        }
    }

    /// Returns true if `self` is positive.
    pub fn is_positive(&self) -> bool {
        *self == Sign::Pos
    }

    /// Returns true if `self` is negative.
    pub fn is_negative(&self) -> bool {
        *self == Sign::Neg
    }

    /// Returns 1 for the positive sign and -1 for the negative sign.
    pub fn to_int(&self) -> i8 {
        *self as i8
    }

    /// Returns 1.0 for the positive sign and -1.0 for the negative sign.
    pub fn to_f64(&self) -> f64 {
        *self as i8 as f64
    }

    /// Returns the sign of `f`. Zero and NaN are considered positive.
    pub fn of_f64(f: f64) -> Self {
        if f < 0.0 {
            Sign::Neg
        } else {
            Sign::Pos
        }
    }
}

/// Possible errors.
#[derive(Debug, Clone, Copy)]
pub enum Error {
    /// The value does not fit into the range of the target type.
    Overflow(Sign),

    /// Invalid argument.
    InvalidArgument,
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        None
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let repr = match self {
            Error::Overflow(s) => {
                if s.is_positive() {
                    "positive overflow"
                } else {
                    "negative overflow"
                }
            }
            Error::InvalidArgument => "invalid argument",
        };
        f.write_str(repr)
    }
}

impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Overflow(l0), Self::Overflow(r0)) => l0 == r0,
            _ => core::mem::discriminant(self) == core::mem::discriminant(other),
        }
    }
}

/// Behavior of a number used as an exponent of a negative base.
#[derive(PartialEq, Eq, Copy, Clone, Debug, Hash)]
pub enum Parity {
    /// An even integer, or a fraction with an even numerator and an odd denominator.
    /// A negative base raised to such power gives a positive result.
    Even,

    /// An odd integer, or a fraction with an odd numerator and an odd denominator.
    /// A negative base raised to such power gives a negative result.
    Odd,

    /// A fraction with an even denominator, NaN, or infinity.
    /// A negative base raised to such power has no real value.
    NonParity,
}
