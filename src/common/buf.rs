//! Buffer for holding decimal digits.

use crate::defs::Magnitude;
use core::ops::Deref;
use core::ops::DerefMut;
use smallvec::SmallVec;

/// Shortest representation of `f64` has at most 17 significant digits.
const STATIC_ALLOCATION: usize = 24;

/// Buffer for holding decimal digits, the most significant digit first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DigitBuf {
    inner: SmallVec<[u8; STATIC_ALLOCATION]>,
}

impl DigitBuf {
    #[inline]
    pub fn new() -> Self {
        DigitBuf {
            inner: SmallVec::new(),
        }
    }

    /// Returns the shortest decimal digits which identify `|f|` uniquely,
    /// and the decimal exponent of the first digit.
    /// For zero, the digits are empty.
    pub fn from_f64(f: f64) -> (Self, Magnitude) {
        let mut ret = Self::new();

        if f == 0.0 || !f.is_finite() {
            return (ret, 0);
        }

        // LowerExp without precision writes the shortest round-trip representation.
        let s = format!("{:e}", f.abs());
        let mut parts = s.split('e');

        if let Some(m) = parts.next() {
            for c in m.chars() {
                if let Some(d) = c.to_digit(10) {
                    ret.push(d as u8);
                }
            }
        }

        let e = parts.next().and_then(|e| e.parse().ok()).unwrap_or(0);

        ret.trunc_trailing_zeroes();

        (ret, e)
    }

    #[inline]
    pub fn push(&mut self, d: u8) {
        self.inner.push(d);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Remove trailing digits containing zeroes.
    pub fn trunc_trailing_zeroes(&mut self) {
        while let Some(0) = self.inner.last() {
            self.inner.pop();
        }
    }

    /// Remove leading digits containing zeroes.
    pub fn trunc_leading_zeroes(&mut self) -> usize {
        let n = self.inner.iter().take_while(|d| **d == 0).count();
        self.inner.drain(..n);
        n
    }

    /// Returns the number `d0.d1d2...` correctly rounded to `f64`, where `di` are the digits.
    /// For empty digits the result is zero.
    pub fn to_mantissa(&self) -> f64 {
        self.to_f64(0)
    }

    /// Returns the number `d0.d1d2... * 10^e` correctly rounded to `f64`.
    /// For empty digits the result is zero.
    pub fn to_f64(&self, e: Magnitude) -> f64 {
        let mut s = String::with_capacity(self.len() + 24);
        for (i, d) in self.inner.iter().enumerate() {
            if i == 1 {
                s.push('.');
            }
            s.push(char::from(b'0' + *d));
        }
        if e != 0 {
            s.push('e');
            s.push_str(&e.to_string());
        }
        // digits are always in the range 0-9.
        s.parse().unwrap_or(0.0)
    }

    /// Returns digits as an integer number, or None if it does not fit into `u64`.
    pub fn to_u64(&self) -> Option<u64> {
        let mut ret: u64 = 0;
        for d in self.inner.iter() {
            ret = ret.checked_mul(10)?.checked_add(*d as u64)?;
        }
        Some(ret)
    }
}

impl Deref for DigitBuf {
    type Target = [u8];

    #[inline]
    fn deref(&self) -> &[u8] {
        self.inner.deref()
    }
}

impl DerefMut for DigitBuf {
    #[inline]
    fn deref_mut(&mut self) -> &mut [u8] {
        self.inner.deref_mut()
    }
}
