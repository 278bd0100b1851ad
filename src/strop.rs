//! String conversion.

use crate::common::buf::DigitBuf;
use crate::defs::Error;
use crate::defs::Magnitude;
use crate::num::Real;
use crate::num::NAN;
use crate::parser::parse;
use core::fmt::Display;
use core::fmt::Formatter;
use core::fmt::LowerExp;
use core::fmt::UpperExp;
use core::fmt::Write;

/// Numbers with magnitude in this range are formatted in ordinary decimal notation.
const ORDINARY_MAGNITUDE_MIN: Magnitude = -4;
const ORDINARY_MAGNITUDE_MAX: Magnitude = 14;

impl Real {
    /// Parses a number from a string.
    ///
    /// The accepted format is an optional sign, decimal digits with an optional fractional part,
    /// and an optional exponent introduced by `e` or `E`, e.g. `-1.5e+300`, or one of
    /// `NaN`, `Inf`, `Infinity` with an optional sign, case-insensitive.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: the string does not represent a number.
    pub fn parse(s: &str) -> Result<Self, Error> {
        let ps = parse(s);

        if !ps.is_valid() {
            return Err(Error::InvalidArgument);
        }

        if ps.is_nan() {
            return Ok(NAN);
        }

        if ps.is_inf() {
            return Ok(Self::inf(ps.sign()));
        }

        let (m, s, e) = ps.raw_parts();

        Ok(Self::from_digits(s, m, e.saturating_sub(1)))
    }

    /// Writes the number in ordinary or scientific notation depending on its magnitude.
    fn write_str<T: Write>(&self, w: &mut T, precision: Option<usize>) -> core::fmt::Result {
        if let Some(s) = self.special_str() {
            return w.write_str(s);
        }

        if self.e >= ORDINARY_MAGNITUDE_MIN && self.e <= ORDINARY_MAGNITUDE_MAX {
            match precision {
                Some(p) => write!(w, "{:.*}", p, self.to_f64()),
                None => w.write_str(&self.ordinary_str()),
            }
        } else {
            self.write_exp(w, precision, 'E')
        }
    }

    /// Writes the number in scientific notation with exponent character `ec`.
    fn write_exp<T: Write>(&self, w: &mut T, precision: Option<usize>, ec: char) -> core::fmt::Result {
        if let Some(s) = self.special_str() {
            return w.write_str(s);
        }

        let (m, e) = match precision {
            Some(p) => {
                let m = format!("{:.*}", p, self.m.abs());
                if m.starts_with("10") {
                    // rounded up to the next magnitude.
                    (format!("{:.*}", p, 1.0), self.e.saturating_add(1))
                } else {
                    (m, self.e)
                }
            }
            None => {
                let (digits, e0) = DigitBuf::from_f64(self.m);
                (Self::digits_str(&digits, 1), self.e + e0)
            }
        };

        if self.is_negative() {
            w.write_char('-')?;
        }

        let es = if e < 0 { '-' } else { '+' };

        write!(w, "{}{}{}{:02}", m, ec, es, e.unsigned_abs())
    }

    fn special_str(&self) -> Option<&'static str> {
        if self.is_nan() {
            Some("NaN")
        } else if self.is_inf_pos() {
            Some("+Infinity")
        } else if self.is_inf_neg() {
            Some("-Infinity")
        } else if self.is_zero() {
            Some("0")
        } else {
            None
        }
    }

    /// Returns the number in ordinary decimal notation built from the shortest digits of the mantissa.
    fn ordinary_str(&self) -> String {
        let (digits, e0) = DigitBuf::from_f64(self.m);
        let e = self.e + e0;

        let mut ret = String::new();

        if self.is_negative() {
            ret.push('-');
        }

        if e < 0 {
            ret.push_str("0.");
            for _ in 0..(-e - 1) {
                ret.push('0');
            }
            ret.push_str(&Self::digits_str(&digits, digits.len()));
        } else {
            let int_len = e as usize + 1;
            ret.push_str(&Self::digits_str(&digits, int_len));
        }

        ret
    }

    /// Writes digits with the decimal point after `int_len` digits.
    /// Missing integer digits are filled with zeroes, and the point is omitted for integers.
    fn digits_str(digits: &DigitBuf, int_len: usize) -> String {
        let mut ret = String::with_capacity(digits.len().max(int_len) + 1);

        for i in 0..int_len {
            let d = digits.get(i).copied().unwrap_or(0);
            ret.push(char::from(b'0' + d));
        }

        if digits.len() > int_len {
            ret.push('.');
            for d in digits[int_len..].iter() {
                ret.push(char::from(b'0' + *d));
            }
        }

        ret
    }
}

// Pads the formatted number with respect to the width and alignment of the formatter.
fn pad(f: &mut Formatter<'_>, s: &str) -> core::fmt::Result {
    match s.strip_prefix('-') {
        Some(body) => f.pad_integral(false, "", body),
        None => f.pad_integral(true, "", s),
    }
}

impl Display for Real {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        let mut s = String::new();
        self.write_str(&mut s, f.precision())?;
        pad(f, &s)
    }
}

impl UpperExp for Real {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        let mut s = String::new();
        self.write_exp(&mut s, f.precision(), 'E')?;
        pad(f, &s)
    }
}

impl LowerExp for Real {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        let mut s = String::new();
        self.write_exp(&mut s, f.precision(), 'e')?;
        pad(f, &s)
    }
}
