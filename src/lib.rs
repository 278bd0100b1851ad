//! Astro-real is a library of real numbers with a double precision mantissa and a decimal exponent.
//!
//! A number is kept as `m * 10^e`, where the mantissa `m` is an `f64` with `1 <= |m| < 10`,
//! and the magnitude `e` is an integer in the range from -999999999999999 to 999999999999999.
//! This covers values like factorials and binomial coefficients of large arguments,
//! which are far outside the range of `f64`, with the precision of `f64`.
//!
//! Values outside the range saturate to signed infinity or zero.
//! Undefined operations give NaN. Arithmetic operations never panic.
//!
//! ## Examples
//!
//! ```
//! use astro_real::Real;
//!
//! // 1000!
//! let f: Real = (1..=1000).map(Real::from_i32).product();
//!
//! assert_eq!(f.magnitude(), 2567);
//! assert!((f.mantissa() - 4.023872600770938).abs() < 1e-10);
//!
//! // magnitudes beyond 10^308 do not overflow.
//! let big = Real::new(1.5, 1_000_000);
//! let r = big * big / Real::TEN;
//!
//! assert_eq!(r.to_string(), "2.25E+1999999");
//! assert_eq!(r.to_f64(), f64::INFINITY);
//!
//! // parsing and formatting.
//! let x: Real = "-2.5e-300000".parse().unwrap();
//!
//! assert_eq!(format!("{:E}", x.abs()), "2.5E-300000");
//! ```

#![deny(clippy::suspicious)]
#![warn(missing_docs)]
#![allow(clippy::comparison_chain)]
#![allow(clippy::should_implement_trait)]

mod cmp;
mod common;
mod conv;
mod defs;
mod ext;
mod for_3rd;
mod num;
mod ops;
mod parser;
mod strop;

pub use crate::cmp::RealKey;
pub use crate::defs::Error;
pub use crate::defs::Magnitude;
pub use crate::defs::Parity;
pub use crate::defs::Sign;
pub use crate::num::Real;

pub use crate::defs::ADD_PRECISION_WINDOW;
pub use crate::defs::MAX_MAGNITUDE;
pub use crate::defs::MAX_MANTISSA;
pub use crate::defs::MIN_MAGNITUDE;
pub use crate::defs::PARITY_MAGNITUDE_LIMIT;

pub use crate::num::E;
pub use crate::num::EPSILON;
pub use crate::num::INF_NEG;
pub use crate::num::INF_POS;
pub use crate::num::MAX_VALUE;
pub use crate::num::MINUS_ONE;
pub use crate::num::MIN_VALUE;
pub use crate::num::NAN;
pub use crate::num::ONE;
pub use crate::num::PI;
pub use crate::num::TEN;
pub use crate::num::TWO;
pub use crate::num::ZERO;
