//! Arithmetic, power, logarithmic and trigonometric operations.

mod add;
mod log;
mod mul;
mod parity;
mod pow;
mod rem;
mod sqrt;
pub(crate) mod trig;
mod trigh;
