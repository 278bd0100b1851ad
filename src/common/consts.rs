//! Static lookup tables.

use lazy_static::lazy_static;

/// Largest `n` such that `10^n` is a finite `f64`.
pub const POW10_MAX: usize = 308;

/// Largest `n` such that `10^-n` is a nonzero `f64`.
pub const NEG_POW10_MAX: usize = 323;

/// Largest `n` such that `10^n` is exactly representable by `f64`.
pub const POW10_EXACT_MAX: usize = 22;

lazy_static! {
    /// Powers of ten from `10^0` to `10^308`, each correctly rounded.
    pub static ref POW10: [f64; POW10_MAX + 1] = {
        let mut t = [1.0; POW10_MAX + 1];
        for (i, v) in t.iter_mut().enumerate() {
            *v = format!("1e{}", i).parse().unwrap();
        }
        t
    };

    /// Powers of ten from `10^0` to `10^-323`, each correctly rounded.
    pub static ref NEG_POW10: [f64; NEG_POW10_MAX + 1] = {
        let mut t = [1.0; NEG_POW10_MAX + 1];
        for (i, v) in t.iter_mut().enumerate() {
            *v = format!("1e-{}", i).parse().unwrap();
        }
        t
    };
}
