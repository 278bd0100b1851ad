//! Shared tables and helpers.

pub mod buf;
pub mod consts;
pub mod util;
