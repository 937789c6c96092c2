//! Arithmetic utilities for pool calculations.
//!
//! - [`CheckedArithmetic`] for overflow-safe operations on domain types.
//! - [`mul_div`] and friends for 256-bit intermediates.
//! - [`isqrt`] for geometric-mean share minting.

mod checked;
mod mul_div;
mod sqrt;

pub use checked::CheckedArithmetic;
pub use mul_div::{div_wide, full_mul, mul_div, narrow};
pub use sqrt::isqrt;
