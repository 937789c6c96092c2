//! Full-precision multiply-then-divide.
//!
//! Reserve products routinely exceed `u128` (two 100-bit reserves already
//! need 200 bits), so every `a * b / c` in the pricing path goes through a
//! 256-bit intermediate and only the final quotient has to fit in `u128`.

use ethnum::U256;

use crate::domain::Rounding;
use crate::error::AmmError;

/// Widening product of two `u128` values.  Never overflows.
#[must_use]
pub fn full_mul(a: u128, b: u128) -> U256 {
    U256::from(a) * U256::from(b)
}

/// Narrows a 256-bit value back to `u128`.
///
/// # Errors
///
/// Returns [`AmmError::Overflow`] with `context` if the high word is set.
pub fn narrow(value: U256, context: &'static str) -> Result<u128, AmmError> {
    let (hi, lo) = value.into_words();
    if hi != 0 {
        return Err(AmmError::Overflow(context));
    }
    Ok(lo)
}

/// Divides a 256-bit numerator, rounding as requested.
///
/// # Errors
///
/// - [`AmmError::DivisionByZero`] if `denominator` is zero.
/// - [`AmmError::Overflow`] if the quotient does not fit in `u128`.
pub fn div_wide(numerator: U256, denominator: U256, rounding: Rounding) -> Result<u128, AmmError> {
    if denominator == U256::ZERO {
        return Err(AmmError::DivisionByZero);
    }
    let q = numerator / denominator;
    let q = if rounding.is_up() && numerator % denominator != U256::ZERO {
        q + U256::ONE
    } else {
        q
    };
    narrow(q, "mul_div quotient exceeds u128")
}

/// Computes `a * b / denominator` without intermediate overflow.
///
/// # Errors
///
/// - [`AmmError::DivisionByZero`] if `denominator` is zero.
/// - [`AmmError::Overflow`] if the quotient does not fit in `u128`.
///
/// # Examples
///
/// ```
/// use hydra_pair::domain::Rounding;
/// use hydra_pair::math::mul_div;
///
/// // u128::MAX * 2 / 4 overflows a naive u128 product
/// assert_eq!(mul_div(u128::MAX, 2, 4, Rounding::Down).ok(), Some(u128::MAX / 2));
/// ```
pub fn mul_div(a: u128, b: u128, denominator: u128, rounding: Rounding) -> Result<u128, AmmError> {
    div_wide(full_mul(a, b), U256::from(denominator), rounding)
}
