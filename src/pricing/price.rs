//! Spot price and proportional quotes.

use crate::domain::{Amount, Price, Rounding, SCALE};
use crate::error::AmmError;
use crate::math::mul_div;

/// Spot price of A in B: `reserve_b × SCALE / reserve_a`, truncated.
///
/// An empty A side yields [`Price::ZERO`] rather than an error.
///
/// # Errors
///
/// Returns [`AmmError::Overflow`] if the scaled price does not fit in `u128`.
///
/// # Examples
///
/// ```
/// use hydra_pair::domain::{Amount, SCALE};
/// use hydra_pair::pricing::get_price;
///
/// let p = get_price(Amount::new(100), Amount::new(200));
/// assert_eq!(p.map(|p| p.raw()).ok(), Some(2 * SCALE));
/// ```
pub fn get_price(reserve_a: Amount, reserve_b: Amount) -> crate::error::Result<Price> {
    if reserve_a.is_zero() {
        return Ok(Price::ZERO);
    }
    mul_div(reserve_b.get(), SCALE, reserve_a.get(), Rounding::Down).map(Price::from_raw)
}

/// Amount of the other asset matching `amount` at the current ratio,
/// rounded down.
///
/// # Errors
///
/// - [`AmmError::ZeroAmount`] if `amount` is zero.
/// - [`AmmError::InsufficientLiquidity`] if either reserve is zero.
/// - [`AmmError::Overflow`] if the quote does not fit in `u128`.
pub fn quote(amount: Amount, reserve_from: Amount, reserve_to: Amount) -> crate::error::Result<Amount> {
    if amount.is_zero() {
        return Err(AmmError::ZeroAmount);
    }
    if reserve_from.is_zero() || reserve_to.is_zero() {
        return Err(AmmError::InsufficientLiquidity);
    }
    mul_div(amount.get(), reserve_to.get(), reserve_from.get(), Rounding::Down).map(Amount::new)
}
