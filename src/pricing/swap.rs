//! Constant-product swap quotes.
//!
//! # Exact-in (`get_amount_out`)
//!
//! ```text
//! in_with_fee = amount_in × fee_num
//! amount_out  = ⌊ in_with_fee × reserve_out / (reserve_in × fee_den + in_with_fee) ⌋
//! ```
//!
//! # Exact-out (`get_amount_in`)
//!
//! ```text
//! amount_in = ⌊ reserve_in × amount_out × fee_den / ((reserve_out − amount_out) × fee_num) ⌋ + 1
//! ```
//!
//! All intermediates are 256-bit; only the final quantity must fit in `u128`.

use ethnum::U256;

use crate::domain::{Amount, FeeRatio, Rounding};
use crate::error::AmmError;
use crate::math::{div_wide, full_mul};

/// Output received for selling `amount_in` into a pool holding
/// `reserve_in` / `reserve_out`.
///
/// The result is strictly below `reserve_out`: no single swap can empty
/// the output side.  It may be zero for dust inputs.
///
/// # Errors
///
/// - [`AmmError::InvalidAmount`] if `amount_in` is zero.
/// - [`AmmError::InsufficientLiquidity`] if either reserve is zero.
/// - [`AmmError::Overflow`] if the numerator exceeds 256 bits.
///
/// # Examples
///
/// ```
/// use hydra_pair::domain::{Amount, FeeRatio};
/// use hydra_pair::pricing::get_amount_out;
///
/// let out = get_amount_out(Amount::new(1), Amount::new(100), Amount::new(200), FeeRatio::DEFAULT);
/// assert_eq!(out.ok(), Some(Amount::new(1)));
/// ```
pub fn get_amount_out(
    amount_in: Amount,
    reserve_in: Amount,
    reserve_out: Amount,
    fee: FeeRatio,
) -> crate::error::Result<Amount> {
    if amount_in.is_zero() {
        return Err(AmmError::InvalidAmount);
    }
    if reserve_in.is_zero() || reserve_out.is_zero() {
        return Err(AmmError::InsufficientLiquidity);
    }

    let in_with_fee = full_mul(amount_in.get(), u128::from(fee.numerator()));
    let numerator = in_with_fee
        .checked_mul(U256::from(reserve_out.get()))
        .ok_or(AmmError::Overflow("amount_out numerator overflow"))?;
    let denominator = full_mul(reserve_in.get(), u128::from(fee.denominator()))
        .checked_add(in_with_fee)
        .ok_or(AmmError::Overflow("amount_out denominator overflow"))?;

    let amount_out = Amount::new(div_wide(numerator, denominator, Rounding::Down)?);
    if amount_out >= reserve_out {
        return Err(AmmError::InsufficientLiquidity);
    }
    Ok(amount_out)
}

/// Minimum input that yields at least `amount_out`.
///
/// # Errors
///
/// - [`AmmError::InvalidAmount`] if `amount_out` is zero.
/// - [`AmmError::InsufficientLiquidity`] if either reserve is zero or
///   `amount_out >= reserve_out`.
/// - [`AmmError::Overflow`] if the required input does not fit in `u128`.
pub fn get_amount_in(
    amount_out: Amount,
    reserve_in: Amount,
    reserve_out: Amount,
    fee: FeeRatio,
) -> crate::error::Result<Amount> {
    if amount_out.is_zero() {
        return Err(AmmError::InvalidAmount);
    }
    if reserve_in.is_zero() || reserve_out.is_zero() || amount_out >= reserve_out {
        return Err(AmmError::InsufficientLiquidity);
    }

    let numerator = full_mul(reserve_in.get(), amount_out.get())
        .checked_mul(U256::from(fee.denominator()))
        .ok_or(AmmError::Overflow("amount_in numerator overflow"))?;
    // amount_out < reserve_out was checked above
    let remaining = reserve_out.get() - amount_out.get();
    let denominator = full_mul(remaining, u128::from(fee.numerator()));

    let floor = div_wide(numerator, denominator, Rounding::Down)?;
    let amount_in = floor
        .checked_add(1)
        .ok_or(AmmError::Overflow("amount_in overflow"))?;
    Ok(Amount::new(amount_in))
}
