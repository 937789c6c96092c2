//! Deposit sizing, share minting and withdrawal payouts.
//!
//! # First deposit
//!
//! The opening provider sets the price.  Both offered amounts are used in
//! full and the minted shares are the geometric mean `⌊√(a × b)⌋`, which
//! makes the share value independent of which asset is larger.
//!
//! # Later deposits
//!
//! Offered amounts are trimmed to the current reserve ratio; the excess
//! stays with the provider.  Shares are minted pro rata to whichever side
//! contributes the smaller fraction, so a lopsided deposit cannot dilute
//! existing holders.  The provider then pays [`deposit_for_liquidity`]
//! for those shares, never more than the trimmed offer.

use super::price::quote;
use crate::domain::{Amount, Liquidity, Rounding};
use crate::error::AmmError;
use crate::math::{full_mul, isqrt, mul_div};
use crate::state::ReserveState;

/// Amounts of A and B actually taken for a deposit offering
/// `amount_a` / `amount_b`.
///
/// Both returned values are `<=` the corresponding offer.  For an empty
/// pool the offer is returned unchanged.
///
/// # Errors
///
/// - [`AmmError::ZeroAmount`] if either offer is zero.
/// - [`AmmError::Overflow`] on arithmetic overflow.
///
/// # Examples
///
/// ```
/// use hydra_pair::domain::Amount;
/// use hydra_pair::pricing::quote_liquidity;
/// use hydra_pair::state::ReserveState;
///
/// // empty pool: offer is used as-is
/// let used = quote_liquidity(Amount::new(100), Amount::new(200), &ReserveState::EMPTY);
/// assert_eq!(used.ok(), Some((Amount::new(100), Amount::new(200))));
/// ```
pub fn quote_liquidity(
    amount_a: Amount,
    amount_b: Amount,
    reserves: &ReserveState,
) -> crate::error::Result<(Amount, Amount)> {
    if amount_a.is_zero() || amount_b.is_zero() {
        return Err(AmmError::ZeroAmount);
    }
    if reserves.is_empty() {
        return Ok((amount_a, amount_b));
    }
    let (reserve_a, reserve_b) = (reserves.reserve_a(), reserves.reserve_b());

    let optimal_b = quote(amount_a, reserve_a, reserve_b)?;
    if optimal_b <= amount_b {
        return Ok((amount_a, optimal_b));
    }
    let optimal_a = quote(amount_b, reserve_b, reserve_a)?;
    if optimal_a > amount_a {
        return Err(AmmError::InvariantViolation(
            "optimal deposit exceeds offered amount",
        ));
    }
    Ok((optimal_a, amount_b))
}

/// Shares to mint for depositing exactly `used_a` / `used_b`.
///
/// # Errors
///
/// - [`AmmError::InsufficientLiquidityMinted`] if the result is zero.
/// - [`AmmError::Overflow`] on arithmetic overflow.
pub fn liquidity_to_mint(
    used_a: Amount,
    used_b: Amount,
    reserves: &ReserveState,
) -> crate::error::Result<Liquidity> {
    let minted = if reserves.is_empty() {
        isqrt(full_mul(used_a.get(), used_b.get()))
    } else {
        let total = reserves.total_liquidity().get();
        let by_a = mul_div(
            used_a.get(),
            total,
            reserves.reserve_a().get(),
            Rounding::Down,
        )?;
        let by_b = mul_div(
            used_b.get(),
            total,
            reserves.reserve_b().get(),
            Rounding::Down,
        )?;
        by_a.min(by_b)
    };
    if minted == 0 {
        return Err(AmmError::InsufficientLiquidityMinted);
    }
    Ok(Liquidity::new(minted))
}

/// Assets a later depositor must pay for exactly `minted` shares, rounded
/// up on both sides.
///
/// Shares are minted from the scarcer side of a deposit, so the amounts
/// from [`quote_liquidity`] can overpay the other side.  Pulling these
/// amounts instead keeps a deposit followed by a full withdrawal within
/// one unit per asset.
///
/// # Errors
///
/// - [`AmmError::InsufficientLiquidity`] if no shares are outstanding.
/// - [`AmmError::Overflow`] on arithmetic overflow.
pub fn deposit_for_liquidity(
    minted: Liquidity,
    reserves: &ReserveState,
) -> crate::error::Result<(Amount, Amount)> {
    let total = reserves.total_liquidity();
    if total.is_zero() {
        return Err(AmmError::InsufficientLiquidity);
    }
    let amount_a = mul_div(
        minted.get(),
        reserves.reserve_a().get(),
        total.get(),
        Rounding::Up,
    )?;
    let amount_b = mul_div(
        minted.get(),
        reserves.reserve_b().get(),
        total.get(),
        Rounding::Up,
    )?;
    Ok((Amount::new(amount_a), Amount::new(amount_b)))
}

/// Pro-rata payout for burning `shares`, rounded down on both sides.
///
/// # Errors
///
/// - [`AmmError::ZeroAmount`] if `shares` is zero.
/// - [`AmmError::InsufficientLiquidity`] if no shares are outstanding.
/// - [`AmmError::InsufficientShares`] if `shares` exceeds the total supply.
pub fn amounts_for_liquidity(
    shares: Liquidity,
    reserves: &ReserveState,
) -> crate::error::Result<(Amount, Amount)> {
    if shares.is_zero() {
        return Err(AmmError::ZeroAmount);
    }
    let total = reserves.total_liquidity();
    if total.is_zero() {
        return Err(AmmError::InsufficientLiquidity);
    }
    if shares > total {
        return Err(AmmError::InsufficientShares);
    }
    let amount_a = mul_div(
        shares.get(),
        reserves.reserve_a().get(),
        total.get(),
        Rounding::Down,
    )?;
    let amount_b = mul_div(
        shares.get(),
        reserves.reserve_b().get(),
        total.get(),
        Rounding::Down,
    )?;
    Ok((Amount::new(amount_a), Amount::new(amount_b)))
}
