//! Swap execution and price queries.
//!
//! # Fee Invariant
//!
//! The fee is taken from the input before the curve is applied, and stays
//! in the input reserve:
//!
//! ```text
//! in_with_fee = amount_in × fee_num / fee_den
//! amount_out  = reserve_out × in_with_fee / (reserve_in + in_with_fee)
//! ```
//!
//! so `reserve_in × reserve_out` never decreases across a swap.

use crate::domain::{AccountId, Amount, FeeRatio, Price, SwapDirection, SwapResult};
use crate::error::AmmError;

/// A pool that exchanges one asset of its pair for the other.
///
/// # Errors
///
/// Methods that can fail return [`Result<T, AmmError>`].  Common variants:
///
/// - [`AmmError::InvalidAmount`]: zero input.
/// - [`AmmError::InsufficientLiquidity`]: an empty reserve.
/// - [`AmmError::TransferFailed`]: the asset ledger refused a leg.
pub trait SwapPool {
    /// Sells `amount_in` in `direction` for at least `min_amount_out`.
    ///
    /// Either the whole swap commits or nothing changes.
    ///
    /// # Errors
    ///
    /// See the trait-level documentation.
    fn swap(
        &mut self,
        trader: &AccountId,
        direction: SwapDirection,
        amount_in: Amount,
        min_amount_out: Amount,
    ) -> Result<SwapResult, AmmError>;

    /// Output a swap would produce at current reserves.
    ///
    /// # Errors
    ///
    /// As for [`swap`](Self::swap), minus ledger failures.
    fn quote(&self, direction: SwapDirection, amount_in: Amount) -> Result<Amount, AmmError>;

    /// Spot price of A in B; zero for an empty pool.
    ///
    /// # Errors
    ///
    /// [`AmmError::Overflow`] for extreme ratios.
    fn spot_price(&self) -> Result<Price, AmmError>;

    /// `(reserve_a, reserve_b)`.
    #[must_use]
    fn reserves(&self) -> (Amount, Amount);

    /// Fee ratio, constant for the pool's lifetime.
    #[must_use]
    fn fee(&self) -> FeeRatio;
}
