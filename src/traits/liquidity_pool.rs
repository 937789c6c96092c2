//! Liquidity provision on top of [`SwapPool`].
//!
//! # Share Accounting Invariant
//!
//! Total liquidity changes only through
//! [`LiquidityPool::add_liquidity`] and [`LiquidityPool::remove_liquidity`],
//! and always equals the sum of every provider's position:
//!
//! ```text
//! L = Σ position[p]   for all providers p
//! ```

use super::SwapPool;
use crate::domain::{AccountId, Amount, Deposit, Liquidity, Withdrawal};
use crate::error::AmmError;

/// A pool whose reserves are owned pro rata by share holders.
pub trait LiquidityPool: SwapPool {
    /// Deposits up to `amount_a` / `amount_b` for `provider`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::ZeroAmount`] if either amount is zero.
    /// - [`AmmError::InsufficientLiquidityMinted`] for dust.
    fn add_liquidity(
        &mut self,
        provider: &AccountId,
        amount_a: Amount,
        amount_b: Amount,
    ) -> Result<Deposit, AmmError>;

    /// Burns `shares` held by `provider` for both assets.
    ///
    /// # Errors
    ///
    /// - [`AmmError::ZeroAmount`] if `shares` is zero.
    /// - [`AmmError::InsufficientShares`] if the position is too small.
    fn remove_liquidity(
        &mut self,
        provider: &AccountId,
        shares: Liquidity,
    ) -> Result<Withdrawal, AmmError>;

    /// Outstanding shares.
    #[must_use]
    fn total_liquidity(&self) -> Liquidity;

    /// Shares held by `provider`.
    #[must_use]
    fn liquidity_of(&self, provider: &AccountId) -> Liquidity;
}
