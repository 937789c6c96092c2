//! Per-provider share balances.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::ReserveState;
use crate::domain::{AccountId, Liquidity};
use crate::error::AmmError;
use crate::math::CheckedArithmetic;

/// Share balances keyed by provider.
///
/// Every mint and burn updates the position and the pool's total supply
/// in [`ReserveState`] together, so the sum of all positions always equals
/// [`ReserveState::total_liquidity`].  A position is dropped once its
/// balance reaches zero.
///
/// # Examples
///
/// ```
/// use hydra_pair::domain::{AccountId, Liquidity};
/// use hydra_pair::state::{LiquidityLedger, ReserveState};
///
/// let alice = AccountId::from_bytes([1u8; 32]);
/// let mut reserves = ReserveState::EMPTY;
/// let mut ledger = LiquidityLedger::new();
/// ledger.mint(&alice, Liquidity::new(500), &mut reserves).ok();
/// assert_eq!(ledger.balance_of(&alice), Liquidity::new(500));
/// assert_eq!(reserves.total_liquidity(), Liquidity::new(500));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LiquidityLedger {
    positions: BTreeMap<AccountId, Liquidity>,
}

impl LiquidityLedger {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shares held by `provider`; zero when no position exists.
    #[must_use]
    pub fn balance_of(&self, provider: &AccountId) -> Liquidity {
        self.positions
            .get(provider)
            .copied()
            .unwrap_or(Liquidity::ZERO)
    }

    /// Sum of all positions.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] if the sum does not fit (only possible
    /// for a corrupted ledger).
    pub fn total(&self) -> crate::error::Result<Liquidity> {
        self.positions
            .values()
            .try_fold(Liquidity::ZERO, |acc, v| acc.safe_add(v))
    }

    /// Iterates over `(provider, shares)` in provider order.
    pub fn providers(&self) -> impl Iterator<Item = (&AccountId, &Liquidity)> {
        self.positions.iter()
    }

    /// Number of providers with a non-zero position.
    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// `true` when nobody holds shares.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Credits `shares` to `provider` and grows the total supply.
    ///
    /// # Errors
    ///
    /// - [`AmmError::ZeroAmount`] if `shares` is zero.
    /// - [`AmmError::Overflow`] if the position or the supply overflows.
    ///
    /// Nothing changes on error.
    pub fn mint(
        &mut self,
        provider: &AccountId,
        shares: Liquidity,
        reserves: &mut ReserveState,
    ) -> crate::error::Result<()> {
        if shares.is_zero() {
            return Err(AmmError::ZeroAmount);
        }
        let position = self.balance_of(provider).safe_add(&shares)?;
        let supply = reserves.total_liquidity().safe_add(&shares)?;
        self.positions.insert(*provider, position);
        reserves.set_total_liquidity(supply);
        Ok(())
    }

    /// Debits `shares` from `provider` and shrinks the total supply.
    ///
    /// # Errors
    ///
    /// - [`AmmError::ZeroAmount`] if `shares` is zero.
    /// - [`AmmError::InsufficientShares`] if the position is smaller than `shares`.
    /// - [`AmmError::Underflow`] if the supply is smaller than `shares`.
    ///
    /// Nothing changes on error.
    pub fn burn(
        &mut self,
        provider: &AccountId,
        shares: Liquidity,
        reserves: &mut ReserveState,
    ) -> crate::error::Result<()> {
        if shares.is_zero() {
            return Err(AmmError::ZeroAmount);
        }
        let position = self
            .balance_of(provider)
            .checked_sub(&shares)
            .ok_or(AmmError::InsufficientShares)?;
        let supply = reserves.total_liquidity().safe_sub(&shares)?;
        if position.is_zero() {
            self.positions.remove(provider);
        } else {
            self.positions.insert(*provider, position);
        }
        reserves.set_total_liquidity(supply);
        Ok(())
    }

    pub(crate) fn restore(&mut self, provider: &AccountId, shares: Liquidity) {
        if shares.is_zero() {
            self.positions.remove(provider);
        } else {
            self.positions.insert(*provider, shares);
        }
    }
}
