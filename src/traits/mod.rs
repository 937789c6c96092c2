//! Pool abstractions.
//!
//! [`SwapPool`] covers trading and quotes; [`LiquidityPool`] adds share
//! accounting.  [`PoolEngine`](crate::pool::PoolEngine) implements both,
//! so callers can be written against the traits.

mod liquidity_pool;
mod swap_pool;

pub use liquidity_pool::LiquidityPool;
pub use swap_pool::SwapPool;

use crate::domain::{AccountId, Amount, Deposit, FeeRatio, Liquidity, Price, SwapDirection, SwapResult, Withdrawal};
use crate::error::AmmError;
use crate::ledger::AssetLedger;
use crate::pool::PoolEngine;

impl<A: AssetLedger, B: AssetLedger> SwapPool for PoolEngine<A, B> {
    fn swap(
        &mut self,
        trader: &AccountId,
        direction: SwapDirection,
        amount_in: Amount,
        min_amount_out: Amount,
    ) -> Result<SwapResult, AmmError> {
        Self::swap(self, trader, direction, amount_in, min_amount_out)
    }

    fn quote(&self, direction: SwapDirection, amount_in: Amount) -> Result<Amount, AmmError> {
        self.quote_swap(direction, amount_in)
    }

    fn spot_price(&self) -> Result<Price, AmmError> {
        self.get_price()
    }

    fn reserves(&self) -> (Amount, Amount) {
        self.get_reserves()
    }

    fn fee(&self) -> FeeRatio {
        Self::fee(self)
    }
}

impl<A: AssetLedger, B: AssetLedger> LiquidityPool for PoolEngine<A, B> {
    fn add_liquidity(
        &mut self,
        provider: &AccountId,
        amount_a: Amount,
        amount_b: Amount,
    ) -> Result<Deposit, AmmError> {
        Self::add_liquidity(self, provider, amount_a, amount_b)
    }

    fn remove_liquidity(
        &mut self,
        provider: &AccountId,
        shares: Liquidity,
    ) -> Result<Withdrawal, AmmError> {
        Self::remove_liquidity(self, provider, shares)
    }

    fn total_liquidity(&self) -> Liquidity {
        Self::total_liquidity(self)
    }

    fn liquidity_of(&self, provider: &AccountId) -> Liquidity {
        Self::liquidity_of(self, provider)
    }
}
