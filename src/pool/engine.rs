//! The pair's orchestrator: validation, pricing, commit, settlement, events.
//!
//! # Operation Sequence
//!
//! Every state-changing operation runs inside the reentrancy guard and
//! follows the same steps:
//!
//! 1. Validate inputs and compute the effect with [`crate::pricing`]
//!    against the current [`ReserveState`].
//! 2. Snapshot, then commit the new reserves and share positions.
//! 3. Settle the asset transfers (pulls, then pushes).
//! 4. On a settlement failure, restore the snapshot; otherwise record the
//!    event.
//!
//! A rejected operation therefore leaves reserves, shares, custodied
//! balances and the event log exactly as they were.

use tracing::{debug, info, warn};

use super::guard::ReentrancyGuard;
use super::settlement::{Leg, Settlement};
use crate::config::PoolConfig;
use crate::domain::{
    AccountId, Amount, Asset, Deposit, FeeRatio, Liquidity, Price, SwapDirection, SwapResult,
    Withdrawal,
};
use crate::error::AmmError;
use crate::events::PoolEvent;
use crate::ledger::{AssetLedger, InMemoryLedger};
use crate::math::CheckedArithmetic;
use crate::pricing;
use crate::state::{LiquidityLedger, ReserveState};

/// A two-asset constant-product pool bound to its asset ledgers.
///
/// The engine owns its ledgers for its whole lifetime, so the asset pair
/// cannot be swapped out from under it.  Participants authorise the pool
/// by approving [`PoolConfig::pool_account`] on each ledger.
///
/// # Example
///
/// ```rust
/// use hydra_pair::config::PoolConfig;
/// use hydra_pair::domain::{AccountId, Amount, FeeRatio};
/// use hydra_pair::ledger::InMemoryLedger;
/// use hydra_pair::pool::PoolEngine;
///
/// let pool_id = AccountId::from_bytes([9u8; 32]);
/// let alice = AccountId::from_bytes([1u8; 32]);
///
/// let mut tka = InMemoryLedger::new("TKA");
/// let mut tkb = InMemoryLedger::new("TKB");
/// tka.mint(&alice, Amount::new(1_000)).ok();
/// tkb.mint(&alice, Amount::new(1_000)).ok();
/// tka.approve(&alice, &pool_id, Amount::new(1_000));
/// tkb.approve(&alice, &pool_id, Amount::new(1_000));
///
/// let Ok(config) = PoolConfig::new(pool_id, FeeRatio::DEFAULT) else { return; };
/// let Ok(mut pool) = PoolEngine::new(config, tka, tkb) else { return; };
///
/// let deposit = pool.add_liquidity(&alice, Amount::new(100), Amount::new(200));
/// assert!(deposit.is_ok());
/// assert_eq!(pool.get_reserves(), (Amount::new(100), Amount::new(200)));
///
/// let swap = pool.swap_a_for_b(&alice, Amount::new(1));
/// assert!(swap.is_ok());
/// assert!(pool.get_reserves().0 > Amount::new(100));
/// ```
#[derive(Debug)]
pub struct PoolEngine<A = InMemoryLedger, B = A> {
    config: PoolConfig,
    reserves: ReserveState,
    positions: LiquidityLedger,
    ledger_a: A,
    ledger_b: B,
    guard: ReentrancyGuard,
    events: Vec<PoolEvent>,
    accumulated_fees_a: Amount,
    accumulated_fees_b: Amount,
}

impl<A: AssetLedger, B: AssetLedger> PoolEngine<A, B> {
    /// Creates an empty pool over `ledger_a` / `ledger_b`.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`PoolConfig::validate`].
    pub fn new(config: PoolConfig, ledger_a: A, ledger_b: B) -> crate::error::Result<Self> {
        config.validate()?;
        info!(pool = %config.pool_account(), fee = %config.fee(), "pool created");
        Ok(Self {
            config,
            reserves: ReserveState::EMPTY,
            positions: LiquidityLedger::new(),
            ledger_a,
            ledger_b,
            guard: ReentrancyGuard::default(),
            events: Vec::new(),
            accumulated_fees_a: Amount::ZERO,
            accumulated_fees_b: Amount::ZERO,
        })
    }

    // -- liquidity ---------------------------------------------------------

    /// Deposits up to `amount_a` / `amount_b` and mints shares to `provider`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::ZeroAmount`] if either amount is zero.
    /// - [`AmmError::InsufficientLiquidityMinted`] for a dust deposit.
    /// - [`AmmError::TransferFailed`] if a ledger rejects a pull.
    /// - [`AmmError::Reentrancy`] if called from inside another operation.
    pub fn add_liquidity(
        &mut self,
        provider: &AccountId,
        amount_a: Amount,
        amount_b: Amount,
    ) -> crate::error::Result<Deposit> {
        self.add_liquidity_with_min(provider, amount_a, amount_b, Liquidity::ZERO)
    }

    /// [`add_liquidity`](Self::add_liquidity) that fails with
    /// [`AmmError::SlippageExceeded`] when fewer than `min_liquidity`
    /// shares would be minted.
    ///
    /// # Errors
    ///
    /// See [`add_liquidity`](Self::add_liquidity).
    pub fn add_liquidity_with_min(
        &mut self,
        provider: &AccountId,
        amount_a: Amount,
        amount_b: Amount,
        min_liquidity: Liquidity,
    ) -> crate::error::Result<Deposit> {
        self.guarded("add_liquidity", |pool| {
            pool.execute_add(provider, amount_a, amount_b, min_liquidity)
        })
    }

    /// Burns `shares` from `provider` and pays out both assets pro rata.
    ///
    /// # Errors
    ///
    /// - [`AmmError::ZeroAmount`] if `shares` is zero.
    /// - [`AmmError::InsufficientShares`] if `provider` holds fewer shares.
    /// - [`AmmError::InsufficientLiquidityBurned`] if nothing would be paid.
    /// - [`AmmError::TransferFailed`] if a ledger rejects a payout.
    pub fn remove_liquidity(
        &mut self,
        provider: &AccountId,
        shares: Liquidity,
    ) -> crate::error::Result<Withdrawal> {
        self.remove_liquidity_with_min(provider, shares, Amount::ZERO, Amount::ZERO)
    }

    /// [`remove_liquidity`](Self::remove_liquidity) that fails with
    /// [`AmmError::SlippageExceeded`] when either payout is below its
    /// minimum.
    ///
    /// # Errors
    ///
    /// See [`remove_liquidity`](Self::remove_liquidity).
    pub fn remove_liquidity_with_min(
        &mut self,
        provider: &AccountId,
        shares: Liquidity,
        min_amount_a: Amount,
        min_amount_b: Amount,
    ) -> crate::error::Result<Withdrawal> {
        self.guarded("remove_liquidity", |pool| {
            pool.execute_remove(provider, shares, min_amount_a, min_amount_b)
        })
    }

    /// Payout a burn of `shares` would produce right now.
    ///
    /// # Errors
    ///
    /// See [`pricing::amounts_for_liquidity`].
    pub fn quote_remove_liquidity(&self, shares: Liquidity) -> crate::error::Result<(Amount, Amount)> {
        pricing::amounts_for_liquidity(shares, &self.reserves)
    }

    // -- swaps -------------------------------------------------------------

    /// Sells `amount_in` of A for B.
    ///
    /// # Errors
    ///
    /// See [`swap`](Self::swap).
    pub fn swap_a_for_b(
        &mut self,
        trader: &AccountId,
        amount_in: Amount,
    ) -> crate::error::Result<SwapResult> {
        self.swap(trader, SwapDirection::AToB, amount_in, Amount::ZERO)
    }

    /// Sells `amount_in` of B for A.
    ///
    /// # Errors
    ///
    /// See [`swap`](Self::swap).
    pub fn swap_b_for_a(
        &mut self,
        trader: &AccountId,
        amount_in: Amount,
    ) -> crate::error::Result<SwapResult> {
        self.swap(trader, SwapDirection::BToA, amount_in, Amount::ZERO)
    }

    /// Sells `amount_in` in `direction`, requiring at least
    /// `min_amount_out` back.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidAmount`] if `amount_in` is zero.
    /// - [`AmmError::InsufficientLiquidity`] if either reserve is empty.
    /// - [`AmmError::InsufficientOutputAmount`] if the output rounds to zero.
    /// - [`AmmError::SlippageExceeded`] if the output is below `min_amount_out`.
    /// - [`AmmError::InvariantViolation`] if `k` would decrease.
    /// - [`AmmError::TransferFailed`] if a ledger rejects a leg.
    pub fn swap(
        &mut self,
        trader: &AccountId,
        direction: SwapDirection,
        amount_in: Amount,
        min_amount_out: Amount,
    ) -> crate::error::Result<SwapResult> {
        self.guarded("swap", |pool| {
            pool.execute_swap(trader, direction, amount_in, min_amount_out)
        })
    }

    // -- queries -----------------------------------------------------------

    /// Current `(reserve_a, reserve_b)`.
    #[must_use]
    pub const fn get_reserves(&self) -> (Amount, Amount) {
        (self.reserves.reserve_a(), self.reserves.reserve_b())
    }

    /// Spot price of A in B scaled by [`SCALE`](crate::domain::SCALE);
    /// [`Price::ZERO`] for an empty pool.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] for ratios beyond `u128 / SCALE`.
    pub fn get_price(&self) -> crate::error::Result<Price> {
        pricing::get_price(self.reserves.reserve_a(), self.reserves.reserve_b())
    }

    /// [`pricing::get_amount_out`] with this pool's fee.
    ///
    /// # Errors
    ///
    /// See [`pricing::get_amount_out`].
    pub fn get_amount_out(
        &self,
        amount_in: Amount,
        reserve_in: Amount,
        reserve_out: Amount,
    ) -> crate::error::Result<Amount> {
        pricing::get_amount_out(amount_in, reserve_in, reserve_out, self.config.fee())
    }

    /// [`pricing::get_amount_in`] with this pool's fee.
    ///
    /// # Errors
    ///
    /// See [`pricing::get_amount_in`].
    pub fn get_amount_in(
        &self,
        amount_out: Amount,
        reserve_in: Amount,
        reserve_out: Amount,
    ) -> crate::error::Result<Amount> {
        pricing::get_amount_in(amount_out, reserve_in, reserve_out, self.config.fee())
    }

    /// Output of selling `amount_in` in `direction` at current reserves.
    ///
    /// # Errors
    ///
    /// See [`pricing::get_amount_out`].
    pub fn quote_swap(
        &self,
        direction: SwapDirection,
        amount_in: Amount,
    ) -> crate::error::Result<Amount> {
        let (reserve_in, reserve_out) = self.reserves.oriented(direction);
        self.get_amount_out(amount_in, reserve_in, reserve_out)
    }

    /// Outstanding shares.
    #[must_use]
    pub const fn total_liquidity(&self) -> Liquidity {
        self.reserves.total_liquidity()
    }

    /// Shares held by `provider`.
    #[must_use]
    pub fn liquidity_of(&self, provider: &AccountId) -> Liquidity {
        self.positions.balance_of(provider)
    }

    /// The reserve record.
    #[must_use]
    pub const fn reserve_state(&self) -> &ReserveState {
        &self.reserves
    }

    /// Every provider's position.
    #[must_use]
    pub const fn positions(&self) -> &LiquidityLedger {
        &self.positions
    }

    /// Construction parameters.
    #[must_use]
    pub const fn config(&self) -> &PoolConfig {
        &self.config
    }

    /// The swap fee ratio.
    #[must_use]
    pub const fn fee(&self) -> FeeRatio {
        self.config.fee()
    }

    /// Lifetime fees collected in asset A.
    #[must_use]
    pub const fn accumulated_fees_a(&self) -> Amount {
        self.accumulated_fees_a
    }

    /// Lifetime fees collected in asset B.
    #[must_use]
    pub const fn accumulated_fees_b(&self) -> Amount {
        self.accumulated_fees_b
    }

    /// Events recorded since the last [`take_events`](Self::take_events).
    #[must_use]
    pub fn events(&self) -> &[PoolEvent] {
        &self.events
    }

    /// Drains the event log.
    pub fn take_events(&mut self) -> Vec<PoolEvent> {
        core::mem::take(&mut self.events)
    }

    /// Ledger of asset A.
    #[must_use]
    pub const fn ledger_a(&self) -> &A {
        &self.ledger_a
    }

    /// Ledger of asset B.
    #[must_use]
    pub const fn ledger_b(&self) -> &B {
        &self.ledger_b
    }

    /// Mutable ledger of asset A, for funding and approvals.
    pub fn ledger_a_mut(&mut self) -> &mut A {
        &mut self.ledger_a
    }

    /// Mutable ledger of asset B, for funding and approvals.
    pub fn ledger_b_mut(&mut self) -> &mut B {
        &mut self.ledger_b
    }

    /// Checks that reserves are consistent with outstanding shares and that
    /// the positions sum to the total supply.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvariantViolation`] on any mismatch.
    pub fn check_invariants(&self) -> crate::error::Result<()> {
        self.reserves.check_invariants()?;
        if self.positions.total()? != self.reserves.total_liquidity() {
            return Err(AmmError::InvariantViolation(
                "positions do not sum to total liquidity",
            ));
        }
        Ok(())
    }

    // -- internals ---------------------------------------------------------

    fn guarded<T>(
        &mut self,
        op: &'static str,
        f: impl FnOnce(&mut Self) -> crate::error::Result<T>,
    ) -> crate::error::Result<T> {
        if let Err(err) = self.guard.enter() {
            warn!(op, %err, "operation rejected");
            return Err(err);
        }
        let result = f(self);
        self.guard.exit();
        if let Err(err) = &result {
            warn!(op, %err, "operation rejected");
        }
        result
    }

    fn execute_add(
        &mut self,
        provider: &AccountId,
        amount_a: Amount,
        amount_b: Amount,
        min_liquidity: Liquidity,
    ) -> crate::error::Result<Deposit> {
        if amount_a.is_zero() || amount_b.is_zero() {
            return Err(AmmError::ZeroAmount);
        }
        let (offer_a, offer_b) = pricing::quote_liquidity(amount_a, amount_b, &self.reserves)?;
        let minted = pricing::liquidity_to_mint(offer_a, offer_b, &self.reserves)?;
        let (used_a, used_b) = if self.reserves.is_empty() {
            (offer_a, offer_b)
        } else {
            pricing::deposit_for_liquidity(minted, &self.reserves)?
        };
        if used_a > offer_a || used_b > offer_b {
            return Err(AmmError::InvariantViolation("deposit exceeds trimmed offer"));
        }
        if minted < min_liquidity {
            return Err(AmmError::SlippageExceeded);
        }
        debug!(%provider, %used_a, %used_b, %minted, "deposit quoted");

        let snapshot = self.reserves;
        let prior = self.positions.balance_of(provider);
        if let Err(err) = self.commit_deposit(provider, used_a, used_b, minted) {
            self.restore(snapshot, provider, prior);
            return Err(err);
        }

        let legs = [
            Leg::Pull {
                asset: Asset::A,
                owner: *provider,
                amount: used_a,
            },
            Leg::Pull {
                asset: Asset::B,
                owner: *provider,
                amount: used_b,
            },
        ];
        if let Err(err) = self.settle(&legs) {
            self.restore(snapshot, provider, prior);
            return Err(err);
        }

        self.emit(PoolEvent::LiquidityAdded {
            provider: *provider,
            amount_a: used_a,
            amount_b: used_b,
            liquidity_minted: minted,
        });
        Ok(Deposit {
            amount_a: used_a,
            amount_b: used_b,
            liquidity_minted: minted,
        })
    }

    fn commit_deposit(
        &mut self,
        provider: &AccountId,
        amount_a: Amount,
        amount_b: Amount,
        minted: Liquidity,
    ) -> crate::error::Result<()> {
        self.reserves.deposit(amount_a, amount_b)?;
        self.positions.mint(provider, minted, &mut self.reserves)?;
        self.reserves.check_invariants()
    }

    fn execute_remove(
        &mut self,
        provider: &AccountId,
        shares: Liquidity,
        min_amount_a: Amount,
        min_amount_b: Amount,
    ) -> crate::error::Result<Withdrawal> {
        if shares.is_zero() {
            return Err(AmmError::ZeroAmount);
        }
        let prior = self.positions.balance_of(provider);
        if shares > prior {
            return Err(AmmError::InsufficientShares);
        }
        let (amount_a, amount_b) = pricing::amounts_for_liquidity(shares, &self.reserves)?;
        if amount_a.is_zero() && amount_b.is_zero() {
            return Err(AmmError::InsufficientLiquidityBurned);
        }
        if amount_a < min_amount_a || amount_b < min_amount_b {
            return Err(AmmError::SlippageExceeded);
        }
        debug!(%provider, %shares, %amount_a, %amount_b, "withdrawal quoted");

        let snapshot = self.reserves;
        if let Err(err) = self.commit_withdrawal(provider, shares, amount_a, amount_b) {
            self.restore(snapshot, provider, prior);
            return Err(err);
        }

        let legs = [
            Leg::Push {
                asset: Asset::A,
                to: *provider,
                amount: amount_a,
            },
            Leg::Push {
                asset: Asset::B,
                to: *provider,
                amount: amount_b,
            },
        ];
        if let Err(err) = self.settle(&legs) {
            self.restore(snapshot, provider, prior);
            return Err(err);
        }

        self.emit(PoolEvent::LiquidityRemoved {
            provider: *provider,
            amount_a,
            amount_b,
            liquidity_burned: shares,
        });
        Ok(Withdrawal {
            amount_a,
            amount_b,
            liquidity_burned: shares,
        })
    }

    fn commit_withdrawal(
        &mut self,
        provider: &AccountId,
        shares: Liquidity,
        amount_a: Amount,
        amount_b: Amount,
    ) -> crate::error::Result<()> {
        self.positions.burn(provider, shares, &mut self.reserves)?;
        self.reserves.withdraw(amount_a, amount_b)?;
        self.reserves.check_invariants()
    }

    fn execute_swap(
        &mut self,
        trader: &AccountId,
        direction: SwapDirection,
        amount_in: Amount,
        min_amount_out: Amount,
    ) -> crate::error::Result<SwapResult> {
        if amount_in.is_zero() {
            return Err(AmmError::InvalidAmount);
        }
        let amount_out = self.quote_swap(direction, amount_in)?;
        if amount_out.is_zero() {
            return Err(AmmError::InsufficientOutputAmount);
        }
        if amount_out < min_amount_out {
            return Err(AmmError::SlippageExceeded);
        }
        let fee = self.config.fee().fee_on(amount_in)?;
        let result = SwapResult::new(direction, amount_in, amount_out, fee)?;
        let fees_after = match direction.asset_in() {
            Asset::A => self.accumulated_fees_a.safe_add(&fee)?,
            Asset::B => self.accumulated_fees_b.safe_add(&fee)?,
        };
        debug!(%trader, %direction, %amount_in, %amount_out, %fee, "swap quoted");

        let snapshot = self.reserves;
        self.reserves.apply_swap(direction, amount_in, amount_out)?;

        let legs = [
            Leg::Pull {
                asset: direction.asset_in(),
                owner: *trader,
                amount: amount_in,
            },
            Leg::Push {
                asset: direction.asset_out(),
                to: *trader,
                amount: amount_out,
            },
        ];
        if let Err(err) = self.settle(&legs) {
            self.reserves = snapshot;
            return Err(err);
        }

        match direction.asset_in() {
            Asset::A => self.accumulated_fees_a = fees_after,
            Asset::B => self.accumulated_fees_b = fees_after,
        }
        self.emit(PoolEvent::Swap {
            trader: *trader,
            direction,
            amount_in,
            amount_out,
        });
        Ok(result)
    }

    fn settle(&mut self, legs: &[Leg]) -> crate::error::Result<()> {
        let pool = self.config.pool_account();
        Settlement::new(pool, &mut self.ledger_a, &mut self.ledger_b)
            .settle(legs)
            .map_err(AmmError::from)
    }

    fn restore(&mut self, snapshot: ReserveState, provider: &AccountId, prior: Liquidity) {
        self.reserves = snapshot;
        self.positions.restore(provider, prior);
    }

    fn emit(&mut self, event: PoolEvent) {
        info!(%event, "pool event");
        self.events.push(event);
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::SCALE;
    use crate::ledger::LedgerError;

    fn pool_id() -> AccountId {
        AccountId::from_bytes([9u8; 32])
    }

    fn alice() -> AccountId {
        AccountId::from_bytes([1u8; 32])
    }

    fn bob() -> AccountId {
        AccountId::from_bytes([2u8; 32])
    }

    fn engine() -> PoolEngine {
        let mut tka = InMemoryLedger::new("TKA");
        let mut tkb = InMemoryLedger::new("TKB");
        for who in [alice(), bob()] {
            let Ok(()) = tka.mint(&who, Amount::new(1_000_000)) else {
                panic!("mint");
            };
            let Ok(()) = tkb.mint(&who, Amount::new(1_000_000)) else {
                panic!("mint");
            };
            tka.approve(&who, &pool_id(), Amount::MAX);
            tkb.approve(&who, &pool_id(), Amount::MAX);
        }
        let Ok(config) = PoolConfig::new(pool_id(), FeeRatio::DEFAULT) else {
            panic!("config");
        };
        let Ok(pool) = PoolEngine::new(config, tka, tkb) else {
            panic!("engine");
        };
        pool
    }

    fn seeded() -> PoolEngine {
        let mut pool = engine();
        let Ok(_) = pool.add_liquidity(&alice(), Amount::new(100), Amount::new(200)) else {
            panic!("seed");
        };
        pool
    }

    #[test]
    fn first_deposit_sets_reserves_and_price() {
        let mut pool = engine();
        let Ok(dep) = pool.add_liquidity(&alice(), Amount::new(100), Amount::new(200)) else {
            panic!("deposit");
        };
        assert_eq!(pool.get_reserves(), (Amount::new(100), Amount::new(200)));
        assert_eq!(dep.liquidity_minted, Liquidity::new(141));
        assert_eq!(pool.liquidity_of(&alice()), Liquidity::new(141));
        assert_eq!(pool.get_price().map(|p| p.raw()), Ok(2 * SCALE));
        assert!(matches!(
            pool.events(),
            [PoolEvent::LiquidityAdded { liquidity_minted, .. }] if *liquidity_minted == Liquidity::new(141)
        ));
        assert_eq!(pool.ledger_a().balance_of(&pool_id()), Amount::new(100));
        assert!(pool.check_invariants().is_ok());
    }

    #[test]
    fn empty_pool_price_is_zero() {
        assert_eq!(engine().get_price(), Ok(Price::ZERO));
    }

    #[test]
    fn zero_deposit_rejected() {
        let mut pool = engine();
        assert_eq!(
            pool.add_liquidity(&alice(), Amount::ZERO, Amount::ZERO),
            Err(AmmError::ZeroAmount)
        );
        assert!(pool.events().is_empty());
    }

    #[test]
    fn later_deposit_pulls_only_used_amounts() {
        let mut pool = seeded();
        let before_b = pool.ledger_b().balance_of(&bob());
        let Ok(dep) = pool.add_liquidity(&bob(), Amount::new(50), Amount::new(1_000)) else {
            panic!("deposit");
        };
        assert_eq!((dep.amount_a, dep.amount_b), (Amount::new(50), Amount::new(100)));
        assert_eq!(dep.liquidity_minted, Liquidity::new(70));
        let Some(spent) = before_b.checked_sub(&pool.ledger_b().balance_of(&bob())) else {
            panic!("balance grew");
        };
        assert_eq!(spent, Amount::new(100));
        assert_eq!(pool.get_reserves(), (Amount::new(150), Amount::new(300)));
    }

    #[test]
    fn skewed_later_deposit_round_trips_within_one_unit() {
        let mut pool = engine();
        let Ok(_) = pool.add_liquidity(&alice(), Amount::new(100), Amount::new(1)) else {
            panic!("seed");
        };
        let a0 = pool.ledger_a().balance_of(&bob());
        let Ok(dep) = pool.add_liquidity(&bob(), Amount::new(150), Amount::new(2)) else {
            panic!("deposit");
        };
        // one unit of B buys 10 shares, which cost 100 of A
        assert_eq!(dep.liquidity_minted, Liquidity::new(10));
        assert_eq!((dep.amount_a, dep.amount_b), (Amount::new(100), Amount::new(1)));
        assert_eq!(
            pool.ledger_a().balance_of(&bob()),
            Amount::new(a0.get() - 100)
        );

        let Ok(w) = pool.remove_liquidity(&bob(), dep.liquidity_minted) else {
            panic!("withdraw");
        };
        assert!(dep.amount_a.get() - w.amount_a.get() <= 1);
        assert!(dep.amount_b.get() - w.amount_b.get() <= 1);
        assert_eq!(pool.ledger_a().balance_of(&bob()), a0);
        assert!(pool.check_invariants().is_ok());
    }

    #[test]
    fn min_liquidity_guard() {
        let mut pool = seeded();
        let r = pool.add_liquidity_with_min(
            &bob(),
            Amount::new(50),
            Amount::new(100),
            Liquidity::new(71),
        );
        assert_eq!(r, Err(AmmError::SlippageExceeded));
        assert_eq!(pool.total_liquidity(), Liquidity::new(141));
    }

    #[test]
    fn swap_moves_reserves_and_tracks_fee() {
        let mut pool = seeded();
        let Ok(res) = pool.swap_a_for_b(&bob(), Amount::new(10)) else {
            panic!("swap");
        };
        // 10 * 997 * 200 / (100_000 + 9_970) = 18
        assert_eq!(res.amount_out(), Amount::new(18));
        assert_eq!(pool.get_reserves(), (Amount::new(110), Amount::new(182)));
        assert_eq!(pool.accumulated_fees_a(), Amount::new(1));
        assert!(pool.accumulated_fees_b().is_zero());
        assert_eq!(pool.ledger_b().balance_of(&pool_id()), Amount::new(182));
    }

    #[test]
    fn swap_zero_is_invalid() {
        let mut pool = seeded();
        assert_eq!(
            pool.swap_b_for_a(&bob(), Amount::ZERO),
            Err(AmmError::InvalidAmount)
        );
    }

    #[test]
    fn swap_on_empty_pool() {
        let mut pool = engine();
        assert_eq!(
            pool.swap_a_for_b(&bob(), Amount::new(5)),
            Err(AmmError::InsufficientLiquidity)
        );
    }

    #[test]
    fn dust_swap_rejected() {
        let mut pool = engine();
        let Ok(_) = pool.add_liquidity(&alice(), Amount::new(100_000), Amount::new(10)) else {
            panic!("seed");
        };
        assert_eq!(
            pool.swap_a_for_b(&bob(), Amount::new(1)),
            Err(AmmError::InsufficientOutputAmount)
        );
        assert_eq!(pool.get_reserves(), (Amount::new(100_000), Amount::new(10)));
    }

    #[test]
    fn swap_slippage_guard() {
        let mut pool = seeded();
        let r = pool.swap(&bob(), SwapDirection::AToB, Amount::new(10), Amount::new(19));
        assert_eq!(r, Err(AmmError::SlippageExceeded));
        assert_eq!(pool.get_reserves(), (Amount::new(100), Amount::new(200)));
    }

    #[test]
    fn full_withdrawal_empties_pool() {
        let mut pool = seeded();
        let Ok(w) = pool.remove_liquidity(&alice(), Liquidity::new(141)) else {
            panic!("withdraw");
        };
        assert_eq!((w.amount_a, w.amount_b), (Amount::new(100), Amount::new(200)));
        assert_eq!(*pool.reserve_state(), ReserveState::EMPTY);
        assert!(pool.positions().is_empty());
        assert_eq!(pool.ledger_a().balance_of(&alice()), Amount::new(1_000_000));
        assert!(pool.check_invariants().is_ok());
    }

    #[test]
    fn over_withdrawal_leaves_state() {
        let mut pool = seeded();
        let before = *pool.reserve_state();
        assert_eq!(
            pool.remove_liquidity(&alice(), Liquidity::new(142)),
            Err(AmmError::InsufficientShares)
        );
        assert_eq!(
            pool.remove_liquidity(&bob(), Liquidity::new(1)),
            Err(AmmError::InsufficientShares)
        );
        assert_eq!(*pool.reserve_state(), before);
        assert_eq!(pool.events().len(), 1);
    }

    #[test]
    fn withdrawal_slippage_guard() {
        let mut pool = seeded();
        let r = pool.remove_liquidity_with_min(
            &alice(),
            Liquidity::new(70),
            Amount::new(50),
            Amount::ZERO,
        );
        assert_eq!(r, Err(AmmError::SlippageExceeded));
        assert_eq!(pool.quote_remove_liquidity(Liquidity::new(70)), Ok((Amount::new(49), Amount::new(99))));
    }

    #[test]
    fn rejected_pull_rolls_back() {
        let mut pool = seeded();
        pool.ledger_b_mut().approve(&bob(), &pool_id(), Amount::new(5));
        let before = *pool.reserve_state();
        let r = pool.add_liquidity(&bob(), Amount::new(50), Amount::new(100));
        assert!(matches!(
            r,
            Err(AmmError::TransferFailed(LedgerError::InsufficientAllowance { .. }))
        ));
        assert_eq!(*pool.reserve_state(), before);
        assert!(pool.liquidity_of(&bob()).is_zero());
        assert_eq!(pool.ledger_a().balance_of(&bob()), Amount::new(1_000_000));
        assert_eq!(pool.events().len(), 1);
        assert!(pool.check_invariants().is_ok());
    }

    #[test]
    fn frozen_recipient_rolls_back_swap() {
        let mut pool = seeded();
        pool.ledger_b_mut().freeze(&bob());
        let r = pool.swap_a_for_b(&bob(), Amount::new(10));
        assert!(matches!(
            r,
            Err(AmmError::TransferFailed(LedgerError::AccountFrozen(_)))
        ));
        assert_eq!(pool.get_reserves(), (Amount::new(100), Amount::new(200)));
        assert!(pool.accumulated_fees_a().is_zero());
        assert_eq!(pool.ledger_a().balance_of(&bob()), Amount::new(1_000_000));
    }

    #[test]
    fn nested_entry_rejected() {
        let mut pool = seeded();
        let Ok(()) = pool.guard.enter() else {
            panic!("guard");
        };
        assert_eq!(
            pool.swap_a_for_b(&bob(), Amount::new(10)),
            Err(AmmError::Reentrancy)
        );
        assert!(pool.guard.is_entered());
        pool.guard.exit();
        assert!(pool.swap_a_for_b(&bob(), Amount::new(10)).is_ok());
    }

    #[test]
    fn take_events_drains() {
        let mut pool = seeded();
        assert_eq!(pool.take_events().len(), 1);
        assert!(pool.events().is_empty());
    }

    #[test]
    fn exact_out_quote_uses_pool_fee() {
        let pool = seeded();
        let (ra, rb) = pool.get_reserves();
        let Ok(needed) = pool.get_amount_in(Amount::new(18), ra, rb) else {
            panic!("quote");
        };
        let Ok(got) = pool.get_amount_out(needed, ra, rb) else {
            panic!("quote");
        };
        assert!(got >= Amount::new(18));
    }
}
