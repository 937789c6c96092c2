//! Thread-safe handle around a [`PoolEngine`].

use std::sync::{Arc, Mutex, MutexGuard};

use super::PoolEngine;
use crate::domain::{AccountId, Amount, Deposit, Liquidity, Price, SwapDirection, SwapResult, Withdrawal};
use crate::error::AmmError;
use crate::ledger::{AssetLedger, InMemoryLedger};

/// Cloneable, shareable pool.
///
/// Every call holds the lock for the whole operation, from validation to
/// event emission, so operations on one pool are linearizable.  A lock
/// poisoned by a panicking holder surfaces as [`AmmError::LockPoisoned`].
///
/// # Examples
///
/// ```
/// use hydra_pair::config::PoolConfig;
/// use hydra_pair::domain::{AccountId, FeeRatio};
/// use hydra_pair::ledger::InMemoryLedger;
/// use hydra_pair::pool::{PoolEngine, SharedPool};
///
/// let pool_id = AccountId::from_bytes([9u8; 32]);
/// let Ok(config) = PoolConfig::new(pool_id, FeeRatio::DEFAULT) else { return; };
/// let Ok(engine) = PoolEngine::new(config, InMemoryLedger::new("A"), InMemoryLedger::new("B")) else { return; };
///
/// let shared = SharedPool::new(engine);
/// let handle = shared.clone();
/// let worker = std::thread::spawn(move || handle.get_reserves());
/// assert!(worker.join().is_ok());
/// ```
#[derive(Debug)]
pub struct SharedPool<A = InMemoryLedger, B = A> {
    inner: Arc<Mutex<PoolEngine<A, B>>>,
}

impl<A, B> Clone for SharedPool<A, B> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<A: AssetLedger, B: AssetLedger> SharedPool<A, B> {
    /// Wraps `engine` for shared use.
    pub fn new(engine: PoolEngine<A, B>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(engine)),
        }
    }

    fn lock(&self) -> crate::error::Result<MutexGuard<'_, PoolEngine<A, B>>> {
        self.inner.lock().map_err(|_| AmmError::LockPoisoned)
    }

    /// Runs `f` with exclusive access to the engine.
    ///
    /// # Errors
    ///
    /// [`AmmError::LockPoisoned`], or whatever `f` returns.
    pub fn with_pool<T>(
        &self,
        f: impl FnOnce(&mut PoolEngine<A, B>) -> crate::error::Result<T>,
    ) -> crate::error::Result<T> {
        let mut pool = self.lock()?;
        f(&mut pool)
    }

    /// See [`PoolEngine::add_liquidity`].
    ///
    /// # Errors
    ///
    /// [`AmmError::LockPoisoned`] or the engine's error.
    pub fn add_liquidity(
        &self,
        provider: &AccountId,
        amount_a: Amount,
        amount_b: Amount,
    ) -> crate::error::Result<Deposit> {
        self.lock()?.add_liquidity(provider, amount_a, amount_b)
    }

    /// See [`PoolEngine::remove_liquidity`].
    ///
    /// # Errors
    ///
    /// [`AmmError::LockPoisoned`] or the engine's error.
    pub fn remove_liquidity(
        &self,
        provider: &AccountId,
        shares: Liquidity,
    ) -> crate::error::Result<Withdrawal> {
        self.lock()?.remove_liquidity(provider, shares)
    }

    /// See [`PoolEngine::swap`].
    ///
    /// # Errors
    ///
    /// [`AmmError::LockPoisoned`] or the engine's error.
    pub fn swap(
        &self,
        trader: &AccountId,
        direction: SwapDirection,
        amount_in: Amount,
        min_amount_out: Amount,
    ) -> crate::error::Result<SwapResult> {
        self.lock()?
            .swap(trader, direction, amount_in, min_amount_out)
    }

    /// See [`PoolEngine::swap_a_for_b`].
    ///
    /// # Errors
    ///
    /// [`AmmError::LockPoisoned`] or the engine's error.
    pub fn swap_a_for_b(&self, trader: &AccountId, amount_in: Amount) -> crate::error::Result<SwapResult> {
        self.lock()?.swap_a_for_b(trader, amount_in)
    }

    /// See [`PoolEngine::swap_b_for_a`].
    ///
    /// # Errors
    ///
    /// [`AmmError::LockPoisoned`] or the engine's error.
    pub fn swap_b_for_a(&self, trader: &AccountId, amount_in: Amount) -> crate::error::Result<SwapResult> {
        self.lock()?.swap_b_for_a(trader, amount_in)
    }

    /// Current reserves.
    ///
    /// # Errors
    ///
    /// [`AmmError::LockPoisoned`].
    pub fn get_reserves(&self) -> crate::error::Result<(Amount, Amount)> {
        Ok(self.lock()?.get_reserves())
    }

    /// Current spot price.
    ///
    /// # Errors
    ///
    /// [`AmmError::LockPoisoned`] or the engine's error.
    pub fn get_price(&self) -> crate::error::Result<Price> {
        self.lock()?.get_price()
    }

    /// Outstanding shares.
    ///
    /// # Errors
    ///
    /// [`AmmError::LockPoisoned`].
    pub fn total_liquidity(&self) -> crate::error::Result<Liquidity> {
        Ok(self.lock()?.total_liquidity())
    }

    /// Shares held by `provider`.
    ///
    /// # Errors
    ///
    /// [`AmmError::LockPoisoned`].
    pub fn liquidity_of(&self, provider: &AccountId) -> crate::error::Result<Liquidity> {
        Ok(self.lock()?.liquidity_of(provider))
    }
}
