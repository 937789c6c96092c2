//! Moving funds between participants and the pool's custody account.
//!
//! An operation's transfers are expressed as [`Leg`]s and settled as a
//! unit:
//!
//! 1. Every leg is preflighted with `check_transfer_from` /
//!    `check_transfer` before anything moves.
//! 2. Pulls (participant to pool) run before pushes (pool to participant).
//! 3. If a leg still fails, completed pulls are refunded in reverse order.
//!    A completed push cannot be clawed back; that only happens when a
//!    ledger's `check_*` contradicts its own transfer and is logged as an
//!    error.

use tracing::{error, warn};

use crate::domain::{AccountId, Amount, Asset};
use crate::ledger::{AssetLedger, LedgerError};

/// One transfer on one asset ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Leg {
    /// `owner` pays the pool, spending the pool's allowance.
    Pull {
        asset: Asset,
        owner: AccountId,
        amount: Amount,
    },
    /// The pool pays `to` out of custody.
    Push {
        asset: Asset,
        to: AccountId,
        amount: Amount,
    },
}

impl Leg {
    const fn is_pull(&self) -> bool {
        matches!(self, Self::Pull { .. })
    }

    const fn amount(&self) -> Amount {
        match self {
            Self::Pull { amount, .. } | Self::Push { amount, .. } => *amount,
        }
    }
}

/// Both ledgers of a pair, borrowed for the duration of one operation.
pub(crate) struct Settlement<'a> {
    pool: AccountId,
    ledger_a: &'a mut dyn AssetLedger,
    ledger_b: &'a mut dyn AssetLedger,
}

impl<'a> Settlement<'a> {
    pub(crate) fn new(
        pool: AccountId,
        ledger_a: &'a mut dyn AssetLedger,
        ledger_b: &'a mut dyn AssetLedger,
    ) -> Self {
        Self {
            pool,
            ledger_a,
            ledger_b,
        }
    }

    fn ledger(&self, asset: Asset) -> &(dyn AssetLedger + 'a) {
        match asset {
            Asset::A => &*self.ledger_a,
            Asset::B => &*self.ledger_b,
        }
    }

    fn ledger_mut(&mut self, asset: Asset) -> &mut (dyn AssetLedger + 'a) {
        match asset {
            Asset::A => &mut *self.ledger_a,
            Asset::B => &mut *self.ledger_b,
        }
    }

    /// Preflights and executes `legs`.  Zero-amount legs are skipped.
    ///
    /// # Errors
    ///
    /// The first [`LedgerError`] encountered.  On error no completed pull
    /// remains in the pool.
    pub(crate) fn settle(&mut self, legs: &[Leg]) -> Result<(), LedgerError> {
        let ordered: Vec<Leg> = legs
            .iter()
            .filter(|leg| leg.is_pull())
            .chain(legs.iter().filter(|leg| !leg.is_pull()))
            .filter(|leg| !leg.amount().is_zero())
            .copied()
            .collect();

        for leg in &ordered {
            self.preflight(leg)?;
        }

        for (done, leg) in ordered.iter().enumerate() {
            if let Err(err) = self.execute(leg) {
                warn!(?leg, %err, "transfer leg failed after preflight");
                self.compensate(&ordered[..done]);
                return Err(err);
            }
        }
        Ok(())
    }

    fn preflight(&self, leg: &Leg) -> Result<(), LedgerError> {
        match *leg {
            Leg::Pull {
                asset,
                owner,
                amount,
            } => self
                .ledger(asset)
                .check_transfer_from(&self.pool, &owner, &self.pool, amount),
            Leg::Push { asset, to, amount } => {
                self.ledger(asset).check_transfer(&self.pool, &to, amount)
            }
        }
    }

    fn execute(&mut self, leg: &Leg) -> Result<(), LedgerError> {
        let pool = self.pool;
        match *leg {
            Leg::Pull {
                asset,
                owner,
                amount,
            } => self
                .ledger_mut(asset)
                .transfer_from(&pool, &owner, &pool, amount),
            Leg::Push { asset, to, amount } => {
                self.ledger_mut(asset).transfer(&pool, &to, amount)
            }
        }
    }

    fn compensate(&mut self, completed: &[Leg]) {
        let pool = self.pool;
        for leg in completed.iter().rev() {
            match *leg {
                Leg::Pull {
                    asset,
                    owner,
                    amount,
                } => {
                    if let Err(err) = self.ledger_mut(asset).transfer(&pool, &owner, amount) {
                        error!(%asset, %owner, %amount, %err, "refund of pulled funds failed");
                    }
                }
                Leg::Push { asset, to, amount } => {
                    error!(%asset, %to, %amount, "completed payout cannot be reclaimed");
                }
            }
        }
    }
}
