//! Asset-ledger capability consumed by the pool.
//!
//! The pool never stores asset balances itself.  It moves funds through
//! an [`AssetLedger`], one per side of the pair, bound at construction.
//! [`InMemoryLedger`] is a test/bootstrap collaborator with `mint` and
//! `approve`; production deployments supply their own implementation.
//!
//! # Transfer Contract
//!
//! - `transfer_from` moves `amount` from `owner` to `to` on behalf of
//!   `spender`, consuming allowance.
//! - `transfer` moves `amount` out of `from`, which must be the caller's
//!   own custody (the pool only ever passes its own account).
//! - Both are atomic: they either move the full amount or fail without
//!   effect.
//! - The `check_*` methods must predict the outcome of the corresponding
//!   transfer against the current ledger state.  The pool preflights every
//!   leg of an operation before executing any of them.

mod memory;

use thiserror::Error;

use crate::domain::{AccountId, Amount};

pub use memory::InMemoryLedger;

/// Reasons an asset ledger rejects a transfer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// The source account does not hold enough.
    #[error("insufficient balance: needed {needed}, available {available}")]
    InsufficientBalance {
        /// Amount the transfer required.
        needed: Amount,
        /// Balance actually held.
        available: Amount,
    },

    /// The spender's allowance is too small.
    #[error("insufficient allowance: needed {needed}, available {available}")]
    InsufficientAllowance {
        /// Amount the transfer required.
        needed: Amount,
        /// Allowance actually granted.
        available: Amount,
    },

    /// The account is blocked from sending or receiving.
    #[error("account {0} is frozen")]
    AccountFrozen(AccountId),

    /// A balance or supply counter would overflow.
    #[error("ledger balance overflow")]
    Overflow,
}

/// Balance and allowance store for one fungible asset.
pub trait AssetLedger {
    /// Balance held by `account`.
    fn balance_of(&self, account: &AccountId) -> Amount;

    /// Amount `spender` may still pull from `owner`.
    fn allowance(&self, owner: &AccountId, spender: &AccountId) -> Amount;

    /// Moves `amount` from `owner` to `to`, spending `spender`'s allowance.
    ///
    /// # Errors
    ///
    /// Returns a [`LedgerError`] when allowance or balance is insufficient.
    fn transfer_from(
        &mut self,
        spender: &AccountId,
        owner: &AccountId,
        to: &AccountId,
        amount: Amount,
    ) -> Result<(), LedgerError>;

    /// Moves `amount` from `from` to `to`.
    ///
    /// # Errors
    ///
    /// Returns a [`LedgerError`] when the balance is insufficient.
    fn transfer(
        &mut self,
        from: &AccountId,
        to: &AccountId,
        amount: Amount,
    ) -> Result<(), LedgerError>;

    /// Predicts whether [`transfer`](Self::transfer) would succeed.
    ///
    /// # Errors
    ///
    /// The error the transfer would return.
    fn check_transfer(
        &self,
        from: &AccountId,
        _to: &AccountId,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        let available = self.balance_of(from);
        if available < amount {
            return Err(LedgerError::InsufficientBalance {
                needed: amount,
                available,
            });
        }
        Ok(())
    }

    /// Predicts whether [`transfer_from`](Self::transfer_from) would succeed.
    ///
    /// # Errors
    ///
    /// The error the transfer would return.
    fn check_transfer_from(
        &self,
        spender: &AccountId,
        owner: &AccountId,
        to: &AccountId,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        let allowed = self.allowance(owner, spender);
        if allowed < amount {
            return Err(LedgerError::InsufficientAllowance {
                needed: amount,
                available: allowed,
            });
        }
        self.check_transfer(owner, to, amount)
    }
}
