//! In-memory asset ledger for tests and local bootstrapping.

use std::collections::{BTreeMap, BTreeSet};

use tracing::trace;

use super::{AssetLedger, LedgerError};
use crate::domain::{AccountId, Amount};

/// A map-backed fungible asset with mint, approve and freeze.
///
/// Freezing an account makes every transfer touching it fail, which lets
/// tests force a specific leg of a pool operation to be rejected.
///
/// # Examples
///
/// ```
/// use hydra_pair::domain::{AccountId, Amount};
/// use hydra_pair::ledger::{AssetLedger, InMemoryLedger};
///
/// let alice = AccountId::from_bytes([1u8; 32]);
/// let bob = AccountId::from_bytes([2u8; 32]);
/// let mut tka = InMemoryLedger::new("TKA");
/// tka.mint(&alice, Amount::new(1_000)).ok();
/// tka.transfer(&alice, &bob, Amount::new(250)).ok();
/// assert_eq!(tka.balance_of(&bob), Amount::new(250));
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryLedger {
    symbol: String,
    balances: BTreeMap<AccountId, Amount>,
    allowances: BTreeMap<(AccountId, AccountId), Amount>,
    frozen: BTreeSet<AccountId>,
    total_supply: Amount,
}

impl InMemoryLedger {
    /// Creates an empty ledger labelled `symbol`.
    #[must_use]
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            ..Self::default()
        }
    }

    /// The asset's label.
    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Sum of all balances.
    pub fn total_supply(&self) -> Amount {
        self.total_supply
    }

    /// Creates `amount` new units in `to`'s balance.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::Overflow`] if the balance or supply overflows.
    pub fn mint(&mut self, to: &AccountId, amount: Amount) -> Result<(), LedgerError> {
        let supply = self
            .total_supply
            .checked_add(&amount)
            .ok_or(LedgerError::Overflow)?;
        let balance = self
            .balance_of(to)
            .checked_add(&amount)
            .ok_or(LedgerError::Overflow)?;
        self.total_supply = supply;
        self.balances.insert(*to, balance);
        trace!(symbol = %self.symbol, %to, %amount, "mint");
        Ok(())
    }

    /// Sets the amount `spender` may pull from `owner`.
    pub fn approve(&mut self, owner: &AccountId, spender: &AccountId, amount: Amount) {
        self.allowances.insert((*owner, *spender), amount);
    }

    /// Blocks every transfer from or to `account`.
    pub fn freeze(&mut self, account: &AccountId) {
        self.frozen.insert(*account);
    }

    /// Lifts a freeze.
    pub fn unfreeze(&mut self, account: &AccountId) {
        self.frozen.remove(account);
    }

    fn ensure_not_frozen(&self, account: &AccountId) -> Result<(), LedgerError> {
        if self.frozen.contains(account) {
            return Err(LedgerError::AccountFrozen(*account));
        }
        Ok(())
    }

    fn move_balance(
        &mut self,
        from: &AccountId,
        to: &AccountId,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        let available = self.balance_of(from);
        let debited = available
            .checked_sub(&amount)
            .ok_or(LedgerError::InsufficientBalance {
                needed: amount,
                available,
            })?;
        if from == to {
            return Ok(());
        }
        let credited = self
            .balance_of(to)
            .checked_add(&amount)
            .ok_or(LedgerError::Overflow)?;
        if debited.is_zero() {
            self.balances.remove(from);
        } else {
            self.balances.insert(*from, debited);
        }
        self.balances.insert(*to, credited);
        Ok(())
    }
}

impl AssetLedger for InMemoryLedger {
    fn balance_of(&self, account: &AccountId) -> Amount {
        self.balances.get(account).copied().unwrap_or(Amount::ZERO)
    }

    fn allowance(&self, owner: &AccountId, spender: &AccountId) -> Amount {
        self.allowances
            .get(&(*owner, *spender))
            .copied()
            .unwrap_or(Amount::ZERO)
    }

    fn transfer_from(
        &mut self,
        spender: &AccountId,
        owner: &AccountId,
        to: &AccountId,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        self.check_transfer_from(spender, owner, to, amount)?;
        let remaining = self
            .allowance(owner, spender)
            .checked_sub(&amount)
            .ok_or(LedgerError::InsufficientAllowance {
                needed: amount,
                available: self.allowance(owner, spender),
            })?;
        self.move_balance(owner, to, amount)?;
        self.allowances.insert((*owner, *spender), remaining);
        trace!(symbol = %self.symbol, %owner, %to, %amount, "transfer_from");
        Ok(())
    }

    fn transfer(
        &mut self,
        from: &AccountId,
        to: &AccountId,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        self.check_transfer(from, to, amount)?;
        self.move_balance(from, to, amount)?;
        trace!(symbol = %self.symbol, %from, %to, %amount, "transfer");
        Ok(())
    }

    fn check_transfer(
        &self,
        from: &AccountId,
        to: &AccountId,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        self.ensure_not_frozen(from)?;
        self.ensure_not_frozen(to)?;
        let available = self.balance_of(from);
        if available < amount {
            return Err(LedgerError::InsufficientBalance {
                needed: amount,
                available,
            });
        }
        if from != to && self.balance_of(to).checked_add(&amount).is_none() {
            return Err(LedgerError::Overflow);
        }
        Ok(())
    }
}
