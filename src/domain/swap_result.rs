//! Outcome of a committed swap.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::{Amount, SwapDirection};
use crate::error::AmmError;

/// What a committed swap exchanged.
///
/// # Invariants
///
/// - `amount_in > 0` and `amount_out > 0`.
/// - `fee <= amount_in`.  A one-unit input pays a one-unit fee because
///   fees round up.
///
/// # Examples
///
/// ```
/// use hydra_pair::domain::{Amount, SwapDirection, SwapResult};
///
/// let r = SwapResult::new(SwapDirection::AToB, Amount::new(1_000), Amount::new(990), Amount::new(3));
/// assert!(r.is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SwapResult {
    direction: SwapDirection,
    amount_in: Amount,
    amount_out: Amount,
    fee: Amount,
}

impl SwapResult {
    /// Creates a validated `SwapResult`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidAmount`] if `amount_in` is zero.
    /// - [`AmmError::InsufficientOutputAmount`] if `amount_out` is zero.
    /// - [`AmmError::InvariantViolation`] if `fee > amount_in`.
    pub const fn new(
        direction: SwapDirection,
        amount_in: Amount,
        amount_out: Amount,
        fee: Amount,
    ) -> crate::error::Result<Self> {
        if amount_in.is_zero() {
            return Err(AmmError::InvalidAmount);
        }
        if amount_out.is_zero() {
            return Err(AmmError::InsufficientOutputAmount);
        }
        if fee.get() > amount_in.get() {
            return Err(AmmError::InvariantViolation("fee exceeds amount_in"));
        }
        Ok(Self {
            direction,
            amount_in,
            amount_out,
            fee,
        })
    }

    /// Direction of the trade.
    #[must_use]
    pub const fn direction(&self) -> SwapDirection {
        self.direction
    }

    /// Amount paid in.
    pub const fn amount_in(&self) -> Amount {
        self.amount_in
    }

    /// Amount paid out.
    pub const fn amount_out(&self) -> Amount {
        self.amount_out
    }

    /// Fee retained by the pool, in the input asset.
    pub const fn fee(&self) -> Amount {
        self.fee
    }
}

impl fmt::Display for SwapResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Swap {}(in={}, out={}, fee={})",
            self.direction, self.amount_in, self.amount_out, self.fee
        )
    }
}
