//! Domain events emitted by committed pool operations.
//!
//! An event is produced only after every ledger transfer of the operation
//! has succeeded; a rejected or rolled-back operation emits nothing.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::{AccountId, Amount, Liquidity, SwapDirection};

/// Observable record of a completed state change.
///
/// # Examples
///
/// ```
/// use hydra_pair::domain::{AccountId, Amount, SwapDirection};
/// use hydra_pair::events::PoolEvent;
///
/// let ev = PoolEvent::Swap {
///     trader: AccountId::from_bytes([7u8; 32]),
///     direction: SwapDirection::AToB,
///     amount_in: Amount::new(10),
///     amount_out: Amount::new(19),
/// };
/// assert_eq!(ev.actor(), &AccountId::from_bytes([7u8; 32]));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum PoolEvent {
    /// A provider deposited both assets and received shares.
    LiquidityAdded {
        /// Depositor.
        provider: AccountId,
        /// Asset A pulled in.
        amount_a: Amount,
        /// Asset B pulled in.
        amount_b: Amount,
        /// Shares credited.
        liquidity_minted: Liquidity,
    },

    /// A provider burned shares for both assets.
    LiquidityRemoved {
        /// Withdrawer.
        provider: AccountId,
        /// Asset A paid out.
        amount_a: Amount,
        /// Asset B paid out.
        amount_b: Amount,
        /// Shares destroyed.
        liquidity_burned: Liquidity,
    },

    /// A trader exchanged one asset for the other.
    Swap {
        /// Trader.
        trader: AccountId,
        /// Which asset was sold.
        direction: SwapDirection,
        /// Input paid by the trader.
        amount_in: Amount,
        /// Output received by the trader.
        amount_out: Amount,
    },
}

impl PoolEvent {
    /// The account that initiated the operation.
    #[must_use]
    pub const fn actor(&self) -> &AccountId {
        match self {
            Self::LiquidityAdded { provider, .. } | Self::LiquidityRemoved { provider, .. } => {
                provider
            }
            Self::Swap { trader, .. } => trader,
        }
    }
}

impl fmt::Display for PoolEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LiquidityAdded {
                provider,
                amount_a,
                amount_b,
                liquidity_minted,
            } => write!(
                f,
                "LiquidityAdded({provider}: a={amount_a}, b={amount_b}, minted={liquidity_minted})"
            ),
            Self::LiquidityRemoved {
                provider,
                amount_a,
                amount_b,
                liquidity_burned,
            } => write!(
                f,
                "LiquidityRemoved({provider}: a={amount_a}, b={amount_b}, burned={liquidity_burned})"
            ),
            Self::Swap {
                trader,
                direction,
                amount_in,
                amount_out,
            } => write!(
                f,
                "Swap({trader}: {direction}, in={amount_in}, out={amount_out})"
            ),
        }
    }
}
