//! Convenience re-exports for common types and traits.
//!
//! ```rust
//! use hydra_pair::prelude::*;
//! ```

pub use crate::config::PoolConfig;
pub use crate::domain::{
    AccountId, Amount, Asset, Deposit, FeeRatio, Liquidity, Price, Rounding, SwapDirection,
    SwapResult, Withdrawal, SCALE,
};
pub use crate::error::{AmmError, Result};
pub use crate::events::PoolEvent;
pub use crate::ledger::{AssetLedger, InMemoryLedger, LedgerError};
pub use crate::math::CheckedArithmetic;
pub use crate::pool::{PoolEngine, SharedPool};
pub use crate::traits::{LiquidityPool, SwapPool};
