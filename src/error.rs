//! Unified error types for the pool engine.
//!
//! Every fallible operation in the crate returns [`AmmError`].  Failures are
//! local, synchronous rejections of the single operation that raised them:
//! the engine never retries and never commits a partial state change.

use thiserror::Error;

use crate::ledger::LedgerError;

/// Errors raised by pricing, accounting and pool operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmmError {
    /// A required quantity (liquidity deposit or share withdrawal) was zero.
    #[error("amount must be greater than zero")]
    ZeroAmount,

    /// A swap input (or exact-out target) was zero.
    #[error("invalid swap amount")]
    InvalidAmount,

    /// A swap was attempted against a pool with an empty side.
    #[error("insufficient liquidity in pool")]
    InsufficientLiquidity,

    /// A withdrawal exceeded the caller's share balance.
    #[error("insufficient liquidity shares")]
    InsufficientShares,

    /// The asset ledger rejected a transfer; the ledger error is carried unmodified.
    #[error("asset transfer failed: {0}")]
    TransferFailed(LedgerError),

    /// A deposit was too small to mint a single share.
    #[error("deposit too small to mint liquidity")]
    InsufficientLiquidityMinted,

    /// A withdrawal would return nothing of either asset.
    #[error("withdrawal too small to return any asset")]
    InsufficientLiquidityBurned,

    /// A swap would return nothing to the trader.
    #[error("swap output rounds to zero")]
    InsufficientOutputAmount,

    /// The computed result is worse than the caller's stated minimum.
    #[error("slippage limit exceeded")]
    SlippageExceeded,

    /// A pool invariant would be broken by the transition.
    #[error("pool invariant violated: {0}")]
    InvariantViolation(&'static str),

    /// Arithmetic overflow.
    #[error("arithmetic overflow: {0}")]
    Overflow(&'static str),

    /// Arithmetic underflow.
    #[error("arithmetic underflow: {0}")]
    Underflow(&'static str),

    /// Division by zero.
    #[error("division by zero")]
    DivisionByZero,

    /// Pool configuration is inconsistent.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),

    /// Fee ratio is out of range.
    #[error("invalid fee: {0}")]
    InvalidFee(&'static str),

    /// Configuration document could not be parsed.
    #[error("config parse error: {0}")]
    Config(String),

    /// A state-changing operation was entered while another was in progress.
    #[error("reentrant call rejected")]
    Reentrancy,

    /// The lock protecting a shared pool was poisoned by a panicking holder.
    #[error("pool lock poisoned")]
    LockPoisoned,
}

impl From<LedgerError> for AmmError {
    fn from(err: LedgerError) -> Self {
        Self::TransferFailed(err)
    }
}

impl From<serde_json::Error> for AmmError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(err.to_string())
    }
}

/// Crate-wide result alias.
pub type Result<T> = core::result::Result<T, AmmError>;
