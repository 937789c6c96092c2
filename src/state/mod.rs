//! Mutable pool state: reserves and share positions.
//!
//! Both records are owned exclusively by
//! [`PoolEngine`](crate::pool::PoolEngine); nothing else writes them.

mod liquidity_ledger;
mod reserve_state;

pub use liquidity_ledger::LiquidityLedger;
pub use reserve_state::ReserveState;
