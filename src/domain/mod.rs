//! Fundamental domain value types used throughout the pool engine.
//!
//! Quantities, shares, identities, prices and fees are newtypes so the
//! compiler keeps asset amounts, share counts and fixed-point prices from
//! being mixed up.

mod account_id;
mod amount;
mod asset;
mod fee;
mod liquidity;
mod price;
mod receipts;
mod rounding;
mod swap_result;

pub use account_id::AccountId;
pub use amount::Amount;
pub use asset::{Asset, SwapDirection};
pub use fee::FeeRatio;
pub use liquidity::Liquidity;
pub use price::{Price, SCALE};
pub use receipts::{Deposit, Withdrawal};
pub use rounding::Rounding;
pub use swap_result::SwapResult;
