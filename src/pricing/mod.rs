//! Pure pricing functions for a constant-product pair.
//!
//! Nothing here touches pool state or ledgers: every function takes the
//! reserves it needs by value or shared reference and returns a quote.
//! [`PoolEngine`](crate::pool::PoolEngine) calls these, then commits.
//!
//! | Function | Purpose |
//! |----------|---------|
//! | [`get_amount_out`] | exact-in swap output |
//! | [`get_amount_in`] | exact-out swap input |
//! | [`get_price`] | spot price of A in B |
//! | [`quote`] | proportional amount at current ratio |
//! | [`quote_liquidity`] | trim a deposit offer to the pool ratio |
//! | [`liquidity_to_mint`] | shares for a deposit |
//! | [`deposit_for_liquidity`] | assets owed for minted shares |
//! | [`amounts_for_liquidity`] | payout for burned shares |

mod liquidity;
mod price;
mod swap;

pub use liquidity::{
    amounts_for_liquidity, deposit_for_liquidity, liquidity_to_mint, quote_liquidity,
};
pub use price::{get_price, quote};
pub use swap::{get_amount_in, get_amount_out};
