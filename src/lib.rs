//! # Hydra Pair
//!
//! A two-asset constant-product (`x · y = k`) liquidity pool engine: share
//! accounting for liquidity providers, fee-aware swap pricing, and
//! invariant-checked state transitions over pluggable asset ledgers.
//!
//! # Quick Start
//!
//! ```rust
//! use hydra_pair::prelude::*;
//!
//! let pool_id = AccountId::from_bytes([9u8; 32]);
//! let alice = AccountId::from_bytes([1u8; 32]);
//!
//! // 1. Two asset ledgers with a funded, approving provider
//! let mut tka = InMemoryLedger::new("TKA");
//! let mut tkb = InMemoryLedger::new("TKB");
//! tka.mint(&alice, Amount::new(10_000)).ok();
//! tkb.mint(&alice, Amount::new(10_000)).ok();
//! tka.approve(&alice, &pool_id, Amount::new(10_000));
//! tkb.approve(&alice, &pool_id, Amount::new(10_000));
//!
//! // 2. A pool with the default 0.3% fee
//! let Ok(config) = PoolConfig::new(pool_id, FeeRatio::DEFAULT) else { return; };
//! let Ok(mut pool) = PoolEngine::new(config, tka, tkb) else { return; };
//!
//! // 3. Seed it, then trade against it
//! let Ok(deposit) = pool.add_liquidity(&alice, Amount::new(1_000), Amount::new(2_000)) else { return; };
//! assert!(deposit.liquidity_minted.get() > 0);
//!
//! let Ok(swap) = pool.swap_a_for_b(&alice, Amount::new(100)) else { return; };
//! assert!(swap.amount_out().get() > 0);
//! assert!(pool.check_invariants().is_ok());
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐
//! │  SharedPool   │  Arc<Mutex<..>>, one lock per pool
//! └──────┬───────┘
//!        ▼
//! ┌──────────────┐
//! │  PoolEngine   │  validate → price → commit → settle → emit
//! └──┬────────┬──┘
//!    │        │ AssetLedger (transfer_from / transfer)
//!    │        ▼
//!    │  ┌──────────────┐
//!    │  │ asset ledgers │  one per side, owned by the engine
//!    │  └──────────────┘
//!    ▼
//! ┌──────────────┐   ┌──────────────┐
//! │   pricing     │   │    state      │  ReserveState + LiquidityLedger
//! └──────────────┘   └──────────────┘
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Newtype values: [`Amount`](domain::Amount), [`Liquidity`](domain::Liquidity), [`Price`](domain::Price), [`FeeRatio`](domain::FeeRatio), etc. |
//! | [`math`]   | Checked arithmetic, 256-bit `mul_div`, integer square root |
//! | [`ledger`] | [`AssetLedger`](ledger::AssetLedger) capability and an in-memory implementation |
//! | [`state`]  | [`ReserveState`](state::ReserveState) and [`LiquidityLedger`](state::LiquidityLedger) |
//! | [`pricing`] | Pure quote functions |
//! | [`pool`]   | [`PoolEngine`](pool::PoolEngine) and [`SharedPool`](pool::SharedPool) |
//! | [`traits`] | [`SwapPool`](traits::SwapPool) and [`LiquidityPool`](traits::LiquidityPool) |
//! | [`events`] | [`PoolEvent`](events::PoolEvent) log entries |
//! | [`config`] | [`PoolConfig`](config::PoolConfig), JSON loadable |
//! | [`logging`] | `tracing-subscriber` setup |
//! | [`error`]  | [`AmmError`](error::AmmError) unified error enum |
//! | [`prelude`] | Convenience re-exports |

pub mod config;
pub mod domain;
pub mod error;
pub mod events;
pub mod ledger;
pub mod logging;
pub mod math;
pub mod pool;
pub mod prelude;
pub mod pricing;
pub mod state;
pub mod traits;
