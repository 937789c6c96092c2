//! Pool engine and its thread-safe handle.
//!
//! - [`PoolEngine`]: single-owner orchestrator; `&mut self` on every
//!   state-changing call.
//! - [`SharedPool`]: `Arc<Mutex<PoolEngine>>` for use across threads.

mod engine;
mod guard;
mod settlement;
mod shared;

#[cfg(test)]
mod proptest_properties;

pub use engine::PoolEngine;
pub use shared::SharedPool;
