//! Pool configuration.
//!
//! [`PoolConfig`] is the declarative blueprint for a pool: its custody
//! account and its fee ratio.  Both are fixed once the pool is built.

mod pool_config;

pub use pool_config::PoolConfig;
