//! Results of committed liquidity operations.

use serde::{Deserialize, Serialize};

use super::{Amount, Liquidity};

/// Assets actually pulled into the pool and the shares minted for them.
///
/// On a non-initial deposit the used amounts may be smaller than what
/// the provider offered; only the used amounts are transferred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Deposit {
    /// Asset A taken from the provider.
    pub amount_a: Amount,
    /// Asset B taken from the provider.
    pub amount_b: Amount,
    /// Shares credited to the provider.
    pub liquidity_minted: Liquidity,
}

/// Assets returned to a provider for burned shares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Withdrawal {
    /// Asset A paid out.
    pub amount_a: Amount,
    /// Asset B paid out.
    pub amount_b: Amount,
    /// Shares removed from the provider's position.
    pub liquidity_burned: Liquidity,
}
