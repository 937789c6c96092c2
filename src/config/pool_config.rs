//! Construction parameters for a [`PoolEngine`](crate::pool::PoolEngine).

use serde::{Deserialize, Serialize};

use crate::domain::{AccountId, FeeRatio};
use crate::error::AmmError;

/// Immutable pool parameters.
///
/// - `pool_account`: the identity the pool holds custody under on both
///   asset ledgers.  Providers and traders approve this account.
/// - `fee`: retained-input ratio applied to every swap.  Defaults to
///   997/1000 when omitted from JSON.
///
/// # Validation
///
/// - The pool account must not be the all-zero identity.
/// - The fee ratio must satisfy [`FeeRatio::validate`].
///
/// # Examples
///
/// ```
/// use hydra_pair::config::PoolConfig;
/// use hydra_pair::domain::{AccountId, FeeRatio};
///
/// let cfg = PoolConfig::new(AccountId::from_bytes([9u8; 32]), FeeRatio::DEFAULT);
/// assert!(cfg.is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolConfig {
    pool_account: AccountId,
    #[serde(default)]
    fee: FeeRatio,
}

impl PoolConfig {
    /// Creates a validated configuration.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidConfiguration`] if `pool_account` is zero.
    /// - [`AmmError::InvalidFee`] if the fee ratio is out of range.
    pub fn new(pool_account: AccountId, fee: FeeRatio) -> crate::error::Result<Self> {
        let config = Self { pool_account, fee };
        config.validate()?;
        Ok(config)
    }

    /// Parses and validates a JSON document.
    ///
    /// ```json
    /// { "pool_account": [9, 9, ...], "fee": { "numerator": 997, "denominator": 1000 } }
    /// ```
    ///
    /// # Errors
    ///
    /// - [`AmmError::Config`] on malformed JSON.
    /// - Any error from [`validate`](Self::validate).
    pub fn from_json_str(json: &str) -> crate::error::Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Validates all configuration invariants.
    ///
    /// # Errors
    ///
    /// See [`PoolConfig::new`].
    pub fn validate(&self) -> crate::error::Result<()> {
        if self.pool_account == AccountId::zero() {
            return Err(AmmError::InvalidConfiguration(
                "pool account must not be the zero identity",
            ));
        }
        self.fee.validate()
    }

    /// Returns the pool's custody account.
    #[must_use]
    pub const fn pool_account(&self) -> AccountId {
        self.pool_account
    }

    /// Returns the swap fee ratio.
    #[must_use]
    pub const fn fee(&self) -> FeeRatio {
        self.fee
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn account_json(byte: u8) -> String {
        let parts: Vec<String> = (0..32).map(|_| byte.to_string()).collect();
        format!("[{}]", parts.join(","))
    }

    #[test]
    fn new_accepts_valid() {
        let Ok(cfg) = PoolConfig::new(AccountId::from_bytes([9u8; 32]), FeeRatio::DEFAULT) else {
            panic!("expected valid config");
        };
        assert_eq!(cfg.fee(), FeeRatio::DEFAULT);
        assert_eq!(cfg.pool_account(), AccountId::from_bytes([9u8; 32]));
    }

    #[test]
    fn zero_pool_account_rejected() {
        let r = PoolConfig::new(AccountId::zero(), FeeRatio::DEFAULT);
        assert!(matches!(r, Err(AmmError::InvalidConfiguration(_))));
    }

    #[test]
    fn json_with_explicit_fee() {
        let json = format!(
            r#"{{ "pool_account": {}, "fee": {{ "numerator": 995, "denominator": 1000 }} }}"#,
            account_json(9)
        );
        let Ok(cfg) = PoolConfig::from_json_str(&json) else {
            panic!("expected valid json config");
        };
        assert_eq!(cfg.fee().numerator(), 995);
    }

    #[test]
    fn json_fee_defaults() {
        let json = format!(r#"{{ "pool_account": {} }}"#, account_json(3));
        let Ok(cfg) = PoolConfig::from_json_str(&json) else {
            panic!("expected valid json config");
        };
        assert_eq!(cfg.fee(), FeeRatio::DEFAULT);
    }

    #[test]
    fn json_bad_fee_is_validated() {
        let json = format!(
            r#"{{ "pool_account": {}, "fee": {{ "numerator": 1001, "denominator": 1000 }} }}"#,
            account_json(9)
        );
        assert!(matches!(
            PoolConfig::from_json_str(&json),
            Err(AmmError::InvalidFee(_))
        ));
    }

    #[test]
    fn malformed_json() {
        assert!(matches!(
            PoolConfig::from_json_str("{ pool_account"),
            Err(AmmError::Config(_))
        ));
    }
}
