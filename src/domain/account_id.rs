//! Opaque account identity.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Identity of a participant: a liquidity provider, a trader, or the pool
/// itself when it holds custody on an asset ledger.
///
/// Wraps a fixed-size `[u8; 32]` byte array.  All 32-byte sequences are
/// valid identities, so construction is infallible.
///
/// # Examples
///
/// ```
/// use hydra_pair::domain::AccountId;
///
/// let alice = AccountId::from_bytes([1u8; 32]);
/// assert_eq!(alice.as_bytes(), [1u8; 32]);
/// assert_ne!(alice, AccountId::zero());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AccountId([u8; 32]);

impl AccountId {
    /// Creates an `AccountId` from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the underlying 32-byte representation.
    #[must_use]
    pub const fn as_bytes(&self) -> [u8; 32] {
        self.0
    }

    /// Returns the all-zero identity.
    #[must_use]
    pub const fn zero() -> Self {
        Self([0u8; 32])
    }
}

impl fmt::Display for AccountId {
    /// Short hex form: the first four bytes, enough to tell accounts apart in logs.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x")?;
        for byte in &self.0[..4] {
            write!(f, "{byte:02x}")?;
        }
        write!(f, "…")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_bytes_round_trip() {
        let bytes = [42u8; 32];
        assert_eq!(AccountId::from_bytes(bytes).as_bytes(), bytes);
    }

    #[test]
    fn ordering_is_bytewise() {
        let a = AccountId::from_bytes([1u8; 32]);
        let b = AccountId::from_bytes([2u8; 32]);
        assert!(a < b);
    }

    #[test]
    fn display_is_short_hex() {
        let id = AccountId::from_bytes([0xab; 32]);
        assert_eq!(id.to_string(), "0xabababab…");
    }
}
