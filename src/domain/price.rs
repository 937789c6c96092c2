//! Fixed-point price of asset A denominated in asset B.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Fixed-point scale: a [`Price`] of `SCALE` means one unit of A is worth
/// one unit of B.
pub const SCALE: u128 = 1_000_000_000_000_000_000;

/// Price of asset A in units of asset B, scaled by [`SCALE`].
///
/// `Price::ZERO` means "no price available" (empty pool), which is a
/// normal state and not an error.
///
/// # Examples
///
/// ```
/// use hydra_pair::domain::{Price, SCALE};
///
/// let p = Price::from_raw(2 * SCALE);
/// assert_eq!(p.integer_part(), 2);
/// assert!(!p.is_zero());
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Price(u128);

impl Price {
    /// No price available.
    pub const ZERO: Self = Self(0);

    /// Wraps a raw fixed-point value already multiplied by [`SCALE`].
    #[must_use]
    pub const fn from_raw(raw: u128) -> Self {
        Self(raw)
    }

    /// Returns the raw scaled value.
    #[must_use]
    pub const fn raw(&self) -> u128 {
        self.0
    }

    /// Returns `true` when no price is available.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Whole units of B per unit of A, truncated.
    #[must_use]
    pub const fn integer_part(&self) -> u128 {
        self.0 / SCALE
    }

}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let frac = self.0 % SCALE;
        write!(f, "{}.{:018}", self.integer_part(), frac)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_and_parity() {
        assert!(Price::ZERO.is_zero());
        assert_eq!(Price::from_raw(SCALE).integer_part(), 1);
        assert_eq!(Price::default(), Price::ZERO);
    }

    #[test]
    fn display_shows_eighteen_decimals() {
        let p = Price::from_raw(SCALE + SCALE / 2);
        assert_eq!(p.to_string(), "1.500000000000000000");
    }
}
