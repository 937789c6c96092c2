//! Trading fee expressed as a retained-input ratio.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::{Amount, Rounding};
use crate::error::AmmError;

/// Trading fee as the fraction of the input that is priced.
///
/// With `numerator = 997` and `denominator = 1000` the pool prices 99.7% of
/// every input and keeps the remaining 0.3% in reserves.  The ratio is fixed
/// at pool construction.
///
/// # Examples
///
/// ```
/// use hydra_pair::domain::{Amount, FeeRatio};
///
/// let fee = FeeRatio::DEFAULT;
/// assert_eq!(fee.numerator(), 997);
/// assert_eq!(fee.fee_on(Amount::new(1_000)).ok(), Some(Amount::new(3)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FeeRatio {
    numerator: u32,
    denominator: u32,
}

impl FeeRatio {
    /// 0.3% fee: 997 / 1000.
    pub const DEFAULT: Self = Self {
        numerator: 997,
        denominator: 1_000,
    };

    /// No fee at all.
    pub const ZERO_FEE: Self = Self {
        numerator: 1,
        denominator: 1,
    };

    /// Creates a validated fee ratio.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidFee`] if the denominator is zero, the
    /// numerator is zero (a 100% fee), or the numerator exceeds the
    /// denominator (a negative fee).
    pub fn new(numerator: u32, denominator: u32) -> crate::error::Result<Self> {
        let fee = Self {
            numerator,
            denominator,
        };
        fee.validate()?;
        Ok(fee)
    }

    /// Checks the ratio bounds.  Used again after deserialisation.
    ///
    /// # Errors
    ///
    /// See [`FeeRatio::new`].
    pub const fn validate(&self) -> crate::error::Result<()> {
        if self.denominator == 0 {
            return Err(AmmError::InvalidFee("fee denominator must be non-zero"));
        }
        if self.numerator == 0 {
            return Err(AmmError::InvalidFee("100% fee makes swaps impossible"));
        }
        if self.numerator > self.denominator {
            return Err(AmmError::InvalidFee("fee numerator exceeds denominator"));
        }
        Ok(())
    }

    /// Returns the retained-input numerator.
    #[must_use]
    pub const fn numerator(&self) -> u32 {
        self.numerator
    }

    /// Returns the denominator.
    #[must_use]
    pub const fn denominator(&self) -> u32 {
        self.denominator
    }

    /// Portion of `amount_in` kept by the pool as fee, rounded up.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] if the intermediate product does not fit.
    pub fn fee_on(&self, amount_in: Amount) -> crate::error::Result<Amount> {
        let taken = u128::from(self.denominator - self.numerator);
        crate::math::mul_div(
            amount_in.get(),
            taken,
            u128::from(self.denominator),
            Rounding::Up,
        )
        .map(Amount::new)
    }
}

impl Default for FeeRatio {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for FeeRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}
