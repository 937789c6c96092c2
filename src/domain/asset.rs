//! Asset sides of the pair and swap direction.

use core::fmt;

use serde::{Deserialize, Serialize};

/// One of the two assets held by the pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Asset {
    /// The first asset of the pair.
    A,
    /// The second asset of the pair.
    B,
}

impl Asset {
    /// Returns the opposite side of the pair.
    #[must_use]
    pub const fn other(&self) -> Self {
        match self {
            Self::A => Self::B,
            Self::B => Self::A,
        }
    }
}

impl fmt::Display for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::A => write!(f, "A"),
            Self::B => write!(f, "B"),
        }
    }
}

/// Direction of a swap through the pool.
///
/// # Examples
///
/// ```
/// use hydra_pair::domain::{Asset, SwapDirection};
///
/// let dir = SwapDirection::AToB;
/// assert_eq!(dir.asset_in(), Asset::A);
/// assert_eq!(dir.asset_out(), Asset::B);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SwapDirection {
    /// Sell asset A, receive asset B.
    AToB,
    /// Sell asset B, receive asset A.
    BToA,
}

impl SwapDirection {
    /// The asset the trader pays in.
    #[must_use]
    pub const fn asset_in(&self) -> Asset {
        match self {
            Self::AToB => Asset::A,
            Self::BToA => Asset::B,
        }
    }

    /// The asset the trader receives.
    #[must_use]
    pub const fn asset_out(&self) -> Asset {
        self.asset_in().other()
    }
}

impl fmt::Display for SwapDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}", self.asset_in(), self.asset_out())
    }
}
