//! Explicit rounding direction for integer division.

/// Rounding direction for every division in the crate.
///
/// Pool accounting always rounds in the pool's favour: outputs and
/// withdrawals round [`Down`](Rounding::Down), required inputs and fees
/// round [`Up`](Rounding::Up).
///
/// # Examples
///
/// ```
/// use hydra_pair::domain::Rounding;
///
/// assert!(Rounding::Down.is_down());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rounding {
    /// Round towards positive infinity (ceiling).
    Up,
    /// Round towards zero (floor).
    Down,
}

impl Rounding {
    /// Returns `true` if this is [`Rounding::Up`].
    #[must_use]
    pub const fn is_up(&self) -> bool {
        matches!(self, Self::Up)
    }

    /// Returns `true` if this is [`Rounding::Down`].
    #[must_use]
    pub const fn is_down(&self) -> bool {
        matches!(self, Self::Down)
    }
}
