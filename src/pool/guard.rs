//! Reentrancy flag for the engine's critical section.

use crate::error::AmmError;

/// Set while a state-changing operation is in flight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct ReentrancyGuard {
    entered: bool,
}

impl ReentrancyGuard {
    /// Claims the critical section.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Reentrancy`] if it is already claimed.
    pub(crate) fn enter(&mut self) -> crate::error::Result<()> {
        if self.entered {
            return Err(AmmError::Reentrancy);
        }
        self.entered = true;
        Ok(())
    }

    pub(crate) fn exit(&mut self) {
        self.entered = false;
    }

    pub(crate) const fn is_entered(&self) -> bool {
        self.entered
    }
}
