//! Authoritative reserve and share-supply record.

use ethnum::U256;
use serde::{Deserialize, Serialize};

use crate::domain::{Amount, Asset, Liquidity, SwapDirection};
use crate::error::AmmError;
use crate::math::{CheckedArithmetic, full_mul};

/// Reserves of both assets plus the outstanding share supply.
///
/// # Invariants
///
/// - Both reserves are zero if and only if `total_liquidity` is zero.
/// - `reserve_a * reserve_b` never decreases across a swap.
///
/// Mutated only by the pool engine; [`LiquidityLedger`](super::LiquidityLedger)
/// keeps `total_liquidity` in step with the positions it mints and burns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ReserveState {
    reserve_a: Amount,
    reserve_b: Amount,
    total_liquidity: Liquidity,
}

impl ReserveState {
    /// The empty pool.
    pub const EMPTY: Self = Self {
        reserve_a: Amount::ZERO,
        reserve_b: Amount::ZERO,
        total_liquidity: Liquidity::ZERO,
    };

    /// Reserve of asset A.
    pub const fn reserve_a(&self) -> Amount {
        self.reserve_a
    }

    /// Reserve of asset B.
    pub const fn reserve_b(&self) -> Amount {
        self.reserve_b
    }

    /// Reserve of the given side.
    pub const fn reserve_of(&self, asset: Asset) -> Amount {
        match asset {
            Asset::A => self.reserve_a,
            Asset::B => self.reserve_b,
        }
    }

    /// `(reserve_in, reserve_out)` for a trade in `direction`.
    #[must_use]
    pub const fn oriented(&self, direction: SwapDirection) -> (Amount, Amount) {
        (
            self.reserve_of(direction.asset_in()),
            self.reserve_of(direction.asset_out()),
        )
    }

    /// Outstanding shares.
    #[must_use]
    pub const fn total_liquidity(&self) -> Liquidity {
        self.total_liquidity
    }

    /// `true` before the first deposit and after the last withdrawal.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.total_liquidity.is_zero()
    }

    /// The constant-product `k = reserve_a * reserve_b`, in 256 bits.
    #[must_use]
    pub fn k(&self) -> U256 {
        full_mul(self.reserve_a.get(), self.reserve_b.get())
    }

    /// Adds to both reserves.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] if either reserve overflows; the
    /// state is unchanged on error.
    pub fn deposit(&mut self, amount_a: Amount, amount_b: Amount) -> crate::error::Result<()> {
        let a = self.reserve_a.safe_add(&amount_a)?;
        let b = self.reserve_b.safe_add(&amount_b)?;
        self.reserve_a = a;
        self.reserve_b = b;
        Ok(())
    }

    /// Removes from both reserves.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Underflow`] if either reserve would go negative;
    /// the state is unchanged on error.
    pub fn withdraw(&mut self, amount_a: Amount, amount_b: Amount) -> crate::error::Result<()> {
        let a = self.reserve_a.safe_sub(&amount_a)?;
        let b = self.reserve_b.safe_sub(&amount_b)?;
        self.reserve_a = a;
        self.reserve_b = b;
        Ok(())
    }

    /// Applies a swap: `amount_in` joins the input reserve, `amount_out`
    /// leaves the output reserve.
    ///
    /// # Errors
    ///
    /// - [`AmmError::Overflow`] / [`AmmError::Underflow`] on reserve arithmetic.
    /// - [`AmmError::InvariantViolation`] if `k` would decrease.
    ///
    /// The state is unchanged on error.
    pub fn apply_swap(
        &mut self,
        direction: SwapDirection,
        amount_in: Amount,
        amount_out: Amount,
    ) -> crate::error::Result<()> {
        let k_before = self.k();
        let mut next = *self;
        let (reserve_in, reserve_out) = self.oriented(direction);
        let new_in = reserve_in.safe_add(&amount_in)?;
        let new_out = reserve_out.safe_sub(&amount_out)?;
        match direction {
            SwapDirection::AToB => {
                next.reserve_a = new_in;
                next.reserve_b = new_out;
            }
            SwapDirection::BToA => {
                next.reserve_b = new_in;
                next.reserve_a = new_out;
            }
        }
        if next.k() < k_before {
            return Err(AmmError::InvariantViolation("k decreased across swap"));
        }
        next.check_invariants()?;
        *self = next;
        Ok(())
    }

    pub(crate) fn set_total_liquidity(&mut self, total: Liquidity) {
        self.total_liquidity = total;
    }

    /// Validates the emptiness invariant.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvariantViolation`] if shares exist without
    /// both reserves, or reserves exist without shares.
    pub fn check_invariants(&self) -> crate::error::Result<()> {
        let reserves_empty = self.reserve_a.is_zero() && self.reserve_b.is_zero();
        let reserves_full = !self.reserve_a.is_zero() && !self.reserve_b.is_zero();
        if self.total_liquidity.is_zero() {
            if !reserves_empty {
                return Err(AmmError::InvariantViolation(
                    "reserves present without outstanding shares",
                ));
            }
        } else if !reserves_full {
            return Err(AmmError::InvariantViolation(
                "outstanding shares without both reserves",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn seeded(a: u128, b: u128, shares: u128) -> ReserveState {
        let mut s = ReserveState::EMPTY;
        let Ok(()) = s.deposit(Amount::new(a), Amount::new(b)) else {
            panic!("deposit");
        };
        s.set_total_liquidity(Liquidity::new(shares));
        s
    }

    #[test]
    fn empty_is_consistent() {
        assert!(ReserveState::EMPTY.is_empty());
        assert!(ReserveState::EMPTY.check_invariants().is_ok());
        assert_eq!(ReserveState::default(), ReserveState::EMPTY);
    }

    #[test]
    fn reserves_without_shares_is_violation() {
        let s = seeded(10, 10, 0);
        assert!(matches!(
            s.check_invariants(),
            Err(AmmError::InvariantViolation(_))
        ));
    }

    #[test]
    fn shares_with_one_empty_side_is_violation() {
        let s = seeded(10, 0, 5);
        assert!(s.check_invariants().is_err());
    }

    #[test]
    fn oriented_follows_direction() {
        let s = seeded(100, 200, 141);
        assert_eq!(s.oriented(SwapDirection::AToB), (Amount::new(100), Amount::new(200)));
        assert_eq!(s.oriented(SwapDirection::BToA), (Amount::new(200), Amount::new(100)));
    }

    #[test]
    fn apply_swap_updates_both_sides() {
        let mut s = seeded(100, 200, 141);
        let Ok(()) = s.apply_swap(SwapDirection::AToB, Amount::new(10), Amount::new(18)) else {
            panic!("swap");
        };
        assert_eq!(s.reserve_a(), Amount::new(110));
        assert_eq!(s.reserve_b(), Amount::new(182));
    }

    #[test]
    fn apply_swap_rejects_k_decrease() {
        let mut s = seeded(100, 200, 141);
        let before = s;
        // 110 * 100 = 11_000 < 20_000
        let r = s.apply_swap(SwapDirection::AToB, Amount::new(10), Amount::new(100));
        assert!(matches!(r, Err(AmmError::InvariantViolation(_))));
        assert_eq!(s, before);
    }

    #[test]
    fn apply_swap_rejects_draining_output() {
        let mut s = seeded(100, 200, 141);
        let before = s;
        let r = s.apply_swap(SwapDirection::BToA, Amount::new(1_000_000), Amount::new(100));
        assert!(r.is_err());
        assert_eq!(s, before);
    }

    #[test]
    fn withdraw_underflow_leaves_state() {
        let mut s = seeded(100, 200, 141);
        let before = s;
        assert!(s.withdraw(Amount::new(50), Amount::new(201)).is_err());
        assert_eq!(s, before);
    }

    #[test]
    fn k_is_wide() {
        let s = seeded(u128::MAX, u128::MAX, 1);
        assert_eq!(s.k(), full_mul(u128::MAX, u128::MAX));
    }
}
