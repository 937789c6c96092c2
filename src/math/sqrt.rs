//! Integer square root over 256-bit inputs.

use ethnum::U256;

/// Floor of `√n` via Newton's method.
///
/// The root of any 256-bit value fits in 128 bits, so the result is
/// returned as `u128`.
///
/// # Examples
///
/// ```
/// use hydra_pair::math::{full_mul, isqrt};
///
/// assert_eq!(isqrt(full_mul(100, 200)), 141);
/// assert_eq!(isqrt(full_mul(u128::MAX, u128::MAX)), u128::MAX);
/// ```
#[must_use]
pub fn isqrt(n: U256) -> u128 {
    if n == U256::ZERO {
        return 0;
    }
    // Start from a power of two that is >= √n so the iteration decreases monotonically.
    let bits = 256 - n.leading_zeros();
    let mut x = U256::ONE << bits.div_ceil(2);
    loop {
        let y = (x + n / x) >> 1u32;
        if y >= x {
            break;
        }
        x = y;
    }
    let (_, lo) = x.into_words();
    lo
}
