//! Property-based tests for pool invariants.
//!
//! 1. **k monotonicity**: `reserve_a × reserve_b` never decreases across swaps.
//! 2. **Share conservation**: positions always sum to total liquidity.
//! 3. **Proportional withdrawal**: a sole provider gets back exactly what
//!    they deposited; a later provider never gains and loses at most one
//!    unit of each asset.
//! 4. **Ratio preservation**: a proportional deposit keeps the price.
//! 5. **Round trip**: A→B→A never returns more than was sold.

#![allow(clippy::panic)]

use proptest::prelude::*;

use super::PoolEngine;
use crate::config::PoolConfig;
use crate::domain::{AccountId, Amount, FeeRatio, Liquidity, Rounding, SwapDirection};
use crate::ledger::{AssetLedger, InMemoryLedger};
use crate::math::{full_mul, mul_div};
use crate::traits::{LiquidityPool, SwapPool};

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

const FUNDING: u128 = 1_000_000_000_000;

fn pool_id() -> AccountId {
    AccountId::from_bytes([9u8; 32])
}

fn account(n: u8) -> AccountId {
    AccountId::from_bytes([n; 32])
}

/// Fresh pool with accounts 1..=4 funded and approved on both sides.
fn make_pool() -> PoolEngine {
    let mut tka = InMemoryLedger::new("TKA");
    let mut tkb = InMemoryLedger::new("TKB");
    for n in 1..=4 {
        let who = account(n);
        let Ok(()) = tka.mint(&who, Amount::new(FUNDING)) else {
            panic!("mint");
        };
        let Ok(()) = tkb.mint(&who, Amount::new(FUNDING)) else {
            panic!("mint");
        };
        tka.approve(&who, &pool_id(), Amount::MAX);
        tkb.approve(&who, &pool_id(), Amount::MAX);
    }
    let Ok(config) = PoolConfig::new(pool_id(), FeeRatio::DEFAULT) else {
        panic!("config");
    };
    let Ok(pool) = PoolEngine::new(config, tka, tkb) else {
        panic!("engine");
    };
    pool
}

fn seeded_pool(ra: u128, rb: u128) -> PoolEngine {
    let mut pool = make_pool();
    let Ok(_) = LiquidityPool::add_liquidity(&mut pool, &account(1), Amount::new(ra), Amount::new(rb))
    else {
        panic!("seed deposit");
    };
    pool
}

/// Generic over the traits so any pool implementation can reuse it.
fn k_of<P: SwapPool>(pool: &P) -> ethnum::U256 {
    let (a, b) = pool.reserves();
    full_mul(a.get(), b.get())
}

fn sum_positions<P: LiquidityPool>(pool: &P, accounts: &[AccountId]) -> u128 {
    accounts.iter().map(|a| pool.liquidity_of(a).get()).sum()
}

// ---------------------------------------------------------------------------
// Custom strategies
// ---------------------------------------------------------------------------

/// Reserve values in range [10_000, 10_000_000] to avoid extremes.
fn reserve_strategy() -> impl Strategy<Value = u128> {
    10_000u128..=10_000_000u128
}

/// Tiny, mid-sized and large values, so pairs can be heavily skewed.
fn skewed_reserve_strategy() -> impl Strategy<Value = u128> {
    prop_oneof![1u128..=100, 100u128..=100_000, 100_000u128..=1_000_000_000]
}

fn direction_strategy() -> impl Strategy<Value = SwapDirection> {
    prop_oneof![Just(SwapDirection::AToB), Just(SwapDirection::BToA)]
}

#[derive(Debug, Clone)]
enum Op {
    Add { who: u8, a: u128, b: u128 },
    Remove { who: u8, permille: u128 },
    Swap { who: u8, direction: SwapDirection, amount: u128 },
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (1u8..=4, 1u128..=1_000_000, 1u128..=1_000_000)
            .prop_map(|(who, a, b)| Op::Add { who, a, b }),
        (1u8..=4, 1u128..=1_000).prop_map(|(who, permille)| Op::Remove { who, permille }),
        (1u8..=4, direction_strategy(), 1u128..=500_000)
            .prop_map(|(who, direction, amount)| Op::Swap { who, direction, amount }),
    ]
}

// ---------------------------------------------------------------------------
// Property 1: k monotonicity
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_k_never_decreases_across_swaps(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        swaps in prop::collection::vec((direction_strategy(), 1u128..=1_000_000), 1..20),
    ) {
        let mut pool = seeded_pool(ra, rb);
        for (direction, amount) in swaps {
            let k_before = k_of(&pool);
            let outcome = SwapPool::swap(&mut pool, &account(2), direction, Amount::new(amount), Amount::ZERO);
            let k_after = k_of(&pool);
            prop_assert!(
                k_after >= k_before,
                "k decreased: before={} after={} outcome={:?}",
                k_before, k_after, outcome
            );
        }
    }
}

// ---------------------------------------------------------------------------
// Property 2: Share conservation
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_positions_sum_to_total(ops in prop::collection::vec(op_strategy(), 1..40)) {
        let mut pool = make_pool();
        let accounts: Vec<AccountId> = (1..=4).map(account).collect();
        for op in ops {
            match op {
                Op::Add { who, a, b } => {
                    let _ = LiquidityPool::add_liquidity(&mut pool, &account(who), Amount::new(a), Amount::new(b));
                }
                Op::Remove { who, permille } => {
                    let held = pool.liquidity_of(&account(who)).get();
                    let Ok(shares) = mul_div(held, permille, 1_000, Rounding::Up) else {
                        continue;
                    };
                    let _ = LiquidityPool::remove_liquidity(&mut pool, &account(who), Liquidity::new(shares));
                }
                Op::Swap { who, direction, amount } => {
                    let _ = SwapPool::swap(&mut pool, &account(who), direction, Amount::new(amount), Amount::ZERO);
                }
            }
            prop_assert_eq!(sum_positions(&pool, &accounts), LiquidityPool::total_liquidity(&pool).get());
            prop_assert!(pool.check_invariants().is_ok());

            // custody matches reserves: nothing leaks in or out
            let (ra, rb) = pool.reserves();
            prop_assert_eq!(pool.ledger_a().balance_of(&pool_id()), ra);
            prop_assert_eq!(pool.ledger_b().balance_of(&pool_id()), rb);
        }
    }
}

// ---------------------------------------------------------------------------
// Property 3: Proportional withdrawal
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_sole_provider_withdraws_exactly(
        a in reserve_strategy(),
        b in reserve_strategy(),
    ) {
        let mut pool = make_pool();
        let Ok(dep) = LiquidityPool::add_liquidity(&mut pool, &account(1), Amount::new(a), Amount::new(b)) else {
            return Ok(());
        };
        let Ok(w) = LiquidityPool::remove_liquidity(&mut pool, &account(1), dep.liquidity_minted) else {
            return Err(TestCaseError::fail("full withdrawal failed"));
        };
        prop_assert_eq!((w.amount_a, w.amount_b), (Amount::new(a), Amount::new(b)));
        prop_assert_eq!(pool.reserves(), (Amount::ZERO, Amount::ZERO));
        prop_assert!(LiquidityPool::total_liquidity(&pool).is_zero());
    }

    #[test]
    fn prop_later_provider_loses_at_most_one_unit(
        ra in skewed_reserve_strategy(),
        rb in skewed_reserve_strategy(),
        offer_a in skewed_reserve_strategy(),
        offer_b in skewed_reserve_strategy(),
    ) {
        let mut pool = seeded_pool(ra, rb);
        let Ok(dep) = LiquidityPool::add_liquidity(&mut pool, &account(2), Amount::new(offer_a), Amount::new(offer_b)) else {
            return Ok(());
        };
        prop_assert!(dep.amount_a.get() <= offer_a && dep.amount_b.get() <= offer_b);

        let Ok(w) = LiquidityPool::remove_liquidity(&mut pool, &account(2), dep.liquidity_minted) else {
            return Err(TestCaseError::fail("withdrawal failed"));
        };
        prop_assert!(w.amount_a <= dep.amount_a && w.amount_b <= dep.amount_b);
        let loss_a = dep.amount_a.get() - w.amount_a.get();
        let loss_b = dep.amount_b.get() - w.amount_b.get();
        prop_assert!(loss_a <= 1, "loss_a={} dep={:?} w={:?}", loss_a, dep, w);
        prop_assert!(loss_b <= 1, "loss_b={} dep={:?} w={:?}", loss_b, dep, w);
    }
}

// ---------------------------------------------------------------------------
// Property 4: Ratio preservation
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_proportional_deposit_keeps_price(
        base_a in 1u128..=10_000,
        ratio in 1u128..=100,
        factor in 1u128..=50,
    ) {
        let mut pool = seeded_pool(base_a, base_a * ratio);
        let price_before = pool.spot_price();
        let Ok(_) = LiquidityPool::add_liquidity(
            &mut pool,
            &account(2),
            Amount::new(base_a * factor),
            Amount::new(base_a * ratio * factor),
        ) else {
            return Err(TestCaseError::fail("proportional deposit failed"));
        };
        prop_assert_eq!(pool.spot_price(), price_before);
        let (ra, rb) = pool.reserves();
        prop_assert_eq!(rb.get(), ra.get() * ratio);
    }
}

// ---------------------------------------------------------------------------
// Property 5: Round trip
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_round_trip_loses_value(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
    ) {
        let swap_in = (ra / 1_000).max(1);
        let mut pool = seeded_pool(ra, rb);

        let Ok(first) = SwapPool::swap(&mut pool, &account(3), SwapDirection::AToB, Amount::new(swap_in), Amount::ZERO) else {
            return Ok(());
        };
        let Ok(second) = SwapPool::swap(&mut pool, &account(3), SwapDirection::BToA, first.amount_out(), Amount::ZERO) else {
            return Ok(());
        };
        prop_assert!(
            second.amount_out().get() <= swap_in,
            "round trip gained value: in={} back={}",
            swap_in, second.amount_out().get()
        );
    }
}
