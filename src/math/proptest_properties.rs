//! Property-based tests for the conversion, sizing and swap formulas.
//!
//! 1. **Monotonicity**: `price_to_sqrtp` strictly, `price_to_tick` weakly.
//! 2. **Tick consistency**: `sqrtp_to_tick(tick_to_sqrtp(t)) == t`, and
//!    `price_to_tick` floors onto the table.
//! 3. **Range-order symmetry** of every range-consuming function.
//! 4. **Degenerate ranges** fail with `InvalidPriceRange`.
//! 5. **Floor consistency**: no result exceeds the exact rational value.
//! 6. **Swap direction**: prices move the right way, zero input moves nothing.

use primitive_types::U512;
use proptest::prelude::*;

use super::constants::Q96;
use super::full_math::widen;
use super::*;
use crate::domain::{Amount, Liquidity, Price, SqrtPriceQ96, SwapDirection, Tick};
use crate::error::DomainError;

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

fn sqrtp_at(tick: i32) -> SqrtPriceQ96 {
    let Ok(s) = tick_to_sqrtp(Tick::from_raw(tick)) else {
        panic!("in-bound tick");
    };
    s
}

fn wide(v: u128) -> U512 {
    U512::from(v)
}

// ---------------------------------------------------------------------------
// Custom strategies
// ---------------------------------------------------------------------------

/// Prices in `[1e-6, 1e6]` on a micro-unit grid.
fn price_micros_strategy() -> impl Strategy<Value = u64> {
    1u64..=1_000_000_000_000u64
}

/// Ticks well inside the global bound.
fn tick_strategy() -> impl Strategy<Value = i32> {
    -200_000i32..=200_000i32
}

/// Every in-bound tick.
fn full_tick_strategy() -> impl Strategy<Value = i32> {
    crate::math::constants::MIN_TICK..=crate::math::constants::MAX_TICK
}

/// Two distinct ticks, in random order.
fn tick_pair_strategy() -> impl Strategy<Value = (i32, i32)> {
    (tick_strategy(), tick_strategy()).prop_filter("distinct ticks", |(a, b)| a != b)
}

fn amount_strategy() -> impl Strategy<Value = u128> {
    0u128..=1_000_000_000_000_000_000_000_000u128
}

fn liquidity_strategy() -> impl Strategy<Value = u128> {
    1u128..=(1u128 << 100)
}

fn price_of(micros: u64) -> Price {
    #[allow(clippy::cast_precision_loss)]
    let value = micros as f64 / 1_000_000.0;
    let Ok(p) = Price::new(value) else {
        panic!("valid price");
    };
    p
}

// ---------------------------------------------------------------------------
// Property 1: Monotonicity
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_price_to_sqrtp_strictly_increasing(
        a in price_micros_strategy(),
        b in price_micros_strategy(),
    ) {
        prop_assume!(a != b);
        let (lo, hi) = (a.min(b), a.max(b));
        let (Ok(s_lo), Ok(s_hi)) = (price_to_sqrtp(price_of(lo)), price_to_sqrtp(price_of(hi)))
        else {
            return Err(TestCaseError::fail("conversion failed"));
        };
        prop_assert!(s_lo < s_hi, "sqrtp({}) = {} !< sqrtp({}) = {}", lo, s_lo, hi, s_hi);
    }

    #[test]
    fn prop_price_to_tick_non_decreasing(
        a in price_micros_strategy(),
        b in price_micros_strategy(),
    ) {
        let (lo, hi) = (a.min(b), a.max(b));
        let (Ok(t_lo), Ok(t_hi)) = (price_to_tick(price_of(lo)), price_to_tick(price_of(hi)))
        else {
            return Err(TestCaseError::fail("conversion failed"));
        };
        prop_assert!(t_lo <= t_hi);
    }
}

// ---------------------------------------------------------------------------
// Property 2: Tick consistency
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_sqrtp_to_tick_inverts_table(tick in full_tick_strategy()) {
        let s = sqrtp_at(tick);
        prop_assert_eq!(sqrtp_to_tick(s), Ok(Tick::from_raw(tick)));
    }

    #[test]
    fn prop_tick_to_sqrtp_strictly_increasing(tick in full_tick_strategy()) {
        prop_assume!(tick < crate::math::constants::MAX_TICK);
        prop_assert!(sqrtp_at(tick) < sqrtp_at(tick + 1));
    }

    #[test]
    fn prop_price_to_tick_brackets_sqrtp(micros in price_micros_strategy()) {
        let p = price_of(micros);
        let (Ok(tick), Ok(s)) = (price_to_tick(p), price_to_sqrtp(p)) else {
            return Err(TestCaseError::fail("conversion failed"));
        };
        prop_assert_eq!(sqrtp_to_tick(s), Ok(tick));
        prop_assert!(sqrtp_at(tick.get()) <= s);
        prop_assert!(s < sqrtp_at(tick.get() + 1));
    }
}

// ---------------------------------------------------------------------------
// Property 3 & 4: Range-order symmetry, degenerate ranges
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_range_order_symmetry(
        (ta, tb) in tick_pair_strategy(),
        amount in amount_strategy(),
        liquidity in liquidity_strategy(),
    ) {
        let (a, b) = (sqrtp_at(ta), sqrtp_at(tb));
        let amount = Amount::new(amount);
        let liquidity = Liquidity::new(liquidity);

        prop_assert_eq!(liquidity_from_amount0(amount, a, b), liquidity_from_amount0(amount, b, a));
        prop_assert_eq!(liquidity_from_amount1(amount, a, b), liquidity_from_amount1(amount, b, a));
        prop_assert_eq!(amount0_for_liquidity(liquidity, a, b), amount0_for_liquidity(liquidity, b, a));
        prop_assert_eq!(amount1_for_liquidity(liquidity, a, b), amount1_for_liquidity(liquidity, b, a));
    }

    #[test]
    fn prop_degenerate_range_rejected(
        tick in tick_strategy(),
        amount in amount_strategy(),
        liquidity in liquidity_strategy(),
    ) {
        let p = sqrtp_at(tick);
        let amount = Amount::new(amount);
        let liquidity = Liquidity::new(liquidity);

        prop_assert!(matches!(liquidity_from_amount0(amount, p, p), Err(DomainError::InvalidPriceRange(_))));
        prop_assert!(matches!(liquidity_from_amount1(amount, p, p), Err(DomainError::InvalidPriceRange(_))));
        prop_assert!(matches!(amount0_for_liquidity(liquidity, p, p), Err(DomainError::InvalidPriceRange(_))));
        prop_assert!(matches!(amount1_for_liquidity(liquidity, p, p), Err(DomainError::InvalidPriceRange(_))));
    }
}

// ---------------------------------------------------------------------------
// Property 5: Floor consistency
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_amounts_never_exceed_exact(
        (ta, tb) in tick_pair_strategy(),
        liquidity in liquidity_strategy(),
    ) {
        let (a, b) = (sqrtp_at(ta.min(tb)), sqrtp_at(ta.max(tb)));
        let (lo, hi) = (widen(a.get()), widen(b.get()));
        let l = wide(liquidity);
        let liquidity = Liquidity::new(liquidity);

        let (Ok(amount0), Ok(amount1)) = (
            amount0_for_liquidity(liquidity, a, b),
            amount1_for_liquidity(liquidity, a, b),
        ) else {
            return Ok(());
        };
        // amount0 <= L * 2^96 * (b - a) / (a * b)
        prop_assert!(wide(amount0.get()) * lo * hi <= l * widen(Q96) * (hi - lo));
        // amount1 <= L * (b - a) / 2^96
        prop_assert!(wide(amount1.get()) * widen(Q96) <= l * (hi - lo));
    }

    #[test]
    fn prop_liquidity_never_exceeds_exact(
        (ta, tb) in tick_pair_strategy(),
        amount in amount_strategy(),
    ) {
        let (a, b) = (sqrtp_at(ta.min(tb)), sqrtp_at(ta.max(tb)));
        let (lo, hi) = (widen(a.get()), widen(b.get()));
        let x = wide(amount);
        let amount = Amount::new(amount);

        if let Ok(l0) = liquidity_from_amount0(amount, a, b) {
            // L0 <= amount0 * a * b / (2^96 * (b - a))
            prop_assert!(wide(l0.get()) * widen(Q96) * (hi - lo) <= x * lo * hi);
        }
        if let Ok(l1) = liquidity_from_amount1(amount, a, b) {
            // L1 <= amount1 * 2^96 / (b - a)
            prop_assert!(wide(l1.get()) * (hi - lo) <= x * widen(Q96));
        }
    }
}

// ---------------------------------------------------------------------------
// Property 6: Swap direction
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_swap_moves_price_correctly(
        tick in tick_strategy(),
        liquidity in liquidity_strategy(),
        amount in amount_strategy(),
    ) {
        let current = sqrtp_at(tick);
        let liquidity = Liquidity::new(liquidity);
        let amount = Amount::new(amount);

        if let Ok(up) = simulate_swap_step(liquidity, current, SwapDirection::OneForZero, amount) {
            prop_assert!(up.sqrt_price_end() >= current);
            prop_assert!(up.amount_in() <= amount);
        }
        if let Ok(down) = simulate_swap_step(liquidity, current, SwapDirection::ZeroForOne, amount) {
            prop_assert!(down.sqrt_price_end() <= current);
        }
    }

    #[test]
    fn prop_zero_input_moves_nothing(
        tick in tick_strategy(),
        liquidity in liquidity_strategy(),
    ) {
        let current = sqrtp_at(tick);
        let liquidity = Liquidity::new(liquidity);
        for direction in [SwapDirection::ZeroForOne, SwapDirection::OneForZero] {
            let Ok(step) = simulate_swap_step(liquidity, current, direction, Amount::ZERO) else {
                return Err(TestCaseError::fail("zero-input swap failed"));
            };
            prop_assert!(step.is_noop());
            prop_assert_eq!(step.amount_in(), Amount::ZERO);
            prop_assert_eq!(step.amount_out(), Amount::ZERO);
        }
    }
}
