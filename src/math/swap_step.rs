//! Single-range swap simulation.
//!
//! A step moves the sqrt-price by the amount sold, assuming the step
//! never leaves the liquidity range it starts in. Crossing into a
//! neighbouring range is the caller's job: split the trade and call
//! again with that range's liquidity.
//!
//! The new sqrt-price is truncated first and both settlement amounts are
//! then recomputed from the actual movement with the flooring formulas in
//! [`amounts`](super::amounts). The settled input of a token1 sale never
//! exceeds the request. A token0 sale into very deep liquidity can
//! settle slightly more, since the truncated price overshoots downwards.

use primitive_types::U512;

use crate::domain::{Amount, Liquidity, SqrtPriceQ96, SwapDirection, SwapStep};
use crate::error::DomainError;

use super::amounts::{amount0_for_liquidity, amount1_for_liquidity};
use super::constants::{Q96, Q96_RESOLUTION};
use super::full_math::{mul_div, narrow_u256, widen};

/// Sells `amount_in` of token1, raising the sqrt-price.
///
/// `new = current + floor(amount_in * 2^96 / L)`.
///
/// # Errors
///
/// - [`DomainError::InsufficientLiquidity`] if `liquidity` is zero.
/// - [`DomainError::Overflow`] if the new sqrt-price exceeds 256 bits.
///
/// # Examples
///
/// ```
/// use clmm_math::domain::{Amount, Liquidity, SqrtPriceQ96};
/// use clmm_math::math::swap_token1_for_token0;
///
/// let step = swap_token1_for_token0(Liquidity::new(1_000_000), SqrtPriceQ96::ONE, Amount::new(500))
///     .expect("liquidity is non-zero");
/// assert!(step.sqrt_price_end() > step.sqrt_price_start());
/// assert!(step.amount_in() <= step.nominal_amount_in());
/// ```
pub fn swap_token1_for_token0(
    liquidity: Liquidity,
    current: SqrtPriceQ96,
    amount_in: Amount,
) -> crate::error::Result<SwapStep> {
    ensure_liquidity(liquidity)?;
    let delta = mul_div(
        U512::from(amount_in.get()),
        widen(Q96),
        U512::from(liquidity.get()),
    )
    .ok_or(DomainError::Overflow("sqrt price delta overflow"))?;
    let next = narrow_u256(widen(current.get()) + delta)
        .ok_or(DomainError::Overflow("sqrt price does not fit 256 bits"))?;
    settle(
        SwapDirection::OneForZero,
        liquidity,
        current,
        SqrtPriceQ96::new(next)?,
        amount_in,
    )
}

/// Sells `amount_in` of token0, lowering the sqrt-price.
///
/// `new = floor(L * 2^96 * current / (L * 2^96 + amount_in * current))`.
///
/// # Errors
///
/// - [`DomainError::InsufficientLiquidity`] if `liquidity` is zero.
/// - [`DomainError::InvalidSqrtPrice`] if the new sqrt-price floors to
///   zero.
pub fn swap_token0_for_token1(
    liquidity: Liquidity,
    current: SqrtPriceQ96,
    amount_in: Amount,
) -> crate::error::Result<SwapStep> {
    ensure_liquidity(liquidity)?;
    let scaled_liquidity = U512::from(liquidity.get()) << Q96_RESOLUTION;
    let current_wide = widen(current.get());
    let denominator = U512::from(amount_in.get())
        .checked_mul(current_wide)
        .and_then(|product| product.checked_add(scaled_liquidity))
        .ok_or(DomainError::Overflow("sqrt price denominator overflow"))?;
    let next = mul_div(scaled_liquidity, current_wide, denominator)
        .and_then(narrow_u256)
        .ok_or(DomainError::Overflow("sqrt price does not fit 256 bits"))?;
    if next.is_zero() {
        return Err(DomainError::InvalidSqrtPrice(
            "swap drives the sqrt price to zero",
        ));
    }
    settle(
        SwapDirection::ZeroForOne,
        liquidity,
        current,
        SqrtPriceQ96::new(next)?,
        amount_in,
    )
}

/// Runs one swap step in `direction`.
///
/// # Errors
///
/// As [`swap_token0_for_token1`] or [`swap_token1_for_token0`].
pub fn simulate_swap_step(
    liquidity: Liquidity,
    current: SqrtPriceQ96,
    direction: SwapDirection,
    amount_in: Amount,
) -> crate::error::Result<SwapStep> {
    match direction {
        SwapDirection::ZeroForOne => swap_token0_for_token1(liquidity, current, amount_in),
        SwapDirection::OneForZero => swap_token1_for_token0(liquidity, current, amount_in),
    }
}

fn ensure_liquidity(liquidity: Liquidity) -> crate::error::Result<()> {
    if liquidity.is_zero() {
        return Err(DomainError::InsufficientLiquidity(
            "swap requires non-zero liquidity",
        ));
    }
    Ok(())
}

/// Recomputes both sides of the trade from the actual price movement.
fn settle(
    direction: SwapDirection,
    liquidity: Liquidity,
    start: SqrtPriceQ96,
    end: SqrtPriceQ96,
    nominal: Amount,
) -> crate::error::Result<SwapStep> {
    let (amount_in, amount_out) = if start == end {
        (Amount::ZERO, Amount::ZERO)
    } else {
        let amount0 = amount0_for_liquidity(liquidity, start, end)?;
        let amount1 = amount1_for_liquidity(liquidity, start, end)?;
        match direction {
            SwapDirection::ZeroForOne => (amount0, amount1),
            SwapDirection::OneForZero => (amount1, amount0),
        }
    };

    let step = SwapStep::new(direction, start, end, nominal, amount_in, amount_out);
    tracing::debug!(
        %direction,
        %liquidity,
        sqrt_price_start = %start,
        sqrt_price_end = %end,
        nominal_in = %nominal,
        amount_in = %amount_in,
        amount_out = %amount_out,
        "swap step settled"
    );
    Ok(step)
}
