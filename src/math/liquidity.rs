//! Liquidity sizing: how much liquidity a token deposit buys over a range.

use primitive_types::U512;

use crate::domain::{Amount, Liquidity, PriceRange, SqrtPriceQ96};
use crate::error::DomainError;

use super::constants::Q96;
use super::full_math::{mul_div, narrow_u128, widen};

const LIQUIDITY_OVERFLOW: DomainError = DomainError::Overflow("liquidity does not fit u128");

/// Liquidity provided by `amount0` of token0 over `[a, b]`.
///
/// Computes `floor(floor(amount0 * a * b / 2^96) / (b - a))` with the
/// bounds in either order.
///
/// # Errors
///
/// - [`DomainError::InvalidPriceRange`] if `sqrtp_a == sqrtp_b`.
/// - [`DomainError::Overflow`] if the result does not fit `u128`.
pub fn liquidity_from_amount0(
    amount0: Amount,
    sqrtp_a: SqrtPriceQ96,
    sqrtp_b: SqrtPriceQ96,
) -> crate::error::Result<Liquidity> {
    let range = PriceRange::new(sqrtp_a, sqrtp_b)?;
    let bounds_product = widen(range.lower().get()) * widen(range.upper().get());
    let scaled = mul_div(
        U512::from(amount0.get()),
        bounds_product,
        widen(Q96),
    )
    .ok_or(LIQUIDITY_OVERFLOW)?;
    let liquidity = scaled / widen(range.width());
    narrow_u128(liquidity)
        .map(Liquidity::new)
        .ok_or(LIQUIDITY_OVERFLOW)
}

/// Liquidity provided by `amount1` of token1 over `[a, b]`.
///
/// Computes `floor(amount1 * 2^96 / (b - a))` with the bounds in either
/// order.
///
/// # Errors
///
/// - [`DomainError::InvalidPriceRange`] if `sqrtp_a == sqrtp_b`.
/// - [`DomainError::Overflow`] if the result does not fit `u128`.
pub fn liquidity_from_amount1(
    amount1: Amount,
    sqrtp_a: SqrtPriceQ96,
    sqrtp_b: SqrtPriceQ96,
) -> crate::error::Result<Liquidity> {
    let range = PriceRange::new(sqrtp_a, sqrtp_b)?;
    mul_div(
        U512::from(amount1.get()),
        widen(Q96),
        widen(range.width()),
    )
    .and_then(narrow_u128)
    .map(Liquidity::new)
    .ok_or(LIQUIDITY_OVERFLOW)
}

/// Largest liquidity that both deposits can back at the current price.
///
/// Below the range only token0 is needed, above it only token1. Inside
/// it, each token sizes the part of the range on its side of `current`
/// and the smaller liquidity wins, so the other token is partly left
/// over.
///
/// # Errors
///
/// - [`DomainError::InvalidPriceRange`] if `sqrtp_a == sqrtp_b`.
/// - [`DomainError::Overflow`] if a result does not fit `u128`.
///
/// # Examples
///
/// ```
/// use clmm_math::domain::{Amount, Price};
/// use clmm_math::math::{liquidity_for_amounts, price_to_sqrtp};
///
/// let sqrtp = |p: f64| price_to_sqrtp(Price::new(p).expect("valid")).expect("representable");
/// let liquidity = liquidity_for_amounts(
///     sqrtp(5_000.0),
///     sqrtp(4_545.0),
///     sqrtp(5_500.0),
///     Amount::new(1_000_000_000_000_000_000),
///     Amount::new(5_000_000_000_000_000_000_000),
/// )
/// .expect("valid range");
/// assert_eq!(liquidity.get(), 1_517_882_343_751_510_417_954);
/// ```
pub fn liquidity_for_amounts(
    current: SqrtPriceQ96,
    sqrtp_a: SqrtPriceQ96,
    sqrtp_b: SqrtPriceQ96,
    amount0: Amount,
    amount1: Amount,
) -> crate::error::Result<Liquidity> {
    let range = PriceRange::new(sqrtp_a, sqrtp_b)?;

    if current <= range.lower() {
        tracing::debug!(%current, %range, "price below range, token0 binds");
        return liquidity_from_amount0(amount0, range.lower(), range.upper());
    }
    if current >= range.upper() {
        tracing::debug!(%current, %range, "price above range, token1 binds");
        return liquidity_from_amount1(amount1, range.lower(), range.upper());
    }

    let from0 = liquidity_from_amount0(amount0, current, range.upper())?;
    let from1 = liquidity_from_amount1(amount1, range.lower(), current)?;
    let binding = if from0 <= from1 { "token0" } else { "token1" };
    tracing::debug!(
        %current,
        %range,
        liquidity0 = %from0,
        liquidity1 = %from1,
        binding,
        "price inside range"
    );
    Ok(from0.min(from1))
}
