//! Conversions between human prices, ticks, and Q64.96 sqrt-prices.
//!
//! # Entry points
//!
//! | Function | From | To | Bound handling |
//! |----------|------|----|----------------|
//! | [`price_to_tick`] | [`Price`] | [`Tick`] | unchecked |
//! | [`price_to_tick_with`] | [`Price`] | [`Tick`] | [`MathConfig`] policy |
//! | [`price_to_sqrtp`] | [`Price`] | [`SqrtPriceQ96`] | none needed |
//! | [`sqrtp_to_price`] | [`SqrtPriceQ96`] | [`Price`] | none needed |
//! | [`tick_to_sqrtp`] | [`Tick`] | [`SqrtPriceQ96`] | unchecked |
//! | [`tick_to_sqrtp_with`] | [`Tick`] | [`SqrtPriceQ96`] | [`MathConfig`] policy |
//! | [`sqrtp_to_tick`] | [`SqrtPriceQ96`] | [`Tick`] | always checked |
//!
//! `price_to_sqrtp` and `sqrtp_to_price` are not exact inverses: the
//! forward direction floors to an integer, the reverse squares in `f64`.
//!
//! # Examples
//!
//! ```
//! use clmm_math::domain::{Price, Tick};
//! use clmm_math::math::{price_to_sqrtp, price_to_tick, sqrtp_to_tick};
//!
//! let price = Price::new(5_000.0).expect("valid price");
//! assert_eq!(price_to_tick(price), Ok(Tick::from_raw(85_176)));
//!
//! let sqrtp = price_to_sqrtp(price).expect("representable");
//! assert_eq!(sqrtp_to_tick(sqrtp), Ok(Tick::from_raw(85_176)));
//! ```

use crate::config::MathConfig;
use crate::domain::{Price, SqrtPriceQ96, Tick};
use crate::error::DomainError;

use super::constants::{MAX_TICK, MIN_TICK, Q96_RESOLUTION, TICK_BASE};
use super::full_math::{narrow_u256, scaled_floor, u256_to_f64};
use super::tick_math::{sqrt_price_at_tick, tick_at_sqrt_price};

/// Computes `floor(log_1.0001(price))`.
///
/// Prices whose sqrt-price lies inside the tick table are resolved
/// against the table, so the result always agrees with
/// `sqrtp_to_tick(price_to_sqrtp(price))`. Prices outside it fall back to
/// `f64` logarithms, held on their side of the bound.
///
/// The result is not checked against the global tick bound; use
/// [`price_to_tick_with`] to apply a [`TickBoundPolicy`](crate::config::TickBoundPolicy).
///
/// # Errors
///
/// Returns [`DomainError::InvalidPrice`] if `price` is zero.
pub fn price_to_tick(price: Price) -> crate::error::Result<Tick> {
    if !price.is_positive() {
        return Err(DomainError::InvalidPrice(
            "cannot take the logarithm of a zero price",
        ));
    }
    if let Ok(sqrtp) = price_to_sqrtp(price) {
        if sqrtp.is_within_tick_bounds() {
            return Ok(Tick::from_raw(tick_at_sqrt_price(sqrtp.get())));
        }
    }

    tracing::trace!(price = price.get(), "price outside the tick table, using f64 logarithm");
    // |ln(f64)| < 745, so |raw| < 7.5e6
    #[allow(clippy::cast_possible_truncation)]
    let raw = (price.get().ln() / TICK_BASE.ln()).floor() as i32;
    let tick = if price.get() < 1.0 {
        raw.min(MIN_TICK - 1)
    } else {
        raw.max(MAX_TICK)
    };
    Ok(Tick::from_raw(tick))
}

/// [`price_to_tick`] followed by the configured tick bound policy.
///
/// # Errors
///
/// Returns [`DomainError::InvalidPrice`] if `price` is zero, and
/// [`DomainError::InvalidTick`] if the policy rejects the tick.
pub fn price_to_tick_with(price: Price, config: &MathConfig) -> crate::error::Result<Tick> {
    config.tick_bounds().apply(price_to_tick(price)?)
}

/// Computes `floor(sqrt(price) * 2^96)`.
///
/// The integer square root is taken of `floor(price * 2^192)`, built from
/// the exact binary value of the `f64`, so the result is the true floor
/// for the given float.
///
/// # Errors
///
/// - [`DomainError::InvalidPrice`] if `price` is zero.
/// - [`DomainError::InvalidSqrtPrice`] if the result floors to zero.
/// - [`DomainError::Overflow`] if the result does not fit 256 bits.
///
/// # Examples
///
/// ```
/// use clmm_math::domain::{Price, SqrtPriceQ96};
/// use clmm_math::math::price_to_sqrtp;
///
/// assert_eq!(price_to_sqrtp(Price::ONE), Ok(SqrtPriceQ96::ONE));
/// ```
pub fn price_to_sqrtp(price: Price) -> crate::error::Result<SqrtPriceQ96> {
    if !price.is_positive() {
        return Err(DomainError::InvalidPrice(
            "cannot take the square root of a zero price",
        ));
    }
    let scaled = scaled_floor(price.get(), 2 * Q96_RESOLUTION)
        .ok_or(DomainError::Overflow("price too large for Q64.96"))?;
    let root = narrow_u256(scaled.integer_sqrt())
        .ok_or(DomainError::Overflow("sqrt price does not fit 256 bits"))?;
    if root.is_zero() {
        return Err(DomainError::InvalidSqrtPrice(
            "price too small for Q64.96",
        ));
    }
    SqrtPriceQ96::new(root)
}

/// Computes `(sqrtp / 2^96)^2` in floating point.
#[must_use]
pub fn sqrtp_to_price(sqrtp: SqrtPriceQ96) -> Price {
    let root = u256_to_f64(sqrtp.get()) / 2f64.powi(96);
    // root < 2^160, so the square stays finite
    Price::new_unchecked(root * root)
}

/// Computes `1.0001^(tick / 2) * 2^96` as an integer.
///
/// In-bound ticks return the fixed-point table value. It equals the exact
/// floor for most ticks and is never more than about 5e-20 relative above
/// it, far tighter than an `f64` evaluation. Out-of-bound ticks are
/// accepted and evaluated with `f64` exponentiation, then floored
/// exactly; use [`tick_to_sqrtp_with`] to enforce the bound instead.
///
/// # Errors
///
/// For out-of-bound ticks only:
///
/// - [`DomainError::Overflow`] if the result does not fit 256 bits.
/// - [`DomainError::InvalidSqrtPrice`] if the result floors to zero.
///
/// # Examples
///
/// ```
/// use clmm_math::domain::{SqrtPriceQ96, Tick};
/// use clmm_math::math::tick_to_sqrtp;
///
/// assert_eq!(tick_to_sqrtp(Tick::ZERO), Ok(SqrtPriceQ96::ONE));
/// ```
pub fn tick_to_sqrtp(tick: Tick) -> crate::error::Result<SqrtPriceQ96> {
    if tick.is_within_bounds() {
        return SqrtPriceQ96::new(sqrt_price_at_tick(tick.get()));
    }

    tracing::trace!(tick = tick.get(), "tick outside fixed-point table, evaluating in f64");
    let value = TICK_BASE.powf(f64::from(tick.get()) / 2.0);
    let scaled = scaled_floor(value, Q96_RESOLUTION)
        .ok_or(DomainError::Overflow("sqrt price does not fit 256 bits"))?;
    let sqrtp = narrow_u256(scaled)
        .ok_or(DomainError::Overflow("sqrt price does not fit 256 bits"))?;
    if sqrtp.is_zero() {
        return Err(DomainError::InvalidSqrtPrice("tick too small for Q64.96"));
    }
    SqrtPriceQ96::new(sqrtp)
}

/// [`tick_to_sqrtp`] with the configured tick bound policy applied to the
/// input first.
///
/// # Errors
///
/// Returns [`DomainError::InvalidTick`] if the policy rejects the tick,
/// otherwise as [`tick_to_sqrtp`].
pub fn tick_to_sqrtp_with(tick: Tick, config: &MathConfig) -> crate::error::Result<SqrtPriceQ96> {
    tick_to_sqrtp(config.tick_bounds().apply(tick)?)
}

/// Returns the greatest tick whose [`tick_to_sqrtp`] is `<= sqrtp`.
///
/// # Errors
///
/// Returns [`DomainError::InvalidSqrtPrice`] if `sqrtp` lies outside
/// `[MIN_SQRT_PRICE, MAX_SQRT_PRICE]`.
pub fn sqrtp_to_tick(sqrtp: SqrtPriceQ96) -> crate::error::Result<Tick> {
    if !sqrtp.is_within_tick_bounds() {
        return Err(DomainError::InvalidSqrtPrice(
            "sqrt price outside the tick bound",
        ));
    }
    Ok(Tick::from_raw(tick_at_sqrt_price(sqrtp.get())))
}
