//! Unified error type for the concentrated-liquidity math layer.
//!
//! Every fallible operation in the crate returns [`DomainError`]. All
//! variants describe invalid input for the math being asked for; none of
//! them is transient, so callers should never retry on error.

use thiserror::Error;

/// Errors raised by price, tick, liquidity and swap computations.
///
/// Each variant carries a static description of the violated
/// precondition.
///
/// # Examples
///
/// ```
/// use clmm_math::domain::Price;
/// use clmm_math::error::DomainError;
/// use clmm_math::math::price_to_tick;
///
/// let err = price_to_tick(Price::ZERO);
/// assert!(matches!(err, Err(DomainError::InvalidPrice(_))));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum DomainError {
    /// Price is negative, NaN, infinite, or zero where a logarithm or
    /// square root is required.
    #[error("invalid price: {0}")]
    InvalidPrice(&'static str),

    /// Tick lies outside the global bound `[-887272, 887272]` where the
    /// bound is enforced.
    #[error("invalid tick: {0}")]
    InvalidTick(&'static str),

    /// Sqrt-price is zero or outside the range the operation supports.
    #[error("invalid sqrt price: {0}")]
    InvalidSqrtPrice(&'static str),

    /// Price range has zero width.
    #[error("invalid price range: {0}")]
    InvalidPriceRange(&'static str),

    /// No liquidity to trade against.
    #[error("insufficient liquidity: {0}")]
    InsufficientLiquidity(&'static str),

    /// A configuration or parameter value is out of its valid domain.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),

    /// A result does not fit its output type.
    #[error("arithmetic overflow: {0}")]
    Overflow(&'static str),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = core::result::Result<T, DomainError>;
