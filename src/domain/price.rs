//! Human-facing exchange rate between the two tokens of a pair.

use core::fmt;

use crate::error::DomainError;

/// Exchange rate expressed as token1 per token0.
///
/// Wraps an `f64` that must be finite and non-negative. Zero is
/// representable (it is the natural "unset" value) but every conversion
/// that takes a logarithm or square root of the price rejects it with
/// [`DomainError::InvalidPrice`].
///
/// # Examples
///
/// ```
/// use clmm_math::domain::Price;
///
/// let price = Price::new(5_000.0);
/// assert!(price.is_ok());
/// assert!(Price::new(-1.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Price(f64);

impl Price {
    /// Price ratio of 1:1.
    pub const ONE: Self = Self(1.0);

    /// Price ratio of zero.
    pub const ZERO: Self = Self(0.0);

    /// Creates a new `Price` from an `f64` value.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidPrice`] if the value is negative, NaN,
    /// or infinite.
    pub fn new(value: f64) -> crate::error::Result<Self> {
        if !value.is_finite() || value < 0.0 {
            return Err(DomainError::InvalidPrice(
                "price must be finite and non-negative",
            ));
        }
        Ok(Self(value))
    }

    /// Wraps a value already known to be finite and non-negative.
    pub(crate) const fn new_unchecked(value: f64) -> Self {
        Self(value)
    }

    /// Returns the underlying `f64` value.
    #[must_use]
    pub const fn get(&self) -> f64 {
        self.0
    }

    /// Returns `true` if the price is strictly positive.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.0 > 0.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
