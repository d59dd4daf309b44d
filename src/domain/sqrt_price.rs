//! Q64.96 fixed-point square root of a price.

use core::fmt;

use primitive_types::U256;

use crate::error::DomainError;
use crate::math::constants::{MAX_SQRT_PRICE, MIN_SQRT_PRICE};

/// `floor(sqrt(price) * 2^96)` stored as a 256-bit unsigned integer.
///
/// This is the canonical internal price unit: the liquidity and amount
/// formulas become multiplicative in it, and integer arithmetic avoids
/// floating-point drift across repeated updates. A `SqrtPriceQ96` is
/// always strictly positive.
///
/// # Examples
///
/// ```
/// use clmm_math::domain::SqrtPriceQ96;
/// use primitive_types::U256;
///
/// let one = SqrtPriceQ96::new(U256::one() << 96).expect("non-zero");
/// assert_eq!(one, SqrtPriceQ96::ONE);
/// assert!(SqrtPriceQ96::new(U256::zero()).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SqrtPriceQ96(U256);

impl SqrtPriceQ96 {
    /// Sqrt-price of a 1:1 price (`2^96`).
    pub const ONE: Self = Self(U256([0, 1 << 32, 0, 0]));

    /// Creates a `SqrtPriceQ96` from a raw Q64.96 value.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidSqrtPrice`] if `value` is zero.
    pub fn new(value: U256) -> crate::error::Result<Self> {
        if value.is_zero() {
            return Err(DomainError::InvalidSqrtPrice("sqrt price must be positive"));
        }
        Ok(Self(value))
    }

    /// Creates a `SqrtPriceQ96` from a raw `u128` Q64.96 value.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidSqrtPrice`] if `value` is zero.
    pub fn from_u128(value: u128) -> crate::error::Result<Self> {
        Self::new(U256::from(value))
    }

    /// Returns the raw Q64.96 value.
    #[must_use]
    pub const fn get(&self) -> U256 {
        self.0
    }

    /// Returns `true` if this sqrt-price corresponds to a tick inside the
    /// global bound.
    #[must_use]
    pub fn is_within_tick_bounds(&self) -> bool {
        self.0 >= MIN_SQRT_PRICE && self.0 <= MAX_SQRT_PRICE
    }
}

impl fmt::Display for SqrtPriceQ96 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
