//! Normalized pair of sqrt-price bounds.

use core::fmt;

use primitive_types::U256;

use super::{SqrtPriceQ96, Tick};
use crate::error::DomainError;
use crate::math::tick_to_sqrtp;

/// A non-empty price range `[lower, upper]` in sqrt-price space.
///
/// Construction accepts the two bounds in either order and normalizes
/// them so that `lower < upper`. A zero-width pair is rejected, which is
/// what makes every range-consuming formula in [`crate::math`] safe from
/// division by zero.
///
/// # Examples
///
/// ```
/// use clmm_math::domain::{PriceRange, SqrtPriceQ96};
///
/// let a = SqrtPriceQ96::from_u128(200).expect("positive");
/// let b = SqrtPriceQ96::from_u128(100).expect("positive");
/// let range = PriceRange::new(a, b).expect("distinct bounds");
/// assert_eq!(range.lower(), b);
/// assert_eq!(range.upper(), a);
/// assert!(PriceRange::new(a, a).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PriceRange {
    lower: SqrtPriceQ96,
    upper: SqrtPriceQ96,
}

impl PriceRange {
    /// Creates a range from two sqrt-price bounds given in any order.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidPriceRange`] if `a == b`.
    pub fn new(a: SqrtPriceQ96, b: SqrtPriceQ96) -> crate::error::Result<Self> {
        match a.cmp(&b) {
            core::cmp::Ordering::Less => Ok(Self { lower: a, upper: b }),
            core::cmp::Ordering::Greater => Ok(Self { lower: b, upper: a }),
            core::cmp::Ordering::Equal => Err(DomainError::InvalidPriceRange(
                "sqrt price bounds must differ",
            )),
        }
    }

    /// Creates a range from two ticks given in any order.
    ///
    /// Ticks are converted with the permissive [`tick_to_sqrtp`]; bound
    /// them beforehand if the caller's invariants require it.
    ///
    /// # Errors
    ///
    /// Propagates conversion errors, and returns
    /// [`DomainError::InvalidPriceRange`] if both ticks map to the same
    /// sqrt-price.
    pub fn from_ticks(a: Tick, b: Tick) -> crate::error::Result<Self> {
        Self::new(tick_to_sqrtp(a)?, tick_to_sqrtp(b)?)
    }

    /// Returns the lower sqrt-price bound.
    #[must_use]
    pub const fn lower(&self) -> SqrtPriceQ96 {
        self.lower
    }

    /// Returns the upper sqrt-price bound.
    #[must_use]
    pub const fn upper(&self) -> SqrtPriceQ96 {
        self.upper
    }

    /// Returns `upper - lower`, always non-zero.
    #[must_use]
    pub fn width(&self) -> U256 {
        self.upper.get() - self.lower.get()
    }

    /// Returns `true` if `sqrt_price` lies in `[lower, upper)`.
    #[must_use]
    pub fn contains(&self, sqrt_price: SqrtPriceQ96) -> bool {
        sqrt_price >= self.lower && sqrt_price < self.upper
    }
}

impl fmt::Display for PriceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.lower, self.upper)
    }
}
