//! Percentages in basis points.

use core::fmt;

use super::Amount;
use crate::error::DomainError;

/// Basis points in 100%.
const ONE_HUNDRED_PERCENT: u32 = 10_000;

/// A percentage in units of 0.01% (1 bp). Slippage tolerances are the
/// main use.
///
/// Any `u32` can be stored; values above 10 000 bp are not meaningful
/// percentages and the operations that need a percentage reject them.
///
/// # Examples
///
/// ```
/// use clmm_math::domain::{Amount, BasisPoints};
///
/// let half_percent = BasisPoints::new(50);
/// assert_eq!(half_percent.complement(), Some(BasisPoints::new(9_950)));
/// assert_eq!(
///     half_percent.apply(Amount::new(1_000_000)),
///     Ok(Amount::new(5_000))
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct BasisPoints(u32);

impl BasisPoints {
    /// 0%.
    pub const ZERO: Self = Self(0);

    /// 100%.
    pub const MAX_PERCENT: Self = Self(ONE_HUNDRED_PERCENT);

    /// Wraps a raw basis-point count.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Returns the raw basis-point count.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }

    /// Returns `true` if `self <= 100%`.
    #[must_use]
    pub const fn is_valid_percent(&self) -> bool {
        self.0 <= ONE_HUNDRED_PERCENT
    }

    /// Returns `100% - self`, or `None` above 100%.
    ///
    /// For a slippage tolerance this is the share of the desired amount
    /// that must still arrive.
    #[must_use]
    pub const fn complement(&self) -> Option<Self> {
        if self.0 > ONE_HUNDRED_PERCENT {
            return None;
        }
        Some(Self(ONE_HUNDRED_PERCENT - self.0))
    }

    /// Takes this percentage of `amount`, rounded down.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::Overflow`] if `amount * self` exceeds `u128`.
    pub const fn apply(&self, amount: Amount) -> crate::error::Result<Amount> {
        let Some(product) = amount.get().checked_mul(self.0 as u128) else {
            return Err(DomainError::Overflow("basis point product exceeds u128"));
        };
        Ok(Amount::new(product / ONE_HUNDRED_PERCENT as u128))
    }
}

impl fmt::Display for BasisPoints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}bp", self.0)
    }
}
