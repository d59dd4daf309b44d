//! Raw token amount in the token's smallest unit.

use core::fmt;

use super::Decimals;

/// A token amount in the smallest indivisible unit (wei or equivalent).
///
/// `Amount` never interprets decimals; use [`Decimals`] to move between
/// whole-token values and raw units. All `u128` values are valid amounts.
///
/// # Examples
///
/// ```
/// use clmm_math::domain::{Amount, Decimals};
///
/// let one_eth = Amount::from_whole(1, Decimals::ETHER);
/// assert_eq!(one_eth.get(), 1_000_000_000_000_000_000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[must_use]
pub struct Amount(u128);

impl Amount {
    /// Zero amount.
    pub const ZERO: Self = Self(0);

    /// Maximum representable amount.
    pub const MAX: Self = Self(u128::MAX);

    /// Creates a new `Amount` from a raw `u128` value.
    pub const fn new(value: u128) -> Self {
        Self(value)
    }

    /// Creates an `Amount` from a whole-token quantity.
    ///
    /// `Amount::from_whole(5_000, Decimals::ETHER)` is `5000 * 10^18`.
    pub const fn from_whole(whole: u64, decimals: Decimals) -> Self {
        Self(decimals.scale_up(whole))
    }

    /// Returns the underlying `u128` value.
    #[must_use]
    pub const fn get(&self) -> u128 {
        self.0
    }

    /// Returns `true` if the amount is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
