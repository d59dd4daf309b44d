//! Decimal places of a token, for moving between whole and raw units.

use crate::error::DomainError;

/// Largest supported number of decimal places.
const MAX_PLACES: u8 = 18;

/// Number of decimal places a token uses, in `0..=18`.
///
/// The math layer works in raw units only; `Decimals` exists for the
/// edge where a caller turns "5000 USDC" into a raw [`Amount`](super::Amount).
///
/// # Examples
///
/// ```
/// use clmm_math::domain::Decimals;
///
/// let usdc = Decimals::new(6).expect("6 is valid");
/// assert_eq!(usdc.scale_up(5_000), 5_000_000_000);
/// assert!(Decimals::new(19).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Decimals(u8);

impl Decimals {
    /// No decimal places.
    pub const ZERO: Self = Self(0);

    /// 18 decimal places, as used by ether and most ERC-20 tokens.
    pub const ETHER: Self = Self(MAX_PLACES);

    /// Creates a validated `Decimals`.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidConfiguration`] above 18.
    pub const fn new(places: u8) -> crate::error::Result<Self> {
        if places > MAX_PLACES {
            return Err(DomainError::InvalidConfiguration("decimals must be 0..=18"));
        }
        Ok(Self(places))
    }

    /// Returns the number of decimal places.
    #[must_use]
    pub const fn get(&self) -> u8 {
        self.0
    }

    /// Whole tokens to raw units. Cannot overflow: `u64::MAX * 10^18`
    /// fits `u128`.
    #[must_use]
    pub const fn scale_up(&self, whole: u64) -> u128 {
        whole as u128 * self.unit()
    }

    /// `10^places`.
    const fn unit(&self) -> u128 {
        10u128.pow(self.0 as u32)
    }
}
