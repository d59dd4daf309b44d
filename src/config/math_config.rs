//! Caller-selected options for the conversion and sizing helpers.

use super::TickBoundPolicy;
use crate::domain::BasisPoints;
use crate::error::DomainError;

/// Default slippage tolerance for minimum-amount bounds (0.5%).
const DEFAULT_SLIPPAGE_BPS: u32 = 50;

/// Options that change how the math layer treats its inputs.
///
/// The formulas themselves have no knobs; what a caller can choose is
/// whether tick conversions enforce the global bound, and which
/// slippage tolerance to use when turning desired deposit amounts into
/// minimum amounts.
///
/// # Validation
///
/// - `slippage_tolerance` must not exceed 100% (10 000 basis points).
///
/// # Examples
///
/// ```
/// use clmm_math::config::{MathConfig, TickBoundPolicy};
/// use clmm_math::domain::BasisPoints;
///
/// let config = MathConfig::new(TickBoundPolicy::Reject, BasisPoints::new(100))
///     .expect("valid config");
/// assert_eq!(config.tick_bounds(), TickBoundPolicy::Reject);
/// assert!(MathConfig::new(TickBoundPolicy::Clamp, BasisPoints::new(10_001)).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MathConfig {
    tick_bounds: TickBoundPolicy,
    slippage_tolerance: BasisPoints,
}

impl MathConfig {
    /// Creates a validated `MathConfig`.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidConfiguration`] if the slippage
    /// tolerance exceeds 100%.
    pub fn new(
        tick_bounds: TickBoundPolicy,
        slippage_tolerance: BasisPoints,
    ) -> crate::error::Result<Self> {
        let config = Self {
            tick_bounds,
            slippage_tolerance,
        };
        config.validate()?;
        Ok(config)
    }

    /// Configuration that rejects out-of-bound ticks.
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            tick_bounds: TickBoundPolicy::Reject,
            slippage_tolerance: BasisPoints::new(DEFAULT_SLIPPAGE_BPS),
        }
    }

    /// Configuration that saturates out-of-bound ticks.
    #[must_use]
    pub const fn clamping() -> Self {
        Self {
            tick_bounds: TickBoundPolicy::Clamp,
            slippage_tolerance: BasisPoints::new(DEFAULT_SLIPPAGE_BPS),
        }
    }

    /// Validates all configuration invariants.
    ///
    /// Deserialized configs bypass [`MathConfig::new`], so call this after
    /// loading one.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidConfiguration`] if the slippage
    /// tolerance exceeds 100%.
    pub fn validate(&self) -> crate::error::Result<()> {
        if !self.slippage_tolerance.is_valid_percent() {
            return Err(DomainError::InvalidConfiguration(
                "slippage tolerance must not exceed 10000 basis points (100%)",
            ));
        }
        Ok(())
    }

    /// Returns the tick bound policy.
    #[must_use]
    pub const fn tick_bounds(&self) -> TickBoundPolicy {
        self.tick_bounds
    }

    /// Returns the slippage tolerance.
    #[must_use]
    pub const fn slippage_tolerance(&self) -> BasisPoints {
        self.slippage_tolerance
    }
}

impl Default for MathConfig {
    /// Unchecked tick bounds and a 0.5% slippage tolerance.
    fn default() -> Self {
        Self {
            tick_bounds: TickBoundPolicy::Unchecked,
            slippage_tolerance: BasisPoints::new(DEFAULT_SLIPPAGE_BPS),
        }
    }
}
