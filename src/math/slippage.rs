//! Minimum-amount bounds for deposits under a slippage tolerance.

use crate::config::MathConfig;
use crate::domain::{Amount, BasisPoints};
use crate::error::DomainError;

/// Returns `floor(desired * (10000 - tolerance) / 10000)`.
///
/// # Errors
///
/// - [`DomainError::InvalidConfiguration`] if `tolerance` exceeds 100%.
/// - [`DomainError::Overflow`] if the intermediate product overflows.
///
/// # Examples
///
/// ```
/// use clmm_math::domain::{Amount, BasisPoints};
/// use clmm_math::math::minimum_amount;
///
/// let min = minimum_amount(Amount::new(1_000_000), BasisPoints::new(50));
/// assert_eq!(min, Ok(Amount::new(995_000)));
/// ```
pub fn minimum_amount(desired: Amount, tolerance: BasisPoints) -> crate::error::Result<Amount> {
    let kept = tolerance.complement().ok_or(DomainError::InvalidConfiguration(
        "slippage tolerance must not exceed 10000 basis points (100%)",
    ))?;
    kept.apply(desired)
}

/// Minimum amounts for a two-sided deposit under the configured
/// tolerance.
///
/// # Errors
///
/// As [`minimum_amount`].
pub fn minimum_amounts(
    desired0: Amount,
    desired1: Amount,
    config: &MathConfig,
) -> crate::error::Result<(Amount, Amount)> {
    let tolerance = config.slippage_tolerance();
    Ok((
        minimum_amount(desired0, tolerance)?,
        minimum_amount(desired1, tolerance)?,
    ))
}
