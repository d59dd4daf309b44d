//! How tick conversions treat the global tick bound.

use core::fmt;

use crate::domain::Tick;

/// Policy applied to ticks produced or consumed by the conversion layer.
///
/// By default the global bound `[-887272, 887272]` is left unchecked and
/// is the caller's responsibility. The stricter options are for callers
/// whose own invariants depend on in-bound ticks.
///
/// # Examples
///
/// ```
/// use clmm_math::config::TickBoundPolicy;
/// use clmm_math::domain::Tick;
///
/// let far = Tick::from_raw(1_000_000);
/// assert_eq!(TickBoundPolicy::Unchecked.apply(far), Ok(far));
/// assert!(TickBoundPolicy::Reject.apply(far).is_err());
/// assert_eq!(TickBoundPolicy::Clamp.apply(far), Ok(Tick::MAX));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TickBoundPolicy {
    /// Pass ticks through unchanged, even outside the bound.
    #[default]
    Unchecked,
    /// Fail with [`DomainError::InvalidTick`](crate::error::DomainError::InvalidTick)
    /// on an out-of-bound tick.
    Reject,
    /// Saturate out-of-bound ticks to [`Tick::MIN`] or [`Tick::MAX`].
    Clamp,
}

impl TickBoundPolicy {
    /// Applies this policy to `tick`.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidTick`](crate::error::DomainError::InvalidTick)
    /// under [`TickBoundPolicy::Reject`] when `tick` is out of bounds.
    pub fn apply(&self, tick: Tick) -> crate::error::Result<Tick> {
        match self {
            Self::Unchecked => Ok(tick),
            Self::Reject => Tick::new(tick.get()),
            Self::Clamp => {
                let clamped = tick.clamp_to_bounds();
                if clamped != tick {
                    tracing::trace!(
                        tick = tick.get(),
                        clamped = clamped.get(),
                        "tick clamped to global bound"
                    );
                }
                Ok(clamped)
            }
        }
    }
}

impl fmt::Display for TickBoundPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unchecked => write!(f, "unchecked"),
            Self::Reject => write!(f, "reject"),
            Self::Clamp => write!(f, "clamp"),
        }
    }
}
