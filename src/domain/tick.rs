//! Discrete index on the log-price axis.

use core::fmt;

use crate::error::DomainError;
use crate::math::constants::{MAX_TICK, MIN_TICK};

/// A discrete price point: `price ≈ 1.0001^tick`.
///
/// The global bound of representable prices is
/// [`MIN`](Self::MIN) (`-887272`) ..= [`MAX`](Self::MAX) (`887272`).
/// Two constructors exist because the bound is enforced by policy, not
/// by the type:
///
/// - [`Tick::new`] is strict and rejects out-of-bound values.
/// - [`Tick::from_raw`] accepts any `i32` and leaves the bound to the
///   caller.
///
/// # Examples
///
/// ```
/// use clmm_math::domain::Tick;
///
/// assert!(Tick::new(85_176).is_ok());
/// assert!(Tick::new(900_000).is_err());
///
/// let raw = Tick::from_raw(900_000);
/// assert!(!raw.is_within_bounds());
/// assert_eq!(raw.clamp_to_bounds(), Tick::MAX);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Tick(i32);

impl Tick {
    /// Minimum valid tick (`-887272`).
    pub const MIN: Self = Self(MIN_TICK);

    /// Maximum valid tick (`887272`).
    pub const MAX: Self = Self(MAX_TICK);

    /// Tick where `price = 1.0`.
    pub const ZERO: Self = Self(0);

    /// Creates a bounds-checked `Tick`.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidTick`] if `value` is outside
    /// `[-887272, 887272]`.
    pub const fn new(value: i32) -> crate::error::Result<Self> {
        if value < MIN_TICK || value > MAX_TICK {
            return Err(DomainError::InvalidTick(
                "tick out of range [-887272, 887272]",
            ));
        }
        Ok(Self(value))
    }

    /// Creates a `Tick` without checking the global bound.
    #[must_use]
    pub const fn from_raw(value: i32) -> Self {
        Self(value)
    }

    /// Returns the underlying `i32` tick index.
    #[must_use]
    pub const fn get(&self) -> i32 {
        self.0
    }

    /// Returns `true` if this tick lies inside the global bound.
    #[must_use]
    pub const fn is_within_bounds(&self) -> bool {
        self.0 >= MIN_TICK && self.0 <= MAX_TICK
    }

    /// Saturates this tick to the global bound.
    #[must_use]
    pub const fn clamp_to_bounds(&self) -> Self {
        if self.0 < MIN_TICK {
            Self::MIN
        } else if self.0 > MAX_TICK {
            Self::MAX
        } else {
            *self
        }
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tick({})", self.0)
    }
}
