//! Caller-facing configuration.
//!
//! The math layer is stateless; [`MathConfig`] only carries the choices a
//! caller makes about how strictly inputs are treated, most importantly
//! the [`TickBoundPolicy`] for tick conversions.

mod math_config;
mod tick_bound_policy;

pub use math_config::MathConfig;
pub use tick_bound_policy::TickBoundPolicy;
