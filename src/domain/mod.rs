//! Value types for the concentrated-liquidity math layer.
//!
//! Every type here is a small `Copy` newtype with a validated
//! constructor, so invariants such as "sqrt-price is positive" or "a
//! price range has non-zero width" are checked once at the boundary and
//! relied on everywhere else.

mod amount;
mod basis_points;
mod decimals;
mod liquidity;
mod price;
mod price_range;
mod sqrt_price;
mod swap_direction;
mod swap_step;
mod tick;

pub use amount::Amount;
pub use basis_points::BasisPoints;
pub use decimals::Decimals;
pub use liquidity::Liquidity;
pub use price::Price;
pub use price_range::PriceRange;
pub use sqrt_price::SqrtPriceQ96;
pub use swap_direction::SwapDirection;
pub use swap_step::SwapStep;
pub use tick::Tick;
