//! Concentrated-liquidity formulas over Q64.96 sqrt-prices.
//!
//! | Module | Provides |
//! |--------|----------|
//! | [`constants`] | Q96 scale, tick and sqrt-price bounds |
//! | `conversion` | price ↔ tick ↔ sqrt-price |
//! | `liquidity` | liquidity from token amounts |
//! | `amounts` | token amounts from liquidity |
//! | `swap_step` | single-range swap simulation |
//! | `slippage` | minimum-amount bounds |
//!
//! Scaled quantities are integers throughout and every division floors.
//! Intermediate products are 512 bits wide, so only a result that does
//! not fit its output type can overflow.

pub mod constants;

mod amounts;
mod conversion;
mod full_math;
mod liquidity;
mod slippage;
mod swap_step;
mod tick_math;

#[cfg(test)]
#[allow(clippy::panic)]
mod proptest_properties;

pub use amounts::{amount0_for_liquidity, amount1_for_liquidity, amounts_for_liquidity};
pub use conversion::{
    price_to_sqrtp, price_to_tick, price_to_tick_with, sqrtp_to_price, sqrtp_to_tick,
    tick_to_sqrtp, tick_to_sqrtp_with,
};
pub use liquidity::{liquidity_for_amounts, liquidity_from_amount0, liquidity_from_amount1};
pub use slippage::{minimum_amount, minimum_amounts};
pub use swap_step::{simulate_swap_step, swap_token0_for_token1, swap_token1_for_token0};
