//! Convenience re-exports for common types and functions.
//!
//! ```rust
//! use clmm_math::prelude::*;
//!
//! let sqrtp = tick_to_sqrtp(Tick::ZERO).expect("in-bound tick");
//! assert_eq!(sqrtp, SqrtPriceQ96::ONE);
//! ```

pub use crate::domain::{
    Amount, BasisPoints, Decimals, Liquidity, Price, PriceRange, SqrtPriceQ96, SwapDirection,
    SwapStep, Tick,
};

pub use crate::math::{
    amount0_for_liquidity, amount1_for_liquidity, amounts_for_liquidity, liquidity_for_amounts,
    liquidity_from_amount0, liquidity_from_amount1, minimum_amount, minimum_amounts,
    price_to_sqrtp, price_to_tick, price_to_tick_with, simulate_swap_step, sqrtp_to_price,
    sqrtp_to_tick, swap_token0_for_token1, swap_token1_for_token0, tick_to_sqrtp,
    tick_to_sqrtp_with,
};

pub use crate::config::{MathConfig, TickBoundPolicy};

pub use crate::error::{DomainError, Result};
