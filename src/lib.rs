//! # clmm-math
//!
//! Pure math layer of a concentrated-liquidity market maker: conversions
//! between prices, ticks and Q64.96 sqrt-prices, liquidity sizing from
//! token deposits, token amounts from liquidity, and single-range swap
//! simulation.
//!
//! Every function is synchronous and side-effect free. There is no pool
//! state, no fee accounting and no tick-crossing loop; those belong to
//! the caller, who composes the functions here.
//!
//! # Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `serde` | no | `Serialize`/`Deserialize` for configuration types |
//!
//! # Quick Start
//!
//! ```toml
//! [dependencies]
//! clmm-math = "0.1"
//! ```
//!
//! ## Size a position and swap against it
//!
//! ```rust
//! use clmm_math::domain::{Amount, Decimals, Price};
//! use clmm_math::math::{liquidity_for_amounts, price_to_sqrtp, swap_token1_for_token0};
//!
//! let sqrtp = |p: f64| price_to_sqrtp(Price::new(p).expect("valid price")).expect("representable");
//! let (lower, current, upper) = (sqrtp(4_545.0), sqrtp(5_000.0), sqrtp(5_500.0));
//!
//! // 1. Deposit 1 ETH and 5000 USDC (both 18 decimals) into [4545, 5500]
//! let liquidity = liquidity_for_amounts(
//!     current,
//!     lower,
//!     upper,
//!     Amount::from_whole(1, Decimals::ETHER),
//!     Amount::from_whole(5_000, Decimals::ETHER),
//! )
//! .expect("valid range");
//!
//! // 2. Sell 42 USDC into that liquidity
//! let step = swap_token1_for_token0(liquidity, current, Amount::from_whole(42, Decimals::ETHER))
//!     .expect("liquidity is non-zero");
//!
//! assert!(step.sqrt_price_end() > current);
//! assert!(step.amount_in() <= step.nominal_amount_in());
//! assert!(step.amount_out().get() > 0);
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │   Caller     │  pool state, range crossing, fees
//! └──────┬──────┘
//!        │ plain function calls
//!        ▼
//! ┌─────────────┐
//! │    Math      │  conversion, liquidity, amounts, swap_step, slippage
//! └──────┬──────┘
//!        │ validated newtypes, MathConfig
//!        ▼
//! ┌─────────────┐
//! │   Domain     │  Price, Tick, SqrtPriceQ96, PriceRange, Liquidity, Amount, …
//! └─────────────┘
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Newtype value types: [`SqrtPriceQ96`](domain::SqrtPriceQ96), [`Tick`](domain::Tick), [`PriceRange`](domain::PriceRange), etc. |
//! | [`math`]   | Conversions, liquidity sizing, amounts, swap steps, slippage bounds |
//! | [`config`] | [`MathConfig`](config::MathConfig) and [`TickBoundPolicy`](config::TickBoundPolicy) |
//! | [`error`]  | [`DomainError`](error::DomainError) unified error enum |
//! | [`prelude`] | Convenience re-exports for common types and functions |

pub mod config;
pub mod domain;
pub mod error;
pub mod math;
pub mod prelude;
