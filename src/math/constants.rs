//! Fixed constants of the price axis and the Q64.96 encoding.

use primitive_types::U256;

/// Number of fractional bits in a Q64.96 sqrt-price.
pub const Q96_RESOLUTION: u32 = 96;

/// `2^96`, the Q64.96 scaling factor.
pub const Q96: U256 = U256([0, 1 << 32, 0, 0]);

/// Smallest tick of the global price bound.
pub const MIN_TICK: i32 = -887_272;

/// Largest tick of the global price bound.
pub const MAX_TICK: i32 = 887_272;

/// Sqrt-price at [`MIN_TICK`]: `4295128738`.
pub const MIN_SQRT_PRICE: U256 = U256([0x1_0002_76a2, 0, 0, 0]);

/// Sqrt-price at [`MAX_TICK`] as given by the tick table:
/// `1461446703485210103287273052203988822378723970341`. The exact floor of
/// `1.0001^(MAX_TICK/2) * 2^96` is slightly smaller.
pub const MAX_SQRT_PRICE: U256 = U256([
    0x5d95_1d52_6398_8d25,
    0xefd1_fc6a_5064_8849,
    0xfffd_8963,
    0,
]);

/// Base of the tick exponential: `price = 1.0001^tick`.
pub const TICK_BASE: f64 = 1.0001;
