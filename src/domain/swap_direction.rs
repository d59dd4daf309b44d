//! Which token a trader sells in a swap step.

use core::fmt;

/// Direction of a single swap step.
///
/// Price is quoted as token1 per token0, so selling token0 pushes the
/// sqrt-price down and selling token1 pushes it up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwapDirection {
    /// Sell token0, receive token1. Sqrt-price decreases.
    ZeroForOne,
    /// Sell token1, receive token0. Sqrt-price increases.
    OneForZero,
}

impl fmt::Display for SwapDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroForOne => write!(f, "token0->token1"),
            Self::OneForZero => write!(f, "token1->token0"),
        }
    }
}
