//! Outcome of a single-range swap step.

use core::fmt;

use super::{Amount, Price, SqrtPriceQ96, SwapDirection};
use crate::math::sqrtp_to_price;

/// Exact settlement of one swap step that stays inside a single
/// liquidity range.
///
/// `amount_in` is recomputed from the sqrt-price movement after the new
/// price has been truncated, so it can be slightly below the amount the
/// trader asked to sell. It is the authoritative amount to settle; the
/// nominal request is kept only to report the difference.
///
/// # Invariants
///
/// - `sqrt_price_end >= sqrt_price_start` for [`SwapDirection::OneForZero`],
///   `<=` for [`SwapDirection::ZeroForOne`].
/// - `amount_in <= nominal_amount_in` for [`SwapDirection::OneForZero`].
///   Selling token0 into very deep liquidity can settle a few units more
///   than requested, because the truncated price sits slightly below the
///   exact one.
/// - No movement implies `amount_in == 0` and `amount_out == 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SwapStep {
    direction: SwapDirection,
    sqrt_price_start: SqrtPriceQ96,
    sqrt_price_end: SqrtPriceQ96,
    nominal_amount_in: Amount,
    amount_in: Amount,
    amount_out: Amount,
}

impl SwapStep {
    pub(crate) const fn new(
        direction: SwapDirection,
        sqrt_price_start: SqrtPriceQ96,
        sqrt_price_end: SqrtPriceQ96,
        nominal_amount_in: Amount,
        amount_in: Amount,
        amount_out: Amount,
    ) -> Self {
        Self {
            direction,
            sqrt_price_start,
            sqrt_price_end,
            nominal_amount_in,
            amount_in,
            amount_out,
        }
    }

    /// Returns the swap direction.
    #[must_use]
    pub const fn direction(&self) -> SwapDirection {
        self.direction
    }

    /// Returns the sqrt-price before the step.
    #[must_use]
    pub const fn sqrt_price_start(&self) -> SqrtPriceQ96 {
        self.sqrt_price_start
    }

    /// Returns the sqrt-price after the step.
    #[must_use]
    pub const fn sqrt_price_end(&self) -> SqrtPriceQ96 {
        self.sqrt_price_end
    }

    /// Returns the amount the caller asked to sell.
    pub const fn nominal_amount_in(&self) -> Amount {
        self.nominal_amount_in
    }

    /// Returns the exact input amount to settle.
    pub const fn amount_in(&self) -> Amount {
        self.amount_in
    }

    /// Returns the exact output amount to settle.
    pub const fn amount_out(&self) -> Amount {
        self.amount_out
    }

    /// Returns `nominal_amount_in - amount_in`, the part of the request
    /// absorbed by truncation of the new sqrt-price. Zero if the settled
    /// amount exceeds the request.
    pub const fn shortfall(&self) -> Amount {
        Amount::new(self.nominal_amount_in.get().saturating_sub(self.amount_in.get()))
    }

    /// Returns `true` if the step did not move the price.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.sqrt_price_start == self.sqrt_price_end
    }

    /// Human-readable price after the step.
    #[must_use]
    pub fn price_end(&self) -> Price {
        sqrtp_to_price(self.sqrt_price_end)
    }
}

impl fmt::Display for SwapStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SwapStep({}, in={}, out={}, sqrt_price={}->{})",
            self.direction,
            self.amount_in,
            self.amount_out,
            self.sqrt_price_start,
            self.sqrt_price_end
        )
    }
}
