//! Wide-integer helpers for the Q64.96 formulas.
//!
//! Every liquidity and amount formula multiplies up to three operands of
//! 128 to 256 bits before dividing, so intermediates are computed in
//! 512 bits and narrowed only once the final quotient is known.
//!
//! The floating-point helpers convert between `f64` and scaled integers
//! using the exact binary value of the float, so the only rounding is the
//! explicit floor at the end.

use primitive_types::{U256, U512};

/// Widens a 256-bit value to 512 bits.
#[must_use]
pub(crate) fn widen(value: U256) -> U512 {
    let U256(limbs) = value;
    U512([limbs[0], limbs[1], limbs[2], limbs[3], 0, 0, 0, 0])
}

/// Narrows to 256 bits, or `None` if the value does not fit.
#[must_use]
pub(crate) fn narrow_u256(value: U512) -> Option<U256> {
    if value.bits() > 256 {
        return None;
    }
    let U512(limbs) = value;
    Some(U256([limbs[0], limbs[1], limbs[2], limbs[3]]))
}

/// Narrows to `u128`, or `None` if the value does not fit.
#[must_use]
pub(crate) fn narrow_u128(value: U512) -> Option<u128> {
    if value.bits() > 128 {
        return None;
    }
    Some(value.low_u128())
}

/// Computes `floor(a * b / denominator)`.
///
/// Returns `None` if `denominator` is zero or the product exceeds 512
/// bits.
#[must_use]
pub(crate) fn mul_div(a: U512, b: U512, denominator: U512) -> Option<U512> {
    if denominator.is_zero() {
        return None;
    }
    Some(a.checked_mul(b)? / denominator)
}

/// Returns `floor(value * 2^shift)` for a finite, non-negative `value`.
///
/// Returns `None` if `value` is negative or not finite, or if the result
/// does not fit 512 bits.
#[must_use]
pub(crate) fn scaled_floor(value: f64, shift: u32) -> Option<U512> {
    if !value.is_finite() || value < 0.0 {
        return None;
    }
    if value == 0.0 {
        return Some(U512::zero());
    }
    let (mantissa, exponent) = decompose(value);
    let total = i64::from(exponent) + i64::from(shift);
    if total >= 0 {
        // mantissa has at most 53 significant bits
        if total > 512 - 53 {
            return None;
        }
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let left = total as u32;
        Some(U512::from(mantissa) << left)
    } else {
        let right = total.unsigned_abs();
        if right >= 64 {
            return Some(U512::zero());
        }
        #[allow(clippy::cast_possible_truncation)]
        let right = right as u32;
        Some(U512::from(mantissa >> right))
    }
}

/// Converts a 256-bit integer to the nearest `f64` (up to one rounding
/// of the top 64 bits).
#[must_use]
pub(crate) fn u256_to_f64(value: U256) -> f64 {
    let bits = value.bits();
    if bits <= 64 {
        #[allow(clippy::cast_precision_loss)]
        let small = value.low_u64() as f64;
        return small;
    }
    #[allow(clippy::cast_possible_truncation)]
    let shift = (bits - 64) as u32;
    #[allow(clippy::cast_precision_loss)]
    let top = (value >> shift).low_u64() as f64;
    #[allow(clippy::cast_possible_wrap)]
    let scale = 2f64.powi(shift as i32);
    top * scale
}

/// Splits a finite positive `f64` into `(mantissa, exponent)` with
/// `value == mantissa * 2^exponent` exactly.
fn decompose(value: f64) -> (u64, i32) {
    const FRACTION_BITS: u32 = 52;
    const FRACTION_MASK: u64 = (1 << FRACTION_BITS) - 1;
    const EXPONENT_BIAS: i32 = 1075;

    let bits = value.to_bits();
    let fraction = bits & FRACTION_MASK;
    #[allow(clippy::cast_possible_truncation)]
    let biased = ((bits >> FRACTION_BITS) & 0x7ff) as i32;
    if biased == 0 {
        // subnormal
        (fraction, 1 - EXPONENT_BIAS)
    } else {
        (fraction | (1 << FRACTION_BITS), biased - EXPONENT_BIAS)
    }
}
