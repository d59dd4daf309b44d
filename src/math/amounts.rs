//! Token amounts that correspond to liquidity moving across a price range.
//!
//! These are the inverses of [`liquidity`](super::liquidity): given
//! liquidity and two sqrt-prices, how much of each token the movement
//! between them is worth. All results floor.

use primitive_types::U512;

use crate::domain::{Amount, Liquidity, PriceRange, SqrtPriceQ96};
use crate::error::DomainError;

use super::constants::{Q96, Q96_RESOLUTION};
use super::full_math::{mul_div, narrow_u128, widen};

const AMOUNT_OVERFLOW: DomainError = DomainError::Overflow("amount does not fit u128");

/// Token0 amount for `liquidity` over `[a, b]`.
///
/// Computes `floor(floor(L * 2^96 * (b - a) / b) / a)` with the bounds in
/// either order.
///
/// # Errors
///
/// - [`DomainError::InvalidPriceRange`] if `sqrtp_a == sqrtp_b`.
/// - [`DomainError::Overflow`] if the result does not fit `u128`.
pub fn amount0_for_liquidity(
    liquidity: Liquidity,
    sqrtp_a: SqrtPriceQ96,
    sqrtp_b: SqrtPriceQ96,
) -> crate::error::Result<Amount> {
    let range = PriceRange::new(sqrtp_a, sqrtp_b)?;
    let scaled_liquidity = U512::from(liquidity.get()) << Q96_RESOLUTION;
    let over_upper = mul_div(
        scaled_liquidity,
        widen(range.width()),
        widen(range.upper().get()),
    )
    .ok_or(AMOUNT_OVERFLOW)?;
    narrow_u128(over_upper / widen(range.lower().get()))
        .map(Amount::new)
        .ok_or(AMOUNT_OVERFLOW)
}

/// Token1 amount for `liquidity` over `[a, b]`.
///
/// Computes `floor(L * (b - a) / 2^96)` with the bounds in either order.
///
/// # Errors
///
/// - [`DomainError::InvalidPriceRange`] if `sqrtp_a == sqrtp_b`.
/// - [`DomainError::Overflow`] if the result does not fit `u128`.
pub fn amount1_for_liquidity(
    liquidity: Liquidity,
    sqrtp_a: SqrtPriceQ96,
    sqrtp_b: SqrtPriceQ96,
) -> crate::error::Result<Amount> {
    let range = PriceRange::new(sqrtp_a, sqrtp_b)?;
    mul_div(
        U512::from(liquidity.get()),
        widen(range.width()),
        widen(Q96),
    )
    .and_then(narrow_u128)
    .map(Amount::new)
    .ok_or(AMOUNT_OVERFLOW)
}

/// Token composition `(amount0, amount1)` of `liquidity` over `[a, b]`
/// at the `current` sqrt-price.
///
/// A position below its range is all token0, above it all token1.
///
/// # Errors
///
/// - [`DomainError::InvalidPriceRange`] if `sqrtp_a == sqrtp_b`.
/// - [`DomainError::Overflow`] if a result does not fit `u128`.
pub fn amounts_for_liquidity(
    current: SqrtPriceQ96,
    sqrtp_a: SqrtPriceQ96,
    sqrtp_b: SqrtPriceQ96,
    liquidity: Liquidity,
) -> crate::error::Result<(Amount, Amount)> {
    let range = PriceRange::new(sqrtp_a, sqrtp_b)?;
    if current <= range.lower() {
        let amount0 = amount0_for_liquidity(liquidity, range.lower(), range.upper())?;
        return Ok((amount0, Amount::ZERO));
    }
    if current >= range.upper() {
        let amount1 = amount1_for_liquidity(liquidity, range.lower(), range.upper())?;
        return Ok((Amount::ZERO, amount1));
    }
    Ok((
        amount0_for_liquidity(liquidity, current, range.upper())?,
        amount1_for_liquidity(liquidity, range.lower(), current)?,
    ))
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::Price;
    use crate::math::{liquidity_for_amounts, price_to_sqrtp};

    fn sqrtp(p: f64) -> SqrtPriceQ96 {
        let Ok(price) = Price::new(p) else {
            panic!("valid price");
        };
        let Ok(s) = price_to_sqrtp(price) else {
            panic!("representable price");
        };
        s
    }

    fn raw(v: u128) -> SqrtPriceQ96 {
        let Ok(s) = SqrtPriceQ96::from_u128(v) else {
            panic!("non-zero sqrt price");
        };
        s
    }

    const ONE_ETH: u128 = 1_000_000_000_000_000_000;
    const LIQUIDITY: Liquidity = Liquidity::new(1_517_882_343_751_510_417_954);

    #[test]
    fn argument_order_is_irrelevant() {
        let (a, b) = (sqrtp(5_000.0), sqrtp(5_500.0));
        assert_eq!(
            amount0_for_liquidity(LIQUIDITY, a, b),
            amount0_for_liquidity(LIQUIDITY, b, a)
        );
        assert_eq!(
            amount1_for_liquidity(LIQUIDITY, a, b),
            amount1_for_liquidity(LIQUIDITY, b, a)
        );
    }

    #[test]
    fn degenerate_range_rejected() {
        let p = sqrtp(5_000.0);
        assert!(matches!(
            amount0_for_liquidity(LIQUIDITY, p, p),
            Err(DomainError::InvalidPriceRange(_))
        ));
        assert!(matches!(
            amount1_for_liquidity(LIQUIDITY, p, p),
            Err(DomainError::InvalidPriceRange(_))
        ));
        assert!(matches!(
            amounts_for_liquidity(p, p, p, LIQUIDITY),
            Err(DomainError::InvalidPriceRange(_))
        ));
    }

    #[test]
    fn exact_small_values() {
        let q96 = Q96.low_u128();
        // L = 6 between sqrt prices 1 and 2: amount1 = 6, amount0 = 6 * (1/1 - 1/2) = 3
        assert_eq!(
            amount1_for_liquidity(Liquidity::new(6), raw(q96), raw(2 * q96)),
            Ok(Amount::new(6))
        );
        assert_eq!(
            amount0_for_liquidity(Liquidity::new(6), raw(q96), raw(2 * q96)),
            Ok(Amount::new(3))
        );
        // 7 * (1 - 1/2) = 3.5 -> 3
        assert_eq!(
            amount0_for_liquidity(Liquidity::new(7), raw(q96), raw(2 * q96)),
            Ok(Amount::new(3))
        );
    }

    #[test]
    fn deposit_never_exceeds_what_was_sized() {
        // liquidity sized from an amount converts back to at most that amount
        let (current, upper, lower) = (sqrtp(5_000.0), sqrtp(5_500.0), sqrtp(4_545.0));
        let Ok(amount0) = amount0_for_liquidity(LIQUIDITY, current, upper) else {
            panic!("expected Ok");
        };
        let Ok(amount1) = amount1_for_liquidity(LIQUIDITY, lower, current) else {
            panic!("expected Ok");
        };
        assert!(amount0.get() <= ONE_ETH);
        assert!(amount1.get() <= 5_000 * ONE_ETH);
        // token1 was the binding side, so it is consumed almost entirely
        assert!(5_000 * ONE_ETH - amount1.get() < 1_000);
    }

    #[test]
    fn composition_inside_range_round_trips() {
        let (current, lower, upper) = (sqrtp(5_000.0), sqrtp(4_545.0), sqrtp(5_500.0));
        let Ok((amount0, amount1)) = amounts_for_liquidity(current, lower, upper, LIQUIDITY)
        else {
            panic!("expected Ok");
        };
        let Ok(again) = liquidity_for_amounts(current, lower, upper, amount0, amount1) else {
            panic!("expected Ok");
        };
        assert!(again <= LIQUIDITY);
    }

    #[test]
    fn composition_outside_range_is_one_sided() {
        let (lower, upper) = (sqrtp(4_545.0), sqrtp(5_500.0));
        let Ok((a0, a1)) = amounts_for_liquidity(sqrtp(4_000.0), lower, upper, LIQUIDITY) else {
            panic!("expected Ok");
        };
        assert!(!a0.is_zero());
        assert!(a1.is_zero());

        let Ok((b0, b1)) = amounts_for_liquidity(sqrtp(6_000.0), upper, lower, LIQUIDITY) else {
            panic!("expected Ok");
        };
        assert!(b0.is_zero());
        assert!(!b1.is_zero());
    }

    #[test]
    fn overflow_reported() {
        let Ok(wide) = SqrtPriceQ96::new(primitive_types::U256::MAX) else {
            panic!("expected Ok");
        };
        assert!(matches!(
            amount1_for_liquidity(Liquidity::new(u128::MAX), raw(1), wide),
            Err(DomainError::Overflow(_))
        ));
    }
}
