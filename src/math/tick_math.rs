//! Fixed-point evaluation of `1.0001^(tick/2)` inside the global tick bound.
//!
//! The sqrt-price at a tick is assembled from a table of Q128 factors
//! `1 / sqrt(1.0001)^(2^i)`, one per bit of `|tick|`, multiplied together
//! in 256-bit arithmetic. Positive ticks take the reciprocal at the end.
//! The final shift from Q128 to Q96 floors.
//!
//! Both functions here assume their input already lies inside
//! `[MIN_TICK, MAX_TICK]` (resp. `[MIN_SQRT_PRICE, MAX_SQRT_PRICE]`);
//! bound checks belong to [`crate::math::conversion`].

use primitive_types::U256;

use super::constants::{MAX_TICK, MIN_TICK};

/// Q128 factors `2^128 / 1.0001^(2^(i-1))` for bit `i` of `|tick|`.
const RATIOS: [u128; 20] = [
    0xfffc_b933_bd6f_ad37_aa2d_162d_1a59_4001,
    0xfff9_7272_373d_4132_59a4_6990_580e_213a,
    0xfff2_e50f_5f65_6932_ef12_357c_f3c7_fdcc,
    0xffe5_caca_7e10_e4e6_1c36_24ea_a094_1cd0,
    0xffcb_9843_d60f_6159_c9db_5883_5c92_6644,
    0xff97_3b41_fa98_c081_472e_6896_dfb2_54c0,
    0xff2e_a164_66c9_6a38_43ec_78b3_26b5_2861,
    0xfe5d_ee04_6a99_a2a8_11c4_61f1_969c_3053,
    0xfcbe_86c7_900a_88ae_dcff_c83b_479a_a3a4,
    0xf987_a725_3ac4_1317_6f2b_074c_f781_5e54,
    0xf339_2b08_22b7_0005_940c_7a39_8e4b_70f3,
    0xe715_9475_a2c2_9b74_43b2_9c7f_a6e8_89d9,
    0xd097_f3bd_fd20_22b8_845a_d8f7_92aa_5825,
    0xa9f7_4646_2d87_0fdf_8a65_dc1f_90e0_61e5,
    0x70d8_69a1_56d2_a1b8_90bb_3df6_2baf_32f7,
    0x31be_135f_97d0_8fd9_8123_1505_542f_cfa6,
    0x09aa_508b_5b7a_84e1_c677_de54_f3e9_9bc9,
    0x005d_6af8_dedb_8119_6699_c329_225e_e604,
    0x0000_2216_e584_f5fa_1ea9_2604_1bed_fe98,
    0x0000_0000_048a_1703_91f7_dc42_444e_8fa2,
];

/// Returns the table value of `1.0001^(tick/2) * 2^96` for an in-bound
/// tick.
///
/// This matches the exact floor across most of the range. The truncated
/// Q128 factors drift upwards at large positive ticks, by at most about
/// 3e-20 relative at [`MAX_TICK`].
pub(crate) fn sqrt_price_at_tick(tick: i32) -> U256 {
    debug_assert!((MIN_TICK..=MAX_TICK).contains(&tick));
    let abs = tick.unsigned_abs();

    let mut ratio = if abs & 1 != 0 {
        U256::from(RATIOS[0])
    } else {
        U256::one() << 128u32
    };
    for (bit, factor) in RATIOS.iter().enumerate().skip(1) {
        if abs & (1 << bit) != 0 {
            ratio = (ratio * U256::from(*factor)) >> 128u32;
        }
    }

    if tick > 0 {
        ratio = U256::MAX / ratio;
    }
    ratio >> 32u32
}

/// Returns the greatest in-bound tick whose sqrt-price is `<= sqrt_price`.
pub(crate) fn tick_at_sqrt_price(sqrt_price: U256) -> i32 {
    let (mut low, mut high) = (MIN_TICK, MAX_TICK);
    while low < high {
        let mid = low + (high - low + 1) / 2;
        if sqrt_price_at_tick(mid) <= sqrt_price {
            low = mid;
        } else {
            high = mid - 1;
        }
    }
    low
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::constants::{MAX_SQRT_PRICE, MIN_SQRT_PRICE, Q96};

    fn dec(s: &str) -> U256 {
        U256::from_dec_str(s).unwrap_or_default()
    }

    #[test]
    fn tick_zero_is_q96() {
        assert_eq!(sqrt_price_at_tick(0), Q96);
    }

    #[test]
    fn known_ticks() {
        let cases = [
            (1, "79232123823359799118286999567"),
            (-1, "79224201403219477170569942573"),
            (100, "79625275426524748796330556127"),
            (-100, "78833030112140176575862854578"),
            (1000, "83290069058676223003182343269"),
            (-1000, "75364347830767020784054125654"),
            (84_222, "5341283623238412454227108479222"),
            (85_176, "5602223755577321903022134995688"),
            (86_129, "5875617940067453351001625213168"),
        ];
        for (tick, expected) in cases {
            assert_eq!(sqrt_price_at_tick(tick), dec(expected), "tick {tick}");
        }
    }

    #[test]
    fn bounds_match_constants() {
        assert_eq!(sqrt_price_at_tick(MIN_TICK), MIN_SQRT_PRICE);
        assert_eq!(sqrt_price_at_tick(MAX_TICK), MAX_SQRT_PRICE);
    }

    #[test]
    fn table_sits_above_exact_floor_at_high_ticks() {
        // exact floors computed at 120 significant digits
        let exact_400k = dec("38400329974042030913961448288716136753");
        assert_eq!(sqrt_price_at_tick(400_000) - exact_400k, U256::from(26_425_710u64));
        let exact_max = dec("1461446703485210103244672773810124308346321380902");
        assert!(MAX_SQRT_PRICE > exact_max);
        // (table - exact) / exact < 5e-20
        assert!((MAX_SQRT_PRICE - exact_max) * U256::from(20_000_000_000_000_000_000u128) < exact_max);
    }

    #[test]
    fn strictly_increasing_near_extremes() {
        for t in [MIN_TICK, -1, 0, MAX_TICK - 1] {
            assert!(sqrt_price_at_tick(t) < sqrt_price_at_tick(t + 1), "tick {t}");
        }
    }

    #[test]
    fn tick_at_exact_sqrt_price() {
        for t in [MIN_TICK, -85_176, -1, 0, 1, 85_176, MAX_TICK] {
            assert_eq!(tick_at_sqrt_price(sqrt_price_at_tick(t)), t);
        }
    }

    #[test]
    fn tick_at_sqrt_price_floors() {
        let at = sqrt_price_at_tick(85_176);
        assert_eq!(tick_at_sqrt_price(at - U256::one()), 85_175);
        assert_eq!(tick_at_sqrt_price(at + U256::one()), 85_176);
    }
}
