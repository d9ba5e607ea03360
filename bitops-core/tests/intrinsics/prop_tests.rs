//! Property-based tests for bitops-core intrinsics module.
//!
//! Uses proptest to verify algebraic properties and bit-exactness against
//! independent reference models across random inputs.

#[path = "../common/mod.rs"]
mod common;

use common::{ref_mulh, ref_mulhsu, ref_mulhu};
use proptest::prelude::*;

/// A field `(pos, bits)` with `pos + bits <= 64`.
fn field() -> impl Strategy<Value = (u32, u32)> {
    (0u32..=64).prop_flat_map(|pos| (Just(pos), 0u32..=(64 - pos)))
}

proptest! {
    // =========================================================================
    // field.rs properties
    // =========================================================================

    #[test]
    fn prop_replace_then_extract(val in any::<u64>(), rep in any::<u64>(), (pos, bits) in field()) {
        use bitops_core::{bit_extract, bit_mask, bit_replace};

        let out = bit_replace(val, pos, bits, rep);
        prop_assert_eq!(bit_extract(out, pos, bits), rep & bit_mask(bits));
    }

    #[test]
    fn prop_replace_preserves_outside(val in any::<u64>(), rep in any::<u64>(), (pos, bits) in field()) {
        use bitops_core::{bit_mask, bit_replace};

        let hole = bit_mask(bits).checked_shl(pos).unwrap_or(0);
        let out = bit_replace(val, pos, bits, rep);
        prop_assert_eq!(out & !hole, val & !hole, "bits outside the field must not change");
    }

    #[test]
    fn prop_extract_fits_width(val in any::<u64>(), (pos, bits) in field()) {
        use bitops_core::{bit_extract, bit_mask};

        prop_assert_eq!(bit_extract(val, pos, bits) & !bit_mask(bits), 0);
    }

    #[test]
    fn prop_bit_test_agrees_with_extract(val in any::<u64>(), pos in 0u32..64) {
        use bitops_core::{bit_extract, bit_test};

        prop_assert_eq!(bit_test(val, pos), bit_extract(val, pos, 1) == 1);
    }

    // =========================================================================
    // extend.rs properties
    // =========================================================================

    #[test]
    fn prop_sign_extend_matches_arithmetic(val in any::<u64>(), bits in 1u32..=64) {
        use bitops_core::{bit_extract, sign_extend};

        // Reference: subtract 2^bits when the sign bit of the field is set
        let field = bit_extract(val, 0, bits) as i128;
        let expected = if field >> (bits - 1) & 1 == 1 { field - (1i128 << bits) } else { field };
        prop_assert_eq!(sign_extend(val, bits) as i128, expected);
    }

    #[test]
    fn prop_sign_extend_idempotent(val in any::<u64>(), bits in 1u32..=64) {
        use bitops_core::sign_extend;

        let once = sign_extend(val, bits);
        prop_assert_eq!(sign_extend(once as u64, bits), once);
    }

    #[test]
    fn prop_next_pow2_is_smallest(val in 1u64..=(1u64 << 63)) {
        use bitops_core::next_pow2;

        let p = next_pow2(val);
        prop_assert!(p.is_power_of_two());
        prop_assert!(p >= val);
        prop_assert!(p == 1 || p / 2 < val, "a smaller power of two would also fit");
        prop_assert_eq!(p, val.next_power_of_two());
    }

    #[test]
    fn prop_next_pow2_wraps_past_top(val in ((1u64 << 63) + 1)..=u64::MAX) {
        use bitops_core::{checked_next_pow2, next_pow2};

        prop_assert_eq!(next_pow2(val), 0);
        prop_assert_eq!(checked_next_pow2(val), None);
    }

    #[test]
    fn prop_clz_finds_highest_set_bit(x in 1u64..=u64::MAX) {
        use bitops_core::{bit_length, leading_zero_count};

        let lz = leading_zero_count(x);
        prop_assert!(lz < 64);
        prop_assert!(x & (1u64 << (63 - lz)) != 0, "bit below the zeros must be set");
        prop_assert_eq!(x >> (63 - lz), 1, "no bits may be set above it");
        prop_assert_eq!(bit_length(x), 64 - lz);
    }

    #[test]
    fn prop_portable_clz_matches_native(x in any::<u64>()) {
        use bitops_core::intrinsics::portable;

        prop_assert_eq!(portable::leading_zero_count(x), x.leading_zeros());
        prop_assert_eq!(portable::leading_zero_count32(x as u32), (x as u32).leading_zeros());
    }

    // =========================================================================
    // rotate.rs properties
    // =========================================================================

    #[test]
    fn prop_rotate_preserves_popcount(x in any::<u64>(), n in any::<u32>()) {
        use bitops_core::{rotate_left_32, rotate_left_64};

        prop_assert_eq!(rotate_left_64(x, n).count_ones(), x.count_ones());
        prop_assert_eq!(rotate_left_32(x as u32, n).count_ones(), (x as u32).count_ones());
    }

    #[test]
    fn prop_rotate_matches_std(x in any::<u64>(), n in 0u32..64) {
        use bitops_core::{rotate_left_32, rotate_left_64, rotate_right_32, rotate_right_64};

        prop_assert_eq!(rotate_left_64(x, n), x.rotate_left(n));
        prop_assert_eq!(rotate_right_64(x, n), x.rotate_right(n));
        prop_assert_eq!(rotate_left_32(x as u32, n), (x as u32).rotate_left(n));
        prop_assert_eq!(rotate_right_32(x as u32, n), (x as u32).rotate_right(n));
    }

    #[test]
    fn prop_reverse_bits_involution(x in any::<u64>(), bits in 0u32..=64) {
        use bitops_core::{bit_extract, reverse_bits};

        // Reversing twice recovers the low field, with the rest cleared
        prop_assert_eq!(reverse_bits(reverse_bits(x, bits), bits), bit_extract(x, 0, bits));
    }

    #[test]
    fn prop_portable_reverse_matches_native(x in any::<u64>(), bits in 0u32..=64) {
        use bitops_core::intrinsics::portable;

        let expected = x.reverse_bits().checked_shr(64 - bits).unwrap_or(0);
        prop_assert_eq!(portable::reverse_bits(x, bits), expected);
    }

    #[test]
    fn prop_byteswap_involution(x in any::<u64>()) {
        use bitops_core::{byteswap32, byteswap64};

        prop_assert_eq!(byteswap64(byteswap64(x)), x);
        prop_assert_eq!(byteswap32(byteswap32(x as u32)), x as u32);
    }

    #[test]
    fn prop_byteswap_is_endian_conversion(x in any::<u64>()) {
        use bitops_core::{byteswap32, byteswap64};
        use bitops_core::intrinsics::portable;

        prop_assert_eq!(byteswap64(x), u64::from_be_bytes(x.to_le_bytes()));
        prop_assert_eq!(portable::byteswap64(x), u64::from_be_bytes(x.to_le_bytes()));
        let w = x as u32;
        prop_assert_eq!(byteswap32(w), u32::from_be_bytes(w.to_le_bytes()));
        prop_assert_eq!(portable::byteswap32(w), u32::from_be_bytes(w.to_le_bytes()));
    }

    // =========================================================================
    // wide_mul.rs properties
    // =========================================================================

    #[test]
    fn prop_mulhu_matches_bigint(a in any::<u64>(), b in any::<u64>()) {
        use bitops_core::intrinsics::portable;
        use bitops_core::mulhu;

        let expected = ref_mulhu(a, b);
        prop_assert_eq!(mulhu(a, b), expected);
        prop_assert_eq!(portable::mulhu(a, b), expected);
    }

    #[test]
    fn prop_mulh_matches_bigint(a in any::<i64>(), b in any::<i64>()) {
        use bitops_core::intrinsics::portable;
        use bitops_core::mulh;

        let expected = ref_mulh(a, b);
        prop_assert_eq!(mulh(a, b), expected);
        prop_assert_eq!(portable::mulh(a, b), expected);
    }

    #[test]
    fn prop_mulhsu_matches_bigint(a in any::<i64>(), b in any::<u64>()) {
        use bitops_core::intrinsics::portable;
        use bitops_core::mulhsu;

        let expected = ref_mulhsu(a, b);
        prop_assert_eq!(mulhsu(a, b), expected);
        prop_assert_eq!(portable::mulhsu(a, b), expected);
    }

    #[test]
    fn prop_mul_high_is_commutative(a in any::<i64>(), b in any::<i64>()) {
        use bitops_core::{mulh, mulhu};

        prop_assert_eq!(mulh(a, b), mulh(b, a));
        prop_assert_eq!(mulhu(a as u64, b as u64), mulhu(b as u64, a as u64));
    }

    #[test]
    fn prop_mulhsu_nonnegative_equals_mulhu(a in 0i64..=i64::MAX, b in any::<u64>()) {
        use bitops_core::{mulhsu, mulhu};

        // A non-negative signed operand has the same bits as the unsigned one
        prop_assert_eq!(mulhsu(a, b) as u64, mulhu(a as u64, b));
    }

    #[test]
    fn prop_mul_high_32_matches_widening(a in any::<u32>(), b in any::<u32>()) {
        use bitops_core::{mulh32, mulhsu32, mulhu32};

        prop_assert_eq!(mulhu32(a, b) as u64, (a as u64 * b as u64) >> 32);
        prop_assert_eq!(mulh32(a as i32, b as i32) as i64, (a as i32 as i64 * b as i32 as i64) >> 32);
        prop_assert_eq!(mulhsu32(a as i32, b) as i64, (a as i32 as i64 * b as i64) >> 32);
    }
}
