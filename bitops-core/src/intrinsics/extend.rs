// =============================================================================
// Sign Extension and Normalization
// =============================================================================
//
// Immediate sign extension, power-of-two rounding and leading-zero counts.

use crate::BitCount;

#[cfg(feature = "portable")]
use super::portable;

/// Sign-extend the low `bits` bits of `val` into an `i64`.
///
/// The low `bits` bits are read as a two's-complement value of that width.
/// `bits` ranges over `[1, 64]`; `bits == 64` reinterprets `val` unchanged.
///
/// ```
/// use bitops_core::sign_extend;
///
/// assert_eq!(sign_extend(0xFFFFF, 20), -1);
/// assert_eq!(sign_extend(0x7FFFF, 20), 0x7FFFF);
/// ```
#[inline(always)]
pub fn sign_extend(val: u64, bits: BitCount) -> i64 {
    debug_assert!((1..=64).contains(&bits), "sign width {} out of range", bits);
    let shift = 64u32.wrapping_sub(bits);
    (val.wrapping_shl(shift) as i64).wrapping_shr(shift)
}

/// Sign-extend the low `bits` bits of `val` into an `i32`.
#[inline(always)]
pub fn sign_extend32(val: u32, bits: BitCount) -> i32 {
    debug_assert!((1..=32).contains(&bits), "sign width {} out of range", bits);
    let shift = 32u32.wrapping_sub(bits);
    (val.wrapping_shl(shift) as i32).wrapping_shr(shift)
}

/// Round `val` up to the nearest power of two.
///
/// Powers of two pass through unchanged, and so does 0. Values above `2^63`
/// have no 64-bit power of two above them: the increment wraps and the result
/// is 0, matching the hardware add. Use [`checked_next_pow2`] to detect it.
#[inline(always)]
pub fn next_pow2(val: u64) -> u64 {
    if val & val.wrapping_sub(1) == 0 {
        return val;
    }
    let mut x = val - 1;
    x |= x >> 1;
    x |= x >> 2;
    x |= x >> 4;
    x |= x >> 8;
    x |= x >> 16;
    x |= x >> 32;
    x.wrapping_add(1)
}

/// Round `val` up to the nearest power of two, or `None` if it would wrap.
#[inline(always)]
pub fn checked_next_pow2(val: u64) -> Option<u64> {
    match next_pow2(val) {
        0 if val != 0 => None,
        p => Some(p),
    }
}

/// Count leading zero bits of a 64-bit value. Returns 64 for zero.
#[inline(always)]
pub fn leading_zero_count(val: u64) -> BitCount {
    #[cfg(not(feature = "portable"))]
    {
        val.leading_zeros()
    }
    #[cfg(feature = "portable")]
    {
        portable::leading_zero_count(val)
    }
}

/// Count leading zero bits of a 32-bit value. Returns 32 for zero.
#[inline(always)]
pub fn leading_zero_count32(val: u32) -> BitCount {
    #[cfg(not(feature = "portable"))]
    {
        val.leading_zeros()
    }
    #[cfg(feature = "portable")]
    {
        portable::leading_zero_count32(val)
    }
}

/// Number of significant bits in `val`: one plus the index of the highest
/// set bit, or 0 for zero.
///
/// `bit_length(x) - 1` is `floor(log2(x))` for nonzero `x`.
#[inline(always)]
pub fn bit_length(val: u64) -> BitCount {
    64 - leading_zero_count(val)
}
