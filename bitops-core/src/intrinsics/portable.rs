// =============================================================================
// Portable Fallbacks
// =============================================================================
//
// SWAR and 32-bit decomposition forms of the operations that normally lower
// to a single native instruction. Selected by the `portable` feature, and
// always available for cross-checking against the native path.

use crate::BitCount;

// =============================================================================
// Leading Zero Count (SWAR)
// =============================================================================

/// Population count of a 64-bit value (SWAR).
#[inline(always)]
pub fn popcount64(x: u64) -> BitCount {
    let mut x = x;
    x -= (x >> 1) & 0x5555_5555_5555_5555;
    x = ((x >> 2) & 0x3333_3333_3333_3333) + (x & 0x3333_3333_3333_3333);
    x = ((x >> 4) + x) & 0x0F0F_0F0F_0F0F_0F0F;
    x += x >> 8;
    x += x >> 16;
    x += x >> 32;
    (x & 0x7F) as BitCount
}

/// Count leading zeros by smearing the highest set bit downward and counting
/// the resulting ones.
///
/// Returns 64 for zero.
#[inline(always)]
pub fn leading_zero_count(val: u64) -> BitCount {
    let mut x = val;
    x |= x >> 1;
    x |= x >> 2;
    x |= x >> 4;
    x |= x >> 8;
    x |= x >> 16;
    x |= x >> 32;
    64 - popcount64(x)
}

/// 32-bit leading zero count. Returns 32 for zero.
#[inline(always)]
pub fn leading_zero_count32(val: u32) -> BitCount {
    let mut x = val;
    x |= x >> 1;
    x |= x >> 2;
    x |= x >> 4;
    x |= x >> 8;
    x |= x >> 16;
    32 - popcount64(x as u64)
}

// =============================================================================
// Rotates, Reversal, Byte-Swaps
// =============================================================================

/// Rotate left by `bits mod 32` using a pair of shifts.
#[inline(always)]
pub fn rotate_left_32(val: u32, bits: BitCount) -> u32 {
    (val << (bits & 31)) | (val >> (32u32.wrapping_sub(bits) & 31))
}

/// Rotate left by `bits mod 64` using a pair of shifts.
#[inline(always)]
pub fn rotate_left_64(val: u64, bits: BitCount) -> u64 {
    (val << (bits & 63)) | (val >> (64u32.wrapping_sub(bits) & 63))
}

/// Reverse the low `bits` bits of `val` one bit at a time.
#[inline(always)]
pub fn reverse_bits(val: u64, bits: BitCount) -> u64 {
    let mut val = val;
    let mut ret = 0u64;
    for _ in 0..bits.min(64) {
        ret = (ret << 1) | (val & 1);
        val >>= 1;
    }
    ret
}

/// Swap byte order of a 32-bit value with lane masks.
#[inline(always)]
pub fn byteswap32(val: u32) -> u32 {
    ((val & 0xFF00_0000) >> 24)
        | ((val & 0x00FF_0000) >> 8)
        | ((val & 0x0000_FF00) << 8)
        | ((val & 0x0000_00FF) << 24)
}

/// Swap byte order of a 64-bit value with lane masks.
#[inline(always)]
pub fn byteswap64(val: u64) -> u64 {
    ((val & 0xFF00_0000_0000_0000) >> 56)
        | ((val & 0x00FF_0000_0000_0000) >> 40)
        | ((val & 0x0000_FF00_0000_0000) >> 24)
        | ((val & 0x0000_00FF_0000_0000) >> 8)
        | ((val & 0x0000_0000_FF00_0000) << 8)
        | ((val & 0x0000_0000_00FF_0000) << 24)
        | ((val & 0x0000_0000_0000_FF00) << 40)
        | ((val & 0x0000_0000_0000_00FF) << 56)
}

// =============================================================================
// Multiply-High (32-bit Decomposition)
// =============================================================================

/// High 64 bits of an unsigned 64×64 product from four 32×32 partial products.
///
/// `cross` is bounded by `3·(2^32 - 1) + (2^32 - 1)^2 = 2^64 - 1`, so no
/// intermediate sum can carry out of 64 bits.
#[inline(always)]
pub fn mulhu(a: u64, b: u64) -> u64 {
    let (a_lo, a_hi) = (a & 0xFFFF_FFFF, a >> 32);
    let (b_lo, b_hi) = (b & 0xFFFF_FFFF, b >> 32);

    let lo_lo = a_lo * b_lo;
    let hi_lo = a_hi * b_lo;
    let lo_hi = a_lo * b_hi;
    let hi_hi = a_hi * b_hi;

    let cross = (lo_lo >> 32) + (hi_lo & 0xFFFF_FFFF) + lo_hi;
    (hi_lo >> 32) + (cross >> 32) + hi_hi
}

/// High 64 bits of a signed 64×64 product.
///
/// Reinterpreting a negative operand as unsigned adds `2^64` to it, which
/// adds the other operand to the high word. Subtracting it back (mod `2^64`)
/// for each negative operand yields the signed high word.
#[inline(always)]
pub fn mulh(a: i64, b: i64) -> i64 {
    let (ua, ub) = (a as u64, b as u64);
    let a_neg = (a >> 63) as u64;
    let b_neg = (b >> 63) as u64;
    mulhu(ua, ub)
        .wrapping_sub(a_neg & ub)
        .wrapping_sub(b_neg & ua) as i64
}

/// High 64 bits of a signed×unsigned 64×64 product.
#[inline(always)]
pub fn mulhsu(a: i64, b: u64) -> i64 {
    let a_neg = (a >> 63) as u64;
    mulhu(a as u64, b).wrapping_sub(a_neg & b) as i64
}
