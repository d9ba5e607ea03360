// =============================================================================
// Rotates, Bit Reversal and Byte-Swaps
// =============================================================================
//
// Rotation counts are taken modulo the word width, like `ROL`/`ROR` and the
// RISC-V Zbb rotates. Byte-swaps convert between big- and little-endian.

use crate::BitCount;

#[cfg(feature = "portable")]
use super::portable;

/// Rotate a 32-bit value left by `bits mod 32`.
#[inline(always)]
pub fn rotate_left_32(val: u32, bits: BitCount) -> u32 {
    #[cfg(not(feature = "portable"))]
    {
        val.rotate_left(bits)
    }
    #[cfg(feature = "portable")]
    {
        portable::rotate_left_32(val, bits)
    }
}

/// Rotate a 64-bit value left by `bits mod 64`.
#[inline(always)]
pub fn rotate_left_64(val: u64, bits: BitCount) -> u64 {
    #[cfg(not(feature = "portable"))]
    {
        val.rotate_left(bits)
    }
    #[cfg(feature = "portable")]
    {
        portable::rotate_left_64(val, bits)
    }
}

/// Rotate a 32-bit value right by `bits mod 32`.
#[inline(always)]
pub fn rotate_right_32(val: u32, bits: BitCount) -> u32 {
    rotate_left_32(val, 32u32.wrapping_sub(bits & 31))
}

/// Rotate a 64-bit value right by `bits mod 64`.
#[inline(always)]
pub fn rotate_right_64(val: u64, bits: BitCount) -> u64 {
    rotate_left_64(val, 64u32.wrapping_sub(bits & 63))
}

/// Reverse the order of the low `bits` bits of `val`.
///
/// Bit 0 swaps with bit `bits - 1`; every bit above `bits` in the result is
/// zero. `bits` ranges over `[0, 64]`.
///
/// ```
/// use bitops_core::reverse_bits;
///
/// assert_eq!(reverse_bits(0b1011, 4), 0b1101);
/// ```
#[inline(always)]
pub fn reverse_bits(val: u64, bits: BitCount) -> u64 {
    debug_assert!(bits <= 64, "reverse width {} exceeds 64", bits);
    #[cfg(not(feature = "portable"))]
    {
        val.reverse_bits()
            .checked_shr(64u32.wrapping_sub(bits))
            .unwrap_or(0)
    }
    #[cfg(feature = "portable")]
    {
        portable::reverse_bits(val, bits)
    }
}

/// Swap the byte order of a 32-bit value.
#[inline(always)]
pub fn byteswap32(val: u32) -> u32 {
    #[cfg(not(feature = "portable"))]
    {
        val.swap_bytes()
    }
    #[cfg(feature = "portable")]
    {
        portable::byteswap32(val)
    }
}

/// Swap the byte order of a 64-bit value.
#[inline(always)]
pub fn byteswap64(val: u64) -> u64 {
    #[cfg(not(feature = "portable"))]
    {
        val.swap_bytes()
    }
    #[cfg(feature = "portable")]
    {
        portable::byteswap64(val)
    }
}
