// =============================================================================
// Multiply-High
// =============================================================================
//
// Upper half of a double-width product under the three sign conventions of
// the RISC-V M extension. The 64-bit forms use native 128-bit arithmetic by
// default and the 32-bit decomposition in `portable` with the `portable`
// feature. The 32-bit forms widen to 64 bits on every target.

#[cfg(feature = "portable")]
use super::portable;

/// High 64 bits of the signed×signed product `a * b` (`MULH`).
///
/// ```
/// use bitops_core::mulh;
///
/// assert_eq!(mulh(-1, -1), 0);
/// assert_eq!(mulh(i64::MIN, 2), -1);
/// ```
#[inline(always)]
pub fn mulh(a: i64, b: i64) -> i64 {
    #[cfg(not(feature = "portable"))]
    {
        ((a as i128 * b as i128) >> 64) as i64
    }
    #[cfg(feature = "portable")]
    {
        portable::mulh(a, b)
    }
}

/// High 64 bits of the unsigned×unsigned product `a * b` (`MULHU`).
#[inline(always)]
pub fn mulhu(a: u64, b: u64) -> u64 {
    #[cfg(not(feature = "portable"))]
    {
        ((a as u128 * b as u128) >> 64) as u64
    }
    #[cfg(feature = "portable")]
    {
        portable::mulhu(a, b)
    }
}

/// High 64 bits of the signed×unsigned product `a * b` (`MULHSU`).
#[inline(always)]
pub fn mulhsu(a: i64, b: u64) -> i64 {
    #[cfg(not(feature = "portable"))]
    {
        // |a·b| < 2^127, so the product always fits in i128
        ((a as i128 * b as i128) >> 64) as i64
    }
    #[cfg(feature = "portable")]
    {
        portable::mulhsu(a, b)
    }
}

/// High 32 bits of the signed×signed product `a * b` (RV32 `MULH`).
#[inline(always)]
pub fn mulh32(a: i32, b: i32) -> i32 {
    ((a as i64 * b as i64) >> 32) as i32
}

/// High 32 bits of the unsigned×unsigned product `a * b` (RV32 `MULHU`).
#[inline(always)]
pub fn mulhu32(a: u32, b: u32) -> u32 {
    ((a as u64 * b as u64) >> 32) as u32
}

/// High 32 bits of the signed×unsigned product `a * b` (RV32 `MULHSU`).
#[inline(always)]
pub fn mulhsu32(a: i32, b: u32) -> i32 {
    ((a as i64 * b as i64) >> 32) as i32
}
