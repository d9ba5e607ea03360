// =============================================================================
// Bit-Field Operations
// =============================================================================
//
// Masks, extraction and insertion of contiguous bit runs. Used by the decoder
// to pull opcode/register/immediate fields out of instruction words and by
// CSR emulation to update sub-fields in place.

use crate::BitCount;

/// Generate an `n`-bit all-ones mask.
///
/// `n` ranges over `[0, 64]`; `bit_mask(64)` is `u64::MAX`. The full-width
/// case is handled explicitly since `(1 << 64) - 1` overflows the shifter.
#[inline(always)]
pub fn bit_mask(n: BitCount) -> u64 {
    debug_assert!(n <= 64, "mask width {} exceeds 64", n);
    match n {
        64.. => u64::MAX,
        _ => (1u64 << n) - 1,
    }
}

/// Extract the `bits`-wide field of `val` starting at bit `pos`.
///
/// The field is returned shifted down to bit 0. Bit 0 is the least
/// significant bit.
#[inline(always)]
pub fn bit_extract(val: u64, pos: BitCount, bits: BitCount) -> u64 {
    debug_assert!(
        pos as u64 + bits as u64 <= 64,
        "field [{}; {}] exceeds 64 bits",
        pos,
        bits
    );
    val.checked_shr(pos).unwrap_or(0) & bit_mask(bits)
}

/// Replace the `bits`-wide field of `val` at `pos` with the low bits of `rep`.
///
/// Bits of `val` outside the field, and bits of `rep` above `bits`, do not
/// affect the result.
#[inline(always)]
pub fn bit_replace(val: u64, pos: BitCount, bits: BitCount, rep: u64) -> u64 {
    debug_assert!(
        pos as u64 + bits as u64 <= 64,
        "field [{}; {}] exceeds 64 bits",
        pos,
        bits
    );
    let mask = bit_mask(bits);
    let hole = mask.checked_shl(pos).unwrap_or(0);
    (val & !hole) | (rep & mask).checked_shl(pos).unwrap_or(0)
}

/// Check whether bit `pos` of `val` is set.
#[inline(always)]
pub fn bit_test(val: u64, pos: BitCount) -> bool {
    debug_assert!(pos < 64, "bit position {} out of range", pos);
    (val.wrapping_shr(pos) & 1) != 0
}
