// =============================================================================
// Intrinsics Module
// =============================================================================
//
// Bit-exact integer primitives for instruction emulation. Each public
// operation lowers to a native instruction by default; the `portable`
// feature swaps in the SWAR / 32-bit decomposition forms from `portable`.

/// Bit-field masks, extraction, replacement and single-bit tests.
pub mod field;

/// Sign extension, power-of-two rounding and leading-zero counts.
pub mod extend;

/// Rotates, bit reversal and byte-swaps.
pub mod rotate;

/// High half of double-width multiplication (`MULH`, `MULHU`, `MULHSU`).
pub mod wide_mul;

/// SWAR and 32-bit decomposition fallbacks, always compiled.
pub mod portable;

/// Kani formal verification proofs.
#[cfg(kani)]
mod kani_proofs;

// =============================================================================
// Public Re-exports
// =============================================================================

// Bit fields
pub use field::{bit_extract, bit_mask, bit_replace, bit_test};

// Sign extension and normalization
pub use extend::{
    bit_length, checked_next_pow2, leading_zero_count, leading_zero_count32, next_pow2,
    sign_extend, sign_extend32,
};

// Rotates and byte-swaps
pub use rotate::{
    byteswap32, byteswap64, reverse_bits, rotate_left_32, rotate_left_64, rotate_right_32,
    rotate_right_64,
};

// Multiply-high
pub use wide_mul::{mulh, mulh32, mulhsu, mulhsu32, mulhu, mulhu32};
