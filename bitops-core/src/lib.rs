//! # bitops-core: Bit-Exact Integer Primitives for Instruction-Set Emulation
//!
//! `bitops-core` is a `no_std`, allocation-free library of the arithmetic
//! micro-operations an interpreter or JIT calls on every decoded instruction:
//! immediate sign extension, bit-field extraction and insertion, bit tests,
//! leading-zero counts, power-of-two rounding, rotates, byte-swaps and the
//! upper half of 64×64→128-bit multiplies.
//!
//! ## Overview
//!
//! Every function is pure and `#[inline(always)]`. Results match what real
//! hardware produces for the corresponding instruction:
//!
//! 1. **Two's-complement semantics** - signed results wrap exactly like a
//!    register of the given width
//! 2. **Modular arithmetic** - no saturation, no panics on overflow
//! 3. **Bit-exact multiply-high** - `MULH`, `MULHU` and `MULHSU` agree with a
//!    true 128-bit product for every input
//!
//! ## Quick Start
//!
//! ```
//! use bitops_core::{bit_extract, mulhu, sign_extend};
//!
//! // I-type immediate: bits [31:20] of the instruction word
//! let insn: u64 = 0xFFF0_0093; // addi x1, x0, -1
//! let imm = sign_extend(bit_extract(insn, 20, 12), 12);
//! assert_eq!(imm, -1);
//!
//! assert_eq!(mulhu(u64::MAX, u64::MAX), 0xFFFF_FFFF_FFFF_FFFE);
//! ```
//!
//! ## Argument Domain
//!
//! Bit counts and positions are [`BitCount`] values. A field `(pos, bits)`
//! must satisfy `pos + bits <= width`, a single bit position `pos < width`,
//! and a sign-extension width `1 <= bits <= width`. Out-of-range counts trip a
//! `debug_assert!`. Release builds never invoke undefined behavior: shift
//! amounts wrap modulo the word width the same way x86 and RISC-V shifters
//! do, so the result is deterministic but unspecified.
//!
//! ## Native and Portable Paths
//!
//! By default the operations lower to native instructions (`lzcnt`, `bswap`,
//! `rbit`, `ror`) and to Rust's 128-bit multiply. Enabling the `portable`
//! feature selects the SWAR and 32-bit decomposition fallbacks from
//! [`intrinsics::portable`] at compile time. Both paths are always compiled
//! into [`intrinsics::portable`] so they can be cross-checked on any target.

#![no_std]
#![deny(missing_docs)]

// =============================================================================
// Module Declarations
// =============================================================================

/// Bit-field, sign-extension, rotate and multiply-high primitives.
pub mod intrinsics;

// =============================================================================
// Core Types
// =============================================================================

/// A bit position or field width inside a 32- or 64-bit word.
pub type BitCount = u32;

// =============================================================================
// Convenience Re-exports (Clean Public API)
// =============================================================================

// Bit fields
pub use intrinsics::{bit_extract, bit_mask, bit_replace, bit_test};

// Sign extension and normalization
pub use intrinsics::{
    bit_length, checked_next_pow2, leading_zero_count, leading_zero_count32, next_pow2,
    sign_extend, sign_extend32,
};

// Rotates and byte-swaps
pub use intrinsics::{
    byteswap32, byteswap64, reverse_bits, rotate_left_32, rotate_left_64, rotate_right_32,
    rotate_right_64,
};

// Multiply-high
pub use intrinsics::{mulh, mulh32, mulhsu, mulhsu32, mulhu, mulhu32};
