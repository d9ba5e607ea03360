//! Kani formal verification proofs for the intrinsics module.
//!
//! These proofs check the portable fallbacks against native arithmetic and
//! the algebraic contracts the instruction interpreter relies on.
//!
//! Run with: `cargo kani --package bitops-core`

use super::{field, portable};

// ============================================================================
// Proof 1: SWAR leading zero count matches the native instruction
// ============================================================================
// File: portable.rs
// What: Prove smear + popcount equals u64::leading_zeros, including zero

/// Verify the portable 64-bit leading zero count for every input.
#[kani::proof]
fn verify_clz64_matches_native() {
    let x: u64 = kani::any();
    kani::assert(
        portable::leading_zero_count(x) == x.leading_zeros(),
        "SWAR clz must equal native clz",
    );
}

/// Verify the portable 32-bit leading zero count for every input.
#[kani::proof]
fn verify_clz32_matches_native() {
    let x: u32 = kani::any();
    kani::assert(
        portable::leading_zero_count32(x) == x.leading_zeros(),
        "SWAR clz32 must equal native clz",
    );
}

// ============================================================================
// Proof 2: 32-bit decomposition multiply-high is exact
// ============================================================================
// File: portable.rs
// What: Prove mulh/mulhu/mulhsu equal the top half of the 128-bit product

/// Verify unsigned multiply-high against u128.
#[kani::proof]
fn verify_mulhu_exact() {
    let a: u64 = kani::any();
    let b: u64 = kani::any();
    let expected = ((a as u128 * b as u128) >> 64) as u64;
    kani::assert(portable::mulhu(a, b) == expected, "mulhu must be exact");
}

/// Verify signed multiply-high against i128.
#[kani::proof]
fn verify_mulh_exact() {
    let a: i64 = kani::any();
    let b: i64 = kani::any();
    let expected = ((a as i128 * b as i128) >> 64) as i64;
    kani::assert(portable::mulh(a, b) == expected, "mulh must be exact");
}

/// Verify mixed-sign multiply-high against i128.
#[kani::proof]
fn verify_mulhsu_exact() {
    let a: i64 = kani::any();
    let b: u64 = kani::any();
    let expected = ((a as i128 * b as i128) >> 64) as i64;
    kani::assert(portable::mulhsu(a, b) == expected, "mulhsu must be exact");
}

// ============================================================================
// Proof 3: replace then extract recovers the field
// ============================================================================
// File: field.rs
// What: Prove extract(replace(v, p, b, r), p, b) == r & mask(b) on the domain

/// Verify bit_replace/bit_extract composition for every in-range field.
#[kani::proof]
fn verify_replace_extract() {
    let val: u64 = kani::any();
    let rep: u64 = kani::any();
    let pos: u32 = kani::any();
    let bits: u32 = kani::any();
    kani::assume(pos <= 64 && bits <= 64 - pos);

    let out = field::bit_replace(val, pos, bits, rep);
    kani::assert(
        field::bit_extract(out, pos, bits) == rep & field::bit_mask(bits),
        "extracted field must equal the replacement",
    );
}

// ============================================================================
// Proof 4: byte-swaps are involutions
// ============================================================================

/// Verify the lane-mask byte-swap equals swap_bytes and undoes itself.
#[kani::proof]
fn verify_byteswap64() {
    let x: u64 = kani::any();
    let swapped = portable::byteswap64(x);
    kani::assert(swapped == x.swap_bytes(), "byteswap64 must match swap_bytes");
    kani::assert(portable::byteswap64(swapped) == x, "byteswap64 must be an involution");
}

// ============================================================================
// Proof 5: bit reversal loop matches the native reversal
// ============================================================================

/// Verify the O(bits) loop against `reverse_bits` shifted down.
#[kani::proof]
#[kani::unwind(65)]
fn verify_reverse_bits() {
    let x: u64 = kani::any();
    let bits: u32 = kani::any();
    kani::assume(bits >= 1 && bits <= 64);
    let expected = x.reverse_bits() >> (64 - bits);
    kani::assert(
        portable::reverse_bits(x, bits) == expected,
        "bit loop must match native reversal",
    );
}
