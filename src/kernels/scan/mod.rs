// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Scan Kernels Module** - *Predicate Evaluation to Bit-Packed Match Vectors*
//!
//! Data-parallel comparison of a byte column against a scalar value, producing
//! one result bit per row and merging it into a caller-owned match vector.
//!
//! ## Architecture
//!
//! The scan module follows a three-tier architecture:
//! - **Dispatch layer**: lowers the runtime operator selectors to monomorphised
//!   code paths, one per operator/combine/signedness combination
//! - **SIMD kernels**: vectorised block comparison using `std::simd` with
//!   build-time lane counts, packing lane-group masks into 64-bit words
//! - **Scalar kernels**: word-at-a-time fallback implementations with
//!   identical observable semantics
//!
//! ## Operator reduction
//!
//! The block comparator exposes two lane primitives, greater-than and
//! equality. The six comparison operators reduce onto them:
//! - `GreaterThan`: `gt(block, value)`
//! - `LessThan`: `gt(value, block)` (operand swap)
//! - `Equals`: `eq(block, value)`
//! - `LessThanOrEqualTo`, `GreaterThanOrEqualTo`, `NotEquals`: bitwise
//!   complement of the word produced for `GreaterThan`, `LessThan`, `Equals`
//!
//! The final partial block is evaluated element-by-element with direct
//! comparisons instead (see [`compare_tail`]).
//!
//! ## Match vector layout
//!
//! Bit `b` of word `w` covers row `w * 64 + b` (LSB-first). Bits at
//! positions at or beyond the column length are never modified; the tail
//! combine runs under a validity mask so chained filters cannot disturb
//! them. Each word is read-modify-written exactly once per call, so word
//! order is immaterial and callers may shard disjoint word ranges.

pub mod dispatch;
#[cfg(feature = "simd")]
pub mod simd;
#[cfg(not(feature = "simd"))]
pub mod std;

use core::mem;

/// Fundamental word type of the match vector.
///
/// All mask production and combination is performed on 64-bit words,
/// matching native register width on x86-64 and AArch64.
pub type Word = u64;

/// Number of bits in a `Word`, i.e. column elements per match-vector word.
pub const WORD_BITS: usize = mem::size_of::<Word>() * 8;

/// Bias mapping the natural 0–255 byte ordering onto the two's-complement
/// ordering evaluated by the signed comparison primitives. XOR-ing a byte
/// with this value is equivalent to subtracting the minimum signed value.
pub const SIGN_BIAS: u8 = 0x80;

/// Helper to compute number of u64 words required for a match vector
/// covering `rows` column rows.
#[inline(always)]
pub fn words_for(rows: usize) -> usize {
    (rows + WORD_BITS - 1) / WORD_BITS
}

// Comparison operator selectors for the monomorphised kernels.
// `OP_GT`/`OP_LT`/`OP_EQ` map onto the two lane primitives (with operand
// swap for `OP_LT`); the other three are their word complements.

/// Selector for `Equals` kernel instantiations.
pub const OP_EQ: u8 = 0;
/// Selector for `NotEquals` kernel instantiations.
pub const OP_NE: u8 = 1;
/// Selector for `LessThan` kernel instantiations.
pub const OP_LT: u8 = 2;
/// Selector for `LessThanOrEqualTo` kernel instantiations.
pub const OP_LE: u8 = 3;
/// Selector for `GreaterThan` kernel instantiations.
pub const OP_GT: u8 = 4;
/// Selector for `GreaterThanOrEqualTo` kernel instantiations.
pub const OP_GE: u8 = 5;

/// Selector for `And` combine instantiations.
pub const COMBINE_AND: u8 = 0;
/// Selector for `AndNot` combine instantiations.
pub const COMBINE_AND_NOT: u8 = 1;
/// Selector for `Or` combine instantiations.
pub const COMBINE_OR: u8 = 2;

/// Merges a freshly computed mask word into a match-vector word.
///
/// This is the only mutation point of the match vector for full blocks.
/// `COMBINE` is resolved at monomorphisation time, so no per-word branching
/// on the combine mode survives into the generated code.
#[inline(always)]
pub fn combine_word<const COMBINE: u8>(dst: &mut Word, mask: Word) {
    match COMBINE {
        COMBINE_AND => *dst &= mask,
        COMBINE_AND_NOT => *dst &= !mask,
        _ => *dst |= mask,
    }
}

/// Merges a partial mask word under a validity mask.
///
/// Only bit positions set in `valid` are combined; all other bits of the
/// destination word are preserved verbatim. Used for the final partial
/// word so bits covering rows beyond the column length stay untouched.
#[inline(always)]
pub fn combine_word_masked<const COMBINE: u8>(dst: &mut Word, mask: Word, valid: Word) {
    let prior = *dst;
    let merged = match COMBINE {
        COMBINE_AND => prior & mask,
        COMBINE_AND_NOT => prior & !mask,
        _ => prior | mask,
    };
    *dst = (prior & !valid) | (merged & valid);
}

/// Evaluates the predicate for a single element with a direct comparison.
///
/// Each instantiation compiles down to one comparison in the selected
/// byte-ordering domain; no operator reduction is involved on this path.
#[inline(always)]
pub fn matches_scalar<const UNSIGNED: bool, const OP: u8>(element: u8, value: u8) -> bool {
    if UNSIGNED {
        match OP {
            OP_EQ => element == value,
            OP_NE => element != value,
            OP_LT => element < value,
            OP_LE => element <= value,
            OP_GT => element > value,
            OP_GE => element >= value,
            _ => unreachable!(),
        }
    } else {
        let (element, value) = (element as i8, value as i8);
        match OP {
            OP_EQ => element == value,
            OP_NE => element != value,
            OP_LT => element < value,
            OP_LE => element <= value,
            OP_GT => element > value,
            OP_GE => element >= value,
            _ => unreachable!(),
        }
    }
}

/// Evaluates the final partial block element-by-element and combines the
/// resulting partial word into the last match-vector word.
///
/// `block_len` is the number of rows already covered by whole 64-element
/// blocks; the remaining `column.len() - block_len` rows (0–63 of them)
/// are matched individually at bit index `row % 64`. Performs no work when
/// the column length is an exact multiple of 64.
#[inline(always)]
pub fn compare_tail<const UNSIGNED: bool, const OP: u8, const COMBINE: u8>(
    column: &[u8],
    block_len: usize,
    value: u8,
    match_vector: &mut [Word],
) {
    let len = column.len();
    debug_assert!(block_len % WORD_BITS == 0, "tail must start on a word boundary");
    debug_assert!(len - block_len < WORD_BITS, "tail longer than one word");
    if block_len == len {
        return;
    }
    let mut mask: Word = 0;
    for row in block_len..len {
        if matches_scalar::<UNSIGNED, OP>(column[row], value) {
            mask |= 1u64 << (row & (WORD_BITS - 1));
        }
    }
    let valid = (1u64 << (len & (WORD_BITS - 1))) - 1;
    combine_word_masked::<COMBINE>(&mut match_vector[block_len >> 6], mask, valid);
}
