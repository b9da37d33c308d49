// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Scan Dispatch Module** - *Per-Call Specialisation of the Scan Kernels*
//!
//! Entry point lowering the runtime operator selectors to monomorphised
//! kernel instantiations. The comparison operator, combine operator and
//! signedness are each resolved exactly once per call through staged
//! matches; the selected code path contains no per-element branching on any
//! of them. SIMD vs scalar selection follows the `simd` feature flag.
//!
//! Prefer this unless you want to access the underlying kernel functions directly.

include!(concat!(env!("OUT_DIR"), "/simd_lanes.rs"));

use crate::errors::KernelError;
use crate::kernels::scan::{
    Word, COMBINE_AND, COMBINE_AND_NOT, COMBINE_OR, OP_EQ, OP_GE, OP_GT, OP_LE, OP_LT, OP_NE,
};
use crate::operators::{CombineOperator, CompareOperator, Signedness};
use crate::utils::confirm_match_capacity;

/// Evaluates `predicate(column[row], value)` for every row and combines the
/// result into the caller-owned match vector.
///
/// Bit `row % 64` of word `row / 64` receives the combined result for each
/// `row < column.len()`; bits at positions at or beyond the column length
/// are left untouched. The match vector is the only thing mutated, and each
/// of its words is read-modify-written exactly once, so callers may shard
/// disjoint row ranges of a column across threads with disjoint word
/// subranges of one vector.
///
/// # Parameters
/// - `column`: contiguous column bytes, one element per row
/// - `value`: scalar compared against every element
/// - `op`: comparison operator to apply
/// - `combine`: how each fresh mask word merges into the match vector
/// - `signedness`: byte-ordering domain for the comparison
/// - `match_vector`: destination words, at least `ceil(column.len() / 64)` long
///
/// # Errors
/// `KernelError::InvalidArguments` when the match vector is too short for
/// the column. No words are written in that case; a silent no-op here would
/// corrupt the vector's meaning for downstream counting.
pub fn compare_and_combine(
    column: &[u8],
    value: u8,
    op: CompareOperator,
    combine: CombineOperator,
    signedness: Signedness,
    match_vector: &mut [Word],
) -> Result<(), KernelError> {
    confirm_match_capacity("compare_and_combine", match_vector.len(), column.len())?;
    match signedness {
        Signedness::Unsigned => with_op::<true>(column, value, op, combine, match_vector),
        Signedness::Signed => with_op::<false>(column, value, op, combine, match_vector),
    }
    Ok(())
}

/// Lowers the comparison operator to a kernel selector constant.
#[inline(always)]
fn with_op<const UNSIGNED: bool>(
    column: &[u8],
    value: u8,
    op: CompareOperator,
    combine: CombineOperator,
    match_vector: &mut [Word],
) {
    match op {
        CompareOperator::Equals => {
            with_combine::<UNSIGNED, OP_EQ>(column, value, combine, match_vector)
        }
        CompareOperator::NotEquals => {
            with_combine::<UNSIGNED, OP_NE>(column, value, combine, match_vector)
        }
        CompareOperator::LessThan => {
            with_combine::<UNSIGNED, OP_LT>(column, value, combine, match_vector)
        }
        CompareOperator::LessThanOrEqualTo => {
            with_combine::<UNSIGNED, OP_LE>(column, value, combine, match_vector)
        }
        CompareOperator::GreaterThan => {
            with_combine::<UNSIGNED, OP_GT>(column, value, combine, match_vector)
        }
        CompareOperator::GreaterThanOrEqualTo => {
            with_combine::<UNSIGNED, OP_GE>(column, value, combine, match_vector)
        }
    }
}

/// Lowers the combine operator, completing the selector set.
#[inline(always)]
fn with_combine<const UNSIGNED: bool, const OP: u8>(
    column: &[u8],
    value: u8,
    combine: CombineOperator,
    match_vector: &mut [Word],
) {
    match combine {
        CombineOperator::And => {
            run::<UNSIGNED, OP, COMBINE_AND>(column, value, match_vector)
        }
        CombineOperator::AndNot => {
            run::<UNSIGNED, OP, COMBINE_AND_NOT>(column, value, match_vector)
        }
        CombineOperator::Or => {
            run::<UNSIGNED, OP, COMBINE_OR>(column, value, match_vector)
        }
    }
}

/// Invokes the fully specialised kernel for one selector combination.
#[inline(always)]
fn run<const UNSIGNED: bool, const OP: u8, const COMBINE: u8>(
    column: &[u8],
    value: u8,
    match_vector: &mut [Word],
) {
    #[cfg(feature = "simd")]
    {
        crate::kernels::scan::simd::where_compare_simd::<W8, UNSIGNED, OP, COMBINE>(
            column,
            value,
            match_vector,
        )
    }
    #[cfg(not(feature = "simd"))]
    {
        crate::kernels::scan::std::where_compare_std::<UNSIGNED, OP, COMBINE>(
            column,
            value,
            match_vector,
        )
    }
}
