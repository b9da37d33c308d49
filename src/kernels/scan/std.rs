// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Scan Scalar Kernels** - *Word-Level Fallback Comparison*
//!
//! Scalar implementations of the scan kernels for builds without the `simd`
//! feature. Each 64-element block is still folded into a single match word
//! before combination, so the match-vector contract (one read-modify-write
//! per word, bits beyond the column length untouched) is identical to the
//! vectorised path; only the per-element comparison is sequential.

use crate::kernels::scan::{combine_word, compare_tail, matches_scalar, Word, WORD_BITS};

/// Compares every column byte against `value` and combines the result bits
/// into the match vector, one element at a time.
///
/// Observable semantics match `where_compare_simd` exactly; one
/// instantiation exists per operator/combine/signedness combination so the
/// loop body is a single direct comparison after monomorphisation.
pub fn where_compare_std<const UNSIGNED: bool, const OP: u8, const COMBINE: u8>(
    column: &[u8],
    value: u8,
    match_vector: &mut [Word],
) {
    let len = column.len();

    // Whole 64-element blocks, one word each
    let block_len = len - (len & (WORD_BITS - 1));
    let mut i = 0;
    while i < block_len {
        let mut mask: Word = 0;
        for bit in 0..WORD_BITS {
            if matches_scalar::<UNSIGNED, OP>(column[i + bit], value) {
                mask |= 1u64 << bit;
            }
        }
        combine_word::<COMBINE>(&mut match_vector[i >> 6], mask);
        i += WORD_BITS;
    }

    // Match remaining values individually
    compare_tail::<UNSIGNED, OP, COMBINE>(column, block_len, value, match_vector);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernels::scan::{
        words_for, COMBINE_AND, COMBINE_AND_NOT, COMBINE_OR, OP_EQ, OP_GE, OP_GT, OP_LE, OP_LT,
        OP_NE,
    };

    fn column(len: usize) -> Vec<u8> {
        (0..len).map(|i| (i.wrapping_mul(37).wrapping_add(11) % 256) as u8).collect()
    }

    fn bit(mv: &[u64], row: usize) -> bool {
        (mv[row >> 6] >> (row & 63)) & 1 == 1
    }

    fn check_op<const UNSIGNED: bool, const OP: u8>(len: usize, value: u8) {
        let col = column(len);
        let mut mv = vec![0u64; words_for(len)];
        where_compare_std::<UNSIGNED, OP, COMBINE_OR>(&col, value, &mut mv);
        for (row, &x) in col.iter().enumerate() {
            assert_eq!(
                bit(&mv, row),
                matches_scalar::<UNSIGNED, OP>(x, value),
                "len {len} row {row}"
            );
        }
    }

    #[test]
    fn test_all_operators_unsigned() {
        for &len in &[0usize, 1, 63, 64, 65, 127, 128, 200] {
            for &value in &[0u8, 17, 128, 255] {
                check_op::<true, OP_EQ>(len, value);
                check_op::<true, OP_NE>(len, value);
                check_op::<true, OP_LT>(len, value);
                check_op::<true, OP_LE>(len, value);
                check_op::<true, OP_GT>(len, value);
                check_op::<true, OP_GE>(len, value);
            }
        }
    }

    #[test]
    fn test_all_operators_signed() {
        for &value in &[0u8, 0x7F, 0x80, 0xFF] {
            check_op::<false, OP_LT>(130, value);
            check_op::<false, OP_GE>(130, value);
            check_op::<false, OP_EQ>(130, value);
            check_op::<false, OP_NE>(130, value);
            check_op::<false, OP_LE>(130, value);
            check_op::<false, OP_GT>(130, value);
        }
    }

    #[test]
    fn test_combine_modes() {
        let col = column(150);
        let words = words_for(col.len());

        let mut mv = vec![0u64; words];
        where_compare_std::<true, OP_GT, COMBINE_OR>(&col, 90, &mut mv);
        assert!(mv.iter().any(|&w| w != 0));
        where_compare_std::<true, OP_GT, COMBINE_AND_NOT>(&col, 90, &mut mv);
        assert!(mv.iter().all(|&w| w == 0));

        let mut mv = vec![!0u64; words];
        where_compare_std::<true, OP_LE, COMBINE_AND>(&col, 90, &mut mv);
        let first = mv.clone();
        where_compare_std::<true, OP_LE, COMBINE_AND>(&col, 90, &mut mv);
        assert_eq!(mv, first);
    }
}
