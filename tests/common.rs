//! Test helpers with scalar reference implementations
use scan_kernels::operators::{CombineOperator, CompareOperator, Signedness};

/// Reference predicate evaluation, written directly against the operator
/// definitions rather than the kernels' operator reduction.
pub fn reference_predicate(
    element: u8,
    value: u8,
    op: CompareOperator,
    signedness: Signedness,
) -> bool {
    match signedness {
        Signedness::Unsigned => match op {
            CompareOperator::Equals => element == value,
            CompareOperator::NotEquals => element != value,
            CompareOperator::LessThan => element < value,
            CompareOperator::LessThanOrEqualTo => element <= value,
            CompareOperator::GreaterThan => element > value,
            CompareOperator::GreaterThanOrEqualTo => element >= value,
        },
        Signedness::Signed => {
            let (element, value) = (element as i8, value as i8);
            match op {
                CompareOperator::Equals => element == value,
                CompareOperator::NotEquals => element != value,
                CompareOperator::LessThan => element < value,
                CompareOperator::LessThanOrEqualTo => element <= value,
                CompareOperator::GreaterThan => element > value,
                CompareOperator::GreaterThanOrEqualTo => element >= value,
            }
        }
    }
}

/// Bit-by-bit reference of the compare-and-combine operation.
pub fn reference_compare_and_combine(
    column: &[u8],
    value: u8,
    op: CompareOperator,
    combine: CombineOperator,
    signedness: Signedness,
    match_vector: &mut [u64],
) {
    for (row, &element) in column.iter().enumerate() {
        let hit = reference_predicate(element, value, op, signedness);
        let word = &mut match_vector[row / 64];
        let bit = 1u64 << (row % 64);
        let prior = *word & bit != 0;
        let next = match combine {
            CombineOperator::And => prior && hit,
            CombineOperator::AndNot => prior && !hit,
            CombineOperator::Or => prior || hit,
        };
        if next {
            *word |= bit;
        } else {
            *word &= !bit;
        }
    }
}

/// Reads bit `row` of a match vector.
pub fn bit(match_vector: &[u64], row: usize) -> bool {
    (match_vector[row / 64] >> (row % 64)) & 1 == 1
}

/// Every comparison operator, for exhaustive sweeps.
pub const ALL_COMPARE_OPS: [CompareOperator; 6] = [
    CompareOperator::Equals,
    CompareOperator::NotEquals,
    CompareOperator::LessThan,
    CompareOperator::LessThanOrEqualTo,
    CompareOperator::GreaterThan,
    CompareOperator::GreaterThanOrEqualTo,
];

/// Every combine operator, for exhaustive sweeps.
pub const ALL_COMBINE_OPS: [CombineOperator; 3] = [
    CombineOperator::And,
    CombineOperator::AndNot,
    CombineOperator::Or,
];
