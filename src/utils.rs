// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Utility Functions** - *Precondition Checks for Scan Kernels*
//!
//! Validation helpers shared by the kernel entry points. These run once per
//! call, before any data is touched, so the hot loops stay bounds-check free
//! of argument errors.

use crate::errors::KernelError;
use crate::kernels::scan::words_for;

/// Validates that a match vector holds enough words for `rows` column rows.
///
/// A short match vector would silently drop filter results, so it is
/// rejected before any word is written.
///
/// # Parameters
/// - `label`: Descriptive context label for error reporting
/// - `words`: Word length of the caller-supplied match vector
/// - `rows`: Number of column rows the call covers
///
/// # Returns
/// `Ok(())` when the capacity suffices, otherwise `KernelError::InvalidArguments`.
#[inline(always)]
pub fn confirm_match_capacity(label: &str, words: usize, rows: usize) -> Result<(), KernelError> {
    let needed = words_for(rows);
    if words < needed {
        return Err(KernelError::InvalidArguments(format!(
            "{}: match vector too short (need {} words for {} rows, got {})",
            label, needed, rows, words
        )));
    }
    Ok(())
}

/// Validates that a requested word count lies within the supplied buffer.
#[inline(always)]
pub fn confirm_word_length(label: &str, requested: usize, actual: usize) -> Result<(), KernelError> {
    if requested > actual {
        return Err(KernelError::OutOfBounds(format!(
            "{}: word length {} exceeds match vector length {}",
            label, requested, actual
        )));
    }
    Ok(())
}
