// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Match Vector Kernels** - *Reductions over Bit-Packed Match Vectors*
//!
//! Read-only reductions over the match vectors produced by the scan
//! kernels. The population count reports how many rows survive an
//! accumulated filter, which drives selectivity estimates and final row
//! counts in the surrounding engine.
//!
//! The SIMD path counts set bits across `W64` words per iteration with a
//! lane-wise popcount and horizontal reduction; the scalar path uses the
//! native per-word popcount. Both accumulate into a `u64`, so vectors
//! covering billions of rows cannot overflow the count.

include!(concat!(env!("OUT_DIR"), "/simd_lanes.rs"));

#[cfg(feature = "simd")]
use core::simd::Simd;
#[cfg(feature = "simd")]
use std::simd::num::SimdUint;

use crate::errors::KernelError;
use crate::kernels::scan::Word;
use crate::utils::confirm_word_length;

/// Returns the number of set bits across the first `word_len` words of a
/// match vector.
///
/// Counts whole words; callers tracking a row count must have left bits at
/// positions at or beyond the row count unset (the scan kernels never touch
/// them). A zero `word_len` returns 0.
///
/// # Errors
/// `KernelError::OutOfBounds` when `word_len` exceeds the supplied slice.
#[inline(always)]
pub fn popcount_match_vector(match_vector: &[Word], word_len: usize) -> Result<u64, KernelError> {
    confirm_word_length("popcount_match_vector", word_len, match_vector.len())?;
    #[cfg(feature = "simd")]
    {
        Ok(popcount_words_simd::<W64>(&match_vector[..word_len]))
    }
    #[cfg(not(feature = "simd"))]
    {
        Ok(popcount_words(&match_vector[..word_len]))
    }
}

/// Count of set bits over the given words using the native popcount
/// instruction, one word at a time.
#[cfg(not(feature = "simd"))]
#[inline]
pub fn popcount_words(words: &[Word]) -> u64 {
    let mut acc = 0u64;
    for &word in words {
        acc += word.count_ones() as u64;
    }
    acc
}

/// Count of set bits over the given words using lane-wise popcount with
/// SIMD reduction, with a scalar loop for the trailing words.
#[cfg(feature = "simd")]
#[inline]
pub fn popcount_words_simd<const LANES: usize>(words: &[Word]) -> u64 {
    let mut acc = 0u64;
    let mut i = 0;
    while i + LANES <= words.len() {
        let v = Simd::<u64, LANES>::from_slice(&words[i..i + LANES]);
        acc += v.count_ones().reduce_sum();
        i += LANES;
    }
    // Tail often caused by `n % LANES != 0`; uses scalar fallback.
    for &word in &words[i..] {
        acc += word.count_ones() as u64;
    }
    acc
}
