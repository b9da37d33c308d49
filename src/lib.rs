// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under the Mozilla Public License (MPL) 2.0.
// See LICENSE for details.

// At the time of writing this unlocks extra std::simd that the developers
// intend on stabilising but haven't yet.
// This includes the portable lane abstractions the scan kernels are built on.
#![feature(portable_simd)]

// compile with RUSTFLAGS="-C target-cpu=native" cargo +nightly build

pub mod operators;

pub mod kernels {
    pub mod matchvec;
    pub mod scan;
}

pub mod errors;

pub mod utils;
