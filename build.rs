// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

use std::env;
use std::fs;
use std::path::Path;

/// True if `feature` is listed in comma-separated `CARGO_CFG_TARGET_FEATURE`
fn has_feature(list: &str, feature: &str) -> bool {
    list.split(',').any(|f| f == feature)
}

fn main() {
    // Target triple features supplied by `cargo` (`--print cfg`)
    let arch = env::var("CARGO_CFG_TARGET_ARCH").unwrap_or_default();
    let feats = env::var("CARGO_CFG_TARGET_FEATURE").unwrap_or_default();

    // The scan kernels touch exactly two element widths:
    // u8 column bytes (W8 lanes) and u64 match-vector words (W64 lanes).
    //
    // W8 must divide 64 so whole 64-element blocks assemble cleanly into
    // one output word; every value produced below satisfies that.

    // Allow override via environment variable
    // Format: SIMD_LANES_OVERRIDE="32,4" (byte lanes, word lanes)
    let override_lanes = env::var("SIMD_LANES_OVERRIDE").ok();

    let (w8, w64) = if let Some(val) = override_lanes {
        let parts: Vec<_> = val.split(',').map(|s| s.trim().parse::<usize>()).collect();
        if parts.len() == 2 && parts.iter().all(|r| r.is_ok()) {
            let vals: Vec<usize> = parts.into_iter().map(|r| r.unwrap()).collect();
            if 64 % vals[0] != 0 {
                panic!("Invalid SIMD_LANES_OVERRIDE: byte lane count must divide 64");
            }
            println!("cargo:warning=SIMD_LANES_OVERRIDE applied: {:?}", vals);
            (vals[0], vals[1])
        } else {
            panic!(
                "Invalid SIMD_LANES_OVERRIDE. Expected 2 comma-separated integers, e.g., \"32,4\""
            );
        }
    } else {
        match arch.as_str() {
            // x86 / x86_64
            "x86_64" | "x86" => {
                if has_feature(&feats, "avx512f") {
                    (64, 8)
                }
                // 512-bit
                else if has_feature(&feats, "avx2") {
                    (32, 4)
                }
                // 256-bit
                else if has_feature(&feats, "sse2") {
                    (16, 2)
                }
                // 128-bit
                else {
                    (8, 1)
                } // scalar/soft
            }

            // 64-bit ARM
            // All aarch64 CPUs have NEON (128-bit) by spec; if it was
            // explicitly disabled via `-C target-feature=-neon`, fall back.
            "aarch64" => {
                if has_feature(&feats, "neon") {
                    (16, 2)
                } else {
                    (8, 1)
                }
            }

            // wasm32 with or without SIMD
            "wasm32" => {
                if has_feature(&feats, "simd128") {
                    (16, 2)
                } else {
                    (8, 1)
                }
            }

            // anything else
            _ => (8, 1),
        }
    };

    // Writes to a consts file included by the kernel modules at compile time
    let out_path = Path::new(&env::var("OUT_DIR").unwrap()).join("simd_lanes.rs");

    fs::write(
        &out_path,
        format!(
            "
/// Auto-generated SIMD lane widths from build.rs

/// SIMD lane count for 8-bit elements (column bytes).
/// Determined at build time based on target architecture capabilities,
/// or overridden via `SIMD_LANES_OVERRIDE`. Always divides 64.
#[allow(non_upper_case_globals)]
pub const W8: usize = {w8};

/// SIMD lane count for 64-bit elements (match-vector words).
/// Determined at build time based on target architecture capabilities,
/// or overridden via `SIMD_LANES_OVERRIDE`.
#[allow(non_upper_case_globals)]
pub const W64: usize = {w64};
"
        ),
    )
    .unwrap();

    println!("cargo:rerun-if-env-changed=CARGO_CFG_TARGET_ARCH");
    println!("cargo:rerun-if-env-changed=CARGO_CFG_TARGET_FEATURE");
    println!("cargo:rerun-if-env-changed=SIMD_LANES_OVERRIDE");
}
