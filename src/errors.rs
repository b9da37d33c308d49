// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Error Types** - *Kernel Operation Error Handling*
//!
//! Error types for kernel operations with structured error reporting.
//! Provides context for debugging and error recovery in computational pipelines.
//!
//! ## Error Categories
//! - **Capacity Errors**: caller-supplied match vectors too short for the column
//! - **Boundary Errors**: requested word ranges exceeding the supplied buffer
//!
//! All errors include contextual message space for debugging.

use core::fmt;
use std::error::Error;

/// Error type for all scan kernel operations.
///
/// Each variant includes a contextual message string providing specific details
/// about the error condition, enabling precise debugging and error reporting.
#[derive(Debug, Clone)]
pub enum KernelError {
    /// Invalid arguments provided to a kernel function, such as a match
    /// vector with fewer words than the column length requires.
    InvalidArguments(String),

    /// Requested word range exceeds the supplied buffer.
    OutOfBounds(String),
}

impl fmt::Display for KernelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KernelError::InvalidArguments(msg) => write!(f, "Invalid arguments: {}", msg),
            KernelError::OutOfBounds(msg) => write!(f, "Out of bounds: {}", msg),
        }
    }
}

impl Error for KernelError {}
