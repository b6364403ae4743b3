// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Error Types** - *Reduction Error Handling*
//!
//! Error type shared by the reduction dispatcher and the kernels it calls.
//!
//! ## Error Categories
//! - **Descriptor Errors**: unsupported aggregation kinds and malformed payloads.
//!   These carry the aggregation kind so a misconfigured request can be diagnosed
//!   without looking at column contents.
//! - **Type Errors**: unsupported element types and failed scalar casts
//! - **Boundary Errors**: out-of-range indices and accumulator overflow
//!
//! Kernel failures propagate unchanged through the dispatcher; nothing is retried.

use core::fmt;
use std::error::Error;

use crate::operators::AggregationKind;

/// Error type for all reduction operations.
#[derive(Debug, Clone, PartialEq)]
pub enum KernelError {
    /// The aggregation kind has no whole-column reduction.
    UnsupportedOperation(AggregationKind),

    /// The descriptor payload is malformed for its kind.
    InvalidArgument {
        kind: AggregationKind,
        detail: String,
    },

    /// A value cannot be represented in the requested type.
    TypeMismatch(String),

    /// The element type is not supported by the requested kernel.
    UnsupportedType(String),

    /// Invalid arguments provided to a kernel function.
    InvalidArguments(String),

    /// Index outside the addressable range.
    OutOfBounds(String),

    /// Accumulator or result overflow.
    Overflow(String),
}

impl fmt::Display for KernelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KernelError::UnsupportedOperation(kind) => {
                write!(f, "Unsupported operation: {} is not a reduction", kind)
            }
            KernelError::InvalidArgument { kind, detail } => {
                write!(f, "Invalid argument for {}: {}", kind, detail)
            }
            KernelError::TypeMismatch(msg) => write!(f, "Type mismatch: {}", msg),
            KernelError::UnsupportedType(msg) => write!(f, "Unsupported type: {}", msg),
            KernelError::InvalidArguments(msg) => write!(f, "Invalid arguments: {}", msg),
            KernelError::OutOfBounds(msg) => write!(f, "Out of bounds: {}", msg),
            KernelError::Overflow(msg) => write!(f, "Overflow: {}", msg),
        }
    }
}

impl Error for KernelError {}
