// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Aggregation Dispatcher** - *Descriptor to Kernel Routing*
//!
//! Maps an [`Aggregation`] descriptor onto the matching [`ReductionKernels`]
//! capability. The match is exhaustive over the descriptor, so every payload is read
//! from its own variant and there is no runtime type recovery.
//!
//! The dispatcher adds no recovery logic: kernel errors propagate unchanged.

use crate::column::Column;
use crate::config::{MEDIAN_INTERPOLATION, MEDIAN_QUANTILE};
use crate::context::ExecContext;
use crate::errors::KernelError;
use crate::operators::{Aggregation, NanPolicy};
use crate::reduce::order_stats::extract_rank;
use crate::scalar::Scalar;
use crate::traits::kernels::ReductionKernels;
use crate::types::DataType;

/// Rejects malformed descriptor payloads.
///
/// Quantile descriptors must carry exactly one fraction, inside `[0, 1]`.
pub fn validate_descriptor(agg: &Aggregation) -> Result<(), KernelError> {
    if let Aggregation::Quantile { quantiles, .. } = agg {
        if quantiles.len() != 1 {
            return Err(KernelError::InvalidArgument {
                kind: agg.kind(),
                detail: format!("expected exactly one quantile value, got {}", quantiles.len()),
            });
        }
        let q = quantiles[0];
        if !(0.0..=1.0).contains(&q) {
            return Err(KernelError::InvalidArgument {
                kind: agg.kind(),
                detail: format!("quantile {} outside [0, 1]", q),
            });
        }
    }
    Ok(())
}

/// Runs the reduction described by `agg` over a column with at least one valid row.
///
/// `reduce_with` validates the descriptor before the guard; the quantile arm checks
/// its payload again for callers that invoke `dispatch` directly.
pub fn dispatch<K: ReductionKernels + ?Sized>(
    kernels: &K,
    col: &Column,
    agg: &Aggregation,
    out: DataType,
    ctx: ExecContext,
) -> Result<Scalar, KernelError> {
    match agg {
        Aggregation::Sum => kernels.sum(col, out, ctx),
        Aggregation::Product => kernels.product(col, out, ctx),
        Aggregation::Min => kernels.min(col, out, ctx),
        Aggregation::Max => kernels.max(col, out, ctx),
        Aggregation::Any => kernels.any(col, out, ctx),
        Aggregation::All => kernels.all(col, out, ctx),
        Aggregation::SumOfSquares => kernels.sum_of_squares(col, out, ctx),
        Aggregation::Mean => kernels.mean(col, out, ctx),
        Aggregation::Variance { ddof } => kernels.variance(col, out, *ddof, ctx),
        Aggregation::Std { ddof } => kernels.standard_deviation(col, out, *ddof, ctx),
        Aggregation::Median => extract_rank(
            kernels,
            col,
            &[MEDIAN_QUANTILE],
            MEDIAN_INTERPOLATION,
            out,
            ctx,
        ),
        Aggregation::Quantile {
            quantiles,
            interpolation,
        } => {
            validate_descriptor(agg)?;
            extract_rank(kernels, col, quantiles, *interpolation, out, ctx)
        }
        Aggregation::NUnique { null_handling } => {
            let n = kernels.distinct_count(col, *null_handling, NanPolicy::NanIsValid, ctx)?;
            Scalar::from_count(n, out)
        }
        Aggregation::NthElement { n, null_handling } => {
            kernels.nth_element(col, *n, *null_handling, out, ctx)
        }
        Aggregation::CountValid
        | Aggregation::CountAll
        | Aggregation::ArgMin
        | Aggregation::ArgMax
        | Aggregation::CollectList => Err(KernelError::UnsupportedOperation(agg.kind())),
    }
}
