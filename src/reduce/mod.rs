// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Reduce Module** - *Column to Scalar Reductions*
//!
//! Entry points for reducing a whole [`Column`] to one [`Scalar`]:
//!
//! 1. The descriptor payload is validated.
//! 2. The degeneracy guard answers empty and all-null columns without running a kernel.
//! 3. The dispatcher routes the descriptor to the kernel backend, going through the
//!    order-dependent extractor for median and quantile.
//!
//! [`reduce`] uses [`NativeKernels`] on the default context; [`reduce_with`] accepts any
//! [`ReductionKernels`] backend and an explicit [`ExecContext`].

pub mod dispatch;
pub mod guard;
pub mod order_stats;

use crate::column::Column;
use crate::context::ExecContext;
use crate::errors::KernelError;
use crate::kernels::native::NativeKernels;
use crate::operators::Aggregation;
use crate::scalar::Scalar;
use crate::traits::kernels::ReductionKernels;
use crate::types::DataType;

/// Reduces `col` with the native kernels on the default execution context.
pub fn reduce(col: &Column, agg: &Aggregation, out: DataType) -> Result<Scalar, KernelError> {
    reduce_with(&NativeKernels, col, agg, out, ExecContext::default())
}

/// Reduces `col` with an explicit kernel backend and execution context.
pub fn reduce_with<K: ReductionKernels + ?Sized>(
    kernels: &K,
    col: &Column,
    agg: &Aggregation,
    out: DataType,
    ctx: ExecContext,
) -> Result<Scalar, KernelError> {
    tracing::debug!(
        kind = %agg.kind(),
        rows = col.len(),
        nulls = col.null_count(),
        out = %out,
        stream = %ctx.stream(),
        "reduce"
    );
    dispatch::validate_descriptor(agg)?;
    if let Some(result) = guard::degenerate_result(col, out) {
        return Ok(result);
    }
    dispatch::dispatch(kernels, col, agg, out, ctx)
}
