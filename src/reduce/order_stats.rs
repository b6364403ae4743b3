// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! Order-dependent extraction for median and quantile reductions.
//!
//! The column is argsorted with nulls last, the permutation is cut down to its valid
//! prefix, and the quantile kernel runs over that prefix with `sorted = true`. The
//! permutation is owned by this scope and released on every exit path.

use crate::column::Column;
use crate::context::ExecContext;
use crate::errors::KernelError;
use crate::operators::{Interpolation, NullOrder, SortOrder};
use crate::scalar::Scalar;
use crate::traits::kernels::ReductionKernels;
use crate::types::DataType;

/// Rank extraction over the valid rows of `col`, cast to `out`.
///
/// `quantiles` is forwarded unchanged; the first row of the kernel result is returned.
pub fn extract_rank<K: ReductionKernels + ?Sized>(
    kernels: &K,
    col: &Column,
    quantiles: &[f64],
    interpolation: Interpolation,
    out: DataType,
    ctx: ExecContext,
) -> Result<Scalar, KernelError> {
    let mut order = kernels.sorted_order(col, SortOrder::Ascending, NullOrder::After, ctx)?;
    let split = col.valid_count();
    if order.len() != col.len() {
        return Err(KernelError::InvalidArguments(format!(
            "sorted_order returned {} indices for {} rows",
            order.len(),
            col.len()
        )));
    }
    order.truncate(split);
    tracing::trace!(
        rows = col.len(),
        valid_prefix = split,
        ?interpolation,
        "extract_rank"
    );

    let ranked = kernels.quantile(col, quantiles, interpolation, &order, true, ctx)?;
    kernels.element_at(&ranked, 0, ctx)?.cast(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernels::native::NativeKernels;

    #[test]
    fn test_median_ignores_nulls() {
        let col = Column::from_options(&[Some(10i32), None, Some(1), Some(4), None]);
        let s = extract_rank(
            &NativeKernels,
            &col,
            &[0.5],
            Interpolation::Linear,
            DataType::Float64,
            ExecContext::default(),
        )
        .unwrap();
        assert_eq!(s.as_f64(), Some(4.0));
    }

    #[test]
    fn test_lower_keeps_value_then_casts() {
        let col = Column::from_slice(&[7u32, 3, 5, 1]);
        let s = extract_rank(
            &NativeKernels,
            &col,
            &[0.5],
            Interpolation::Lower,
            DataType::Int64,
            ExecContext::default(),
        )
        .unwrap();
        assert_eq!(s.as_i64(), Some(3));
        assert_eq!(s.dtype(), DataType::Int64);
    }
}
