// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Native Kernels** - *Default Reduction Backend*
//!
//! [`NativeKernels`] implements [`ReductionKernels`] on the CPU by routing each
//! column variant to the generic kernels in `aggregate`, `sort`, `quantile` and
//! `selection`, then casting the result to the requested output type.

use minarrow::Bitmask;

use crate::column::{Column, ColumnData, with_column_values};
use crate::context::ExecContext;
use crate::errors::KernelError;
use crate::kernels::aggregate;
use crate::kernels::quantile::quantile_over_indices;
use crate::kernels::selection::nth_row;
use crate::kernels::sort::argsort_with_nulls;
use crate::operators::{Interpolation, NanPolicy, NullOrder, NullPolicy, SortOrder};
use crate::scalar::{Scalar, ScalarValue};
use crate::traits::kernels::ReductionKernels;
use crate::types::{DataType, NativeType};

/// Stateless CPU implementation of [`ReductionKernels`].
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeKernels;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Accumulation {
    Sum,
    Product,
    SumOfSquares,
}

/// Sum-like reductions: `f64` when either side is floating, exact `i128` otherwise.
fn accumulate<T: NativeType>(
    d: &[T],
    m: Option<&Bitmask>,
    null_count: usize,
    out: DataType,
    op: Accumulation,
) -> Result<Scalar, KernelError> {
    let nc = Some(null_count);
    if T::DTYPE.is_floating() || out.is_floating() {
        let v = match op {
            Accumulation::Sum => aggregate::sum_f64(d, m, nc),
            Accumulation::Product => aggregate::product_f64(d, m, nc),
            Accumulation::SumOfSquares => aggregate::sum_squares_f64(d, m, nc),
        };
        return v.map_or(Ok(Scalar::null(out)), |v| Scalar::from_f64(v, out));
    }
    let v = match op {
        Accumulation::Sum => aggregate::sum_i128(d, m, nc)?,
        Accumulation::Product => aggregate::product_i128(d, m, nc)?,
        Accumulation::SumOfSquares => aggregate::sum_squares_i128(d, m, nc)?,
    };
    v.map_or(Ok(Scalar::null(out)), |v| Scalar::from_i128(v, out))
}

#[inline]
fn cast_native<T: NativeType>(v: Option<T>, out: DataType) -> Result<Scalar, KernelError> {
    match v {
        Some(v) => Scalar::new(v.into_scalar_value()).cast(out),
        None => Ok(Scalar::null(out)),
    }
}

#[inline]
fn cast_bool(v: Option<bool>, out: DataType) -> Result<Scalar, KernelError> {
    match v {
        Some(b) => Scalar::new(ScalarValue::Boolean(b)).cast(out),
        None => Ok(Scalar::null(out)),
    }
}

#[inline]
fn cast_f64(v: Option<f64>, out: DataType) -> Result<Scalar, KernelError> {
    v.map_or(Ok(Scalar::null(out)), |v| Scalar::from_f64(v, out))
}

impl ReductionKernels for NativeKernels {
    fn sum(&self, col: &Column, out: DataType, _ctx: ExecContext) -> Result<Scalar, KernelError> {
        with_column_values!(col, |d, m| accumulate(
            d,
            m,
            col.null_count(),
            out,
            Accumulation::Sum
        ))
    }

    fn product(
        &self,
        col: &Column,
        out: DataType,
        _ctx: ExecContext,
    ) -> Result<Scalar, KernelError> {
        with_column_values!(col, |d, m| accumulate(
            d,
            m,
            col.null_count(),
            out,
            Accumulation::Product
        ))
    }

    fn min(&self, col: &Column, out: DataType, _ctx: ExecContext) -> Result<Scalar, KernelError> {
        with_column_values!(col, |d, m| cast_native(
            aggregate::min(d, m, Some(col.null_count())),
            out
        ))
    }

    fn max(&self, col: &Column, out: DataType, _ctx: ExecContext) -> Result<Scalar, KernelError> {
        with_column_values!(col, |d, m| cast_native(
            aggregate::max(d, m, Some(col.null_count())),
            out
        ))
    }

    fn min_max(
        &self,
        col: &Column,
        out: DataType,
        _ctx: ExecContext,
    ) -> Result<(Scalar, Scalar), KernelError> {
        with_column_values!(col, |d, m| {
            match aggregate::min_max(d, m, Some(col.null_count())) {
                Some((lo, hi)) => Ok((cast_native(Some(lo), out)?, cast_native(Some(hi), out)?)),
                None => Ok((Scalar::null(out), Scalar::null(out))),
            }
        })
    }

    fn any(&self, col: &Column, out: DataType, _ctx: ExecContext) -> Result<Scalar, KernelError> {
        with_column_values!(col, |d, m| cast_bool(
            aggregate::any(d, m, Some(col.null_count())),
            out
        ))
    }

    fn all(&self, col: &Column, out: DataType, _ctx: ExecContext) -> Result<Scalar, KernelError> {
        with_column_values!(col, |d, m| cast_bool(
            aggregate::all(d, m, Some(col.null_count())),
            out
        ))
    }

    fn sum_of_squares(
        &self,
        col: &Column,
        out: DataType,
        _ctx: ExecContext,
    ) -> Result<Scalar, KernelError> {
        with_column_values!(col, |d, m| accumulate(
            d,
            m,
            col.null_count(),
            out,
            Accumulation::SumOfSquares
        ))
    }

    fn mean(&self, col: &Column, out: DataType, _ctx: ExecContext) -> Result<Scalar, KernelError> {
        with_column_values!(col, |d, m| cast_f64(
            aggregate::mean(d, m, Some(col.null_count())),
            out
        ))
    }

    fn variance(
        &self,
        col: &Column,
        out: DataType,
        ddof: usize,
        _ctx: ExecContext,
    ) -> Result<Scalar, KernelError> {
        with_column_values!(col, |d, m| cast_f64(
            aggregate::variance(d, m, Some(col.null_count()), ddof),
            out
        ))
    }

    fn standard_deviation(
        &self,
        col: &Column,
        out: DataType,
        ddof: usize,
        _ctx: ExecContext,
    ) -> Result<Scalar, KernelError> {
        with_column_values!(col, |d, m| cast_f64(
            aggregate::std_dev(d, m, Some(col.null_count()), ddof),
            out
        ))
    }

    fn nth_element(
        &self,
        col: &Column,
        n: i64,
        null_handling: NullPolicy,
        out: DataType,
        _ctx: ExecContext,
    ) -> Result<Scalar, KernelError> {
        let row = nth_row(
            col.len(),
            col.validity(),
            col.null_count(),
            n,
            null_handling,
        )?;
        col.scalar_at(row)?.cast(out)
    }

    fn distinct_count(
        &self,
        col: &Column,
        null_handling: NullPolicy,
        nan_handling: NanPolicy,
        _ctx: ExecContext,
    ) -> Result<usize, KernelError> {
        let (values, null_group) = match col.data() {
            ColumnData::Empty(len) => (0, *len > 0),
            _ => with_column_values!(col, |d, m| {
                let dc = aggregate::count_distinct(d, m, Some(col.null_count()), nan_handling);
                Ok::<_, KernelError>((dc.values, col.null_count() > 0 || dc.nan_as_null))
            })?,
        };
        let extra = (null_handling == NullPolicy::Include && null_group) as usize;
        Ok(values + extra)
    }

    fn sorted_order(
        &self,
        col: &Column,
        order: SortOrder,
        null_order: NullOrder,
        ctx: ExecContext,
    ) -> Result<Vec<usize>, KernelError> {
        tracing::trace!(
            rows = col.len(),
            parallel = ctx.parallel_sort(),
            stream = %ctx.stream(),
            "sorted_order"
        );
        match col.data() {
            ColumnData::Empty(len) => Ok((0..*len).collect()),
            _ => with_column_values!(col, |d, m| Ok(argsort_with_nulls(
                d,
                m,
                order,
                null_order,
                ctx.parallel_sort()
            ))),
        }
    }

    fn quantile(
        &self,
        col: &Column,
        quantiles: &[f64],
        interpolation: Interpolation,
        indices: &[usize],
        sorted: bool,
        ctx: ExecContext,
    ) -> Result<Column, KernelError> {
        if matches!(col.dtype(), DataType::Boolean | DataType::Empty) {
            return Err(KernelError::UnsupportedType(format!(
                "quantile is not defined for {} columns",
                col.dtype()
            )));
        }
        with_column_values!(col, |d, _m| quantile_over_indices(
            d,
            quantiles,
            interpolation,
            indices,
            sorted,
            ctx.parallel_sort()
        ))
    }

    fn element_at(
        &self,
        col: &Column,
        index: usize,
        _ctx: ExecContext,
    ) -> Result<Scalar, KernelError> {
        col.scalar_at(index)
    }
}
