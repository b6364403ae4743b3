// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Frontend Module** - *Dataframe-Style Reductions*
//!
//! Convenience reductions layered on [`reduce`], with the NaN and null conventions
//! dataframe users expect:
//! - `skipna` (default on) turns NaNs into nulls and reduces over the remaining rows;
//!   with it off, any null or NaN yields the NA result
//! - `min_count` returns NA when fewer valid rows remain
//! - the output type is picked per operation by [`result_dtype`]
//!
//! The NA result is a NaN for floating output types and an invalid scalar otherwise.

use std::borrow::Cow;

use crate::column::Column;
use crate::config::DEFAULT_DDOF;
use crate::context::ExecContext;
use crate::errors::KernelError;
use crate::kernels::native::NativeKernels;
use crate::operators::{Aggregation, AggregationKind, Interpolation, NullPolicy};
use crate::reduce::guard::degenerate_result;
use crate::reduce::reduce;
use crate::scalar::Scalar;
use crate::traits::kernels::ReductionKernels;
use crate::types::DataType;

/// Options shared by the frontend reductions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReduceOptions {
    pub skipna: bool,
    pub min_count: i64,
}

impl Default for ReduceOptions {
    fn default() -> Self {
        Self {
            skipna: true,
            min_count: 0,
        }
    }
}

impl ReduceOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn skipna(mut self, skipna: bool) -> Self {
        self.skipna = skipna;
        self
    }

    pub fn min_count(mut self, min_count: i64) -> Self {
        self.min_count = min_count;
        self
    }
}

/// Column prepared for reduction, or the final answer when no reduction is needed.
#[derive(Debug, Clone)]
pub enum Processed<'a> {
    Column(Cow<'a, Column>),
    Result(Scalar),
}

/// NA value for `out`: NaN for floats, an invalid scalar otherwise.
pub fn na_result(out: DataType) -> Result<Scalar, KernelError> {
    if out.is_floating() {
        Scalar::from_f64(f64::NAN, out)
    } else {
        Ok(Scalar::null(out))
    }
}

/// Output type the frontend requests for `kind` over a column of `column_type`.
pub fn result_dtype(kind: AggregationKind, column_type: DataType) -> DataType {
    match kind {
        AggregationKind::Sum | AggregationKind::Product => {
            if column_type.is_floating() {
                column_type
            } else {
                DataType::Int64
            }
        }
        // common type with UInt64 where the column's kind dominates
        AggregationKind::SumOfSquares => match column_type {
            DataType::Boolean | DataType::Empty => DataType::UInt64,
            numeric => numeric,
        },
        AggregationKind::Mean
        | AggregationKind::Variance
        | AggregationKind::Std
        | AggregationKind::Median
        | AggregationKind::Quantile => DataType::Float64,
        AggregationKind::Any | AggregationKind::All => DataType::Boolean,
        AggregationKind::NUnique => DataType::Int64,
        _ => column_type,
    }
}

/// Applies `skipna` and `min_count` ahead of a reduction producing `out`.
pub fn process_for_reduction<'a>(
    col: &'a Column,
    opts: &ReduceOptions,
    out: DataType,
) -> Result<Processed<'a>, KernelError> {
    let prepared: Cow<'a, Column> = if opts.skipna {
        if col.nan_count() > 0 {
            Cow::Owned(col.nans_to_nulls())
        } else {
            Cow::Borrowed(col)
        }
    } else {
        if col.null_count() > 0 || col.nan_count() > 0 {
            return Ok(Processed::Result(na_result(out)?));
        }
        Cow::Borrowed(col)
    };

    if opts.min_count > 0 {
        if (prepared.valid_count() as i64) < opts.min_count {
            return Ok(Processed::Result(na_result(out)?));
        }
    } else if opts.min_count < 0 {
        tracing::warn!(
            min_count = opts.min_count,
            "min_count value cannot be negative, will default to 0"
        );
    }
    Ok(Processed::Column(prepared))
}

fn reduce_processed(
    col: &Column,
    agg: Aggregation,
    opts: &ReduceOptions,
) -> Result<Scalar, KernelError> {
    let out = result_dtype(agg.kind(), col.dtype());
    match process_for_reduction(col, opts, out)? {
        Processed::Column(c) => reduce(&c, &agg, out),
        Processed::Result(s) => Ok(s),
    }
}

pub fn sum(col: &Column, opts: &ReduceOptions) -> Result<Scalar, KernelError> {
    reduce_processed(col, Aggregation::Sum, opts)
}

pub fn product(col: &Column, opts: &ReduceOptions) -> Result<Scalar, KernelError> {
    reduce_processed(col, Aggregation::Product, opts)
}

pub fn sum_of_squares(col: &Column, opts: &ReduceOptions) -> Result<Scalar, KernelError> {
    reduce_processed(col, Aggregation::SumOfSquares, opts)
}

pub fn min(col: &Column, opts: &ReduceOptions) -> Result<Scalar, KernelError> {
    reduce_processed(col, Aggregation::Min, opts)
}

pub fn max(col: &Column, opts: &ReduceOptions) -> Result<Scalar, KernelError> {
    reduce_processed(col, Aggregation::Max, opts)
}

/// `(min, max)` under the same options, from one pass over the column.
pub fn min_max(col: &Column, opts: &ReduceOptions) -> Result<(Scalar, Scalar), KernelError> {
    let out = result_dtype(AggregationKind::Min, col.dtype());
    let prepared = match process_for_reduction(col, opts, out)? {
        Processed::Column(c) => c,
        Processed::Result(s) => return Ok((s, s)),
    };
    if let Some(s) = degenerate_result(&prepared, out) {
        return Ok((s, s));
    }
    NativeKernels.min_max(&prepared, out, ExecContext::default())
}

pub fn mean(col: &Column, opts: &ReduceOptions) -> Result<Scalar, KernelError> {
    reduce_processed(col, Aggregation::Mean, opts)
}

/// Variance; `ddof` defaults to [`DEFAULT_DDOF`].
pub fn var(col: &Column, ddof: Option<usize>, opts: &ReduceOptions) -> Result<Scalar, KernelError> {
    reduce_processed(col, Aggregation::variance(ddof.unwrap_or(DEFAULT_DDOF)), opts)
}

/// Standard deviation; `ddof` defaults to [`DEFAULT_DDOF`].
pub fn std(col: &Column, ddof: Option<usize>, opts: &ReduceOptions) -> Result<Scalar, KernelError> {
    reduce_processed(col, Aggregation::std(ddof.unwrap_or(DEFAULT_DDOF)), opts)
}

pub fn median(col: &Column, opts: &ReduceOptions) -> Result<Scalar, KernelError> {
    reduce_processed(col, Aggregation::Median, opts)
}

pub fn quantile(
    col: &Column,
    q: f64,
    interpolation: Interpolation,
    opts: &ReduceOptions,
) -> Result<Scalar, KernelError> {
    reduce_processed(col, Aggregation::quantile(q, interpolation), opts)
}

/// True when every valid value is non-zero. All-null and empty columns are `true`.
pub fn all(col: &Column, skipna: bool) -> Result<bool, KernelError> {
    let prepared = if skipna {
        Cow::Owned(col.nans_to_nulls())
    } else {
        Cow::Borrowed(col)
    };
    if prepared.null_count() == prepared.len() {
        return Ok(true);
    }
    boolean_result(reduce(&prepared, &Aggregation::All, DataType::Boolean)?)
}

/// True when any valid value is non-zero.
///
/// Without `skipna` any null makes the result `true`; with it an all-null column
/// is `false`.
pub fn any(col: &Column, skipna: bool) -> Result<bool, KernelError> {
    let prepared = if skipna {
        Cow::Owned(col.nans_to_nulls())
    } else {
        Cow::Borrowed(col)
    };
    if !skipna && prepared.null_count() > 0 {
        return Ok(true);
    }
    if skipna && prepared.null_count() == prepared.len() {
        return Ok(false);
    }
    boolean_result(reduce(&prepared, &Aggregation::Any, DataType::Boolean)?)
}

fn boolean_result(s: Scalar) -> Result<bool, KernelError> {
    s.as_bool().ok_or_else(|| {
        KernelError::TypeMismatch(format!("expected a valid boolean, got {:?}", s))
    })
}

/// Distinct value count; nulls count as one value unless `dropna`.
pub fn nunique(col: &Column, dropna: bool) -> Result<i64, KernelError> {
    let policy = if dropna {
        NullPolicy::Exclude
    } else {
        NullPolicy::Include
    };
    let agg = Aggregation::nunique(policy);
    let s = reduce(col, &agg, result_dtype(agg.kind(), col.dtype()))?;
    // all-null columns come back from the guard as an invalid count
    Ok(match s.as_i64() {
        Some(n) => n,
        None if dropna || col.is_empty() => 0,
        None => 1,
    })
}

/// Element `n` of the column; negative positions count from the end.
pub fn nth(col: &Column, n: i64, null_handling: NullPolicy) -> Result<Scalar, KernelError> {
    let agg = Aggregation::nth_element(n, null_handling);
    reduce(col, &agg, result_dtype(agg.kind(), col.dtype()))
}
