// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Reduction Kernel Trait** - *Capabilities Consumed by the Dispatcher*
//!
//! The reduction dispatcher never computes values itself. Everything numeric, every
//! ordering and every element extraction goes through this trait, so alternative
//! backends (or instrumented test doubles) can be slotted in behind `reduce_with`.
//!
//! Implementations may assume the dispatcher only calls them with columns that hold
//! at least one valid entry, but must not rely on it for memory safety.

use crate::column::Column;
use crate::context::ExecContext;
use crate::errors::KernelError;
use crate::operators::{Interpolation, NanPolicy, NullOrder, NullPolicy, SortOrder};
use crate::scalar::Scalar;
use crate::types::DataType;

/// Numeric, ordering and extraction capabilities over [`Column`].
///
/// Every method receives the caller's [`ExecContext`] by value.
pub trait ReductionKernels {
    fn sum(&self, col: &Column, out: DataType, ctx: ExecContext) -> Result<Scalar, KernelError>;

    fn product(&self, col: &Column, out: DataType, ctx: ExecContext)
    -> Result<Scalar, KernelError>;

    fn min(&self, col: &Column, out: DataType, ctx: ExecContext) -> Result<Scalar, KernelError>;

    fn max(&self, col: &Column, out: DataType, ctx: ExecContext) -> Result<Scalar, KernelError>;

    /// `(min, max)` of the column. Backends with a single-pass kernel should override.
    fn min_max(
        &self,
        col: &Column,
        out: DataType,
        ctx: ExecContext,
    ) -> Result<(Scalar, Scalar), KernelError> {
        Ok((self.min(col, out, ctx)?, self.max(col, out, ctx)?))
    }

    fn any(&self, col: &Column, out: DataType, ctx: ExecContext) -> Result<Scalar, KernelError>;

    fn all(&self, col: &Column, out: DataType, ctx: ExecContext) -> Result<Scalar, KernelError>;

    fn sum_of_squares(
        &self,
        col: &Column,
        out: DataType,
        ctx: ExecContext,
    ) -> Result<Scalar, KernelError>;

    fn mean(&self, col: &Column, out: DataType, ctx: ExecContext) -> Result<Scalar, KernelError>;

    fn variance(
        &self,
        col: &Column,
        out: DataType,
        ddof: usize,
        ctx: ExecContext,
    ) -> Result<Scalar, KernelError>;

    fn standard_deviation(
        &self,
        col: &Column,
        out: DataType,
        ddof: usize,
        ctx: ExecContext,
    ) -> Result<Scalar, KernelError>;

    /// Element `n` (negative counts from the end) among the rows selected by
    /// `null_handling`.
    fn nth_element(
        &self,
        col: &Column,
        n: i64,
        null_handling: NullPolicy,
        out: DataType,
        ctx: ExecContext,
    ) -> Result<Scalar, KernelError>;

    /// Number of distinct values.
    fn distinct_count(
        &self,
        col: &Column,
        null_handling: NullPolicy,
        nan_handling: NanPolicy,
        ctx: ExecContext,
    ) -> Result<usize, KernelError>;

    /// Row permutation that sorts `col`, with nulls placed per `null_order`.
    fn sorted_order(
        &self,
        col: &Column,
        order: SortOrder,
        null_order: NullOrder,
        ctx: ExecContext,
    ) -> Result<Vec<usize>, KernelError>;

    /// One row per requested fraction, computed over the rows listed in `indices`.
    ///
    /// When `sorted` is true, `indices` already lists rows in ascending value order.
    fn quantile(
        &self,
        col: &Column,
        quantiles: &[f64],
        interpolation: Interpolation,
        indices: &[usize],
        sorted: bool,
        ctx: ExecContext,
    ) -> Result<Column, KernelError>;

    /// Row `index` of `col` as a scalar of the column's type.
    fn element_at(
        &self,
        col: &Column,
        index: usize,
        ctx: ExecContext,
    ) -> Result<Scalar, KernelError>;
}
