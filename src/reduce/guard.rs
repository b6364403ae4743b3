// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! Degeneracy guard: short-circuits reductions over columns with no valid rows.

use crate::column::Column;
use crate::scalar::Scalar;
use crate::types::DataType;

/// Canned result for a column with no usable data, or `None` when a real
/// reduction is needed.
///
/// A column is degenerate when `len <= null_count`, which covers both the empty
/// and the all-null case. The result is then always invalid:
/// - untyped columns, or columns whose type differs from `out`, give
///   `Scalar::default_for(out)`
/// - otherwise the result is `Scalar::empty_like(col)`
///
/// Any type difference takes the default path, including lossless promotions.
pub fn degenerate_result(col: &Column, out: DataType) -> Option<Scalar> {
    if col.len() > col.null_count() {
        return None;
    }
    let dtype = col.dtype();
    let result = if dtype == DataType::Empty || dtype != out {
        Scalar::default_for(out)
    } else {
        Scalar::empty_like(col)
    };
    tracing::trace!(
        rows = col.len(),
        nulls = col.null_count(),
        column_type = %dtype,
        out = %out,
        "degenerate column, skipping kernels"
    );
    Some(result)
}
