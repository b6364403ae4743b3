// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under the Mozilla Public License (MPL) 2.0.
// See LICENSE for details.

//! # **Columnar Reduce** - *Typed Whole-Column Reductions*
//!
//! Reduces a nullable, typed [`Column`] to a single [`Scalar`] of a caller-chosen
//! output type. A request is an [`Aggregation`] descriptor; the crate validates it,
//! answers empty and all-null columns without running any kernel, and otherwise
//! routes the request to a [`ReductionKernels`] backend.
//!
//! ```ignore
//! use columnar_reduce::{Aggregation, Column, DataType, reduce};
//!
//! let col = Column::from_options(&[Some(1i32), None, Some(3), Some(2)]);
//! let median = reduce(&col, &Aggregation::Median, DataType::Float64)?;
//! assert_eq!(median.as_f64(), Some(2.0));
//! ```
//!
//! [`frontend`] adds dataframe-style conveniences (`skipna`, `min_count`, per-operation
//! output types) on top of [`reduce`].

pub mod column;
pub mod config;
pub mod context;
pub mod errors;
pub mod frontend;
pub mod operators;
pub mod reduce;
pub mod scalar;
pub mod types;
pub mod utils;

pub mod kernels {
    pub mod aggregate;
    pub mod native;
    pub mod quantile;
    pub mod selection;
    pub mod sort;
}

pub mod traits {
    pub mod dense_iter;
    pub mod kernels;
    pub mod to_bits;
}

pub use column::{Column, ColumnData};
pub use context::{ExecContext, StreamId};
pub use errors::KernelError;
pub use kernels::native::NativeKernels;
pub use operators::{
    Aggregation, AggregationKind, Interpolation, NanPolicy, NullOrder, NullPolicy, SortOrder,
};
pub use reduce::{reduce, reduce_with};
pub use scalar::{Scalar, ScalarValue};
pub use traits::kernels::ReductionKernels;
pub use types::{DataType, NativeType};
