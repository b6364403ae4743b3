// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Column Model** - *Typed Nullable Columns over Minarrow Arrays*
//!
//! A [`Column`] wraps one Minarrow array (or the untyped all-null `Empty` column) and
//! caches its null count, so reductions can test for degenerate input in O(1).
//! Columns are read-only to the reduction layer.

use minarrow::{Bitmask, BooleanArray, FloatArray, IntegerArray, Vec64};

use crate::errors::KernelError;
use crate::scalar::Scalar;
use crate::types::{DataType, NativeType};
use crate::utils::{confirm_in_bounds, confirm_mask_capacity, count_nulls};

/// Physical storage of a column.
#[derive(Debug, Clone)]
pub enum ColumnData {
    /// All-null column of the given length with no element type.
    Empty(usize),
    Boolean(BooleanArray<()>),
    Int32(IntegerArray<i32>),
    Int64(IntegerArray<i64>),
    UInt32(IntegerArray<u32>),
    UInt64(IntegerArray<u64>),
    Float32(FloatArray<f32>),
    Float64(FloatArray<f64>),
}

/// Runs `$body` with `$d: &[T]` bound to the column values and `$m` to its validity
/// mask, for whichever native type backs the column. Booleans are unpacked to
/// `&[bool]`. An `Empty` column yields `UnsupportedType`.
///
/// `$body` must evaluate to `Result<_, KernelError>`.
macro_rules! with_column_values {
    ($col:expr, |$d:ident, $m:ident| $body:expr) => {
        match $col.data() {
            $crate::column::ColumnData::Empty(_) => Err($crate::errors::KernelError::UnsupportedType(
                "column has no element type".to_string(),
            )),
            $crate::column::ColumnData::Boolean(a) => {
                let unpacked = $crate::utils::unpack_bools(&a.data, a.len);
                let $d: &[bool] = &unpacked[..];
                let $m = a.null_mask.as_ref();
                $body
            }
            $crate::column::ColumnData::Int32(a) => {
                let $d: &[i32] = &a.data[..];
                let $m = a.null_mask.as_ref();
                $body
            }
            $crate::column::ColumnData::Int64(a) => {
                let $d: &[i64] = &a.data[..];
                let $m = a.null_mask.as_ref();
                $body
            }
            $crate::column::ColumnData::UInt32(a) => {
                let $d: &[u32] = &a.data[..];
                let $m = a.null_mask.as_ref();
                $body
            }
            $crate::column::ColumnData::UInt64(a) => {
                let $d: &[u64] = &a.data[..];
                let $m = a.null_mask.as_ref();
                $body
            }
            $crate::column::ColumnData::Float32(a) => {
                let $d: &[f32] = &a.data[..];
                let $m = a.null_mask.as_ref();
                $body
            }
            $crate::column::ColumnData::Float64(a) => {
                let $d: &[f64] = &a.data[..];
                let $m = a.null_mask.as_ref();
                $body
            }
        }
    };
}
pub(crate) use with_column_values;

/// Fixed-length, typed, nullable sequence of values.
#[derive(Debug, Clone)]
pub struct Column {
    data: ColumnData,
    null_count: usize,
}

impl Column {
    pub fn new(data: ColumnData) -> Self {
        let null_count = match &data {
            ColumnData::Empty(len) => *len,
            ColumnData::Boolean(a) => count_nulls(a.len, a.null_mask.as_ref()),
            ColumnData::Int32(a) => count_nulls(a.data.len(), a.null_mask.as_ref()),
            ColumnData::Int64(a) => count_nulls(a.data.len(), a.null_mask.as_ref()),
            ColumnData::UInt32(a) => count_nulls(a.data.len(), a.null_mask.as_ref()),
            ColumnData::UInt64(a) => count_nulls(a.data.len(), a.null_mask.as_ref()),
            ColumnData::Float32(a) => count_nulls(a.data.len(), a.null_mask.as_ref()),
            ColumnData::Float64(a) => count_nulls(a.data.len(), a.null_mask.as_ref()),
        };
        Self { data, null_count }
    }

    /// Untyped column of `len` nulls.
    pub fn empty(len: usize) -> Self {
        Self::new(ColumnData::Empty(len))
    }

    /// Dense column with no nulls.
    pub fn from_slice<T: NativeType>(values: &[T]) -> Self {
        Self::new(T::build_column(Vec64::from_slice(values), None))
    }

    /// Column where `None` entries are null.
    pub fn from_options<T: NativeType>(values: &[Option<T>]) -> Self {
        let mut data = Vec64::with_capacity(values.len());
        let mut validity = Vec::with_capacity(values.len());
        for v in values {
            data.push(v.unwrap_or_default());
            validity.push(v.is_some());
        }
        let mask = if validity.iter().all(|&b| b) {
            None
        } else {
            Some(Bitmask::from_bools(&validity))
        };
        Self::new(T::build_column(data, mask))
    }

    /// Column from values plus a validity mask (set bit = valid).
    ///
    /// The mask must hold exactly one bit per value.
    pub fn with_validity<T: NativeType>(values: &[T], mask: Bitmask) -> Result<Self, KernelError> {
        confirm_mask_capacity(values.len(), Some(&mask))?;
        Ok(Self::new(T::build_column(Vec64::from_slice(values), Some(mask))))
    }

    #[inline]
    pub fn data(&self) -> &ColumnData {
        &self.data
    }

    #[inline]
    pub fn len(&self) -> usize {
        match &self.data {
            ColumnData::Empty(len) => *len,
            ColumnData::Boolean(a) => a.len,
            ColumnData::Int32(a) => a.data.len(),
            ColumnData::Int64(a) => a.data.len(),
            ColumnData::UInt32(a) => a.data.len(),
            ColumnData::UInt64(a) => a.data.len(),
            ColumnData::Float32(a) => a.data.len(),
            ColumnData::Float64(a) => a.data.len(),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub fn null_count(&self) -> usize {
        self.null_count
    }

    #[inline]
    pub fn valid_count(&self) -> usize {
        self.len() - self.null_count
    }

    pub fn dtype(&self) -> DataType {
        match &self.data {
            ColumnData::Empty(_) => DataType::Empty,
            ColumnData::Boolean(_) => DataType::Boolean,
            ColumnData::Int32(_) => DataType::Int32,
            ColumnData::Int64(_) => DataType::Int64,
            ColumnData::UInt32(_) => DataType::UInt32,
            ColumnData::UInt64(_) => DataType::UInt64,
            ColumnData::Float32(_) => DataType::Float32,
            ColumnData::Float64(_) => DataType::Float64,
        }
    }

    /// Validity mask, if any. `Empty` columns have no mask but every row is null.
    pub fn validity(&self) -> Option<&Bitmask> {
        match &self.data {
            ColumnData::Empty(_) => None,
            ColumnData::Boolean(a) => a.null_mask.as_ref(),
            ColumnData::Int32(a) => a.null_mask.as_ref(),
            ColumnData::Int64(a) => a.null_mask.as_ref(),
            ColumnData::UInt32(a) => a.null_mask.as_ref(),
            ColumnData::UInt64(a) => a.null_mask.as_ref(),
            ColumnData::Float32(a) => a.null_mask.as_ref(),
            ColumnData::Float64(a) => a.null_mask.as_ref(),
        }
    }

    #[inline]
    pub fn is_valid(&self, i: usize) -> bool {
        if i >= self.len() {
            return false;
        }
        match &self.data {
            ColumnData::Empty(_) => false,
            _ => self.validity().map_or(true, |m| m.get(i)),
        }
    }

    /// Row `i` as a scalar of the column's type; null rows give an invalid scalar.
    pub fn scalar_at(&self, i: usize) -> Result<Scalar, KernelError> {
        confirm_in_bounds("scalar_at", i, self.len())?;
        if !self.is_valid(i) {
            return Ok(Scalar::empty_like(self));
        }
        with_column_values!(self, |d, _m| Ok(Scalar::new(d[i].into_scalar_value())))
    }

    /// Number of valid NaN entries. Zero for non-floating columns.
    pub fn nan_count(&self) -> usize {
        match &self.data {
            ColumnData::Float32(a) => self.count_nans(&a.data[..]),
            ColumnData::Float64(a) => self.count_nans(&a.data[..]),
            _ => 0,
        }
    }

    fn count_nans<T: NativeType>(&self, values: &[T]) -> usize {
        values
            .iter()
            .enumerate()
            .filter(|(i, v)| self.is_valid(*i) && v.is_nan())
            .count()
    }

    /// Copy of the column with NaN entries marked null.
    pub fn nans_to_nulls(&self) -> Column {
        match &self.data {
            ColumnData::Float32(a) => self.mask_nans(&a.data[..]),
            ColumnData::Float64(a) => self.mask_nans(&a.data[..]),
            _ => self.clone(),
        }
    }

    fn mask_nans<T: NativeType>(&self, values: &[T]) -> Column {
        let validity: Vec<bool> = (0..values.len())
            .map(|i| self.is_valid(i) && !values[i].is_nan())
            .collect();
        Self::new(T::build_column(
            Vec64::from_slice(values),
            Some(Bitmask::from_bools(&validity)),
        ))
    }
}
