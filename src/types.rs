// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Data Types** - *Logical Types and Native Element Trait*
//!
//! [`DataType`] names the logical type of a column or scalar. [`NativeType`] ties each
//! supported Rust element type to its logical type and gives the kernels the
//! conversions, orderings and hash keys they need without per-type code paths.

use core::cmp::Ordering;
use core::fmt;

use minarrow::{Bitmask, BooleanArray, FloatArray, IntegerArray, Vec64};

use crate::column::ColumnData;
use crate::scalar::ScalarValue;
use crate::traits::to_bits::ToBits;

/// Logical element type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataType {
    /// Untyped marker for columns that carry no values at all.
    Empty,
    Boolean,
    Int32,
    Int64,
    UInt32,
    UInt64,
    Float32,
    Float64,
}

impl DataType {
    #[inline]
    pub fn is_floating(&self) -> bool {
        matches!(self, DataType::Float32 | DataType::Float64)
    }

    #[inline]
    pub fn is_signed_integer(&self) -> bool {
        matches!(self, DataType::Int32 | DataType::Int64)
    }

    #[inline]
    pub fn is_unsigned_integer(&self) -> bool {
        matches!(self, DataType::UInt32 | DataType::UInt64)
    }

    #[inline]
    pub fn is_integer(&self) -> bool {
        self.is_signed_integer() || self.is_unsigned_integer()
    }

    /// Integers, floats and booleans.
    #[inline]
    pub fn is_numeric(&self) -> bool {
        !matches!(self, DataType::Empty)
    }

    pub fn name(&self) -> &'static str {
        match self {
            DataType::Empty => "empty",
            DataType::Boolean => "bool",
            DataType::Int32 => "int32",
            DataType::Int64 => "int64",
            DataType::UInt32 => "uint32",
            DataType::UInt64 => "uint64",
            DataType::Float32 => "float32",
            DataType::Float64 => "float64",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Element types that can back a [`Column`](crate::column::Column).
pub trait NativeType: Copy + Default + PartialEq + fmt::Debug + Send + Sync + 'static {
    /// Logical type of columns holding this element.
    const DTYPE: DataType;

    fn to_f64(self) -> f64;

    /// Exact integer view; `None` for floating-point elements.
    fn to_i128(self) -> Option<i128>;

    #[inline(always)]
    fn is_nan(self) -> bool {
        false
    }

    /// Non-zero values, including NaN, are true.
    fn is_truthy(self) -> bool;

    /// Total order; floats follow IEEE 754 `totalOrder`.
    fn total_cmp(&self, other: &Self) -> Ordering;

    /// Hash key under which equal values, and all NaNs, coincide.
    fn distinct_key(self) -> u64;

    fn into_scalar_value(self) -> ScalarValue;

    /// Wraps values and an optional validity mask as column storage.
    fn build_column(values: Vec64<Self>, null_mask: Option<Bitmask>) -> ColumnData;
}

macro_rules! impl_native_int {
    ($ty:ty, $variant:ident) => {
        impl NativeType for $ty {
            const DTYPE: DataType = DataType::$variant;

            #[inline(always)]
            fn to_f64(self) -> f64 {
                self as f64
            }

            #[inline(always)]
            fn to_i128(self) -> Option<i128> {
                Some(self as i128)
            }

            #[inline(always)]
            fn is_truthy(self) -> bool {
                self != 0
            }

            #[inline(always)]
            fn total_cmp(&self, other: &Self) -> Ordering {
                self.cmp(other)
            }

            #[inline(always)]
            fn distinct_key(self) -> u64 {
                self as i128 as u64
            }

            #[inline(always)]
            fn into_scalar_value(self) -> ScalarValue {
                ScalarValue::$variant(self)
            }

            fn build_column(values: Vec64<Self>, null_mask: Option<Bitmask>) -> ColumnData {
                ColumnData::$variant(IntegerArray {
                    data: values.into(),
                    null_mask,
                })
            }
        }
    };
}

macro_rules! impl_native_float {
    ($ty:ty, $variant:ident) => {
        impl NativeType for $ty {
            const DTYPE: DataType = DataType::$variant;

            #[inline(always)]
            fn to_f64(self) -> f64 {
                self as f64
            }

            #[inline(always)]
            fn to_i128(self) -> Option<i128> {
                None
            }

            #[inline(always)]
            fn is_nan(self) -> bool {
                <$ty>::is_nan(self)
            }

            #[inline(always)]
            fn is_truthy(self) -> bool {
                self != 0.0
            }

            #[inline(always)]
            fn total_cmp(&self, other: &Self) -> Ordering {
                self.total_order_key().cmp(&other.total_order_key())
            }

            #[inline(always)]
            fn distinct_key(self) -> u64 {
                self.canonical_bits().into()
            }

            #[inline(always)]
            fn into_scalar_value(self) -> ScalarValue {
                ScalarValue::$variant(self)
            }

            fn build_column(values: Vec64<Self>, null_mask: Option<Bitmask>) -> ColumnData {
                ColumnData::$variant(FloatArray {
                    data: values.into(),
                    null_mask,
                })
            }
        }
    };
}

impl_native_int!(i32, Int32);
impl_native_int!(i64, Int64);
impl_native_int!(u32, UInt32);
impl_native_int!(u64, UInt64);
impl_native_float!(f32, Float32);
impl_native_float!(f64, Float64);

impl NativeType for bool {
    const DTYPE: DataType = DataType::Boolean;

    #[inline(always)]
    fn to_f64(self) -> f64 {
        if self { 1.0 } else { 0.0 }
    }

    #[inline(always)]
    fn to_i128(self) -> Option<i128> {
        Some(self as i128)
    }

    #[inline(always)]
    fn is_truthy(self) -> bool {
        self
    }

    #[inline(always)]
    fn total_cmp(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }

    #[inline(always)]
    fn distinct_key(self) -> u64 {
        self as u64
    }

    #[inline(always)]
    fn into_scalar_value(self) -> ScalarValue {
        ScalarValue::Boolean(self)
    }

    fn build_column(values: Vec64<Self>, null_mask: Option<Bitmask>) -> ColumnData {
        let mut arr = BooleanArray::from_slice(&values[..]);
        arr.null_mask = null_mask;
        ColumnData::Boolean(arr)
    }
}
