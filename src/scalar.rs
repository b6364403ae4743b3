// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Scalar Model** - *Single Typed Nullable Values*
//!
//! Every reduction returns a freshly built [`Scalar`]. An invalid (null) scalar
//! still has a type and holds that type's zero value, so callers can always
//! read `dtype()` regardless of validity.

use num_traits::NumCast;

use crate::column::Column;
use crate::errors::KernelError;
use crate::types::DataType;

/// Typed payload of a scalar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScalarValue {
    Empty,
    Boolean(bool),
    Int32(i32),
    Int64(i64),
    UInt32(u32),
    UInt64(u64),
    Float32(f32),
    Float64(f64),
}

impl ScalarValue {
    pub fn dtype(&self) -> DataType {
        match self {
            ScalarValue::Empty => DataType::Empty,
            ScalarValue::Boolean(_) => DataType::Boolean,
            ScalarValue::Int32(_) => DataType::Int32,
            ScalarValue::Int64(_) => DataType::Int64,
            ScalarValue::UInt32(_) => DataType::UInt32,
            ScalarValue::UInt64(_) => DataType::UInt64,
            ScalarValue::Float32(_) => DataType::Float32,
            ScalarValue::Float64(_) => DataType::Float64,
        }
    }

    /// Zero (or `false`) of the given type.
    pub fn zero(dtype: DataType) -> Self {
        match dtype {
            DataType::Empty => ScalarValue::Empty,
            DataType::Boolean => ScalarValue::Boolean(false),
            DataType::Int32 => ScalarValue::Int32(0),
            DataType::Int64 => ScalarValue::Int64(0),
            DataType::UInt32 => ScalarValue::UInt32(0),
            DataType::UInt64 => ScalarValue::UInt64(0),
            DataType::Float32 => ScalarValue::Float32(0.0),
            DataType::Float64 => ScalarValue::Float64(0.0),
        }
    }

    pub fn to_f64(&self) -> Option<f64> {
        match *self {
            ScalarValue::Empty => None,
            ScalarValue::Boolean(b) => Some(if b { 1.0 } else { 0.0 }),
            ScalarValue::Int32(v) => Some(v as f64),
            ScalarValue::Int64(v) => Some(v as f64),
            ScalarValue::UInt32(v) => Some(v as f64),
            ScalarValue::UInt64(v) => Some(v as f64),
            ScalarValue::Float32(v) => Some(v as f64),
            ScalarValue::Float64(v) => Some(v),
        }
    }

    /// Converts a floating-point result to `to`.
    ///
    /// Integer targets truncate toward zero; NaN or out-of-range values fail.
    pub fn from_f64(v: f64, to: DataType) -> Result<Self, KernelError> {
        fn int<T: NumCast>(v: f64, to: DataType) -> Result<T, KernelError> {
            <T as NumCast>::from(v).ok_or_else(|| {
                KernelError::TypeMismatch(format!("{} is not representable as {}", v, to))
            })
        }
        Ok(match to {
            DataType::Empty => {
                return Err(KernelError::UnsupportedType(
                    "cannot produce a value of type empty".to_string(),
                ));
            }
            DataType::Boolean => ScalarValue::Boolean(v != 0.0),
            DataType::Int32 => ScalarValue::Int32(int(v, to)?),
            DataType::Int64 => ScalarValue::Int64(int(v, to)?),
            DataType::UInt32 => ScalarValue::UInt32(int(v, to)?),
            DataType::UInt64 => ScalarValue::UInt64(int(v, to)?),
            DataType::Float32 => ScalarValue::Float32(v as f32),
            DataType::Float64 => ScalarValue::Float64(v),
        })
    }

    /// Converts an exact integer result to `to`; out-of-range values overflow.
    pub fn from_i128(v: i128, to: DataType) -> Result<Self, KernelError> {
        fn int<T: NumCast>(v: i128, to: DataType) -> Result<T, KernelError> {
            <T as NumCast>::from(v).ok_or_else(|| {
                KernelError::Overflow(format!("{} does not fit in {}", v, to))
            })
        }
        Ok(match to {
            DataType::Empty => {
                return Err(KernelError::UnsupportedType(
                    "cannot produce a value of type empty".to_string(),
                ));
            }
            DataType::Boolean => ScalarValue::Boolean(v != 0),
            DataType::Int32 => ScalarValue::Int32(int(v, to)?),
            DataType::Int64 => ScalarValue::Int64(int(v, to)?),
            DataType::UInt32 => ScalarValue::UInt32(int(v, to)?),
            DataType::UInt64 => ScalarValue::UInt64(int(v, to)?),
            DataType::Float32 => ScalarValue::Float32(v as f32),
            DataType::Float64 => ScalarValue::Float64(v as f64),
        })
    }

    pub fn cast(self, to: DataType) -> Result<Self, KernelError> {
        if self.dtype() == to {
            return Ok(self);
        }
        match self {
            ScalarValue::Empty => Err(KernelError::UnsupportedType(format!(
                "cannot cast a value of type empty to {}",
                to
            ))),
            ScalarValue::Boolean(b) => Self::from_i128(b as i128, to),
            ScalarValue::Int32(v) => Self::from_i128(v as i128, to),
            ScalarValue::Int64(v) => Self::from_i128(v as i128, to),
            ScalarValue::UInt32(v) => Self::from_i128(v as i128, to),
            ScalarValue::UInt64(v) => Self::from_i128(v as i128, to),
            ScalarValue::Float32(v) => Self::from_f64(v as f64, to),
            ScalarValue::Float64(v) => Self::from_f64(v, to),
        }
    }
}

/// Single typed value with a validity flag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scalar {
    value: ScalarValue,
    valid: bool,
}

impl Scalar {
    /// Valid scalar holding `value`.
    pub fn new(value: ScalarValue) -> Self {
        Self { value, valid: true }
    }

    /// Invalid scalar of `dtype` holding its zero value.
    pub fn null(dtype: DataType) -> Self {
        Self {
            value: ScalarValue::zero(dtype),
            valid: false,
        }
    }

    /// Default-constructed scalar of `dtype`: invalid, zero-valued.
    pub fn default_for(dtype: DataType) -> Self {
        Self::null(dtype)
    }

    /// Invalid scalar shaped like `column`'s own element type.
    pub fn empty_like(column: &Column) -> Self {
        Self::null(column.dtype())
    }

    pub fn from_f64(v: f64, to: DataType) -> Result<Self, KernelError> {
        Ok(Self::new(ScalarValue::from_f64(v, to)?))
    }

    pub fn from_i128(v: i128, to: DataType) -> Result<Self, KernelError> {
        Ok(Self::new(ScalarValue::from_i128(v, to)?))
    }

    /// Wraps a row or distinct-value count as a scalar of `to`.
    pub fn from_count(n: usize, to: DataType) -> Result<Self, KernelError> {
        Self::from_i128(n as i128, to)
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    #[inline]
    pub fn value(&self) -> ScalarValue {
        self.value
    }

    #[inline]
    pub fn dtype(&self) -> DataType {
        self.value.dtype()
    }

    /// Numeric view of a valid scalar.
    pub fn as_f64(&self) -> Option<f64> {
        if !self.valid {
            return None;
        }
        self.value.to_f64()
    }

    /// Integer view of a valid integer or boolean scalar.
    pub fn as_i64(&self) -> Option<i64> {
        if !self.valid {
            return None;
        }
        match self.value {
            ScalarValue::Boolean(b) => Some(b as i64),
            ScalarValue::Int32(v) => Some(v as i64),
            ScalarValue::Int64(v) => Some(v),
            ScalarValue::UInt32(v) => Some(v as i64),
            ScalarValue::UInt64(v) => i64::try_from(v).ok(),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match (self.valid, self.value) {
            (true, ScalarValue::Boolean(b)) => Some(b),
            _ => None,
        }
    }

    /// Casts to `to`. Invalid scalars stay invalid and take the zero of `to`.
    pub fn cast(self, to: DataType) -> Result<Self, KernelError> {
        if !self.valid {
            return Ok(Self::null(to));
        }
        Ok(Self::new(self.value.cast(to)?))
    }

    /// Equality that compares floating-point payloads by bit pattern, so NaN results
    /// of repeated reductions still compare equal.
    pub fn bit_eq(&self, other: &Scalar) -> bool {
        if self.valid != other.valid {
            return false;
        }
        match (self.value, other.value) {
            (ScalarValue::Float32(a), ScalarValue::Float32(b)) => a.to_bits() == b.to_bits(),
            (ScalarValue::Float64(a), ScalarValue::Float64(b)) => a.to_bits() == b.to_bits(),
            (a, b) => a == b,
        }
    }
}
