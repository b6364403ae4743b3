// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Aggregation Kernels Module** - *Null-Aware Statistical Reductions*
//!
//! Null-aware aggregation kernels over a value slice plus an optional validity mask.
//! These are the numeric building blocks behind `NativeKernels`.
//!
//! ## Core Operations
//! - **Sum / product / sum of squares**: `f64` accumulation or checked `i128` accumulation
//! - **Min/Max operations**: total ordering, so NaN ranks above `+inf`
//! - **Any/All**: truthiness over valid values
//! - **Statistical moments**: Mean, variance, and standard deviation calculations
//! - **Distinct counts**: hashing with NaN and signed-zero canonicalisation
//!
//! Every kernel returns `None` when there are no valid values; callers decide what an
//! empty reduction means.

#[cfg(not(feature = "fast_hash"))]
use std::collections::HashSet;

#[cfg(feature = "fast_hash")]
use ahash::AHashSet;
use minarrow::Bitmask;

use crate::errors::KernelError;
use crate::operators::NanPolicy;
use crate::traits::dense_iter::DenseIter;
use crate::types::NativeType;
use crate::utils::has_nulls;

#[inline(always)]
fn valid_values<'a, T: NativeType>(
    d: &'a [T],
    m: Option<&'a Bitmask>,
    null_count: Option<usize>,
) -> DenseIter<'a, T> {
    if has_nulls(null_count, m) {
        DenseIter::new(d, m)
    } else {
        DenseIter::new(d, None)
    }
}

#[inline(always)]
fn exact<T: NativeType>(v: T, fname: &str) -> Result<i128, KernelError> {
    v.to_i128().ok_or_else(|| {
        KernelError::TypeMismatch(format!(
            "{}: exact accumulation requested for {:?}",
            fname,
            T::DTYPE
        ))
    })
}

#[inline(always)]
fn overflow(fname: &str) -> KernelError {
    KernelError::Overflow(format!("{}: accumulator exceeded i128", fname))
}

/// Computes sum, sum-of-squares and count of the valid values in `f64`.
pub fn stat_moments<T: NativeType>(
    d: &[T],
    m: Option<&Bitmask>,
    null_count: Option<usize>,
) -> (f64, f64, usize) {
    let (mut sum, mut sum2, mut cnt) = (0.0_f64, 0.0_f64, 0_usize);
    for v in valid_values(d, m, null_count) {
        let x = v.to_f64();
        sum += x;
        sum2 += x * x;
        cnt += 1;
    }
    (sum, sum2, cnt)
}

/// Sum of valid values accumulated in `f64`.
pub fn sum_f64<T: NativeType>(d: &[T], m: Option<&Bitmask>, null_count: Option<usize>) -> Option<f64> {
    let (sum, _, cnt) = stat_moments(d, m, null_count);
    (cnt > 0).then_some(sum)
}

/// Exact sum of valid integer values.
pub fn sum_i128<T: NativeType>(
    d: &[T],
    m: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<Option<i128>, KernelError> {
    let mut acc: Option<i128> = None;
    for v in valid_values(d, m, null_count) {
        let x = exact(v, "sum")?;
        acc = Some(acc.unwrap_or(0).checked_add(x).ok_or_else(|| overflow("sum"))?);
    }
    Ok(acc)
}

/// Product of valid values accumulated in `f64`.
pub fn product_f64<T: NativeType>(
    d: &[T],
    m: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Option<f64> {
    valid_values(d, m, null_count).fold(None, |acc, v| Some(acc.unwrap_or(1.0) * v.to_f64()))
}

/// Exact product of valid integer values.
pub fn product_i128<T: NativeType>(
    d: &[T],
    m: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<Option<i128>, KernelError> {
    let mut acc: Option<i128> = None;
    for v in valid_values(d, m, null_count) {
        let x = exact(v, "product")?;
        acc = Some(acc.unwrap_or(1).checked_mul(x).ok_or_else(|| overflow("product"))?);
    }
    Ok(acc)
}

/// Computes the sum of squares (Σx²) in `f64`.
pub fn sum_squares_f64<T: NativeType>(
    d: &[T],
    m: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Option<f64> {
    let (_, sum2, cnt) = stat_moments(d, m, null_count);
    (cnt > 0).then_some(sum2)
}

/// Exact sum of squares of valid integer values.
pub fn sum_squares_i128<T: NativeType>(
    d: &[T],
    m: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<Option<i128>, KernelError> {
    let mut acc: Option<i128> = None;
    for v in valid_values(d, m, null_count) {
        let x = exact(v, "sum_of_squares")?;
        let sq = x.checked_mul(x).ok_or_else(|| overflow("sum_of_squares"))?;
        acc = Some(
            acc.unwrap_or(0)
                .checked_add(sq)
                .ok_or_else(|| overflow("sum_of_squares"))?,
        );
    }
    Ok(acc)
}

/// Smallest valid value under the element's total order.
pub fn min<T: NativeType>(d: &[T], m: Option<&Bitmask>, null_count: Option<usize>) -> Option<T> {
    valid_values(d, m, null_count).min_by(|a, b| a.total_cmp(b))
}

/// Largest valid value under the element's total order.
pub fn max<T: NativeType>(d: &[T], m: Option<&Bitmask>, null_count: Option<usize>) -> Option<T> {
    valid_values(d, m, null_count).max_by(|a, b| a.total_cmp(b))
}

/// Smallest and largest valid values in one pass.
pub fn min_max<T: NativeType>(
    d: &[T],
    m: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Option<(T, T)> {
    valid_values(d, m, null_count).fold(None, |acc, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((
            if v.total_cmp(&lo).is_lt() { v } else { lo },
            if v.total_cmp(&hi).is_gt() { v } else { hi },
        )),
    })
}

/// True if any valid value is non-zero.
pub fn any<T: NativeType>(d: &[T], m: Option<&Bitmask>, null_count: Option<usize>) -> Option<bool> {
    let mut seen = false;
    for v in valid_values(d, m, null_count) {
        if v.is_truthy() {
            return Some(true);
        }
        seen = true;
    }
    seen.then_some(false)
}

/// True if every valid value is non-zero.
pub fn all<T: NativeType>(d: &[T], m: Option<&Bitmask>, null_count: Option<usize>) -> Option<bool> {
    let mut seen = false;
    for v in valid_values(d, m, null_count) {
        if !v.is_truthy() {
            return Some(false);
        }
        seen = true;
    }
    seen.then_some(true)
}

/// Arithmetic mean of valid values.
pub fn mean<T: NativeType>(d: &[T], m: Option<&Bitmask>, null_count: Option<usize>) -> Option<f64> {
    let (sum, _, cnt) = stat_moments(d, m, null_count);
    (cnt > 0).then(|| sum / cnt as f64)
}

/// Variance of valid values with divisor `count - ddof`.
///
/// Two passes: mean first, then squared deviations. `None` when `count <= ddof`.
pub fn variance<T: NativeType>(
    d: &[T],
    m: Option<&Bitmask>,
    null_count: Option<usize>,
    ddof: usize,
) -> Option<f64> {
    let (sum, _, cnt) = stat_moments(d, m, null_count);
    if cnt <= ddof {
        return None;
    }
    let mu = sum / cnt as f64;
    let ss: f64 = valid_values(d, m, null_count)
        .map(|v| {
            let dx = v.to_f64() - mu;
            dx * dx
        })
        .sum();
    Some(ss / (cnt - ddof) as f64)
}

/// Standard deviation: square root of [`variance`].
pub fn std_dev<T: NativeType>(
    d: &[T],
    m: Option<&Bitmask>,
    null_count: Option<usize>,
    ddof: usize,
) -> Option<f64> {
    variance(d, m, null_count, ddof).map(f64::sqrt)
}

/// Distinct value count summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DistinctCount {
    /// Distinct non-null values.
    pub values: usize,
    /// Whether any NaN was folded into the null group under `NanIsNull`.
    pub nan_as_null: bool,
}

/// Counts distinct valid values. All NaNs are one value, and `-0.0 == 0.0`.
pub fn count_distinct<T: NativeType>(
    d: &[T],
    m: Option<&Bitmask>,
    null_count: Option<usize>,
    nan_handling: NanPolicy,
) -> DistinctCount {
    #[cfg(feature = "fast_hash")]
    let mut seen: AHashSet<u64> = AHashSet::with_capacity(d.len());
    #[cfg(not(feature = "fast_hash"))]
    let mut seen: HashSet<u64> = HashSet::with_capacity(d.len());

    let mut nan_as_null = false;
    for v in valid_values(d, m, null_count) {
        if nan_handling == NanPolicy::NanIsNull && v.is_nan() {
            nan_as_null = true;
            continue;
        }
        seen.insert(v.distinct_key());
    }
    DistinctCount {
        values: seen.len(),
        nan_as_null,
    }
}

#[cfg(test)]
mod tests {
    use minarrow::{Bitmask, vec64};

    use super::*;

    fn mask_from_bools(bits: &[bool]) -> Bitmask {
        Bitmask::from_bools(bits)
    }

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() <= eps
    }

    #[test]
    fn test_stat_moments_masked() {
        let data = vec64![1.0, 2.0, 3.0, 4.0];
        let mask = mask_from_bools(&[true, false, true, false]);
        let (sum, sum2, count) = stat_moments(&data, Some(&mask), Some(2));
        assert_eq!(sum, 4.0);
        assert_eq!(sum2, 10.0);
        assert_eq!(count, 2);
    }

    #[test]
    fn test_sum_paths() {
        let data = [1i32, 2, 3, 4];
        let mask = mask_from_bools(&[true, true, false, true]);
        assert_eq!(sum_i128(&data, Some(&mask), Some(1)).unwrap(), Some(7));
        assert_eq!(sum_f64(&data, None, None), Some(10.0));
        assert_eq!(sum_f64::<i32>(&[], None, None), None);
    }

    #[test]
    fn test_sum_i128_rejects_floats() {
        assert!(matches!(
            sum_i128(&[1.0f64], None, None),
            Err(KernelError::TypeMismatch(_))
        ));
    }

    #[test]
    fn test_product_overflow() {
        let data = [i64::MAX; 4];
        assert!(matches!(
            product_i128(&data, None, None),
            Err(KernelError::Overflow(_))
        ));
        assert_eq!(product_i128(&[2u32, 3, 7], None, None).unwrap(), Some(42));
        assert_eq!(product_f64(&[0.5f64, 4.0], None, None), Some(2.0));
    }

    #[test]
    fn test_sum_squares() {
        assert_eq!(sum_squares_i128(&[1i64, -2, 3], None, None).unwrap(), Some(14));
        assert_eq!(sum_squares_f64(&[1.5f64, 0.5], None, None), Some(2.5));
    }

    #[test]
    fn test_min_max_with_nan() {
        let data = [3.0f64, f64::NAN, -1.0, 7.5];
        assert_eq!(min(&data, None, None), Some(-1.0));
        assert!(max(&data, None, None).unwrap().is_nan());
        let mask = mask_from_bools(&[true, false, true, true]);
        assert_eq!(max(&data, Some(&mask), Some(1)), Some(7.5));
        assert_eq!(min_max(&[4u64, 1, 9], None, None), Some((1, 9)));
    }

    #[test]
    fn test_any_all() {
        let data = [0i32, 0, 5];
        let mask = mask_from_bools(&[true, true, false]);
        assert_eq!(any(&data, Some(&mask), Some(1)), Some(false));
        assert_eq!(any(&data, None, None), Some(true));
        assert_eq!(all(&[1i64, 2], None, None), Some(true));
        assert_eq!(all(&[true, false], None, None), Some(false));
        assert_eq!(all::<i32>(&[], None, None), None);
    }

    #[test]
    fn test_variance_and_std() {
        let data = [2.0f64, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let var = variance(&data, None, None, 1).unwrap();
        assert!(approx_eq(var, 32.0 / 7.0, 1e-12));
        let pop = variance(&data, None, None, 0).unwrap();
        assert!(approx_eq(pop, 4.0, 1e-12));
        assert!(approx_eq(std_dev(&data, None, None, 0).unwrap(), 2.0, 1e-12));
        assert_eq!(variance(&[1.0f64], None, None, 1), None);
    }

    #[test]
    fn test_mean() {
        let data = [1i32, 2, 3, 100];
        let mask = mask_from_bools(&[true, true, true, false]);
        assert_eq!(mean(&data, Some(&mask), Some(1)), Some(2.0));
    }

    #[test]
    fn test_count_distinct() {
        let data = [1.0f64, f64::NAN, 1.0, -0.0, 0.0, f64::NAN];
        let valid = count_distinct(&data, None, None, NanPolicy::NanIsValid);
        assert_eq!(valid.values, 3);
        assert!(!valid.nan_as_null);
        let as_null = count_distinct(&data, None, None, NanPolicy::NanIsNull);
        assert_eq!(as_null.values, 2);
        assert!(as_null.nan_as_null);

        let ints = [1i64, 1, 7, 2];
        let mask = mask_from_bools(&[true, true, false, true]);
        assert_eq!(
            count_distinct(&ints, Some(&mask), Some(1), NanPolicy::NanIsValid).values,
            2
        );
    }
}
