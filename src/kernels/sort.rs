// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Sorting Kernels Module** - *Null-Aware Argsort*
//!
//! Argsort kernels that return row permutations rather than reordering data.
//! Valid rows are ordered by the element's total order (so NaN ranks above `+inf`);
//! null rows are grouped before or after them, in row order.
//!
//! All sorts are stable: rows with equal values keep their original relative order,
//! in both ascending and descending mode.

use std::cmp::Ordering;

use minarrow::Bitmask;

use crate::config::PARALLEL_SORT_THRESHOLD;
use crate::operators::{NullOrder, SortOrder};
use crate::traits::dense_iter::valid_positions;
use crate::types::NativeType;

#[inline(always)]
fn compare_rows<T: NativeType>(data: &[T], i: usize, j: usize, order: SortOrder) -> Ordering {
    match order {
        SortOrder::Ascending => data[i].total_cmp(&data[j]),
        SortOrder::Descending => data[j].total_cmp(&data[i]),
    }
}

/// Stable in-place sort of row indices by the values they address.
///
/// With `parallel` set and the `parallel_sort` feature enabled, inputs of at least
/// [`PARALLEL_SORT_THRESHOLD`] rows are sorted on the rayon pool.
pub fn sort_indices_by_value<T: NativeType>(
    data: &[T],
    indices: &mut [usize],
    order: SortOrder,
    parallel: bool,
) {
    #[cfg(feature = "parallel_sort")]
    {
        if parallel && indices.len() >= PARALLEL_SORT_THRESHOLD {
            parallel_argsort::par_sort_indices(data, indices, order);
            return;
        }
    }
    #[cfg(not(feature = "parallel_sort"))]
    let _ = (parallel, PARALLEL_SORT_THRESHOLD);

    indices.sort_by(|&i, &j| compare_rows(data, i, j, order));
}

/// Null-aware argsort.
///
/// Returns a permutation of `0..data.len()`. Valid rows come in value order; null
/// rows are placed per `null_order` and keep their row order.
pub fn argsort_with_nulls<T: NativeType>(
    data: &[T],
    mask: Option<&Bitmask>,
    order: SortOrder,
    null_order: NullOrder,
    parallel: bool,
) -> Vec<usize> {
    let n = data.len();
    if n == 0 {
        return vec![];
    }
    let mut valid = valid_positions(n, mask);
    sort_indices_by_value(data, &mut valid, order, parallel);

    if valid.len() == n {
        return valid;
    }
    let nulls: Vec<usize> = match mask {
        Some(m) => (0..n).filter(|&i| !m.get(i)).collect(),
        None => vec![],
    };

    let mut out = Vec::with_capacity(n);
    match null_order {
        NullOrder::Before => {
            out.extend_from_slice(&nulls);
            out.extend_from_slice(&valid);
        }
        NullOrder::After => {
            out.extend_from_slice(&valid);
            out.extend_from_slice(&nulls);
        }
    }
    out
}

// Parallel Sort (feature-gated)

#[cfg(feature = "parallel_sort")]
pub mod parallel_argsort {
    use rayon::prelude::*;

    use super::compare_rows;
    use crate::operators::SortOrder;
    use crate::types::NativeType;

    /// Stable parallel sort of row indices by value.
    pub fn par_sort_indices<T: NativeType>(data: &[T], indices: &mut [usize], order: SortOrder) {
        indices.par_sort_by(|&i, &j| compare_rows(data, i, j, order));
    }
}

#[cfg(test)]
mod tests {
    use minarrow::vec64;

    use super::*;

    fn dense<T: NativeType>(data: &[T], order: SortOrder) -> Vec<usize> {
        argsort_with_nulls(data, None, order, NullOrder::After, false)
    }

    #[test]
    fn test_argsort_ints() {
        let data = vec64![4i32, 2, 7, 1];
        assert_eq!(dense(&data, SortOrder::Ascending), vec![3, 1, 0, 2]);
        assert_eq!(dense(&data, SortOrder::Descending), vec![2, 0, 1, 3]);
        assert!(dense::<i64>(&[], SortOrder::Ascending).is_empty());
    }

    #[test]
    fn test_argsort_floats_nan_last() {
        let data = [f64::NAN, 1.0, f64::NEG_INFINITY, f64::INFINITY];
        assert_eq!(dense(&data, SortOrder::Ascending), vec![2, 1, 3, 0]);
    }

    #[test]
    fn test_argsort_negative_nan_last() {
        // 0.0 / 0.0 on x86 yields a NaN with the sign bit set
        let neg_nan = f64::from_bits(0xfff8_0000_0000_0000);
        let data = [neg_nan, 1.0, 2.0, f64::NAN, 3.0];
        assert_eq!(dense(&data, SortOrder::Ascending), vec![1, 2, 4, 0, 3]);
        let data32 = [f32::from_bits(0xffc0_0000), f32::NEG_INFINITY];
        assert_eq!(dense(&data32, SortOrder::Ascending), vec![1, 0]);
    }

    #[test]
    fn test_argsort_is_stable() {
        let data = [2u32, 1, 2, 1];
        assert_eq!(dense(&data, SortOrder::Ascending), vec![1, 3, 0, 2]);
        assert_eq!(dense(&data, SortOrder::Descending), vec![0, 2, 1, 3]);
    }

    #[test]
    fn test_argsort_with_nulls_after() {
        let data = [5i64, 0, 3, 0, 9];
        let mask = Bitmask::from_bools(&[true, false, true, false, true]);
        let idx = argsort_with_nulls(
            &data,
            Some(&mask),
            SortOrder::Ascending,
            NullOrder::After,
            false,
        );
        assert_eq!(idx, vec![2, 0, 4, 1, 3]);
    }

    #[test]
    fn test_argsort_with_nulls_before_descending() {
        let data = [5i64, 0, 3, 0, 9];
        let mask = Bitmask::from_bools(&[true, false, true, false, true]);
        let idx = argsort_with_nulls(
            &data,
            Some(&mask),
            SortOrder::Descending,
            NullOrder::Before,
            false,
        );
        assert_eq!(idx, vec![1, 3, 4, 0, 2]);
    }

    #[test]
    fn test_argsort_with_nulls_dense() {
        let data = [true, false, true];
        let idx = argsort_with_nulls(&data, None, SortOrder::Ascending, NullOrder::After, true);
        assert_eq!(idx, vec![1, 0, 2]);
    }

    #[cfg(feature = "parallel_sort")]
    #[test]
    fn test_parallel_matches_sequential() {
        let n = PARALLEL_SORT_THRESHOLD + 17;
        let data: Vec<i64> = (0..n as i64).map(|i| (i * 7919) % 1013).collect();
        let mut seq: Vec<usize> = (0..n).collect();
        sort_indices_by_value(&data, &mut seq, SortOrder::Ascending, false);
        let mut par: Vec<usize> = (0..n).collect();
        sort_indices_by_value(&data, &mut par, SortOrder::Ascending, true);
        assert_eq!(seq, par);
    }
}
