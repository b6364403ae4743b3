// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Quantile Kernels Module** - *Order Statistics over Index Permutations*
//!
//! Quantiles are computed over an explicit list of row indices rather than over the
//! whole column, so callers can restrict the computation to the valid prefix of a
//! sorted permutation without copying values.
//!
//! For `n` indices and fraction `q` the fractional position is `q * (n - 1)`:
//! - `Linear`: `lo + (hi - lo) * frac`
//! - `Midpoint`: `(lo + hi) / 2`
//! - `Lower` / `Higher`: value at `floor(pos)` / `ceil(pos)`
//! - `Nearest`: value at `pos` rounded half to even
//!
//! `Linear` and `Midpoint` produce `Float64`; the other methods keep the element type.

use std::borrow::Cow;

use crate::column::Column;
use crate::errors::KernelError;
use crate::kernels::sort::sort_indices_by_value;
use crate::operators::{Interpolation, SortOrder};
use crate::types::NativeType;

/// Rejects fractions outside `[0, 1]`, including NaN.
#[inline]
pub fn validate_quantiles(quantiles: &[f64]) -> Result<(), KernelError> {
    for &q in quantiles {
        if !(0.0..=1.0).contains(&q) {
            return Err(KernelError::InvalidArguments(format!(
                "quantile: fraction {} outside [0, 1]",
                q
            )));
        }
    }
    Ok(())
}

#[inline(always)]
fn bracket(q: f64, n: usize) -> (usize, usize, f64) {
    let pos = q * (n - 1) as f64;
    let lo = pos.floor();
    (lo as usize, pos.ceil() as usize, pos - lo)
}

#[inline(always)]
fn interpolate(interpolation: Interpolation, lo: f64, hi: f64, frac: f64) -> f64 {
    match interpolation {
        Interpolation::Midpoint if lo != hi => lo / 2.0 + hi / 2.0,
        Interpolation::Linear if frac != 0.0 => lo + (hi - lo) * frac,
        _ => lo,
    }
}

#[inline(always)]
fn discrete_position(interpolation: Interpolation, q: f64, n: usize) -> usize {
    let pos = q * (n - 1) as f64;
    let p = match interpolation {
        Interpolation::Lower => pos.floor(),
        Interpolation::Higher => pos.ceil(),
        _ => pos.round_ties_even(),
    };
    (p as usize).min(n - 1)
}

/// Computes one quantile per entry of `quantiles` over the rows listed in `indices`.
///
/// When `sorted` is false the indices are first ordered by value (stable, total order).
/// With no indices every output entry is null.
pub fn quantile_over_indices<T: NativeType>(
    data: &[T],
    quantiles: &[f64],
    interpolation: Interpolation,
    indices: &[usize],
    sorted: bool,
    parallel: bool,
) -> Result<Column, KernelError> {
    validate_quantiles(quantiles)?;
    if let Some(&bad) = indices.iter().find(|&&i| i >= data.len()) {
        return Err(KernelError::OutOfBounds(format!(
            "quantile: index {} outside 0..{}",
            bad,
            data.len()
        )));
    }

    let ordered: Cow<'_, [usize]> = if sorted {
        Cow::Borrowed(indices)
    } else {
        let mut owned = indices.to_vec();
        sort_indices_by_value(data, &mut owned, SortOrder::Ascending, parallel);
        Cow::Owned(owned)
    };
    let n = ordered.len();

    let column = match interpolation {
        Interpolation::Linear | Interpolation::Midpoint => {
            let out: Vec<Option<f64>> = quantiles
                .iter()
                .map(|&q| {
                    (n > 0).then(|| {
                        let (lo, hi, frac) = bracket(q, n);
                        let a = data[ordered[lo]].to_f64();
                        let b = data[ordered[hi]].to_f64();
                        interpolate(interpolation, a, b, frac)
                    })
                })
                .collect();
            Column::from_options(&out)
        }
        Interpolation::Lower | Interpolation::Higher | Interpolation::Nearest => {
            let out: Vec<Option<T>> = quantiles
                .iter()
                .map(|&q| (n > 0).then(|| data[ordered[discrete_position(interpolation, q, n)]]))
                .collect();
            Column::from_options(&out)
        }
    };
    Ok(column)
}
