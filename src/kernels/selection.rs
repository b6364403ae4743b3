// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Selection Kernels Module** - *Positional Row Resolution*
//!
//! Resolves positional requests such as "the n-th valid element" or "the last row"
//! into concrete row indices. Python-style negative positions count from the end.

use minarrow::Bitmask;

use crate::errors::KernelError;
use crate::operators::NullPolicy;

/// Maps a possibly negative position onto `0..count`.
///
/// Valid inputs lie in `[-count, count)`.
#[inline]
pub fn resolve_position(n: i64, count: usize) -> Result<usize, KernelError> {
    let count_i = i64::try_from(count)
        .map_err(|_| KernelError::Overflow(format!("nth_element: {} rows", count)))?;
    let k = if n < 0 { n + count_i } else { n };
    if k < 0 || k >= count_i {
        return Err(KernelError::OutOfBounds(format!(
            "nth_element: n = {} outside [{}, {})",
            n, -count_i, count_i
        )));
    }
    Ok(k as usize)
}

/// Row index of the `k`-th valid row (zero-based).
#[inline]
pub fn nth_valid_row(len: usize, mask: Option<&Bitmask>, k: usize) -> Option<usize> {
    match mask {
        None => (k < len).then_some(k),
        Some(m) => (0..len).filter(|&i| m.get(i)).nth(k),
    }
}

/// Resolves the row addressed by `nth_element(n, null_handling)`.
///
/// Under `Exclude` positions count valid rows only; under `Include` they count every
/// row and may address a null.
pub fn nth_row(
    len: usize,
    mask: Option<&Bitmask>,
    null_count: usize,
    n: i64,
    null_handling: NullPolicy,
) -> Result<usize, KernelError> {
    match null_handling {
        NullPolicy::Include => resolve_position(n, len),
        NullPolicy::Exclude => {
            let valid = len - null_count;
            let k = resolve_position(n, valid)?;
            nth_valid_row(len, mask, k).ok_or_else(|| {
                KernelError::OutOfBounds(format!(
                    "nth_element: valid row {} not found among {} rows",
                    k, len
                ))
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_position() {
        assert_eq!(resolve_position(0, 3).unwrap(), 0);
        assert_eq!(resolve_position(-1, 3).unwrap(), 2);
        assert_eq!(resolve_position(-3, 3).unwrap(), 0);
        assert!(matches!(resolve_position(3, 3), Err(KernelError::OutOfBounds(_))));
        assert!(matches!(resolve_position(-4, 3), Err(KernelError::OutOfBounds(_))));
        assert!(matches!(resolve_position(0, 0), Err(KernelError::OutOfBounds(_))));
    }

    #[test]
    fn test_nth_row_exclude_skips_nulls() {
        let mask = Bitmask::from_bools(&[false, true, false, true, true]);
        assert_eq!(nth_row(5, Some(&mask), 2, 0, NullPolicy::Exclude).unwrap(), 1);
        assert_eq!(nth_row(5, Some(&mask), 2, -1, NullPolicy::Exclude).unwrap(), 4);
        assert!(nth_row(5, Some(&mask), 2, 3, NullPolicy::Exclude).is_err());
    }

    #[test]
    fn test_nth_row_include_counts_all() {
        let mask = Bitmask::from_bools(&[false, true, true]);
        assert_eq!(nth_row(3, Some(&mask), 1, 0, NullPolicy::Include).unwrap(), 0);
        assert_eq!(nth_row(3, Some(&mask), 1, -3, NullPolicy::Include).unwrap(), 0);
        assert_eq!(nth_row(3, None, 0, 2, NullPolicy::Include).unwrap(), 2);
    }

    #[test]
    fn test_nth_valid_row_dense() {
        assert_eq!(nth_valid_row(4, None, 3), Some(3));
        assert_eq!(nth_valid_row(4, None, 4), None);
    }
}
