// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Utility Functions** - *Bitmask and Bounds Helpers*
//!
//! Small helpers shared by the column model and the kernels.

use minarrow::{Bitmask, Vec64};

use crate::errors::KernelError;

/// Determines whether nulls are present given an optional null count and mask reference.
/// Avoids computing mask cardinality when a count is already known.
#[inline(always)]
pub fn has_nulls(null_count: Option<usize>, mask: Option<&Bitmask>) -> bool {
    match null_count {
        Some(n) => n > 0,
        None => mask.is_some(),
    }
}

/// Counts cleared bits in the first `len` positions of an optional validity mask.
#[inline]
pub fn count_nulls(len: usize, mask: Option<&Bitmask>) -> usize {
    match mask {
        None => 0,
        Some(m) => (0..len).filter(|&i| !m.get(i)).count(),
    }
}

/// Expands a packed boolean bitmask into one `bool` per row.
#[inline]
pub fn unpack_bools(bits: &Bitmask, len: usize) -> Vec64<bool> {
    (0..len).map(|i| bits.get(i)).collect()
}

/// Checks that `idx` addresses one of `len` rows.
#[inline(always)]
pub fn confirm_in_bounds(label: &str, idx: usize, len: usize) -> Result<(), KernelError> {
    if idx >= len {
        return Err(KernelError::OutOfBounds(format!(
            "{}: index {} outside 0..{}",
            label, idx, len
        )));
    }
    Ok(())
}

/// Checks that a buffer of `actual` slots matches the `expected` length.
#[inline(always)]
pub fn confirm_capacity(label: &str, actual: usize, expected: usize) -> Result<(), KernelError> {
    if actual != expected {
        return Err(KernelError::InvalidArguments(format!(
            "{}: capacity mismatch (expected {}, got {})",
            label, expected, actual
        )));
    }
    Ok(())
}

/// Checks that an optional validity mask covers exactly `cmp_len` rows.
#[inline(always)]
pub fn confirm_mask_capacity(cmp_len: usize, mask: Option<&Bitmask>) -> Result<(), KernelError> {
    if let Some(m) = mask {
        confirm_capacity("mask (Bitmask)", m.capacity(), cmp_len)?;
    }
    Ok(())
}
