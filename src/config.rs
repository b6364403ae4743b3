// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

// These parameters should rarely need adjustment.

//! # **Configuration Constants** - *Reduction Behaviour Parameters*
//!
//! Compile-time constants controlling reduction defaults and performance thresholds.

use crate::operators::Interpolation;

/// Quantile fraction used by the median reduction.
pub const MEDIAN_QUANTILE: f64 = 0.5;

/// Interpolation used by the median reduction.
pub const MEDIAN_INTERPOLATION: Interpolation = Interpolation::Linear;

/// Degrees of freedom used by the front-end `var` and `std` when none is given.
pub const DEFAULT_DDOF: usize = 1;

/// Stream id of `ExecContext::default()`.
pub const DEFAULT_STREAM: u64 = 0;

/// Minimum row count before the `parallel_sort` feature hands argsort to rayon.
pub const PARALLEL_SORT_THRESHOLD: usize = 65_536;
