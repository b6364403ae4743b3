// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! Aggregation descriptors and the policy enums that parameterise them.
//!
//! An [`Aggregation`] is a closed sum type: each variant carries exactly the
//! payload its kind needs, so the reduction dispatcher recovers parameters by
//! pattern matching rather than by inspecting a kind tag and downcasting.

use core::fmt;

/// Plain kind tag for an [`Aggregation`], used in logs and error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AggregationKind {
    Sum,
    Product,
    Min,
    Max,
    Any,
    All,
    SumOfSquares,
    Mean,
    Variance,
    Std,
    Median,
    Quantile,
    NUnique,
    NthElement,
    CountValid,
    CountAll,
    ArgMin,
    ArgMax,
    CollectList,
}

impl AggregationKind {
    /// Lower-case name used in diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            AggregationKind::Sum => "sum",
            AggregationKind::Product => "product",
            AggregationKind::Min => "min",
            AggregationKind::Max => "max",
            AggregationKind::Any => "any",
            AggregationKind::All => "all",
            AggregationKind::SumOfSquares => "sum_of_squares",
            AggregationKind::Mean => "mean",
            AggregationKind::Variance => "variance",
            AggregationKind::Std => "std",
            AggregationKind::Median => "median",
            AggregationKind::Quantile => "quantile",
            AggregationKind::NUnique => "nunique",
            AggregationKind::NthElement => "nth_element",
            AggregationKind::CountValid => "count_valid",
            AggregationKind::CountAll => "count_all",
            AggregationKind::ArgMin => "argmin",
            AggregationKind::ArgMax => "argmax",
            AggregationKind::CollectList => "collect_list",
        }
    }
}

impl fmt::Display for AggregationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Rule for picking a value when a quantile falls between two ranks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Interpolation {
    /// `lo + (hi - lo) * fraction`
    #[default]
    Linear,
    /// Value at the lower rank.
    Lower,
    /// Value at the higher rank.
    Higher,
    /// Arithmetic mean of the two neighbouring ranks.
    Midpoint,
    /// Value at the nearest rank, ties rounding to the even rank.
    Nearest,
}

/// Whether null rows take part in an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NullPolicy {
    /// Nulls are skipped.
    #[default]
    Exclude,
    /// Nulls are counted or indexed like any other row.
    Include,
}

/// How NaN values are treated when counting distinct values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NanPolicy {
    /// NaN is an ordinary value; all NaNs are one distinct value.
    #[default]
    NanIsValid,
    /// NaN is treated as null.
    NanIsNull,
}

/// Placement of null rows in a sorted order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NullOrder {
    Before,
    #[default]
    After,
}

/// Sort direction for order-producing kernels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

/// Aggregation request: kind plus its kind-specific payload.
///
/// The variants past `NthElement` exist for grouped and windowed engines that share
/// this descriptor; whole-column reduction rejects them.
#[derive(Debug, Clone, PartialEq)]
pub enum Aggregation {
    Sum,
    Product,
    Min,
    Max,
    Any,
    All,
    SumOfSquares,
    Mean,
    /// Variance with `ddof` subtracted from the divisor.
    Variance { ddof: usize },
    /// Standard deviation with `ddof` subtracted from the divisor.
    Std { ddof: usize },
    /// Fixed at the 0.5 quantile with linear interpolation.
    Median,
    /// Requested quantile fractions in `[0, 1]`. Reduction accepts exactly one.
    Quantile {
        quantiles: Vec<f64>,
        interpolation: Interpolation,
    },
    /// Distinct value count.
    NUnique { null_handling: NullPolicy },
    /// Element at a zero-based index; negative indices count from the end.
    NthElement { n: i64, null_handling: NullPolicy },
    CountValid,
    CountAll,
    ArgMin,
    ArgMax,
    CollectList,
}

impl Aggregation {
    pub fn variance(ddof: usize) -> Self {
        Aggregation::Variance { ddof }
    }

    pub fn std(ddof: usize) -> Self {
        Aggregation::Std { ddof }
    }

    /// Single-quantile request.
    pub fn quantile(q: f64, interpolation: Interpolation) -> Self {
        Aggregation::Quantile {
            quantiles: vec![q],
            interpolation,
        }
    }

    pub fn quantiles(quantiles: Vec<f64>, interpolation: Interpolation) -> Self {
        Aggregation::Quantile {
            quantiles,
            interpolation,
        }
    }

    pub fn nunique(null_handling: NullPolicy) -> Self {
        Aggregation::NUnique { null_handling }
    }

    pub fn nth_element(n: i64, null_handling: NullPolicy) -> Self {
        Aggregation::NthElement { n, null_handling }
    }

    /// Returns the kind tag of this descriptor.
    pub fn kind(&self) -> AggregationKind {
        match self {
            Aggregation::Sum => AggregationKind::Sum,
            Aggregation::Product => AggregationKind::Product,
            Aggregation::Min => AggregationKind::Min,
            Aggregation::Max => AggregationKind::Max,
            Aggregation::Any => AggregationKind::Any,
            Aggregation::All => AggregationKind::All,
            Aggregation::SumOfSquares => AggregationKind::SumOfSquares,
            Aggregation::Mean => AggregationKind::Mean,
            Aggregation::Variance { .. } => AggregationKind::Variance,
            Aggregation::Std { .. } => AggregationKind::Std,
            Aggregation::Median => AggregationKind::Median,
            Aggregation::Quantile { .. } => AggregationKind::Quantile,
            Aggregation::NUnique { .. } => AggregationKind::NUnique,
            Aggregation::NthElement { .. } => AggregationKind::NthElement,
            Aggregation::CountValid => AggregationKind::CountValid,
            Aggregation::CountAll => AggregationKind::CountAll,
            Aggregation::ArgMin => AggregationKind::ArgMin,
            Aggregation::ArgMax => AggregationKind::ArgMax,
            Aggregation::CollectList => AggregationKind::CollectList,
        }
    }
}
