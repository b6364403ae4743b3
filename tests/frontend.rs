// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

mod util;

use columnar_reduce::frontend::{self, ReduceOptions};
use columnar_reduce::{Column, DataType, Interpolation, NullPolicy, ScalarValue};
use util::{assert_close, assert_scalar_close};

#[test]
fn skipna_drops_nans_and_nulls() {
    let col = Column::from_options(&[Some(1.0f64), Some(f64::NAN), None, Some(3.0)]);
    let opts = ReduceOptions::default();
    assert_scalar_close(&frontend::sum(&col, &opts).unwrap(), 4.0, 0.0);
    assert_scalar_close(&frontend::mean(&col, &opts).unwrap(), 2.0, 0.0);
    assert_scalar_close(&frontend::median(&col, &opts).unwrap(), 2.0, 0.0);
    assert_scalar_close(&frontend::max(&col, &opts).unwrap(), 3.0, 0.0);
}

#[test]
fn without_skipna_nan_or_null_is_na() {
    let opts = ReduceOptions::new().skipna(false);
    let with_nan = Column::from_slice(&[1.0f64, f64::NAN]);
    assert_close(frontend::sum(&with_nan, &opts).unwrap().as_f64().unwrap(), f64::NAN, 0.0);

    let with_null = Column::from_options(&[Some(2i32), None]);
    let s = frontend::sum(&with_null, &opts).unwrap();
    assert!(!s.is_valid());
    assert_eq!(s.dtype(), DataType::Int64);
    let m = frontend::mean(&with_null, &opts).unwrap();
    assert!(m.as_f64().unwrap().is_nan());
}

#[test]
fn min_count_threshold() {
    let col = Column::from_options(&[Some(5u32), None, Some(7)]);
    let s = frontend::product(&col, &ReduceOptions::new().min_count(2)).unwrap();
    assert_eq!(s.value(), ScalarValue::Int64(35));
    let s = frontend::product(&col, &ReduceOptions::new().min_count(3)).unwrap();
    assert!(!s.is_valid());
}

#[test]
fn var_std_default_ddof() {
    let col = Column::from_slice(&[2i64, 4, 4, 4, 5, 5, 7, 9]);
    let opts = ReduceOptions::default();
    assert_scalar_close(&frontend::var(&col, None, &opts).unwrap(), 32.0 / 7.0, 1e-12);
    assert_scalar_close(&frontend::var(&col, Some(0), &opts).unwrap(), 4.0, 1e-12);
    assert_scalar_close(&frontend::std(&col, Some(0), &opts).unwrap(), 2.0, 1e-12);
}

#[test]
fn quantile_output_is_float64() {
    let col = Column::from_slice(&[10i32, 20, 30]);
    let s = frontend::quantile(&col, 0.5, Interpolation::Higher, &ReduceOptions::default())
        .unwrap();
    assert_eq!(s.value(), ScalarValue::Float64(20.0));
}

#[test]
fn sum_of_squares_types() {
    let opts = ReduceOptions::default();
    let u = Column::from_slice(&[3u32, 4]);
    assert_eq!(
        frontend::sum_of_squares(&u, &opts).unwrap().value(),
        ScalarValue::UInt32(25)
    );
    let f = Column::from_slice(&[0.5f32, 1.5]);
    assert_eq!(
        frontend::sum_of_squares(&f, &opts).unwrap().value(),
        ScalarValue::Float32(2.5)
    );
    let b = Column::from_slice(&[true, true, false]);
    assert_eq!(
        frontend::sum_of_squares(&b, &opts).unwrap().value(),
        ScalarValue::UInt64(2)
    );
}

#[test]
fn any_all_follow_dataframe_rules() {
    let nan_only = Column::from_slice(&[f64::NAN]);
    assert!(frontend::all(&nan_only, true).unwrap());
    assert!(!frontend::any(&nan_only, true).unwrap());
    assert!(frontend::any(&nan_only, false).unwrap());

    let bools = Column::from_options(&[Some(true), None, Some(true)]);
    assert!(frontend::all(&bools, true).unwrap());
    assert!(frontend::any(&bools, false).unwrap());
}

#[test]
fn nunique_and_nth() {
    let col = Column::from_options(&[Some(3i64), None, Some(3), Some(8)]);
    assert_eq!(frontend::nunique(&col, true).unwrap(), 2);
    assert_eq!(frontend::nunique(&col, false).unwrap(), 3);
    let first = frontend::nth(&col, 0, NullPolicy::Include).unwrap();
    assert_eq!(first.value(), ScalarValue::Int64(3));
    let null_row = frontend::nth(&col, 1, NullPolicy::Include).unwrap();
    assert!(!null_row.is_valid());
}

#[test]
fn min_max_on_all_null_column() {
    let col = Column::from_options::<f32>(&[None, None]);
    let (lo, hi) = frontend::min_max(&col, &ReduceOptions::default()).unwrap();
    assert!(!lo.is_valid());
    assert!(!hi.is_valid());
    assert_eq!(lo.dtype(), DataType::Float32);
}

#[test]
fn min_max_one_pass_with_arithmetic_nan() {
    let neg_nan = f64::from_bits(0xfff8_0000_0000_0000);
    let col = Column::from_slice(&[3.0f64, neg_nan, -4.0]);

    let (lo, hi) = frontend::min_max(&col, &ReduceOptions::default()).unwrap();
    assert_eq!(lo.value(), ScalarValue::Float64(-4.0));
    assert_eq!(hi.value(), ScalarValue::Float64(3.0));

    let (lo, hi) = frontend::min_max(&col, &ReduceOptions::new().skipna(false)).unwrap();
    assert!(lo.as_f64().unwrap().is_nan());
    assert!(hi.as_f64().unwrap().is_nan());
}

#[test]
fn min_max_respects_min_count() {
    let col = Column::from_options(&[Some(2u64), None, Some(5)]);
    let (lo, hi) = frontend::min_max(&col, &ReduceOptions::new().min_count(2)).unwrap();
    assert_eq!(lo.value(), ScalarValue::UInt64(2));
    assert_eq!(hi.value(), ScalarValue::UInt64(5));
    let (lo, hi) = frontend::min_max(&col, &ReduceOptions::new().min_count(3)).unwrap();
    assert!(!lo.is_valid());
    assert!(!hi.is_valid());
}
