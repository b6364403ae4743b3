//! Test helpers with base columns
#![allow(unused)]

use columnar_reduce::Column;

/// Dense, nullable and fully-null versions of every column type
pub struct TestColumns {
    pub i32_dense: Column,
    pub i32_nulls: Column,
    pub i64_dense: Column,
    pub i64_nulls: Column,
    pub u32_dense: Column,
    pub u32_nulls: Column,
    pub u64_dense: Column,
    pub u64_nulls: Column,
    pub f32_dense: Column,
    pub f32_nulls: Column,
    pub f64_dense: Column,
    pub f64_nulls: Column,
    pub bool_dense: Column,
    pub bool_nulls: Column,
    pub i32_all_null: Column,
    pub f64_all_null: Column,
    pub bool_all_null: Column,
    pub i64_zero_len: Column,
    pub untyped_nulls: Column,
    pub untyped_zero_len: Column,
}

impl TestColumns {
    /// build once – reuse in every `#[test]`
    pub fn new() -> Self {
        Self {
            i32_dense: Column::from_slice(&[1, 2, 3, 4, 5]),
            i32_nulls: Column::from_options(&[Some(1), None, Some(3), Some(4), None]),
            i64_dense: Column::from_slice(&[10_i64, 20, 30, 40, 50]),
            i64_nulls: Column::from_options(&[Some(10_i64), None, Some(30), None, Some(50)]),
            u32_dense: Column::from_slice(&[1_u32, 2, 3, 4, 5]),
            u32_nulls: Column::from_options(&[None, Some(2_u32), Some(3), None, Some(5)]),
            u64_dense: Column::from_slice(&[100_u64, 200, 300, 400, 500]),
            u64_nulls: Column::from_options(&[Some(100_u64), None, None, Some(400), Some(500)]),
            f32_dense: Column::from_slice(&[1.0_f32, 2.0, 3.0, 4.0, 5.0]),
            f32_nulls: Column::from_options(&[Some(1.0_f32), None, Some(3.0), None, Some(5.0)]),
            f64_dense: Column::from_slice(&[1.0_f64, 2.0, 3.0, 4.0, 5.0]),
            f64_nulls: Column::from_options(&[None, Some(2.0_f64), Some(3.0), Some(4.0), None]),
            bool_dense: Column::from_slice(&[true, false, true, true, false]),
            bool_nulls: Column::from_options(&[Some(true), Some(false), Some(true), None, Some(true)]),
            i32_all_null: Column::from_options::<i32>(&[None, None, None]),
            f64_all_null: Column::from_options::<f64>(&[None, None]),
            bool_all_null: Column::from_options::<bool>(&[None]),
            i64_zero_len: Column::from_slice::<i64>(&[]),
            untyped_nulls: Column::empty(4),
            untyped_zero_len: Column::empty(0),
        }
    }

    /// Columns with at least one valid row.
    pub fn populated(&self) -> Vec<(&'static str, &Column)> {
        vec![
            ("i32_dense", &self.i32_dense),
            ("i32_nulls", &self.i32_nulls),
            ("i64_dense", &self.i64_dense),
            ("i64_nulls", &self.i64_nulls),
            ("u32_dense", &self.u32_dense),
            ("u32_nulls", &self.u32_nulls),
            ("u64_dense", &self.u64_dense),
            ("u64_nulls", &self.u64_nulls),
            ("f32_dense", &self.f32_dense),
            ("f32_nulls", &self.f32_nulls),
            ("f64_dense", &self.f64_dense),
            ("f64_nulls", &self.f64_nulls),
            ("bool_dense", &self.bool_dense),
            ("bool_nulls", &self.bool_nulls),
        ]
    }

    /// Columns with no valid rows.
    pub fn degenerate(&self) -> Vec<(&'static str, &Column)> {
        vec![
            ("i32_all_null", &self.i32_all_null),
            ("f64_all_null", &self.f64_all_null),
            ("bool_all_null", &self.bool_all_null),
            ("i64_zero_len", &self.i64_zero_len),
            ("untyped_nulls", &self.untyped_nulls),
            ("untyped_zero_len", &self.untyped_zero_len),
        ]
    }
}
