#![allow(unused)]

use columnar_reduce::Scalar;

pub fn assert_close(a: f64, e: f64, tol: f64) {
    if e.is_nan() {
        assert!(a.is_nan(), "expected NaN, got {a}");
        return;
    }
    if e.is_infinite() {
        assert!(
            a.is_infinite() && a.is_sign_positive() == e.is_sign_positive(),
            "expected {e}, got {a}"
        );
        return;
    }
    let scale = 1.0_f64.max(e.abs());
    let ok = (a - e).abs() <= tol * scale;
    assert!(ok, "mismatch: got {a}, expect {e} (tol={tol})");
}

/// Asserts `s` is valid and numerically close to `e`.
pub fn assert_scalar_close(s: &Scalar, e: f64, tol: f64) {
    match s.as_f64() {
        Some(a) => assert_close(a, e, tol),
        None => panic!("expected a valid scalar close to {e}, got {s:?}"),
    }
}
