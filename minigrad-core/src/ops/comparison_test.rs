// minigrad-core/src/ops/comparison_test.rs

use super::*;

#[test]
fn test_lt_and_eq_are_indicators() {
    assert_eq!(lt(1.0_f64, 2.0), 1.0);
    assert_eq!(lt(2.0_f64, 1.0), 0.0);
    assert_eq!(lt(1.0_f64, 1.0), 0.0);
    assert_eq!(eq(1.5_f64, 1.5), 1.0);
    assert_eq!(eq(1.5_f64, 1.25), 0.0);
}

#[test]
fn test_max() {
    assert_eq!(max(1.0_f64, 2.0), 2.0);
    assert_eq!(max(2.0_f64, 1.0), 2.0);
    assert_eq!(max(-3.0_f32, -3.0), -3.0);
}

#[test]
fn test_is_close() {
    assert!(is_close(1.0_f64, 1.009));
    assert!(!is_close(1.0_f64, 1.02));
    assert!(is_close(-4.0_f32, -4.005));
}

#[test]
fn test_is_close_tol_is_strict() {
    assert!(is_close_tol(1.0_f64, 1.4, 0.5));
    assert!(!is_close_tol(0.0_f64, 0.5, 0.5));
}
