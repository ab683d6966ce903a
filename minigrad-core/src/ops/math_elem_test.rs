// minigrad-core/src/ops/math_elem_test.rs

use super::*;
use crate::error::MinigradError;
use approx::assert_relative_eq;

#[test]
fn test_exp_log_inverse() -> Result<(), MinigradError> {
    for &x in &[0.1_f64, 1.0, 2.5, 40.0] {
        assert_relative_eq!(exp(log(x)?), x, epsilon = 1e-9);
    }
    assert_relative_eq!(log(std::f64::consts::E)?, 1.0);
    assert_eq!(exp(0.0_f64), 1.0);
    Ok(())
}

#[test]
fn test_log_non_positive_is_domain_error() {
    for &x in &[0.0_f64, -1.0, f64::NAN] {
        assert!(
            matches!(log(x), Err(MinigradError::DomainError { ref operation, .. }) if operation == "log"),
            "log({}) should be a domain error",
            x
        );
    }
}

#[test]
fn test_log_back() -> Result<(), MinigradError> {
    assert_relative_eq!(log_back(4.0_f64, 2.0)?, 0.5);
    assert_relative_eq!(log_back(-2.0_f64, 1.0)?, -0.5);
    assert!(log_back(0.0_f64, 1.0).is_err());
    Ok(())
}
