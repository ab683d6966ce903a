// minigrad-core/src/ops/math_elem.rs

use crate::error::MinigradError;
use num_traits::Float;

/// Natural exponential \( e^a \).
pub fn exp<F: Float>(a: F) -> F {
    a.exp()
}

/// Natural logarithm \( \ln(a) \).
///
/// # Errors
/// `DomainError` when `a <= 0` (or NaN).
pub fn log<F: Float>(a: F) -> Result<F, MinigradError> {
    if a.is_nan() || a <= F::zero() {
        return Err(MinigradError::domain("log", a));
    }
    Ok(a.ln())
}

/// Derivative of [`log`] at `a` times `d`: \( d / a \).
///
/// # Errors
/// `DomainError` when `a == 0`.
pub fn log_back<F: Float>(a: F, d: F) -> Result<F, MinigradError> {
    if a.is_zero() {
        return Err(MinigradError::domain("log_back", a));
    }
    Ok(d / a)
}

#[cfg(test)]
#[path = "math_elem_test.rs"]
mod tests;
