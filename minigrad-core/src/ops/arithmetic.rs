// minigrad-core/src/ops/arithmetic.rs

use crate::error::MinigradError;
use num_traits::Float;

/// \( a \cdot b \)
pub fn mul<F: Float>(a: F, b: F) -> F {
    a * b
}

/// Identity.
pub fn id<F: Float>(a: F) -> F {
    a
}

/// \( a + b \)
pub fn add<F: Float>(a: F, b: F) -> F {
    a + b
}

/// \( -a \)
pub fn neg<F: Float>(a: F) -> F {
    -a
}

/// Reciprocal \( 1 / a \).
///
/// # Errors
/// `DomainError` when `a == 0`.
pub fn inv<F: Float>(a: F) -> Result<F, MinigradError> {
    if a.is_zero() {
        return Err(MinigradError::domain("inv", a));
    }
    Ok(F::one() / a)
}

/// Derivative of [`inv`] at `a` times `d`: \( -d / a^2 \).
///
/// # Errors
/// `DomainError` when `a == 0`.
pub fn inv_back<F: Float>(a: F, d: F) -> Result<F, MinigradError> {
    if a.is_zero() {
        return Err(MinigradError::domain("inv_back", a));
    }
    Ok(neg(d / mul(a, a)))
}

#[cfg(test)]
#[path = "arithmetic_test.rs"]
mod tests;
