// minigrad-core/src/ops/comparison.rs

use num_traits::Float;

/// Tolerance used by [`is_close`].
pub const DEFAULT_ATOL: f64 = 1e-2;

fn indicator<F: Float>(condition: bool) -> F {
    if condition {
        F::one()
    } else {
        F::zero()
    }
}

/// `1` if `a < b`, else `0`.
pub fn lt<F: Float>(a: F, b: F) -> F {
    indicator(a < b)
}

/// `1` if `a == b`, else `0`.
pub fn eq<F: Float>(a: F, b: F) -> F {
    indicator(a == b)
}

/// `b` if `a < b`, else `a`.
pub fn max<F: Float>(a: F, b: F) -> F {
    if a < b {
        b
    } else {
        a
    }
}

/// `|a - b| < DEFAULT_ATOL`.
pub fn is_close<F: Float>(a: F, b: F) -> bool {
    // 1e-2 is representable in every float type num-traits knows about.
    let atol = F::from(DEFAULT_ATOL).unwrap_or_else(F::epsilon);
    is_close_tol(a, b, atol)
}

/// `|a - b| < atol`.
pub fn is_close_tol<F: Float>(a: F, b: F, atol: F) -> bool {
    (a - b).abs() < atol
}

#[cfg(test)]
#[path = "comparison_test.rs"]
mod tests;
