// minigrad-core/src/ops/activation.rs

use super::comparison::max;
use num_traits::Float;

/// Logistic function \( \sigma(a) = \frac{1}{1 + e^{-a}} \).
///
/// Negative inputs use the equivalent \( \frac{e^a}{1 + e^a} \) so that `exp`
/// is only ever evaluated at a non-positive argument and cannot overflow.
pub fn sigmoid<F: Float>(a: F) -> F {
    if a < F::zero() {
        let e = a.exp();
        e / (F::one() + e)
    } else {
        F::one() / (F::one() + (-a).exp())
    }
}

/// Rectified linear unit, `max(0, a)`.
pub fn relu<F: Float>(a: F) -> F {
    max(F::zero(), a)
}

/// Derivative of [`relu`] at `a` times `d`. The subgradient at `0` is `0`.
pub fn relu_back<F: Float>(a: F, d: F) -> F {
    if a > F::zero() {
        d
    } else {
        F::zero()
    }
}

#[cfg(test)]
#[path = "activation_test.rs"]
mod tests;
