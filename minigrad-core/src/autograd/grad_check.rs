use crate::error::MinigradError;
use num_traits::Float;
use thiserror::Error;

/// Step used by [`central_difference_default`].
pub const DEFAULT_EPSILON: f64 = 1e-6;

/// Estimates the partial derivative of `f` with respect to argument `arg` at `point`.
///
/// Uses the symmetric difference quotient
/// \\[ \frac{f(x + \tfrac{\epsilon}{2} e_i) - f(x - \tfrac{\epsilon}{2} e_i)}{\epsilon} \\]
/// whose truncation error is \( O(\epsilon^2) \) for smooth `f`.
///
/// `f` is a black box over its positional arguments; this never touches a
/// computation graph and is only meant to validate analytical derivatives.
///
/// # Errors
/// `MinigradError::ArgumentOutOfRange` if `arg >= point.len()`.
pub fn central_difference<F, Func>(
    f: Func,
    point: &[F],
    arg: usize,
    epsilon: F,
) -> Result<F, MinigradError>
where
    F: Float,
    Func: Fn(&[F]) -> F,
{
    if arg >= point.len() {
        return Err(MinigradError::ArgumentOutOfRange {
            index: arg,
            arity: point.len(),
        });
    }
    let two = F::one() + F::one();
    let half_step = epsilon / two;

    let mut shifted = point.to_vec();
    shifted[arg] = point[arg] + half_step;
    let f_plus = f(&shifted);

    shifted[arg] = point[arg] - half_step;
    let f_minus = f(&shifted);

    Ok((f_plus - f_minus) / epsilon)
}

/// [`central_difference`] with `epsilon = DEFAULT_EPSILON`.
pub fn central_difference_default<F, Func>(f: Func, point: &[F], arg: usize) -> Result<F, MinigradError>
where
    F: Float,
    Func: Fn(&[F]) -> F,
{
    let epsilon = F::from(DEFAULT_EPSILON).ok_or_else(|| {
        MinigradError::InternalError("default epsilon is not representable".to_string())
    })?;
    central_difference(f, point, arg, epsilon)
}

/// Tolerances used when comparing analytical and numerical gradients.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradCheckConfig {
    /// Step handed to [`central_difference`].
    pub epsilon: f64,
    /// Absolute tolerance.
    pub atol: f64,
    /// Tolerance relative to the numerical estimate.
    pub rtol: f64,
}

impl Default for GradCheckConfig {
    fn default() -> Self {
        GradCheckConfig {
            epsilon: DEFAULT_EPSILON,
            atol: 1e-2,
            rtol: 1e-2,
        }
    }
}

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: analytical grad {analytical:?} != numerical grad {numerical:?}. Difference: {difference:?}")]
    GradientMismatch {
        input_index: usize,
        analytical: f64,
        numerical: f64,
        difference: f64,
    },
    #[error("Expected {expected} analytical gradient(s), got {actual}")]
    ArityMismatch { expected: usize, actual: usize },
    #[error("Numerical gradient is NaN or infinite for input {input_index}: {value:?}")]
    NumericalGradNonFinite { input_index: usize, value: f64 },
    #[error("Analytical gradient is NaN or infinite for input {input_index}: {value:?}")]
    AnalyticalGradNonFinite { input_index: usize, value: f64 },
    #[error("Gradient check could not evaluate the function: {0}")]
    Oracle(#[from] MinigradError),
}

/// Checks `analytical` against central differences of `f` at `point`, coordinate by coordinate.
///
/// Coordinate `i` passes when `|analytical[i] - numerical| <= atol + rtol * |numerical|`.
/// The first failing coordinate is reported.
pub fn check_gradients<F, Func>(
    f: Func,
    point: &[F],
    analytical: &[F],
    config: &GradCheckConfig,
) -> Result<(), GradCheckError>
where
    F: Float,
    Func: Fn(&[F]) -> F,
{
    if analytical.len() != point.len() {
        return Err(GradCheckError::ArityMismatch {
            expected: point.len(),
            actual: analytical.len(),
        });
    }
    let epsilon = F::from(config.epsilon).ok_or_else(|| {
        MinigradError::InternalError(format!("epsilon {} is not representable", config.epsilon))
    })?;

    for (input_index, analytical_grad) in analytical.iter().enumerate() {
        let numerical = central_difference(&f, point, input_index, epsilon)?
            .to_f64()
            .unwrap_or(f64::NAN);
        let analytical = analytical_grad.to_f64().unwrap_or(f64::NAN);

        if !numerical.is_finite() {
            return Err(GradCheckError::NumericalGradNonFinite {
                input_index,
                value: numerical,
            });
        }
        if !analytical.is_finite() {
            return Err(GradCheckError::AnalyticalGradNonFinite {
                input_index,
                value: analytical,
            });
        }

        let difference = (analytical - numerical).abs();
        if difference > config.atol + config.rtol * numerical.abs() {
            return Err(GradCheckError::GradientMismatch {
                input_index,
                analytical,
                numerical,
                difference,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "grad_check_test.rs"]
mod tests;
