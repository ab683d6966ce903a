//! # Scalar operations
//!
//! Each `xxx_op` evaluates one [`ScalarFunction`] on its operands and records the
//! result in the computation graph. When no operand is differentiable, or the
//! graph is inside [`ScalarGraph::no_grad`](crate::ScalarGraph::no_grad), the
//! result is a constant and nothing is recorded.
//!
//! # Errors
//! Every operation returns `MinigradError::GraphMismatch` when its operands come
//! from different graphs, and domain errors of the underlying primitive
//! (`log_op` of a non-positive value, `inv_op` / `div_op` by zero).

use crate::functions::{
    Add, Equal, Exp, Inv, LessThan, Log, Mul, Neg, Relu, ScalarFunction, Sigmoid,
};
use crate::scalar::{History, Scalar};
use log::trace;
use minigrad_core::{Context, MinigradError, Variable};

fn apply(function: &'static dyn ScalarFunction, inputs: &[&Scalar]) -> Result<Scalar, MinigradError> {
    let first = inputs.first().ok_or_else(|| {
        MinigradError::InternalError(format!("{} applied to no operands", function.name()))
    })?;
    if inputs.len() != function.arity() {
        return Err(MinigradError::InternalError(format!(
            "{} expects {} operand(s), got {}",
            function.name(),
            function.arity(),
            inputs.len()
        )));
    }
    let graph = first.graph().clone();
    if inputs.iter().any(|s| !s.graph().same_graph(&graph)) {
        return Err(MinigradError::GraphMismatch {
            operation: function.name().to_string(),
        });
    }

    let needs_grad = graph.is_grad_enabled() && inputs.iter().any(|s| !s.is_constant());
    let mut ctx = Context::new(!needs_grad);
    let values: Vec<f64> = inputs.iter().map(|s| s.value()).collect();
    let value = function.forward(&mut ctx, &values)?;

    if !needs_grad {
        trace!("{}: no differentiable operand, result is constant", function.name());
        return Ok(graph.constant(value));
    }
    let history = History {
        function,
        ctx,
        inputs: inputs.iter().map(|s| (*s).clone()).collect(),
    };
    Ok(Scalar::from_history(graph, value, history))
}

pub fn add_op(a: &Scalar, b: &Scalar) -> Result<Scalar, MinigradError> {
    apply(&Add, &[a, b])
}

/// `a - b`, recorded as `a + (-b)`.
pub fn sub_op(a: &Scalar, b: &Scalar) -> Result<Scalar, MinigradError> {
    let neg_b = neg_op(b)?;
    add_op(a, &neg_b)
}

pub fn mul_op(a: &Scalar, b: &Scalar) -> Result<Scalar, MinigradError> {
    apply(&Mul, &[a, b])
}

/// `a / b`, recorded as `a * inv(b)`.
pub fn div_op(a: &Scalar, b: &Scalar) -> Result<Scalar, MinigradError> {
    let inv_b = inv_op(b)?;
    mul_op(a, &inv_b)
}

pub fn neg_op(a: &Scalar) -> Result<Scalar, MinigradError> {
    apply(&Neg, &[a])
}

pub fn inv_op(a: &Scalar) -> Result<Scalar, MinigradError> {
    apply(&Inv, &[a])
}

pub fn log_op(a: &Scalar) -> Result<Scalar, MinigradError> {
    apply(&Log, &[a])
}

pub fn exp_op(a: &Scalar) -> Result<Scalar, MinigradError> {
    apply(&Exp, &[a])
}

pub fn sigmoid_op(a: &Scalar) -> Result<Scalar, MinigradError> {
    apply(&Sigmoid, &[a])
}

pub fn relu_op(a: &Scalar) -> Result<Scalar, MinigradError> {
    apply(&Relu, &[a])
}

pub fn lt_op(a: &Scalar, b: &Scalar) -> Result<Scalar, MinigradError> {
    apply(&LessThan, &[a, b])
}

/// `a > b`, recorded as `b < a`.
pub fn gt_op(a: &Scalar, b: &Scalar) -> Result<Scalar, MinigradError> {
    apply(&LessThan, &[b, a])
}

pub fn eq_op(a: &Scalar, b: &Scalar) -> Result<Scalar, MinigradError> {
    apply(&Equal, &[a, b])
}

#[cfg(test)]
#[path = "ops_test.rs"]
mod tests;
