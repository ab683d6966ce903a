//! Differentiable scalar functions.
//!
//! Each function computes its forward value from plain `f64` inputs, saving in
//! the operation's [`Context`] whatever its derivative formula needs, and later
//! turns an incoming derivative into one derivative per input.

use minigrad_core::{ops, Context, MinigradError};
use std::fmt::Debug;

/// Forward and backward formulas of one scalar operation.
pub trait ScalarFunction: Debug {
    /// Short name used in logs and errors.
    fn name(&self) -> &'static str;

    /// Number of inputs `forward` expects.
    fn arity(&self) -> usize;

    /// Computes the output value, saving what `backward` needs into `ctx`.
    fn forward(&self, ctx: &mut Context<f64>, inputs: &[f64]) -> Result<f64, MinigradError>;

    /// Returns `d_output * d(output)/d(input_i)` for every input, in input order.
    fn backward(&self, ctx: &Context<f64>, d_output: f64) -> Result<Vec<f64>, MinigradError>;
}

fn operands<const N: usize>(inputs: &[f64], function: &str) -> Result<[f64; N], MinigradError> {
    <[f64; N]>::try_from(inputs).map_err(|_| {
        MinigradError::InternalError(format!(
            "{}: expected {} operand(s), got {}",
            function,
            N,
            inputs.len()
        ))
    })
}

fn saved(ctx: &Context<f64>, index: usize, function: &str) -> Result<f64, MinigradError> {
    ctx.saved().get(index).copied().ok_or_else(|| {
        MinigradError::InternalError(format!(
            "{}: saved value {} is missing (got {})",
            function,
            index,
            ctx.saved().len()
        ))
    })
}

#[derive(Debug, Clone, Copy)]
pub struct Add;

impl ScalarFunction for Add {
    fn name(&self) -> &'static str {
        "add"
    }

    fn arity(&self) -> usize {
        2
    }

    fn forward(&self, _ctx: &mut Context<f64>, inputs: &[f64]) -> Result<f64, MinigradError> {
        let [a, b] = operands(inputs, self.name())?;
        Ok(ops::add(a, b))
    }

    fn backward(&self, _ctx: &Context<f64>, d_output: f64) -> Result<Vec<f64>, MinigradError> {
        Ok(vec![d_output, d_output])
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Mul;

impl ScalarFunction for Mul {
    fn name(&self) -> &'static str {
        "mul"
    }

    fn arity(&self) -> usize {
        2
    }

    fn forward(&self, ctx: &mut Context<f64>, inputs: &[f64]) -> Result<f64, MinigradError> {
        let [a, b] = operands(inputs, self.name())?;
        ctx.save([a, b]);
        Ok(ops::mul(a, b))
    }

    fn backward(&self, ctx: &Context<f64>, d_output: f64) -> Result<Vec<f64>, MinigradError> {
        let a = saved(ctx, 0, self.name())?;
        let b = saved(ctx, 1, self.name())?;
        Ok(vec![ops::mul(d_output, b), ops::mul(d_output, a)])
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Neg;

impl ScalarFunction for Neg {
    fn name(&self) -> &'static str {
        "neg"
    }

    fn arity(&self) -> usize {
        1
    }

    fn forward(&self, _ctx: &mut Context<f64>, inputs: &[f64]) -> Result<f64, MinigradError> {
        let [a] = operands(inputs, self.name())?;
        Ok(ops::neg(a))
    }

    fn backward(&self, _ctx: &Context<f64>, d_output: f64) -> Result<Vec<f64>, MinigradError> {
        Ok(vec![ops::neg(d_output)])
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Inv;

impl ScalarFunction for Inv {
    fn name(&self) -> &'static str {
        "inv"
    }

    fn arity(&self) -> usize {
        1
    }

    fn forward(&self, ctx: &mut Context<f64>, inputs: &[f64]) -> Result<f64, MinigradError> {
        let [a] = operands(inputs, self.name())?;
        ctx.save([a]);
        ops::inv(a)
    }

    fn backward(&self, ctx: &Context<f64>, d_output: f64) -> Result<Vec<f64>, MinigradError> {
        let a = saved(ctx, 0, self.name())?;
        Ok(vec![ops::inv_back(a, d_output)?])
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Log;

impl ScalarFunction for Log {
    fn name(&self) -> &'static str {
        "log"
    }

    fn arity(&self) -> usize {
        1
    }

    fn forward(&self, ctx: &mut Context<f64>, inputs: &[f64]) -> Result<f64, MinigradError> {
        let [a] = operands(inputs, self.name())?;
        ctx.save([a]);
        ops::log(a)
    }

    fn backward(&self, ctx: &Context<f64>, d_output: f64) -> Result<Vec<f64>, MinigradError> {
        let a = saved(ctx, 0, self.name())?;
        Ok(vec![ops::log_back(a, d_output)?])
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Exp;

impl ScalarFunction for Exp {
    fn name(&self) -> &'static str {
        "exp"
    }

    fn arity(&self) -> usize {
        1
    }

    fn forward(&self, ctx: &mut Context<f64>, inputs: &[f64]) -> Result<f64, MinigradError> {
        let [a] = operands(inputs, self.name())?;
        let out = ops::exp(a);
        ctx.save([out]);
        Ok(out)
    }

    fn backward(&self, ctx: &Context<f64>, d_output: f64) -> Result<Vec<f64>, MinigradError> {
        let out = saved(ctx, 0, self.name())?;
        Ok(vec![ops::mul(d_output, out)])
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Sigmoid;

impl ScalarFunction for Sigmoid {
    fn name(&self) -> &'static str {
        "sigmoid"
    }

    fn arity(&self) -> usize {
        1
    }

    fn forward(&self, ctx: &mut Context<f64>, inputs: &[f64]) -> Result<f64, MinigradError> {
        let [a] = operands(inputs, self.name())?;
        let out = ops::sigmoid(a);
        ctx.save([out]);
        Ok(out)
    }

    fn backward(&self, ctx: &Context<f64>, d_output: f64) -> Result<Vec<f64>, MinigradError> {
        // sigma' = sigma * (1 - sigma)
        let s = saved(ctx, 0, self.name())?;
        Ok(vec![ops::mul(d_output, ops::mul(s, 1.0 - s))])
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Relu;

impl ScalarFunction for Relu {
    fn name(&self) -> &'static str {
        "relu"
    }

    fn arity(&self) -> usize {
        1
    }

    fn forward(&self, ctx: &mut Context<f64>, inputs: &[f64]) -> Result<f64, MinigradError> {
        let [a] = operands(inputs, self.name())?;
        ctx.save([a]);
        Ok(ops::relu(a))
    }

    fn backward(&self, ctx: &Context<f64>, d_output: f64) -> Result<Vec<f64>, MinigradError> {
        let a = saved(ctx, 0, self.name())?;
        Ok(vec![ops::relu_back(a, d_output)])
    }
}

/// `a < b` as `0.0` / `1.0`. Piecewise constant, so its derivative is zero.
#[derive(Debug, Clone, Copy)]
pub struct LessThan;

impl ScalarFunction for LessThan {
    fn name(&self) -> &'static str {
        "lt"
    }

    fn arity(&self) -> usize {
        2
    }

    fn forward(&self, _ctx: &mut Context<f64>, inputs: &[f64]) -> Result<f64, MinigradError> {
        let [a, b] = operands(inputs, self.name())?;
        Ok(ops::lt(a, b))
    }

    fn backward(&self, _ctx: &Context<f64>, _d_output: f64) -> Result<Vec<f64>, MinigradError> {
        Ok(vec![0.0, 0.0])
    }
}

/// `a == b` as `0.0` / `1.0`.
#[derive(Debug, Clone, Copy)]
pub struct Equal;

impl ScalarFunction for Equal {
    fn name(&self) -> &'static str {
        "eq"
    }

    fn arity(&self) -> usize {
        2
    }

    fn forward(&self, _ctx: &mut Context<f64>, inputs: &[f64]) -> Result<f64, MinigradError> {
        let [a, b] = operands(inputs, self.name())?;
        Ok(ops::eq(a, b))
    }

    fn backward(&self, _ctx: &Context<f64>, _d_output: f64) -> Result<Vec<f64>, MinigradError> {
        Ok(vec![0.0, 0.0])
    }
}

#[cfg(test)]
#[path = "functions_test.rs"]
mod tests;
