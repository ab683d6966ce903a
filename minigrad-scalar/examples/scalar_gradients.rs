//! Builds a small expression, runs a backward pass and compares the result with
//! central differences.

use minigrad_core::{central_difference_default, GradCheckConfig, MinigradError};
use minigrad_scalar::{add_op, derivative_check, exp_op, mul_op, sigmoid_op, ScalarGraph};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let graph = ScalarGraph::new();
    let x = graph.variable(0.5);
    let y = graph.variable(-1.25);

    // f(x, y) = sigmoid(x * y) + exp(x)
    let f = add_op(&sigmoid_op(&mul_op(&x, &y)?)?, &exp_op(&x)?)?;
    f.backward()?;
    println!("f(x, y)  = {:.6}", f.value());
    println!("df/dx    = {:.6}", x.derivative().unwrap_or(0.0));
    println!("df/dy    = {:.6}", y.derivative().unwrap_or(0.0));

    let plain = |v: &[f64]| minigrad_core::ops::sigmoid(v[0] * v[1]) + v[0].exp();
    println!("numeric  = {:.6}", central_difference_default(plain, &[0.5, -1.25], 0)?);

    derivative_check(
        |_, xs| -> Result<_, MinigradError> {
            add_op(&sigmoid_op(&mul_op(&xs[0], &xs[1])?)?, &exp_op(&xs[0])?)
        },
        &[0.5, -1.25],
        &GradCheckConfig::default(),
    )?;
    println!("derivative check passed");
    Ok(())
}
