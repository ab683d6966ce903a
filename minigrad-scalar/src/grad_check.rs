use crate::graph::ScalarGraph;
use crate::scalar::Scalar;
use log::debug;
use minigrad_core::{check_gradients, GradCheckConfig, GradCheckError, MinigradError};
use std::cell::RefCell;

/// Checks the derivatives computed by a backward pass through `f` against central
/// differences.
///
/// `f` builds its result from the leaves it is handed (one per entry of `inputs`)
/// and may create constants through the graph. The analytical gradient is read
/// from the leaves after `backward()`; leaves the result does not depend on count
/// as zero. For the numerical side `f` is re-evaluated on plain values with
/// differentiation disabled; the first evaluation error there is returned as
/// `GradCheckError::Oracle`.
pub fn derivative_check<Func>(
    f: Func,
    inputs: &[f64],
    config: &GradCheckConfig,
) -> Result<(), GradCheckError>
where
    Func: Fn(&ScalarGraph, &[Scalar]) -> Result<Scalar, MinigradError>,
{
    let graph = ScalarGraph::new();
    let leaves: Vec<Scalar> = inputs.iter().map(|&v| graph.variable(v)).collect();
    let output = f(&graph, &leaves)?;
    output.backward()?;
    let analytical: Vec<f64> = leaves
        .iter()
        .map(|leaf| leaf.derivative().unwrap_or(0.0))
        .collect();
    debug!("derivative_check: analytical gradient {:?} at {:?}", analytical, inputs);

    // The first evaluation error wins; it replaces whatever the check reports.
    let failure: RefCell<Option<MinigradError>> = RefCell::new(None);
    let evaluate = |point: &[f64]| -> f64 {
        let scratch = ScalarGraph::new();
        scratch.no_grad(|| {
            let args: Vec<Scalar> = point.iter().map(|&v| scratch.variable(v)).collect();
            match f(&scratch, &args) {
                Ok(s) => s.value(),
                Err(err) => {
                    failure.borrow_mut().get_or_insert(err);
                    f64::NAN
                }
            }
        })
    };
    let result = check_gradients(evaluate, inputs, &analytical, config);
    match failure.into_inner() {
        Some(err) => {
            debug!("derivative_check: evaluation near {:?} failed: {}", inputs, err);
            Err(GradCheckError::Oracle(err))
        }
        None => result,
    }
}

#[cfg(test)]
#[path = "grad_check_test.rs"]
mod tests;
