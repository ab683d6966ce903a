//! # minigrad-scalar
//!
//! Scalar values that record the operations applied to them, so that
//! `minigrad-core` can differentiate the result.
//!
//! ```
//! use minigrad_scalar::{mul_op, add_op, ScalarGraph};
//!
//! # fn main() -> Result<(), minigrad_core::MinigradError> {
//! let graph = ScalarGraph::new();
//! let x = graph.variable(3.0);
//! let y = graph.variable(2.0);
//! let z = add_op(&mul_op(&x, &y)?, &x)?; // z = x * y + x
//! z.backward()?;
//! assert_eq!(x.derivative(), Some(3.0));
//! assert_eq!(y.derivative(), Some(3.0));
//! # Ok(())
//! # }
//! ```

pub mod functions;
pub mod grad_check;
pub mod graph;
pub mod ops;
pub mod scalar;

pub use grad_check::derivative_check;
pub use graph::ScalarGraph;
pub use ops::{
    add_op, div_op, eq_op, exp_op, gt_op, inv_op, log_op, lt_op, mul_op, neg_op, relu_op,
    sigmoid_op, sub_op,
};
pub use scalar::Scalar;
