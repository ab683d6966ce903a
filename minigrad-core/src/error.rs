use crate::autograd::NodeId;
use thiserror::Error;

/// Custom error type for the minigrad engine and its collaborators.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum MinigradError {
    /// A numeric primitive was called outside its domain (`log` of a
    /// non-positive value, `inv` of zero, ...). Always the caller's input.
    #[error("Domain error in {operation}: argument {value} is outside the function's domain")]
    DomainError { operation: String, value: f64 },

    /// A node was reached during backpropagation without any accumulated
    /// derivative. Only happens when the graph is cyclic or a `chain_rule`
    /// omitted one of the parents it reported.
    #[error("Internal consistency error: node {node} was processed without an accumulated derivative")]
    MissingDerivative { node: NodeId },

    #[error("Argument index {index} is out of range for a function of {arity} arguments")]
    ArgumentOutOfRange { index: usize, arity: usize },

    #[error("Operands of {operation} belong to different graphs")]
    GraphMismatch { operation: String },

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl MinigradError {
    /// Builds a `DomainError` from any value convertible to `f64`.
    pub fn domain<F: num_traits::ToPrimitive>(operation: &str, value: F) -> Self {
        MinigradError::DomainError {
            operation: operation.to_string(),
            value: value.to_f64().unwrap_or(f64::NAN),
        }
    }
}
