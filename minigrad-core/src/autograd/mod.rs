//! # Automatic differentiation (`autograd`)
//!
//! The engine itself. It knows nothing about concrete value types: anything
//! implementing [`Variable`] can be ordered and differentiated.
//!
//! - [`variable`]: the node capability contract, node ids and their allocator.
//! - [`graph`]: the topological sequencer.
//! - [`backprop`]: the backward pass.
//! - [`context`]: the per-operation forward-state memo.
//! - [`grad_check`]: central differences and gradient checking.

pub mod backprop;
pub mod context;
pub mod grad_check;
pub mod graph;
pub mod variable;

pub use backprop::backpropagate;
pub use context::Context;
pub use grad_check::{
    central_difference, central_difference_default, check_gradients, GradCheckConfig,
    GradCheckError, DEFAULT_EPSILON,
};
pub use graph::topological_sort;
pub use variable::{IdAllocator, NodeId, Variable};
