//! # minigrad-core
//!
//! A small reverse-mode automatic differentiation engine.
//!
//! Collaborators build computation graphs out of their own node types and
//! implement [`Variable`] for them; this crate orders such graphs and runs the
//! backward pass over them ([`backpropagate`]). It also ships the numeric
//! primitives those collaborators use for their forward and backward formulas
//! ([`ops`]) and a finite-difference oracle to validate them
//! ([`central_difference`], [`check_gradients`]).

pub mod autograd;
pub mod error;
pub mod ops;

mod utils;

pub use autograd::{
    backpropagate, central_difference, central_difference_default, check_gradients,
    topological_sort, Context, GradCheckConfig, GradCheckError, IdAllocator, NodeId, Variable,
};
pub use error::MinigradError;
// Re-export traits required by public functions
pub use num_traits;
