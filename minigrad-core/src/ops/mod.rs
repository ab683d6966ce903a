//! # Numeric primitives (`ops`)
//!
//! Pure scalar functions used by collaborators to write the forward and backward
//! formulas of their graph nodes. The engine in [`autograd`](crate::autograd)
//! never calls these directly.
//!
//! Everything is generic over [`num_traits::Float`]. Comparisons return `0` or
//! `1` in the same float type so they compose with the arithmetic.
//!
//! ## Submodules:
//!
//! - [`arithmetic`]: `mul`, `add`, `neg`, `id`, `inv`, `inv_back`.
//! - [`comparison`]: `lt`, `eq`, `max`, `is_close`.
//! - [`math_elem`]: `exp`, `log`, `log_back`.
//! - [`activation`]: `sigmoid`, `relu`, `relu_back`.
//! - [`functional`]: `map`, `zip_with`, `reduce` and the list helpers built on them.
//!
//! Functions whose domain excludes some inputs (`log`, `inv` and their
//! derivatives) return `MinigradError::DomainError` there instead of producing
//! an infinity or NaN.

pub mod activation;
pub mod arithmetic;
pub mod comparison;
pub mod functional;
pub mod math_elem;

pub use activation::{relu, relu_back, sigmoid};
pub use arithmetic::{add, id, inv, inv_back, mul, neg};
pub use comparison::{eq, is_close, is_close_tol, lt, max, DEFAULT_ATOL};
pub use functional::{add_lists, map, neg_list, prod, prod_or_one, reduce, sum, zip_with};
pub use math_elem::{exp, log, log_back};
