use crate::error::MinigradError;
use std::fmt;
use std::ops::Add;
use std::sync::atomic::{AtomicU64, Ordering};

/// Identifier of a node in a computation graph.
///
/// Ids are handed out by an [`IdAllocator`] owned by whatever builds the graph.
/// The engine only compares and hashes them; it never creates or recycles one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u64);

impl NodeId {
    pub const fn new(raw: u64) -> Self {
        NodeId(raw)
    }

    pub fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Monotonic source of [`NodeId`]s.
///
/// Every id returned by one allocator is distinct from every other id it returns.
/// Graphs that may be combined must share a single allocator.
#[derive(Debug)]
pub struct IdAllocator {
    next: AtomicU64,
}

impl IdAllocator {
    pub fn new() -> Self {
        IdAllocator {
            next: AtomicU64::new(1),
        }
    }

    /// Returns a fresh id.
    pub fn allocate(&self) -> NodeId {
        NodeId(self.next.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}

/// Capability contract every node of a differentiable graph must satisfy.
///
/// Implementors are cheap handles (typically an `Rc` around the node state), so
/// the engine clones them freely while ordering the graph. A node is exactly one
/// of three kinds:
///
/// * a **leaf**: a trainable input; the only kind whose derivative is stored,
///   through [`accumulate_derivative`](Variable::accumulate_derivative).
/// * a **constant**: no differentiable state; skipped entirely by the engine.
/// * an **operator result**: has [`parents`](Variable::parents) and a local
///   derivative rule, [`chain_rule`](Variable::chain_rule).
///
/// The parent edges reachable from any node must form a DAG. Collaborators get
/// this for free by only ever creating a node after all of its parents exist.
pub trait Variable: Clone {
    /// Type of the derivative values flowing backwards through the graph.
    type Derivative: Add<Output = Self::Derivative>;

    /// Identifier that is unique for as long as the graph is alive.
    fn unique_id(&self) -> NodeId;

    fn is_leaf(&self) -> bool;

    fn is_constant(&self) -> bool;

    /// The nodes this one was computed from, in operand order.
    ///
    /// Only consulted for nodes that are neither leaves nor constants.
    fn parents(&self) -> Vec<Self>;

    /// Adds `derivative` to the derivative already stored on this leaf.
    ///
    /// Only called on leaves. Must accumulate, never overwrite.
    fn accumulate_derivative(&self, derivative: Self::Derivative) -> Result<(), MinigradError>;

    /// Applies the multivariate chain rule locally.
    ///
    /// Given `d_output`, the derivative of the final quantity with respect to this
    /// node, returns one `(parent, d_output * d(self)/d(parent))` pair per parent
    /// the node depends on. Only called on non-leaf, non-constant nodes.
    fn chain_rule(
        &self,
        d_output: Self::Derivative,
    ) -> Result<Vec<(Self, Self::Derivative)>, MinigradError>;
}
