use crate::scalar::Scalar;
use minigrad_core::{IdAllocator, NodeId};
use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

struct GraphState {
    ids: IdAllocator,
    grad_enabled: Cell<bool>,
}

/// Factory for [`Scalar`]s that can be combined with each other.
///
/// A graph owns the id allocator of every node built from it and the switch
/// that turns differentiation on and off. Cloning a `ScalarGraph` gives another
/// handle on the same graph.
#[derive(Clone)]
pub struct ScalarGraph {
    state: Rc<GraphState>,
}

impl ScalarGraph {
    pub fn new() -> Self {
        ScalarGraph {
            state: Rc::new(GraphState {
                ids: IdAllocator::new(),
                grad_enabled: Cell::new(true),
            }),
        }
    }

    /// A trainable input. Its derivative is filled in by backward passes.
    pub fn variable(&self, value: f64) -> Scalar {
        Scalar::leaf(self.clone(), value)
    }

    /// A value that takes no part in differentiation.
    pub fn constant(&self, value: f64) -> Scalar {
        Scalar::constant(self.clone(), value)
    }

    /// Returns true unless called inside [`no_grad`](ScalarGraph::no_grad).
    pub fn is_grad_enabled(&self) -> bool {
        self.state.grad_enabled.get()
    }

    /// Runs `f` with differentiation disabled.
    ///
    /// Operations evaluated inside record nothing for a backward pass: their memo
    /// has the no-gradient flag set and their results are constants. The previous
    /// mode is restored on exit, also when `f` panics.
    pub fn no_grad<R, Func: FnOnce() -> R>(&self, f: Func) -> R {
        let _guard = NoGradGuard::new(&self.state.grad_enabled);
        f()
    }

    pub(crate) fn allocate_id(&self) -> NodeId {
        self.state.ids.allocate()
    }

    pub(crate) fn same_graph(&self, other: &ScalarGraph) -> bool {
        Rc::ptr_eq(&self.state, &other.state)
    }
}

impl Default for ScalarGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ScalarGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScalarGraph")
            .field("grad_enabled", &self.is_grad_enabled())
            .finish()
    }
}

struct NoGradGuard<'a> {
    flag: &'a Cell<bool>,
    previous: bool,
}

impl<'a> NoGradGuard<'a> {
    fn new(flag: &'a Cell<bool>) -> Self {
        let previous = flag.replace(false);
        NoGradGuard { flag, previous }
    }
}

impl Drop for NoGradGuard<'_> {
    fn drop(&mut self) {
        self.flag.set(self.previous);
    }
}

#[cfg(test)]
#[path = "graph_test.rs"]
mod tests;
