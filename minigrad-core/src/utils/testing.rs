//! Test doubles for the autograd engine.
//!
//! [`MockNode`] implements [`Variable`] with fixed local partial derivatives and
//! records every call the engine makes on it, so tests can assert both the
//! resulting gradients and how they were delivered.

use crate::autograd::{IdAllocator, NodeId, Variable};
use crate::error::MinigradError;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MockKind {
    Leaf,
    Constant,
    Op,
    /// An operator whose `chain_rule` forgets its parents.
    DropsParents,
    /// An operator whose `chain_rule` fails with a domain error.
    Fails,
}

struct MockNodeInner {
    id: NodeId,
    kind: MockKind,
    /// Parents with the partial derivative of this node with respect to each.
    parents: Vec<(MockNode, f64)>,
    accumulate_calls: RefCell<Vec<f64>>,
    chain_rule_calls: RefCell<Vec<f64>>,
}

/// Handle to a recording test node.
#[derive(Clone)]
pub(crate) struct MockNode(Rc<MockNodeInner>);

impl fmt::Debug for MockNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MockNode({}, {:?})", self.0.id, self.0.kind)
    }
}

impl MockNode {
    pub(crate) fn id(&self) -> NodeId {
        self.0.id
    }

    /// Every value passed to `accumulate_derivative`, in call order.
    pub(crate) fn accumulate_calls(&self) -> Vec<f64> {
        self.0.accumulate_calls.borrow().clone()
    }

    /// Every `d_output` passed to `chain_rule`, in call order.
    pub(crate) fn chain_rule_calls(&self) -> Vec<f64> {
        self.0.chain_rule_calls.borrow().clone()
    }

    /// Sum of everything accumulated so far.
    pub(crate) fn grad(&self) -> f64 {
        self.0.accumulate_calls.borrow().iter().sum()
    }
}

impl Variable for MockNode {
    type Derivative = f64;

    fn unique_id(&self) -> NodeId {
        self.0.id
    }

    fn is_leaf(&self) -> bool {
        self.0.kind == MockKind::Leaf
    }

    fn is_constant(&self) -> bool {
        self.0.kind == MockKind::Constant
    }

    fn parents(&self) -> Vec<Self> {
        self.0.parents.iter().map(|(p, _)| p.clone()).collect()
    }

    fn accumulate_derivative(&self, derivative: f64) -> Result<(), MinigradError> {
        assert!(self.is_leaf(), "accumulate_derivative called on non-leaf {:?}", self);
        self.0.accumulate_calls.borrow_mut().push(derivative);
        Ok(())
    }

    fn chain_rule(&self, d_output: f64) -> Result<Vec<(Self, f64)>, MinigradError> {
        assert!(
            !self.is_leaf() && !self.is_constant(),
            "chain_rule called on {:?}",
            self
        );
        self.0.chain_rule_calls.borrow_mut().push(d_output);
        match self.0.kind {
            MockKind::DropsParents => Ok(Vec::new()),
            MockKind::Fails => Err(MinigradError::domain("mock", d_output)),
            _ => Ok(self
                .0
                .parents
                .iter()
                .map(|(parent, partial)| (parent.clone(), d_output * partial))
                .collect()),
        }
    }
}

/// Builds [`MockNode`]s with ids from one allocator.
#[derive(Default)]
pub(crate) struct MockGraph {
    ids: IdAllocator,
}

impl MockGraph {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    fn node(&self, kind: MockKind, parents: &[(&MockNode, f64)]) -> MockNode {
        MockNode(Rc::new(MockNodeInner {
            id: self.ids.allocate(),
            kind,
            parents: parents.iter().map(|(p, d)| ((*p).clone(), *d)).collect(),
            accumulate_calls: RefCell::new(Vec::new()),
            chain_rule_calls: RefCell::new(Vec::new()),
        }))
    }

    pub(crate) fn leaf(&self) -> MockNode {
        self.node(MockKind::Leaf, &[])
    }

    pub(crate) fn constant(&self) -> MockNode {
        self.node(MockKind::Constant, &[])
    }

    /// An operator result with the given `(parent, partial derivative)` pairs.
    pub(crate) fn op(&self, parents: &[(&MockNode, f64)]) -> MockNode {
        self.node(MockKind::Op, parents)
    }

    pub(crate) fn with_kind(&self, kind: MockKind, parents: &[(&MockNode, f64)]) -> MockNode {
        self.node(kind, parents)
    }
}
