//! A tiny vector-valued collaborator built only on the public API.

use minigrad_core::{IdAllocator, MinigradError, NodeId, Variable};
use std::cell::RefCell;
use std::ops::Add;
use std::rc::Rc;

/// Element-wise gradient of a small fixed-size vector.
#[derive(Debug, Clone, PartialEq)]
pub struct Grad(pub Vec<f64>);

impl Add for Grad {
    type Output = Grad;

    fn add(self, rhs: Grad) -> Grad {
        Grad(self.0.iter().zip(rhs.0.iter()).map(|(a, b)| a + b).collect())
    }
}

impl Grad {
    fn scale(&self, factor: f64) -> Grad {
        Grad(self.0.iter().map(|v| v * factor).collect())
    }
}

enum Kind {
    Leaf(RefCell<Option<Grad>>),
    Constant,
    /// Parents with this node's (element-wise, uniform) partial for each.
    Op(Vec<(VecNode, f64)>),
}

struct Inner {
    id: NodeId,
    kind: Kind,
}

#[derive(Clone)]
pub struct VecNode(Rc<Inner>);

#[allow(dead_code)]
impl VecNode {
    pub fn grad(&self) -> Option<Grad> {
        match &self.0.kind {
            Kind::Leaf(slot) => slot.borrow().clone(),
            _ => None,
        }
    }

    pub fn id(&self) -> NodeId {
        self.0.id
    }
}

impl Variable for VecNode {
    type Derivative = Grad;

    fn unique_id(&self) -> NodeId {
        self.0.id
    }

    fn is_leaf(&self) -> bool {
        matches!(self.0.kind, Kind::Leaf(_))
    }

    fn is_constant(&self) -> bool {
        matches!(self.0.kind, Kind::Constant)
    }

    fn parents(&self) -> Vec<Self> {
        match &self.0.kind {
            Kind::Op(parents) => parents.iter().map(|(p, _)| p.clone()).collect(),
            _ => Vec::new(),
        }
    }

    fn accumulate_derivative(&self, derivative: Grad) -> Result<(), MinigradError> {
        match &self.0.kind {
            Kind::Leaf(slot) => {
                let mut slot = slot.borrow_mut();
                let total = match slot.take() {
                    Some(previous) => previous + derivative,
                    None => derivative,
                };
                *slot = Some(total);
                Ok(())
            }
            _ => Err(MinigradError::InternalError("not a leaf".to_string())),
        }
    }

    fn chain_rule(&self, d_output: Grad) -> Result<Vec<(Self, Grad)>, MinigradError> {
        match &self.0.kind {
            Kind::Op(parents) => Ok(parents
                .iter()
                .filter(|(p, _)| !p.is_constant())
                .map(|(p, partial)| (p.clone(), d_output.scale(*partial)))
                .collect()),
            _ => Err(MinigradError::InternalError("no chain rule".to_string())),
        }
    }
}

/// Builds nodes that all share one id allocator.
#[derive(Default)]
pub struct Builder {
    ids: IdAllocator,
}

#[allow(dead_code)]
impl Builder {
    pub fn leaf(&self) -> VecNode {
        self.node(Kind::Leaf(RefCell::new(None)))
    }

    pub fn constant(&self) -> VecNode {
        self.node(Kind::Constant)
    }

    pub fn op(&self, parents: &[(&VecNode, f64)]) -> VecNode {
        self.node(Kind::Op(
            parents.iter().map(|(p, d)| ((*p).clone(), *d)).collect(),
        ))
    }

    fn node(&self, kind: Kind) -> VecNode {
        VecNode(Rc::new(Inner {
            id: self.ids.allocate(),
            kind,
        }))
    }
}
