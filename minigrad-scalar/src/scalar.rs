use crate::functions::ScalarFunction;
use crate::graph::ScalarGraph;
use log::debug;
use minigrad_core::{backpropagate, Context, MinigradError, NodeId, Variable};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// How a scalar came to be.
pub(crate) struct History {
    pub(crate) function: &'static dyn ScalarFunction,
    pub(crate) ctx: Context<f64>,
    pub(crate) inputs: Vec<Scalar>,
}

enum Origin {
    Leaf,
    Constant,
    Op(History),
}

struct ScalarInner {
    id: NodeId,
    value: f64,
    origin: Origin,
    /// Only ever set on leaves.
    derivative: RefCell<Option<f64>>,
    graph: ScalarGraph,
}

impl Drop for ScalarInner {
    // Inputs that would die with this node are unlinked onto a work list first,
    // so freeing a long chain does not recurse once per node.
    fn drop(&mut self) {
        let mut pending = match std::mem::replace(&mut self.origin, Origin::Constant) {
            Origin::Op(history) => history.inputs,
            _ => return,
        };
        while let Some(scalar) = pending.pop() {
            if let Ok(mut inner) = Rc::try_unwrap(scalar.0) {
                if let Origin::Op(history) = &mut inner.origin {
                    pending.append(&mut history.inputs);
                }
            }
        }
    }
}

/// A floating-point value that remembers how it was computed.
///
/// Cloning is cheap and yields a handle to the same node.
#[derive(Clone)]
pub struct Scalar(Rc<ScalarInner>);

impl Scalar {
    fn with_origin(graph: ScalarGraph, value: f64, origin: Origin) -> Self {
        Scalar(Rc::new(ScalarInner {
            id: graph.allocate_id(),
            value,
            origin,
            derivative: RefCell::new(None),
            graph,
        }))
    }

    pub(crate) fn leaf(graph: ScalarGraph, value: f64) -> Self {
        Self::with_origin(graph, value, Origin::Leaf)
    }

    pub(crate) fn constant(graph: ScalarGraph, value: f64) -> Self {
        Self::with_origin(graph, value, Origin::Constant)
    }

    pub(crate) fn from_history(graph: ScalarGraph, value: f64, history: History) -> Self {
        Self::with_origin(graph, value, Origin::Op(history))
    }

    pub fn value(&self) -> f64 {
        self.0.value
    }

    pub fn id(&self) -> NodeId {
        self.0.id
    }

    pub fn graph(&self) -> &ScalarGraph {
        &self.0.graph
    }

    /// Derivative accumulated by backward passes, `None` before the first one
    /// reaches this leaf (and always `None` for non-leaves).
    pub fn derivative(&self) -> Option<f64> {
        *self.0.derivative.borrow()
    }

    /// Forgets the accumulated derivative.
    pub fn zero_grad(&self) {
        self.0.derivative.replace(None);
    }

    /// Name of the operation that produced this value, if any.
    pub fn op_name(&self) -> Option<&'static str> {
        match &self.0.origin {
            Origin::Op(history) => Some(history.function.name()),
            _ => None,
        }
    }

    /// The memo recorded by the operation that produced this value.
    pub fn context(&self) -> Option<&Context<f64>> {
        match &self.0.origin {
            Origin::Op(history) => Some(&history.ctx),
            _ => None,
        }
    }

    /// Differentiates this value with respect to every leaf it depends on.
    pub fn backward(&self) -> Result<(), MinigradError> {
        self.backward_with(1.0)
    }

    /// Like [`backward`](Scalar::backward) with an explicit seed derivative.
    pub fn backward_with(&self, seed: f64) -> Result<(), MinigradError> {
        debug!("Scalar::backward from {} with seed {}", self.id(), seed);
        backpropagate(self, seed)
    }
}

impl Variable for Scalar {
    type Derivative = f64;

    fn unique_id(&self) -> NodeId {
        self.0.id
    }

    fn is_leaf(&self) -> bool {
        matches!(self.0.origin, Origin::Leaf)
    }

    fn is_constant(&self) -> bool {
        matches!(self.0.origin, Origin::Constant)
    }

    fn parents(&self) -> Vec<Self> {
        match &self.0.origin {
            Origin::Op(history) => history.inputs.clone(),
            _ => Vec::new(),
        }
    }

    fn accumulate_derivative(&self, derivative: f64) -> Result<(), MinigradError> {
        if !self.is_leaf() {
            return Err(MinigradError::InternalError(format!(
                "accumulate_derivative called on non-leaf scalar {}",
                self.id()
            )));
        }
        let mut slot = self.0.derivative.borrow_mut();
        *slot = Some(slot.unwrap_or(0.0) + derivative);
        Ok(())
    }

    fn chain_rule(&self, d_output: f64) -> Result<Vec<(Self, f64)>, MinigradError> {
        let history = match &self.0.origin {
            Origin::Op(history) => history,
            _ => {
                return Err(MinigradError::InternalError(format!(
                    "chain_rule called on scalar {} without history",
                    self.id()
                )))
            }
        };
        let partials = history.function.backward(&history.ctx, d_output)?;
        if partials.len() != history.inputs.len() {
            return Err(MinigradError::InternalError(format!(
                "{} backward returned {} derivative(s) for {} input(s)",
                history.function.name(),
                partials.len(),
                history.inputs.len()
            )));
        }
        Ok(history
            .inputs
            .iter()
            .zip(partials)
            .filter(|(input, _)| !input.is_constant())
            .map(|(input, d)| (input.clone(), d))
            .collect())
    }
}

impl fmt::Debug for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match &self.0.origin {
            Origin::Leaf => "leaf",
            Origin::Constant => "constant",
            Origin::Op(history) => history.function.name(),
        };
        write!(f, "Scalar({}, {} = {})", self.0.id, kind, self.0.value)
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Scalar({})", self.0.value)
    }
}

#[cfg(test)]
#[path = "scalar_test.rs"]
mod tests;
