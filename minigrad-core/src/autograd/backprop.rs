use crate::autograd::graph::topological_sort;
use crate::autograd::variable::{NodeId, Variable};
use crate::error::MinigradError;
use log::{debug, trace};
use std::collections::HashMap;

/// Runs one backward pass from `root`.
///
/// `seed` is the derivative of the final quantity with respect to `root` (the
/// unit value when `root` itself is being differentiated). After the pass every
/// leaf reachable from `root` without crossing a constant has received, through
/// [`Variable::accumulate_derivative`], the sum of the contributions of every
/// path leading to it.
///
/// Each node is visited once, in [`topological_sort`] order. Because a node
/// always comes after all of its consumers, its entry in the derivative map is
/// complete by the time it is read.
///
/// # Errors
/// * Any error returned by a node's `chain_rule` or `accumulate_derivative`
///   aborts the pass and is returned unchanged.
/// * `MinigradError::MissingDerivative` if a node is reached without an
///   accumulated derivative. The graph was cyclic or a `chain_rule` did not
///   report one of its parents; the pass is abandoned, leaves already updated
///   keep their new values.
pub fn backpropagate<V: Variable>(root: &V, seed: V::Derivative) -> Result<(), MinigradError> {
    let order = topological_sort(root);
    debug!(
        "backpropagate: starting from {} over {} node(s)",
        root.unique_id(),
        order.len()
    );

    let mut derivatives: HashMap<NodeId, V::Derivative> = HashMap::new();
    derivatives.insert(root.unique_id(), seed);

    let mut leaves_updated = 0usize;
    for node in order {
        let id = node.unique_id();
        // Removed rather than read: nothing can add to it once it is processed.
        let d_output = derivatives
            .remove(&id)
            .ok_or(MinigradError::MissingDerivative { node: id })?;

        if node.is_leaf() {
            trace!("backpropagate: accumulating into leaf {}", id);
            node.accumulate_derivative(d_output)?;
            leaves_updated += 1;
            continue;
        }

        let contributions = node.chain_rule(d_output)?;
        trace!(
            "backpropagate: node {} sent {} contribution(s)",
            id,
            contributions.len()
        );
        for (parent, local) in contributions {
            let parent_id = parent.unique_id();
            let total = match derivatives.remove(&parent_id) {
                Some(previous) => previous + local,
                None => local,
            };
            derivatives.insert(parent_id, total);
        }
    }

    debug!("backpropagate: done, {} leaf node(s) updated", leaves_updated);
    Ok(())
}

#[cfg(test)]
#[path = "backprop_test.rs"]
mod tests;
