use crate::autograd::variable::{NodeId, Variable};
use log::{debug, trace, warn};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    /// Entered, parents still being explored.
    Visiting,
    /// Recorded in the post-order.
    Finished,
}

enum Frame<V> {
    Enter(V),
    Exit(V),
}

/// Builds the processing order used by a backward pass.
///
/// The returned sequence holds every non-constant node reachable from `root`
/// exactly once, and every node appears strictly before each of its non-constant
/// parents. When `root` is not constant it is the first element; when it is
/// constant the sequence is empty.
///
/// This is a depth-first post-order over the parent relation, reversed. The walk
/// keeps its own stack of enter/exit frames instead of recursing, so a long chain
/// of operations cannot exhaust the call stack.
pub fn topological_sort<V: Variable>(root: &V) -> Vec<V> {
    let mut post_order: Vec<V> = Vec::new();
    if root.is_constant() {
        debug!("topological_sort: root {} is constant, nothing to order", root.unique_id());
        return post_order;
    }

    let mut marks: HashMap<NodeId, Mark> = HashMap::new();
    let mut stack: Vec<Frame<V>> = vec![Frame::Enter(root.clone())];

    while let Some(frame) = stack.pop() {
        match frame {
            Frame::Enter(node) => {
                let id = node.unique_id();
                if marks.contains_key(&id) {
                    // Pushed by two consumers before either reached it.
                    continue;
                }
                marks.insert(id, Mark::Visiting);

                let parents = if node.is_leaf() {
                    Vec::new()
                } else {
                    node.parents()
                };
                stack.push(Frame::Exit(node));

                // Reversed so the first parent is explored first, like the recursive walk.
                for parent in parents.into_iter().rev() {
                    if parent.is_constant() {
                        continue;
                    }
                    match marks.get(&parent.unique_id()) {
                        None => stack.push(Frame::Enter(parent)),
                        Some(Mark::Finished) => {}
                        Some(Mark::Visiting) => {
                            warn!(
                                "topological_sort: edge {} -> {} closes a cycle, skipping it",
                                id,
                                parent.unique_id()
                            );
                        }
                    }
                }
            }
            Frame::Exit(node) => {
                let id = node.unique_id();
                trace!("topological_sort: recording node {}", id);
                marks.insert(id, Mark::Finished);
                post_order.push(node);
            }
        }
    }

    post_order.reverse();
    debug!(
        "topological_sort: {} node(s) ordered from root {}",
        post_order.len(),
        root.unique_id()
    );
    post_order
}

#[cfg(test)]
#[path = "graph_test.rs"]
mod tests;
