use crate::autograd::BackwardOp;
use crate::error::ScalarGradError;
use crate::node::{get_node, Node, NodeId};
use crate::scalar::Scalar;
use log::trace;
use std::collections::HashSet;

/// Builds a topological sort of the nodes reachable from `root`.
///
/// The result lists every node reachable through operand links exactly once,
/// with each operand placed before any node that consumes it; `root` is
/// always last. Used by `backward()`, which walks it in reverse.
///
/// The traversal is a depth-first post-order run on an explicit stack, so
/// long chains (e.g. a wide neuron's running sum) cannot overflow the call
/// stack. A visited set keyed by [`NodeId`] keeps shared operands (diamond
/// shapes) from being emitted twice.
///
/// # Errors
/// Returns `ScalarGradError::NodeNotFound` if `root` (or any operand link) is
/// not part of `nodes`.
pub fn topological_sort<T: Scalar>(
    nodes: &[Node<T>],
    root: NodeId,
) -> Result<Vec<NodeId>, ScalarGradError> {
    get_node(nodes, root)?;

    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut sorted_list: Vec<NodeId> = Vec::new();
    // (node, operands already pushed)
    let mut stack: Vec<(NodeId, bool)> = vec![(root, false)];

    while let Some((id, expanded)) = stack.pop() {
        if expanded {
            trace!("[topological_sort] Adding node {} to sorted list", id);
            sorted_list.push(id);
            continue;
        }
        if !visited.insert(id) {
            continue;
        }
        stack.push((id, true));
        // Reversed so the first operand is visited first.
        for input in get_node(nodes, id)?.op.inputs().into_iter().rev() {
            if !visited.contains(&input) {
                stack.push((input, false));
            }
        }
    }

    Ok(sorted_list)
}
