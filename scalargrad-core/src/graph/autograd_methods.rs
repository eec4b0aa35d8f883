use crate::autograd::graph::topological_sort;
use crate::autograd::BackwardOp;
use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::node::{get_node, get_node_mut, NodeId};
use crate::scalar::Scalar;
use log::{debug, trace, warn};

impl<T: Scalar> Graph<T> {
    /// Performs the backward pass starting from `root`.
    ///
    /// 1. Orders the nodes reachable from `root` (operands first).
    /// 2. Seeds `root.grad = 1`.
    /// 3. Walks the order in reverse, letting every non-leaf node push its
    ///    gradient into its operands.
    ///
    /// Afterwards every reachable node's `grad` holds d(root)/d(node).
    ///
    /// Gradients are accumulated, not reset: calling `backward` twice on the
    /// same graph without [`Graph::zero_grad`] in between adds the second
    /// run on top of the first. The seed is an assignment, so only the root
    /// itself is unaffected.
    ///
    /// # Errors
    /// Returns `ScalarGradError::NodeNotFound` if `root` is not in the graph.
    pub fn backward(&mut self, root: NodeId) -> Result<(), ScalarGradError> {
        let sorted_nodes = topological_sort(&self.nodes, root)?;
        debug!(
            "Graph: backward from {} over {} of {} nodes",
            root,
            sorted_nodes.len(),
            self.nodes.len()
        );

        get_node_mut(&mut self.nodes, root)?.grad = T::one();

        for &node_id in sorted_nodes.iter().rev() {
            let op = get_node(&self.nodes, node_id)?.op;
            if !op.is_leaf() {
                op.backward(node_id, &mut self.nodes)?;
            }
            trace!("Graph: {} {}", node_id, get_node(&self.nodes, node_id)?);
        }

        let non_finite = sorted_nodes
            .iter()
            .filter(|id| !self.nodes[id.0].grad.is_finite())
            .count();
        if non_finite > 0 {
            warn!(
                "Graph: backward from {} left {} node(s) with a non-finite gradient",
                root, non_finite
            );
        }
        Ok(())
    }

    /// Resets `grad` to 0 for the given nodes only.
    ///
    /// # Errors
    /// Returns `ScalarGradError::NodeNotFound` for the first id that is not in
    /// the graph. Every id is checked first, so on error no gradient changes.
    pub fn zero_grad(&mut self, nodes: &[NodeId]) -> Result<(), ScalarGradError> {
        nodes.iter().try_for_each(|&id| self.node(id).map(|_| ()))?;
        for &id in nodes {
            get_node_mut(&mut self.nodes, id)?.grad = T::zero();
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "autograd_methods_test.rs"]
mod tests;
