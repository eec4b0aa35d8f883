// src/graph/mod.rs

use crate::autograd::Operation;
use crate::error::ScalarGradError;
use crate::node::{get_node, get_node_mut, Node, NodeId};
use crate::scalar::Scalar;
use log::trace;

mod autograd_methods;
mod debug;
mod ops_methods;

/// Arena holding every node of a scalar computation graph.
///
/// Nodes are addressed by [`NodeId`] (their arena index). Operands are
/// recorded as ids of nodes that already exist, so operands always sit at
/// lower indices than their consumers and the graph is acyclic by
/// construction. The arena owns every node for its whole lifetime: there are
/// no reference-counted links and no back-references, and a backward rule can
/// never observe a released operand.
///
/// The scalar type defaults to `f64`; `Graph<f32>` is also supported.
///
/// # Example
/// ```
/// use scalargrad_core::Graph;
///
/// let mut graph = Graph::new();
/// let a = graph.leaf(1.0);
/// let b = graph.leaf(2.0);
/// let c = graph.add(a, b)?;
/// graph.backward(c)?;
/// assert_eq!(graph.data(c)?, 3.0);
/// assert_eq!(graph.grad(a)?, 1.0);
/// # Ok::<(), scalargrad_core::ScalarGradError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Graph<T = f64> {
    pub(crate) nodes: Vec<Node<T>>,
}

impl<T: Scalar> Default for Graph<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Scalar> Graph<T> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Graph { nodes: Vec::new() }
    }

    /// Creates an empty graph with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Graph {
            nodes: Vec::with_capacity(capacity),
        }
    }

    /// Creates a leaf node (input or parameter) holding `value`, with zero gradient.
    pub fn leaf(&mut self, value: T) -> NodeId {
        self.push(value, Operation::None)
    }

    /// Appends a node. Callers guarantee every operand in `op` already exists.
    pub(crate) fn push(&mut self, data: T, op: Operation<T>) -> NodeId {
        let id = NodeId(self.nodes.len());
        trace!("Graph: created node {} ({}) data={}", id, op.name(), data);
        self.nodes.push(Node::new(data, op));
        id
    }

    /// Number of nodes in the arena.
    ///
    /// The value can be kept as a checkpoint for [`Graph::truncate`].
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Checks whether `id` refers to a node of this graph.
    pub fn contains(&self, id: NodeId) -> bool {
        id.0 < self.nodes.len()
    }

    /// All nodes, indexed by `NodeId::index()`.
    pub fn nodes(&self) -> &[Node<T>] {
        &self.nodes
    }

    /// Read-only view of a node.
    pub fn node(&self, id: NodeId) -> Result<&Node<T>, ScalarGradError> {
        get_node(&self.nodes, id)
    }

    pub fn data(&self, id: NodeId) -> Result<T, ScalarGradError> {
        Ok(self.node(id)?.data)
    }

    pub fn grad(&self, id: NodeId) -> Result<T, ScalarGradError> {
        Ok(self.node(id)?.grad)
    }

    pub fn operation(&self, id: NodeId) -> Result<Operation<T>, ScalarGradError> {
        Ok(self.node(id)?.op)
    }

    pub fn operands(&self, id: NodeId) -> Result<Vec<NodeId>, ScalarGradError> {
        Ok(self.node(id)?.operands())
    }

    /// Replaces the value of a leaf node.
    ///
    /// This is the update hook for parameters between training iterations.
    /// Interior nodes keep the value they were computed with; nodes already
    /// built on top of `id` are NOT recomputed. Their backward rules would
    /// mix the stale outputs with the new leaf value, so drop them with
    /// [`Graph::truncate`] and rebuild the forward pass before the next
    /// `backward`.
    ///
    /// # Errors
    /// * `NodeNotFound` if `id` is not in the graph.
    /// * `NotALeaf` if `id` was produced by an operation.
    pub fn set_data(&mut self, id: NodeId, value: T) -> Result<(), ScalarGradError> {
        let node = get_node_mut(&mut self.nodes, id)?;
        if !node.is_leaf() {
            return Err(ScalarGradError::NotALeaf { id });
        }
        node.data = value;
        Ok(())
    }

    /// Drops every node created after the graph held `len` nodes.
    ///
    /// Because operands always precede their consumers, the remaining prefix
    /// is a closed graph. Ids at or past `len` become invalid. Does nothing
    /// if `len` is not smaller than the current length.
    pub fn truncate(&mut self, len: usize) {
        if len < self.nodes.len() {
            trace!("Graph: truncating {} nodes to {}", self.nodes.len(), len);
            self.nodes.truncate(len);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leaf_creation() -> Result<(), ScalarGradError> {
        let mut graph = Graph::new();
        let a = graph.leaf(1.5);
        assert_eq!(graph.data(a)?, 1.5);
        assert_eq!(graph.grad(a)?, 0.0);
        assert_eq!(graph.operation(a)?, Operation::None);
        assert!(graph.operands(a)?.is_empty());
        assert!(graph.node(a)?.is_leaf());
        Ok(())
    }

    #[test]
    fn test_identity_is_not_structural() -> Result<(), ScalarGradError> {
        let mut graph = Graph::new();
        let a = graph.leaf(2.0);
        let b = graph.leaf(2.0);
        assert_ne!(a, b);
        assert_eq!(graph.node(a)?, graph.node(b)?);
        assert_eq!(graph.len(), 2);
        Ok(())
    }

    #[test]
    fn test_unknown_node() {
        let mut graph: Graph<f64> = Graph::new();
        graph.leaf(1.0);
        let missing = NodeId(7);
        assert!(!graph.contains(missing));
        assert_eq!(
            graph.data(missing),
            Err(ScalarGradError::NodeNotFound { id: missing, len: 1 })
        );
    }

    #[test]
    fn test_set_data_leaf_only() -> Result<(), ScalarGradError> {
        let mut graph = Graph::new();
        let a = graph.leaf(1.0);
        let b = graph.leaf(2.0);
        let c = graph.add(a, b)?;

        graph.set_data(a, 4.0)?;
        assert_eq!(graph.data(a)?, 4.0);
        // Consumers keep their forward value.
        assert_eq!(graph.data(c)?, 3.0);
        assert_eq!(graph.set_data(c, 0.0), Err(ScalarGradError::NotALeaf { id: c }));
        Ok(())
    }

    #[test]
    fn test_set_data_then_rebuild() -> Result<(), ScalarGradError> {
        let mut graph = Graph::new();
        let w = graph.leaf(3.0);
        let checkpoint = graph.len();
        let sq = graph.mul(w, w)?;
        graph.backward(sq)?;
        assert_eq!(graph.grad(w)?, 6.0);

        graph.set_data(w, 5.0)?;
        graph.truncate(checkpoint);
        graph.zero_grad(&[w])?;
        let sq = graph.mul(w, w)?;
        graph.backward(sq)?;
        assert_eq!(graph.data(sq)?, 25.0);
        assert_eq!(graph.grad(w)?, 10.0);
        Ok(())
    }

    #[test]
    fn test_truncate_to_checkpoint() -> Result<(), ScalarGradError> {
        let mut graph = Graph::new();
        let w = graph.leaf(0.5);
        let checkpoint = graph.len();

        let x = graph.leaf(2.0);
        let y = graph.mul(w, x)?;
        assert_eq!(graph.len(), 3);

        graph.truncate(checkpoint);
        assert_eq!(graph.len(), 1);
        assert!(graph.contains(w));
        assert!(!graph.contains(y));
        assert!(graph.data(y).is_err());

        graph.truncate(10);
        assert_eq!(graph.len(), 1);
        Ok(())
    }

    #[test]
    fn test_f32_graph() -> Result<(), ScalarGradError> {
        let mut graph: Graph<f32> = Graph::with_capacity(4);
        let a = graph.leaf(1.0f32);
        let b = graph.leaf(2.0f32);
        let c = graph.mul(a, b)?;
        graph.backward(c)?;
        assert_eq!(graph.data(c)?, 2.0f32);
        assert_eq!(graph.grad(a)?, 2.0f32);
        Ok(())
    }
}
