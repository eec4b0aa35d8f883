use crate::autograd::{BackwardOp, Operation};
use crate::error::ScalarGradError;
use crate::scalar::Scalar;
use std::fmt;

/// Stable identity of a node inside the [`Graph`](crate::Graph) arena that created it.
///
/// A `NodeId` is the node's arena index. It is never derived from the node's
/// value or operation, so two nodes holding the same data stay distinct.
/// Ids are only meaningful for the graph that issued them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Position of the node in its graph's arena.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

pub(crate) fn get_node<T>(nodes: &[Node<T>], id: NodeId) -> Result<&Node<T>, ScalarGradError> {
    nodes.get(id.0).ok_or(ScalarGradError::NodeNotFound {
        id,
        len: nodes.len(),
    })
}

pub(crate) fn get_node_mut<T>(
    nodes: &mut [Node<T>],
    id: NodeId,
) -> Result<&mut Node<T>, ScalarGradError> {
    let len = nodes.len();
    nodes
        .get_mut(id.0)
        .ok_or(ScalarGradError::NodeNotFound { id, len })
}

/// Holds the value, gradient and provenance of a single graph node.
///
/// Only `grad` changes after construction (plus `data` for leaves, through
/// [`Graph::set_data`](crate::Graph::set_data)).
#[derive(Debug, Clone, PartialEq)]
pub struct Node<T> {
    pub(crate) data: T,
    pub(crate) grad: T,
    pub(crate) op: Operation<T>,
}

impl<T: Scalar> Node<T> {
    pub(crate) fn new(data: T, op: Operation<T>) -> Self {
        Node {
            data,
            grad: T::zero(),
            op,
        }
    }

    /// Forward-evaluated value.
    pub fn data(&self) -> T {
        self.data
    }

    /// Accumulated gradient of the last backward root with respect to this node.
    pub fn grad(&self) -> T {
        self.grad
    }

    /// The operation that produced this node (`Operation::None` for leaves).
    pub fn operation(&self) -> &Operation<T> {
        &self.op
    }

    /// Operands this node depends on, in construction order.
    pub fn operands(&self) -> Vec<NodeId> {
        self.op.inputs()
    }

    pub fn is_leaf(&self) -> bool {
        self.op.is_leaf()
    }
}

impl<T: Scalar> fmt::Display for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[data={}, grad={}]", self.data, self.grad)
    }
}
