use crate::error::ScalarGradError;
use crate::node::{get_node, get_node_mut, Node, NodeId};
use crate::scalar::Scalar;
use std::fmt;

/// Defines the interface for the backward pass of a differentiable scalar operation.
///
/// Every non-leaf node stores the operation that produced it. During
/// `backward()` the driver calls [`BackwardOp::backward`] on each node in
/// reverse topological order so the operation can push the node's gradient
/// into its operands according to the chain rule.
pub trait BackwardOp<T> {
    /// Distributes the gradient of `output` into the gradients of this operation's inputs.
    ///
    /// Mathematically, if \( \text{out} = f(a, b) \), this adds
    /// \( \frac{dL}{d\text{out}} \cdot \frac{d\text{out}}{da} \) to `a.grad`
    /// (and likewise for `b`). Contributions are accumulated, never
    /// overwritten, so a node consumed along several paths receives the sum.
    ///
    /// # Arguments
    /// * `output`: Id of the node this operation produced.
    /// * `nodes`: The arena holding `output` and every operand.
    ///
    /// # Errors
    /// Returns `ScalarGradError::NodeNotFound` if `output` or an operand is
    /// missing from `nodes`.
    fn backward(&self, output: NodeId, nodes: &mut [Node<T>]) -> Result<(), ScalarGradError>;

    /// Returns the ids of the operands that participated in the forward operation.
    ///
    /// The order matches the order the operands were given to the constructor.
    fn inputs(&self) -> Vec<NodeId>;
}

/// Provenance tag of a node, carrying its operand ids and any extra scalar parameter.
///
/// Division has no tag of its own: it is recorded as a `Mul` whose right
/// operand is a `Pow { exponent: -1 }` node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operation<T> {
    /// Leaf node (input or parameter).
    None,
    Add(NodeId, NodeId),
    Sub(NodeId, NodeId),
    Mul(NodeId, NodeId),
    Pow { base: NodeId, exponent: T },
    Relu(NodeId),
    Sigmoid(NodeId),
}

impl<T> Operation<T> {
    pub fn is_leaf(&self) -> bool {
        matches!(self, Operation::None)
    }

    /// Lower-case operation name (`"none"`, `"add"`, `"subtract"`, ...).
    pub fn name(&self) -> &'static str {
        match self {
            Operation::None => "none",
            Operation::Add(..) => "add",
            Operation::Sub(..) => "subtract",
            Operation::Mul(..) => "multiply",
            Operation::Pow { .. } => "power",
            Operation::Relu(_) => "relu",
            Operation::Sigmoid(_) => "sigmoid",
        }
    }
}

impl<T: fmt::Display> fmt::Display for Operation<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::None => write!(f, ""),
            Operation::Add(..) => write!(f, "+"),
            Operation::Sub(..) => write!(f, "-"),
            Operation::Mul(..) => write!(f, "*"),
            Operation::Pow { exponent, .. } => write!(f, "^{}", exponent),
            Operation::Relu(_) => write!(f, "ReLU"),
            Operation::Sigmoid(_) => write!(f, "Sigmoid"),
        }
    }
}

impl<T: Scalar> BackwardOp<T> for Operation<T> {
    fn backward(&self, output: NodeId, nodes: &mut [Node<T>]) -> Result<(), ScalarGradError> {
        let (out_data, out_grad) = {
            let out = get_node(nodes, output)?;
            (out.data, out.grad)
        };

        match *self {
            Operation::None => {}
            Operation::Add(a, b) => {
                get_node_mut(nodes, a)?.grad += out_grad;
                get_node_mut(nodes, b)?.grad += out_grad;
            }
            Operation::Sub(a, b) => {
                get_node_mut(nodes, a)?.grad += out_grad;
                get_node_mut(nodes, b)?.grad -= out_grad;
            }
            Operation::Mul(a, b) => {
                // Read both values before writing: a and b may be the same node.
                let a_data = get_node(nodes, a)?.data;
                let b_data = get_node(nodes, b)?.data;
                get_node_mut(nodes, a)?.grad += b_data * out_grad;
                get_node_mut(nodes, b)?.grad += a_data * out_grad;
            }
            Operation::Pow { base, exponent } => {
                let base_node = get_node_mut(nodes, base)?;
                let local = exponent * base_node.data.powf(exponent - T::one());
                base_node.grad += local * out_grad;
            }
            Operation::Relu(a) => {
                if out_data > T::zero() {
                    get_node_mut(nodes, a)?.grad += out_grad;
                }
            }
            Operation::Sigmoid(a) => {
                get_node_mut(nodes, a)?.grad += out_data * (T::one() - out_data) * out_grad;
            }
        }
        Ok(())
    }

    fn inputs(&self) -> Vec<NodeId> {
        match *self {
            Operation::None => Vec::new(),
            Operation::Add(a, b) | Operation::Sub(a, b) | Operation::Mul(a, b) => vec![a, b],
            Operation::Pow { base, .. } => vec![base],
            Operation::Relu(a) | Operation::Sigmoid(a) => vec![a],
        }
    }
}
