use crate::autograd::Operation;
use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::node::NodeId;
use crate::scalar::Scalar;

/// Applies the logistic sigmoid: `σ(x) = 1 / (1 + e^-x)`.
///
/// Backward: `a.grad += out.data * (1 - out.data) * out.grad`, computed
/// from the stored output so the exponential is not evaluated again.
pub fn sigmoid_op<T: Scalar>(graph: &mut Graph<T>, a: NodeId) -> Result<NodeId, ScalarGradError> {
    let a_data = graph.data(a)?;
    let out = T::one() / (T::one() + (-a_data).exp());
    Ok(graph.push(out, Operation::Sigmoid(a)))
}
