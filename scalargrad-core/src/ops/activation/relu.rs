use crate::autograd::Operation;
use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::node::NodeId;
use crate::scalar::Scalar;

/// Applies the Rectified Linear Unit: `ReLU(x) = max(0, x)`.
///
/// Backward: `a.grad += out.grad` when `out.data > 0`, nothing otherwise.
/// The derivative at exactly 0 is taken as 0. A `NaN` input yields `NaN`
/// and passes no gradient.
pub fn relu_op<T: Scalar>(graph: &mut Graph<T>, a: NodeId) -> Result<NodeId, ScalarGradError> {
    let a_data = graph.data(a)?;
    let out = if a_data > T::zero() || a_data.is_nan() {
        a_data
    } else {
        T::zero()
    };
    Ok(graph.push(out, Operation::Relu(a)))
}

#[cfg(test)]
#[path = "relu_test.rs"]
mod tests;
