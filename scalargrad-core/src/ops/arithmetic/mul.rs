use crate::autograd::Operation;
use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::node::NodeId;
use crate::scalar::Scalar;

/// Creates `a * b`.
///
/// Backward: `a.grad += b.data * out.grad`, `b.grad += a.data * out.grad`.
/// When `a` and `b` are the same node both contributions land on it, giving
/// the `2a` derivative of a square.
pub fn mul_op<T: Scalar>(
    graph: &mut Graph<T>,
    a: NodeId,
    b: NodeId,
) -> Result<NodeId, ScalarGradError> {
    let a_data = graph.data(a)?;
    let b_data = graph.data(b)?;
    Ok(graph.push(a_data * b_data, Operation::Mul(a, b)))
}

#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
