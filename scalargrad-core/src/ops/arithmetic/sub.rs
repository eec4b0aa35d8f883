use crate::autograd::Operation;
use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::node::NodeId;
use crate::scalar::Scalar;

/// Creates `a - b`.
///
/// Backward: `a.grad += out.grad`, `b.grad -= out.grad`.
pub fn sub_op<T: Scalar>(
    graph: &mut Graph<T>,
    a: NodeId,
    b: NodeId,
) -> Result<NodeId, ScalarGradError> {
    let a_data = graph.data(a)?;
    let b_data = graph.data(b)?;
    Ok(graph.push(a_data - b_data, Operation::Sub(a, b)))
}

#[cfg(test)]
#[path = "sub_test.rs"]
mod tests;
