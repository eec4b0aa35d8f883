use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::node::NodeId;
use crate::ops::arithmetic::mul::mul_op;
use crate::ops::arithmetic::pow::pow_op;
use crate::scalar::Scalar;

/// Creates `a / b`, built as `a * b^-1`.
///
/// Two nodes are allocated: the reciprocal (`Pow { exponent: -1 }`) and the
/// product, which is returned. Gradients follow from the rules of those two
/// operations.
///
/// Dividing by a zero-valued node yields `inf`/`NaN` per IEEE 754; no error
/// is raised.
pub fn div_op<T: Scalar>(
    graph: &mut Graph<T>,
    a: NodeId,
    b: NodeId,
) -> Result<NodeId, ScalarGradError> {
    // Validate `a` before allocating the reciprocal.
    graph.data(a)?;
    let reciprocal = pow_op(graph, b, -T::one())?;
    mul_op(graph, a, reciprocal)
}

#[cfg(test)]
#[path = "div_test.rs"]
mod tests;
