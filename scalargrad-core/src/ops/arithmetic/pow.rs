use crate::autograd::Operation;
use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::node::NodeId;
use crate::scalar::Scalar;

/// Creates `a ^ exponent` for a constant scalar exponent.
///
/// Backward: `a.grad += exponent * a.data^(exponent - 1) * out.grad`.
///
/// A zero base with a negative exponent is not an error: the forward value
/// is `inf` and the gradient `-inf`/`NaN`, following IEEE 754 `powf`.
pub fn pow_op<T: Scalar>(
    graph: &mut Graph<T>,
    a: NodeId,
    exponent: T,
) -> Result<NodeId, ScalarGradError> {
    let a_data = graph.data(a)?;
    Ok(graph.push(
        a_data.powf(exponent),
        Operation::Pow { base: a, exponent },
    ))
}

#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;
