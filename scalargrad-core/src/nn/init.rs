use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::node::NodeId;
use crate::scalar::Scalar;
use rand::Rng;

/// Fills the leaf `node` with a value drawn uniformly from `[low, high]`.
///
/// Operates in-place through [`Graph::set_data`]; the gradient is left as is.
///
/// # Arguments
/// * `graph`: The graph holding `node`.
/// * `node`: A leaf node (parameter).
/// * `low`, `high`: Finite inclusive bounds, `low <= high`, with a finite
///   span `high - low`.
/// * `rng`: Source of randomness.
///
/// # Errors
/// * `NodeNotFound` / `NotALeaf` from [`Graph::set_data`].
/// * `InternalError` if `low > high`, a bound is not finite, or the span
///   overflows.
pub fn uniform_<T, R>(
    graph: &mut Graph<T>,
    node: NodeId,
    low: T,
    high: T,
    rng: &mut R,
) -> Result<(), ScalarGradError>
where
    T: Scalar,
    R: Rng + ?Sized,
{
    if !(low <= high) || !low.is_finite() || !high.is_finite() || !(high - low).is_finite() {
        return Err(ScalarGradError::InternalError(format!(
            "uniform_: invalid range [{}, {}]",
            low, high
        )));
    }
    let value = rng.gen_range(low..=high);
    graph.set_data(node, value)
}

/// Fills the leaf `node` with the scalar value 0.
pub fn zeros_<T: Scalar>(graph: &mut Graph<T>, node: NodeId) -> Result<(), ScalarGradError> {
    graph.set_data(node, T::zero())
}

// --- Tests ---
#[cfg(test)]
#[path = "init_test.rs"]
mod tests; // Link to the test file
