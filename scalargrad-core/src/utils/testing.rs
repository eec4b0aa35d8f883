use crate::graph::Graph;
use crate::node::NodeId;
use crate::scalar::Scalar;

/// Checks that the gradients of `nodes` are within `tolerance` of `expected`.
/// Panics with the offending index, value and difference otherwise.
pub fn check_grads_near<T: Scalar>(
    graph: &Graph<T>,
    nodes: &[NodeId],
    expected: &[T],
    tolerance: T,
) {
    assert_eq!(nodes.len(), expected.len(), "Node count mismatch");
    for (i, (&id, &e)) in nodes.iter().zip(expected.iter()).enumerate() {
        let actual = graph
            .grad(id)
            .unwrap_or_else(|err| panic!("check_grads_near: {}", err));
        let diff = (actual - e).abs();
        if !(diff <= tolerance) {
            panic!(
                "Grad mismatch at index {} (node {}): actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
                i, id, actual, e, diff, tolerance
            );
        }
    }
}

/// Checks that the forward values of `nodes` are within `tolerance` of `expected`.
pub fn check_data_near<T: Scalar>(
    graph: &Graph<T>,
    nodes: &[NodeId],
    expected: &[T],
    tolerance: T,
) {
    assert_eq!(nodes.len(), expected.len(), "Node count mismatch");
    for (i, (&id, &e)) in nodes.iter().zip(expected.iter()).enumerate() {
        let actual = graph
            .data(id)
            .unwrap_or_else(|err| panic!("check_data_near: {}", err));
        let diff = (actual - e).abs();
        if !(diff <= tolerance) {
            panic!(
                "Data mismatch at index {} (node {}): actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
                i, id, actual, e, diff, tolerance
            );
        }
    }
}
