use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use scalargrad_core::{Graph, NodeId, ScalarGradError};

// Helper functions shared by the integration tests.
// Added allow(dead_code) because usage across different test crates isn't detected easily.

/// Creates one leaf per value, in order.
#[allow(dead_code)]
pub fn leaves(graph: &mut Graph<f64>, values: &[f64]) -> Vec<NodeId> {
    values.iter().map(|&v| graph.leaf(v)).collect()
}

/// Collects the gradients of `nodes`.
#[allow(dead_code)]
pub fn grads(graph: &Graph<f64>, nodes: &[NodeId]) -> Result<Vec<f64>, ScalarGradError> {
    nodes.iter().map(|&id| graph.grad(id)).collect()
}

/// Deterministic values drawn uniformly from [-1, 1].
#[allow(dead_code)]
pub fn seeded_values(seed: u64, count: usize) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count).map(|_| rng.gen_range(-1.0..=1.0)).collect()
}
