use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::node::NodeId;
use crate::scalar::Scalar;

/// The base trait for neural network modules built on a scalar [`Graph`].
///
/// A module owns no values itself: its parameters are leaf nodes living in
/// the graph it was created in, and it refers to them by [`NodeId`].
pub trait Module<T: Scalar>: std::fmt::Debug {
    /// Performs a forward pass of the module.
    ///
    /// # Arguments
    /// * `graph`: The graph holding the module's parameters; new nodes are appended to it.
    /// * `inputs`: Input nodes, in order.
    ///
    /// # Returns
    /// The output node, or a `ScalarGradError` if the inputs do not fit the module.
    fn forward(&self, graph: &mut Graph<T>, inputs: &[NodeId]) -> Result<NodeId, ScalarGradError>;

    /// Returns all learnable parameter nodes of the module.
    fn parameters(&self) -> Vec<NodeId>;

    /// Returns the parameter nodes along with their names (e.g. `"weight.0"`, `"bias"`).
    fn named_parameters(&self) -> Vec<(String, NodeId)>;

    /// Number of learnable parameters.
    fn parameter_count(&self) -> usize {
        self.parameters().len()
    }

    /// Resets the gradient of this module's parameters, and only those, to 0.
    fn zero_grad(&self, graph: &mut Graph<T>) -> Result<(), ScalarGradError> {
        graph.zero_grad(&self.parameters())
    }
}
