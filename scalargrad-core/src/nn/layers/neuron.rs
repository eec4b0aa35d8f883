use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::nn::activation::Activation;
use crate::nn::init::{uniform_, zeros_};
use crate::nn::module::Module;
use crate::node::NodeId;
use crate::scalar::Scalar;
use log::debug;
use rand::Rng;
use std::marker::PhantomData;

/// A single artificial neuron: `activation(sum_i(w_i * x_i) + b)`.
///
/// The weights and bias are leaf nodes allocated in the graph passed to the
/// constructor; the neuron only stores their ids. Forward passes must use
/// that same graph.
#[derive(Debug, Clone, PartialEq)]
pub struct Neuron<T> {
    weights: Vec<NodeId>,
    bias: NodeId,
    activation: Activation,
    _scalar: PhantomData<T>,
}

impl<T: Scalar> Neuron<T> {
    /// Creates a neuron with `input_width` weights drawn uniformly from
    /// `[-1, 1]` using the thread-local RNG, and a bias of 0.
    pub fn new(graph: &mut Graph<T>, input_width: usize, activation: Activation) -> Self {
        Self::build(graph, input_width, activation, &mut rand::thread_rng())
    }

    /// Same as [`Neuron::new`] with a caller-supplied random source
    /// (e.g. a seeded `StdRng` for reproducible runs).
    pub fn with_rng<R: Rng + ?Sized>(
        graph: &mut Graph<T>,
        input_width: usize,
        activation: Activation,
        rng: &mut R,
    ) -> Self {
        Self::build(graph, input_width, activation, rng)
    }

    fn build<R: Rng + ?Sized>(
        graph: &mut Graph<T>,
        input_width: usize,
        activation: Activation,
        rng: &mut R,
    ) -> Self {
        let weights: Vec<NodeId> = (0..input_width)
            .map(|_| graph.leaf(rng.gen_range(-T::one()..=T::one())))
            .collect();
        let bias = graph.leaf(T::zero());
        debug!(
            "Neuron: created {} weights + bias ({}) starting at node {}",
            input_width,
            activation,
            weights.first().copied().unwrap_or(bias)
        );
        Neuron {
            weights,
            bias,
            activation,
            _scalar: PhantomData,
        }
    }

    /// Re-draws every weight uniformly from `[-1, 1]` and resets the bias to 0.
    pub fn reset_parameters<R: Rng + ?Sized>(
        &self,
        graph: &mut Graph<T>,
        rng: &mut R,
    ) -> Result<(), ScalarGradError> {
        for &weight in &self.weights {
            uniform_(graph, weight, -T::one(), T::one(), rng)?;
        }
        zeros_(graph, self.bias)
    }

    /// Number of inputs this neuron expects.
    pub fn input_width(&self) -> usize {
        self.weights.len()
    }

    pub fn weights(&self) -> &[NodeId] {
        &self.weights
    }

    pub fn bias(&self) -> NodeId {
        self.bias
    }

    pub fn activation(&self) -> Activation {
        self.activation
    }

    /// Human-readable dump of every parameter as `data, grad`, weights first.
    pub fn parameters_summary(&self, graph: &Graph<T>) -> Result<String, ScalarGradError> {
        let mut out = format!("Number of Parameters: {}\n", self.parameter_count());
        for id in self.parameters() {
            let node = graph.node(id)?;
            out.push_str(&format!("{}, {}\n", node.data(), node.grad()));
        }
        Ok(out)
    }
}

impl<T: Scalar> Module<T> for Neuron<T> {
    /// Computes `activation(w_0*x_0 + ... + w_n*x_n + b)`.
    ///
    /// The running sum starts from a fresh zero leaf, so the graph for `n`
    /// inputs holds `2n + 2` new nodes plus the activation.
    ///
    /// # Errors
    /// * `InputWidthMismatch` if `inputs.len()` differs from the number of
    ///   weights.
    /// * `NodeNotFound` if an input is not in `graph`.
    ///
    /// Nothing is added to the graph when an error is returned.
    fn forward(&self, graph: &mut Graph<T>, inputs: &[NodeId]) -> Result<NodeId, ScalarGradError> {
        if inputs.len() != self.weights.len() {
            return Err(ScalarGradError::InputWidthMismatch {
                expected: self.weights.len(),
                actual: inputs.len(),
            });
        }

        for &input in inputs {
            graph.node(input)?;
        }
        graph.node(self.bias)?;

        let mut sum = graph.leaf(T::zero());
        for (&weight, &input) in self.weights.iter().zip(inputs) {
            let product = graph.mul(weight, input)?;
            sum = graph.add(sum, product)?;
        }
        let pre_activation = graph.add(sum, self.bias)?;
        self.activation.apply(graph, pre_activation)
    }

    fn parameters(&self) -> Vec<NodeId> {
        let mut params = Vec::with_capacity(self.weights.len() + 1);
        params.extend_from_slice(&self.weights);
        params.push(self.bias);
        params
    }

    fn named_parameters(&self) -> Vec<(String, NodeId)> {
        let mut named: Vec<(String, NodeId)> = self
            .weights
            .iter()
            .enumerate()
            .map(|(i, &w)| (format!("weight.{}", i), w))
            .collect();
        named.push(("bias".to_string(), self.bias));
        named
    }
}

#[cfg(test)]
#[path = "neuron_test.rs"]
mod tests;
