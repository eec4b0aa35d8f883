mod common;

use common::{leaves, seeded_values};
use rand::rngs::StdRng;
use rand::SeedableRng;
use scalargrad_core::nn::{Activation, Module, Neuron};
use scalargrad_core::{Graph, NodeId, ScalarGradError};

fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

/// Squared error of `neuron` over every sample, summed into one node.
fn total_loss(
    graph: &mut Graph<f64>,
    neuron: &Neuron<f64>,
    samples: &[Vec<NodeId>],
    targets: &[NodeId],
) -> Result<NodeId, ScalarGradError> {
    let mut loss = graph.leaf(0.0);
    for (inputs, &target) in samples.iter().zip(targets) {
        let out = neuron.forward(graph, inputs)?;
        let diff = graph.sub(out, target)?;
        let squared = graph.pow(diff, 2.0)?;
        loss = graph.add(loss, squared)?;
    }
    Ok(loss)
}

#[test]
fn gradient_descent_reduces_loss() -> Result<(), ScalarGradError> {
    let mut graph = Graph::new();
    let neuron = Neuron::with_rng(&mut graph, 2, Activation::Sigmoid, &mut StdRng::seed_from_u64(7));

    let raw = seeded_values(42, 16);
    let mut samples = Vec::new();
    let mut targets = Vec::new();
    for pair in raw.chunks(2) {
        samples.push(leaves(&mut graph, pair));
        targets.push(graph.leaf(sigmoid(1.5 * pair[0] - 2.0 * pair[1] + 0.5)));
    }
    let checkpoint = graph.len();

    let learning_rate = 0.1;
    let mut losses = Vec::new();
    for _ in 0..200 {
        let loss = total_loss(&mut graph, &neuron, &samples, &targets)?;
        losses.push(graph.data(loss)?);

        neuron.zero_grad(&mut graph)?;
        graph.backward(loss)?;
        for id in neuron.parameters() {
            let updated = graph.data(id)? - learning_rate * graph.grad(id)?;
            graph.set_data(id, updated)?;
        }
        graph.truncate(checkpoint);
    }

    assert_eq!(graph.len(), checkpoint);
    let first = losses[0];
    let last = losses[losses.len() - 1];
    assert!(last < first, "loss went from {} to {}", first, last);
    Ok(())
}

#[test]
fn forward_rejects_wrong_width_without_growing_graph() {
    let mut graph: Graph<f64> = Graph::new();
    let neuron = Neuron::new(&mut graph, 3, Activation::Relu);
    let inputs = leaves(&mut graph, &[1.0, 2.0]);
    let len = graph.len();

    assert_eq!(
        neuron.forward(&mut graph, &inputs),
        Err(ScalarGradError::InputWidthMismatch { expected: 3, actual: 2 })
    );
    assert_eq!(graph.len(), len);
}

#[test]
fn relu_neuron_output_is_never_negative() -> Result<(), ScalarGradError> {
    let mut graph = Graph::new();
    let mut rng = StdRng::seed_from_u64(5);
    for seed in 0..25 {
        let neuron = Neuron::with_rng(&mut graph, 4, Activation::Relu, &mut rng);
        let inputs = leaves(&mut graph, &seeded_values(seed, 4));
        let out = neuron.forward(&mut graph, &inputs)?;
        assert!(graph.data(out)? >= 0.0);
    }
    Ok(())
}

#[test]
fn activation_parses_from_config_strings() -> Result<(), ScalarGradError> {
    let activation: Activation = "sigmoid".parse()?;
    let mut graph: Graph<f64> = Graph::new();
    let neuron = Neuron::new(&mut graph, 0, activation);
    let out = neuron.forward(&mut graph, &[])?;
    assert_eq!(graph.data(out)?, 0.5);

    assert!(matches!(
        "tanh".parse::<Activation>(),
        Err(ScalarGradError::UnknownActivation(_))
    ));
    Ok(())
}
