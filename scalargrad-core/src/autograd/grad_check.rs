use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::node::NodeId;
use crate::scalar::Scalar;
use log::debug;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: Analytical grad {analytical_grad:?} != Numerical grad {numerical_grad:?}. Difference: {difference:?}")]
    GradientMismatch {
        input_index: usize,
        analytical_grad: f64, // Use f64 for precision
        numerical_grad: f64,
        difference: f64,
    },
    #[error("Forward function execution failed during gradient check: {0}")]
    ForwardPassError(ScalarGradError),
    #[error("Backward pass execution failed during gradient check: {0}")]
    BackwardPassError(ScalarGradError),
    #[error("Numerical gradient is NaN or infinite for input {input_index}. Details: Loss+: {loss_plus:?}, Loss-: {loss_minus:?}")]
    NumericalGradNaNOrInfinite {
        input_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },
    #[error("Analytical gradient is NaN or infinite for input {input_index}. Value: {value:?}")]
    AnalyticalGradNaNOrInfinite { input_index: usize, value: f64 },
    #[error("Graph error during gradient check: {0}")]
    GraphError(ScalarGradError),
}

impl From<ScalarGradError> for GradCheckError {
    fn from(err: ScalarGradError) -> Self {
        GradCheckError::GraphError(err)
    }
}

/// Builds `func` on fresh leaves holding `inputs` and returns the root's value.
fn evaluate<T, F>(func: &F, inputs: &[T]) -> Result<(Graph<T>, Vec<NodeId>, NodeId), GradCheckError>
where
    T: Scalar,
    F: Fn(&mut Graph<T>, &[NodeId]) -> Result<NodeId, ScalarGradError>,
{
    let mut graph = Graph::with_capacity(inputs.len());
    let leaves: Vec<NodeId> = inputs.iter().map(|&value| graph.leaf(value)).collect();
    let output = func(&mut graph, &leaves).map_err(GradCheckError::ForwardPassError)?;
    Ok((graph, leaves, output))
}

fn as_f64<T: Scalar>(value: T) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}

/// Checks analytical gradients against numerical gradients using central finite differences.
///
/// `func` receives a fresh graph and one leaf per entry of `inputs`, and
/// returns the root of the expression to check. The analytical gradient of
/// every input comes from one `backward()` call; the numerical one is
/// \( (f(x_i + \epsilon) - f(x_i - \epsilon)) / 2\epsilon \), each side
/// evaluated on its own graph.
///
/// An input passes when `|analytical - numerical| <= abs_tol + rel_tol * |numerical|`.
///
/// # Returns
/// The analytical gradients, in input order.
pub fn check_grad<T, F>(
    func: F,
    inputs: &[T],
    epsilon: T,
    abs_tol: f64,
    rel_tol: f64,
) -> Result<Vec<T>, GradCheckError>
where
    T: Scalar,
    F: Fn(&mut Graph<T>, &[NodeId]) -> Result<NodeId, ScalarGradError>,
{
    let two = T::one() + T::one();

    // --- 1. Initial Forward and Backward Pass ---
    let (mut graph, leaves, output) = evaluate(&func, inputs)?;
    graph
        .backward(output)
        .map_err(GradCheckError::BackwardPassError)?;
    let analytical_grads = leaves
        .iter()
        .map(|&leaf| graph.grad(leaf))
        .collect::<Result<Vec<T>, _>>()?;

    // --- 2. Perturb each input in turn ---
    for (i, &analytical) in analytical_grads.iter().enumerate() {
        let analytical = as_f64(analytical);
        if !analytical.is_finite() {
            return Err(GradCheckError::AnalyticalGradNaNOrInfinite {
                input_index: i,
                value: analytical,
            });
        }

        let mut perturbed = inputs.to_vec();
        perturbed[i] = inputs[i] + epsilon;
        let (plus_graph, _, plus_out) = evaluate(&func, &perturbed)?;
        let loss_plus = plus_graph.data(plus_out)?;

        perturbed[i] = inputs[i] - epsilon;
        let (minus_graph, _, minus_out) = evaluate(&func, &perturbed)?;
        let loss_minus = minus_graph.data(minus_out)?;

        let numerical = as_f64((loss_plus - loss_minus) / (two * epsilon));
        if !numerical.is_finite() {
            return Err(GradCheckError::NumericalGradNaNOrInfinite {
                input_index: i,
                loss_plus: as_f64(loss_plus),
                loss_minus: as_f64(loss_minus),
            });
        }

        let difference = (analytical - numerical).abs();
        debug!(
            "check_grad: input {} analytical={} numerical={} diff={}",
            i, analytical, numerical, difference
        );
        if difference > abs_tol + rel_tol * numerical.abs() {
            return Err(GradCheckError::GradientMismatch {
                input_index: i,
                analytical_grad: analytical,
                numerical_grad: numerical,
                difference,
            });
        }
    }

    Ok(analytical_grads)
}
