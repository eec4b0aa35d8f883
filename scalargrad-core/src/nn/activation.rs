use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::node::NodeId;
use crate::scalar::Scalar;
use std::fmt;
use std::str::FromStr;

/// Activation selector for [`Neuron`](crate::nn::Neuron).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Activation {
    Relu,
    Sigmoid,
}

impl Activation {
    /// Applies the activation to `input`, creating the corresponding graph node.
    pub fn apply<T: Scalar>(
        self,
        graph: &mut Graph<T>,
        input: NodeId,
    ) -> Result<NodeId, ScalarGradError> {
        match self {
            Activation::Relu => graph.relu(input),
            Activation::Sigmoid => graph.sigmoid(input),
        }
    }
}

impl fmt::Display for Activation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Activation::Relu => write!(f, "relu"),
            Activation::Sigmoid => write!(f, "sigmoid"),
        }
    }
}

impl FromStr for Activation {
    type Err = ScalarGradError;

    /// Parses `"relu"` or `"sigmoid"` (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "relu" => Ok(Activation::Relu),
            "sigmoid" => Ok(Activation::Sigmoid),
            _ => Err(ScalarGradError::UnknownActivation(s.to_string())),
        }
    }
}
