use crate::node::NodeId;
use thiserror::Error;

/// Custom error type for the scalargrad engine.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum ScalarGradError {
    #[error("Node {id} not found in graph holding {len} nodes")]
    NodeNotFound { id: NodeId, len: usize },

    #[error("Input width mismatch: expected {expected} inputs, got {actual}")]
    InputWidthMismatch { expected: usize, actual: usize },

    #[error("Node {id} is not a leaf; only leaf values can be replaced")]
    NotALeaf { id: NodeId },

    #[error("Unknown activation '{0}', expected 'relu' or 'sigmoid'")]
    UnknownActivation(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}
