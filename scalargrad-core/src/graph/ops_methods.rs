use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::node::NodeId;
use crate::ops::activation::{relu_op, sigmoid_op};
use crate::ops::arithmetic::{add_op, div_op, mul_op, pow_op, sub_op};
use crate::scalar::Scalar;

// Method-style access to the operation constructors in `crate::ops`.
impl<T: Scalar> Graph<T> {
    /// `a + b`. See [`add_op`].
    pub fn add(&mut self, a: NodeId, b: NodeId) -> Result<NodeId, ScalarGradError> {
        add_op(self, a, b)
    }

    /// `a - b`. See [`sub_op`].
    pub fn sub(&mut self, a: NodeId, b: NodeId) -> Result<NodeId, ScalarGradError> {
        sub_op(self, a, b)
    }

    /// `a * b`. See [`mul_op`].
    pub fn mul(&mut self, a: NodeId, b: NodeId) -> Result<NodeId, ScalarGradError> {
        mul_op(self, a, b)
    }

    /// `a ^ exponent`. See [`pow_op`].
    pub fn pow(&mut self, a: NodeId, exponent: T) -> Result<NodeId, ScalarGradError> {
        pow_op(self, a, exponent)
    }

    /// `a / b`, composed as `a * b^-1`. See [`div_op`].
    pub fn div(&mut self, a: NodeId, b: NodeId) -> Result<NodeId, ScalarGradError> {
        div_op(self, a, b)
    }

    /// `max(0, a)`. See [`relu_op`].
    pub fn relu(&mut self, a: NodeId) -> Result<NodeId, ScalarGradError> {
        relu_op(self, a)
    }

    /// `1 / (1 + e^-a)`. See [`sigmoid_op`].
    pub fn sigmoid(&mut self, a: NodeId) -> Result<NodeId, ScalarGradError> {
        sigmoid_op(self, a)
    }
}
