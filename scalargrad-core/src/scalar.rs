use num_traits::{Float, NumAssignOps};
use rand::distributions::uniform::SampleUniform;
use std::fmt::{Debug, Display};

/// A trait representing the floating point types a [`Graph`](crate::Graph) can hold.
///
/// This trait bounds the scalar (`f32` or `f64`) stored in every node. It
/// ensures the type supports the arithmetic the operation constructors and
/// backward rules need, formatting for diagnostics, and uniform sampling for
/// weight initialization.
pub trait Scalar:
    Float // Includes Num + Copy + PartialOrd + exp/powf etc.
    + NumAssignOps // AddAssign, SubAssign, ... used by gradient accumulation
    + SampleUniform
    + Debug
    + Display
    + Send
    + Sync
    + 'static
{
}

impl Scalar for f32 {}
impl Scalar for f64 {}
