use num_traits::{Float, NumAssignOps};
use std::fmt::{Debug, Display};

/// A trait representing the floating point types a [`Graph`](crate::Graph) can hold.
///
/// Every node stores its forward value and its gradient as a `Scalar`. The bound is
/// strictly reserved to floats (`f32`, `f64`): the operation rules need `powf`, `tanh`
/// and `exp`, all of which come from [`Float`].
pub trait Scalar:
    Float // Includes Num + Copy + NumCast + Neg, zero(), one(), etc.
    + NumAssignOps // AddAssign is what gradient accumulation relies on
    + Debug
    + Display
    + Default
    + 'static
{
}

impl Scalar for f32 {}
impl Scalar for f64 {}
