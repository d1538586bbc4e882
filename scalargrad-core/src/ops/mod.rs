//! # Scalar Operations Module (`ops`)
//!
//! Every differentiable operation is described twice:
//!
//! - **Forward formula**: [`Op::forward`] computes the node value from the operand values.
//! - **Local gradient rule**: [`Op::local_grads`] returns \( \frac{d\text{out}}{d\text{in}_i} \)
//!   for every operand, given the operand values and the forward result. The backward pass
//!   multiplies each entry by the upstream gradient and accumulates it into the operand.
//!
//! The graph-building entry points (`Graph::add`, `Graph::tanh`, ...) live in the
//! submodules, grouped like the operations themselves:
//!
//! - [`arithmetic`]: add, sub, mul, div, neg, pow.
//! - [`math_elem`]: exp.
//! - [`activation`]: tanh.
//!
//! Composite operations (neg, sub, div) do not get a tag of their own: they are recorded
//! as the primitive nodes they expand to.

pub mod activation;
pub mod arithmetic;
pub mod math_elem;
pub mod traits;

use crate::node::NodeId;
use crate::ops::traits::Scalar;
use std::fmt;

/// Tag identifying how a node was produced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Op<T: Scalar> {
    /// Input or constant, no operands.
    Leaf,
    /// `a + b`
    Add,
    /// `a * b`
    Mul,
    /// `a ^ exponent`, the exponent being a plain constant.
    Pow { exponent: T },
    /// Hyperbolic tangent.
    Tanh,
    /// Natural exponential.
    Exp,
}

impl<T: Scalar> Op<T> {
    /// Number of operands the operation records.
    pub fn arity(&self) -> usize {
        match self {
            Op::Leaf => 0,
            Op::Add | Op::Mul => 2,
            Op::Pow { .. } | Op::Tanh | Op::Exp => 1,
        }
    }

    /// Forward formula. `inputs` holds the operand values in recorded order.
    pub(crate) fn forward(&self, inputs: &[T]) -> T {
        debug_assert_eq!(inputs.len(), self.arity());
        match *self {
            Op::Leaf => T::zero(),
            Op::Add => inputs[0] + inputs[1],
            Op::Mul => inputs[0] * inputs[1],
            Op::Pow { exponent } => inputs[0].powf(exponent),
            Op::Tanh => inputs[0].tanh(),
            Op::Exp => inputs[0].exp(),
        }
    }

    /// Local gradient rule: partial derivative of the output with respect to each operand.
    ///
    /// The result has one entry per operand, in recorded order. `output` is the forward
    /// value of the node, reused by the rules whose derivative is expressed through it
    /// (`tanh`, `exp`).
    pub(crate) fn local_grads(&self, inputs: &[T], output: T) -> Vec<T> {
        debug_assert_eq!(inputs.len(), self.arity());
        match *self {
            Op::Leaf => Vec::new(),
            Op::Add => vec![T::one(), T::one()],
            Op::Mul => vec![inputs[1], inputs[0]],
            Op::Pow { exponent } => vec![exponent * inputs[0].powf(exponent - T::one())],
            Op::Tanh => vec![T::one() - output * output],
            Op::Exp => vec![output],
        }
    }
}

impl<T: Scalar> fmt::Display for Op<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Op::Leaf => write!(f, ""),
            Op::Add => write!(f, "+"),
            Op::Mul => write!(f, "*"),
            Op::Pow { exponent } => write!(f, "**{}", exponent),
            Op::Tanh => write!(f, "tanh"),
            Op::Exp => write!(f, "exp"),
        }
    }
}

/// Argument of a graph operation: either an existing node or a raw constant.
///
/// Binary operations promote a `Constant` to a fresh leaf before recording it.
/// `pow` only accepts a `Constant` exponent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operand<T: Scalar> {
    Node(NodeId),
    Constant(T),
}

impl<T: Scalar> From<NodeId> for Operand<T> {
    fn from(id: NodeId) -> Self {
        Operand::Node(id)
    }
}

impl<T: Scalar> From<&NodeId> for Operand<T> {
    fn from(id: &NodeId) -> Self {
        Operand::Node(*id)
    }
}

macro_rules! impl_constant_operand {
    ($($src:ty => $dst:ty),* $(,)?) => {
        $(
            impl From<$src> for Operand<$dst> {
                fn from(value: $src) -> Self {
                    Operand::Constant(value as $dst)
                }
            }
        )*
    };
}

impl_constant_operand!(
    f64 => f64,
    f32 => f64,
    i32 => f64,
    f32 => f32,
    i32 => f32,
);
