// std::ops for Value: x + y, x - y, x * y, x / y, -x, with a raw scalar on either side.
//
// Every operator builds the same nodes as the matching named operation on `Graph`.
// A scalar operand is pushed as a leaf first.

use crate::ops::traits::Scalar;
use crate::value::Value;
use std::ops::{Add, Div, Mul, Neg, Sub};

impl<'g, T: Scalar> Add for Value<'g, T> {
    type Output = Value<'g, T>;

    fn add(self, rhs: Self) -> Self::Output {
        let rhs = self.same_graph(&rhs);
        self.wrap(self.graph.add_nodes(self.id, rhs))
    }
}

impl<'g, T: Scalar> Mul for Value<'g, T> {
    type Output = Value<'g, T>;

    fn mul(self, rhs: Self) -> Self::Output {
        let rhs = self.same_graph(&rhs);
        self.wrap(self.graph.mul_nodes(self.id, rhs))
    }
}

impl<'g, T: Scalar> Sub for Value<'g, T> {
    type Output = Value<'g, T>;

    fn sub(self, rhs: Self) -> Self::Output {
        let rhs = self.same_graph(&rhs);
        self.wrap(self.graph.sub_nodes(self.id, rhs))
    }
}

impl<'g, T: Scalar> Div for Value<'g, T> {
    type Output = Value<'g, T>;

    fn div(self, rhs: Self) -> Self::Output {
        let rhs = self.same_graph(&rhs);
        self.wrap(self.graph.div_nodes(self.id, rhs))
    }
}

impl<'g, T: Scalar> Neg for Value<'g, T> {
    type Output = Value<'g, T>;

    fn neg(self) -> Self::Output {
        self.wrap(self.graph.neg_node(self.id))
    }
}

// Value <op> scalar
macro_rules! impl_scalar_rhs {
    ($($trait:ident :: $method:ident => $node_fn:ident),* $(,)?) => {
        $(
            impl<'g, T: Scalar> $trait<T> for Value<'g, T> {
                type Output = Value<'g, T>;

                fn $method(self, rhs: T) -> Self::Output {
                    let rhs = self.graph.leaf(rhs);
                    self.wrap(self.graph.$node_fn(self.id, rhs))
                }
            }
        )*
    };
}

impl_scalar_rhs!(
    Add::add => add_nodes,
    Sub::sub => sub_nodes,
    Mul::mul => mul_nodes,
    Div::div => div_nodes,
);

// scalar <op> Value, for the concrete float types
macro_rules! impl_scalar_lhs {
    ($($t:ty),*) => {
        $(
            impl<'g> Add<Value<'g, $t>> for $t {
                type Output = Value<'g, $t>;

                fn add(self, rhs: Value<'g, $t>) -> Self::Output {
                    let lhs = rhs.graph.leaf(self);
                    rhs.wrap(rhs.graph.add_nodes(lhs, rhs.id))
                }
            }

            impl<'g> Sub<Value<'g, $t>> for $t {
                type Output = Value<'g, $t>;

                fn sub(self, rhs: Value<'g, $t>) -> Self::Output {
                    let lhs = rhs.graph.leaf(self);
                    rhs.wrap(rhs.graph.sub_nodes(lhs, rhs.id))
                }
            }

            impl<'g> Mul<Value<'g, $t>> for $t {
                type Output = Value<'g, $t>;

                fn mul(self, rhs: Value<'g, $t>) -> Self::Output {
                    let lhs = rhs.graph.leaf(self);
                    rhs.wrap(rhs.graph.mul_nodes(lhs, rhs.id))
                }
            }

            impl<'g> Div<Value<'g, $t>> for $t {
                type Output = Value<'g, $t>;

                fn div(self, rhs: Value<'g, $t>) -> Self::Output {
                    let lhs = rhs.graph.leaf(self);
                    rhs.wrap(rhs.graph.div_nodes(lhs, rhs.id))
                }
            }
        )*
    };
}

impl_scalar_lhs!(f32, f64);
