//! Operator-friendly handle over a node of a [`Graph`].
//!
//! `Value` bundles a graph reference with a [`NodeId`] so that expressions read like
//! ordinary arithmetic:
//!
//! ```
//! use scalargrad_core::Graph;
//!
//! let graph: Graph = Graph::new();
//! let a = graph.value(2.0);
//! let b = graph.value(3.0);
//! let c = a * b + b.pow(2.0);
//! c.backward();
//! assert_eq!(c.data(), 15.0);
//! assert_eq!(a.grad(), 3.0);
//! assert_eq!(b.grad(), 8.0);
//! ```

mod arithmetic;

use crate::graph::Graph;
use crate::node::NodeId;
use crate::ops::traits::Scalar;
use crate::ops::{Op, Operand};
use std::fmt;

/// Copyable handle to a node, borrowing the graph that owns it.
#[derive(Clone, Copy)]
pub struct Value<'g, T: Scalar = f64> {
    graph: &'g Graph<T>,
    id: NodeId,
}

impl<'g, T: Scalar> Value<'g, T> {
    pub(crate) fn new(graph: &'g Graph<T>, id: NodeId) -> Self {
        Value { graph, id }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn graph(&self) -> &'g Graph<T> {
        self.graph
    }

    /// Forward value.
    pub fn data(&self) -> T {
        self.graph.data_of(self.id)
    }

    /// Accumulated gradient.
    pub fn grad(&self) -> T {
        self.graph.grad_of(self.id)
    }

    pub fn op(&self) -> Op<T> {
        self.graph.nodes.borrow()[self.id.index()].op
    }

    pub fn label(&self) -> Option<String> {
        self.graph.nodes.borrow()[self.id.index()].label.clone()
    }

    /// Sets the debugging label and returns the same handle.
    pub fn with_label(self, label: impl Into<String>) -> Self {
        self.graph.nodes.borrow_mut()[self.id.index()].label = Some(label.into());
        self
    }

    /// `self ^ exponent`. The exponent is a plain constant by construction.
    pub fn pow(self, exponent: T) -> Self {
        self.wrap(self.graph.pow_node(self.id, exponent))
    }

    pub fn tanh(self) -> Self {
        self.wrap(self.graph.tanh_node(self.id))
    }

    pub fn exp(self) -> Self {
        self.wrap(self.graph.exp_node(self.id))
    }

    /// Runs the backward pass with this node as the output. See [`Graph::backward`].
    pub fn backward(&self) {
        crate::autograd::backward::run_backward(&mut self.graph.nodes.borrow_mut(), self.id);
    }

    fn wrap(&self, id: NodeId) -> Self {
        Value::new(self.graph, id)
    }

    /// Promotes a binary right-hand side to a node of this graph.
    ///
    /// # Panics
    /// Panics if `rhs` is a `Value` of another graph.
    fn same_graph(&self, rhs: &Value<'g, T>) -> NodeId {
        assert!(
            std::ptr::eq(self.graph, rhs.graph),
            "cannot combine values from different graphs"
        );
        rhs.id
    }
}

impl<'g, T: Scalar> From<Value<'g, T>> for NodeId {
    fn from(value: Value<'g, T>) -> Self {
        value.id
    }
}

impl<'g, T: Scalar> From<Value<'g, T>> for Operand<T> {
    fn from(value: Value<'g, T>) -> Self {
        Operand::Node(value.id)
    }
}

impl<'g, T: Scalar> From<&Value<'g, T>> for Operand<T> {
    fn from(value: &Value<'g, T>) -> Self {
        Operand::Node(value.id)
    }
}

impl<'g, T: Scalar> fmt::Debug for Value<'g, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Value(data={:?})", self.data())
    }
}

impl<'g, T: Scalar> fmt::Display for Value<'g, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Value(data={}, grad={})", self.data(), self.grad())
    }
}

#[cfg(test)]
#[path = "value_test.rs"]
mod tests;
