use crate::ops::traits::Scalar;
use crate::ops::Op;
use std::fmt;

/// Stable handle of a node inside a [`Graph`](crate::Graph) arena.
///
/// Handles are only minted by the graph that pushed the node and carry that graph's
/// identity, so a handle presented to another graph is rejected. Within one graph they
/// are ordered by creation: an operand always has a smaller handle than every node
/// recording it, which is what keeps the operand graph acyclic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId {
    graph: usize,
    index: usize,
}

impl NodeId {
    pub(crate) fn new(graph: usize, index: usize) -> Self {
        NodeId { graph, index }
    }

    /// Position of the node in its arena.
    pub fn index(self) -> usize {
        self.index
    }

    /// Identity of the graph that minted the handle.
    pub(crate) fn graph(self) -> usize {
        self.graph
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.index)
    }
}

/// A single scalar node of the computation graph.
///
/// `data`, `op` and `operands` are fixed when the node is pushed. Only `grad`
/// changes afterwards, and only through the backward pass or an explicit reset.
#[derive(Debug, Clone, PartialEq)]
pub struct Node<T: Scalar> {
    /// Forward value.
    pub(crate) data: T,
    /// Accumulated gradient of the last backward root with respect to this node.
    pub(crate) grad: T,
    /// Operation that produced the node (`Op::Leaf` for inputs and constants).
    pub(crate) op: Op<T>,
    /// Handles of the nodes this one was computed from, in call order.
    pub(crate) operands: Vec<NodeId>,
    /// Optional debugging name.
    pub(crate) label: Option<String>,
}

impl<T: Scalar> Node<T> {
    pub(crate) fn leaf(data: T) -> Self {
        Node {
            data,
            grad: T::zero(),
            op: Op::Leaf,
            operands: Vec::new(),
            label: None,
        }
    }

    pub(crate) fn from_op(data: T, op: Op<T>, operands: Vec<NodeId>) -> Self {
        Node {
            data,
            grad: T::zero(),
            op,
            operands,
            label: None,
        }
    }

    pub fn data(&self) -> T {
        self.data
    }

    pub fn grad(&self) -> T {
        self.grad
    }

    pub fn op(&self) -> &Op<T> {
        &self.op
    }

    pub fn operands(&self) -> &[NodeId] {
        &self.operands
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn is_leaf(&self) -> bool {
        self.operands.is_empty()
    }
}
