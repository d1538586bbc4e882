use crate::graph::Graph;
use crate::node::{Node, NodeId};
use crate::ops::traits::Scalar;

impl<T: Scalar> Graph<T> {
    /// Pushes a leaf node wrapping `data`, with a zero gradient and no operands.
    pub fn leaf(&self, data: T) -> NodeId {
        self.push(Node::leaf(data))
    }

    /// Pushes a leaf node carrying a debugging label.
    pub fn leaf_labeled(&self, data: T, label: impl Into<String>) -> NodeId {
        let mut node = Node::leaf(data);
        node.label = Some(label.into());
        self.push(node)
    }

    /// Pushes one leaf per value, in iteration order.
    pub fn leaves<I>(&self, values: I) -> Vec<NodeId>
    where
        I: IntoIterator<Item = T>,
    {
        values.into_iter().map(|v| self.leaf(v)).collect()
    }
}
