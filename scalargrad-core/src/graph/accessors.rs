use crate::error::GradError;
use crate::graph::Graph;
use crate::node::{Node, NodeId};
use crate::ops::traits::Scalar;
use crate::ops::Op;

impl<T: Scalar> Graph<T> {
    fn read<R>(&self, id: NodeId, f: impl FnOnce(&Node<T>) -> R) -> Result<R, GradError> {
        let id = self.check(id)?;
        Ok(f(&self.nodes.borrow()[id.index()]))
    }

    /// Forward value of the node.
    pub fn data(&self, id: NodeId) -> Result<T, GradError> {
        self.read(id, |n| n.data)
    }

    /// Accumulated gradient of the node.
    pub fn grad(&self, id: NodeId) -> Result<T, GradError> {
        self.read(id, |n| n.grad)
    }

    /// Operation that produced the node.
    pub fn op(&self, id: NodeId) -> Result<Op<T>, GradError> {
        self.read(id, |n| n.op)
    }

    /// Operand handles of the node, in recorded order.
    pub fn operands(&self, id: NodeId) -> Result<Vec<NodeId>, GradError> {
        self.read(id, |n| n.operands.clone())
    }

    pub fn label(&self, id: NodeId) -> Result<Option<String>, GradError> {
        self.read(id, |n| n.label.clone())
    }

    /// Replaces the debugging label. Labels carry no semantic weight.
    pub fn set_label(&self, id: NodeId, label: impl Into<String>) -> Result<(), GradError> {
        let id = self.check(id)?;
        self.nodes.borrow_mut()[id.index()].label = Some(label.into());
        Ok(())
    }

    /// Snapshot of the whole node record.
    pub fn node(&self, id: NodeId) -> Result<Node<T>, GradError> {
        self.read(id, |n| n.clone())
    }

    // Infallible reads for handles known to belong to this graph (`Value`).
    pub(crate) fn data_of(&self, id: NodeId) -> T {
        self.nodes.borrow()[id.index()].data
    }

    pub(crate) fn grad_of(&self, id: NodeId) -> T {
        self.nodes.borrow()[id.index()].grad
    }
}
