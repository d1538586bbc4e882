use crate::autograd::backward::run_backward;
use crate::autograd::graph::topological_sort;
use crate::error::GradError;
use crate::graph::Graph;
use crate::node::NodeId;
use crate::ops::traits::Scalar;
use log::debug;

impl<T: Scalar> Graph<T> {
    /// Performs the backward pass starting from `root`.
    ///
    /// Seeds `root`'s gradient with `1` and accumulates the gradient of `root` into every
    /// node reachable from it, each node's rule being applied exactly once.
    ///
    /// Gradients are never reset by this method, only the root is re-seeded to `1`. A
    /// second call on the same root therefore doubles the gradients of the root's direct
    /// operands, while deeper nodes compound because the upstream gradient they receive
    /// already holds the first pass. Use [`Graph::zero_grad`] between passes when that is
    /// not wanted.
    ///
    /// # Errors
    /// Returns `GradError::UnknownNode` if `root` does not belong to this graph.
    pub fn backward(&self, root: NodeId) -> Result<(), GradError> {
        let root = self.check(root)?;
        run_backward(&mut self.nodes.borrow_mut(), root);
        Ok(())
    }

    /// Nodes reachable from `root`, every node listed after all of its operands.
    pub fn topological_order(&self, root: NodeId) -> Result<Vec<NodeId>, GradError> {
        let root = self.check(root)?;
        Ok(topological_sort(&self.nodes.borrow(), root))
    }

    /// Resets the gradient of every node in the graph to zero.
    pub fn zero_grad(&self) {
        debug!("zero_grad over {} nodes", self.len());
        for node in self.nodes.borrow_mut().iter_mut() {
            node.grad = T::zero();
        }
    }

    /// Resets the gradient of the given nodes only (typically a parameter list).
    ///
    /// # Errors
    /// Returns `GradError::UnknownNode` before touching any gradient if one handle does
    /// not belong to this graph.
    pub fn zero_grad_of(&self, ids: &[NodeId]) -> Result<(), GradError> {
        for &id in ids {
            self.check(id)?;
        }
        let mut nodes = self.nodes.borrow_mut();
        for id in ids {
            nodes[id.index()].grad = T::zero();
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "autograd_methods_test.rs"]
mod tests;
