use crate::error::GradError;
use crate::graph::Graph;
use crate::node::NodeId;
use crate::ops::traits::Scalar;
use crate::ops::{Op, Operand};

impl<T: Scalar> Graph<T> {
    /// Records `a + b`.
    ///
    /// Either side may be a raw scalar, which is first pushed as a leaf.
    /// Backward: both operands receive the upstream gradient unchanged.
    ///
    /// # Errors
    /// `GradError::UnknownNode` if a handle does not belong to this graph; nothing is
    /// pushed in that case.
    pub fn add(
        &self,
        a: impl Into<Operand<T>>,
        b: impl Into<Operand<T>>,
    ) -> Result<NodeId, GradError> {
        let (a, b) = self.resolve_pair(a.into(), b.into())?;
        Ok(self.add_nodes(a, b))
    }

    pub(crate) fn add_nodes(&self, a: NodeId, b: NodeId) -> NodeId {
        self.apply(Op::Add, vec![a, b])
    }
}

#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
