use crate::error::GradError;
use crate::graph::Graph;
use crate::node::NodeId;
use crate::ops::traits::Scalar;
use crate::ops::Op;

impl<T: Scalar> Graph<T> {
    /// Records the hyperbolic tangent of `a`.
    ///
    /// The forward value `t` comes from `Float::tanh`, which saturates to `±1` for large
    /// inputs instead of overflowing like the \( \frac{e^{2x} - 1}{e^{2x} + 1} \) identity.
    /// Backward: \( \frac{dL}{da} \mathrel{+}= (1 - t^2) \cdot \frac{dL}{d\text{out}} \).
    pub fn tanh(&self, a: impl Into<NodeId>) -> Result<NodeId, GradError> {
        let a = self.check(a.into())?;
        Ok(self.tanh_node(a))
    }

    pub(crate) fn tanh_node(&self, a: NodeId) -> NodeId {
        self.apply(Op::Tanh, vec![a])
    }
}
