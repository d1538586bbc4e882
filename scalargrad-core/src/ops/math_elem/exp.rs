use crate::error::GradError;
use crate::graph::Graph;
use crate::node::NodeId;
use crate::ops::traits::Scalar;
use crate::ops::Op;

impl<T: Scalar> Graph<T> {
    /// Records \( e^a \).
    ///
    /// Backward: \( \frac{dL}{da} \mathrel{+}= e^a \cdot \frac{dL}{d\text{out}} \), reusing the
    /// forward value.
    pub fn exp(&self, a: impl Into<NodeId>) -> Result<NodeId, GradError> {
        let a = self.check(a.into())?;
        Ok(self.exp_node(a))
    }

    pub(crate) fn exp_node(&self, a: NodeId) -> NodeId {
        self.apply(Op::Exp, vec![a])
    }
}

#[cfg(test)]
mod tests {
    use crate::autograd::{check_grad, GradCheckConfig};
    use crate::error::GradError;
    use crate::graph::Graph;
    use crate::node::NodeId;
    use approx::assert_relative_eq;

    #[test]
    fn test_exp_at_zero() -> Result<(), GradError> {
        let graph: Graph = Graph::new();
        let a = graph.leaf(0.0);
        let e = graph.exp(a)?;
        assert_eq!(graph.data(e)?, 1.0);
        graph.backward(e)?;
        assert_eq!(graph.grad(a)?, 1.0);
        Ok(())
    }

    #[test]
    fn test_exp_forward_and_backward() -> Result<(), GradError> {
        let graph: Graph = Graph::new();
        let a = graph.leaf(1.5);
        let e = graph.exp(a)?;
        let scaled = graph.mul(e, 3.0)?;
        graph.backward(scaled)?;
        assert_relative_eq!(graph.data(e)?, 1.5f64.exp());
        assert_relative_eq!(graph.grad(a)?, 3.0 * 1.5f64.exp());
        Ok(())
    }

    #[test]
    fn test_exp_overflow_propagates() -> Result<(), GradError> {
        let graph: Graph = Graph::new();
        let a = graph.leaf(1000.0);
        let e = graph.exp(a)?;
        graph.backward(e)?;
        assert!(graph.data(e)?.is_infinite());
        assert!(graph.grad(a)?.is_infinite());
        Ok(())
    }

    #[test]
    fn test_exp_grad_check() {
        let func = |g: &Graph, x: &[NodeId]| g.exp(x[0]);
        for x in [-2.0, 0.0, 0.7, 3.0] {
            assert_eq!(
                check_grad(func, &[x], &GradCheckConfig::default()),
                Ok(())
            );
        }
    }
}
