use crate::init;
use crate::module::Module;
use rand::distributions::uniform::SampleUniform;
use rand::Rng;
use scalargrad_core::{GradError, Graph, NodeId, Operand, Scalar};

/// A single tanh unit: `tanh(w · x + b)`.
#[derive(Debug, Clone)]
pub struct Neuron {
    weights: Vec<NodeId>,
    bias: NodeId,
}

impl Neuron {
    /// Creates a neuron with `nin` weights and a bias, all drawn uniformly from `[-1, 1)`.
    pub fn new<T, R>(graph: &Graph<T>, nin: usize, rng: &mut R) -> Result<Self, GradError>
    where
        T: Scalar + SampleUniform,
        R: Rng + ?Sized,
    {
        let weights = init::uniform(graph, nin, -T::one(), T::one(), rng)?;
        let bias = init::uniform(graph, 1, -T::one(), T::one(), rng)?[0];
        Ok(Neuron { weights, bias })
    }

    pub fn weights(&self) -> &[NodeId] {
        &self.weights
    }

    pub fn bias(&self) -> NodeId {
        self.bias
    }

    pub fn nin(&self) -> usize {
        self.weights.len()
    }
}

impl<T: Scalar> Module<T> for Neuron {
    /// Returns a single output handle.
    ///
    /// The weighted sum starts from the bias and adds `wᵢ · xᵢ` in input order.
    ///
    /// # Errors
    /// `GradError::InvalidArgument` if the number of inputs differs from the number of
    /// weights.
    fn forward(&self, graph: &Graph<T>, inputs: &[Operand<T>]) -> Result<Vec<NodeId>, GradError> {
        if inputs.len() != self.weights.len() {
            return Err(GradError::InvalidArgument {
                operation: "Neuron::forward".to_string(),
                reason: format!(
                    "expected {} inputs, got {}",
                    self.weights.len(),
                    inputs.len()
                ),
            });
        }
        let mut act = self.bias;
        for (&w, &x) in self.weights.iter().zip(inputs) {
            let wx = graph.mul(w, x)?;
            act = graph.add(act, wx)?;
        }
        Ok(vec![graph.tanh(act)?])
    }

    fn parameters(&self) -> Vec<NodeId> {
        let mut params = self.weights.clone();
        params.push(self.bias);
        params
    }

    fn named_parameters(&self) -> Vec<(String, NodeId)> {
        let mut named: Vec<(String, NodeId)> = self
            .weights
            .iter()
            .enumerate()
            .map(|(i, &w)| (format!("w.{}", i), w))
            .collect();
        named.push(("b".to_string(), self.bias));
        named
    }
}
