use crate::module::Module;
use crate::neuron::Neuron;
use rand::distributions::uniform::SampleUniform;
use rand::Rng;
use scalargrad_core::{GradError, Graph, NodeId, Operand, Scalar};

/// `nout` neurons reading the same `nin` inputs.
#[derive(Debug, Clone)]
pub struct Layer {
    neurons: Vec<Neuron>,
}

impl Layer {
    pub fn new<T, R>(graph: &Graph<T>, nin: usize, nout: usize, rng: &mut R) -> Result<Self, GradError>
    where
        T: Scalar + SampleUniform,
        R: Rng + ?Sized,
    {
        let neurons = (0..nout)
            .map(|_| Neuron::new(graph, nin, rng))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Layer { neurons })
    }

    pub fn neurons(&self) -> &[Neuron] {
        &self.neurons
    }

    pub fn nin(&self) -> usize {
        self.neurons.first().map_or(0, Neuron::nin)
    }

    pub fn nout(&self) -> usize {
        self.neurons.len()
    }
}

impl<T: Scalar> Module<T> for Layer {
    /// One output handle per neuron, in neuron order.
    fn forward(&self, graph: &Graph<T>, inputs: &[Operand<T>]) -> Result<Vec<NodeId>, GradError> {
        let mut outputs = Vec::with_capacity(self.neurons.len());
        for neuron in &self.neurons {
            outputs.extend(neuron.forward(graph, inputs)?);
        }
        Ok(outputs)
    }

    fn parameters(&self) -> Vec<NodeId> {
        self.neurons
            .iter()
            .flat_map(|n| Module::<T>::parameters(n))
            .collect()
    }

    fn named_parameters(&self) -> Vec<(String, NodeId)> {
        let mut named = Vec::new();
        for (i, neuron) in self.neurons.iter().enumerate() {
            for (name, id) in Module::<T>::named_parameters(neuron) {
                named.push((format!("neurons.{}.{}", i, name), id));
            }
        }
        named
    }
}
