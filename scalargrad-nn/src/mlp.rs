use crate::layer::Layer;
use crate::module::{as_inputs, Module};
use log::debug;
use rand::distributions::uniform::SampleUniform;
use rand::Rng;
use scalargrad_core::{GradError, Graph, NodeId, Operand, Scalar};

/// A stack of fully connected tanh layers.
///
/// `Mlp::new(graph, 3, &[4, 4, 1], rng)` builds 3 → 4 → 4 → 1.
#[derive(Debug, Clone)]
pub struct Mlp {
    layers: Vec<Layer>,
}

impl Mlp {
    /// # Errors
    /// `GradError::InvalidArgument` if `nouts` is empty.
    pub fn new<T, R>(graph: &Graph<T>, nin: usize, nouts: &[usize], rng: &mut R) -> Result<Self, GradError>
    where
        T: Scalar + SampleUniform,
        R: Rng + ?Sized,
    {
        if nouts.is_empty() {
            return Err(GradError::InvalidArgument {
                operation: "Mlp::new".to_string(),
                reason: "at least one layer size is required".to_string(),
            });
        }
        let sizes: Vec<usize> = std::iter::once(nin).chain(nouts.iter().copied()).collect();
        let layers = sizes
            .windows(2)
            .map(|w| Layer::new(graph, w[0], w[1], rng))
            .collect::<Result<Vec<_>, _>>()?;
        let mlp = Mlp { layers };
        debug!(
            "Mlp: sizes {:?}, {} parameters",
            sizes,
            Module::<T>::num_parameters(&mlp)
        );
        Ok(mlp)
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }
}

impl<T: Scalar> Module<T> for Mlp {
    /// Feeds each layer's outputs to the next and returns the last layer's outputs.
    fn forward(&self, graph: &Graph<T>, inputs: &[Operand<T>]) -> Result<Vec<NodeId>, GradError> {
        let mut x: Vec<Operand<T>> = inputs.to_vec();
        let mut out = Vec::new();
        for layer in &self.layers {
            out = layer.forward(graph, &x)?;
            x = as_inputs(&out);
        }
        Ok(out)
    }

    fn parameters(&self) -> Vec<NodeId> {
        self.layers
            .iter()
            .flat_map(|l| Module::<T>::parameters(l))
            .collect()
    }

    fn named_parameters(&self) -> Vec<(String, NodeId)> {
        let mut named = Vec::new();
        for (i, layer) in self.layers.iter().enumerate() {
            for (name, id) in Module::<T>::named_parameters(layer) {
                named.push((format!("layers.{}.{}", i, name), id));
            }
        }
        named
    }
}

#[cfg(test)]
#[path = "mlp_test.rs"]
mod tests;
