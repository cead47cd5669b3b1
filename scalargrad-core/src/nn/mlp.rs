use crate::error::ScalarGradError;
use crate::nn::layer::Layer;
use crate::nn::module::Module;
use crate::scalar::Scalar;
use std::fmt;

/// A multi-layer perceptron: an ordered chain of [`Layer`]s where each
/// layer's output feeds the next layer's input.
///
/// Every layer applies ReLU except the last, which stays linear so the
/// network can produce unbounded outputs.
#[derive(Debug)]
pub struct MLP {
    layers: Vec<Layer>,
}

impl MLP {
    /// Builds a network from an input dimension and the output dimension of
    /// each successive layer: `MLP::new(2, &[4, 1])` chains 2 -> 4 -> 1.
    ///
    /// # Errors
    /// Returns [`ScalarGradError::EmptyArchitecture`] when `layer_sizes` is
    /// empty.
    pub fn new(in_features: usize, layer_sizes: &[usize]) -> Result<Self, ScalarGradError> {
        if layer_sizes.is_empty() {
            return Err(ScalarGradError::EmptyArchitecture);
        }

        let mut sizes = Vec::with_capacity(layer_sizes.len() + 1);
        sizes.push(in_features);
        sizes.extend_from_slice(layer_sizes);

        let last = layer_sizes.len() - 1;
        let layers = (0..layer_sizes.len())
            .map(|i| Layer::new(sizes[i], sizes[i + 1], i != last))
            .collect();

        log::debug!("built MLP with sizes {:?}", sizes);
        Ok(MLP { layers })
    }

    /// Pipes `inputs` through the layers in order.
    ///
    /// # Errors
    /// Returns [`ScalarGradError::DimensionMismatch`] if `inputs` does not
    /// match the first layer's input size.
    pub fn forward(&self, inputs: &[Scalar]) -> Result<Vec<Scalar>, ScalarGradError> {
        let mut activations: Vec<Scalar> = inputs.to_vec();
        for layer in &self.layers {
            activations = layer.forward(&activations)?;
        }
        Ok(activations)
    }

    /// Input dimension of the network.
    pub fn in_features(&self) -> usize {
        self.layers[0].in_features()
    }

    /// Output dimension of the network.
    pub fn out_features(&self) -> usize {
        self.layers[self.layers.len() - 1].out_features()
    }

    /// The layers, in declared order.
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }
}

impl Module for MLP {
    fn parameters(&self) -> Vec<Scalar> {
        self.layers
            .iter()
            .flat_map(|layer| layer.parameters())
            .collect()
    }
}

impl fmt::Display for MLP {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MLP({}", self.in_features())?;
        for layer in &self.layers {
            write!(f, " -> {}", layer.out_features())?;
        }
        write!(f, ")")
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "mlp_test.rs"]
mod tests; // Link to the test file
