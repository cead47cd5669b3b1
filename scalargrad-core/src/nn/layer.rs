use crate::error::ScalarGradError;
use crate::nn::module::Module;
use crate::nn::neuron::Neuron;
use crate::scalar::Scalar;
use std::fmt;

/// An ordered collection of [`Neuron`]s all consuming the same input vector.
#[derive(Debug)]
pub struct Layer {
    neurons: Vec<Neuron>,
}

impl Layer {
    /// Creates a layer of `out_features` neurons, each of input size
    /// `in_features`.
    pub fn new(in_features: usize, out_features: usize, nonlinear: bool) -> Self {
        let neurons = (0..out_features)
            .map(|_| Neuron::new(in_features, nonlinear))
            .collect();
        Layer { neurons }
    }

    /// Applies every neuron to the same input.
    ///
    /// Always returns one output per neuron as a `Vec`, including for
    /// single-output layers (no unwrap-to-scalar special case).
    ///
    /// # Errors
    /// Returns [`ScalarGradError::DimensionMismatch`] if `inputs` does not
    /// match the layer's input size.
    pub fn forward(&self, inputs: &[Scalar]) -> Result<Vec<Scalar>, ScalarGradError> {
        self.neurons
            .iter()
            .map(|neuron| neuron.forward(inputs))
            .collect()
    }

    /// Number of inputs each neuron consumes.
    pub fn in_features(&self) -> usize {
        self.neurons.first().map_or(0, |n| n.in_features())
    }

    /// Number of neurons (outputs).
    pub fn out_features(&self) -> usize {
        self.neurons.len()
    }

    /// The neurons, in declared order.
    pub fn neurons(&self) -> &[Neuron] {
        &self.neurons
    }
}

impl Module for Layer {
    fn parameters(&self) -> Vec<Scalar> {
        self.neurons
            .iter()
            .flat_map(|neuron| neuron.parameters())
            .collect()
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = if self.neurons.iter().any(|n| n.is_nonlinear()) {
            "relu"
        } else {
            "linear"
        };
        write!(
            f,
            "Layer({} -> {}, {})",
            self.in_features(),
            self.out_features(),
            kind
        )
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "layer_test.rs"]
mod tests; // Link to the test file
