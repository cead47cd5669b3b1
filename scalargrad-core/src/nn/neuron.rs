use crate::error::ScalarGradError;
use crate::nn::init;
use crate::nn::module::Module;
use crate::scalar::Scalar;
use std::fmt;

/// A single unit computing `dot(weights, inputs) + bias`, with an optional
/// ReLU nonlinearity.
///
/// The neuron owns its parameters; [`Layer`](crate::nn::Layer) and
/// [`MLP`](crate::nn::MLP) only hold neurons, never parameter storage of
/// their own.
#[derive(Debug)]
pub struct Neuron {
    weights: Vec<Scalar>,
    bias: Scalar,
    nonlinear: bool,
}

impl Neuron {
    /// Creates a neuron taking `in_features` inputs.
    ///
    /// Weights are drawn uniformly from [-1, 1]; the bias starts at 0.
    pub fn new(in_features: usize, nonlinear: bool) -> Self {
        Neuron {
            weights: init::uniform(in_features, -1.0, 1.0),
            bias: Scalar::new(0.0),
            nonlinear,
        }
    }

    /// Performs a forward pass over one input vector.
    ///
    /// # Errors
    /// Returns [`ScalarGradError::DimensionMismatch`] if `inputs` does not
    /// have exactly `in_features` elements.
    pub fn forward(&self, inputs: &[Scalar]) -> Result<Scalar, ScalarGradError> {
        if inputs.len() != self.weights.len() {
            return Err(ScalarGradError::DimensionMismatch {
                expected: self.weights.len(),
                actual: inputs.len(),
                operation: "Neuron::forward".to_string(),
            });
        }

        // Accumulate starting from the bias, one fused add per input.
        let mut acc = self.bias.clone();
        for (weight, input) in self.weights.iter().zip(inputs.iter()) {
            acc = &acc + &(weight * input);
        }

        Ok(if self.nonlinear { acc.relu() } else { acc })
    }

    /// Number of inputs this neuron consumes.
    pub fn in_features(&self) -> usize {
        self.weights.len()
    }

    /// Whether the neuron applies ReLU to its pre-activation.
    pub fn is_nonlinear(&self) -> bool {
        self.nonlinear
    }

    /// The weight nodes, in input order.
    pub fn weights(&self) -> &[Scalar] {
        &self.weights
    }

    /// The bias node.
    pub fn bias(&self) -> &Scalar {
        &self.bias
    }
}

impl Module for Neuron {
    fn parameters(&self) -> Vec<Scalar> {
        let mut params: Vec<Scalar> = self.weights.to_vec();
        params.push(self.bias.clone());
        params
    }
}

impl fmt::Display for Neuron {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Neuron(in={}, {})",
            self.weights.len(),
            if self.nonlinear { "relu" } else { "linear" }
        )
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "neuron_test.rs"]
mod tests; // Link to the test file
