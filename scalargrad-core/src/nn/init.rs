use crate::scalar::Scalar;
use rand::Rng;

/// Creates `n` leaf nodes drawn uniformly from `[low, high]`.
///
/// This is the weight initialization used by [`Neuron`](crate::nn::Neuron);
/// biases are created at 0 directly.
pub fn uniform(n: usize, low: f64, high: f64) -> Vec<Scalar> {
    let mut rng = rand::thread_rng();
    (0..n)
        .map(|_| Scalar::new(rng.gen_range(low..=high)))
        .collect()
}

// --- Tests ---
#[cfg(test)]
#[path = "init_test.rs"]
mod tests; // Link to the test file
