use scalargrad_core::nn::MLP;

// Helper to build a deterministic network: every weight set to `weight`,
// every bias to 0. Random initialization is overridden through the shared
// parameter handles.
// Added allow(dead_code) because usage across different test crates isn't
// detected easily.
#[allow(dead_code)]
pub fn constant_mlp(in_features: usize, layer_sizes: &[usize], weight: f64) -> MLP {
    let mlp = MLP::new(in_features, layer_sizes).expect("Test MLP creation failed");
    for layer in mlp.layers() {
        for neuron in layer.neurons() {
            for w in neuron.weights() {
                w.set_data(weight);
            }
            neuron.bias().set_data(0.0);
        }
    }
    mlp
}
