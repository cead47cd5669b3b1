use super::Neuron;
use crate::error::ScalarGradError;
use crate::nn::module::Module;
use crate::scalar::Scalar;

fn fix_parameters(neuron: &Neuron, weights: &[f64], bias: f64) {
    for (node, value) in neuron.weights().iter().zip(weights.iter()) {
        node.set_data(*value);
    }
    neuron.bias().set_data(bias);
}

#[test]
fn test_new_neuron_initialization() {
    let neuron = Neuron::new(3, true);
    assert_eq!(neuron.in_features(), 3);
    assert!(neuron.is_nonlinear());
    assert_eq!(neuron.bias().data(), 0.0);
    for weight in neuron.weights() {
        assert!(weight.data() >= -1.0 && weight.data() <= 1.0);
    }
}

#[test]
fn test_parameters_order_weights_then_bias() {
    let neuron = Neuron::new(3, true);
    let params = neuron.parameters();
    assert_eq!(params.len(), 4);
    for (param, weight) in params.iter().zip(neuron.weights().iter()) {
        assert!(param.ptr_eq(weight));
    }
    assert!(params[3].ptr_eq(neuron.bias()));
}

#[test]
fn test_forward_linear() {
    let neuron = Neuron::new(2, false);
    fix_parameters(&neuron, &[0.5, -0.5], 0.25);

    let inputs = vec![Scalar::new(2.0), Scalar::new(1.0)];
    let out = neuron.forward(&inputs).unwrap();
    // 0.5*2 - 0.5*1 + 0.25
    assert_eq!(out.data(), 0.75);

    // A linear neuron passes negative pre-activations through.
    let inputs_neg = vec![Scalar::new(-2.0), Scalar::new(1.0)];
    let out_neg = neuron.forward(&inputs_neg).unwrap();
    assert_eq!(out_neg.data(), -1.25);
}

#[test]
fn test_forward_relu_clamps() {
    let neuron = Neuron::new(2, true);
    fix_parameters(&neuron, &[0.5, -0.5], 0.0);

    let inputs = vec![Scalar::new(1.0), Scalar::new(3.0)]; // pre-activation -1
    let out = neuron.forward(&inputs).unwrap();
    assert_eq!(out.data(), 0.0);
}

#[test]
fn test_backward_through_neuron() {
    let neuron = Neuron::new(2, false);
    fix_parameters(&neuron, &[0.5, -0.5], 0.0);

    let inputs = vec![Scalar::new(2.0), Scalar::new(3.0)];
    let out = neuron.forward(&inputs).unwrap();
    out.backward();

    // d(out)/d(w_i) = x_i, d(out)/d(bias) = 1, d(out)/d(x_i) = w_i.
    assert_eq!(neuron.weights()[0].grad(), 2.0);
    assert_eq!(neuron.weights()[1].grad(), 3.0);
    assert_eq!(neuron.bias().grad(), 1.0);
    assert_eq!(inputs[0].grad(), 0.5);
    assert_eq!(inputs[1].grad(), -0.5);
}

#[test]
fn test_forward_dimension_mismatch() {
    let neuron = Neuron::new(3, true);
    let inputs = vec![Scalar::new(1.0), Scalar::new(2.0)];

    match neuron.forward(&inputs) {
        Err(ScalarGradError::DimensionMismatch {
            expected,
            actual,
            operation,
        }) => {
            assert_eq!(expected, 3);
            assert_eq!(actual, 2);
            assert_eq!(operation, "Neuron::forward");
        }
        other => panic!("Expected DimensionMismatch, got {:?}", other),
    }
}

#[test]
fn test_zero_grad_resets_all_parameters() {
    let neuron = Neuron::new(2, false);
    fix_parameters(&neuron, &[1.0, 1.0], 0.0);

    let inputs = vec![Scalar::new(2.0), Scalar::new(3.0)];
    neuron.forward(&inputs).unwrap().backward();
    assert!(neuron.parameters().iter().any(|p| p.grad() != 0.0));

    neuron.zero_grad();
    for param in neuron.parameters() {
        assert_eq!(param.grad(), 0.0);
    }
    // Input nodes are not parameters; their gradients are untouched.
    assert_eq!(inputs[0].grad(), 1.0);
}
