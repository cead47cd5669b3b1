// scalargrad-core/src/ops/activation/relu.rs

use crate::autograd::{accumulate_grad, BackwardOp};
use crate::ops::Op;
use crate::scalar::Scalar;
use std::rc::Rc;

// --- Forward Operation ---

/// Applies the Rectified Linear Unit: `relu(x) = max(0, x)`.
pub fn relu_op(a: &Scalar) -> Scalar {
    let x = a.data();
    let data = if x > 0.0 { x } else { 0.0 };
    let grad_fn = ReluBackward { input: a.clone() };
    Scalar::from_op(data, Op::Relu, Rc::new(grad_fn))
}

impl Scalar {
    /// Applies the ReLU activation. See [`relu_op`].
    pub fn relu(&self) -> Scalar {
        relu_op(self)
    }
}

// --- Backward Operation ---

// Gradient flows only where the unit is active (input > 0, i.e. output > 0);
// the subgradient at exactly 0 is 0.
#[derive(Debug)]
struct ReluBackward {
    input: Scalar,
}

impl BackwardOp for ReluBackward {
    fn backward(&self, upstream: f64) {
        if self.input.data() > 0.0 {
            accumulate_grad(&self.input, upstream);
        }
    }

    fn inputs(&self) -> Vec<Scalar> {
        vec![self.input.clone()]
    }
}

// --- Tests ---
