// scalargrad-core/src/ops/arithmetic/pow.rs

use crate::autograd::{accumulate_grad, BackwardOp};
use crate::ops::Op;
use crate::scalar::Scalar;
use std::rc::Rc;

// --- Forward Operation ---

/// Raises `base` to a constant exponent, recording the operation for the
/// backward pass.
///
/// The exponent is a plain `f64`, never another graph node: gradients only
/// flow to the base. The signature enforces this statically.
pub fn pow_op(base: &Scalar, exponent: f64) -> Scalar {
    let data = base.data().powf(exponent);
    let grad_fn = PowBackward {
        base: base.clone(),
        exponent,
    };
    Scalar::from_op(data, Op::Pow, Rc::new(grad_fn))
}

// --- Backward Operation ---

// For z = a^n: grad(a) = n * a^(n-1) * grad_output.
#[derive(Debug)]
struct PowBackward {
    base: Scalar,
    exponent: f64,
}

impl BackwardOp for PowBackward {
    fn backward(&self, upstream: f64) {
        let n = self.exponent;
        let local = n * self.base.data().powf(n - 1.0);
        accumulate_grad(&self.base, local * upstream);
    }

    fn inputs(&self) -> Vec<Scalar> {
        vec![self.base.clone()]
    }
}

// --- Scalar Method ---

impl Scalar {
    /// Raises this node to a constant power. See [`pow_op`].
    pub fn powf(&self, exponent: f64) -> Scalar {
        pow_op(self, exponent)
    }
}

// --- Tests ---
